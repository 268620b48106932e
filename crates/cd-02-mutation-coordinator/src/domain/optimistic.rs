//! Optimistic display resolution.
//!
//! While a request carrying a payload is in flight, the submitted value is
//! shown in place of the authoritative one. Once the request-state returns to
//! Idle, the authoritative value (as re-read by revalidation) wins again. A
//! rejected mutation therefore appears to succeed until revalidation
//! completes, then reverts.

use shared_types::Contact;

use super::mutation::Mutation;
use super::request_state::RequestState;

/// Stateless resolver over a request-state snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimisticStateResolver;

impl OptimisticStateResolver {
    /// Pick the submitted value when the in-flight payload supplies one.
    pub fn resolve<T, F>(state: &RequestState, authoritative: T, submitted: F) -> T
    where
        F: FnOnce(&Mutation) -> Option<T>,
    {
        state
            .submission()
            .and_then(|submission| submitted(&submission.mutation))
            .unwrap_or(authoritative)
    }

    /// Displayed favorite flag for `contact`.
    #[must_use]
    pub fn favorite(state: &RequestState, contact: &Contact) -> bool {
        Self::resolve(state, contact.favorite, |mutation| {
            mutation.favorite_for(&contact.id)
        })
    }

    /// `contact` with any in-flight patch for it overlaid.
    #[must_use]
    pub fn contact(state: &RequestState, contact: &Contact) -> Contact {
        let mut shown = contact.clone();
        if let Some(patch) = state
            .submission()
            .and_then(|submission| submission.mutation.patch_for(&contact.id))
        {
            shown.apply(patch);
        }
        shown
    }
}
