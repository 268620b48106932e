//! Route loaders.
//!
//! Every route loads the sidebar list filtered by `q`; contact routes also
//! load the selected contact. A missing contact is part of the view, not an
//! error.

use cd_01_contact_store::ContactStoreApi;
use shared_types::{Location, StoreError};
use tracing::debug;

use crate::domain::{Detail, ViewState};

/// Read everything `location` renders.
pub async fn load_view(
    store: &dyn ContactStoreApi,
    location: &Location,
) -> Result<ViewState, StoreError> {
    let contacts = store.list(location.query.as_deref()).await?;

    let detail = match location.contact_id() {
        Some(id) => match store.get(id).await {
            Ok(contact) => Some(Detail::Found(contact)),
            Err(err) if err.is_not_found() => Some(Detail::NotFound(id.clone())),
            Err(err) => return Err(err),
        },
        None => None,
    };

    debug!(location = %location, contacts = contacts.len(), "View loaded");
    Ok(ViewState::new(location.clone(), contacts, detail))
}
