//! Request-state signal.
//!
//! ```text
//! [Idle] ──submit──→ [Submitting{submission}] ──settle──→ [Loading{location, submission}]
//!   ↑                                                              │
//!   └──────────────────────── revalidated ─────────────────────────┘
//! ```
//!
//! Plain navigations skip `Submitting` and load without a submission.

use std::fmt;

use serde::Serialize;
use shared_types::Location;

use super::mutation::Mutation;

/// Identifier of a submission or navigation, unique per coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// In-flight mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: RequestId,
    pub mutation: Mutation,
}

/// State exposed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    /// Submitted; the store has not settled it yet.
    Submitting { submission: Submission },
    /// Settled (or navigating); the revalidating read is in flight.
    Loading {
        location: Location,
        submission: Option<Submission>,
    },
}

impl RequestState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The in-flight payload while submitting or loading after a submission.
    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        match self {
            Self::Idle => None,
            Self::Submitting { submission } => Some(submission),
            Self::Loading { submission, .. } => submission.as_ref(),
        }
    }

    /// Location being loaded, if any.
    #[must_use]
    pub fn loading_location(&self) -> Option<&Location> {
        match self {
            Self::Loading { location, .. } => Some(location),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting { .. } => "submitting",
            Self::Loading { .. } => "loading",
        }
    }
}
