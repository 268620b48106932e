//! Rendered view state.

use serde::{Serialize, Serializer};
use shared_types::{Contact, ContactId, Location, StoreError};

/// Detail pane of a contact route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Detail {
    Found(Contact),
    NotFound(ContactId),
}

/// Everything the presentation layer renders for one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub location: Location,
    /// Sidebar list, filtered by the location's query.
    pub contacts: Vec<Contact>,
    pub detail: Option<Detail>,
    /// Set when the last load failed; the data above is from the previous load.
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<StoreError>,
    /// Bumped every time a new view is shown.
    pub revision: u64,
}

impl ViewState {
    #[must_use]
    pub fn new(location: Location, contacts: Vec<Contact>, detail: Option<Detail>) -> Self {
        Self {
            location,
            contacts,
            detail,
            error: None,
            revision: 0,
        }
    }

    /// Contact from the list or the detail pane.
    #[must_use]
    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        if let Some(Detail::Found(contact)) = &self.detail {
            if &contact.id == id {
                return Some(contact);
            }
        }
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    #[must_use]
    pub fn detail_contact(&self) -> Option<&Contact> {
        match &self.detail {
            Some(Detail::Found(contact)) => Some(contact),
            _ => None,
        }
    }
}

fn serialize_error<S>(error: &Option<StoreError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
