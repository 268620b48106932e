//! # Core Domain Entities
//!
//! Defines the contact record and the partial update applied to it.
//!
//! ## Invariants
//!
//! - `id` and `created_at` never change after creation.
//! - `ContactPatch` only touches the fields it carries.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Opaque contact identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Parse an identifier taken from a request parameter.
    ///
    /// A missing or blank parameter is a `ValidationError`; the request must
    /// not reach the store.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() => Ok(Self(id.to_string())),
            _ => Err(ValidationError::MissingContactId),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier.
    pub id: ContactId,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
    /// Social handle, without the leading `@`.
    pub twitter: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Free-form notes.
    pub notes: String,
    /// Favorite flag.
    pub favorite: bool,
    /// Creation time, also the ordering key.
    pub created_at: Timestamp,
}

impl Contact {
    /// A blank contact, as produced by the "new contact" operation.
    #[must_use]
    pub fn empty(id: ContactId, created_at: Timestamp) -> Self {
        Self {
            id,
            first: String::new(),
            last: String::new(),
            twitter: String::new(),
            avatar: String::new(),
            notes: String::new(),
            favorite: false,
            created_at,
        }
    }

    /// Merge the supplied fields into this record.
    ///
    /// Returns `true` if any field actually changed.
    pub fn apply(&mut self, patch: &ContactPatch) -> bool {
        let before = self.clone();

        if let Some(first) = &patch.first {
            self.first.clone_from(first);
        }
        if let Some(last) = &patch.last {
            self.last.clone_from(last);
        }
        if let Some(twitter) = &patch.twitter {
            self.twitter.clone_from(twitter);
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar.clone_from(avatar);
        }
        if let Some(notes) = &patch.notes {
            self.notes.clone_from(notes);
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = favorite;
        }

        *self != before
    }

    /// Case-insensitive substring match against `first` or `last`.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.first.to_lowercase().contains(needle) || self.last.to_lowercase().contains(needle)
    }

    /// Name shown in lists, or `None` when both name fields are blank.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let name = format!("{} {}", self.first, self.last);
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl ContactPatch {
    /// Patch that only sets the favorite flag.
    #[must_use]
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }

    /// Builder-style method to set the first name.
    #[must_use]
    pub fn with_first(mut self, first: impl Into<String>) -> Self {
        self.first = Some(first.into());
        self
    }

    /// Builder-style method to set the last name.
    #[must_use]
    pub fn with_last(mut self, last: impl Into<String>) -> Self {
        self.last = Some(last.into());
        self
    }

    /// Builder-style method to set the social handle.
    #[must_use]
    pub fn with_twitter(mut self, twitter: impl Into<String>) -> Self {
        self.twitter = Some(twitter.into());
        self
    }

    /// Builder-style method to set the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builder-style method to set the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True when no field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a patch from submitted form fields.
    ///
    /// `favorite` accepts `true`/`false`; every other known field takes the
    /// raw text.
    pub fn from_form<'a, I>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut patch = Self::default();
        for (name, value) in fields {
            match name {
                "first" => patch.first = Some(value.to_string()),
                "last" => patch.last = Some(value.to_string()),
                "twitter" => patch.twitter = Some(value.to_string()),
                "avatar" => patch.avatar = Some(value.to_string()),
                "notes" => patch.notes = Some(value.to_string()),
                "favorite" => {
                    let flag = value.parse::<bool>().map_err(|_| ValidationError::InvalidValue {
                        field: name.to_string(),
                        value: value.to_string(),
                    })?;
                    patch.favorite = Some(flag);
                }
                other => return Err(ValidationError::UnknownField(other.to_string())),
            }
        }
        Ok(patch)
    }
}
