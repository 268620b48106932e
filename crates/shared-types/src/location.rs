//! # Locations
//!
//! A `Location` is a route plus the optional `q` search parameter. Locations
//! render to and parse from URLs such as `/contacts/abc/edit?q=al`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::entities::ContactId;
use crate::errors::ValidationError;

const CONTACTS_PREFIX: &str = "/contacts/";
const EDIT_SUFFIX: &str = "/edit";
const QUERY_PARAM: &str = "q";

/// Route part of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Index,
    /// `/contacts/{id}`
    Contact(ContactId),
    /// `/contacts/{id}/edit`
    EditContact(ContactId),
}

/// Route plus search parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub route: Route,
    /// Raw `q` value. `Some("")` is distinct from `None`.
    pub query: Option<String>,
}

impl Location {
    #[must_use]
    pub fn index() -> Self {
        Self {
            route: Route::Index,
            query: None,
        }
    }

    #[must_use]
    pub fn contact(id: ContactId) -> Self {
        Self {
            route: Route::Contact(id),
            query: None,
        }
    }

    #[must_use]
    pub fn edit(id: ContactId) -> Self {
        Self {
            route: Route::EditContact(id),
            query: None,
        }
    }

    /// Same route with the given search parameter.
    #[must_use]
    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// Contact targeted by the route, if any.
    #[must_use]
    pub fn contact_id(&self) -> Option<&ContactId> {
        match &self.route {
            Route::Index => None,
            Route::Contact(id) | Route::EditContact(id) => Some(id),
        }
    }

    /// Render as a URL path with query string.
    #[must_use]
    pub fn href(&self) -> String {
        let mut href = match &self.route {
            Route::Index => "/".to_string(),
            Route::Contact(id) => format!("{CONTACTS_PREFIX}{id}"),
            Route::EditContact(id) => format!("{CONTACTS_PREFIX}{id}{EDIT_SUFFIX}"),
        };
        if let Some(query) = &self.query {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .append_pair(QUERY_PARAM, query)
                .finish();
            href.push('?');
            href.push_str(&encoded);
        }
        href
    }

    /// Parse a URL path with optional query string.
    pub fn parse(href: &str) -> Result<Self, ValidationError> {
        let (path, search) = match href.split_once('?') {
            Some((path, search)) => (path, Some(search)),
            None => (href, None),
        };

        let route = parse_route(path)?;
        let query = search.and_then(|search| {
            form_urlencoded::parse(search.as_bytes())
                .find(|(key, _)| key == QUERY_PARAM)
                .map(|(_, value)| value.into_owned())
        });

        Ok(Self { route, query })
    }
}

fn parse_route(path: &str) -> Result<Route, ValidationError> {
    if path.is_empty() || path == "/" {
        return Ok(Route::Index);
    }

    let Some(rest) = path.strip_prefix(CONTACTS_PREFIX) else {
        return Err(ValidationError::UnknownRoute(path.to_string()));
    };

    if let Some(id) = rest.strip_suffix(EDIT_SUFFIX) {
        return ContactId::parse(Some(id)).map(Route::EditContact);
    }
    if rest.contains('/') {
        return Err(ValidationError::UnknownRoute(path.to_string()));
    }
    ContactId::parse(Some(rest)).map(Route::Contact)
}

impl Default for Location {
    fn default() -> Self {
        Self::index()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl FromStr for Location {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
