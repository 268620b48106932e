//! Search state.
//!
//! Tracks the active query parameter, the text shown in the input and a
//! sequence number per issued search. Only the most recently issued search
//! may update the list.

use serde::Serialize;
use shared_types::Location;

/// How an issued search touches the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// No query was active: add an entry.
    Push,
    /// A query was already active: overwrite the current entry.
    Replace,
}

/// One issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub mode: HistoryMode,
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    query_param: Option<String>,
    input_text: String,
    issued: u64,
    applied: u64,
}

impl SearchState {
    /// State matching a location that is already shown.
    #[must_use]
    pub fn at(location: &Location) -> Self {
        let mut state = Self::default();
        state.resync(location.query.as_deref());
        state
    }

    #[must_use]
    pub fn query_param(&self) -> Option<&str> {
        self.query_param.as_deref()
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// An issued search has not been resolved or superseded yet.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.applied < self.issued
    }

    /// Record a new search for `text`.
    pub fn issue(&mut self, text: &str) -> SearchTicket {
        let mode = match self.query_param {
            None => HistoryMode::Push,
            Some(_) => HistoryMode::Replace,
        };
        self.issued += 1;
        self.query_param = Some(text.to_string());
        self.input_text = text.to_string();

        SearchTicket {
            seq: self.issued,
            mode,
            location: Location::index().with_query(Some(text.to_string())),
        }
    }

    /// Whether the resolution of `seq` may be shown. Marks it resolved.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq != self.issued {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Follow an external change of the query parameter. Searches still in
    /// flight are superseded.
    pub fn resync(&mut self, query: Option<&str>) {
        self.query_param = query.map(str::to_string);
        self.input_text = query.unwrap_or_default().to_string();
        self.issued += 1;
        self.applied = self.issued;
    }
}
