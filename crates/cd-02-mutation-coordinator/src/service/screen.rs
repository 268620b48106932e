//! The rendered view.
//!
//! Every load that completes is shown here, whichever request started it.
//! Subscribers observe each new revision.

use shared_types::{Contact, Location, StoreError};
use tokio::sync::watch;

use crate::domain::{Detail, ViewState};

/// Holder of the current `ViewState`.
#[derive(Debug)]
pub struct Screen {
    view: watch::Sender<ViewState>,
}

impl Screen {
    pub fn new(location: Location) -> Self {
        let (view, _) = watch::channel(ViewState::new(location, Vec::new(), None));
        Self { view }
    }

    #[must_use]
    pub fn current(&self) -> ViewState {
        self.view.borrow().clone()
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.view.borrow().location.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    /// Replace the view wholesale. Returns what is now shown.
    pub fn show(&self, view: ViewState) -> ViewState {
        self.commit(|current| {
            let revision = current.revision + 1;
            *current = view;
            current.revision = revision;
        })
    }

    /// Show a failed load. The previous data stays visible; the detail pane is
    /// dropped when the location changed.
    pub fn show_error(&self, location: Location, error: StoreError) -> ViewState {
        self.commit(|current| {
            if current.location.route != location.route {
                current.detail = None;
            }
            current.location = location;
            current.error = Some(error);
            current.revision += 1;
        })
    }

    /// Show a list-only view, as produced by a search.
    pub fn show_contacts(&self, location: Location, contacts: Vec<Contact>) -> ViewState {
        self.show(ViewState::new(location, contacts, None))
    }

    /// Show a detail pane without touching the list.
    pub fn show_detail(&self, location: Location, detail: Detail) -> ViewState {
        self.commit(|current| {
            current.location = location;
            current.detail = Some(detail);
            current.error = None;
            current.revision += 1;
        })
    }

    fn commit<F>(&self, modify: F) -> ViewState
    where
        F: FnOnce(&mut ViewState),
    {
        self.view.send_modify(modify);
        self.current()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(Location::index())
    }
}
