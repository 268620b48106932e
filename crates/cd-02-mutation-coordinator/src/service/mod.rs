//! Service Layer - Mutation Coordinator
//!
//! - `screen`: the single rendered view, shared by every loader
//! - `loader`: reads a location's data from the store
//! - `coordinator`: the submit/settle/revalidate state machine
//! - `fetcher`: keyed submissions that never navigate

pub mod coordinator;
pub mod fetcher;
pub mod loader;
pub mod screen;

pub use coordinator::{MutationCoordinator, MutationReport, NavigationOutcome};
pub use fetcher::Fetcher;
pub use loader::load_view;
pub use screen::Screen;
