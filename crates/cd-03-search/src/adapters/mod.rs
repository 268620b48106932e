//! Adapters Layer
//!
//! - `MemoryHistory`: in-process session history implementing
//!   `NavigationHistory`, with back/forward that announce `HistoryPopped`

pub mod memory_history;

pub use memory_history::MemoryHistory;
