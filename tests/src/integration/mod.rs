//! Integration flows across the store, coordinator, search and runtime crates.

mod mutation_flows;
mod runtime_flows;
mod search_flows;
mod store_properties;
