//! Shared building blocks for the customer backend crates.

pub mod types;
pub mod utils;
pub mod metrics;
