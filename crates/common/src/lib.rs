//! Shared building blocks for the reference values service.

pub mod types;
pub mod utils;
