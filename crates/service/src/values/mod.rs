//! Reference value records and the store abstraction handlers depend on.

pub mod model;
pub mod store;

pub use model::{ReferenceValue, ReferenceValueFields};
pub use store::ReferenceValueStore;
