use async_trait::async_trait;

use crate::errors::StoreError;
use crate::values::model::{ReferenceValue, ReferenceValueFields};

/// Trait abstraction for reference value storage.
///
/// Mutating methods persist before returning. When persisting fails they
/// return the error and leave the visible collection unchanged.
#[async_trait]
pub trait ReferenceValueStore: Send + Sync {
    /// Whole collection in insertion order.
    async fn list(&self) -> Vec<ReferenceValue>;
    /// First record with this id, in collection order.
    async fn find_by_id(&self, id: &str) -> Option<ReferenceValue>;
    /// Append without any uniqueness check.
    async fn append(&self, value: ReferenceValue) -> Result<ReferenceValue, StoreError>;
    /// Overwrite the mutable fields of the first record with this id.
    async fn replace_fields(&self, id: &str, fields: ReferenceValueFields) -> Result<ReferenceValue, StoreError>;
}
