use std::{path::PathBuf, sync::Arc};

use tracing::{error, info};

use crate::errors::StoreError;
use crate::storage::json_vec_store::JsonVecStore;
use crate::values::{ReferenceValue, ReferenceValueFields, ReferenceValueStore};

/// File-backed reference value store.
/// Keeps the ordered list of records persisted as a JSON array.
#[derive(Clone)]
pub struct FileReferenceStore {
    store: Arc<JsonVecStore<ReferenceValue>>,
}

impl FileReferenceStore {
    /// Load the store from the given file. A missing or malformed file is an error.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let store = JsonVecStore::<ReferenceValue>::open(path).await?;
        let count = store.len().await;
        info!(path = %store.path().display(), count, "reference values loaded");
        Ok(Arc::new(Self { store }))
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }
}

#[async_trait::async_trait]
impl ReferenceValueStore for FileReferenceStore {
    async fn list(&self) -> Vec<ReferenceValue> {
        self.store.snapshot().await
    }

    async fn find_by_id(&self, id: &str) -> Option<ReferenceValue> {
        self.store.find(|v| v.id == id).await
    }

    async fn append(&self, value: ReferenceValue) -> Result<ReferenceValue, StoreError> {
        self.store.push(value.clone()).await.map_err(|e| {
            error!(id = %value.id, error = %e, "failed to persist new reference value");
            e
        })?;
        Ok(value)
    }

    async fn replace_fields(&self, id: &str, fields: ReferenceValueFields) -> Result<ReferenceValue, StoreError> {
        self.store
            .modify(|values| {
                let existing = values
                    .iter_mut()
                    .find(|v| v.id == id)
                    .ok_or_else(|| StoreError::not_found("reference value", id))?;
                existing.apply(fields);
                Ok(existing.clone())
            })
            .await
            .map_err(|e| {
                if e.is_persist_failure() {
                    error!(%id, error = %e, "failed to persist updated reference value");
                }
                e
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn gold() -> ReferenceValue {
        ReferenceValue {
            id: "x1".into(),
            name: "Gold".into(),
            reference: 1900.5,
            description: "d".into(),
            image_url: "u".into(),
        }
    }

    fn gold2() -> ReferenceValueFields {
        ReferenceValueFields {
            name: "Gold2".into(),
            reference: 1950.0,
            description: "d2".into(),
            image_url: "u2".into(),
        }
    }

    async fn empty_store() -> Result<(Arc<FileReferenceStore>, PathBuf), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("reference_values_{}.json", Uuid::new_v4()));
        tokio::fs::write(&tmp, b"[]").await?;
        Ok((FileReferenceStore::open(&tmp).await?, tmp))
    }

    #[tokio::test]
    async fn append_then_find() -> Result<(), anyhow::Error> {
        let (store, tmp) = empty_store().await?;
        let created = store.append(gold()).await?;
        assert_eq!(created, gold());
        assert_eq!(store.find_by_id("x1").await, Some(gold()));
        assert_eq!(store.find_by_id("nope").await, None);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_ids_are_kept_and_first_wins() -> Result<(), anyhow::Error> {
        let (store, tmp) = empty_store().await?;
        store.append(gold()).await?;
        let mut other = gold();
        other.name = "Second".into();
        store.append(other).await?;
        assert_eq!(store.len().await, 2);
        assert_eq!(store.find_by_id("x1").await.map(|v| v.name), Some("Gold".to_string()));

        let updated = store.replace_fields("x1", gold2()).await?;
        assert_eq!(updated.name, "Gold2");
        let names: Vec<String> = store.list().await.into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Gold2", "Second"]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn replace_fields_keeps_id_and_is_idempotent() -> Result<(), anyhow::Error> {
        let (store, tmp) = empty_store().await?;
        store.append(gold()).await?;

        let first = store.replace_fields("x1", gold2()).await?;
        let after_first = store.list().await;
        let second = store.replace_fields("x1", gold2()).await?;
        assert_eq!(first, second);
        assert_eq!(after_first, store.list().await);
        assert_eq!(first.id, "x1");
        assert_eq!(first.description, "d2");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn replace_fields_unknown_id_changes_nothing() -> Result<(), anyhow::Error> {
        let (store, tmp) = empty_store().await?;
        store.append(gold()).await?;
        let before = store.list().await;

        let err = store.replace_fields("does-not-exist", gold2()).await.err();
        assert!(matches!(err, Some(StoreError::NotFound(_))));
        assert_eq!(store.list().await, before);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn reopen_round_trips_order() -> Result<(), anyhow::Error> {
        let (store, tmp) = empty_store().await?;
        for i in 0..5 {
            let mut v = gold();
            v.id = format!("id-{i}");
            v.reference = i as f64 * 1.5;
            store.append(v).await?;
        }
        let written = store.list().await;

        let reopened = FileReferenceStore::open(&tmp).await?;
        assert_eq!(reopened.list().await, written);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
