use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::RwLock};

use crate::errors::StoreError;

/// Generic JSON file-backed ordered collection.
///
/// Keeps a `Vec<T>` in memory and mirrors it to a JSON array on disk.
/// Every mutation holds the write lock until the file has been written, so
/// writers are serialized and readers never see a change that failed to
/// persist. The file is overwritten in place; there is no temp-file rename.
#[derive(Clone)]
pub struct JsonVecStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: PathBuf,
}

impl<T> JsonVecStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync,
{
    /// Open the store and load the backing file. The file must exist and
    /// hold a JSON array of `T`.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let store = Self { inner: Arc::new(RwLock::new(Vec::new())), file_path: path.into() };
        store.load().await?;
        Ok(Arc::new(store))
    }

    /// Re-read the backing file and replace the in-memory collection.
    /// On error the current collection is left as is.
    pub async fn load(&self) -> Result<usize, StoreError> {
        let items = read_items(&self.file_path).await?;
        let mut guard = self.inner.write().await;
        *guard = items;
        Ok(guard.len())
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Clone of the whole collection in order.
    pub async fn snapshot(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    /// First element matching `pred`, in collection order.
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let guard = self.inner.read().await;
        guard.iter().find(|item| pred(item)).cloned()
    }

    /// Append at the end and persist. The element is removed again if the
    /// write fails.
    pub async fn push(&self, item: T) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard.push(item);
        if let Err(e) = write_items(&self.file_path, &guard).await {
            guard.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Apply `f` to a staged copy, persist it, then make it visible.
    ///
    /// If `f` returns an error nothing is written. If the write fails the
    /// visible collection keeps its previous contents.
    pub async fn modify<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, StoreError>,
    {
        let mut guard = self.inner.write().await;
        let mut staged = guard.clone();
        let out = f(&mut staged)?;
        write_items(&self.file_path, &staged).await?;
        *guard = staged;
        Ok(out)
    }
}

async fn read_items<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| StoreError::Io(format!("read {}: {e}", path.display())))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| StoreError::Decode(format!("{}: {e}", path.display())))
}

/// Encode the whole collection and overwrite the backing file.
async fn write_items<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let data = serde_json::to_vec(items).map_err(|e| StoreError::Encode(e.to_string()))?;
    fs::write(path, data)
        .await
        .map_err(|e| StoreError::Io(format!("write {}: {e}", path.display())))
}
