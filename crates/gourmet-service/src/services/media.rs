//! Staged media writes
//!
//! Uploaded files are written before the owning row, so a failed insert or update
//! must remove what was written. Files replaced by a successful update are removed
//! once the row points at the new path.

use gourmet_core::traits::MediaStore;
use tracing::warn;

use super::error::ServiceResult;

/// Files written during one operation
pub(crate) struct StagedMedia<'a> {
    store: &'a dyn MediaStore,
    saved: Vec<String>,
    replaced: Vec<String>,
}

impl<'a> StagedMedia<'a> {
    pub(crate) fn new(store: &'a dyn MediaStore) -> Self {
        Self {
            store,
            saved: Vec::new(),
            replaced: Vec::new(),
        }
    }

    /// Write a new file that no row references yet
    pub(crate) async fn save(&mut self, path: &str, content: &[u8]) -> ServiceResult<String> {
        let stored = self.store.save(path, content).await?;
        self.saved.push(stored.clone());
        Ok(stored)
    }

    /// Write a file that takes the place of `previous`
    ///
    /// When the path is unchanged the file is overwritten in place and cannot be
    /// rolled back.
    pub(crate) async fn replace(
        &mut self,
        previous: Option<&str>,
        path: &str,
        content: &[u8],
    ) -> ServiceResult<String> {
        if previous == Some(path) {
            return Ok(self.store.save(path, content).await?);
        }

        let stored = self.save(path, content).await?;
        if let Some(previous) = previous {
            self.replaced.push(previous.to_string());
        }
        Ok(stored)
    }

    /// Keep the new files and remove the ones they replaced
    pub(crate) async fn commit(self) {
        for path in &self.replaced {
            remove_quietly(self.store, path).await;
        }
    }

    /// Remove every file written by this stage
    pub(crate) async fn rollback(self) {
        for path in &self.saved {
            remove_quietly(self.store, path).await;
        }
    }
}

/// Best-effort delete, logging failures
pub(crate) async fn remove_quietly(store: &dyn MediaStore, path: &str) {
    if let Err(e) = store.delete(path).await {
        warn!(path = %path, error = %e, "Failed to remove media file");
    }
}
