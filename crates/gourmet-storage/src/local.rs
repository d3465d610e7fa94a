//! Local file system media store

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use gourmet_core::error::DomainError;
use gourmet_core::traits::{MediaStore, RepoResult};

/// Stores media files below a root directory
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    media_url: String,
}

impl LocalMediaStore {
    /// Open a store rooted at `root`, creating the directory if needed
    ///
    /// `media_url` is the public prefix files are served under, e.g. `/media/`.
    pub async fn open(root: impl Into<PathBuf>, media_url: &str) -> RepoResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            DomainError::StorageError(format!("cannot create {}: {e}", root.display()))
        })?;

        let media_url = if media_url.ends_with('/') {
            media_url.to_string()
        } else {
            format!("{media_url}/")
        };

        Ok(Self { root, media_url })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative media path below the root
    ///
    /// Only plain relative components are accepted, so `..`, `.` and absolute
    /// paths cannot escape the root.
    fn resolve(&self, path: &str) -> RepoResult<PathBuf> {
        let relative = Path::new(path);
        let valid = !path.is_empty()
            && !path.contains('\\')
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if valid {
            Ok(self.root.join(relative))
        } else {
            Err(DomainError::InvalidMediaPath(path.to_string()))
        }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    #[instrument(skip(self, content), fields(size = content.len()))]
    async fn save(&self, path: &str, content: &[u8]) -> RepoResult<String> {
        let full = self.resolve(path)?;

        // Create parent directories if they don't exist
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::StorageError(e.to_string()))?;
        }

        fs::write(&full, content)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(path, "Media file stored");
        Ok(path.to_string())
    }

    #[instrument(skip(self))]
    async fn delete(&self, path: &str) -> RepoResult<()> {
        let full = self.resolve(path)?;

        match fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DomainError::MediaNotFound(path.to_string()))
            }
            Err(e) => Err(DomainError::StorageError(e.to_string())),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.media_url, path.trim_start_matches('/'))
    }

    async fn health_check(&self) -> RepoResult<()> {
        let metadata = fs::metadata(&self.root)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        if !metadata.is_dir() {
            return Err(DomainError::StorageError(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        if metadata.permissions().readonly() {
            return Err(DomainError::StorageError(format!(
                "{} is read-only",
                self.root.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn store() -> (TempDir, LocalMediaStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalMediaStore::open(dir.path().join("media"), "/media")
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let (_dir, store) = store().await;

        let stored = store.save("posts/photos/7.jpg", b"jpeg").await.unwrap();
        assert_eq!(stored, "posts/photos/7.jpg");

        let written = fs::read(store.root().join("posts/photos/7.jpg")).await.unwrap();
        assert_eq!(written, b"jpeg");
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let (_dir, store) = store().await;

        store.save("avatars/1taro.png", b"old").await.unwrap();
        store.save("avatars/1taro.png", b"new").await.unwrap();

        let written = fs::read(store.root().join("avatars/1taro.png")).await.unwrap();
        assert_eq!(written, b"new");
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, store) = store().await;
        store.save("posts/models/7.glb", b"glTF").await.unwrap();

        store.delete("posts/models/7.glb").await.unwrap();
        assert!(!store.root().join("posts/models/7.glb").exists());

        let err = store.delete("posts/models/7.glb").await.unwrap_err();
        assert!(matches!(err, DomainError::MediaNotFound(_)));
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_root() {
        let (_dir, store) = store().await;

        for path in ["../escape.png", "/etc/passwd", "avatars/../../x", "./a.png", "", "a\\..\\b"] {
            let err = store.save(path, b"x").await.unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidMediaPath(_)),
                "{path} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_url_uses_media_prefix() {
        let (_dir, store) = store().await;
        assert_eq!(store.url("avatars/1taro.png"), "/media/avatars/1taro.png");
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_dir, store) = store().await;
        assert!(store.health_check().await.is_ok());

        let missing = LocalMediaStore {
            root: PathBuf::from("/definitely/not/here"),
            media_url: "/media/".to_string(),
        };
        assert!(missing.health_check().await.is_err());
    }
}
