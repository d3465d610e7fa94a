//! Media storage port
//!
//! Uploaded images and 3D models are written through this trait. Paths are
//! relative, slash-separated keys such as `avatars/42taro.png`.

use async_trait::async_trait;

use super::repositories::RepoResult;

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Write `content` under `path`, replacing any existing file. Returns the stored path.
    async fn save(&self, path: &str, content: &[u8]) -> RepoResult<String>;

    /// Remove the file at `path`
    async fn delete(&self, path: &str) -> RepoResult<()>;

    /// Public URL for a stored path
    fn url(&self, path: &str) -> String;

    /// Check that the backing store is reachable and writable
    async fn health_check(&self) -> RepoResult<()>;
}
