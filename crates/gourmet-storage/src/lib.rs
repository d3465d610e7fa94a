//! # gourmet-storage
//!
//! Adapters for the `MediaStore` port. Uploaded avatars, photos and 3D models
//! are written to the local filesystem and served by the API under `MEDIA_URL`.

mod local;

pub use local::LocalMediaStore;
