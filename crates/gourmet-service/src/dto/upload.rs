//! Uploaded files received from multipart requests

use gourmet_core::DomainError;

/// Kind of media a file field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Model,
}

impl MediaKind {
    /// Accepted file extensions, lowercase
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["jpg", "jpeg", "png", "gif", "webp"],
            Self::Model => &["glb", "gltf", "usdz", "obj", "fbx"],
        }
    }
}

/// A file part of a multipart form
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    /// Lowercased extension of the original file name
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Check the file against the accepted kinds and size limit, returning its extension
    pub fn checked_extension(&self, kind: MediaKind, max_bytes: usize) -> Result<String, DomainError> {
        if self.bytes.len() > max_bytes {
            return Err(DomainError::FileTooLarge {
                max_mb: u32::try_from(max_bytes / (1024 * 1024)).unwrap_or(u32::MAX),
            });
        }

        match self.extension() {
            Some(ext) if kind.allowed_extensions().contains(&ext.as_str()) => Ok(ext),
            _ => Err(DomainError::UnsupportedFileType(self.file_name.clone())),
        }
    }
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(UploadedFile::new("Ramen.JPG", vec![]).extension().as_deref(), Some("jpg"));
        assert_eq!(UploadedFile::new("model.tar.glb", vec![]).extension().as_deref(), Some("glb"));
        assert_eq!(UploadedFile::new("noext", vec![]).extension(), None);
        assert_eq!(UploadedFile::new(".hidden", vec![]).extension(), None);
    }

    #[test]
    fn test_checked_extension_by_kind() {
        let photo = UploadedFile::new("dish.webp", vec![0; 10]);
        assert_eq!(photo.checked_extension(MediaKind::Image, MB).unwrap(), "webp");
        assert!(matches!(
            photo.checked_extension(MediaKind::Model, MB),
            Err(DomainError::UnsupportedFileType(_))
        ));

        let model = UploadedFile::new("dish.usdz", vec![0; 10]);
        assert_eq!(model.checked_extension(MediaKind::Model, MB).unwrap(), "usdz");
    }

    #[test]
    fn test_file_too_large() {
        let big = UploadedFile::new("dish.png", vec![0; 2 * MB + 1]);
        assert!(matches!(
            big.checked_extension(MediaKind::Image, 2 * MB),
            Err(DomainError::FileTooLarge { max_mb: 2 })
        ));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let file = UploadedFile::new("dish.png", vec![1, 2, 3]);
        let debug = format!("{file:?}");
        assert!(debug.contains("size: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }
}
