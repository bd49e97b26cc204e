//! Selected image handle
//!
//! The bytes of the image the user picked, kept in memory for the session.

use crate::error::{VisionError, VisionResult};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// An image chosen by the user. Cloning is cheap; the bytes are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    file_name: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an image file from disk
    pub async fn load(path: impl AsRef<Path>) -> VisionResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        if bytes.is_empty() {
            return Err(VisionError::Image(format!("{} is empty", path.display())));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        debug!("🖼️ Loaded {} ({} bytes)", file_name, bytes.len());
        Ok(Self::new(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Media type guessed from the file extension
    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "bmp" => "image/bmp",
            "webp" => "image/webp",
            "tif" | "tiff" => "image/tiff",
            _ => "application/octet-stream",
        }
    }
}
