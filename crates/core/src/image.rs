//! Image fields on draft records.
//!
//! A draft either keeps the image the backend already has (a relative path,
//! display-only) or carries a newly chosen file to upload.

/// A locally chosen image file, uploaded as the `image` multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    pub fn content_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}

// Raw bytes are noise in logs.
impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageField {
    /// Path of the image already stored by the backend.
    Existing(String),
    /// A new file replacing (or, in add mode, providing) the image.
    Replacement(ImageUpload),
}

impl ImageField {
    /// Build the draft image from a row's stored path. Empty paths mean no
    /// image.
    pub fn from_existing(path: Option<&str>) -> Option<Self> {
        path.filter(|p| !p.trim().is_empty())
            .map(|p| Self::Existing(p.to_string()))
    }

    pub fn replacement(&self) -> Option<&ImageUpload> {
        match self {
            Self::Replacement(upload) => Some(upload),
            Self::Existing(_) => None,
        }
    }

    /// Human-readable description for read-only display.
    pub fn describe(&self) -> String {
        match self {
            Self::Existing(path) => path.clone(),
            Self::Replacement(upload) => format!("{} (new upload)", upload.file_name),
        }
    }
}

/// Resolve an image path returned by the backend against the API base URL.
///
/// Absolute `http(s)` URLs are returned as-is.
pub fn resolve_image_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
