use std::sync::Arc;

use uuid::Uuid;

/// An image candidate handed to the session by a picker or drop target.
///
/// The bytes are shared, so cloning a file (for a submission ticket or a
/// preview) never copies the payload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
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

    /// True when the declared media type is `image/*`.
    pub fn is_image(&self) -> bool {
        self.media_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Display-only reference to a selected image, valid for this process only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    url: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl PreviewHandle {
    pub fn for_image(image: &ImageFile) -> Self {
        Self {
            url: format!("blob:ocrpad/{}", Uuid::new_v4()),
            media_type: image.media_type.clone(),
            bytes: Arc::clone(&image.bytes),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
