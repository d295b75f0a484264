//! Opaque image bytes plus a MIME type hint.

/// MIME type assumed when none is known.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Image bytes travelling to or from the inference endpoint. Not validated or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Bytes tagged as `image/jpeg`.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, DEFAULT_IMAGE_MIME)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name used when uploading the payload, with an extension derived from the MIME hint.
    pub fn file_name(&self) -> String {
        let ext = match self.mime_type.to_ascii_lowercase().as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            _ => "jpg",
        };
        format!("image.{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_payload() {
        let p = ImagePayload::jpeg(vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(p.mime_type, "image/jpeg");
        assert_eq!(p.len(), 3);
        assert!(!p.is_empty());
        assert_eq!(p.file_name(), "image.jpg");
    }

    #[test]
    fn test_file_name_follows_mime() {
        assert_eq!(ImagePayload::new(vec![], "image/png").file_name(), "image.png");
        assert_eq!(ImagePayload::new(vec![], "IMAGE/WEBP").file_name(), "image.webp");
        assert_eq!(ImagePayload::new(vec![], "application/octet-stream").file_name(), "image.jpg");
    }
}
