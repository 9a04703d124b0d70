//! Image attachment handling: size enforcement and data-URL encoding for
//! transport. The size cap is checked before any encoding work begins.

use crate::errors::ModerationError;
use base64::{engine::general_purpose, Engine as _};

/// Maximum accepted raw image size (5MB), enforced before encoding.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image accepted for submission, held as a base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    data_url: String,
}

impl ImageAttachment {
    /// Encodes raw image bytes into a data URL, rejecting anything over the
    /// 5MB cap.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, ModerationError> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ModerationError::ImageTooLarge {
                limit_bytes: MAX_IMAGE_BYTES,
                actual_bytes: bytes.len(),
            });
        }
        let payload = general_purpose::STANDARD.encode(bytes);
        Ok(Self {
            data_url: format!("data:{mime_type};base64,{payload}"),
        })
    }

    /// The full `data:<mime>;base64,<payload>` string.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn into_data_url(self) -> String {
        self.data_url
    }
}
