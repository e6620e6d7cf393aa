use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use super::MediaType;

/// A downscaled, recompressed raster image as a self-describing
/// inline-encoded string, ready to be embedded verbatim in a JSON field.
///
/// Invariant: the longest edge is bounded by the normalizer's configured
/// maximum dimension. The payload is always the result of a fresh encode,
/// even when no resize took place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedImage {
    pub media_type: MediaType,
    pub width: u32,
    pub height: u32,
    pub data_url: String,
}

impl NormalizedImage {
    /// Wrap freshly encoded image bytes as a `data:` URL.
    pub fn from_encoded_bytes(
        media_type: MediaType,
        width: u32,
        height: u32,
        bytes: &[u8],
    ) -> Self {
        let data_url = format!("data:{};base64,{}", media_type, STANDARD.encode(bytes));
        Self {
            media_type,
            width,
            height,
            data_url,
        }
    }

    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }

    /// Hand the inline string over to whichever record embeds it.
    pub fn into_data_url(self) -> String {
        self.data_url
    }
}
