use super::MediaType;

/// Why a selection could not be turned into a [`super::NormalizedImage`].
///
/// Ingestion is a single attempt. None of these carry retry state; the
/// user picks another file and the pipeline starts over.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IngestionError {
    /// The declared media type does not indicate an image. Checked before
    /// any decode work happens.
    #[error("declared type {0} is not an image")]
    NotAnImage(MediaType),

    /// The input exceeds the configured byte limit. Only produced when
    /// the optional pre-decode size guard is enabled.
    #[error("image is {actual} bytes, limit is {limit} bytes")]
    TooLarge { actual: usize, limit: usize },

    /// Corrupt or unsupported content, or a failure while redrawing or
    /// re-encoding the raster.
    #[error("image could not be decoded: {0}")]
    DecodeFailure(String),
}

impl IngestionError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::DecodeFailure(err.to_string())
    }
}
