//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Only the knobs the application layer needs: the ingestion pipeline
/// parameters and where the remote stores live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Image ingestion settings
    pub ingest: IngestConfig,

    /// Remote store endpoints
    pub stores: StoreEndpoints,
}

/// Image ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestConfig {
    /// Longest-edge bound applied by the normalizer, in pixels
    pub max_dimension: u32,

    /// Fixed JPEG quality factor in the 0.0..=1.0 range
    pub jpeg_quality: f32,

    /// Optional pre-decode byte limit for a selection. Off by default;
    /// the resize pipeline already bounds output size.
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

/// Remote store endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreEndpoints {
    pub reviews_url: String,
    pub photos_url: String,
    pub about_url: String,
    pub upload_url: String,

    /// Per-request timeout applied when building the HTTP client
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ingest: IngestConfig {
                max_dimension: 800,
                jpeg_quality: 0.7,
                max_input_bytes: None,
            },
            stores: StoreEndpoints {
                reviews_url: String::new(),
                photos_url: String::new(),
                about_url: String::new(),
                upload_url: String::new(),
                request_timeout_secs: 30,
            },
        }
    }
}
