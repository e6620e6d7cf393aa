//! JSON-over-HTTP clients for the remote entity stores.
//!
//! Each store is an opaque endpoint; these clients own the wire format
//! and surface failures as [`StoreError`]. One attempt per call: a
//! failed call is reported, never retried here.

pub mod about_store;
pub mod error;
pub mod photo_store;
pub mod review_store;
pub mod upload_store;

pub use about_store::AboutStoreClient;
pub use error::{StoreError, StoreResult};
pub use photo_store::PhotoStoreClient;
pub use review_store::ReviewStoreClient;
pub use upload_store::UploadStoreClient;

use std::time::Duration;

/// Shared client for all stores, with the configured per-request timeout.
pub fn build_client(timeout: Duration) -> StoreResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| StoreError::Network(format!("build HTTP client failed: {}", err)))
}
