use reqwest::StatusCode;
use serde::Deserialize;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by the entity-store clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store request timed out")]
    Timeout,
    #[error("store rejected the request: {0}")]
    Validation(String),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("response could not be parsed: {0}")]
    Serialization(String),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            StoreError::Timeout
        } else if error.is_decode() {
            StoreError::Serialization(error.to_string())
        } else if let Some(status) = error.status() {
            map_status_code(status, error.to_string())
        } else {
            StoreError::Network(error.to_string())
        }
    }
}

fn map_status_code(code: StatusCode, message: String) -> StoreError {
    match code {
        StatusCode::BAD_REQUEST => StoreError::Validation(message),
        StatusCode::NOT_FOUND => StoreError::NotFound(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => StoreError::Timeout,
        _ if code.is_server_error() => StoreError::Network(format!("server error: {}", code)),
        _ => StoreError::UnexpectedStatus(code),
    }
}

/// The stores report failures as `{"error": "…"}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

pub(crate) async fn ensure_success(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_default();
    Err(map_status_code(status, message))
}
