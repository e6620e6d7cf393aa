use serde::{Deserialize, Serialize};
use std::fmt;

/// The "about me" block. The store keeps exactly one row and refuses
/// blank content, so the same rule is enforced before the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AboutText(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AboutError {
    #[error("content is required")]
    Empty,
}

impl AboutText {
    pub fn new(content: impl Into<String>) -> Result<Self, AboutError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(AboutError::Empty);
        }
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AboutText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
