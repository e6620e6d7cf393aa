use serde::{Deserialize, Serialize};

use super::Category;

/// A review as entered into the submission form, before the store has
/// assigned it an id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewDraft {
    pub author_name: String,
    pub category: Category,
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Client-side copy of the store's POST validation rules, so a bad draft
/// never costs a network round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("author name is required")]
    MissingAuthor,
    #[error("comment is required")]
    MissingComment,
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.author_name.trim().is_empty() {
            return Err(DraftError::MissingAuthor);
        }
        if self.comment.trim().is_empty() {
            return Err(DraftError::MissingComment);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(DraftError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}
