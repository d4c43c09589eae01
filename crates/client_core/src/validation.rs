//! Local checks a review must pass before it may be sent for prediction.

use shared::protocol::MAX_REVIEW_CHARS;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a review to analyze")]
    Empty,
    #[error("Review is too long. Maximum {max} characters.", max = MAX_REVIEW_CHARS)]
    TooLong { len: usize },
}

/// Rules are checked in order and the first failure wins: blank text is
/// `Empty` even when it is also over the length limit.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = text.chars().count();
    if len > MAX_REVIEW_CHARS {
        return Err(ValidationError::TooLong { len });
    }

    Ok(())
}
