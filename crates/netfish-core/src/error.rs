//! Error types for input validation.

use thiserror::Error;

/// Reason a validation-gated operation refused to run.
///
/// The `Display` text of each variant is the diagnostic emitted when the
/// corresponding guard fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The input data cannot be null or undefined")]
    Missing,

    #[error("The iterable object must be an object")]
    NotObject,

    #[error("Callback must be a function")]
    NotCallable,

    #[error("Indexes must be numbers")]
    NotNumber,

    #[error("The input data must be string")]
    NotString,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("The body of the request must be an object")]
    InvalidBody,

    #[error("Indexes cannot be larger than the object")]
    IndexTooLarge,

    #[error("Indexes cannot be negative")]
    NegativeIndex,
}

impl ValidationError {
    /// Emits this error through the diagnostic sink and hands it back.
    pub fn emit(self) -> Self {
        crate::render_error(self);
        self
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
