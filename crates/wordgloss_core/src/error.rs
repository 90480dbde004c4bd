//! Application error types for document loading and explanation fetches.
//!
//! Geometry misses (no line under the pointer, empty span, out-of-bounds
//! presses) are deliberately not errors; those paths return `Option`/empty
//! collections and the gesture simply produces nothing.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum GlossError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document too large: {size} bytes (limit {limit})")]
    DocumentTooLarge { size: u64, limit: u64 },

    #[error("Document is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("Explanation request failed: {0}")]
    Explain(String),
}

impl GlossError {
    /// User-displayable message for an explanation failure card.
    ///
    /// # Returns
    /// A short message suitable for inline display on a highlight card.
    pub fn card_message(&self) -> String {
        match self {
            GlossError::Explain(message) => format!("Could not fetch explanation: {}", message),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GlossError;

    #[test]
    fn card_message_wraps_explain_errors() {
        let err = GlossError::Explain("connection refused".to_string());
        assert_eq!(
            err.card_message(),
            "Could not fetch explanation: connection refused"
        );
    }

    #[test]
    fn card_message_passes_through_other_errors() {
        let err = GlossError::DocumentTooLarge {
            size: 10,
            limit: 5,
        };
        assert_eq!(err.card_message(), err.to_string());
    }
}
