//! Statement generation error types.

use thiserror::Error;

/// Statement generation errors.
///
/// Data problems never surface here: they are absorbed as zero amounts or
/// reported by the validator. These variants are catalog defects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// A generator referenced a caption its catalog does not define.
    #[error("Unknown caption '{code}' in {catalog} catalog")]
    UnknownCaption {
        /// Catalog name.
        catalog: String,
        /// Missing caption code.
        code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_caption_display() {
        let err = StatementError::UnknownCaption {
            catalog: "liabilities".to_string(),
            code: "CH".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown caption 'CH' in liabilities catalog");
    }
}
