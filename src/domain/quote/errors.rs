//! Quote-specific error types.
//!
//! Every error is scoped to a single insurance category. A missing catalog
//! match is not an error at all; it surfaces as an unavailable quote.
//!
//! | Error | Code |
//! |-------|------|
//! | InvalidInput | INVALID_INPUT |
//! | DataIntegrity | DATA_INTEGRITY |
//! | Infrastructure | STORAGE_ERROR |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while computing a quote for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// A required answer section is missing or unusable.
    InvalidInput(String),

    /// The catalog contradicts a guarantee the quote logic relies on.
    DataIntegrity(String),

    /// A collaborator (answer, catalog or recommendation store) failed.
    Infrastructure(String),
}

impl QuoteError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        QuoteError::InvalidInput(reason.into())
    }

    pub fn data_integrity(reason: impl Into<String>) -> Self {
        QuoteError::DataIntegrity(reason.into())
    }

    pub fn infrastructure(reason: impl Into<String>) -> Self {
        QuoteError::Infrastructure(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::InvalidInput(_) => ErrorCode::InvalidInput,
            QuoteError::DataIntegrity(_) => ErrorCode::DataIntegrity,
            QuoteError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a caller-facing error message.
    pub fn message(&self) -> String {
        match self {
            QuoteError::InvalidInput(reason) => format!("Invalid input: {}", reason),
            QuoteError::DataIntegrity(reason) => format!("Catalog integrity error: {}", reason),
            QuoteError::Infrastructure(reason) => format!("Error: {}", reason),
        }
    }
}

impl std::fmt::Display for QuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuoteError {}

impl From<DomainError> for QuoteError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidInput => {
                QuoteError::InvalidInput(err.message)
            }
            ErrorCode::DataIntegrity => QuoteError::DataIntegrity(err.message),
            ErrorCode::StorageError => QuoteError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for QuoteError {
    fn from(err: ValidationError) -> Self {
        QuoteError::InvalidInput(err.to_string())
    }
}

impl From<QuoteError> for DomainError {
    fn from(err: QuoteError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(QuoteError::invalid_input("x").code(), ErrorCode::InvalidInput);
        assert_eq!(QuoteError::data_integrity("x").code(), ErrorCode::DataIntegrity);
        assert_eq!(QuoteError::infrastructure("x").code(), ErrorCode::StorageError);
    }

    #[test]
    fn storage_domain_error_becomes_infrastructure() {
        let err: QuoteError = DomainError::storage("connection reset").into();
        assert!(matches!(err, QuoteError::Infrastructure(_)));
    }

    #[test]
    fn converts_into_domain_error_with_code() {
        let err: DomainError = QuoteError::data_integrity("missing default life plan").into();
        assert_eq!(err.code, ErrorCode::DataIntegrity);
        assert!(err.message.contains("missing default life plan"));
    }

    #[test]
    fn display_uses_message() {
        let err = QuoteError::invalid_input("general answers are required");
        assert_eq!(err.to_string(), "Invalid input: general answers are required");
    }
}
