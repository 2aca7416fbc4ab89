//! Entity forms
//!
//! A form is a draft of raw field values, a pure validation step that either
//! produces a DTO or a list of per-field errors, and a submit step that
//! delegates persistence to a caller-supplied callback. Field errors never
//! reach the network; callback failures become a single form-level message
//! derived from the backend's `detail` field. Each submit attempt computes
//! its own outcome, so a previous form-level error never lingers.

pub mod tenpista;
pub mod transaction;

pub use tenpista::TenpistaDraft;
pub use transaction::TransactionDraft;

use crate::api::ApiError;
use thiserror::Error;

/// One field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Failure of a form submission attempt
#[derive(Debug, Error)]
pub enum FormError {
    /// Client-side validation failed; the submit callback was never invoked
    #[error("los datos ingresados no son válidos")]
    Invalid(Vec<FieldError>),

    /// The submit callback rejected; the message is ready to display
    #[error("{0}")]
    Submit(String),
}

impl FormError {
    /// Field errors of an `Invalid` outcome, empty otherwise
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Invalid(errors) => errors,
            FormError::Submit(_) => &[],
        }
    }
}

/// Form-level message for a rejected submission: the backend's `detail`
/// when present, otherwise the entity-specific fallback
pub(crate) fn submit_error_message(error: &ApiError, fallback: &str) -> String {
    error
        .detail()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_message_prefers_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Error del backend específico".to_string()),
        };
        assert_eq!(
            submit_error_message(&err, "Ocurrió un error"),
            "Error del backend específico"
        );
    }

    #[test]
    fn test_submit_message_falls_back_without_detail() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(submit_error_message(&err, "Ocurrió un error"), "Ocurrió un error");
    }
}
