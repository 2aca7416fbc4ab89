//! REST API clients for the Tenpo backend
//!
//! Each entity gets a five-operation client (list, get, create, update,
//! delete) that maps 1:1 onto HTTP verbs and paths. The clients do no
//! validation, retrying, or caching of their own; callers get the backend's
//! structured error payload un-interpreted.

pub mod client;
pub mod tenpistas;
pub mod transactions;

pub use client::ApiClient;
pub use tenpistas::{HttpTenpistaApi, TenpistaApi};
pub use transactions::{HttpTransactionApi, TransactionApi};

use thiserror::Error;

/// Failure of an API operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` carries the backend's human-readable
    /// message when the error body includes one
    #[error("el servidor respondió {status}")]
    Status {
        status: u16,
        detail: Option<String>,
    },

    /// Network fault or malformed response body
    #[error("no fue posible completar la solicitud: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The backend's `detail` string, if the error body carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            ApiError::Transport(_) => None,
        }
    }

    /// HTTP status of the failed response, if this was a response at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Extract a user-facing message from an API error, `detail` first
pub fn error_message(error: &ApiError) -> String {
    if let Some(detail) = error.detail() {
        return detail.to_string();
    }
    let message = error.to_string();
    if message.is_empty() {
        "Error desconocido".to_string()
    } else {
        message
    }
}
