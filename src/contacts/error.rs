//! Contacts error types with HTTP status code mapping.
//!
//! Error responses have an empty body; the error itself is logged inside the
//! request span so it carries the request id.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures of a single contacts request. None of them affect the store.
#[derive(Debug, Error)]
pub enum ContactsError {
    /// No person under this id on read or delete (404).
    #[error("person `{0}` not found")]
    NotFound(String),

    /// PUT against an id that does not exist (400). Updates never create.
    #[error("cannot update person {0}: no such id")]
    UpdateTargetMissing(u64),

    /// Body is not a well-formed person payload (400).
    #[error("malformed person payload: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

impl ContactsError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactsError::NotFound(_) => StatusCode::NOT_FOUND,
            ContactsError::UpdateTargetMissing(_) | ContactsError::MalformedInput(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ContactsError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(status = status.as_u16(), error = %self, "Contacts request rejected");
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ContactsError::NotFound("3".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ContactsError::UpdateTargetMissing(3).status(), StatusCode::BAD_REQUEST);

        let malformed = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ContactsError::from(malformed).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_response_body_is_empty() {
        let response = ContactsError::NotFound("3".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }
}
