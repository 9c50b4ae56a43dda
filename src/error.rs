//! The error signal and its JSON envelope.

use std::fmt;

use http::StatusCode;
use serde::Serialize;

use crate::code::ErrorCode;

/// A failure reported by application logic through this layer.
///
/// An `ApiError` carries the HTTP status to answer with, a machine token for
/// clients to branch on, and a human-oriented message. [`Api::handle`]
/// serializes it as
///
/// ```json
/// {"error_code": "db_err", "error_msg": "connection refused"}
/// ```
///
/// with the status on the status line rather than in the body. The message
/// is diagnostic text; only the code and status are stable interface.
///
/// Build one at the failure site and return it as `Err` (or lean on `?`
/// from anything returning `Result<_, ApiError>`):
///
/// ```rust
/// use riposte::{ApiError, ErrorCode};
///
/// fn find_user(id: &str) -> Result<String, ApiError> {
///     if id.is_empty() {
///         return Err(ApiError::not_found(ErrorCode::Gen, "no such user"));
///     }
///     Ok(id.to_owned())
/// }
/// ```
///
/// [`Api::handle`]: crate::Api::handle
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    #[serde(rename = "error_code")]
    code: ErrorCode,
    #[serde(rename = "error_msg")]
    msg: String,
}

impl ApiError {
    /// An error with any status. The canonical constructors below cover the
    /// usual cases; this one is for everything else (`410`, `429`, ...).
    ///
    /// # Panics
    ///
    /// Panics if `code` is an empty extension token.
    pub fn new(status: StatusCode, code: ErrorCode, msg: impl Into<String>) -> Self {
        assert!(!code.as_str().is_empty(), "empty error code");
        Self { status, code, msg: msg.into() }
    }

    /// `500 Internal Server Error`.
    pub fn internal(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, msg)
    }

    /// `400 Bad Request`.
    pub fn bad_request(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, msg)
    }

    /// `404 Not Found`.
    pub fn not_found(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, msg)
    }

    /// `409 Conflict`.
    pub fn conflict(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, msg)
    }

    pub fn status(&self) -> StatusCode { self.status }
    pub fn code(&self) -> &ErrorCode { &self.code }
    pub fn msg(&self) -> &str { &self.msg }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_skips_status_and_renames_fields() {
        let err = ApiError::conflict(ErrorCode::Db, "duplicate key");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"error_code":"db_err","error_msg":"duplicate key"}"#
        );
    }

    #[test]
    fn canonical_constructors_pin_their_status() {
        let cases = [
            (ApiError::internal(ErrorCode::Gen, "x"), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::bad_request(ErrorCode::Gen, "x"), StatusCode::BAD_REQUEST),
            (ApiError::not_found(ErrorCode::Gen, "x"), StatusCode::NOT_FOUND),
            (ApiError::conflict(ErrorCode::Gen, "x"), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    #[should_panic(expected = "empty error code")]
    fn empty_extension_code_is_rejected() {
        let _ = ApiError::internal(ErrorCode::Other(String::new()), "never sent");
    }
}
