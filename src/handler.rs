//! The handler contract.
//!
//! A handler is the unit of application logic run for one request. It never
//! sees the response transport: it receives the request, does its work, and
//! hands back either a status/payload pair or an [`ApiError`].
//! [`Api::handle`] owns everything after that.
//!
//! The chain from your code to the wire is:
//!
//! ```text
//! |req| async move { … }                      ← you write this
//!        ↓  api.handle(req, handler)
//! Result<(status, Option<T>), ApiError>       ← one of two outcomes
//!        ↓
//! one http::Response                          ← success JSON, or the
//!                                               {"error_code", "error_msg"}
//!                                               envelope
//! ```
//!
//! There is no trait to implement and nothing is boxed. The closure bounds
//! live directly on [`Api::handle`]: this crate stores no handlers, so
//! unlike a router there is nothing to type-erase, and every call site
//! monomorphizes down to a plain function call.
//!
//! A panic is not a signaling channel. [`Api::handle`] contains panics and
//! answers with a generic `500`, but the panic message never reaches the
//! client. Reach for [`ApiError`] instead.
//!
//! [`Api::handle`]: crate::Api::handle

use http::StatusCode;

use crate::error::ApiError;

/// What a handler resolves to on success: the response status plus an
/// optional JSON payload.
///
/// `None` means "status line only": no body, no content-type.
pub type Reply<T> = (StatusCode, Option<T>);

/// The complete handler outcome.
///
/// The `Err` side carries the failure to report; it is consumed by
/// [`Api::handle`](crate::Api::handle) and never propagates past it.
pub type HandlerResult<T> = Result<Reply<T>, ApiError>;
