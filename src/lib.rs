//! # riposte
//!
//! A minimal JSON layer for HTTP APIs. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your framework handles routing, serving, and shutdown; your proxy
//! handles TLS, timeouts, rate limits, and body-size caps. riposte does
//! not — by design. What's left is the part that changes between JSON
//! APIs, and that is all riposte owns:
//!
//! - **Body decoding** — [`parse_body`] turns a request body into your
//!   typed shape, or into a ready-made `400`
//! - **Handler outcomes** — handlers return `(status, payload)` or an
//!   [`ApiError`]; they never touch the response transport
//! - **One response per request** — [`Api::handle`] funnels success,
//!   failure, and even handler panics into exactly one [`http::Response`]
//! - **Error envelope** — every failure reaches the client as
//!   `{"error_code": "...", "error_msg": "..."}` with a matching status
//! - **Cache suppression** — [`Api::no_cache`] stamps the standard
//!   header triple onto read responses
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use bytes::Bytes;
//! use http::{Request, Response, StatusCode};
//! use http_body_util::Full;
//! use riposte::{Api, ApiError, ErrorCode, HandlerResult, parse_body};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize, Serialize)]
//! struct User {
//!     name: String,
//! }
//!
//! // Plug this into your framework's dispatch — hyper's `service_fn`,
//! // or anything that maps a request to a response.
//! async fn route(req: Request<Full<Bytes>>) -> Response<Full<Bytes>> {
//!     match (req.method().as_str(), req.uri().path()) {
//!         ("GET", "/users/42") => Api::new().no_cache().handle(req, get_user).await,
//!         ("POST", "/users") => Api::new().handle(req, create_user).await,
//!         _ => Api::new().handle(req, not_found).await,
//!     }
//! }
//!
//! async fn get_user(_req: Request<Full<Bytes>>) -> HandlerResult<User> {
//!     Ok((StatusCode::OK, Some(User { name: "alice".into() })))
//! }
//!
//! async fn create_user(req: Request<Full<Bytes>>) -> HandlerResult<User> {
//!     // Malformed JSON becomes a 400 envelope via `?`.
//!     let user: User = parse_body(req.into_body()).await?;
//!     Ok((StatusCode::CREATED, Some(user)))
//! }
//!
//! async fn not_found(_req: Request<Full<Bytes>>) -> HandlerResult<()> {
//!     Err(ApiError::not_found(ErrorCode::Gen, "no such route"))
//! }
//! ```

mod api;
mod body;
mod code;
mod error;
mod handler;

pub use api::Api;
pub use body::parse_body;
pub use code::ErrorCode;
pub use error::ApiError;
pub use handler::{HandlerResult, Reply};
