//! JSON request-body decoding.

use std::fmt;

use http_body::Body;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

use crate::code::ErrorCode;
use crate::error::ApiError;

/// Reads a request body to completion and decodes it as JSON into `T`.
///
/// The body is consumed. Move it out of the request with
/// [`Request::into_body`], or split the parts off first if the handler still
/// needs the method or headers afterwards:
///
/// ```rust,no_run
/// # use bytes::Bytes;
/// # use http::{Request, StatusCode};
/// # use http_body_util::Full;
/// # use riposte::parse_body;
/// # use serde::Deserialize;
/// #[derive(Deserialize)]
/// struct CreateUser { name: String }
///
/// # async fn handler(req: Request<Full<Bytes>>) -> riposte::HandlerResult<()> {
/// let user: CreateUser = parse_body(req.into_body()).await?;
/// # Ok((StatusCode::CREATED, None))
/// # }
/// ```
///
/// The whole body is buffered before parsing; keeping oversized payloads out
/// is the fronting proxy's job (`client_max_body_size` and friends), the
/// same split this layer assumes for TLS and timeouts.
///
/// # Errors
///
/// - the transport fails mid-read: `500` with [`ErrorCode::Http`] and the
///   transport's message;
/// - the bytes are not valid JSON for `T`: `400` with [`ErrorCode::Json`]
///   and the parser's message.
///
/// Both are ready to hand back with `?` from inside a handler.
///
/// [`Request::into_body`]: http::Request::into_body
pub async fn parse_body<B, T>(body: B) -> Result<T, ApiError>
where
    B: Body,
    B::Error: fmt::Display,
    T: DeserializeOwned,
{
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => return Err(ApiError::internal(ErrorCode::Http, e.to_string())),
    };

    serde_json::from_slice(&bytes).map_err(|e| ApiError::bad_request(ErrorCode::Json, e.to_string()))
}
