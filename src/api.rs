//! The request adapter: one handler invocation, one response.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use bytes::Bytes;
use futures_util::FutureExt;
use http::{Method, Request, Response, StatusCode, header};
use http_body_util::Full;
use serde::Serialize;
use tracing::{debug, error};

use crate::code::ErrorCode;
use crate::error::ApiError;
use crate::handler::HandlerResult;

/// The per-route adapter.
///
/// An `Api` value carries the route-level configuration and turns one
/// handler invocation into exactly one [`http::Response`]. Handlers never
/// see the response transport at all — they return a value, and `Api`
/// owns everything between that value and the wire.
///
/// `Api` is `Copy` and holds no per-request state; build one per route at
/// startup (or on the fly, it costs nothing) and call
/// [`handle`](Api::handle) from your framework's dispatch:
///
/// ```rust,no_run
/// # use bytes::Bytes;
/// # use http::{Request, StatusCode};
/// # use http_body_util::Full;
/// # use riposte::{Api, HandlerResult};
/// # async fn dispatch(req: Request<Full<Bytes>>) {
/// let response = Api::new()
///     .no_cache()
///     .handle(req, |_req| async {
///         Ok((StatusCode::OK, Some("pong")))
///     })
///     .await;
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Api {
    no_cache: bool,
}

impl Api {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the no-cache header triple (`Cache-Control`, `Pragma`,
    /// `Expires`) onto every `GET` response from this adapter, success and
    /// error alike. Non-read methods are left untouched. Returns `self`
    /// for chaining.
    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    /// Runs `handler` for one request and produces the one response.
    ///
    /// Three handler outcomes, three deterministic answers:
    ///
    /// - `Ok((status, Some(payload)))` — the payload serialized as JSON
    ///   under that status, `Content-Type: application/json; charset=utf-8`;
    /// - `Ok((status, None))` — the status line alone, no body, no
    ///   content-type;
    /// - `Err(api_error)` — the error's status plus the
    ///   `{"error_code", "error_msg"}` envelope.
    ///
    /// A panicking handler is contained here: the panic payload goes to the
    /// error log and the client gets a generic `500` envelope with
    /// [`ErrorCode::Gen`]. The one unstructured path is a payload that
    /// fails to serialize — JSON is off the table at that point, so the
    /// answer degrades to a plain-text `500` carrying the serializer's
    /// message.
    pub async fn handle<B, F, Fut, T>(&self, req: Request<B>, handler: F) -> Response<Full<Bytes>>
    where
        F: FnOnce(Request<B>) -> Fut,
        Fut: Future<Output = HandlerResult<T>>,
        T: Serialize,
    {
        // The cache policy keys off the method; record it before the
        // handler takes the request.
        let is_read = req.method() == Method::GET;

        let outcome = AssertUnwindSafe(handler(req)).catch_unwind().await;

        let result = match outcome {
            Ok(result) => result,
            Err(panic) => {
                error!(panic = panic_message(panic.as_ref()), "handler panicked");
                // The panic payload stays in the log; clients get a fixed
                // message and no internals.
                Err(ApiError::internal(ErrorCode::Gen, "an internal error occurred"))
            }
        };

        let (status, body) = match result {
            Ok((status, Some(payload))) => match serde_json::to_vec(&payload) {
                Ok(bytes) => (status, Some(bytes)),
                Err(e) => return serialization_escape(&e),
            },
            Ok((status, None)) => (status, None),
            Err(err) => {
                debug!(status = %err.status(), code = %err.code(), "answering with error envelope");
                match serde_json::to_vec(&err) {
                    Ok(bytes) => (err.status(), Some(bytes)),
                    Err(e) => return serialization_escape(&e),
                }
            }
        };

        let mut response = Response::builder().status(status);

        if self.no_cache && is_read {
            response = response
                .header(header::CACHE_CONTROL, "max-age=0, no-cache, no-store, must-revalidate")
                .header(header::PRAGMA, "no-cache")
                .header(header::EXPIRES, "Thu, 01 Jan 1970 00:00:00 GMT");
        }

        match body {
            Some(bytes) => response
                .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
                .body(Full::new(Bytes::from(bytes))),
            None => response.body(Full::default()),
        }
        .expect("response parts are statically valid")
    }
}

/// The structured-response contract is abandoned: serializing the body is
/// what failed, so the serializer's own message goes out as plain text.
fn serialization_escape(e: &serde_json::Error) -> Response<Full<Bytes>> {
    error!("response serialization failed: {e}");
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(e.to_string())))
        .expect("response parts are statically valid")
}

/// Best-effort text from a panic payload. `panic!` and `assert!` produce
/// `&str` or `String`; anything else is reported without its contents.
fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
