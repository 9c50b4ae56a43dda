//! `parse_body` decode paths: typed success, malformed and mismatched
//! JSON, and a transport that fails mid-read.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http::StatusCode;
use http_body::{Body, Frame};
use http_body_util::Full;
use riposte::{ErrorCode, parse_body};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, PartialEq)]
struct CreateUser {
    name: String,
    admin: bool,
}

fn body(text: &str) -> Full<Bytes> {
    Full::new(Bytes::from(text.to_owned()))
}

#[tokio::test]
async fn decodes_into_the_target_type() {
    let decoded: CreateUser = parse_body(body(r#"{"name":"alice","admin":false}"#))
        .await
        .unwrap();

    assert_eq!(decoded, CreateUser { name: "alice".to_owned(), admin: false });
}

#[tokio::test]
async fn malformed_json_is_a_400_with_json_err() {
    let err = parse_body::<_, Value>(body(r#"{"]"#)).await.unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), &ErrorCode::Json);
    assert!(!err.msg().is_empty());
}

// Valid JSON of the wrong shape is the parser's failure too, not a
// separate class.
#[tokio::test]
async fn shape_mismatch_is_a_400_with_json_err() {
    let err = parse_body::<_, CreateUser>(body(r#"{"name":"alice"}"#))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), &ErrorCode::Json);
    assert!(err.msg().contains("admin"));
}

/// A body whose first frame is a transport error.
struct BrokenBody;

impl Body for BrokenBody {
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, io::Error>>> {
        Poll::Ready(Some(Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ))))
    }
}

#[tokio::test]
async fn transport_failure_is_a_500_with_http_err() {
    let err = parse_body::<_, Value>(BrokenBody).await.unwrap_err();

    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code(), &ErrorCode::Http);
    assert_eq!(err.msg(), "connection reset by peer");
}
