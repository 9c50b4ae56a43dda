//! Minimal riposte example — a bare hyper loop playing the dispatch role.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl -i http://localhost:3000/users/42
//!   curl -i -X POST http://localhost:3000/users \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"alice"}'
//!   curl -i -X POST http://localhost:3000/users -d '{"]'
//!   curl -i -X DELETE http://localhost:3000/users/42

use std::convert::Infallible;

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use riposte::{Api, ApiError, ErrorCode, HandlerResult, parse_body};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let listener = TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind");
    info!("riposte demo listening on 0.0.0.0:3000");

    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(v) => v,
            Err(e) => {
                error!("accept error: {e}");
                continue;
            }
        };

        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let svc = service_fn(route);

            if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                .serve_connection(io, svc)
                .await
            {
                error!(peer = %remote_addr, "connection error: {e}");
            }
        });
    }
}

// The framework role: match method + path, pick the adapter, call through.
// riposte neither knows nor cares how this match is built.
async fn route(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_owned();

    let response = match (req.method(), path.as_str()) {
        (&Method::GET, p) if p.starts_with("/users/") => {
            Api::new().no_cache().handle(req, get_user).await
        }
        (&Method::POST, "/users") => Api::new().handle(req, create_user).await,
        (&Method::DELETE, p) if p.starts_with("/users/") => {
            Api::new().handle(req, delete_user).await
        }
        _ => Api::new().handle(req, not_found).await,
    };

    Ok(response)
}

#[derive(Deserialize, Serialize)]
struct User {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct CreateUser {
    name: String,
}

// GET /users/{id}
async fn get_user(req: Request<Incoming>) -> HandlerResult<User> {
    let id = req.uri().path().trim_start_matches("/users/");
    if id.is_empty() {
        return Err(ApiError::not_found(ErrorCode::Gen, "no such user"));
    }

    Ok((
        StatusCode::OK,
        Some(User { id: id.to_owned(), name: "alice".to_owned() }),
    ))
}

// POST /users — decodes the body, answers 201 with the created record.
// A malformed body never reaches this far as a success: `?` turns it into
// the 400 envelope.
async fn create_user(req: Request<Incoming>) -> HandlerResult<User> {
    let input: CreateUser = parse_body(req.into_body()).await?;

    Ok((
        StatusCode::CREATED,
        Some(User { id: "99".to_owned(), name: input.name }),
    ))
}

// DELETE /users/{id} → 204 No Content, status line only.
async fn delete_user(_req: Request<Incoming>) -> HandlerResult<()> {
    Ok((StatusCode::NO_CONTENT, None))
}

async fn not_found(_req: Request<Incoming>) -> HandlerResult<()> {
    Err(ApiError::not_found(ErrorCode::Gen, "no such route"))
}
