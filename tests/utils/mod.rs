//! Test utilities for serving canned GraphQL responses.
//!
//! [`start_mitm`] binds a local HTTP/1 server whose behaviour is set by a
//! shared handler, so each test can script the response a scenario sees and
//! inspect the request it sent.

#![allow(dead_code, reason = "helpers are shared by several test crates")]

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::{Request, Response, StatusCode, body::Incoming, service::service_fn};
use hyper_util::rt::TokioIo;
use std::io::ErrorKind;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use ghcheck::{Endpoint, GraphQLClient, Settings};

/// Shared handler invoked with each buffered request.
pub type Handler = Arc<Mutex<Box<dyn FnMut(&Request<Bytes>) -> Response<Full<Bytes>> + Send>>>;

/// Headers and body of a request seen by the server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Handle returned by [`start_mitm`] for shutting down the server.
pub struct ShutdownHandle {
    join: JoinHandle<()>,
    stop: oneshot::Sender<()>,
}

impl ShutdownHandle {
    /// Signal the server to stop and await shutdown.
    pub async fn shutdown(self) {
        let _ = self.stop.send(());
        let _ = self.join.await;
    }
}

/// Start an HTTP server forwarding requests to a shared handler.
///
/// # Errors
///
/// Returns an error if the server fails to bind to a local port.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "tokio::select! uses % internally"
)]
pub async fn start_mitm() -> Result<(SocketAddr, Handler, ShutdownHandle), std::io::Error> {
    let handler: Handler = Arc::new(Mutex::new(Box::new(|_req: &Request<Bytes>| {
        Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::from("No handler"))
            .expect("failed to create default response")
    })));
    let handler_clone = Arc::clone(&handler);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, mut rx) = oneshot::channel();

    let join = tokio::spawn(async move {
        loop {
            tokio::select! {
                res = listener.accept() => match res {
                    Ok((stream, _)) => {
                        let io = TokioIo::new(stream);
                        let h = Arc::clone(&handler_clone);
                        let service = service_fn(move |req: Request<Incoming>| {
                            let h = Arc::clone(&h);
                            async move {
                                let (parts, body) = req.into_parts();
                                let bytes = body.collect().await.unwrap_or_default().to_bytes();
                                let req = Request::from_parts(parts, bytes);
                                let resp = {
                                    let mut f = h.lock().expect("lock handler in service");
                                    (f)(&req)
                                };
                                Ok::<_, std::convert::Infallible>(resp)
                            }
                        });
                        tokio::spawn(async move {
                            let _ = http1::Builder::new().serve_connection(io, service).await;
                        });
                    }
                    Err(e) => {
                        eprintln!("accept error: {e}");
                        match e.kind() {
                            ErrorKind::ConnectionAborted
                            | ErrorKind::ConnectionReset
                            | ErrorKind::Interrupted
                            | ErrorKind::WouldBlock => {}
                            _ => break,
                        }
                    }
                },
                _ = &mut rx => break,
            }
        }
    });

    Ok((addr, handler, ShutdownHandle { join, stop: tx }))
}

/// Build a client pointed at the mock server.
pub fn mock_client(addr: SocketAddr) -> GraphQLClient {
    let endpoint = Endpoint::parse(&format!("http://{addr}/graphql")).expect("mock endpoint");
    GraphQLClient::with_endpoint("dummy", endpoint).expect("mock client")
}

/// Answer every request with `body` and `status`.
pub fn respond_with(handler: &Handler, status: StatusCode, body: impl Into<String>) {
    let body = body.into();
    *handler.lock().expect("lock handler") = Box::new(move |_req: &Request<Bytes>| {
        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Full::from(body.clone()))
            .expect("build response")
    });
}

/// Answer every request with `body` and record what was sent.
pub fn respond_and_capture(
    handler: &Handler,
    body: impl Into<String>,
) -> Arc<Mutex<Vec<CapturedRequest>>> {
    let body = body.into();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    *handler.lock().expect("lock handler") = Box::new(move |req: &Request<Bytes>| {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        };
        let json = serde_json::from_slice(req.body()).expect("invalid JSON request body");
        sink.lock().expect("lock captured").push(CapturedRequest {
            authorization: header("authorization"),
            user_agent: header("user-agent"),
            content_type: header("content-type"),
            body: json,
        });
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Full::from(body.clone()))
            .expect("build response")
    });
    captured
}

/// Client for the real API, configured from the environment.
///
/// # Panics
///
/// Panics when no token is configured; live tests are ignored by default.
pub fn live_client() -> GraphQLClient {
    ghcheck::test_utils::init_logging();
    let settings = Settings::from_env().expect("live tests need GITHUB_TOKEN");
    GraphQLClient::from_settings(&settings).expect("live client")
}
