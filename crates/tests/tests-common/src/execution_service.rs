//! A stand-in for the execution service, served by axum on a random local port.

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

/// What the mock answers to every request.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    /// A successful execution returning `rows`.
    pub fn rows(rows: serde_json::Value) -> Self {
        Self::json(
            StatusCode::OK,
            &serde_json::json!({"success": true, "rows": rows}),
        )
    }

    /// An execution the service ran and reported as failed.
    pub fn failure(message: &str) -> Self {
        Self::json(
            StatusCode::OK,
            &serde_json::json!({"success": false, "error": message}),
        )
    }

    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        Reply {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Reply {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request as received by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct Received {
    pub body: serde_json::Value,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct MockState {
    reply: Arc<Mutex<Reply>>,
    received: Arc<Mutex<Vec<Received>>>,
}

/// A running mock execution service. It stops with the test's runtime.
pub struct MockExecutionService {
    address: SocketAddr,
    reply: Arc<Mutex<Reply>>,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockExecutionService {
    /// Start serving `POST /execute` with `reply`.
    pub async fn start(reply: Reply) -> Self {
        crate::init_logging();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let reply = Arc::new(Mutex::new(reply));
        let received = Arc::new(Mutex::new(vec![]));

        let router = Router::new()
            .route("/execute", post(execute))
            .with_state(MockState {
                reply: reply.clone(),
                received: received.clone(),
            });

        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service());
        tokio::spawn(async move {
            if let Err(err) = server.await {
                tracing::error!("mock execution service stopped: {}", err);
            }
        });

        MockExecutionService {
            address,
            reply,
            received,
        }
    }

    /// Answer later requests with `reply` instead.
    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    /// The URL to hand to the client under test.
    pub fn url(&self) -> String {
        format!("http://{}/execute", self.address)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn execute(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.received.lock().unwrap().push(Received {
        body,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    });

    let reply = state.reply.lock().unwrap().clone();
    tokio::time::sleep(reply.delay).await;

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}
