use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const NXDOMAIN_BODY: &str = r#"{"Status":3,"TC":false,"RD":true,"RA":true,"AD":false,"CD":false}"#;

#[derive(Clone, Default)]
struct MockState {
    bodies: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
    raw_queries: Arc<Mutex<Vec<String>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

/// Local HTTP stand-in for a JSON DoH provider, bound to 127.0.0.1:0.
pub struct MockDohServer {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let state = MockState::default();

        let app = Router::new()
            .route("/dns-query", get(handle_query))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn set_body(&self, name: &str, body: &str) {
        self.set_response(name, StatusCode::OK, body);
    }

    pub fn set_response(&self, name: &str, status: StatusCode, body: &str) {
        self.state
            .bodies
            .lock()
            .unwrap()
            .insert(name.to_string(), (status, body.to_string()));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = Some(delay);
    }

    /// Decoded query parameters of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Query strings exactly as they arrived on the wire.
    pub fn raw_queries(&self) -> Vec<String> {
        self.state.raw_queries.lock().unwrap().clone()
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle_query(
    State(state): State<MockState>,
    uri: axum::http::Uri,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state
        .raw_queries
        .lock()
        .unwrap()
        .push(uri.query().unwrap_or_default().to_string());
    state.requests.lock().unwrap().push(params.clone());

    let delay = *state.delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let name = params.get("name").cloned().unwrap_or_default();
    let response = state.bodies.lock().unwrap().get(&name).cloned();
    response.unwrap_or((StatusCode::OK, NXDOMAIN_BODY.to_string()))
}
