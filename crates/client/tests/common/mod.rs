//! In-process fake of the NGO backend.
//!
//! Every request is recorded (method, path, multipart parts or JSON body)
//! and answered with a canned response. Unconfigured `GET`s answer
//! `{"data": []}`, everything else answers `200 {}`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;

#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: String,
    pub text_fields: HashMap<String, String>,
    /// Part name -> (file name, bytes).
    pub file_fields: HashMap<String, (String, Vec<u8>)>,
    pub json: Option<serde_json::Value>,
}

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
}

pub struct FakeBackend {
    pub base_url: String,
    state: FakeState,
    server: tokio::task::JoinHandle<()>,
}

impl FakeBackend {
    /// Start the fake on an ephemeral port. The API lives under `/api/`.
    pub async fn start() -> Self {
        let state = FakeState::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/"),
            state,
            server,
        }
    }

    /// Answer `method path` with `status` and a raw JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state.responses.lock().unwrap().insert(
            format!("{method} {path}"),
            (StatusCode::from_u16(status).unwrap(), body.to_string()),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn record(State(state): State<FakeState>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let mut recorded = RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type: content_type.clone(),
        ..Default::default()
    };

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &state).await.unwrap();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or("").to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field.bytes().await.unwrap();
                    recorded.file_fields.insert(name, (file_name, bytes.to_vec()));
                }
                None => {
                    let text = field.text().await.unwrap();
                    recorded.text_fields.insert(name, text);
                }
            }
        }
    } else if content_type.starts_with("application/json") {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap();
        recorded.json = serde_json::from_slice(&bytes).ok();
    }

    state.requests.lock().unwrap().push(recorded);

    let configured = state
        .responses
        .lock()
        .unwrap()
        .get(&format!("{method} {path}"))
        .cloned();

    match configured {
        Some((status, body)) => (status, [(CONTENT_TYPE, "application/json")], body).into_response(),
        None if method == "GET" => (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/json")],
            r#"{"data": []}"#.to_string(),
        )
            .into_response(),
        None => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], "{}".to_string())
            .into_response(),
    }
}
