#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use pantrycam_api::{
    application::http::server::http_server::{router, state},
    args::{Args, DatabaseArgs, LlmArgs, LogArgs, LogFormat, ServerArgs},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub fn pixel_data_uri() -> String {
    format!("data:image/png;base64,{PIXEL}")
}

#[derive(Debug, Clone)]
struct Reply {
    status: StatusCode,
    text: String,
}

/// Stand-in for the Gemini `generateContent` endpoint. Every call answers
/// with the configured reply and records the request body.
#[derive(Debug, Clone)]
pub struct FakeGemini {
    pub base_url: String,
    reply: Arc<Mutex<Reply>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, String, Value)>>>,
}

#[derive(Debug, Deserialize)]
struct KeyQuery {
    key: String,
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Path(model): Path<String>,
    Query(query): Query<KeyQuery>,
    Json(body): Json<Value>,
) -> Response {
    fake.calls.fetch_add(1, Ordering::SeqCst);
    fake.requests
        .lock()
        .unwrap()
        .push((model, query.key, body));

    let reply = fake.reply.lock().unwrap().clone();
    if !reply.status.is_success() {
        return (reply.status, reply.text).into_response();
    }

    Json(json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": reply.text } ] } }
        ]
    }))
    .into_response()
}

impl FakeGemini {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let fake = FakeGemini {
            base_url: format!("http://{addr}"),
            reply: Arc::new(Mutex::new(Reply {
                status: StatusCode::OK,
                text: "{}".to_string(),
            })),
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/models/{model}", post(generate_content))
            .with_state(fake.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        fake
    }

    /// Answers subsequent calls with `value` serialized as the model text.
    pub fn reply_with(&self, value: Value) {
        *self.reply.lock().unwrap() = Reply {
            status: StatusCode::OK,
            text: value.to_string(),
        };
    }

    pub fn reply_with_text(&self, text: &str) {
        *self.reply.lock().unwrap() = Reply {
            status: StatusCode::OK,
            text: text.to_string(),
        };
    }

    pub fn fail_with(&self, status: StatusCode) {
        *self.reply.lock().unwrap() = Reply {
            status,
            text: "upstream failure".to_string(),
        };
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(model path segment, api key, request body)` of the latest call.
    pub fn last_request(&self) -> Option<(String, String, Value)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

pub fn test_args(gemini_base_url: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        database: DatabaseArgs { database_url: None },
        llm: LlmArgs {
            gemini_api_keys: vec!["test-key".to_string()],
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_base_url: gemini_base_url.to_string(),
        },
        log: LogArgs {
            filter: "info".to_string(),
            format: LogFormat::Text,
        },
    }
}

pub async fn server_with_args(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

pub async fn test_server(fake: &FakeGemini) -> TestServer {
    server_with_args(test_args(&fake.base_url)).await
}
