//! Fake vision service over real HTTP
//!
//! Serves `/caption/`, `/extract-text-auto/` and `/` on an ephemeral port and
//! records every multipart field it receives.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How an endpoint answers
#[derive(Debug, Clone)]
pub enum Behavior {
    Json(Value),
    Status(u16),
    Hang(Duration),
    Raw(&'static str),
}

/// One multipart field as seen by the server
#[derive(Debug, Clone)]
pub struct Received {
    pub path: &'static str,
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct FakeState {
    received: Arc<Mutex<Vec<Received>>>,
    caption: Arc<Behavior>,
    text: Arc<Behavior>,
}

pub struct FakeService {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeService {
    pub async fn spawn(caption: Behavior, text: Behavior) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            received: received.clone(),
            caption: Arc::new(caption),
            text: Arc::new(text),
        };

        let app = Router::new()
            .route(
                "/",
                get(|| async { Json(json!({"message": "Image Captioning & OCR API is running!"})) }),
            )
            .route("/caption/", post(caption_handler))
            .route("/extract-text-auto/", post(text_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake service");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake service crashed");
        });

        Self {
            url: format!("http://{}", addr),
            received,
        }
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn caption_handler(State(state): State<FakeState>, multipart: Multipart) -> Response {
    let behavior = state.caption.clone();
    respond(&state, "/caption/", &behavior, multipart).await
}

async fn text_handler(State(state): State<FakeState>, multipart: Multipart) -> Response {
    let behavior = state.text.clone();
    respond(&state, "/extract-text-auto/", &behavior, multipart).await
}

async fn respond(
    state: &FakeState,
    path: &'static str,
    behavior: &Behavior,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        state.received.lock().unwrap().push(Received {
            path,
            field: name,
            file_name,
            content_type,
            bytes,
        });
    }

    match behavior {
        Behavior::Json(body) => Json(body.clone()).into_response(),
        Behavior::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Behavior::Hang(duration) => {
            tokio::time::sleep(*duration).await;
            Json(json!({})).into_response()
        }
        Behavior::Raw(body) => (StatusCode::OK, *body).into_response(),
    }
}
