//! Scripted `Upstream` used to drive the router without network access.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use movie_proxy::config::settings::AppConfig;
use movie_proxy::infrastructure::tmdb::{Params, Upstream, UpstreamError};
use movie_proxy::{create_app, AppState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;
use tower::util::ServiceExt; // for `oneshot`

pub const CDN: &str = "https://image.tmdb.org/t/p";

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(u16, String),
}

#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
pub struct FakeUpstream {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<Call>>,
    delays: Mutex<HashMap<String, Duration>>,
    gate: Mutex<Option<Arc<Barrier>>>,
}

impl FakeUpstream {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Json(body));
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Status(status, "Internal error.".to_string()));
    }

    /// Holds replies for `path` back by `delay`.
    pub fn delay(&self, path: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
    }

    /// Every call waits until `parties` calls are in flight at once.
    pub fn gate(&self, parties: usize) {
        *self.gate.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_to(&self, path: &str) -> Option<Call> {
        self.calls().into_iter().find(|c| c.path == path)
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn fetch_json(&self, path: &str, params: &Params<'_>) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(Call {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });

        let gate = self.gate.lock().unwrap().clone();
        if let Some(barrier) = gate {
            barrier.wait().await;
        }
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Status(status_code, message)) => Err(UpstreamError::Api { status_code, message }),
            None => Err(UpstreamError::Api {
                status_code: 404,
                message: format!("no fixture for {path}"),
            }),
        }
    }
}

/// Router backed by `upstream`, with default settings.
pub fn setup_app(upstream: Arc<FakeUpstream>) -> Router {
    let state = AppState::new(AppConfig::with_api_key("test-key"), upstream);
    create_app(state)
}

/// GET `uri`, returning status and parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// TMDb's movie genre list, in the order the API returns it.
pub fn genre_list() -> Value {
    json!({"genres": [
        {"id": 28, "name": "Action"},
        {"id": 12, "name": "Adventure"},
        {"id": 16, "name": "Animation"},
        {"id": 35, "name": "Comedy"},
        {"id": 80, "name": "Crime"},
        {"id": 99, "name": "Documentary"},
        {"id": 18, "name": "Drama"},
        {"id": 10751, "name": "Family"},
        {"id": 14, "name": "Fantasy"},
        {"id": 36, "name": "History"},
        {"id": 27, "name": "Horror"},
        {"id": 10402, "name": "Music"},
        {"id": 9648, "name": "Mystery"},
        {"id": 10749, "name": "Romance"},
        {"id": 878, "name": "Science Fiction"},
        {"id": 10770, "name": "TV Movie"},
        {"id": 53, "name": "Thriller"},
        {"id": 10752, "name": "War"},
        {"id": 37, "name": "Western"}
    ]})
}

pub fn inception() -> Value {
    json!({
        "id": 27205,
        "title": "Inception",
        "release_date": "2010-07-16",
        "vote_average": 8.8,
        "overview": "...",
        "poster_path": "/xyz.jpg"
    })
}

pub fn page(results: Vec<Value>) -> Value {
    json!({"page": 1, "results": results, "total_pages": 1, "total_results": 1})
}
