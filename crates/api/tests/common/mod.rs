#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use salescopy_api::config::ServerConfig;
use salescopy_api::router::build_app_router;
use salescopy_api::state::AppState;
use salescopy_core::copy::CreateCopyInput;
use salescopy_core::generation::{CopyGenerator, GeneratedCopy, GenerationError};
use salescopy_core::types::DbId;
use salescopy_db::models::copy::{Copy, NewCopy};
use salescopy_db::store::CopyStore;
use salescopy_llm::GenerationConfig;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// [`CopyStore`] over a `Vec`, assigning ids sequentially from 1.
#[derive(Default)]
pub struct InMemoryCopyStore {
    rows: Mutex<Vec<Copy>>,
    fail_writes: AtomicBool,
    offline: AtomicBool,
}

impl InMemoryCopyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make `create` and `update_likes` fail with a pool timeout.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Make `ping` fail.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CopyStore for InMemoryCopyStore {
    async fn create(&self, input: &NewCopy) -> Result<Copy, sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut rows = self.rows.lock().unwrap();
        let now = chrono::Utc::now();
        let copy = Copy {
            id: rows.last().map_or(1, |c| c.id + 1),
            title: input.title.clone(),
            description: input.description.clone(),
            channel: input.channel,
            tone: input.tone,
            target: input.target.clone(),
            product_name: input.product_name.clone(),
            product_features: input.product_features.clone(),
            likes: 0,
            is_published: input.is_published,
            created_at: now,
            updated_at: now,
        };
        rows.push(copy.clone());
        Ok(copy)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Copy>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn list_published(&self) -> Result<Vec<Copy>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_published)
            .cloned()
            .collect())
    }

    async fn update_likes(&self, id: DbId, likes: i32) -> Result<bool, sqlx::Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                row.likes = likes;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stub generator
// ---------------------------------------------------------------------------

/// What the stub generator answers with.
#[derive(Debug, Clone)]
pub enum StubOutcome {
    Copy { title: String, description: String },
    Transport,
    Unauthorized,
    Empty,
    Malformed,
}

/// [`CopyGenerator`] that returns a fixed outcome and records its inputs.
pub struct StubGenerator {
    outcome: StubOutcome,
    calls: AtomicUsize,
    last_input: Mutex<Option<CreateCopyInput>>,
}

impl StubGenerator {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        })
    }

    pub fn returning(title: &str, description: &str) -> Arc<Self> {
        Self::new(StubOutcome::Copy {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<CreateCopyInput> {
        self.last_input.lock().unwrap().clone()
    }
}

#[async_trait]
impl CopyGenerator for StubGenerator {
    async fn generate(&self, input: &CreateCopyInput) -> Result<GeneratedCopy, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = Some(input.clone());

        match &self.outcome {
            StubOutcome::Copy { title, description } => Ok(GeneratedCopy {
                title: title.clone(),
                description: description.clone(),
            }),
            StubOutcome::Transport => {
                Err(GenerationError::Transport("connection refused".to_string()))
            }
            StubOutcome::Unauthorized => Err(GenerationError::Api {
                status: 401,
                body: "invalid api key".to_string(),
            }),
            StubOutcome::Empty => Err(GenerationError::EmptyResponse),
            StubOutcome::Malformed => Err(GenerationError::MalformedPayload(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as the only CORS origin and a 30-second
/// request timeout. The database URL and API key are never used.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        generation: GenerationConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "test-model".to_string(),
        },
    }
}

pub fn test_state(store: Arc<InMemoryCopyStore>, generator: Arc<StubGenerator>) -> AppState {
    AppState::new(test_config(), store, generator)
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(store: Arc<InMemoryCopyStore>, generator: Arc<StubGenerator>) -> Router {
    build_app_router(test_state(store, generator))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The create body from the worked example: every field valid.
pub fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "productName": "X",
        "productFeatures": "Y",
        "target": "Z",
        "channel": "sns",
        "tone": "casual",
        "isPublished": true
    })
}
