//! Request handlers for API endpoints.
//!
//! Handlers are infallible: solver failures arrive here already rendered
//! as text, so every endpoint responds 200 with a JSON body.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::brain::{ohm, resistors, MessageClassifier, Reply};
use crate::models::{
    ChatRequest, HealthResponse, InfoResponse, OhmRequest, ResistorRequest, SolveResponse,
};

/// Prompt returned when the chat message is empty or whitespace-only.
pub const EMPTY_MESSAGE: &str = "Type something first.";

/// Shared application state: the classifier (immutable after startup) and
/// the service start time.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<MessageClassifier>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(classifier: MessageClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
            started_at: Utc::now(),
        }
    }
}

/// Classify one message and return the structured reply.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<Reply> {
    let message = request.message.trim();
    if message.is_empty() {
        return Json(Reply::text(EMPTY_MESSAGE));
    }

    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);
    let _guard = span.enter();

    info!(length = message.len(), "classifying chat message");
    let reply = state.classifier.classify(message);
    if let Reply::Explain { topic } = &reply {
        debug!(topic = %topic, "explanation panel requested");
    }
    Json(reply)
}

/// Direct Ohm's Law computation, bypassing classification.
pub async fn ohm_handler(Json(request): Json<OhmRequest>) -> Json<SolveResponse> {
    let result = ohm::solve(
        request.voltage.as_deref(),
        request.current.as_deref(),
        request.resistance.as_deref(),
    );
    Json(SolveResponse { result })
}

/// Direct series/parallel computation.
pub async fn resistors_handler(Json(request): Json<ResistorRequest>) -> Json<SolveResponse> {
    Json(SolveResponse {
        result: resistors::solve(&request.values),
    })
}

/// Service metadata.
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "circuitchat-core",
        version: env!("CARGO_PKG_VERSION"),
        capabilities: vec!["explain", "ohm", "resistors", "intents"],
        intent_count: state.classifier.table().intents.len(),
        started_at: state.started_at,
    })
}

/// Liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
