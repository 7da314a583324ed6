//! Data models for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Request Models
// ============================================================================

/// Body for the conversational endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The raw user message. A missing field is treated like an empty one.
    #[serde(default)]
    pub message: String,
}

/// Body for the direct Ohm's Law endpoint.
///
/// Fields are raw tokens: absent, empty and `none` all mean the quantity is
/// unknown. Field names match the front-end payload.
#[derive(Debug, Default, Deserialize)]
pub struct OhmRequest {
    #[serde(default, rename = "V")]
    pub voltage: Option<String>,
    #[serde(default, rename = "I")]
    pub current: Option<String>,
    #[serde(default, rename = "R")]
    pub resistance: Option<String>,
}

/// Body for the direct resistor-network endpoint.
#[derive(Debug, Deserialize)]
pub struct ResistorRequest {
    /// Comma-separated resistor values, e.g. "10,5,20".
    #[serde(default)]
    pub values: String,
}

// ============================================================================
// Response Models
// ============================================================================

/// Wrapper for direct solver results.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub result: String,
}

/// Service metadata returned by `GET /api/info`.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub capabilities: Vec<&'static str>,
    pub intent_count: usize,
    pub started_at: DateTime<Utc>,
}

/// Liveness payload for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
