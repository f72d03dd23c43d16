//! Request and response shapes owned by the HTTP layer.
//!
//! Query parameters are extracted as raw optional strings so that the
//! validators, not the extractor, decide between a 422 (malformed value)
//! and a 400 (violated range rule). The served data shapes live in
//! `spacegate_lib`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApodParams {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NeoParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MarsRoverParams {
    pub rover: Option<String>,
    pub sol: Option<String>,
    pub camera: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SpaceWeatherParams {
    pub date: Option<String>,
}

/// One entry in the discovery payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub url: String,
    pub description: String,
}

/// Discovery payload served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomePayload {
    pub message: String,
    pub endpoints: Vec<EndpointInfo>,
}

/// Liveness payload served at `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
