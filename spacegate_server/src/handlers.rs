//! HTTP handlers for the gateway endpoints.
//!
//! Each handler validates its raw parameters, delegates to the domain
//! layer, and serializes the shaped payload. Upstream failures surface as
//! inline `{"error"}` payloads via [`AppError::Upstream`].

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use spacegate_lib::validation::{
    self, MARS_DEFAULT_LIMIT, MARS_DEFAULT_ROVER, NEO_DEFAULT_LIMIT,
};
use spacegate_lib::{fetch_apod, fetch_epic, fetch_mars_photos, fetch_neo};

use super::dto::{
    ApodParams, EndpointInfo, HealthResponse, MarsRoverParams, NeoParams, SpaceWeatherParams,
    WelcomePayload,
};
use super::error::AppError;
use super::state::AppState;

/// GET /
///
/// Static discovery payload listing the data endpoints.
pub async fn root() -> Json<WelcomePayload> {
    let endpoints = [
        ("/apod", "Astronomy Picture of the Day"),
        ("/neo", "Near Earth Objects for a date range"),
        ("/mars-rover", "Mars rover photos by sol"),
        ("/space-weather", "EPIC Earth imagery"),
    ];
    Json(WelcomePayload {
        message: "Welcome to the space-data gateway".to_string(),
        endpoints: endpoints
            .into_iter()
            .map(|(url, description)| EndpointInfo {
                url: url.to_string(),
                description: description.to_string(),
            })
            .collect(),
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /apod?date=YYYY-MM-DD
///
/// The date is optional; when present it must parse and is forwarded
/// unmodified.
pub async fn apod(
    State(state): State<AppState>,
    Query(params): Query<ApodParams>,
) -> Result<Response, AppError> {
    let date = params
        .date
        .as_deref()
        .map(validation::validate_date)
        .transpose()?;
    let view = fetch_apod(&state.client, date).await?;
    Ok(Json(view).into_response())
}

/// GET /neo?start_date=&end_date=&limit=
///
/// Both dates are required; the range rules must pass before any upstream
/// call is made.
pub async fn neo(
    State(state): State<AppState>,
    Query(params): Query<NeoParams>,
) -> Result<Response, AppError> {
    let start_date = match params.start_date.as_deref() {
        Some(raw) => validation::validate_date(raw)?,
        None => return Err(AppError::UnprocessableEntity("start_date is required".into())),
    };
    let end_date = match params.end_date.as_deref() {
        Some(raw) => validation::validate_date(raw)?,
        None => return Err(AppError::UnprocessableEntity("end_date is required".into())),
    };
    let limit = validation::validate_limit(params.limit.as_deref(), NEO_DEFAULT_LIMIT)?;
    validation::validate_neo_range(start_date, end_date)?;

    let records = fetch_neo(&state.client, start_date, end_date, limit).await?;
    Ok(Json(records).into_response())
}

/// GET /mars-rover?rover=&sol=&camera=&limit=
pub async fn mars_rover(
    State(state): State<AppState>,
    Query(params): Query<MarsRoverParams>,
) -> Result<Response, AppError> {
    let sol = validation::validate_sol(params.sol.as_deref())?;
    let limit = validation::validate_limit(params.limit.as_deref(), MARS_DEFAULT_LIMIT)?;
    let rover = params.rover.as_deref().unwrap_or(MARS_DEFAULT_ROVER);

    let photos = fetch_mars_photos(
        &state.client,
        rover,
        sol,
        params.camera.as_deref(),
        limit,
    )
    .await?;
    Ok(Json(photos).into_response())
}

/// GET /space-weather?date=YYYY-MM-DD
///
/// An empty listing is not an error: it becomes a `{"message"}` payload,
/// distinct from the `{"error"}` shape used for upstream failures.
pub async fn space_weather(
    State(state): State<AppState>,
    Query(params): Query<SpaceWeatherParams>,
) -> Result<Response, AppError> {
    let date = match params.date.as_deref() {
        Some(raw) => validation::validate_date(raw)?,
        None => return Err(AppError::UnprocessableEntity("date is required".into())),
    };
    validation::validate_epic_date(date)?;

    let images = fetch_epic(&state.client, date).await?;
    if images.is_empty() {
        return Ok(Json(json!({
            "message": format!("no imagery found for {}", date.format("%Y-%m-%d"))
        }))
        .into_response());
    }
    Ok(Json(images).into_response())
}
