use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use sardine_art::{Mouth, render_fish};
use sardine_types::ReleasedSardine;
use sardine_types::api::{AquariumFish, ReleaseRequest};
use sardine_types::stamps::{compose_advice, parse_stamps};

use crate::state::{AppState, with_db};

/// Answer a can and let its sardine go.
pub async fn release(
    State(state): State<AppState>,
    Path(can_id): Path<String>,
    Json(req): Json<ReleaseRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let can = with_db(&state, move |db| db.find_can(&can_id))
        .await?
        .ok_or(StatusCode::NOT_FOUND)?;

    let sardine = ReleasedSardine {
        id: Uuid::new_v4().to_string(),
        original_can_id: can.id.clone(),
        text_length: can.text_length(),
        advice_given: compose_advice(&req.stamps, &req.advice),
        industry: can.industry.clone(),
        station_id: can.station_id.clone(),
        timestamp: Utc::now(),
    };

    let record = sardine.clone();
    with_db(&state, move |db| db.save_released(record)).await?;
    info!(can_id = %can.id, sardine_id = %sardine.id, "Sardine released");

    Ok((StatusCode::CREATED, Json(sardine)))
}

pub async fn list_released(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let released = with_db(&state, |db| db.list_released()).await?;
    Ok(Json(released))
}

/// Responses to one can. Unknown ids just have no responses.
pub async fn responses_for_can(
    State(state): State<AppState>,
    Path(can_id): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let responses = with_db(&state, move |db| db.responses_for_can(&can_id)).await?;
    Ok(Json(responses))
}

pub async fn aquarium(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let released = with_db(&state, |db| db.list_released()).await?;

    let fish: Vec<AquariumFish> = released
        .into_iter()
        .map(|sardine| AquariumFish {
            glyph: render_fish(sardine.text_length, Mouth::Closed),
            stamps: parse_stamps(&sardine.advice_given),
            sardine,
        })
        .collect();

    Ok(Json(fish))
}
