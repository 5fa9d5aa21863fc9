use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use sardine_art::{Mouth, render_can, render_fish};
use sardine_db::CanFilter;
use sardine_types::Can;
use sardine_types::api::{CanView, CreateCanRequest, RandomCanQuery};

use crate::community;
use crate::state::{AppState, with_db};

/// The can frame for `can`, with its fish sized by the message.
pub fn can_art(can: &Can, mouth: Mouth) -> Vec<String> {
    render_can(&render_fish(can.text_length(), mouth), &can.industry)
}

pub async fn create_can(
    State(state): State<AppState>,
    Json(req): Json<CreateCanRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if req.text.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let ingredients = state.labeler.label(&req.text).await;

    let can = Can {
        id: Uuid::new_v4().to_string(),
        text: req.text,
        industry: req.industry,
        advice_needed: req.advice_needed,
        mood: req.mood,
        timestamp: Utc::now(),
        ingredients: Some(ingredients),
        station_id: req.station_id.filter(|s| !s.is_empty()),
    };

    let record = can.clone();
    with_db(&state, move |db| db.save_can(record)).await?;
    info!(can_id = %can.id, industry = %can.industry, "Can sealed");

    community::schedule_reply(state.clone(), can.clone());

    let art = can_art(&can, Mouth::Open);
    Ok((StatusCode::CREATED, Json(CanView { can, art })))
}

pub async fn list_cans(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let cans = with_db(&state, |db| db.list_cans()).await?;
    Ok(Json(cans))
}

pub async fn get_can(
    State(state): State<AppState>,
    Path(can_id): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let can = with_db(&state, move |db| db.find_can(&can_id))
        .await?
        .ok_or(StatusCode::NOT_FOUND)?;

    let art = can_art(&can, Mouth::Closed);
    Ok(Json(CanView { can, art }))
}

pub async fn random_can(
    State(state): State<AppState>,
    Query(query): Query<RandomCanQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let filter = CanFilter::new(query.industry, query.advice);
    debug!(?filter, "Fishing for a random can");

    let found = with_db(&state, move |db| {
        let mut rng = rand::rng();
        db.random_can(&filter, &mut rng)
    })
    .await?;

    let can = found.ok_or(StatusCode::NOT_FOUND)?;
    let art = can_art(&can, Mouth::Closed);
    Ok(Json(CanView { can, art }))
}

pub async fn manifest(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let entries = with_db(&state, |db| db.manifest()).await?;
    Ok(Json(entries))
}
