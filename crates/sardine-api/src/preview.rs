use axum::{Json, extract::Path, http::StatusCode};

use sardine_art::{MascotState, Mouth, render_can, render_fish, render_mascot};
use sardine_types::api::{Labels, PreviewRequest, PreviewResponse, StationView};
use sardine_types::mood::is_distressed;
use sardine_types::stations::{STATIONS, Station, neighbors, station};

/// What a message would look like once canned, before it is sealed.
pub async fn preview(Json(req): Json<PreviewRequest>) -> Json<PreviewResponse> {
    let length = req.text.chars().count();
    let distressed = is_distressed(&req.text);

    let fish = render_fish(length, Mouth::Open);
    let can = render_can(&fish, &req.industry);
    let mascot = render_mascot(
        length,
        MascotState {
            talking: req.talking,
            crying: distressed,
        },
        req.tick,
    );

    Json(PreviewResponse {
        fish,
        can,
        mascot,
        distressed,
    })
}

pub async fn stations() -> Json<&'static [Station]> {
    Json(STATIONS)
}

pub async fn station_detail(
    Path(station_id): Path<String>,
) -> Result<Json<StationView>, StatusCode> {
    let station = station(&station_id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(StationView {
        station,
        neighbors: neighbors(&station_id),
    }))
}

pub async fn labels() -> Json<Labels> {
    Json(Labels::all())
}
