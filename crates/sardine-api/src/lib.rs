pub mod cans;
pub mod community;
pub mod preview;
pub mod releases;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

pub use state::{AppState, AppStateInner};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cans", get(cans::list_cans).post(cans::create_can))
        .route("/cans/random", get(cans::random_can))
        .route("/cans/{can_id}", get(cans::get_can))
        .route("/cans/{can_id}/responses", get(releases::responses_for_can))
        .route("/cans/{can_id}/release", post(releases::release))
        .route("/released", get(releases::list_released))
        .route("/aquarium", get(releases::aquarium))
        .route("/manifest", get(cans::manifest))
        .route("/preview", post(preview::preview))
        .route("/stations", get(preview::stations))
        .route("/stations/{station_id}", get(preview::station_detail))
        .route("/labels", get(preview::labels))
        .with_state(state)
}
