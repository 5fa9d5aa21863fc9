use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use tracing::error;

use sardine_db::SardineDb;
use sardine_ingredients::Labeler;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: SardineDb,
    pub labeler: Labeler,
    /// Delay before a simulated stranger answers a new can. `None` disables
    /// the simulation.
    pub community_delay: Option<Duration>,
}

/// Run a blocking store call off the async runtime.
pub async fn with_db<F, T>(state: &AppState, f: F) -> Result<T, StatusCode>
where
    F: FnOnce(&SardineDb) -> sardine_db::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!("Storage error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
