mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use sardine_api::AppStateInner;
use sardine_db::{MemoryStore, SardineDb, SqliteStore};
use sardine_ingredients::Labeler;

use crate::config::Config;

const DEFAULT_LOG_FILTER: &str =
    "sardine_server=debug,sardine_api=debug,sardine_db=info,sardine_ingredients=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = match &config.db_path {
        Some(path) => SardineDb::new(SqliteStore::open(path)?),
        None => {
            info!("Using in-memory storage; cans will not survive a restart");
            SardineDb::new(MemoryStore::new())
        }
    };
    db.init()?;

    let state = Arc::new(AppStateInner {
        db,
        labeler: Labeler::from_config(&config.ingredients),
        community_delay: config.community_delay,
    });

    let app = sardine_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Sardine cannery listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
