use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use server_api::{list_records, ApiContext};
use shared::{error::ApiError, protocol::Record};
use store::RecordStore;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

mod config;

use config::load_settings;

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    if !Path::new(&settings.records_path).exists() {
        warn!(
            records_path = %settings.records_path,
            "record file does not exist yet; /records will return a server error until it does"
        );
    }

    let store = RecordStore::new(&settings.records_path);
    let state = AppState {
        api: ApiContext { store },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, records_path = %settings.records_path, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/records", get(http_list_records))
        // The presentation client is served from another origin in the
        // compose setup, so the data endpoint must answer cross-origin GETs.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, (StatusCode, Json<ApiError>)> {
    let records = list_records(&state.api).await.map_err(|e| {
        error!(message = %e.message, "record listing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(e))
    })?;
    Ok(Json(records))
}
