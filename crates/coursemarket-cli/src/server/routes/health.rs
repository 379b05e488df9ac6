use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::server::error::ApiResult;
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(check))
}

/// Store liveness plus what it is publishing
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub artifact_dir: String,
    pub artifacts: usize,
}

async fn check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let artifacts = state.store().list().await?.len();

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        artifact_dir: state.store().dir().display().to_string(),
        artifacts,
    }))
}
