use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::server::error::{ApiError, ApiResult};
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contracts", get(list))
        .route("/contracts/{file}", get(get_by_file))
}

async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.store().list().await?))
}

/// Artifact bytes exactly as stored, so clients see what the build wrote
async fn get_by_file(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> ApiResult<Response> {
    let name = file
        .strip_suffix(".json")
        .filter(|name| is_plain_name(name))
        .ok_or_else(|| ApiError::not_found(format!("No artifact at /contracts/{}", file)))?;

    let body = state.store().read_raw(name).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// The path segment is percent-decoded, so it may still carry separators.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_name() {
        assert!(is_plain_name("CourseMarketplace"));
        assert!(is_plain_name("Faucet.v2"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("../secrets"));
        assert!(!is_plain_name("nested/Contract"));
        assert!(!is_plain_name("nested\\Contract"));
    }
}
