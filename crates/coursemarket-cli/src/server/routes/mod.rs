mod contracts;
mod health;

use axum::Router;

use crate::server::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(contracts::router())
        .with_state(state)
}
