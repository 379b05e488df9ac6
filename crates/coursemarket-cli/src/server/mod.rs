mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use tower_http::cors::{Any, CorsLayer};

pub use routes::create_router;
pub use state::AppState;

/// Server configuration
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dir: PathBuf,
}

/// Start the artifact store
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config.dir);

    // Front ends fetch artifacts from their own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "artifact store listening");

    axum::serve(listener, app).await?;

    Ok(())
}
