//! Server application state

use std::path::PathBuf;
use std::sync::Arc;

use coursemarket_core::DirArtifactSource;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<DirArtifactSource>,
}

impl AppState {
    /// Serve artifacts out of `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(DirArtifactSource::new(dir)),
        }
    }

    /// Get a reference to the artifact directory
    pub fn store(&self) -> &DirArtifactSource {
        self.store.as_ref()
    }
}
