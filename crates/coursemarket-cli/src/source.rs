//! Artifact store selection from a single `--artifacts` value

use async_trait::async_trait;
use color_eyre::eyre::Result;
use coursemarket_core::{Artifact, ArtifactSource, DirArtifactSource, HttpArtifactSource};

/// Either an HTTP artifact store or a local artifact directory
#[derive(Debug, Clone)]
pub enum ArtifactLocation {
    Http(HttpArtifactSource),
    Dir(DirArtifactSource),
}

impl ArtifactLocation {
    /// `http://` and `https://` values are stores; anything else is a directory
    pub fn parse(value: &str) -> Result<Self> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(Self::Http(HttpArtifactSource::new(value)?))
        } else {
            Ok(Self::Dir(DirArtifactSource::new(value)))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.base_url().to_string(),
            Self::Dir(source) => source.dir().display().to_string(),
        }
    }
}

#[async_trait]
impl ArtifactSource for ArtifactLocation {
    async fn fetch(&self, name: &str) -> coursemarket_core::Result<Artifact> {
        match self {
            Self::Http(source) => source.fetch(name).await,
            Self::Dir(source) => source.fetch(name).await,
        }
    }
}
