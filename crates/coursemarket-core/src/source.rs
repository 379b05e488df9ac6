//! Artifact retrieval
//!
//! [`ArtifactSource`] is the seam between the loader and wherever artifacts are
//! published. Two implementations are provided:
//!
//! - [`HttpArtifactSource`] - `GET /contracts/<name>.json` against a static
//!   file server
//! - [`DirArtifactSource`] - `<dir>/<name>.json` on the local filesystem, the
//!   same layout the build writes and `coursemarket serve` publishes

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Url;

use crate::artifact::Artifact;
use crate::error::{Error, Result};

// =============================================================================
// Trait Definition
// =============================================================================

/// Somewhere contract artifacts can be fetched from by contract name
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Retrieve and validate the artifact for `name`.
    ///
    /// Every call performs a fresh retrieval; implementations do not cache.
    async fn fetch(&self, name: &str) -> Result<Artifact>;
}

#[async_trait]
impl<T: ArtifactSource + ?Sized> ArtifactSource for Box<T> {
    async fn fetch(&self, name: &str) -> Result<Artifact> {
        (**self).fetch(name).await
    }
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Fetches artifacts from `<origin>/contracts/<name>.json`
#[derive(Debug, Clone)]
pub struct HttpArtifactSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpArtifactSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured client, e.g. one with a request timeout
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base: Url = base_url.parse().map_err(|e| {
            Error::InvalidConfig(format!("Invalid artifact URL '{}': {}", base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "Artifact URL '{}' cannot be used as a base",
                base_url
            )));
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL the artifact for `name` is retrieved from. `name` is not escaped.
    pub fn artifact_url(&self, name: &str) -> Result<Url> {
        self.base
            .join(&format!("/contracts/{}.json", name))
            .map_err(|e| Error::InvalidConfig(format!("Invalid contract name '{}': {}", name, e)))
    }
}

#[async_trait]
impl ArtifactSource for HttpArtifactSource {
    async fn fetch(&self, name: &str) -> Result<Artifact> {
        let url = self.artifact_url(name)?;
        tracing::debug!(contract = name, %url, "fetching artifact");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ArtifactStatus {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Artifact::from_slice(name, &body)
    }
}

// =============================================================================
// Filesystem Implementation
// =============================================================================

/// Reads artifacts from a flat directory of `<name>.json` files
#[derive(Debug, Clone)]
pub struct DirArtifactSource {
    dir: PathBuf,
}

impl DirArtifactSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Raw artifact bytes, unvalidated
    pub async fn read_raw(&self, name: &str) -> Result<Vec<u8>> {
        match tokio::fs::read(self.artifact_path(name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::ArtifactNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Names of all artifacts in the directory, sorted
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|e| e != "json") || !entry.file_type().await?.is_file()
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl ArtifactSource for DirArtifactSource {
    async fn fetch(&self, name: &str) -> Result<Artifact> {
        let body = self.read_raw(name).await?;
        Artifact::from_slice(name, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    const ARTIFACT: &str = r#"{
        "contractName": "CourseMarketplace",
        "abi": [],
        "networks": {
            "5777": {"address": "0x5FbDB2315678afecb367f032d93F642f64180aa3"}
        }
    }"#;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_artifact_url() {
        let source = HttpArtifactSource::new("http://localhost:3000").unwrap();
        assert_eq!(
            source.artifact_url("CourseMarketplace").unwrap().as_str(),
            "http://localhost:3000/contracts/CourseMarketplace.json"
        );
    }

    #[test]
    fn test_artifact_url_ignores_base_path() {
        let source = HttpArtifactSource::new("https://courses.example/marketplace/").unwrap();
        assert_eq!(
            source.artifact_url("Faucet").unwrap().as_str(),
            "https://courses.example/contracts/Faucet.json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpArtifactSource::new("not a url"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(HttpArtifactSource::new("mailto:dev@courses.example").is_err());
    }

    #[tokio::test]
    async fn test_http_fetch() {
        let base = spawn(Router::new().route(
            "/contracts/CourseMarketplace.json",
            get(|| async { ARTIFACT }),
        ))
        .await;

        let source = HttpArtifactSource::new(&base).unwrap();
        let artifact = source.fetch("CourseMarketplace").await.unwrap();

        assert_eq!(artifact.contract_name.as_deref(), Some("CourseMarketplace"));
        assert_eq!(artifact.networks.len(), 1);
    }

    #[tokio::test]
    async fn test_http_not_found_is_status_error() {
        let base = spawn(Router::new()).await;

        let source = HttpArtifactSource::new(&base).unwrap();
        let err = source.fetch("Missing").await.unwrap_err();

        assert!(matches!(
            err,
            Error::ArtifactStatus { ref name, status: 404 } if name == "Missing"
        ));
    }

    #[tokio::test]
    async fn test_http_server_error_is_status_error() {
        let base = spawn(Router::new().route(
            "/contracts/CourseMarketplace.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let source = HttpArtifactSource::new(&base).unwrap();
        let err = source.fetch("CourseMarketplace").await.unwrap_err();
        assert!(matches!(err, Error::ArtifactStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_http_malformed_body() {
        let base = spawn(Router::new().route(
            "/contracts/CourseMarketplace.json",
            get(|| async { "<!DOCTYPE html><html></html>" }),
        ))
        .await;

        let source = HttpArtifactSource::new(&base).unwrap();
        let err = source.fetch("CourseMarketplace").await.unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { .. }));
    }

    #[tokio::test]
    async fn test_http_unreachable_is_transport_error() {
        // Bind then drop so the port is known to be closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpArtifactSource::new(&format!("http://{}", addr)).unwrap();
        let err = source.fetch("CourseMarketplace").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_dir_fetch() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("CourseMarketplace.json"), ARTIFACT).unwrap();

        let source = DirArtifactSource::new(dir.path());
        let artifact = source.fetch("CourseMarketplace").await.unwrap();
        assert_eq!(artifact.networks.len(), 1);
    }

    #[tokio::test]
    async fn test_dir_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let source = DirArtifactSource::new(dir.path());
        let err = source.fetch("CourseMarketplace").await.unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound(ref name) if name == "CourseMarketplace"));
    }

    #[tokio::test]
    async fn test_dir_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Faucet.json"), "{}").unwrap();
        std::fs::write(dir.path().join("CourseMarketplace.json"), ARTIFACT).unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();
        std::fs::create_dir(dir.path().join("build-info.json")).unwrap();

        let source = DirArtifactSource::new(dir.path());
        assert_eq!(
            source.list().await.unwrap(),
            vec!["CourseMarketplace".to_string(), "Faucet".to_string()]
        );
    }

    #[tokio::test]
    async fn test_dir_list_missing_dir() {
        let source = DirArtifactSource::new("/nonexistent/coursemarket/contracts");
        assert!(source.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_boxed_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("CourseMarketplace.json"), ARTIFACT).unwrap();

        let source: Box<dyn ArtifactSource> = Box::new(DirArtifactSource::new(dir.path()));
        assert!(source.fetch("CourseMarketplace").await.is_ok());
    }
}
