//! HTTP client for the scansum summarization API.
//!
//! Wraps the four backend endpoints (`/health`, `/sample-data`, `/upload`,
//! `/summarize`) behind JSON-returning methods. Every failure is logged at
//! the point of occurrence and returned to the caller; nothing is
//! swallowed.

mod envelope;

use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use scansum_types::{AnalysisResult, Host, HostData};

pub use envelope::{decode_envelope, take_data};

/// Default base URL of the backend API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default summary type passed to `/summarize` when none is selected.
pub const DEFAULT_SUMMARY_TYPE: &str = "detailed";

/// Errors surfaced by [`ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or a body that was not the expected JSON.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered but reported `success: false`.
    #[error("{0}")]
    Api(String),
}

/// Client for the summarization backend.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client against `base_url` (no trailing slash) with a
    /// 60-second request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("scansum/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `/health` — liveness payload, returned as raw JSON.
    pub async fn health(&self) -> Result<Value, ClientError> {
        let resp = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "health check failed");
                ClientError::Network(e.to_string())
            })?;
        resp.json().await.map_err(|e| {
            error!(error = %e, "health check returned a non-JSON body");
            ClientError::Network(e.to_string())
        })
    }

    /// GET `/sample-data` — the bundled demo host set.
    pub async fn sample_data(&self) -> Result<HostData, ClientError> {
        let mut body = self.get_json("/sample-data").await.map_err(|e| {
            error!(error = %e, "failed to fetch sample data");
            e
        })?;
        take_data(&mut body).map_err(|e| {
            error!(error = %e, "sample data response was malformed");
            e
        })
    }

    /// POST `/upload` — multipart upload of a local host-data file under
    /// form field `file`.
    ///
    /// Preflight: the file must exist and carry a `.json` extension (the
    /// backend rejects anything else anyway).
    pub async fn upload_file(&self, path: &Path) -> Result<HostData, ClientError> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            let err = ClientError::Api("Only JSON files are supported".into());
            error!(path = %path.display(), "rejected non-JSON upload");
            return Err(err);
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to read upload file");
            ClientError::Network(format!("cannot read {}: {e}", path.display()))
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.json".into());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/json")
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let body = self
            .post("/upload")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "file upload failed");
                ClientError::Network(e.to_string())
            })?
            .json::<Value>()
            .await
            .map_err(|e| {
                error!(error = %e, "upload response was not JSON");
                ClientError::Network(e.to_string())
            })?;

        decode_envelope(body, "Upload failed").map_err(|e| {
            error!(error = %e, "file upload rejected");
            e
        })
    }

    /// POST `/summarize` — request an analysis of `hosts`.
    ///
    /// `summary_type` is opaque to the client and passed through verbatim.
    pub async fn summarize(
        &self,
        hosts: &[Host],
        summary_type: &str,
    ) -> Result<AnalysisResult, ClientError> {
        debug!(hosts = hosts.len(), summary_type, "requesting summary");
        let body = self
            .post("/summarize")
            .json(&summarize_body(hosts, summary_type))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "summarization request failed");
                ClientError::Network(e.to_string())
            })?
            .json::<Value>()
            .await
            .map_err(|e| {
                error!(error = %e, "summarization response was not JSON");
                ClientError::Network(e.to_string())
            })?;

        decode_envelope(body, "Summarization failed").map_err(|e| {
            error!(error = %e, "summarization rejected");
            e
        })
    }

    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        resp.json()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }
}

/// Build the exact JSON body posted to `/summarize`.
pub fn summarize_body(hosts: &[Host], summary_type: &str) -> Value {
    serde_json::json!({
        "hosts": hosts,
        "summary_type": summary_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/health"), "http://localhost:5000/api/health");
    }

    #[test]
    fn summarize_body_shape() {
        let hosts = vec![Host::new("1.1.1.1"), Host::new("2.2.2.2")];
        let body = summarize_body(&hosts, "brief");
        assert_eq!(body["summary_type"], "brief");
        assert_eq!(body["hosts"].as_array().unwrap().len(), 2);
        assert_eq!(body["hosts"][0]["ip"], "1.1.1.1");
    }

    #[tokio::test]
    async fn upload_rejects_non_json_extension() {
        let client = ApiClient::new(DEFAULT_API_URL);
        let err = client
            .upload_file(Path::new("/tmp/hosts.csv"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Only JSON files are supported");
    }

    #[tokio::test]
    async fn upload_missing_file_is_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let client = ApiClient::new(DEFAULT_API_URL);
        let err = client.upload_file(&missing).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }

    #[test]
    fn error_display_is_the_banner_message() {
        assert_eq!(
            ClientError::Api("Host list cannot be empty".into()).to_string(),
            "Host list cannot be empty"
        );
        assert!(
            ClientError::Network("connection refused".into())
                .to_string()
                .starts_with("network error")
        );
    }
}
