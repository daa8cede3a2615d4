//! Document backend client.
//!
//! Seven POST-JSON endpoints, all sharing the `{ valid, error }` failure
//! shape: `valid === false` is a session-validation refusal, anything else a
//! generic API failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use drivedocs_models::{DatabaseConfig, DriveFile, EulaStatus, FilePreview, SessionInfo};

use crate::error::{ClientError, Result};

/// Production base URL for the document cloud endpoints.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://us-central1-geotabfiles.cloudfunctions.net";

/// Operations offered by the document backend.
#[async_trait]
pub trait DocStore: Send + Sync {
    /// List the documents visible to the given query tags.
    async fn fetch_files(&self, session: &SessionInfo, tags: &[String]) -> Result<Vec<DriveFile>>;

    /// Per-database behaviour switches.
    async fn database_config(&self, session: &SessionInfo, tags: &[String])
    -> Result<DatabaseConfig>;

    /// Resolve a document to a preview handle (URL + optional content type).
    async fn open_file(&self, session: &SessionInfo, path: &str, name: &str)
    -> Result<FilePreview>;

    /// Read a document's raw bytes for download.
    async fn read_file(&self, session: &SessionInfo, path: &str, name: &str) -> Result<Vec<u8>>;

    /// Resolve a document to a raw signed URL.
    async fn read_file_url(&self, session: &SessionInfo, path: &str, name: &str) -> Result<String>;

    /// Whether the driver has accepted the EULA for this database.
    async fn check_eula(&self, session: &SessionInfo) -> Result<EulaStatus>;

    /// Record the driver's EULA acceptance.
    async fn accept_eula(&self, session: &SessionInfo) -> Result<()>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRequest<'a> {
    database: &'a str,
    session: &'a SessionInfo,
    tags: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileRequest<'a> {
    session: &'a SessionInfo,
    file_path: &'a str,
    file_name: &'a str,
}

#[derive(Serialize)]
struct EulaRequest<'a> {
    session: &'a SessionInfo,
    database: &'a str,
    username: &'a str,
}

#[derive(Deserialize)]
struct ListResponse {
    files: Vec<DriveFile>,
}

#[derive(Deserialize)]
struct UrlResponse {
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EulaResponse {
    eula_accepted: bool,
}

#[derive(Deserialize)]
struct FailureBody {
    valid: Option<bool>,
    error: Option<String>,
}

/// Map a non-2xx response body to the error taxonomy.
fn classify_failure(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<FailureBody>(body) {
        Ok(FailureBody { valid: Some(false), error }) => ClientError::Validation { message: error },
        Ok(FailureBody { error: Some(message), .. }) => ClientError::Api { status, message },
        _ => ClientError::Api { status, message: body.trim().to_string() },
    }
}

/// reqwest-backed document store.
pub struct HttpDocStore {
    client: Client,
    base_url: String,
}

impl Default for HttpDocStore {
    fn default() -> Self {
        Self::new(DEFAULT_DOCS_BASE_URL)
    }
}

impl HttpDocStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        let response = self.client.post(&url).json(body).send().await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let error = classify_failure(status, &body);
        tracing::error!(endpoint, status, error = %error, "document endpoint failed");
        Err(error)
    }
}

#[async_trait]
impl DocStore for HttpDocStore {
    async fn fetch_files(&self, session: &SessionInfo, tags: &[String]) -> Result<Vec<DriveFile>> {
        let request = ListRequest { database: &session.database, session, tags };
        let response: ListResponse = self.post("fetchDriveFiles", &request).await?.json().await?;
        Ok(response.files)
    }

    async fn database_config(
        &self,
        session: &SessionInfo,
        tags: &[String],
    ) -> Result<DatabaseConfig> {
        let request = ListRequest { database: &session.database, session, tags };
        Ok(self.post("getDatabaseConfig", &request).await?.json().await?)
    }

    async fn open_file(
        &self,
        session: &SessionInfo,
        path: &str,
        name: &str,
    ) -> Result<FilePreview> {
        let request = FileRequest { session, file_path: path, file_name: name };
        Ok(self.post("openDocFile", &request).await?.json().await?)
    }

    async fn read_file(&self, session: &SessionInfo, path: &str, name: &str) -> Result<Vec<u8>> {
        let request = FileRequest { session, file_path: path, file_name: name };
        let response = self.post("readDocFile", &request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn read_file_url(&self, session: &SessionInfo, path: &str, name: &str) -> Result<String> {
        let request = FileRequest { session, file_path: path, file_name: name };
        let response: UrlResponse = self.post("readDocFileUrl", &request).await?.json().await?;
        Ok(response.url)
    }

    async fn check_eula(&self, session: &SessionInfo) -> Result<EulaStatus> {
        let request = EulaRequest {
            session,
            database: &session.database,
            username: &session.user_name,
        };
        let response: EulaResponse = self.post("checkEula", &request).await?.json().await?;
        Ok(if response.eula_accepted { EulaStatus::Accepted } else { EulaStatus::Pending })
    }

    async fn accept_eula(&self, session: &SessionInfo) -> Result<()> {
        let request = EulaRequest {
            session,
            database: &session.database,
            username: &session.user_name,
        };
        self.post("addEulaUser", &request).await?;
        Ok(())
    }
}

/// Infer a preview content type from the file-name extension when the
/// backend omits one. Unknown extensions yield `None`.
pub fn infer_content_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit('.').next()?.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "mp4" => Some("video/mp4"),
        "mp3" => Some("audio/mpeg"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_session_maps_to_validation_error() {
        let error = classify_failure(403, r#"{"valid":false,"error":"session expired"}"#);
        assert!(error.is_validation());
        assert!(error.to_string().contains("session expired"));
    }

    #[test]
    fn other_failures_map_to_api_error() {
        let error = classify_failure(500, r#"{"valid":true,"error":"boom"}"#);
        assert!(matches!(error, ClientError::Api { status: 500, .. }));

        let error = classify_failure(502, "bad gateway");
        assert!(matches!(error, ClientError::Api { status: 502, .. }));
    }

    #[test]
    fn content_type_inference_covers_known_extensions() {
        assert_eq!(infer_content_type("manual.PDF"), Some("application/pdf"));
        assert_eq!(infer_content_type("photo.jpg"), Some("image/jpeg"));
        assert_eq!(infer_content_type("notes.txt"), Some("text/plain"));
        assert_eq!(infer_content_type("archive.zip"), None);
    }
}
