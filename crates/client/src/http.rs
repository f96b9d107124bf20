//! HTTP plumbing shared by every endpoint wrapper.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use stockroom_core::error::{ApiError, ApiResult};

/// Client for the inventory backend.
///
/// Holds the injected base URL and a shared connection pool. The base URL
/// is passed in at construction rather than read from ambient state, so the
/// client can be pointed at a stub server in tests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check connectivity by hitting the API root.
    ///
    /// `GET /api` answers `{"message": ...}` when the backend is up.
    pub async fn server_message(&self) -> ApiResult<String> {
        #[derive(serde::Deserialize)]
        struct Root {
            message: String,
        }

        let root: Root = self.get_json("/api", &[]).await?;
        Ok(root.message)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Map a response status to the error taxonomy.
    pub(crate) fn status_error(status: StatusCode) -> ApiError {
        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::BAD_REQUEST => ApiError::InvalidInput,
            status => ApiError::request_failed(format!("unexpected status {status}")),
        }
    }

    /// Pass a successful response through, otherwise fold the status into
    /// the taxonomy.
    pub(crate) fn check_status(resp: Response) -> ApiResult<Response> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            tracing::debug!(status = %resp.status(), url = %resp.url(), "request rejected");
            Err(Self::status_error(resp.status()))
        }
    }

    pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
        ApiError::request_failed(format!("network error: {err}"))
    }

    /// Decode a JSON body, folding decode failures into `RequestFailed`.
    pub(crate) async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::request_failed(format!("invalid response body: {e}")))
    }

    /// `GET {base}{path}?{query}` returning a decoded JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;
        let resp = Self::check_status(resp)?;
        Self::decode(resp).await
    }
}
