//! HTTP client for the upstream legislators dataset.

use crate::error::UpstreamError;
use crate::models::RawMember;

/// HTTP client for fetching the upstream legislators document.
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new(10)
    }
}

impl UpstreamClient {
    /// Create a new client with the given request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("capitol-sync/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
        }
    }

    /// Fetch and deserialize the full upstream member list. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the HTTP request fails, the host
    /// returns a non-success status, or the body cannot be parsed.
    pub async fn fetch_current(&self, url: &str) -> Result<Vec<RawMember>, UpstreamError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        let members: Vec<RawMember> = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))?;
        tracing::debug!(count = members.len(), url, "fetched upstream members");
        Ok(members)
    }
}

/// Check an HTTP response, mapping non-success statuses to
/// [`UpstreamError::Api`] with the response body as the message.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    if !resp.status().is_success() {
        return Err(UpstreamError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_maps_server_error() {
        let resp = mock_response(503, "maintenance");
        let err = check_response(resp).await.unwrap_err();
        match err {
            UpstreamError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_maps_not_found() {
        let resp = mock_response(404, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Api { status: 404, .. }));
    }
}
