use std::env;
use std::time::Duration;
use reqwest::{Client, StatusCode};
use reqwest::header::CONTENT_TYPE;
use crate::analysis::utils::analysis_result::{AnalysisResult, AnalyzeResponse};

pub const ENDPOINT_VARIABLE: &str = "AI_SERVICE_ENDPOINT";
pub const KEY_VARIABLE: &str = "AI_SERVICE_KEY";

const ANALYZE_PATH: &str = "vision/v3.2/analyze";
const VISUAL_FEATURES: &str = "Description,Tags,Objects";

#[derive(Debug, thiserror::Error)]
pub enum VisionClientError {
    #[error("Vision service credentials are not configured")]
    ConfigurationMissing,
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {text}")]
    UnexpectedStatus { status: StatusCode, text: String },
}

pub struct VisionClient {
    http_client: Client,
    endpoint: String,
    api_key: String,
}

impl VisionClient {
    /// Create vision client
    ///
    /// # Panics
    /// if it can't create the client.
    #[must_use]
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            http_client: Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Build the client from process environment. The server keeps running
    /// without one; analysis calls then fail with `ConfigurationMissing`.
    pub fn from_env() -> Result<Self, VisionClientError> {
        let endpoint = env::var(ENDPOINT_VARIABLE).map_err(|_| VisionClientError::ConfigurationMissing)?;
        let api_key = env::var(KEY_VARIABLE).map_err(|_| VisionClientError::ConfigurationMissing)?;
        Ok(Self::new(&endpoint, &api_key))
    }

    /// Submit image bytes to the remote analyze operation.
    ///
    /// # Errors
    /// * If the POST request can't be made.
    /// * If the response body can't be read or parsed.
    /// * If an unexpected status code is received.
    pub async fn analyze(&self, image_bytes: &[u8]) -> Result<AnalysisResult, VisionClientError> {
        let url = self.analyze_url();
        let response = self.http_client.post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image_bytes.to_vec())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let analyze_response = response.json::<AnalyzeResponse>().await?;
                Ok(AnalysisResult::from(analyze_response))
            },
            status => {
                let text = response.text().await?;
                Err(VisionClientError::UnexpectedStatus { status, text })
            },
        }
    }

    fn analyze_url(&self) -> String {
        format!("{endpoint}/{ANALYZE_PATH}?visualFeatures={VISUAL_FEATURES}", endpoint = self.endpoint)
    }
}
