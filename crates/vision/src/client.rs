//! REST client for the label-detection endpoint of the vision service.
//!
//! Wraps a Google-Vision-style `images:annotate` API using [`reqwest`]:
//! the image is sent base64-encoded with a `LABEL_DETECTION` feature
//! request, and the response's label annotations are returned as plain
//! description strings.

use base64::Engine;
use serde::Deserialize;

/// Errors from the vision REST layer.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vision service returned a non-2xx status code.
    #[error("Vision API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Source of detected labels for an image.
///
/// The production implementation is [`VisionClient`]; tests substitute a
/// stub so handler flows can be exercised without the external service.
#[async_trait::async_trait]
pub trait LabelSource: Send + Sync {
    /// Detect labels for the given image bytes.
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<String>, VisionError>;
}

/// HTTP client for the vision service's annotate endpoint.
pub struct VisionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateResult>,
}

#[derive(Debug, Deserialize)]
struct AnnotateResult {
    #[serde(rename = "labelAnnotations", default)]
    label_annotations: Vec<LabelAnnotation>,
}

#[derive(Debug, Deserialize)]
struct LabelAnnotation {
    description: String,
}

impl VisionClient {
    /// Create a new client for the annotate endpoint.
    ///
    /// * `api_url` - Base annotate URL, e.g.
    ///   `https://vision.googleapis.com/v1/images:annotate`.
    /// * `api_key` - API key appended as the `key` query parameter.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl LabelSource for VisionClient {
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<String>, VisionError> {
        let content = base64::engine::general_purpose::STANDARD.encode(image);
        let body = serde_json::json!({
            "requests": [{
                "image": { "content": content },
                "features": [{ "type": "LABEL_DETECTION" }],
            }]
        });

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnnotateResponse = response.json().await?;
        let labels: Vec<String> = parsed
            .responses
            .into_iter()
            .flat_map(|r| r.label_annotations)
            .map(|a| a.description)
            .collect();

        tracing::debug!(label_count = labels.len(), "Vision service returned labels");
        Ok(labels)
    }
}
