use crate::payload::{ImagePayload, decode_base64};
use async_trait::async_trait;
use featured_core::{AppConfig, ImageResponseMode};
use featured_error::{PipelineError, PipelineErrorKind, PipelineResult};
use featured_interface::ImageGenerator;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Resolution requested for every image.
pub const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'static str>,
}

/// Client for an OpenAI-compatible image generation API
#[derive(Clone)]
pub struct ImageClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    mode: ImageResponseMode,
}

impl std::fmt::Debug for ImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClient")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl ImageClient {
    /// Create a client from the worker configuration
    #[instrument(skip(config), fields(model = %config.image_model(), mode = %config.image_response_format()))]
    pub fn new(config: &AppConfig) -> Self {
        tracing::debug!("Creating image client");
        Self {
            client: reqwest::Client::new(),
            api_base: config.image_api_base().trim_end_matches('/').to_string(),
            api_key: config.openai_api_key().clone(),
            model: config.image_model().clone(),
            mode: *config.image_response_format(),
        }
    }

    /// Response contract this client expects
    pub fn mode(&self) -> ImageResponseMode {
        self.mode
    }

    #[instrument(skip(self, prompt))]
    async fn request_payload(&self, prompt: &str) -> PipelineResult<ImagePayload> {
        let url = format!("{}/images/generations", self.api_base);
        tracing::debug!("Sending image generation request to {}", url);

        let request = GenerationRequest {
            model: &self.model,
            prompt,
            size: IMAGE_SIZE,
            response_format: self.mode.response_format(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                PipelineError::new(PipelineErrorKind::Generation(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            PipelineError::new(PipelineErrorKind::Generation(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            tracing::error!(status = %status, "Image API returned error");
            return Err(PipelineError::new(PipelineErrorKind::Generation(format!(
                "{} {}",
                status, text
            ))));
        }

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            PipelineError::new(PipelineErrorKind::MalformedResponse(format!(
                "{} in body: {}",
                e, text
            )))
        })?;

        ImagePayload::from_response(&body, self.mode)
    }

    #[instrument(skip(self))]
    async fn download(&self, url: &str) -> PipelineResult<Vec<u8>> {
        tracing::debug!("Downloading generated image");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Download failed: {}", e);
            PipelineError::new(PipelineErrorKind::Download(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Image host returned error");
            return Err(PipelineError::new(PipelineErrorKind::Download(format!(
                "{} from {}",
                status, url
            ))));
        }

        let bytes = response.bytes().await.map_err(|e| {
            PipelineError::new(PipelineErrorKind::Download(format!(
                "Failed to read image body: {}",
                e
            )))
        })?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, mode = %self.mode))]
    async fn generate(&self, prompt: &str) -> PipelineResult<Vec<u8>> {
        let payload = self.request_payload(prompt).await?;

        let bytes = match payload {
            ImagePayload::UrlResult(url) => self.download(&url).await?,
            ImagePayload::InlinePayloadResult(encoded) => decode_base64(&encoded)?,
        };

        tracing::info!(bytes = bytes.len(), "Generated image");
        Ok(bytes)
    }
}
