use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use featured_core::{AppConfig, GeneratedImage, MediaRecord, Post};
use featured_error::{PipelineError, PipelineErrorKind, PipelineResult};
use featured_interface::ContentApi;
use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde_json::{Value, json};
use tracing::instrument;

/// Path of the REST API below the site URL.
pub const REST_PREFIX: &str = "/wp-json/wp/v2";

/// Client for a WordPress site's REST API
#[derive(Clone)]
pub struct WordPressClient {
    client: reqwest::Client,
    api_base: String,
    authorization: String,
}

impl std::fmt::Debug for WordPressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordPressClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl WordPressClient {
    /// Create a client from the worker configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self::from_parts(
            reqwest::Client::new(),
            config.wp_base_url(),
            config.wp_username(),
            config.wp_app_password(),
        )
    }

    /// Create a client from an existing HTTP client and credentials.
    #[instrument(skip(client, app_password))]
    pub fn from_parts(
        client: reqwest::Client,
        site_url: &str,
        username: &str,
        app_password: &str,
    ) -> Self {
        tracing::debug!("Creating WordPress client");
        let credentials = STANDARD.encode(format!("{}:{}", username, app_password));
        Self {
            client,
            api_base: format!("{}{}", site_url.trim_end_matches('/'), REST_PREFIX),
            authorization: format!("Basic {}", credentials),
        }
    }

    /// Base URL of the REST API, including [`REST_PREFIX`].
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_base, path))
            .header(AUTHORIZATION, &self.authorization)
    }

    /// Send a request with an optional JSON body and parse the JSON reply.
    ///
    /// Non-success replies become `on_failure` errors carrying the status
    /// and the raw body text.
    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        on_failure: fn(String) -> PipelineErrorKind,
    ) -> PipelineResult<Value> {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send_json(request, on_failure).await
    }

    async fn send_json(
        &self,
        request: RequestBuilder,
        on_failure: fn(String) -> PipelineErrorKind,
    ) -> PipelineResult<Value> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            PipelineError::new(PipelineErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            PipelineError::new(PipelineErrorKind::Http(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            tracing::error!(status = %status, "WordPress returned error");
            return Err(PipelineError::new(on_failure(format!("{} {}", status, text))));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            PipelineError::new(PipelineErrorKind::MalformedResponse(format!(
                "{} in body: {}",
                e, text
            )))
        })
    }
}

#[async_trait]
impl ContentApi for WordPressClient {
    #[instrument(skip(self))]
    async fn latest_post(&self) -> PipelineResult<Post> {
        tracing::debug!("Fetching latest post");

        let request = self
            .request(Method::GET, "/posts")
            .query(&[("per_page", "1"), ("orderby", "date"), ("order", "desc")]);
        let value = self.send_json(request, PipelineErrorKind::Http).await?;

        let Value::Array(posts) = value else {
            return Err(PipelineError::new(PipelineErrorKind::NotFound(
                "posts response is not a list".into(),
            )));
        };
        let first = posts.into_iter().next().ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::NotFound("no posts returned".into()))
        })?;

        let post: Post = serde_json::from_value(first).map_err(|e| {
            PipelineError::new(PipelineErrorKind::MalformedResponse(format!(
                "Invalid post: {}",
                e
            )))
        })?;

        tracing::debug!(post_id = post.id, "Fetched latest post");
        Ok(post)
    }

    #[instrument(skip(self, image), fields(filename = %image.filename(), bytes = image.bytes().len()))]
    async fn upload_media(&self, image: &GeneratedImage) -> PipelineResult<MediaRecord> {
        tracing::debug!("Uploading media");

        let request = self
            .request(Method::POST, "/media")
            .header(CONTENT_TYPE, GeneratedImage::CONTENT_TYPE)
            .header(
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", image.filename()),
            )
            .body(image.bytes().clone());
        let value = self.send_json(request, PipelineErrorKind::Upload).await?;

        let id = value.get("id").and_then(Value::as_u64).ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::Upload(format!(
                "response has no media id: {}",
                value
            )))
        })?;

        tracing::info!(media_id = id, "Uploaded media");
        Ok(MediaRecord { id })
    }

    #[instrument(skip(self))]
    async fn set_featured_image(&self, post_id: u64, media_id: u64) -> PipelineResult<()> {
        tracing::debug!("Setting featured image");

        let body = json!({ "featured_media": media_id });
        self.request_json(
            Method::POST,
            &format!("/posts/{}", post_id),
            Some(&body),
            PipelineErrorKind::Update,
        )
        .await?;

        tracing::info!("Featured image set");
        Ok(())
    }
}
