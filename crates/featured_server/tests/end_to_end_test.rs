use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use featured_core::{AppConfig, AppConfigBuilder, ImageResponseMode, RunResult};
use featured_server::{AppState, create_router, run_once};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "title": {"rendered": "Best Cabs in Manchester"}, "featured_media": 0}
        ])))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"b64_json": "ZmFrZS1wbmctYnl0ZXM="}]
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/media"))
        .and(header("content-type", "image/png"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 900})))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts/42"))
        .and(body_json(json!({"featured_media": 900})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> anyhow::Result<AppConfig> {
    Ok(AppConfigBuilder::default()
        .openai_api_key("sk-test")
        .wp_base_url(server.uri())
        .wp_username("editor")
        .wp_app_password("abcd efgh")
        .run_secret("s3cret")
        .image_api_base(format!("{}/v1", server.uri()))
        .image_response_format(ImageResponseMode::InlinePayload)
        .build()?)
}

#[tokio::test]
async fn test_trigger_runs_against_http_collaborators() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let config = config_for(&server)?;

    let response = create_router(AppState::from_config(&config))
        .oneshot(Request::builder().uri("/run?secret=s3cret").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let json: Value = serde_json::from_slice(&body)?;
    assert_eq!(json, json!({"ok": true, "postId": 42, "mediaId": 900}));
    Ok(())
}

#[tokio::test]
async fn test_run_once_without_listener() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_site(&server).await;

    let result = run_once(&config_for(&server)?).await?;

    assert_eq!(result, RunResult::completed(42, 900));
    Ok(())
}

#[tokio::test]
async fn test_skip_if_featured_leaves_post_alone() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "title": {"rendered": "Best Cabs"}, "featured_media": 77}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = AppConfigBuilder::default()
        .openai_api_key("sk-test")
        .wp_base_url(server.uri())
        .wp_username("editor")
        .wp_app_password("abcd efgh")
        .image_api_base(format!("{}/v1", server.uri()))
        .skip_if_featured(true)
        .build()?;

    let result = run_once(&config).await?;

    assert_eq!(result, RunResult::skipped(42, 77));
    Ok(())
}
