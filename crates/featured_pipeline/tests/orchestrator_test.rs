use featured_core::{Post, RenderedText, RunResult};
use featured_error::PipelineErrorKind;
use featured_interface::Runner;
use featured_interface::mock::{MockContentApi, MockImageGenerator, post};
use featured_pipeline::{Orchestrator, PLACEHOLDER_TITLE};

fn png() -> Vec<u8> {
    vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]
}

#[tokio::test]
async fn test_full_run() -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(42, Some("Best Cabs in Manchester")), 900),
        MockImageGenerator::new_success(png()),
    );

    let result = orchestrator.run_once().await?;

    assert_eq!(result, RunResult::completed(42, 900));

    let prompts = orchestrator.images().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Best Cabs in Manchester"));

    let uploaded = orchestrator.content().uploaded();
    assert_eq!(uploaded.len(), 1);
    assert_eq!(uploaded[0].bytes(), &png());
    assert!(uploaded[0].filename().starts_with("ai-taxi-"));
    assert!(uploaded[0].filename().ends_with(".png"));

    assert_eq!(orchestrator.content().updates(), vec![(42, 900)]);
    Ok(())
}

#[tokio::test]
async fn test_missing_title_uses_placeholder() -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(7, None), 11),
        MockImageGenerator::new_success(png()),
    );

    orchestrator.run_once().await?;

    let prompts = orchestrator.images().prompts();
    assert!(prompts[0].contains(PLACEHOLDER_TITLE));
    Ok(())
}

#[tokio::test]
async fn test_empty_title_uses_placeholder() -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(7, Some("")), 11),
        MockImageGenerator::new_success(png()),
    );

    orchestrator.run_once().await?;

    assert!(orchestrator.images().prompts()[0].contains(PLACEHOLDER_TITLE));
    Ok(())
}

#[tokio::test]
async fn test_no_posts_aborts_before_generation() {
    let orchestrator = Orchestrator::new(
        MockContentApi::empty(),
        MockImageGenerator::new_success(png()),
    );

    let err = orchestrator.run_once().await.unwrap_err();

    assert!(matches!(err.kind, PipelineErrorKind::NotFound(_)));
    assert_eq!(orchestrator.images().call_count(), 0);
    assert_eq!(orchestrator.content().upload_calls(), 0);
    assert_eq!(orchestrator.content().update_calls(), 0);
}

#[tokio::test]
async fn test_generation_failure_skips_upload() {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(42, Some("Title")), 900),
        MockImageGenerator::new_error(PipelineErrorKind::Generation(
            "500 Internal Server Error".into(),
        )),
    );

    let err = orchestrator.run_once().await.unwrap_err();

    assert_eq!(
        err.kind,
        PipelineErrorKind::Generation("500 Internal Server Error".into())
    );
    assert_eq!(orchestrator.images().call_count(), 1);
    assert_eq!(orchestrator.content().upload_calls(), 0);
    assert_eq!(orchestrator.content().update_calls(), 0);
}

#[tokio::test]
async fn test_upload_failure_skips_update() {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(42, Some("Title")), 900)
            .with_upload_error(PipelineErrorKind::Upload("413".into())),
        MockImageGenerator::new_success(png()),
    );

    let err = orchestrator.run_once().await.unwrap_err();

    assert!(matches!(err.kind, PipelineErrorKind::Upload(_)));
    assert_eq!(orchestrator.content().upload_calls(), 1);
    assert_eq!(orchestrator.content().update_calls(), 0);
}

// An uploaded image whose attachment fails stays in the media library.
#[tokio::test]
async fn test_update_failure_leaves_upload_in_place() {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(42, Some("Title")), 900)
            .with_update_error(PipelineErrorKind::Update("403 rest_cannot_edit".into())),
        MockImageGenerator::new_success(png()),
    );

    let err = orchestrator.run_once().await.unwrap_err();

    assert!(matches!(err.kind, PipelineErrorKind::Update(_)));
    assert_eq!(orchestrator.content().upload_calls(), 1);
    assert_eq!(orchestrator.content().update_calls(), 1);
    assert_eq!(orchestrator.content().total_calls(), 3);
}

#[tokio::test]
async fn test_consecutive_runs_use_distinct_filenames() -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(
        MockContentApi::new(post(42, Some("Title")), 900),
        MockImageGenerator::new_success(png()),
    );

    orchestrator.run_once().await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    orchestrator.run_once().await?;

    let uploaded = orchestrator.content().uploaded();
    assert_eq!(uploaded.len(), 2);
    assert_ne!(uploaded[0].filename(), uploaded[1].filename());
    Ok(())
}

#[tokio::test]
async fn test_skip_if_featured() -> anyhow::Result<()> {
    let featured_post = Post {
        id: 42,
        title: Some(RenderedText {
            rendered: Some("Title".into()),
        }),
        featured_media: Some(31),
    };
    let orchestrator = Orchestrator::new(
        MockContentApi::new(featured_post, 900),
        MockImageGenerator::new_success(png()),
    )
    .with_skip_if_featured(true);

    let result = orchestrator.run_once().await?;

    assert_eq!(result, RunResult::skipped(42, 31));
    assert_eq!(orchestrator.images().call_count(), 0);
    assert_eq!(orchestrator.content().upload_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_featured_post_regenerated_by_default() -> anyhow::Result<()> {
    let featured_post = Post {
        id: 42,
        title: None,
        featured_media: Some(31),
    };
    let orchestrator = Orchestrator::new(
        MockContentApi::new(featured_post, 900),
        MockImageGenerator::new_success(png()),
    );

    let result = orchestrator.run().await?;

    assert_eq!(result, RunResult::completed(42, 900));
    Ok(())
}
