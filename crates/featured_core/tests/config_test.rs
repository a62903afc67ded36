use featured_core::{AppConfig, AppConfigBuilder, ImageResponseMode};
use featured_error::FeaturedErrorKind;

fn required_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("OPENAI_API_KEY", "sk-test"),
        ("WP_BASE_URL", "https://cabs.example///"),
        ("WP_USERNAME", "editor"),
        ("WP_APP_PASSWORD", "abcd efgh ijkl"),
    ]
}

#[test]
fn test_defaults_applied() -> anyhow::Result<()> {
    let config = AppConfig::from_vars(required_vars())?;

    assert_eq!(config.openai_api_key(), "sk-test");
    assert_eq!(config.wp_base_url(), "https://cabs.example");
    assert_eq!(config.wp_app_password(), "abcd efgh ijkl");
    assert_eq!(config.run_secret(), "change-me");
    assert_eq!(*config.port(), 10000);
    assert_eq!(config.image_api_base(), "https://api.openai.com/v1");
    assert_eq!(config.image_model(), "dall-e-3");
    assert_eq!(*config.image_response_format(), ImageResponseMode::Url);
    assert!(!*config.skip_if_featured());
    Ok(())
}

#[test]
fn test_overrides_parsed() -> anyhow::Result<()> {
    let mut vars = required_vars();
    vars.extend([
        ("RUN_SECRET", "hunter2"),
        ("PORT", "8080"),
        ("IMAGE_API_BASE", "http://localhost:9000/v1/"),
        ("IMAGE_MODEL", "gpt-image-1"),
        ("IMAGE_RESPONSE_FORMAT", "b64_json"),
        ("SKIP_IF_FEATURED", "true"),
    ]);

    let config = AppConfig::from_vars(vars)?;

    assert_eq!(config.run_secret(), "hunter2");
    assert_eq!(*config.port(), 8080);
    assert_eq!(config.image_api_base(), "http://localhost:9000/v1");
    assert_eq!(config.image_model(), "gpt-image-1");
    assert_eq!(
        *config.image_response_format(),
        ImageResponseMode::InlinePayload
    );
    assert!(*config.skip_if_featured());
    Ok(())
}

#[test]
fn test_numeric_looking_secrets_kept_verbatim() -> anyhow::Result<()> {
    let mut vars = required_vars();
    vars.retain(|(key, _)| *key != "WP_APP_PASSWORD" && *key != "OPENAI_API_KEY");
    vars.extend([
        ("RUN_SECRET", "007"),
        ("WP_APP_PASSWORD", "1234"),
        ("OPENAI_API_KEY", "1e3"),
        ("WP_USERNAME", "True"),
    ]);

    let config = AppConfig::from_vars(vars)?;

    assert_eq!(config.run_secret(), "007");
    assert_eq!(config.wp_app_password(), "1234");
    assert_eq!(config.openai_api_key(), "1e3");
    assert_eq!(config.wp_username(), "True");
    Ok(())
}

#[test]
fn test_auto_response_mode() -> anyhow::Result<()> {
    let mut vars = required_vars();
    vars.push(("IMAGE_RESPONSE_FORMAT", "auto"));

    let config = AppConfig::from_vars(vars)?;

    assert_eq!(*config.image_response_format(), ImageResponseMode::Auto);
    assert_eq!(config.image_response_format().response_format(), None);
    Ok(())
}

#[test]
fn test_missing_required_key() {
    let vars = required_vars()
        .into_iter()
        .filter(|(key, _)| *key != "WP_BASE_URL");

    let err = AppConfig::from_vars(vars).unwrap_err();

    match err.kind() {
        FeaturedErrorKind::Config(config_err) => {
            assert!(config_err.message.contains("wp_base_url"));
        }
        other => panic!("Expected config error, got {other:?}"),
    }
}

#[test]
fn test_debug_redacts_secrets() -> anyhow::Result<()> {
    let config = AppConfigBuilder::default()
        .openai_api_key("sk-very-secret")
        .wp_base_url("https://cabs.example")
        .wp_username("editor")
        .wp_app_password("app-password-value")
        .run_secret("trigger-secret")
        .build()?;

    let debug = format!("{config:?}");

    assert!(!debug.contains("sk-very-secret"));
    assert!(!debug.contains("app-password-value"));
    assert!(!debug.contains("trigger-secret"));
    assert!(debug.contains("https://cabs.example"));
    Ok(())
}

#[test]
fn test_builder_requires_credentials() {
    let result = AppConfigBuilder::default()
        .wp_base_url("https://cabs.example")
        .build();

    assert!(result.is_err());
}
