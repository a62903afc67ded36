use anyhow::Result;
use clap::{Parser, ValueEnum};
use featured_core::AppConfig;
use featured_server::{AppState, LoggingConfig, create_router, init_logging, run_once};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "featured-server")]
#[command(version, about = "Generates AI featured images for the latest WordPress post")]
struct Args {
    /// Run the pipeline once, print the result as JSON and exit
    #[arg(long)]
    once: bool,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    init_logging(&LoggingConfig::default().with_json_logs(args.log_format == LogFormat::Json))?;
    if let Err(e) = dotenv {
        info!("No .env file loaded: {}", e);
    }

    let config = AppConfig::load()?;

    if args.once {
        let result = run_once(&config).await?;
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    let port = args.port.unwrap_or(*config.port());
    let app = create_router(AppState::from_config(&config)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, mode = %config.image_response_format(), "Starting featured server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => warn!("Ctrl+C received, shutting down"),
        Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
    }
}
