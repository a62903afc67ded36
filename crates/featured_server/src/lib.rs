//! HTTP trigger for the featured image worker.
//!
//! Exposes one endpoint, `GET /run?secret=...`, that runs the featured image
//! pipeline once and reports the result as JSON. Every other path answers
//! with a static banner.
//!
//! # Example
//!
//! ```rust,no_run
//! use featured_core::AppConfig;
//! use featured_server::{AppState, create_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let app = create_router(AppState::from_config(&config));
//!
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", *config.port())).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod observability;
mod state;

pub use api::{BANNER, create_router};
pub use observability::{LoggingConfig, init_logging};
pub use state::{AppState, build_orchestrator, run_once};
