//! Trigger endpoint.

use crate::AppState;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use featured_error::{PipelineError, PipelineErrorKind};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

/// Body returned for every path other than `/run`.
pub const BANNER: &str = "featured-server is running. GET /run?secret=... to set the latest post's featured image.";

#[derive(Debug, Deserialize)]
struct RunQuery {
    secret: Option<String>,
}

/// Creates the trigger router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/run", get(run))
        .fallback(banner)
        .with_state(state)
}

/// Run the pipeline once if the secret matches.
#[instrument(skip_all)]
async fn run(State(state): State<AppState>, query: Option<Query<RunQuery>>) -> Response {
    // An unparseable query string counts as a missing secret.
    let secret = query.as_ref().and_then(|Query(q)| q.secret.as_deref());
    if !state.secret_matches(secret) {
        let err = PipelineError::new(PipelineErrorKind::AuthRejected);
        warn!(provided = secret.is_some(), "{}", err);
        return (StatusCode::FORBIDDEN, err.kind().to_string()).into_response();
    }

    info!("Pipeline run triggered");
    match state.runner().run().await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(error = %e, "Pipeline run failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.kind().to_string()).into_response()
        }
    }
}

async fn banner() -> impl IntoResponse {
    (StatusCode::OK, BANNER)
}
