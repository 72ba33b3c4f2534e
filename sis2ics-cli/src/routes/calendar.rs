//! Calendar download endpoint

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use sis2ics_core::convert;

use crate::routes::{AppError, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calendar.ics", get(calendar))
        .route("/health", get(health))
}

/// GET /calendar.ics - Fetch the schedule page and return it as a calendar
async fn calendar(State(state): State<AppState>) -> Result<Response, AppError> {
    let html = state.source().load().await.map_err(AppError::Upstream)?;
    let document = convert(&html, state.config())?;

    let disposition = format!("attachment; filename=\"{}\"", state.download_name());

    Ok((
        [
            (header::CONTENT_TYPE, "application/ics".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.into_string(),
    )
        .into_response())
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
