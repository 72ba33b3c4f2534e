pub mod calendar;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sis2ics_core::{CalendarConfig, Sis2IcsError};

use crate::source::Source;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    source: Source,
    config: CalendarConfig,
    download_name: String,
}

impl AppState {
    pub fn new(source: Source, config: CalendarConfig, download_name: String) -> Self {
        AppState {
            inner: Arc::new(Inner {
                source,
                config,
                download_name,
            }),
        }
    }

    pub fn source(&self) -> &Source {
        &self.inner.source
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.inner.config
    }

    pub fn download_name(&self) -> &str {
        &self.inner.download_name
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().merge(calendar::router()).with_state(state)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub enum AppError {
    /// The schedule page could not be fetched.
    Upstream(anyhow::Error),
    Conversion(Sis2IcsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream(e) => (StatusCode::BAD_GATEWAY, format!("{:#}", e)),
            AppError::Conversion(e @ Sis2IcsError::NoGamesFound) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Conversion(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::warn!(%status, %message, "calendar request failed");
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<Sis2IcsError> for AppError {
    fn from(err: Sis2IcsError) -> Self {
        AppError::Conversion(err)
    }
}
