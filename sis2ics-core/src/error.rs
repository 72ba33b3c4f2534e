//! Error types for sis2ics.

use thiserror::Error;

/// Errors that stop a conversion.
///
/// Malformed cell contents are not errors; they surface as
/// [`FieldFormatWarning`](crate::warning::FieldFormatWarning)s instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sis2IcsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No games found on the schedule page")]
    NoGamesFound,
}

/// Result type alias for sis2ics operations.
pub type Sis2IcsResult<T> = Result<T, Sis2IcsError>;
