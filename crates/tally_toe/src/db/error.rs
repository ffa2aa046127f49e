//! Errors raised by the SQLite score store.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure opening, migrating or querying the score database.
///
/// Records the call site that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error: {} ({}:{})", message, file, line)]
pub struct DbError {
    /// What went wrong.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// File that raised the error.
    pub file: &'static str,
}

impl DbError {
    /// Creates an error tagged with the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Score query failed: {}", err))
    }
}
