//! SQLite persistence for scores.

mod error;
mod models;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::DbError;
pub use models::{NewScoreEntry, ScoreEntry};
pub use store::SqliteScoreStore;
