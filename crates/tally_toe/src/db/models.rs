//! Database models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// A stored key/value pair.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::score_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScoreEntry {
    name: String,
    value: String,
}

/// Insertable entry, used for upserts. `updated_at` is written on every
/// store so the table records when each score last changed.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::score_entries)]
pub struct NewScoreEntry {
    name: String,
    value: String,
    updated_at: NaiveDateTime,
}
