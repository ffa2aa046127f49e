//! Persistent score storage.
//!
//! The engine only ever sees string keys and base-10 integer strings, the
//! way a browser's local storage would hold them. Where the bytes live is
//! up to the implementation.

use std::collections::HashMap;
use std::convert::Infallible;
use tracing::{debug, instrument, warn};

/// Key holding Blue's win count.
pub const BLUE_SCORE_KEY: &str = "blueScore";

/// Key holding Red's win count.
pub const RED_SCORE_KEY: &str = "redScore";

/// String key-value store that outlives a game session.
pub trait ScoreStore {
    /// Error raised by the backing storage.
    type Error: std::error::Error;

    /// Reads the value stored under `key`, if any.
    fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    type Error = S::Error;

    fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }
}

/// Parses a stored score from its leading decimal digits.
///
/// Leading whitespace and a `+` sign are skipped and anything after the
/// digits is dropped, so `"12abc"` reads as 12 and `"3.7"` as 3. Values
/// with no leading digits (absent, empty, negative, garbage) count as 0.
/// Counts too large for `u32` saturate.
#[instrument]
pub fn parse_score(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let unsigned = raw.trim_start();
    let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        warn!(value = %raw, "Stored score has no digits, using 0");
        return 0;
    }
    if end < unsigned.trim_end().len() {
        debug!(value = %raw, "Ignoring trailing characters in stored score");
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Reads a score from the store, defaulting to 0 on any failure.
#[instrument(skip(store))]
pub fn load_score<S: ScoreStore>(store: &mut S, key: &str) -> u32 {
    match store.get(key) {
        Ok(raw) => {
            let score = parse_score(raw.as_deref());
            debug!(key, score, "Score loaded");
            score
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read score, using 0");
            0
        }
    }
}

/// In-memory store, for tests and sessions that should not persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the raw value under `key` without going through the trait.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ScoreStore for MemoryStore {
    type Error = Infallible;

    fn get(&mut self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
