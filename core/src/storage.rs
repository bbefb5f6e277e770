//! Client-local persisted state
//!
//! This module models the app's client-side bookkeeping:
//! - Per-chapter verse bookmarks
//! - A rolling, capped history of recent actions
//! - A daily reading-streak counter
//!
//! Persistence is an injected capability ([`KeyValueStore`]) holding JSON
//! strings under opaque keys, so the same logic runs against the browser's
//! key-value storage in production and [`MemoryStore`] in tests. Corrupt or
//! missing values always degrade to the caller's fallback, never to an error.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Storage key for the rolling history list
pub const HISTORY_KEY: &str = "hidayah_history";

/// Storage key for the streak counter
pub const STREAK_KEY: &str = "hidayah_streak";

/// Maximum number of retained history entries
pub const HISTORY_LIMIT: usize = 100;

/// A key-value persistence capability
///
/// Keys are opaque strings; values are JSON-serialized by the helpers in
/// this module. Implementations are free to drop writes (as a full browser
/// store would); readers must tolerate that.
pub trait KeyValueStore {
    /// Read the raw JSON string stored under `key`, if any
    fn get_raw(&self, key: &str) -> Option<String>;
    /// Store a raw JSON string under `key`
    fn set_raw(&mut self, key: &str, value: String);
}

/// In-memory [`KeyValueStore`] used in tests and embedded callers
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// Read a typed value, falling back on missing or corrupt data
pub fn get_or<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    match store.get_raw(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or(fallback),
        None => fallback,
    }
}

/// Write a typed value; serialization failures are dropped silently
pub fn set<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.set_raw(key, raw);
    }
}

/// Prepend an item to a stored list, trimming it to `limit` entries
pub fn append_to_list<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    item: T,
    limit: usize,
) {
    let mut list: Vec<serde_json::Value> = get_or(store, key, Vec::new());
    if let Ok(value) = serde_json::to_value(item) {
        list.insert(0, value);
    }
    list.truncate(limit);
    set(store, key, &list);
}

/// One entry in the rolling action history
///
/// `kind` names the action ("chat", "recite", "read", …); any extra
/// per-kind fields round-trip untouched through the flattened map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Action kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "ts")]
    pub timestamp: i64,
    /// Kind-specific extra fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HistoryEntry {
    /// Create an entry for `kind` timestamped now
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            extra: serde_json::Map::new(),
        }
    }

    /// Attach a kind-specific extra field
    pub fn with_field(mut self, key: &str, value: serde_json::Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }
}

/// Record an action in the capped history list
pub fn record_history(store: &mut dyn KeyValueStore, entry: HistoryEntry) {
    append_to_list(store, HISTORY_KEY, entry, HISTORY_LIMIT);
}

/// Read the history list, newest first
pub fn history(store: &dyn KeyValueStore) -> Vec<HistoryEntry> {
    get_or(store, HISTORY_KEY, Vec::new())
}

/// Bookmarked verse numbers for one chapter
pub fn bookmarks(store: &dyn KeyValueStore, chapter: u32) -> Vec<u32> {
    get_or(store, &bookmark_key(chapter), Vec::new())
}

/// Toggle a verse bookmark; returns true when the verse is now bookmarked
pub fn toggle_bookmark(store: &mut dyn KeyValueStore, chapter: u32, verse: u32) -> bool {
    let key = bookmark_key(chapter);
    let mut verses: Vec<u32> = get_or(store, &key, Vec::new());
    let added = if let Some(pos) = verses.iter().position(|v| *v == verse) {
        verses.remove(pos);
        false
    } else {
        verses.push(verse);
        true
    };
    set(store, &key, &verses);
    added
}

fn bookmark_key(chapter: u32) -> String {
    format!("bk_{chapter}")
}

/// Persisted streak record: last counted date plus the running count
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakData {
    /// Last counted date as "YYYY-MM-DD", empty before the first visit
    #[serde(default)]
    pub last: String,
    /// Consecutive-day count
    #[serde(default)]
    pub count: u32,
}

/// Update the daily streak for the current date
pub fn update_streak(store: &mut dyn KeyValueStore) -> u32 {
    update_streak_on(store, Utc::now().date_naive())
}

/// Update the daily streak as of `today`
///
/// At most one increment per calendar day: a repeat call on the same day
/// returns the unchanged count, a call on the immediately following day
/// increments, and a gap of two or more days resets the streak to 1.
pub fn update_streak_on(store: &mut dyn KeyValueStore, today: NaiveDate) -> u32 {
    let data: StreakData = get_or(store, STREAK_KEY, StreakData::default());
    let today_str = today.format("%Y-%m-%d").to_string();

    if data.last == today_str {
        return data.count;
    }

    let yesterday = (today - Duration::days(1)).format("%Y-%m-%d").to_string();
    let count = if data.last == yesterday {
        data.count + 1
    } else {
        1
    };

    set(
        store,
        STREAK_KEY,
        &StreakData {
            last: today_str,
            count,
        },
    );
    count
}
