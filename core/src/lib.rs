//! # hidayah-core
//!
//! Core library for the Hidayah Islamic Knowledge App.
//!
//! This crate provides:
//! - An immutable in-memory hadith repository with filter/search/pagination
//! - Normalization of heterogeneous external hadith API payloads
//! - A framework-agnostic query facade for HTTP-style request handling
//! - Client-local storage helpers (bookmarks, history, daily streak)
//! - Dataset import/validation for building bundled datasets
//!
//! ## Usage
//!
//! ```ignore
//! use hidayah_core::{search, HadithFilters, HadithStore};
//!
//! let store = HadithStore::bundled_english()?;
//! let filters = HadithFilters {
//!     search: Some("mercy".to_string()),
//!     ..Default::default()
//! };
//! let result = search(&store, &filters, 1, 20);
//! for hadith in &result.hadiths {
//!     println!("{}: {}", hadith.reference(), hadith.translation);
//! }
//! ```

pub mod answers;
pub mod api;
pub mod import;
pub mod models;
pub mod normalize;
pub mod search;
pub mod storage;
pub mod store;

use thiserror::Error;

pub use models::{
    Collection, Hadith, HadithFilters, NormalizedHadith, RawDataset, SearchResult,
};
pub use store::HadithStore;

/// Errors that can occur in hidayah-core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for hidayah-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Search one dataset with filters and pagination
///
/// Thin wrapper over [`search::search_hadiths`]; see that function for the
/// predicate and pagination contract.
pub fn search(
    store: &HadithStore,
    filters: &HadithFilters,
    page: usize,
    limit: usize,
) -> SearchResult {
    search::search_hadiths(store, filters, page, limit)
}

/// Pick one record uniformly at random from a dataset
///
/// Returns `None` only when the dataset is empty.
pub fn random_hadith(store: &HadithStore) -> Option<&Hadith> {
    store.random()
}

/// Normalize one external API record into the internal display shape
///
/// See [`normalize::normalize`] for the field-resolution contract.
pub fn normalize_external(
    raw: &serde_json::Value,
    index: usize,
    source_label: &str,
) -> NormalizedHadith {
    normalize::normalize(raw, index, source_label)
}

/// Import and validate a raw dataset export
///
/// Used by the preprocessor tool to build bundled dataset files; see
/// [`import::import_dataset`].
pub fn import_dataset(
    input_path: &str,
    progress: impl Fn(u64, u64),
) -> Result<(RawDataset, import::ImportStats)> {
    import::import_dataset(input_path, progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_over_bundled_dataset() {
        let store = HadithStore::bundled_english().unwrap();
        let filters = HadithFilters {
            search: Some("mercy".to_string()),
            ..Default::default()
        };
        let result = search(&store, &filters, 1, 20);
        assert!(result.total > 0);
    }

    #[test]
    fn test_random_hadith_from_bundled_dataset() {
        let store = HadithStore::bundled_english().unwrap();
        assert!(random_hadith(&store).is_some());
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().starts_with("IO error"));
    }
}
