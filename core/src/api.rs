//! Framework-agnostic request handling for the hadith query facade
//!
//! These types bridge HTTP frameworks (axum, actix-web, etc.) and the core
//! search operations. The library stays framework-agnostic — the actual HTTP
//! server is wired by the consumer, which hands in decoded query parameters
//! and sends back the envelope produced here.

use serde::{Deserialize, Serialize};

use crate::models::HadithFilters;
use crate::search::search_hadiths;
use crate::store::HadithStore;

/// Default page size when the caller supplies none
pub const DEFAULT_LIMIT: usize = 20;

/// A parsed search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Filters extracted from query parameters
    pub filters: HadithFilters,
    /// Requested page, 1-based
    pub page: usize,
    /// Requested page size
    pub limit: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            filters: HadithFilters::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchRequest {
    /// Build a request from decoded query-string pairs
    ///
    /// Recognized keys: `collection`, `category`, `search`, `grading`,
    /// `narrator`, `limit`, `page`. Empty values are treated as absent and
    /// malformed numerics fall back to the defaults; unknown keys are
    /// ignored. This mirrors a display-filtering endpoint, not a validated
    /// API boundary.
    pub fn from_query_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut request = Self::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                "collection" => request.filters.collection = Some(value.to_string()),
                "category" => request.filters.category = Some(value.to_string()),
                "search" => request.filters.search = Some(value.to_string()),
                "grading" => request.filters.grading = Some(value.to_string()),
                "narrator" => request.filters.narrator = Some(value.to_string()),
                "limit" => request.limit = value.parse().unwrap_or(DEFAULT_LIMIT),
                "page" => request.page = value.parse().unwrap_or(1),
                _ => {}
            }
        }
        request
    }
}

/// The response envelope returned by the facade handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP-style status code
    pub status: u16,
    /// Response body: `{ success, data }` or `{ success, error }`
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Build a success (200) envelope around a data payload
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({ "success": true, "data": data }),
        }
    }

    /// Build a generic failure envelope with no partial data
    pub fn failure(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "success": false, "error": message }),
        }
    }
}

/// Handle a hadith search request against one dataset
///
/// The response data carries the result page plus the dataset's collection
/// and category lists, so a single round trip populates both the results
/// and the filter dropdowns.
pub fn handle_search(store: &HadithStore, request: &SearchRequest) -> ApiResponse {
    let result = search_hadiths(store, &request.filters, request.page, request.limit);

    let mut data = match serde_json::to_value(&result) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            log::error!("search result failed to serialize");
            return ApiResponse::failure(500, "Failed to search hadiths");
        }
    };

    match (
        serde_json::to_value(store.collections()),
        serde_json::to_value(store.categories()),
    ) {
        (Ok(collections), Ok(categories)) => {
            data.insert("collections".to_string(), collections);
            data.insert("categories".to_string(), categories);
            ApiResponse::ok(serde_json::Value::Object(data))
        }
        _ => {
            log::error!("dataset metadata failed to serialize");
            ApiResponse::failure(500, "Failed to search hadiths")
        }
    }
}

/// Handle a random-hadith request against one dataset
///
/// `message` is the static display label shown next to the record
/// (e.g. "Daily Hadith" or "Hadith Harian (Daily Hadith)").
pub fn handle_random(store: &HadithStore, message: &str) -> ApiResponse {
    let hadith = match store.random() {
        Some(h) => h,
        None => {
            log::warn!("random hadith requested from an empty dataset");
            return ApiResponse::failure(500, "Failed to get random hadith");
        }
    };

    match serde_json::to_value(hadith) {
        Ok(value) => ApiResponse::ok(serde_json::json!({
            "hadith": value,
            "message": message,
        })),
        Err(_) => ApiResponse::failure(500, "Failed to get random hadith"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawDataset;

    fn store() -> HadithStore {
        HadithStore::bundled_english().unwrap()
    }

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::from_query_pairs(std::iter::empty::<(&str, &str)>());
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, DEFAULT_LIMIT);
        assert!(request.filters.search.is_none());
    }

    #[test]
    fn test_request_parses_all_known_keys() {
        let request = SearchRequest::from_query_pairs([
            ("collection", "bukhari"),
            ("category", "Mercy"),
            ("search", "mercy"),
            ("grading", "Sahih"),
            ("narrator", "Jarir"),
            ("limit", "5"),
            ("page", "2"),
        ]);
        assert_eq!(request.filters.collection.as_deref(), Some("bukhari"));
        assert_eq!(request.filters.category.as_deref(), Some("Mercy"));
        assert_eq!(request.filters.search.as_deref(), Some("mercy"));
        assert_eq!(request.filters.grading.as_deref(), Some("Sahih"));
        assert_eq!(request.filters.narrator.as_deref(), Some("Jarir"));
        assert_eq!(request.limit, 5);
        assert_eq!(request.page, 2);
    }

    #[test]
    fn test_request_ignores_empty_values_and_unknown_keys() {
        let request =
            SearchRequest::from_query_pairs([("collection", ""), ("apiKey", "secret")]);
        assert!(request.filters.collection.is_none());
    }

    #[test]
    fn test_request_malformed_numbers_fall_back_to_defaults() {
        let request = SearchRequest::from_query_pairs([("limit", "abc"), ("page", "-2")]);
        assert_eq!(request.limit, DEFAULT_LIMIT);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_handle_search_envelope_shape() {
        let request = SearchRequest::from_query_pairs([("collection", "bukhari")]);
        let response = handle_search(&store(), &request);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["success"], true);

        let data = &response.body["data"];
        assert!(data["total"].as_u64().unwrap() > 0);
        assert!(data["hadiths"].is_array());
        assert!(data["collections"].is_array());
        assert!(data["categories"].is_array());
        assert!(data["totalPages"].is_u64());
    }

    #[test]
    fn test_handle_search_empty_result_is_success() {
        let request = SearchRequest::from_query_pairs([("search", "zzz-no-such-term")]);
        let response = handle_search(&store(), &request);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["data"]["total"], 0);
        assert_eq!(response.body["data"]["hadiths"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_handle_random_includes_label() {
        let response = handle_random(&store(), "Daily Hadith");
        assert_eq!(response.status, 200);
        assert_eq!(response.body["data"]["message"], "Daily Hadith");
        assert!(response.body["data"]["hadith"]["id"].is_string());
    }

    #[test]
    fn test_handle_random_empty_dataset_is_generic_failure() {
        let empty = HadithStore::from_raw(RawDataset {
            collections: vec![],
            hadiths: vec![],
        });
        let response = handle_random(&empty, "Daily Hadith");
        assert_eq!(response.status, 500);
        assert_eq!(response.body["success"], false);
        assert!(response.body.get("data").is_none());
    }
}
