//! Data models for hadith records
//!
//! This module defines the core data structures used throughout the application
//! to represent hadith records, collections, search filters, and search results.

use serde::{Deserialize, Serialize};

/// A single hadith record from a bundled dataset
///
/// Records are immutable once loaded. The `grading` and `category` fields
/// carry whatever vocabulary the dataset uses; unknown values are kept and
/// displayed as-is rather than validated against a fixed enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hadith {
    /// Unique identifier within the dataset
    pub id: String,
    /// Collection code (e.g. "bukhari", "muslim")
    pub collection: String,
    /// Book number within the collection
    pub book: u32,
    /// Hadith number within the book
    #[serde(rename = "hadith")]
    pub hadith_number: u32,
    /// Original Arabic text
    pub arabic: String,
    /// Primary (English) translation
    pub translation: String,
    /// Malay translation, present only in some datasets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malay: Option<String>,
    /// First-named narrator of the reporting chain
    pub narrator: String,
    /// Authenticity grading (e.g. "Sahih", "Hasan", "Da'if")
    pub grading: String,
    /// Topical category label
    pub category: String,
    /// Keywords used for search matching
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Static metadata about a hadith collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Human-readable collection name
    pub name: String,
    /// Short collection code used in record `collection` fields
    pub code: String,
    /// Short description of the collection
    pub description: String,
    /// Total number of hadiths in the full historical collection
    pub total_hadiths: u32,
}

/// Filters applied when searching hadith records
///
/// All fields are optional; supplied predicates are ANDed together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HadithFilters {
    /// Exact collection code match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Exact category match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text search across Arabic, translations, keywords, and narrator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact grading match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading: Option<String>,
    /// Case-insensitive narrator substring match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrator: Option<String>,
}

/// One page of search results
///
/// `hadiths` holds the requested page slice in original dataset order;
/// `total` counts all matches across every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Records for the requested page
    pub hadiths: Vec<Hadith>,
    /// Count of all matching records (pre-pagination)
    pub total: usize,
    /// Requested page number (1-based)
    pub page: usize,
    /// Requested page size
    pub limit: usize,
    /// Total number of pages at this limit
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// A hadith normalized from an external API payload
///
/// External providers disagree on field names between API versions; this is
/// the single shape the display layer consumes regardless of origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHadith {
    /// Stringified identifying number, stable for list keys
    pub key: String,
    /// Arabic text, empty if the payload carried none
    pub arabic: String,
    /// Translation text, empty if the payload carried none
    pub translation: String,
    /// Numeric form of `key`
    pub number: u64,
    /// Human-readable label of the source collection
    pub source: String,
}

/// The shape of a bundled dataset file
///
/// Matches the JSON produced by the preprocessor tool:
/// `{ "collections": [...], "hadiths": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDataset {
    /// Collection descriptors for this dataset
    #[serde(default)]
    pub collections: Vec<Collection>,
    /// All hadith records, in canonical order
    #[serde(default)]
    pub hadiths: Vec<Hadith>,
}

impl Hadith {
    /// Format a display reference like "Bukhari 1:1"
    ///
    /// Known collection codes are mapped to their conventional English names;
    /// unknown codes are displayed verbatim.
    pub fn reference(&self) -> String {
        let name = match self.collection.as_str() {
            "bukhari" => "Bukhari",
            "muslim" => "Muslim",
            "tirmidhi" => "Tirmidhi",
            "nasai" => "Nasai",
            "abudawud" => "Abu Dawud",
            "ibnmajah" => "Ibn Majah",
            other => other,
        };
        format!("{} {}:{}", name, self.book, self.hadith_number)
    }
}

impl SearchResult {
    /// An empty result page for the given pagination input
    pub fn empty(page: usize, limit: usize) -> Self {
        Self {
            hadiths: Vec::new(),
            total: 0,
            page,
            limit,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hadith_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "bukhari-1-1",
            "collection": "bukhari",
            "book": 1,
            "hadith": 1,
            "arabic": "إنما الأعمال بالنيات",
            "translation": "Actions are but by intentions",
            "narrator": "Umar ibn Al-Khattab",
            "grading": "Sahih",
            "category": "Intention"
        }"#;
        let h: Hadith = serde_json::from_str(json).unwrap();
        assert_eq!(h.id, "bukhari-1-1");
        assert_eq!(h.hadith_number, 1);
        assert!(h.malay.is_none());
        assert!(h.keywords.is_empty());
    }

    #[test]
    fn test_reference_maps_known_collections() {
        let json = r#"{
            "id": "abudawud-4-12",
            "collection": "abudawud",
            "book": 4,
            "hadith": 12,
            "arabic": "",
            "translation": "",
            "narrator": "",
            "grading": "Hasan",
            "category": "Manners"
        }"#;
        let h: Hadith = serde_json::from_str(json).unwrap();
        assert_eq!(h.reference(), "Abu Dawud 4:12");
    }

    #[test]
    fn test_reference_keeps_unknown_collection_code() {
        let h: Hadith = serde_json::from_str(
            r#"{"id":"x","collection":"darimi","book":2,"hadith":7,
                "arabic":"","translation":"","narrator":"","grading":"Sahih","category":"Faith"}"#,
        )
        .unwrap();
        assert_eq!(h.reference(), "darimi 2:7");
    }

    #[test]
    fn test_search_result_serializes_camel_case_total_pages() {
        let result = SearchResult::empty(1, 20);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"totalPages\":0"));
    }
}
