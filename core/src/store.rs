//! In-memory hadith dataset storage
//!
//! This module handles dataset loading and read-only access:
//! - Loading bundled JSON datasets (raw or gzip-compressed)
//! - Metadata accessors (collections, categories, gradings, narrators)
//! - Record lookup by id and uniform random selection
//!
//! A [`HadithStore`] is immutable after loading. The app keeps two disjoint
//! stores, one per dataset language, rather than threading a language flag
//! through every query.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use flate2::read::GzDecoder;
use rand::Rng;

use crate::models::{Collection, Hadith, RawDataset};
use crate::Result;

/// Bundled English dataset, embedded at compile time
const ENGLISH_DATASET: &str = include_str!("../data/hadith.en.json");

/// Bundled Malay dataset, embedded at compile time
const MALAY_DATASET: &str = include_str!("../data/hadith.ms.json");

/// Handle to one loaded, immutable hadith dataset
///
/// Cloning is cheap (shared `Arc` internals) and the handle can be used
/// freely across threads; every operation is a pure read.
#[derive(Debug, Clone)]
pub struct HadithStore {
    collections: Arc<Vec<Collection>>,
    hadiths: Arc<Vec<Hadith>>,
}

impl HadithStore {
    /// Build a store from an already-parsed dataset
    pub fn from_raw(raw: RawDataset) -> Self {
        Self {
            collections: Arc::new(raw.collections),
            hadiths: Arc::new(raw.hadiths),
        }
    }

    /// Parse a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Load a dataset from a JSON file
    ///
    /// Files ending in `.gz` are transparently gzip-decompressed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_gzipped = path.extension().map(|ext| ext == "gz").unwrap_or(false);

        let file = File::open(path)?;
        let mut json = String::new();
        if is_gzipped {
            GzDecoder::new(file).read_to_string(&mut json)?;
        } else {
            let mut file = file;
            file.read_to_string(&mut json)?;
        }

        let store = Self::from_json_str(&json)?;
        log::info!(
            "Loaded dataset from {:?}: {} hadiths, {} collections",
            path,
            store.len(),
            store.collections().len()
        );
        Ok(store)
    }

    /// The bundled English-language dataset
    pub fn bundled_english() -> Result<Self> {
        Self::from_json_str(ENGLISH_DATASET)
    }

    /// The bundled Malay-language dataset
    pub fn bundled_malay() -> Result<Self> {
        Self::from_json_str(MALAY_DATASET)
    }

    /// All records in canonical dataset order
    pub fn hadiths(&self) -> &[Hadith] {
        &self.hadiths
    }

    /// Collection descriptors for this dataset
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.hadiths.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.hadiths.is_empty()
    }

    /// Sorted distinct category values present in the dataset
    pub fn categories(&self) -> Vec<String> {
        self.distinct(|h| &h.category)
    }

    /// Sorted distinct grading values present in the dataset
    pub fn gradings(&self) -> Vec<String> {
        self.distinct(|h| &h.grading)
    }

    /// Sorted distinct narrator names present in the dataset
    pub fn narrators(&self) -> Vec<String> {
        self.distinct(|h| &h.narrator)
    }

    /// Look up a record by its dataset id
    pub fn get_by_id(&self, id: &str) -> Option<&Hadith> {
        self.hadiths.iter().find(|h| h.id == id)
    }

    /// Pick one record uniformly at random
    ///
    /// A fresh draw on every call; no shuffling state is retained.
    /// Returns `None` only for an empty dataset.
    pub fn random(&self) -> Option<&Hadith> {
        if self.hadiths.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.hadiths.len());
        self.hadiths.get(index)
    }

    fn distinct(&self, field: impl Fn(&Hadith) -> &String) -> Vec<String> {
        let mut values: Vec<String> = self.hadiths.iter().map(|h| field(h).clone()).collect();
        values.sort();
        values.dedup();
        values
    }
}
