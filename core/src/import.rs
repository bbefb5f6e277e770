//! Raw dataset import and validation
//!
//! This module handles importing raw hadith exports into the canonical
//! bundled dataset shape consumed by [`crate::store::HadithStore`].
//!
//! Supports both raw JSON and gzip-compressed files (.json.gz). Invalid
//! records are skipped and counted rather than failing the whole import;
//! only unreadable or unparseable files error.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::models::{Hadith, RawDataset};
use crate::Result;

/// Import statistics returned after processing
#[derive(Debug, Clone, Default)]
pub struct ImportStats {
    /// Total number of records processed
    pub records_processed: u64,
    /// Number of records that passed validation
    pub records_imported: u64,
    /// Number of records rejected by validation
    pub errors: u64,
    /// Number of records dropped as duplicate ids
    pub duplicates: u64,
    /// Number of collection descriptors carried over
    pub collections: u64,
}

/// Import a raw hadith export and return the validated dataset
///
/// The input file holds `{ "collections": [...], "hadiths": [...] }` in the
/// provider's export shape, optionally gzip-compressed. Each record is
/// validated; rejects are logged at debug level and counted in the stats.
///
/// # Arguments
///
/// * `input_path` - Path to the export file (.json or .json.gz)
/// * `progress` - Callback receiving (current_record, total_records)
pub fn import_dataset(
    input_path: &str,
    progress: impl Fn(u64, u64),
) -> Result<(RawDataset, ImportStats)> {
    let json = read_maybe_gzipped(input_path)?;
    let raw: RawDataset = serde_json::from_str(&json)?;

    let total = raw.hadiths.len() as u64;
    let mut stats = ImportStats {
        collections: raw.collections.len() as u64,
        ..Default::default()
    };

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut hadiths: Vec<Hadith> = Vec::with_capacity(raw.hadiths.len());

    for hadith in raw.hadiths {
        stats.records_processed += 1;

        if stats.records_processed % 1000 == 0 {
            progress(stats.records_processed, total);
        }

        if let Err(reason) = validate_record(&hadith) {
            log::debug!("Rejected record {:?}: {}", hadith.id, reason);
            stats.errors += 1;
            continue;
        }

        if !seen_ids.insert(hadith.id.clone()) {
            log::debug!("Duplicate record id {:?}", hadith.id);
            stats.duplicates += 1;
            continue;
        }

        hadiths.push(hadith);
        stats.records_imported += 1;
    }

    progress(stats.records_processed, total);

    log::info!(
        "Import complete: {} records, {} imported, {} errors, {} duplicates",
        stats.records_processed,
        stats.records_imported,
        stats.errors,
        stats.duplicates
    );

    let dataset = RawDataset {
        collections: raw.collections,
        hadiths,
    };
    Ok((dataset, stats))
}

/// Check one record against the dataset invariants
///
/// Ids must be non-empty and book/hadith numbers positive; grading and
/// category must be present (their vocabulary is the dataset's own and is
/// not validated against a fixed enum).
pub fn validate_record(hadith: &Hadith) -> std::result::Result<(), String> {
    if hadith.id.trim().is_empty() {
        return Err("empty id".to_string());
    }
    if hadith.book == 0 {
        return Err("book number must be positive".to_string());
    }
    if hadith.hadith_number == 0 {
        return Err("hadith number must be positive".to_string());
    }
    if hadith.grading.trim().is_empty() {
        return Err("empty grading".to_string());
    }
    if hadith.category.trim().is_empty() {
        return Err("empty category".to_string());
    }
    if hadith.arabic.trim().is_empty() && hadith.translation.trim().is_empty() {
        return Err("record has neither Arabic text nor translation".to_string());
    }
    Ok(())
}

/// Read a file to a string, gzip-decompressing `.gz` inputs
fn read_maybe_gzipped(path: &str) -> Result<String> {
    let path = Path::new(path);
    let is_gzipped = path.extension().map(|ext| ext == "gz").unwrap_or(false);

    let file = File::open(path)?;
    let mut json = String::new();
    if is_gzipped {
        GzDecoder::new(file).read_to_string(&mut json)?;
    } else {
        let mut file = file;
        file.read_to_string(&mut json)?;
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Hadith {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "collection": "bukhari",
            "book": 1,
            "hadith": 1,
            "arabic": "نص",
            "translation": "text",
            "narrator": "Umar ibn Al-Khattab",
            "grading": "Sahih",
            "category": "Faith"
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(validate_record(&record("b1")).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_numbers() {
        let mut h = record("b1");
        h.book = 0;
        assert!(validate_record(&h).is_err());

        let mut h = record("b1");
        h.hadith_number = 0;
        assert!(validate_record(&h).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_grading_and_category() {
        let mut h = record("b1");
        h.grading = " ".to_string();
        assert!(validate_record(&h).is_err());

        let mut h = record("b1");
        h.category = String::new();
        assert!(validate_record(&h).is_err());
    }

    #[test]
    fn test_validate_tolerates_unknown_grading_vocabulary() {
        let mut h = record("b1");
        h.grading = "Gharib".to_string();
        assert!(validate_record(&h).is_ok());
    }

    #[test]
    fn test_import_skips_invalid_and_duplicate_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut bad = record("bad");
        bad.book = 0;
        let dataset = RawDataset {
            collections: vec![],
            hadiths: vec![record("a"), bad, record("a"), record("b")],
        };
        std::fs::write(&path, serde_json::to_string(&dataset).unwrap()).unwrap();

        let (imported, stats) = import_dataset(path.to_str().unwrap(), |_, _| {}).unwrap();
        assert_eq!(stats.records_processed, 4);
        assert_eq!(stats.records_imported, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.duplicates, 1);
        let ids: Vec<&str> = imported.hadiths.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_import_unparseable_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, "nope").unwrap();

        assert!(import_dataset(path.to_str().unwrap(), |_, _| {}).is_err());
    }
}
