//! Normalization of external hadith API payloads
//!
//! Third-party hadith providers rename fields between API versions
//! (`hadithArabic` vs `arabic`, `hadithEnglish` vs `text`, `number` vs `no`).
//! This module resolves each logical attribute through an ordered candidate
//! list, first usable field wins, and never fails: malformed or missing
//! fields degrade to an empty string or to the record's position ordinal.

use serde_json::Value;

use crate::models::NormalizedHadith;

/// Candidate field names for the Arabic text, in resolution order
const ARABIC_FIELDS: &[&str] = &["hadithArabic", "arabic", "arab"];

/// Candidate field names for the translation, in resolution order
///
/// The generic "text" field comes last since some providers use it for
/// whichever language was requested.
const TRANSLATION_FIELDS: &[&str] = &["hadithEnglish", "translation", "text"];

/// Candidate field names for the hadith number, in resolution order
const NUMBER_FIELDS: &[&str] = &["hadithNumber", "number", "no"];

/// Normalize one external record into the internal display shape
///
/// `index` is the record's zero-based position in the fetched list, used as
/// the fallback ordinal when no number field is present. `source_label` is
/// the human-readable name of the requested collection, used because some
/// payloads do not echo one back.
pub fn normalize(raw: &Value, index: usize, source_label: &str) -> NormalizedHadith {
    let number = resolve_number(raw).unwrap_or(index as u64 + 1);

    NormalizedHadith {
        key: number.to_string(),
        arabic: resolve_text(raw, ARABIC_FIELDS),
        translation: resolve_text(raw, TRANSLATION_FIELDS),
        number,
        source: source_label.to_string(),
    }
}

/// Resolve a text attribute through its candidate field list
///
/// The first candidate holding a non-empty string wins; nulls, absent
/// fields, and non-string values are skipped. Candidates are never merged.
fn resolve_text(raw: &Value, candidates: &[&str]) -> String {
    for field in candidates {
        if let Some(text) = raw.get(field).and_then(Value::as_str) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    String::new()
}

/// Resolve the hadith number through its candidate field list
///
/// Accepts JSON numbers and numeric strings (providers disagree on which
/// they send). Returns `None` when no candidate yields a usable number.
fn resolve_number(raw: &Value) -> Option<u64> {
    for field in NUMBER_FIELDS {
        match raw.get(field) {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    return Some(v);
                }
            }
            Some(Value::String(s)) => {
                if let Ok(v) = s.trim().parse::<u64>() {
                    return Some(v);
                }
            }
            _ => {}
        }
    }
    None
}
