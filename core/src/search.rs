//! Hadith filtering, free-text search, and pagination
//!
//! This module provides:
//! - Conjunctive multi-field filtering over one dataset
//! - Case-insensitive free-text search across text fields and keywords
//! - Page-slice math over the filtered sequence
//!
//! Evaluation is a pure projection over the immutable store; nothing is
//! mutated and no call can fail. Invalid pagination input degrades to an
//! empty page instead of erroring.

use crate::models::{Hadith, HadithFilters, SearchResult};
use crate::store::HadithStore;

/// Search one dataset with the given filters and return a result page
///
/// All supplied filters must hold for a record to match. Matching records
/// keep their original dataset order; `total` counts every match regardless
/// of the requested page.
pub fn search_hadiths(
    store: &HadithStore,
    filters: &HadithFilters,
    page: usize,
    limit: usize,
) -> SearchResult {
    // Cheap equality filters first, substring filters after, and the
    // free-text scan (four fields plus keywords) last.
    let matches: Vec<&Hadith> = store
        .hadiths()
        .iter()
        .filter(|h| matches_equality(h, filters))
        .filter(|h| matches_narrator(h, filters.narrator.as_deref()))
        .filter(|h| matches_search(h, filters.search.as_deref()))
        .collect();

    paginate(&matches, page, limit)
}

/// Apply the exact-match filters (collection, category, grading)
fn matches_equality(hadith: &Hadith, filters: &HadithFilters) -> bool {
    if let Some(collection) = &filters.collection {
        if hadith.collection != *collection {
            return false;
        }
    }
    if let Some(category) = &filters.category {
        if hadith.category != *category {
            return false;
        }
    }
    if let Some(grading) = &filters.grading {
        if hadith.grading != *grading {
            return false;
        }
    }
    true
}

/// Case-insensitive narrator substring filter
fn matches_narrator(hadith: &Hadith, narrator: Option<&str>) -> bool {
    match narrator {
        Some(n) => hadith.narrator.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    }
}

/// Free-text search predicate
///
/// The Arabic field is matched by raw containment (case-folding is not
/// meaningful for the script); translations, keywords, and narrator are
/// matched case-insensitively. Any single hit qualifies the record.
fn matches_search(hadith: &Hadith, search: Option<&str>) -> bool {
    let query = match search {
        Some(q) => q,
        None => return true,
    };
    let lower = query.to_lowercase();

    hadith.arabic.contains(query)
        || hadith.translation.to_lowercase().contains(&lower)
        || hadith
            .malay
            .as_ref()
            .map(|m| m.to_lowercase().contains(&lower))
            .unwrap_or(false)
        || hadith
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(&lower))
        || hadith.narrator.to_lowercase().contains(&lower)
}

/// Slice the filtered sequence into the requested page
///
/// A `page` of 0 is clamped to 1. A `limit` of 0 yields an empty page with
/// `total` still reported. Pages past the end come back empty rather than
/// erroring.
fn paginate(matches: &[&Hadith], page: usize, limit: usize) -> SearchResult {
    let total = matches.len();
    let page = page.max(1);

    if limit == 0 {
        return SearchResult {
            hadiths: Vec::new(),
            total,
            page,
            limit,
            total_pages: 0,
        };
    }

    let total_pages = total.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);
    let hadiths = if start >= total {
        Vec::new()
    } else {
        let end = (start + limit).min(total);
        matches[start..end].iter().map(|h| (*h).clone()).collect()
    };

    SearchResult {
        hadiths,
        total,
        page,
        limit,
        total_pages,
    }
}
