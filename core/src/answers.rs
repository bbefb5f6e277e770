//! Keyword-based reference lookup for the chat assistant
//!
//! The "chatbot" is keyword containment matching over the local dataset,
//! nothing more: it cites matching hadith verbatim and otherwise points the
//! user to a scholar. No language understanding is attempted.

use crate::store::HadithStore;

/// How many citations a reply includes at most
pub const CITATION_LIMIT: usize = 3;

/// Reply used when the dataset holds no matching reference
pub const NO_REFERENCE_REPLY: &str =
    "I could not find a direct reference in the local dataset. Please consult a scholar.";

/// Collect formatted citations for hadith matching the query
///
/// A record matches when its Arabic text contains the raw query or its
/// translation contains it case-insensitively. At most `limit` citations
/// are returned, in dataset order, each formatted as
/// `"Hadith ({collection}): {translation} [{grading}]"`.
pub fn find_citations(store: &HadithStore, query: &str, limit: usize) -> Vec<String> {
    let lower = query.to_lowercase();
    store
        .hadiths()
        .iter()
        .filter(|h| h.arabic.contains(query) || h.translation.to_lowercase().contains(&lower))
        .take(limit)
        .map(|h| format!("Hadith ({}): {} [{}]", h.collection, h.translation, h.grading))
        .collect()
}

/// Compose the assistant reply for a query
pub fn reply(store: &HadithStore, query: &str) -> String {
    let citations = find_citations(store, query.trim(), CITATION_LIMIT);
    if citations.is_empty() {
        NO_REFERENCE_REPLY.to_string()
    } else {
        format!("Here are relevant references:\n- {}", citations.join("\n- "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HadithStore {
        HadithStore::bundled_english().unwrap()
    }

    #[test]
    fn test_citations_match_translation_case_insensitively() {
        let citations = find_citations(&store(), "MERCY", CITATION_LIMIT);
        assert!(!citations.is_empty());
        assert!(citations[0].starts_with("Hadith ("));
        assert!(citations[0].contains("mercy"));
    }

    #[test]
    fn test_citations_match_arabic_raw_text() {
        let citations = find_citations(&store(), "النصيحة", CITATION_LIMIT);
        assert_eq!(citations.len(), 1);
        assert!(citations[0].contains("sincere counsel"));
    }

    #[test]
    fn test_citation_format_includes_collection_and_grading() {
        let citations = find_citations(&store(), "sincere counsel", 1);
        assert_eq!(
            citations,
            vec!["Hadith (muslim): The religion is sincere counsel. [Sahih]"]
        );
    }

    #[test]
    fn test_citations_are_capped() {
        // "the" matches many translations; the cap bounds the reply size
        let citations = find_citations(&store(), "the", CITATION_LIMIT);
        assert_eq!(citations.len(), CITATION_LIMIT);
    }

    #[test]
    fn test_reply_without_match_points_to_scholar() {
        assert_eq!(reply(&store(), "zzz-no-such-topic"), NO_REFERENCE_REPLY);
    }

    #[test]
    fn test_reply_lists_citations() {
        let text = reply(&store(), "mercy");
        assert!(text.starts_with("Here are relevant references:\n- "));
    }
}
