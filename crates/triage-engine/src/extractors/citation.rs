// Citation extraction from decision text
use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::CitationRef;

use crate::normalize::fold_text;

/// How far past "sayılı" the article search may begin, in bytes of folded
/// text. Reflowed lines put the article a line break or two after the law
/// number; anything farther than this is treated as a different sentence.
pub const ARTICLE_WINDOW: usize = 512;

lazy_static! {
    /// A law number anchor: exactly four digits behind a word boundary,
    /// followed by the "sayılı" keyword. A longer digit run has no interior
    /// boundary, so a five-digit number never anchors.
    static ref LAW_ANCHOR: Regex = Regex::new(r"\b(\d{4})\s*sayılı").unwrap();

    /// The nearest article token: an optional "madde"/"maddesi" keyword,
    /// then a number of at most three digits ending at a word boundary.
    static ref ARTICLE_NUMBER: Regex = Regex::new(r"(?:madde(?:si)?)?\s*(\d{1,3})\b").unwrap();
}

/// Scan `text` for law/article references and return them deduplicated,
/// ordered by the canonical `"law/article"` string.
///
/// The scan is a two-stage matcher over a case-folded copy of the text:
/// anchors first, then for each anchor the leftmost article token whose
/// match starts within [`ARTICLE_WINDOW`]. Matches do not overlap; after a
/// hit the anchor scan resumes past the matched article number. An empty
/// result is a normal outcome, not a failure.
pub fn extract_citations(text: &str) -> Vec<CitationRef> {
    let folded = fold_text(text);
    let mut found: BTreeMap<String, CitationRef> = BTreeMap::new();

    let mut cursor = 0;
    while cursor < folded.len() {
        let Some(anchor) = LAW_ANCHOR.captures_at(&folded, cursor) else {
            break;
        };
        let anchor_end = anchor.get(0).unwrap().end();

        match ARTICLE_NUMBER.captures_at(&folded, anchor_end) {
            Some(caps) if caps.get(0).unwrap().start() <= anchor_end + ARTICLE_WINDOW => {
                let law = anchor.get(1).unwrap().as_str();
                let article = caps.get(1).unwrap();
                let citation = CitationRef::new(law, article.as_str());
                found.insert(citation.canonical(), citation);
                cursor = article.end();
            }
            // No article near this anchor; keep scanning after it.
            _ => cursor = anchor_end,
        }
    }

    found.into_values().collect()
}
