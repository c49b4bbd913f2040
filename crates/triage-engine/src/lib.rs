pub mod extractors;
pub mod normalize;
pub mod patterns;
pub mod rules;

use shared_types::{DecisionDocument, TriageReport};

pub use extractors::citation::extract_citations;
pub use rules::damage::classify_damage;

/// TriageEngine entry point
pub struct TriageEngine;

impl TriageEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, document: &DecisionDocument) -> TriageReport {
        // Combine all pages into a single text for analysis
        let full_text = document.text_content.join("\n");

        TriageReport {
            document_id: document.id.clone(),
            citations: extract_citations(&full_text),
            verdict: classify_damage(&full_text),
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DamageVerdict;

    fn document(pages: &[&str]) -> DecisionDocument {
        DecisionDocument {
            id: "doc-1".to_string(),
            filename: "karar.pdf".to_string(),
            pages: pages.len() as u32,
            text_content: pages.iter().map(|p| p.to_string()).collect(),
            created_at: 0,
        }
    }

    #[test]
    fn test_analyze_reports_citations_and_verdict() {
        let doc = document(&[
            "5018 sayılı Kanunun 71 inci maddesi uyarınca",
            "tutarın sorumlulara ödettirilmesine karar verilmiştir",
        ]);
        let report = TriageEngine::new().analyze(&doc);

        assert_eq!(report.document_id, "doc-1");
        assert_eq!(report.citations.len(), 1);
        assert_eq!(report.citations[0].canonical(), "5018/71");
        assert_eq!(report.verdict, DamageVerdict::DamagePresent);
    }

    #[test]
    fn test_pages_are_joined_with_newlines() {
        // A citation reflowed across a page break still matches.
        let doc = document(&["1234 sayılı Kanunun", "45. maddesi"]);
        let report = TriageEngine::new().analyze(&doc);

        assert_eq!(report.citations.len(), 1);
        assert_eq!(report.citations[0].canonical(), "1234/45");
        assert_eq!(report.verdict, DamageVerdict::Undetermined);
    }

    #[test]
    fn test_empty_document_is_total() {
        let report = TriageEngine::new().analyze(&document(&[]));
        assert!(report.citations.is_empty());
        assert_eq!(report.verdict, DamageVerdict::Undetermined);
    }
}
