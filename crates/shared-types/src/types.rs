use std::fmt;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DecisionDocument {
    pub id: String,
    pub filename: String,
    pub pages: u32,
    pub text_content: Vec<String>, // Per-page text
    pub created_at: u64,
}

/// A law/article reference found in decision text, e.g. "5018/71".
///
/// Identity is the number pair; where in the text it was found does not
/// matter. The canonical rendering is `"{law_number}/{article_number}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CitationRef {
    pub law_number: String,     // 4 digits
    pub article_number: String, // 1-3 digits
}

impl CitationRef {
    pub fn new(law_number: impl Into<String>, article_number: impl Into<String>) -> Self {
        Self {
            law_number: law_number.into(),
            article_number: article_number.into(),
        }
    }

    pub fn canonical(&self) -> String {
        format!("{}/{}", self.law_number, self.article_number)
    }
}

impl fmt::Display for CitationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.law_number, self.article_number)
    }
}

/// Three-way public-damage classification. No combined states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DamageVerdict {
    DamagePresent,
    DamageAbsent,
    Undetermined,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TriageReport {
    pub document_id: String,
    pub citations: Vec<CitationRef>,
    pub verdict: DamageVerdict,
    pub analyzed_at: u64,
}
