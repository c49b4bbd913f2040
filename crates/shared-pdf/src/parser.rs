use lopdf::Document;
use shared_types::DecisionDocument;
use tracing::warn;

use crate::error::DecodeError;

/// A decoded decision PDF, ready for page-text extraction.
pub struct DecisionPdf {
    doc: Document,
}

impl DecisionPdf {
    /// Parse PDF bytes. Corrupt or encrypted input is a [`DecodeError`];
    /// nothing in this crate panics past this boundary.
    pub fn load(bytes: &[u8]) -> Result<Self, DecodeError> {
        let doc =
            Document::load_mem(bytes).map_err(|e| DecodeError::ParseError(e.to_string()))?;
        if doc.is_encrypted() {
            return Err(DecodeError::Encrypted);
        }
        Ok(Self { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract text per page, in page order. A page that fails extraction
    /// contributes an empty string; a document where every page comes back
    /// empty is still a successful decode.
    pub fn page_texts(&self) -> Vec<String> {
        self.doc
            .get_pages()
            .keys()
            .map(|&page| match self.doc.extract_text(&[page]) {
                Ok(text) => text,
                Err(err) => {
                    warn!(page, %err, "page text extraction failed");
                    String::new()
                }
            })
            .collect()
    }

    /// All page text joined with newlines, the form the engine consumes.
    pub fn full_text(&self) -> String {
        self.page_texts().join("\n")
    }
}

/// Decode uploaded bytes into a [`DecisionDocument`] for analysis.
pub fn decision_document_from_bytes(
    id: impl Into<String>,
    filename: impl Into<String>,
    bytes: &[u8],
) -> Result<DecisionDocument, DecodeError> {
    let pdf = DecisionPdf::load(bytes)?;
    let text_content = pdf.page_texts();

    Ok(DecisionDocument {
        id: id.into(),
        filename: filename.into(),
        pages: text_content.len() as u32,
        text_content,
        created_at: chrono::Utc::now().timestamp() as u64,
    })
}
