use thiserror::Error;

/// Failure to turn uploaded bytes into a readable document.
///
/// Distinct from a document that decodes fine but yields no text; that is
/// an empty success, not an error.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("PDF is encrypted")]
    Encrypted,
}
