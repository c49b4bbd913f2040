//! Shared PDF handling utilities
//!
//! Document-to-text adapter for audit decisions: decode uploaded bytes,
//! pull text page by page, tolerate pages that fail extraction. Decoding
//! failures and successfully-decoded-but-empty documents are distinct
//! outcomes.

pub mod error;
pub mod parser;

pub use error::DecodeError;
pub use parser::{decision_document_from_bytes, DecisionPdf};
