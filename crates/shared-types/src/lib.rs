pub mod types;

pub use types::{CitationRef, DamageVerdict, DecisionDocument, TriageReport};
