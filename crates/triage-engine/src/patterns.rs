//! Trigger tables and matching for the damage classifier.
//!
//! Triggers are opaque Turkish audit-decision boilerplate, written in the
//! folded (lowercase) form that [`crate::normalize::fold_text`] produces.

/// A single classifier trigger.
///
/// `Gapped` parts match in order with arbitrary text in between, including
/// line breaks; the scan is leftmost per part, so the gap is non-greedy.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    Phrase(&'static str),
    Gapped(&'static [&'static str]),
}

impl Trigger {
    /// Test this trigger against folded text.
    pub fn matches(&self, folded: &str) -> bool {
        match self {
            Trigger::Phrase(phrase) => folded.contains(phrase),
            Trigger::Gapped(parts) => {
                let mut pos = 0;
                for part in parts.iter() {
                    match folded[pos..].find(part) {
                        Some(offset) => pos += offset + part.len(),
                        None => return false,
                    }
                }
                true
            }
        }
    }
}

/// Tier 1: phrases that order recovery of a public loss.
/// Checked first; any match settles the verdict.
pub const DAMAGE_PRESENT_TRIGGERS: &[Trigger] = &[
    Trigger::Phrase("ödettirilmesine"),
    Trigger::Gapped(&["kamu zararına", "neden olunmuştur"]),
    Trigger::Gapped(&["faiziyle", "tahsil edilmesine"]),
];

/// Tier 2: phrases that close the matter without a loss finding.
/// Only consulted when no tier-1 trigger matched. Near-duplicate entries
/// ("husus bulunmadığına" is a substring of two longer ones) are kept
/// separate; list order is part of the contract.
pub const DAMAGE_ABSENT_TRIGGERS: &[Trigger] = &[
    Trigger::Phrase("ilişilecek husus bulunmadığına"),
    Trigger::Phrase("mevzuata aykırılık bulunmamıştır"),
    Trigger::Phrase("zarar oluşmamıştır"),
    Trigger::Phrase("tahsil edildiğinden"),
    Trigger::Phrase("husus bulunmadığına"),
    Trigger::Phrase("ilişilecek husus kalmadığına"),
    Trigger::Phrase("kamu zararı oluşmadığından"),
    Trigger::Gapped(&["herhangi bir kamu zararı", "oluşmadığından"]),
    Trigger::Gapped(&["kamu zararı olduğu", "ilişilecek husus bulunmadığına"]),
    Trigger::Gapped(&["… tl", "ilişilecek husus bulunmadığına"]),
    Trigger::Gapped(&["ilişilecek", "husus bulunmadığına"]),
    Trigger::Phrase("sorumlularından müştereken ve müteselsilen tazminine karar verilmesi uygun olur"),
];
