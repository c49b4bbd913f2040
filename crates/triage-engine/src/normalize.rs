//! Case folding for Turkish decision text.
//!
//! All matching in this crate runs over a folded copy of the input, so the
//! trigger tables and citation keywords are written in lowercase only.

/// Lowercase `text` with Turkish dotted/dotless i handled explicitly.
///
/// `str::to_lowercase` maps `İ` to `i` plus a combining dot and `I` to `i`,
/// neither of which lines up with the lowercase Turkish boilerplate the
/// matchers are written against, so those two characters are mapped before
/// the generic lowercasing. Digits pass through unchanged.
pub fn fold_text(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'İ' => folded.push('i'),
            'I' => folded.push('ı'),
            _ => folded.extend(ch.to_lowercase()),
        }
    }
    folded
}
