use shared_types::DamageVerdict;

use crate::normalize::fold_text;
use crate::patterns::{DAMAGE_ABSENT_TRIGGERS, DAMAGE_PRESENT_TRIGGERS};

/// Classify the public-damage outcome of a decision text.
///
/// The present tier is exhausted before the absent tier is consulted at
/// all, and the first match within a tier settles the verdict. A document
/// quoting a committee's "no issue" finding before ordering recovery still
/// classifies as `DamagePresent`.
pub fn classify_damage(text: &str) -> DamageVerdict {
    let folded = fold_text(text);

    for trigger in DAMAGE_PRESENT_TRIGGERS {
        if trigger.matches(&folded) {
            return DamageVerdict::DamagePresent;
        }
    }

    for trigger in DAMAGE_ABSENT_TRIGGERS {
        if trigger.matches(&folded) {
            return DamageVerdict::DamageAbsent;
        }
    }

    DamageVerdict::Undetermined
}
