//! Password rule checks
//!
//! One file per rule family; `RuleOutcome` collects the result of the fixed
//! rule set for a single password.

mod charset;
mod length;
mod repeat;

pub use charset::{has_digit, has_lowercase, has_special, has_uppercase, SPECIAL_CHARS};
pub use length::meets_min_length;
pub use repeat::has_repeated_run;

use crate::denylist::{DenyListStore, ListKind};
use serde::{Deserialize, Serialize};

/// Outcome of the fixed rule set, one boolean per rule.
///
/// The fields are declared in display order so UI bindings iterate them
/// stably. Serializes to the camelCase keys the validation API emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOutcome {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
    pub not_breached: bool,
    pub not_common: bool,
}

impl RuleOutcome {
    /// Evaluates every rule against the password.
    ///
    /// Character-class rules look at the raw input; the two deny-list rules
    /// are case-insensitive via the store.
    pub fn check(password: &str, store: &DenyListStore) -> Self {
        Self {
            length: meets_min_length(password),
            uppercase: has_uppercase(password),
            lowercase: has_lowercase(password),
            number: has_digit(password),
            special: has_special(password),
            not_breached: !store.contains(ListKind::Breached, password),
            not_common: !store.contains(ListKind::Common, password),
        }
    }

    /// Number of satisfied rules, 0..=7.
    pub fn satisfied(&self) -> u32 {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
            self.not_breached,
            self.not_common,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u32
    }
}
