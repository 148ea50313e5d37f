//! Strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::denylist::DenyListStore;
use crate::rules::{has_repeated_run, RuleOutcome};

/// Delay before a queued evaluation is delivered, mirroring the typing
/// debounce of the form UI.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Final classification bucket for a password.
///
/// The two deny-list levels are hard vetos and always carry score 0;
/// the four graded levels follow the rule score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Breached Password")]
    BreachedPassword,
    #[serde(rename = "Common Password")]
    CommonPassword,
}

impl StrengthLevel {
    /// Display string, as shown in the strength meter and the API response.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::BreachedPassword => "Breached Password",
            StrengthLevel::CommonPassword => "Common Password",
        }
    }

    /// True for the two deny-list vetos.
    pub fn is_deny_listed(&self) -> bool {
        matches!(
            self,
            StrengthLevel::BreachedPassword | StrengthLevel::CommonPassword
        )
    }

    fn from_score(score: i32) -> Self {
        if score <= 2 {
            StrengthLevel::VeryWeak
        } else if score <= 4 {
            StrengthLevel::Weak
        } else if score <= 6 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating a single password.
///
/// Serializes to the validation API shape:
/// `{score, level, rules: {...}, hasRepeatedChars}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub score: i32,
    pub level: StrengthLevel,
    pub rules: RuleOutcome,
    pub has_repeated_chars: bool,
}

/// Evaluates password strength against the fixed rule set and the deny-lists.
///
/// Pure and total: any string input, including the empty string, yields a
/// well-defined result. Repeated calls against the same store return the
/// same value.
///
/// # Scoring
/// The score starts as the count of satisfied rules (0..=7), loses one point
/// when a run of 3+ identical characters is present (it may reach -1 here;
/// callers treating score as a meter should read any value <= 0 as
/// exhausted), and is forced to 0 when either deny-list matches.
pub fn evaluate_password(password: &SecretString, store: &DenyListStore) -> Evaluation {
    let pwd = password.expose_secret();

    let rules = RuleOutcome::check(pwd, store);
    let has_repeated_chars = has_repeated_run(pwd);

    let mut score = rules.satisfied() as i32;
    if has_repeated_chars {
        score -= 1;
    }

    // Deny-list hits veto the graded levels and zero the score, breached
    // taking precedence over common. The repetition penalty above is a soft
    // deduction only; it never vetoes.
    let level = if !rules.not_breached {
        score = 0;
        StrengthLevel::BreachedPassword
    } else if !rules.not_common {
        score = 0;
        StrengthLevel::CommonPassword
    } else {
        StrengthLevel::from_score(score)
    };

    Evaluation {
        score,
        level,
        rules,
        has_repeated_chars,
    }
}

/// Debounced async variant that delivers the evaluation via channel.
///
/// Waits [`DEBOUNCE`] before evaluating so a superseding keystroke can
/// cancel the pending evaluation through `token`; nothing is sent when
/// cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    store: &DenyListStore,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password(password, store);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
