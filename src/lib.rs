//! Password strength evaluation library
//!
//! This library checks a candidate password against a fixed rule set and two
//! deny-lists (breached passwords, commonly used passwords), producing a
//! structured result shared by a form UI and a validation API.
//!
//! # Features
//!
//! - `async` (default): Enables guarded deny-list loading and debounced
//!   evaluation delivery with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACHED_PATH`: Custom path to the breached password file
//!   (default: `./assets/breachpassword.txt`)
//! - `PWD_COMMON_PATH`: Custom path to the common password file
//!   (default: `./assets/commonpassword.txt`)
//! - `PWD_DICTIONARY_PATH`: Custom path to the fallback dictionary file
//!   (default: `./assets/dictionary.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_checker::{evaluate_password, DenyListPaths, DenyListStore};
//! use secrecy::SecretString;
//!
//! // Load the deny-lists once at startup; failures fall back to empty sets
//! let store = DenyListStore::load(&DenyListPaths::from_env());
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password(&password, &store);
//!
//! println!("{} ({}/7)", evaluation.level, evaluation.score);
//! ```

// Internal modules
mod denylist;
mod email;
mod evaluator;
mod rules;

// Public API
pub use denylist::{CommonListSource, DenyListError, DenyListPaths, DenyListStore, ListKind};
pub use email::{check_email, EmailCheck};
pub use evaluator::{evaluate_password, Evaluation, StrengthLevel};
pub use rules::{RuleOutcome, SPECIAL_CHARS};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, DEBOUNCE};
