//! Character-class rules - uppercase, lowercase, digit, special.
//!
//! All four are ASCII-range checks over the raw (case-sensitive) input.

/// The fixed punctuation/symbol set the special rule accepts.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// True when the password contains a character in `A-Z`.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// True when the password contains a character in `a-z`.
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// True when the password contains a digit `0-9`.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// True when the password contains at least one character from
/// [`SPECIAL_CHARS`].
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
