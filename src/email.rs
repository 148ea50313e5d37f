//! Email format check - companion validator for the credential form.

use serde::{Deserialize, Serialize};

const INVALID_MESSAGE: &str = "Please enter a valid email address";

/// Result of the email format check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCheck {
    pub is_valid: bool,
    pub message: String,
}

/// Checks that an address has the conventional `local@domain.tld` shape.
///
/// Accepted iff the input has no whitespace, exactly one `@` with a
/// non-empty part on each side, and the domain ends in a dot-separated
/// label of two or more ASCII letters. This is a format check only, not a
/// deliverability check.
pub fn check_email(email: &str) -> EmailCheck {
    let is_valid = has_email_shape(email);
    EmailCheck {
        is_valid,
        message: if is_valid {
            String::new()
        } else {
            INVALID_MESSAGE.to_string()
        },
    }
}

fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for email in [
            "user@example.com",
            "first.last@example.co",
            "user+tag@sub.example.org",
            "a@b.de",
        ] {
            let check = check_email(email);
            assert!(check.is_valid, "expected {:?} to be valid", email);
            assert!(check.message.is_empty());
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@example",
            "user@.com",
            "user@example.c",
            "user@example.c0m",
            "user@example.com.",
            "us er@example.com",
            "user@exa mple.com",
        ] {
            let check = check_email(email);
            assert!(!check.is_valid, "expected {:?} to be invalid", email);
            assert_eq!(check.message, INVALID_MESSAGE);
        }
    }

    #[test]
    fn test_multiple_dots_use_final_label() {
        assert!(check_email("user@a.b.example.com").is_valid);
        assert!(!check_email("user@a.b.example.c").is_valid);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(check_email("nope")).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "isValid": false,
                "message": "Please enter a valid email address"
            })
        );
    }
}
