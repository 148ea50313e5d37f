//! Length rule - checks password minimum length.

const MIN_LENGTH: usize = 8;

/// True when the password has at least 8 characters.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        assert!(!meets_min_length("Short1!"));
    }

    #[test]
    fn test_exactly_minimum() {
        assert!(meets_min_length("12345678"));
    }

    #[test]
    fn test_long_enough() {
        assert!(meets_min_length("LongEnough123!"));
    }

    #[test]
    fn test_empty() {
        assert!(!meets_min_length(""));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 8 two-byte characters
        assert!(meets_min_length("éééééééé"));
    }
}
