//! Repetition check - detects runs of identical consecutive characters.

/// True when the password contains 3 or more identical consecutive
/// characters anywhere. Case-sensitive: `"aAa"` has no run.
pub fn has_repeated_run(password: &str) -> bool {
    let mut run = 1;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
        prev = Some(c);
    }
    false
}
