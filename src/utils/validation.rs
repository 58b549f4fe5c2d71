/// Trims `value` and strips any leading `@` characters.
pub fn strip_handle(value: &str) -> &str {
    value.trim().trim_start_matches('@')
}

/// True when every character is ASCII alphanumeric or listed in `extra`.
pub fn is_handle_charset(value: &str, extra: &[char]) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || extra.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_at_signs_and_spaces() {
        assert_eq!(strip_handle("  @@night.owl "), "night.owl");
        assert_eq!(strip_handle("plain"), "plain");
    }

    #[test]
    fn charset_check() {
        assert!(is_handle_charset("user_01", &['_']));
        assert!(!is_handle_charset("user.01", &['_']));
        assert!(is_handle_charset("user.01", &['_', '.']));
        assert!(!is_handle_charset("юзер", &['_']));
    }
}
