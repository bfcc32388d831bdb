//! String utilities for the domain layer.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
///
/// Uses byte length for `max_len` but ensures truncation occurs at valid
/// UTF-8 character boundaries. Used for display previews of tool output
/// and log lines; the safety layer has its own character-exact truncation
/// with an omission marker.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("日本語テスト", 30), "日本語テスト");
        assert_eq!(truncate("日本語テスト文字列", 15), "日本語テ...");
    }

    #[test]
    fn test_truncate_emoji() {
        assert_eq!(truncate("Hello 👋 World", 20), "Hello 👋 World");
        // Emojis are 4 bytes each, so max_len=10 cuts back to a boundary
        assert_eq!(truncate("👋🌍🎉", 10), "👋...");
    }

}
