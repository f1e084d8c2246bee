//! Plain text parsing.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,]+").unwrap());

/// Split text content on whitespace and commas into non-empty tokens.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so a text
/// file never fails to parse.
pub(crate) fn extract_tokens(content: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(content);
    SEPARATORS
        .split(&text)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_newlines_spaces_and_commas() {
        let tokens = extract_tokens(b"111111\n222222 333333,444444");
        assert_eq!(tokens, vec!["111111", "222222", "333333", "444444"]);
    }

    #[test]
    fn test_collapses_separator_runs() {
        let tokens = extract_tokens(b"111111,, \r\n\r\n  222222");
        assert_eq!(tokens, vec!["111111", "222222"]);
    }

    #[test]
    fn test_keeps_non_numeric_tokens() {
        let tokens = extract_tokens(b"Bond 123456 (winner)");
        assert_eq!(tokens, vec!["Bond", "123456", "(winner)"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_tokens(b"").is_empty());
        assert!(extract_tokens(b"  \n\t ,, \n").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let tokens = extract_tokens(&[0x31, 0x32, 0xff, 0x20, 0x33, 0x34]);
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].starts_with("12"));
        assert_eq!(tokens[1], "34");
    }
}
