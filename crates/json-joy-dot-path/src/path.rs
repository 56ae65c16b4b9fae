//! Path tokenization.
//!
//! A path such as `"a.b.0"` is split on a single delimiter into opaque
//! tokens. Tokens are never unescaped; a key containing the delimiter
//! cannot be addressed with that delimiter, pick another one instead.

/// Default token separator.
pub const DEFAULT_DELIMITER: &str = ".";

/// Split a path string into tokens.
///
/// - Empty path returns no tokens (the root itself)
/// - Empty delimiter returns the whole path as one token
/// - Empty segments are kept, so `"a..b"` has an empty middle token
///
/// # Example
///
/// ```
/// use json_joy_dot_path::split_path;
///
/// assert_eq!(split_path("", "."), Vec::<&str>::new());
/// assert_eq!(split_path("a.b.c", "."), vec!["a", "b", "c"]);
/// assert_eq!(split_path("a/b", "/"), vec!["a", "b"]);
/// assert_eq!(split_path("a.b", ""), vec!["a.b"]);
/// ```
pub fn split_path<'a>(path: &'a str, delimiter: &str) -> Vec<&'a str> {
    if path.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![path];
    }
    path.split(delimiter).collect()
}

/// Join tokens back into a path string.
///
/// # Example
///
/// ```
/// use json_joy_dot_path::format_path;
///
/// assert_eq!(format_path(&["a", "b", "c"], "."), "a.b.c");
/// assert_eq!(format_path::<&str>(&[], "."), "");
/// ```
pub fn format_path<S: AsRef<str>>(tokens: &[S], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Parse a token as an array index.
///
/// Only canonical non-negative integers are accepted: no sign, no
/// whitespace, no leading zeros (`"0"` itself is fine).
///
/// # Example
///
/// ```
/// use json_joy_dot_path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("42"), Some(42));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("a"), None);
/// ```
pub fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    // Overflow falls through to None.
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("", "."), Vec::<&str>::new());
        assert_eq!(split_path("a", "."), vec!["a"]);
        assert_eq!(split_path("a.b.c", "."), vec!["a", "b", "c"]);

        // Empty segments
        assert_eq!(split_path("a..b", "."), vec!["a", "", "b"]);
        assert_eq!(split_path(".", "."), vec!["", ""]);
        assert_eq!(split_path("a.", "."), vec!["a", ""]);
    }

    #[test]
    fn test_split_path_custom_delimiter() {
        assert_eq!(split_path("a/b.c", "/"), vec!["a", "b.c"]);
        assert_eq!(split_path("a::b::c", "::"), vec!["a", "b", "c"]);
        assert_eq!(split_path("a.b", ""), vec!["a.b"]);
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path::<&str>(&[], "."), "");
        assert_eq!(format_path(&["a"], "."), "a");
        assert_eq!(format_path(&["a".to_string(), "b".to_string()], "/"), "a/b");
        assert_eq!(format_path(&["a", "", "b"], "."), "a..b");
    }

    #[test]
    fn test_split_format_roundtrip() {
        for path in ["a", "a.b.c", "a..b", "0.1.x", "."] {
            assert_eq!(format_path(&split_path(path, "."), "."), path);
        }
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("7"), Some(7));
        assert_eq!(parse_index("123"), Some(123));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("00"), None);
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("1.5"), None);
        assert_eq!(parse_index(" 1"), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }
}
