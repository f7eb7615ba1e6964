//! Raw value coercion.
//!
//! Coercions are lossy on purpose: unrecognized boolean spellings are false
//! and unparseable integers fall back to the caller's default. Downstream
//! consumers rely on the narrow contract; do not widen it.

/// Parse a boolean from a raw variable value.
///
/// True iff the value equals `"true"` (any case) or the literal `"1"`.
/// Every other string, including the empty string and spellings like
/// `"yes"` or `"on"`, is false.
pub fn parse_boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw == "1"
}

/// Parse a base-10 integer from a raw variable value.
///
/// Returns `default` when the trimmed value does not parse as a whole
/// number. Partial numeric prefixes such as `"3000ms"` do not parse.
pub fn parse_integer<T: std::str::FromStr>(raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boolean_truthy() {
        assert!(parse_boolean("true"));
        assert!(parse_boolean("TRUE"));
        assert!(parse_boolean("True"));
        assert!(parse_boolean("1"));
    }

    #[test]
    fn test_parse_boolean_falsey() {
        assert!(!parse_boolean("false"));
        assert!(!parse_boolean("yes"));
        assert!(!parse_boolean("on"));
        assert!(!parse_boolean("01"));
        assert!(!parse_boolean(""));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42", 0u32), 42);
        assert_eq!(parse_integer("abc", 7u32), 7);
        assert_eq!(parse_integer("", 3u32), 3);
        assert_eq!(parse_integer(" 42 ", 0u32), 42);
    }

    #[test]
    fn test_parse_integer_rejects_partial_prefix() {
        assert_eq!(parse_integer("3000ms", 10u64), 10);
        assert_eq!(parse_integer("4.5", 10u64), 10);
    }

    #[test]
    fn test_parse_integer_typed() {
        assert_eq!(parse_integer("8080", 0u16), 8080);
        // Out of range for the target type falls back too.
        assert_eq!(parse_integer("70000", 3000u16), 3000);
    }
}
