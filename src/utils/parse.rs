//! Numeric token parsing for interactive input.
//!
//! A token counts as numeric only when it is non-empty and made of ASCII digits
//! and dots. Signs, exponents and anything else yield `None`, which every field
//! predicate treats as inadmissible.

pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Parses the leading digit run of a numeric token, so `"3.5"` reads as 3
/// and `".5"` reads as 0.
pub fn parse_integer(token: &str) -> Option<i64> {
    if !is_number(token) {
        return None;
    }

    let digits = token.split('.').next().unwrap_or("");
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

/// Parses a numeric token up to its second dot, so `"1.2.3"` reads as 1.2
/// and a lone `"."` reads as 0.0.
pub fn parse_double(token: &str) -> Option<f64> {
    if !is_number(token) {
        return None;
    }

    let end = token
        .match_indices('.')
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    let prefix = &token[..end];
    if prefix == "." {
        return Some(0.0);
    }
    prefix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number() {
        assert!(is_number("42"));
        assert!(is_number("42.5"));
        assert!(is_number("."));
        assert!(!is_number(""));
        assert!(!is_number("-1"));
        assert!(!is_number("1e3"));
        assert!(!is_number("abc"));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("7"), Some(7));
        assert_eq!(parse_integer("3.5"), Some(3));
        assert_eq!(parse_integer(".5"), Some(0));
        assert_eq!(parse_integer("-1"), None);
        assert_eq!(parse_integer("two"), None);
        assert_eq!(parse_integer("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_double() {
        assert_eq!(parse_double("50"), Some(50.0));
        assert_eq!(parse_double("50.25"), Some(50.25));
        assert_eq!(parse_double("1.2.3"), Some(1.2));
        assert_eq!(parse_double("."), Some(0.0));
        assert_eq!(parse_double("0"), Some(0.0));
        assert_eq!(parse_double("-1.0"), None);
        assert_eq!(parse_double(""), None);
    }
}
