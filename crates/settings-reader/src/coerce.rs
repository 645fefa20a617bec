//! Scalar coercion from stored strings.
//!
//! These are the rules every typed getter and every list element shares.
//! Surrounding whitespace is ignored; nothing else is forgiven.

use crate::error::ValueError;

const TRUE_WORDS: [&str; 4] = ["true", "yes", "on", "1"];
const FALSE_WORDS: [&str; 4] = ["false", "no", "off", "0"];

/// Case-insensitive boolean recognition.
///
/// ```rust
/// use settings_reader::coerce::parse_bool;
///
/// assert_eq!(parse_bool("True"), Ok(true));
/// assert_eq!(parse_bool(" off "), Ok(false));
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(text: &str) -> Result<bool, ValueError> {
    let word = text.trim();
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
        Ok(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
        Ok(false)
    } else {
        Err(ValueError::InvalidBool {
            value: text.to_string(),
        })
    }
}

/// Base-10 integer with an optional sign.
pub fn parse_int(text: &str) -> Result<i64, ValueError> {
    text.trim()
        .parse::<i64>()
        .map_err(|source| ValueError::InvalidInt {
            value: text.to_string(),
            source,
        })
}

/// Decimal or exponent float literal (`6.626`, `-1e-3`, `inf`, `NaN`).
pub fn parse_float(text: &str) -> Result<f64, ValueError> {
    text.trim()
        .parse::<f64>()
        .map_err(|source| ValueError::InvalidFloat {
            value: text.to_string(),
            source,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_recognises_every_word_in_any_case() {
        for word in ["true", "True", "YES", "on", "1"] {
            assert_eq!(parse_bool(word), Ok(true), "{word}");
        }
        for word in ["false", "FALSE", "No", "oFF", "0"] {
            assert_eq!(parse_bool(word), Ok(false), "{word}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_unknown_word() {
        assert_eq!(
            parse_bool("maybe"),
            Err(ValueError::InvalidBool {
                value: "maybe".to_string()
            })
        );
        assert!(parse_bool("").is_err());
        assert!(parse_bool("2").is_err());
    }

    #[test]
    fn test_parse_int_accepts_sign_and_whitespace() {
        assert_eq!(parse_int("28"), Ok(28));
        assert_eq!(parse_int(" -14 "), Ok(-14));
        assert_eq!(parse_int("+7"), Ok(7));
    }

    #[test]
    fn test_parse_int_rejects_non_decimal_text() {
        for text in ["6.626", "0x1F", "twenty", "", "1 000"] {
            assert!(
                matches!(parse_int(text), Err(ValueError::InvalidInt { .. })),
                "{text:?} must not parse as an integer"
            );
        }
    }

    #[test]
    fn test_parse_int_rejects_overflow() {
        assert!(parse_int("9223372036854775808").is_err());
    }

    #[test]
    fn test_parse_float_accepts_common_literals() {
        assert_eq!(parse_float("6.626"), Ok(6.626));
        assert_eq!(parse_float("28"), Ok(28.0));
        assert_eq!(parse_float("-1e-3"), Ok(-0.001));
        assert!(parse_float("inf").unwrap().is_infinite());
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        let err = parse_float("6,626").unwrap_err();
        assert!(matches!(err, ValueError::InvalidFloat { ref value, .. } if value == "6,626"));
    }
}
