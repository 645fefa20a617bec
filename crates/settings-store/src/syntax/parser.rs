//! Line-oriented INI tokenizer.
//!
//! Accepted format:
//! ```text
//! # full-line comment (also `;`)
//! [section]
//! key = value
//! other: value            ; `:` works as well as `=`
//! multi = first line
//!     continued line      ; indented lines extend the previous value
//! ```
//!
//! While a value is being continued, a line holding only whitespace adds an
//! empty line to the value.  A completely empty line ends the value.
//!
//! Inline comments are not recognised: everything after the separator is the
//! value, so values read back exactly as they were written.  Duplicate
//! sections and duplicate keys within a section are rejected.

use thiserror::Error;
use tracing::trace;

use crate::store::ConfigStore;

/// Errors produced while tokenizing settings text.
///
/// Every variant carries the 1-based line number it was raised on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `key = value` line appeared before the first `[section]` header.
    #[error("line {line}: property defined before any [section] header")]
    MissingSectionHeader { line: usize },

    /// The line is neither a header, a property, a comment, nor a continuation.
    #[error("line {line}: expected `[section]` or `key = value`, found {text:?}")]
    MalformedLine { line: usize, text: String },

    /// `[]` or `[   ]`.
    #[error("line {line}: section name is empty")]
    EmptySectionName { line: usize },

    /// `= value` with nothing before the separator.
    #[error("line {line}: property name is empty")]
    EmptyKey { line: usize },

    /// The same `[section]` header appeared twice.
    #[error("line {line}: section [{section}] is already defined")]
    DuplicateSection { line: usize, section: String },

    /// The same key appeared twice within one section.
    #[error("line {line}: property {property:?} is already defined in [{section}]")]
    DuplicateProperty {
        line: usize,
        section: String,
        property: String,
    },
}

impl SyntaxError {
    /// The 1-based line number the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::MissingSectionHeader { line }
            | SyntaxError::MalformedLine { line, .. }
            | SyntaxError::EmptySectionName { line }
            | SyntaxError::EmptyKey { line }
            | SyntaxError::DuplicateSection { line, .. }
            | SyntaxError::DuplicateProperty { line, .. } => *line,
        }
    }
}

/// Parses settings text into a [`ConfigStore`].
///
/// # Errors
///
/// Returns [`SyntaxError`] for the first line that cannot be interpreted.
///
/// # Examples
///
/// ```rust
/// use settings_store::parse;
///
/// let store = parse("[section1]\nproperty1 = value1\n").unwrap();
/// assert_eq!(store.get("section1", "property1"), Some("value1"));
/// ```
pub fn parse(text: &str) -> Result<ConfigStore, SyntaxError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut store = ConfigStore::new();
    let mut current_section: Option<String> = None;
    // (section, key) of the property an indented line would extend.
    let mut continuation: Option<(String, String)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            // A whitespace-only line inside a value is an empty value line;
            // a truly empty line ends the value.
            if !raw.is_empty() {
                if let Some((section, key)) = &continuation {
                    append_line(&mut store, section, key, "");
                    continue;
                }
            }
            continuation = None;
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if raw.starts_with(char::is_whitespace) {
            if let Some((section, key)) = &continuation {
                append_line(&mut store, section, key, trimmed);
                continue;
            }
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let name = trimmed[1..trimmed.len() - 1].trim();
            if name.is_empty() {
                return Err(SyntaxError::EmptySectionName { line });
            }
            if !store.add_section(name) {
                return Err(SyntaxError::DuplicateSection {
                    line,
                    section: name.to_string(),
                });
            }
            current_section = Some(name.to_string());
            continuation = None;
            continue;
        }

        let Some(sep) = trimmed.find(|c: char| c == '=' || c == ':') else {
            return Err(SyntaxError::MalformedLine {
                line,
                text: trimmed.to_string(),
            });
        };
        let key = trimmed[..sep].trim();
        let value = trimmed[sep + 1..].trim();
        if key.is_empty() {
            return Err(SyntaxError::EmptyKey { line });
        }
        let Some(section) = current_section.as_deref() else {
            return Err(SyntaxError::MissingSectionHeader { line });
        };
        if store.has_property(section, key) {
            return Err(SyntaxError::DuplicateProperty {
                line,
                section: section.to_string(),
                property: key.to_string(),
            });
        }

        store.set(section, key, value);
        continuation = Some((section.to_string(), key.to_string()));
    }

    trace!(sections = store.len(), "parsed settings text");
    Ok(store)
}

fn append_line(store: &mut ConfigStore, section: &str, key: &str, line: &str) {
    let mut value = store.get(section, key).unwrap_or_default().to_string();
    value.push('\n');
    value.push_str(line);
    store.set(section, key, value);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_and_properties() {
        // Arrange
        let text = "\
[section1]
property1 = value1
int = 28

[section2]
float=6.626
";

        // Act
        let store = parse(text).expect("valid text");

        // Assert
        assert_eq!(store.get("section1", "property1"), Some("value1"));
        assert_eq!(store.get("section1", "int"), Some("28"));
        assert_eq!(store.get("section2", "float"), Some("6.626"));
        assert_eq!(store.sections().collect::<Vec<_>>(), vec!["section1", "section2"]);
    }

    #[test]
    fn test_parse_colon_separator_and_first_separator_wins() {
        let store = parse("[urls]\nhome: http://example.com\nexpr = a=b\n").unwrap();
        assert_eq!(store.get("urls", "home"), Some("http://example.com"));
        assert_eq!(store.get("urls", "expr"), Some("a=b"));
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# header comment\n; another\n\n[s]\n# inside\nk = v\n";
        let store = parse(text).unwrap();
        assert_eq!(store.section("s").unwrap().len(), 1);
        assert_eq!(store.get("s", "k"), Some("v"));
    }

    #[test]
    fn test_parse_keeps_inline_hash_in_value() {
        let store = parse("[s]\ncolor = #ff0000 ; red\n").unwrap();
        assert_eq!(store.get("s", "color"), Some("#ff0000 ; red"));
    }

    #[test]
    fn test_parse_empty_value() {
        let store = parse("[s]\nblank =\n").unwrap();
        assert_eq!(store.get("s", "blank"), Some(""));
    }

    #[test]
    fn test_parse_continuation_lines_join_with_newline() {
        // Arrange
        let text = "[s]\nmulti = first\n    second\n\tthird\nnext = x\n";

        // Act
        let store = parse(text).unwrap();

        // Assert
        assert_eq!(store.get("s", "multi"), Some("first\nsecond\nthird"));
        assert_eq!(store.get("s", "next"), Some("x"));
    }

    #[test]
    fn test_parse_blank_line_ends_continuation() {
        let store = parse("[s]\na = 1\n\n  b = 2\n").unwrap();
        assert_eq!(store.get("s", "a"), Some("1"));
        assert_eq!(store.get("s", "b"), Some("2"));
    }

    #[test]
    fn test_parse_whitespace_only_line_inside_value_is_empty_value_line() {
        // Arrange
        let text = "[s]\ngap = a\n\t\n\tb\nnext = x\n";

        // Act
        let store = parse(text).unwrap();

        // Assert
        assert_eq!(store.get("s", "gap"), Some("a\n\nb"));
        assert_eq!(store.get("s", "next"), Some("x"));
    }

    #[test]
    fn test_parse_whitespace_only_line_outside_value_is_ignored() {
        let store = parse("[s]\n  \n[t]\n\t\nk = v\n").unwrap();
        assert!(store.section("s").unwrap().is_empty());
        assert_eq!(store.get("t", "k"), Some("v"));
    }

    #[test]
    fn test_parse_section_name_is_trimmed() {
        let store = parse("[  padded  ]\nk = v\n").unwrap();
        assert!(store.has_section("padded"));
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let store = parse("\u{feff}[s]\nk = v\n").unwrap();
        assert!(store.has_section("s"));
    }

    #[test]
    fn test_parse_empty_section_is_kept() {
        let store = parse("[empty]\n[full]\nk = v\n").unwrap();
        assert!(store.section("empty").unwrap().is_empty());
    }

    #[test]
    fn test_parse_property_before_header_returns_error() {
        let err = parse("orphan = 1\n[s]\n").unwrap_err();
        assert_eq!(err, SyntaxError::MissingSectionHeader { line: 1 });
    }

    #[test]
    fn test_parse_malformed_line_returns_error() {
        let err = parse("[s]\nk = v\njust some words\n").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::MalformedLine {
                line: 3,
                text: "just some words".to_string(),
            }
        );
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_parse_empty_section_name_returns_error() {
        assert_eq!(
            parse("[ ]\n").unwrap_err(),
            SyntaxError::EmptySectionName { line: 1 }
        );
    }

    #[test]
    fn test_parse_empty_key_returns_error() {
        assert_eq!(
            parse("[s]\n = v\n").unwrap_err(),
            SyntaxError::EmptyKey { line: 2 }
        );
    }

    #[test]
    fn test_parse_duplicate_section_returns_error() {
        let err = parse("[s]\na = 1\n[s]\n").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::DuplicateSection {
                line: 3,
                section: "s".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_duplicate_property_returns_error() {
        let err = parse("[s]\na = 1\na = 2\n").unwrap_err();
        assert!(matches!(err, SyntaxError::DuplicateProperty { line: 3, .. }));
    }

    #[test]
    fn test_parse_empty_text_yields_empty_store() {
        assert!(parse("").unwrap().is_empty());
    }
}
