//! Serializer producing text that [`parse`](super::parse) reads back.
//!
//! Output layout:
//! ```text
//! [section1]
//! property1 = value1
//! multi = first line
//! 	continued line
//!
//! 	line after an empty one
//!
//! [section2]
//! ...
//! ```
//! Sections and properties are written in store order.  Multi-line values
//! put every line after the first on its own tab-indented continuation line;
//! an empty line inside a value is written as a lone tab.
//!
//! Names and values that would read back differently are refused with a
//! [`WriteError`] before any text is produced.  Whitespace around a value
//! line is the one loss that is not checked: the tokenizer trims it.

use thiserror::Error;

use crate::store::{ConfigStore, Section};

/// Why a section or property name cannot be written.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NameProblem {
    #[error("name is empty")]
    Empty,

    #[error("name has leading or trailing whitespace")]
    Padded,

    #[error("name contains a line break")]
    LineBreak,

    /// `=` or `:` inside a property name.
    #[error("name contains the separator {0:?}")]
    Separator(char),

    /// A property name starting with `#`, `;` or `[`.
    #[error("name starts with {0:?}")]
    Prefix(char),
}

/// The store holds something the text format cannot represent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WriteError {
    #[error("section name {section:?} cannot be written: {problem}")]
    SectionName {
        section: String,
        #[source]
        problem: NameProblem,
    },

    #[error("property name {property:?} in [{section}] cannot be written: {problem}")]
    PropertyName {
        section: String,
        property: String,
        #[source]
        problem: NameProblem,
    },

    /// A line after the first would read back as a comment.
    #[error("value of {property:?} in [{section}] cannot be written: line {line} starts with a comment prefix")]
    CommentLine {
        section: String,
        property: String,
        line: usize,
    },
}

/// Renders `store` as settings text.
///
/// # Errors
///
/// Returns [`WriteError`] for the first name or value that would not read
/// back unchanged.
///
/// # Examples
///
/// ```rust
/// use settings_store::{parse, serialize, ConfigStore};
///
/// let mut store = ConfigStore::new();
/// store.set("section1", "property1", "value1");
/// let text = serialize(&store).unwrap();
/// assert_eq!(text, "[section1]\nproperty1 = value1\n\n");
/// assert_eq!(parse(&text).unwrap(), store);
/// ```
pub fn serialize(store: &ConfigStore) -> Result<String, WriteError> {
    let mut out = String::new();

    for section in store.iter() {
        check_section(section)?;

        out.push('[');
        out.push_str(section.name());
        out.push_str("]\n");

        for (key, value) in section.iter() {
            let mut lines = value.split('\n');
            let first = lines.next().unwrap_or_default();

            out.push_str(key);
            if first.is_empty() {
                out.push_str(" =\n");
            } else {
                out.push_str(" = ");
                out.push_str(first);
                out.push('\n');
            }
            for rest in lines {
                out.push('\t');
                out.push_str(rest);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    Ok(out)
}

fn check_section(section: &Section) -> Result<(), WriteError> {
    let name = section.name();
    if let Some(problem) = common_name_problem(name) {
        return Err(WriteError::SectionName {
            section: name.to_string(),
            problem,
        });
    }

    for (key, value) in section.iter() {
        let problem = common_name_problem(key)
            .or_else(|| key.chars().find(|c| matches!(c, '=' | ':')).map(NameProblem::Separator))
            .or_else(|| {
                key.chars()
                    .next()
                    .filter(|c| matches!(c, '#' | ';' | '['))
                    .map(NameProblem::Prefix)
            });
        if let Some(problem) = problem {
            return Err(WriteError::PropertyName {
                section: name.to_string(),
                property: key.to_string(),
                problem,
            });
        }

        // Line 1 follows the separator, so only continuation lines can be
        // mistaken for comments.
        if let Some(idx) = value
            .split('\n')
            .skip(1)
            .position(|l| l.trim_start().starts_with(['#', ';']))
        {
            return Err(WriteError::CommentLine {
                section: name.to_string(),
                property: key.to_string(),
                line: idx + 2,
            });
        }
    }
    Ok(())
}

fn common_name_problem(name: &str) -> Option<NameProblem> {
    if name.is_empty() {
        Some(NameProblem::Empty)
    } else if name.contains(['\n', '\r']) {
        Some(NameProblem::LineBreak)
    } else if name.trim() != name {
        Some(NameProblem::Padded)
    } else {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
