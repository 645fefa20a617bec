//! Delimited list values.
//!
//! A list is a single property value split on a separator.  Nested lists use
//! one separator per level, innermost first.  With the default syntax
//! (`,` inside a group, `;` between groups):
//!
//! ```text
//! int_list = 1,4,3,2                 -> Vec<i64>          [1, 4, 3, 2]
//! str_list = red, fish; blue, fish   -> Vec<Vec<String>>  [["red", "fish"], ["blue", "fish"]]
//! ```
//!
//! The element type picks the level: a scalar element splits on separator 0,
//! a `Vec<scalar>` element splits on separator 1 first and then each group on
//! separator 0, and so on.  Tokens are trimmed before coercion.

use tracing::trace;

use crate::coerce::{parse_bool, parse_float, parse_int};
use crate::error::ValueError;

/// Separators used to split list values, innermost level first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSyntax {
    separators: Vec<char>,
}

impl Default for ListSyntax {
    /// `,` between items, `;` between groups.
    fn default() -> Self {
        Self::new([',', ';'])
    }
}

impl ListSyntax {
    /// Creates a syntax from separators ordered innermost to outermost.
    pub fn new(separators: impl IntoIterator<Item = char>) -> Self {
        Self {
            separators: separators.into_iter().collect(),
        }
    }

    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    /// Splits `text` into elements of type `T`.
    ///
    /// Blank text is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ListTooDeep`] when `T` nests deeper than this
    /// syntax has separators, or the first element coercion error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use settings_reader::ListSyntax;
    ///
    /// let syntax = ListSyntax::default();
    /// let groups: Vec<Vec<String>> = syntax.split("red, fish; blue, fish").unwrap();
    /// assert_eq!(groups, vec![vec!["red", "fish"], vec!["blue", "fish"]]);
    /// ```
    pub fn split<T: ListElement>(&self, text: &str) -> Result<Vec<T>, ValueError> {
        let separator = *self
            .separators
            .get(T::DEPTH)
            .ok_or(ValueError::ListTooDeep {
                depth: T::DEPTH + 1,
                supported: self.separators.len(),
            })?;

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        trace!(depth = T::DEPTH, %separator, "splitting list value");
        text.split(separator)
            .map(|token| T::from_token(token.trim(), self))
            .collect()
    }
}

/// A type that can appear as a list element.
///
/// Implemented for the scalar types the typed getters return and for
/// `Vec<T>` of any element type, which gives nested groups.
pub trait ListElement: Sized {
    /// Number of list levels inside one element: 0 for scalars.
    const DEPTH: usize;

    /// Converts one already-trimmed token.
    fn from_token(token: &str, syntax: &ListSyntax) -> Result<Self, ValueError>;
}

impl ListElement for String {
    const DEPTH: usize = 0;

    fn from_token(token: &str, _syntax: &ListSyntax) -> Result<Self, ValueError> {
        Ok(token.to_string())
    }
}

impl ListElement for bool {
    const DEPTH: usize = 0;

    fn from_token(token: &str, _syntax: &ListSyntax) -> Result<Self, ValueError> {
        parse_bool(token)
    }
}

impl ListElement for i64 {
    const DEPTH: usize = 0;

    fn from_token(token: &str, _syntax: &ListSyntax) -> Result<Self, ValueError> {
        parse_int(token)
    }
}

impl ListElement for f64 {
    const DEPTH: usize = 0;

    fn from_token(token: &str, _syntax: &ListSyntax) -> Result<Self, ValueError> {
        parse_float(token)
    }
}

impl<T: ListElement> ListElement for Vec<T> {
    const DEPTH: usize = T::DEPTH + 1;

    fn from_token(token: &str, syntax: &ListSyntax) -> Result<Self, ValueError> {
        syntax.split(token)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
