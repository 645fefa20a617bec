//! Error taxonomy for settings access.
//!
//! Three "missing" kinds describe *where* a lookup stopped (file, section,
//! property).  They are the only kinds a caller-supplied default can
//! suppress.  A value that is present but cannot be coerced is a
//! [`SettingsError::Parse`] and always reaches the caller.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use settings_store::{SyntaxError, WriteError};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = SettingsError> = std::result::Result<T, E>;

/// A stored string could not be converted to the requested type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Not one of `true/false`, `yes/no`, `on/off`, `1/0` (any case).
    #[error("{value:?} is not a boolean (expected true/false, yes/no, on/off or 1/0)")]
    InvalidBool { value: String },

    /// Not a base-10 integer that fits in an `i64`.
    #[error("{value:?} is not a base-10 integer: {source}")]
    InvalidInt {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Not a floating-point literal.
    #[error("{value:?} is not a floating-point number: {source}")]
    InvalidFloat {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// The requested element type nests deeper than the list syntax has
    /// separators for.
    #[error("list nesting depth {depth} exceeds the {supported} separator(s) configured")]
    ListTooDeep { depth: usize, supported: usize },
}

/// Errors returned by [`SettingsReader`](crate::SettingsReader).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The path given at construction does not exist.
    #[error("settings file not found: {path}")]
    MissingFile { path: PathBuf },

    /// The requested section is absent and no default was supplied.
    #[error("missing section [{section}]")]
    MissingSection { section: String },

    /// The section exists but the property is absent and no default was supplied.
    #[error("missing property {property:?} in section [{section}]")]
    MissingProperty { section: String, property: String },

    /// The property exists but its value does not coerce to the requested type.
    #[error("invalid value for {property:?} in section [{section}]: {source}")]
    Parse {
        section: String,
        property: String,
        #[source]
        source: ValueError,
    },

    /// The settings file exists but is not valid INI text.
    #[error("syntax error in {path}: {source}")]
    Syntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    /// The in-memory contents hold a name or value that would not read back
    /// unchanged.  Nothing was written.
    #[error("cannot write settings to {path}: {source}")]
    Unrepresentable {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    /// Any other file-system failure while reading or writing.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`SettingsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingFile,
    MissingSection,
    MissingProperty,
    /// Malformed stored value or malformed file text.
    ParseError,
    /// Contents that the file format cannot hold.
    Unrepresentable,
    Io,
}

impl SettingsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettingsError::MissingFile { .. } => ErrorKind::MissingFile,
            SettingsError::MissingSection { .. } => ErrorKind::MissingSection,
            SettingsError::MissingProperty { .. } => ErrorKind::MissingProperty,
            SettingsError::Parse { .. } | SettingsError::Syntax { .. } => ErrorKind::ParseError,
            SettingsError::Unrepresentable { .. } => ErrorKind::Unrepresentable,
            SettingsError::Io { .. } => ErrorKind::Io,
        }
    }

    /// `true` for the kinds a default value stands in for.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            SettingsError::MissingSection { .. } | SettingsError::MissingProperty { .. }
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
