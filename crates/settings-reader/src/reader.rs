//! [`SettingsReader`]: typed access to one settings file.
//!
//! # Lookup policy (for beginners)
//!
//! Every getter walks the same three steps and stops at the first one that
//! fails:
//!
//! 1. Is the section there?  If not: [`SettingsError::MissingSection`].
//! 2. Is the property there?  If not: [`SettingsError::MissingProperty`].
//! 3. Does the string coerce to the requested type?  If not:
//!    [`SettingsError::Parse`].
//!
//! The `*_or` variants take a default that replaces the error from steps 1
//! and 2 only.  A value that is present but malformed is a bug in the file
//! (or in the caller's choice of type), so the default never hides it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use settings_store::{parse, serialize, ConfigStore};
use tracing::{debug, trace};

use crate::coerce::{parse_bool, parse_float, parse_int};
use crate::error::{Result, SettingsError, ValueError};
use crate::list::{ListElement, ListSyntax};

/// Typed accessor over a [`ConfigStore`] loaded from (or destined for) disk.
///
/// # Examples
///
/// ```rust
/// use settings_reader::SettingsReader;
///
/// let mut settings = SettingsReader::new();
/// settings.set("section1", "int", "28");
///
/// assert_eq!(settings.get_int("section1", "int").unwrap(), 28);
/// assert_eq!(settings.get_int_or("no_section", "no_property", 14).unwrap(), 14);
/// assert!(settings.get_int("no_section", "no_property").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsReader {
    store: ConfigStore,
    path: Option<PathBuf>,
    list_syntax: ListSyntax,
}

impl SettingsReader {
    /// Creates an empty in-memory reader with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and parses the settings file at `path`.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::MissingFile`] if nothing exists at `path`.
    /// - [`SettingsError::Io`] for any other read failure.
    /// - [`SettingsError::Syntax`] if the text is not valid INI.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let store = load_store(path)?;
        Ok(Self {
            store,
            path: Some(path.to_path_buf()),
            list_syntax: ListSyntax::default(),
        })
    }

    /// Wraps an existing store.  The reader has no backing file.
    pub fn from_store(store: ConfigStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Replaces the list delimiter convention used by [`get_list`](Self::get_list).
    pub fn with_list_syntax(mut self, syntax: ListSyntax) -> Self {
        self.list_syntax = syntax;
        self
    }

    /// The path given at construction.  [`write`](Self::write) never changes it.
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn list_syntax(&self) -> &ListSyntax {
        &self.list_syntax
    }

    // ── String ────────────────────────────────────────────────────────────────

    /// Returns the stored string.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingSection`] or [`SettingsError::MissingProperty`].
    pub fn get(&self, section: &str, property: &str) -> Result<String> {
        self.raw(section, property).map(str::to_string)
    }

    /// Returns the stored string, or `default` when the section or property
    /// is absent.
    pub fn get_or(&self, section: &str, property: &str, default: impl Into<String>) -> String {
        match self.raw(section, property) {
            Ok(value) => value.to_string(),
            Err(_) => default.into(),
        }
    }

    // ── Scalars ───────────────────────────────────────────────────────────────

    /// Reads a boolean (`true/false`, `yes/no`, `on/off`, `1/0`, any case).
    ///
    /// # Errors
    ///
    /// A missing kind, or [`SettingsError::Parse`] for any other word.
    pub fn get_bool(&self, section: &str, property: &str) -> Result<bool> {
        self.coerce(section, property, parse_bool)
    }

    /// Like [`get_bool`](Self::get_bool) with a fallback for missing keys.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Parse`] if the property is present but malformed.
    pub fn get_bool_or(&self, section: &str, property: &str, default: bool) -> Result<bool> {
        or_default(self.get_bool(section, property), default)
    }

    /// Reads a base-10 integer.
    ///
    /// # Errors
    ///
    /// A missing kind, or [`SettingsError::Parse`] for malformed text.
    pub fn get_int(&self, section: &str, property: &str) -> Result<i64> {
        self.coerce(section, property, parse_int)
    }

    /// Like [`get_int`](Self::get_int) with a fallback for missing keys.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Parse`] if the property is present but malformed.
    pub fn get_int_or(&self, section: &str, property: &str, default: i64) -> Result<i64> {
        or_default(self.get_int(section, property), default)
    }

    /// Reads a floating-point number.
    ///
    /// # Errors
    ///
    /// A missing kind, or [`SettingsError::Parse`] for malformed text.
    pub fn get_float(&self, section: &str, property: &str) -> Result<f64> {
        self.coerce(section, property, parse_float)
    }

    /// Like [`get_float`](Self::get_float) with a fallback for missing keys.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Parse`] if the property is present but malformed.
    pub fn get_float_or(&self, section: &str, property: &str, default: f64) -> Result<f64> {
        or_default(self.get_float(section, property), default)
    }

    // ── Lists ─────────────────────────────────────────────────────────────────

    /// Splits the stored value into a list of `T` using this reader's
    /// [`ListSyntax`].
    ///
    /// `T` is a scalar (`String`, `bool`, `i64`, `f64`) for a flat list, or
    /// `Vec<_>` of one of those for grouped lists.
    ///
    /// ```rust
    /// use settings_reader::SettingsReader;
    ///
    /// let mut settings = SettingsReader::new();
    /// settings.set("section1", "int_list", "1,4,3,2");
    /// settings.set("section1", "str_list", "red, fish; blue, fish");
    ///
    /// let ints: Vec<i64> = settings.get_list("section1", "int_list").unwrap();
    /// let fish: Vec<Vec<String>> = settings.get_list("section1", "str_list").unwrap();
    /// assert_eq!(ints, vec![1, 4, 3, 2]);
    /// assert_eq!(fish, vec![vec!["red", "fish"], vec!["blue", "fish"]]);
    /// ```
    ///
    /// # Errors
    ///
    /// A missing kind, or [`SettingsError::Parse`] naming the first token
    /// that failed to coerce.
    pub fn get_list<T: ListElement>(&self, section: &str, property: &str) -> Result<Vec<T>> {
        self.coerce(section, property, |value| self.list_syntax.split(value))
    }

    /// Like [`get_list`](Self::get_list) with a fallback for missing keys.
    /// The default is returned as given, without splitting or coercion.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Parse`] if the property is present but malformed.
    pub fn get_list_or<T: ListElement>(
        &self,
        section: &str,
        property: &str,
        default: Vec<T>,
    ) -> Result<Vec<T>> {
        or_default(self.get_list(section, property), default)
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Stores `value` literally, creating the section if needed.
    pub fn set(&mut self, section: &str, property: &str, value: impl Into<String>) {
        trace!(section, property, "setting property");
        self.store.set(section, property, value);
    }

    /// Removes a property and returns its value.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingSection`] or [`SettingsError::MissingProperty`].
    pub fn remove_property(&mut self, section: &str, property: &str) -> Result<String> {
        self.raw(section, property)?;
        self.store
            .remove_property(section, property)
            .ok_or_else(|| missing_property(section, property))
    }

    /// Removes a whole section.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingSection`] if it does not exist.
    pub fn remove_section(&mut self, section: &str) -> Result<()> {
        self.store
            .remove_section(section)
            .map(drop)
            .ok_or_else(|| missing_section(section))
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// Section names in file order.
    pub fn sections(&self) -> Vec<&str> {
        self.store.sections().collect()
    }

    /// Property names of `section` in file order.
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingSection`] if it does not exist.
    pub fn properties(&self, section: &str) -> Result<Vec<&str>> {
        self.store
            .section(section)
            .map(|s| s.keys().collect())
            .ok_or_else(|| missing_section(section))
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.store.has_section(section)
    }

    pub fn has_property(&self, section: &str, property: &str) -> bool {
        self.store.has_property(section, property)
    }

    // ── Persistence ───────────────────────────────────────────────────────────

    /// Writes the current in-memory contents to `path`, creating or
    /// truncating the file.  [`file_path`](Self::file_path) is unchanged.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::Unrepresentable`] if a section name, property name
    ///   or value line would read back differently.  The file is untouched.
    /// - [`SettingsError::Io`] if the file cannot be written (for example
    ///   because the parent directory does not exist).
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serialize(&self.store).map_err(|source| SettingsError::Unrepresentable {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), sections = self.store.len(), "wrote settings");
        Ok(())
    }

    /// Re-reads the file given at construction, discarding in-memory changes.
    ///
    /// An in-memory reader has nothing to reload and returns `Ok(())`.  On
    /// error the current contents are kept.
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file).
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.path {
            self.store = load_store(path)?;
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn raw(&self, section: &str, property: &str) -> Result<&str> {
        let found = self
            .store
            .section(section)
            .ok_or_else(|| missing_section(section))?;
        found
            .get(property)
            .ok_or_else(|| missing_property(section, property))
    }

    fn coerce<T>(
        &self,
        section: &str,
        property: &str,
        convert: impl FnOnce(&str) -> Result<T, ValueError>,
    ) -> Result<T> {
        let value = self.raw(section, property)?;
        convert(value).map_err(|source| SettingsError::Parse {
            section: section.to_string(),
            property: property.to_string(),
            source,
        })
    }
}

fn load_store(path: &Path) -> Result<ConfigStore> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SettingsError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => SettingsError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let store = parse(&text).map_err(|source| SettingsError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), sections = store.len(), "loaded settings");
    Ok(store)
}

fn or_default<T>(result: Result<T>, default: T) -> Result<T> {
    match result {
        Err(err) if err.is_missing() => Ok(default),
        other => other,
    }
}

fn missing_section(section: &str) -> SettingsError {
    SettingsError::MissingSection {
        section: section.to_string(),
    }
}

fn missing_property(section: &str, property: &str) -> SettingsError {
    SettingsError::MissingProperty {
        section: section.to_string(),
        property: property.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
