//! In-memory model of a settings file: sections of string properties.
//!
//! Both levels keep insertion order.  A section appears where it was first
//! seen in the file (or first `set`), and a property keeps its slot even when
//! its value is overwritten, so writing a store back out changes as little of
//! the file's layout as possible.
//!
//! # Why a `Vec` and not a `HashMap`? (for beginners)
//!
//! A `HashMap` iterates in an unspecified order, which would shuffle the
//! sections every time a file is written.  Settings files hold a handful of
//! sections with a handful of keys each, so a linear scan over a `Vec` is as
//! fast as hashing in practice and keeps the order for free.

use serde::{Deserialize, Serialize};

/// One `key = value` line.  Only reachable through [`Section`], which keeps
/// keys unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Property {
    key: String,
    value: String,
}

/// A named group of properties.  Keys are unique within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    properties: Vec<Property>,
}

impl Section {
    /// Creates an empty section called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// The section's header name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.properties[i].value.as_str())
    }

    /// Inserts or overwrites `key`, returning the previous value.
    ///
    /// An overwritten key stays at its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.properties[i].value, value)),
            None => {
                self.properties.push(Property { key, value });
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.position(key).map(|i| self.properties.remove(i).value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.key.as_str())
    }

    /// `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.key == key)
    }
}

/// Ordered mapping of section name to [`Section`].
///
/// Values are always strings; interpreting them is the caller's business.
///
/// # Examples
///
/// ```rust
/// use settings_store::ConfigStore;
///
/// let mut store = ConfigStore::new();
/// store.set("network", "port", "24800");
/// assert_eq!(store.get("network", "port"), Some("24800"));
/// assert_eq!(store.get("network", "host"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigStore {
    sections: Vec<Section>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Looks up a single property value.
    pub fn get(&self, section: &str, property: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(property))
    }

    /// Sets `property` in `section`, creating the section when absent.
    ///
    /// Returns the value that was replaced, if any.
    pub fn set(
        &mut self,
        section: &str,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.section_entry(section).insert(property, value)
    }

    /// Appends an empty section.  Returns `false` if it already exists.
    pub fn add_section(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_section(&name) {
            return false;
        }
        self.sections.push(Section::new(name));
        true
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let idx = self.sections.iter().position(|s| s.name == name)?;
        Some(self.sections.remove(idx))
    }

    pub fn remove_property(&mut self, section: &str, property: &str) -> Option<String> {
        self.section_mut(section).and_then(|s| s.remove(property))
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn has_property(&self, section: &str, property: &str) -> bool {
        self.get(section, property).is_some()
    }

    /// Section names in order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_entry(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_creates_missing_section() {
        // Arrange
        let mut store = ConfigStore::new();

        // Act
        let previous = store.set("section2", "property1", "value3");

        // Assert
        assert_eq!(previous, None);
        assert!(store.has_section("section2"));
        assert_eq!(store.get("section2", "property1"), Some("value3"));
    }

    #[test]
    fn test_set_overwrite_returns_previous_and_keeps_position() {
        // Arrange
        let mut store = ConfigStore::new();
        store.set("s", "a", "1");
        store.set("s", "b", "2");

        // Act
        let previous = store.set("s", "a", "changed");

        // Assert
        assert_eq!(previous.as_deref(), Some("1"));
        let keys: Vec<&str> = store.section("s").unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(store.get("s", "a"), Some("changed"));
    }

    #[test]
    fn test_sections_iterate_in_insertion_order() {
        let mut store = ConfigStore::new();
        store.set("zeta", "k", "v");
        store.set("alpha", "k", "v");
        store.set("zeta", "k2", "v");

        let names: Vec<&str> = store.sections().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_section_rejects_duplicate() {
        let mut store = ConfigStore::new();
        assert!(store.add_section("empty"));
        assert!(!store.add_section("empty"));
        assert!(store.section("empty").unwrap().is_empty());
    }

    #[test]
    fn test_remove_property_and_section() {
        // Arrange
        let mut store = ConfigStore::new();
        store.set("s", "a", "1");
        store.set("s", "b", "2");

        // Act / Assert
        assert_eq!(store.remove_property("s", "a").as_deref(), Some("1"));
        assert_eq!(store.remove_property("s", "a"), None);
        assert_eq!(store.remove_property("missing", "a"), None);
        assert!(store.has_property("s", "b"));

        let removed = store.remove_section("s").expect("section exists");
        assert_eq!(removed.name(), "s");
        assert_eq!(removed.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_distinguishes_missing_section_from_missing_property() {
        let mut store = ConfigStore::new();
        store.set("s", "a", "1");

        assert!(store.section("nope").is_none());
        assert!(store.section("s").is_some());
        assert_eq!(store.get("s", "nope"), None);
    }

    #[test]
    fn test_empty_value_is_stored_literally() {
        let mut store = ConfigStore::new();
        store.set("s", "blank", "");
        assert_eq!(store.get("s", "blank"), Some(""));
    }

    #[test]
    fn test_store_serializes_to_json_and_back() {
        // Arrange
        let mut store = ConfigStore::new();
        store.set("section1", "property1", "value1");
        store.set("section2", "int", "28");

        // Act
        let json = serde_json::to_string(&store).expect("serialize");
        let restored: ConfigStore = serde_json::from_str(&json).expect("deserialize");

        // Assert
        assert_eq!(store, restored);
        assert!(json.starts_with('['), "store serializes as a list of sections");
    }
}
