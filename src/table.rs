//! Ordered table type for TOML documents.
//!
//! This module provides [`TomlTable`], a wrapper around [`IndexMap`] that keeps
//! keys in declaration order. Order matters for TOML: the writer decides where a
//! table's `[header]` sections start by looking at which entries come last.
//!
//! Each key maps to a [`TomlEntry`], an element together with the [`Metadata`]
//! the writer reads (comments, inline hints, integer formatting).
//!
//! ## Examples
//!
//! ```rust
//! use toml_tree::{Metadata, TomlTable};
//!
//! let mut table = TomlTable::new();
//! table.insert("name", "Alice");
//! table.insert_with_meta("port", 8080, Metadata::new().with_comment("listen port"));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(table.get_entry("port").map(|e| e.meta.comments.len()), Some(1));
//! ```

use crate::{Metadata, TomlElement, TomlEntry};
use indexmap::IndexMap;

/// An ordered map of string keys to TOML elements.
///
/// # Examples
///
/// ```rust
/// use toml_tree::TomlTable;
///
/// let mut table = TomlTable::new();
/// table.insert("second", 2);
/// table.insert("first", 1);
///
/// // Iteration keeps insertion order
/// let keys: Vec<_> = table.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlTable(IndexMap<String, TomlEntry>);

/// Two tables are equal when they hold equal entries in the same order.
impl PartialEq for TomlTable {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl TomlTable {
    /// Creates an empty `TomlTable`.
    #[must_use]
    pub fn new() -> Self {
        TomlTable(IndexMap::new())
    }

    /// Creates an empty `TomlTable` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TomlTable(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair with empty metadata.
    ///
    /// If the table already contained this key, the old element is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::TomlTable;
    ///
    /// let mut table = TomlTable::new();
    /// assert!(table.insert("key", 42).is_none());
    /// assert!(table.insert("key", 43).is_some());
    /// ```
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        element: impl Into<TomlElement>,
    ) -> Option<TomlElement> {
        self.insert_entry(key.into(), TomlEntry::new(element.into()))
    }

    /// Inserts a key-value pair along with its writer metadata.
    pub fn insert_with_meta(
        &mut self,
        key: impl Into<String>,
        element: impl Into<TomlElement>,
        meta: Metadata,
    ) -> Option<TomlElement> {
        self.insert_entry(key.into(), TomlEntry::with_meta(element.into(), meta))
    }

    pub(crate) fn insert_entry(&mut self, key: String, entry: TomlEntry) -> Option<TomlElement> {
        self.0.insert(key, entry).map(|old| old.element)
    }

    /// Returns a reference to the element stored under the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TomlElement> {
        self.0.get(key).map(|entry| &entry.element)
    }

    /// Returns the element and metadata stored under the key.
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<&TomlEntry> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the table, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, TomlEntry> {
        self.0.keys()
    }

    /// Returns an iterator over the elements of the table, in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &TomlElement> + ExactSizeIterator {
        self.0.values().map(|entry| &entry.element)
    }

    /// Returns an iterator over the key-element pairs, in insertion order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (&String, &TomlElement)> + ExactSizeIterator {
        self.0.iter().map(|(key, entry)| (key, &entry.element))
    }

    /// Returns an iterator over the keys with their full entries, in insertion order.
    pub fn entries(&self) -> indexmap::map::Iter<'_, String, TomlEntry> {
        self.0.iter()
    }
}

impl IntoIterator for TomlTable {
    type Item = (String, TomlElement);
    type IntoIter = std::iter::Map<
        indexmap::map::IntoIter<String, TomlEntry>,
        fn((String, TomlEntry)) -> (String, TomlElement),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0
            .into_iter()
            .map(into_pair as fn((String, TomlEntry)) -> (String, TomlElement))
    }
}

fn into_pair((key, entry): (String, TomlEntry)) -> (String, TomlElement) {
    (key, entry.element)
}

impl FromIterator<(String, TomlElement)> for TomlTable {
    fn from_iter<T: IntoIterator<Item = (String, TomlElement)>>(iter: T) -> Self {
        TomlTable(
            iter.into_iter()
                .map(|(key, element)| (key, TomlEntry::new(element)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_follows_order() {
        let mut forward = TomlTable::new();
        forward.insert("x", 1);
        forward.insert("y", 2);

        let mut reverse = TomlTable::new();
        reverse.insert("y", 2);
        reverse.insert("x", 1);

        assert_ne!(forward, reverse);
        assert_eq!(forward, forward.clone());
        assert_ne!(
            crate::parse_document("x = 1\ny = 2").unwrap(),
            crate::parse_document("y = 2\nx = 1").unwrap()
        );
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut table = TomlTable::new();
        table.insert("a", 1);
        table.insert("b", 2);
        assert_eq!(table.insert("a", 3), Some(TomlElement::from(1)));

        let pairs: Vec<_> = table
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_integer()))
            .collect();
        assert_eq!(pairs, vec![("a", Some(3)), ("b", Some(2))]);
    }

    #[test]
    fn test_into_iter_drops_metadata() {
        let mut table = TomlTable::new();
        table.insert_with_meta("a", true, Metadata::new().with_inline());
        let pairs: Vec<_> = table.into_iter().collect();
        assert_eq!(pairs, vec![("a".to_string(), TomlElement::from(true))]);
    }
}
