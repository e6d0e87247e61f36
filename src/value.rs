//! Document model for TOML data.
//!
//! This module provides the [`TomlElement`] enum, the closed set of values a TOML
//! document tree is built from:
//!
//! - [`TomlElement::Null`]: content is absent
//! - [`TomlElement::Literal`]: a scalar, see [`TomlLiteral`]
//! - [`TomlElement::Array`]: an ordered sequence, see [`TomlArray`]
//! - [`TomlElement::Table`]: an ordered key/value mapping, see [`TomlTable`]
//!
//! Literals keep their [`LiteralKind`] next to their canonical text, so a string
//! that happens to look like a number is still rendered quoted.
//!
//! ## Creating Values
//!
//! ```rust
//! use toml_tree::{TomlElement, TomlLiteral, LiteralKind};
//!
//! let number = TomlElement::from(42);
//! let text = TomlElement::from("42");
//!
//! assert_eq!(number.as_literal().map(TomlLiteral::kind), Some(LiteralKind::Integer));
//! assert_eq!(text.as_literal().map(TomlLiteral::kind), Some(LiteralKind::String));
//! assert_ne!(number, text);
//! ```
//!
//! ### Date-times
//!
//! ```rust
//! use toml_tree::TomlLiteral;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(1979, 5, 27).unwrap();
//! let literal = TomlLiteral::local_date(date);
//! assert_eq!(literal.content(), "1979-05-27");
//! assert_eq!(literal.as_local_date(), Some(date));
//! ```

use crate::{Metadata, TomlTable};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use std::fmt;

pub(crate) const LOCAL_TIME_FORMAT: &str = "%H:%M:%S%.f";
pub(crate) const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A node of the TOML document tree.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{TomlElement, TomlTable};
///
/// let mut table = TomlTable::new();
/// table.insert("name", "Alice");
/// let element = TomlElement::from(table);
///
/// assert!(element.is_table());
/// assert_eq!(element.as_table().and_then(|t| t.get("name")).and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TomlElement {
    #[default]
    Null,
    Literal(TomlLiteral),
    Array(TomlArray),
    Table(TomlTable),
}

/// Subtype of a [`TomlLiteral`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Float,
    String,
    LocalDate,
    LocalTime,
    LocalDateTime,
    OffsetDateTime,
}

impl LiteralKind {
    /// Returns `true` for the four date-time kinds.
    #[inline]
    #[must_use]
    pub const fn is_date_time(self) -> bool {
        matches!(
            self,
            LiteralKind::LocalDate
                | LiteralKind::LocalTime
                | LiteralKind::LocalDateTime
                | LiteralKind::OffsetDateTime
        )
    }
}

/// A scalar value: canonical text plus the kind it was read or built as.
///
/// The content of each kind follows a fixed grammar:
///
/// | Kind | Content |
/// |------|---------|
/// | `Boolean` | `true` or `false` |
/// | `Integer` | base-10 digits with optional leading `-` |
/// | `Float` | decimal with fraction and/or exponent, or `inf`, `-inf`, `nan` |
/// | `String` | the decoded text |
/// | date-times | RFC 3339 text with `T` separator |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TomlLiteral {
    kind: LiteralKind,
    content: String,
}

impl TomlLiteral {
    /// Pairs content with a kind without checking the content grammar.
    ///
    /// The parser only calls this with content it has already validated.
    pub(crate) fn new_unchecked(kind: LiteralKind, content: String) -> Self {
        TomlLiteral { kind, content }
    }

    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::new_unchecked(LiteralKind::Boolean, value.to_string())
    }

    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::new_unchecked(LiteralKind::Integer, value.to_string())
    }

    /// Creates a float literal.
    ///
    /// Whole numbers keep a fractional part so they read back as floats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::TomlLiteral;
    ///
    /// assert_eq!(TomlLiteral::float(1.0).content(), "1.0");
    /// assert_eq!(TomlLiteral::float(f64::NEG_INFINITY).content(), "-inf");
    /// assert_eq!(TomlLiteral::float(f64::NAN).content(), "nan");
    /// ```
    #[must_use]
    pub fn float(value: f64) -> Self {
        let content = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            (if value > 0.0 { "inf" } else { "-inf" }).to_string()
        } else {
            // Debug output always carries a '.' or an exponent
            format!("{:?}", value)
        };
        Self::new_unchecked(LiteralKind::Float, content)
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new_unchecked(LiteralKind::String, value.into())
    }

    #[must_use]
    pub fn local_date(value: NaiveDate) -> Self {
        Self::new_unchecked(LiteralKind::LocalDate, value.format("%Y-%m-%d").to_string())
    }

    #[must_use]
    pub fn local_time(value: NaiveTime) -> Self {
        Self::new_unchecked(
            LiteralKind::LocalTime,
            value.format(LOCAL_TIME_FORMAT).to_string(),
        )
    }

    #[must_use]
    pub fn local_date_time(value: NaiveDateTime) -> Self {
        Self::new_unchecked(
            LiteralKind::LocalDateTime,
            value.format(LOCAL_DATE_TIME_FORMAT).to_string(),
        )
    }

    #[must_use]
    pub fn offset_date_time(value: DateTime<FixedOffset>) -> Self {
        Self::new_unchecked(
            LiteralKind::OffsetDateTime,
            value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// Canonical text of the literal.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match (self.kind, self.content.as_str()) {
            (LiteralKind::Boolean, "true") => Some(true),
            (LiteralKind::Boolean, "false") => Some(false),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            LiteralKind::Integer => self.content.parse().ok(),
            _ => None,
        }
    }

    /// Returns the value of a float literal, or of an integer literal widened to `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::TomlLiteral;
    ///
    /// assert_eq!(TomlLiteral::float(2.5).as_float(), Some(2.5));
    /// assert_eq!(TomlLiteral::integer(2).as_float(), Some(2.0));
    /// assert_eq!(TomlLiteral::string("2.5").as_float(), None);
    /// ```
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self.kind {
            LiteralKind::Float => match self.content.as_str() {
                "inf" => Some(f64::INFINITY),
                "-inf" => Some(f64::NEG_INFINITY),
                "nan" => Some(f64::NAN),
                other => other.parse().ok(),
            },
            LiteralKind::Integer => self.as_integer().map(|i| i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            LiteralKind::String => Some(&self.content),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_local_date(&self) -> Option<NaiveDate> {
        match self.kind {
            LiteralKind::LocalDate => NaiveDate::parse_from_str(&self.content, "%Y-%m-%d").ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_local_time(&self) -> Option<NaiveTime> {
        match self.kind {
            LiteralKind::LocalTime => {
                NaiveTime::parse_from_str(&self.content, LOCAL_TIME_FORMAT).ok()
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn as_local_date_time(&self) -> Option<NaiveDateTime> {
        match self.kind {
            LiteralKind::LocalDateTime => {
                NaiveDateTime::parse_from_str(&self.content, LOCAL_DATE_TIME_FORMAT).ok()
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn as_offset_date_time(&self) -> Option<DateTime<FixedOffset>> {
        match self.kind {
            LiteralKind::OffsetDateTime => DateTime::parse_from_rfc3339(&self.content).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for TomlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// An element together with the metadata the writer consults for it.
///
/// Parsed documents always carry empty metadata.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TomlEntry {
    pub element: TomlElement,
    pub meta: Metadata,
}

impl TomlEntry {
    #[must_use]
    pub fn new(element: TomlElement) -> Self {
        TomlEntry {
            element,
            meta: Metadata::default(),
        }
    }

    #[must_use]
    pub fn with_meta(element: TomlElement, meta: Metadata) -> Self {
        TomlEntry { element, meta }
    }
}

/// An ordered sequence of TOML elements.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{TomlArray, TomlElement};
///
/// let array: TomlArray = vec![TomlElement::from(1), TomlElement::from(2)].into_iter().collect();
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(1).and_then(TomlElement::as_integer), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TomlArray(Vec<TomlEntry>);

impl TomlArray {
    #[must_use]
    pub fn new() -> Self {
        TomlArray(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TomlArray(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, element: impl Into<TomlElement>) {
        self.0.push(TomlEntry::new(element.into()));
    }

    pub fn push_with_meta(&mut self, element: impl Into<TomlElement>, meta: Metadata) {
        self.0.push(TomlEntry::with_meta(element.into(), meta));
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TomlElement> {
        self.0.get(index).map(|entry| &entry.element)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the elements, in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TomlElement> + ExactSizeIterator {
        self.0.iter().map(|entry| &entry.element)
    }

    /// Elements with their metadata.
    #[must_use]
    pub fn entries(&self) -> &[TomlEntry] {
        &self.0
    }
}

impl FromIterator<TomlElement> for TomlArray {
    fn from_iter<T: IntoIterator<Item = TomlElement>>(iter: T) -> Self {
        TomlArray(iter.into_iter().map(TomlEntry::new).collect())
    }
}

impl IntoIterator for TomlArray {
    type Item = TomlElement;
    type IntoIter = std::iter::Map<std::vec::IntoIter<TomlEntry>, fn(TomlEntry) -> TomlElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0
            .into_iter()
            .map(into_element as fn(TomlEntry) -> TomlElement)
    }
}

fn into_element(entry: TomlEntry) -> TomlElement {
    entry.element
}

impl TomlElement {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, TomlElement::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, TomlElement::Literal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, TomlElement::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, TomlElement::Table(_))
    }

    #[inline]
    #[must_use]
    pub fn as_literal(&self) -> Option<&TomlLiteral> {
        match self {
            TomlElement::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&TomlArray> {
        match self {
            TomlElement::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&TomlTable> {
        match self {
            TomlElement::Table(table) => Some(table),
            _ => None,
        }
    }

    /// If the value is a string literal, returns it. Otherwise returns `None`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(TomlLiteral::as_str)
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        self.as_literal().and_then(TomlLiteral::as_integer)
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        self.as_literal().and_then(TomlLiteral::as_float)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_literal().and_then(TomlLiteral::as_bool)
    }

    /// Follows a path of keys through nested tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::parse_document;
    ///
    /// let doc = toml_tree::TomlElement::from(parse_document("[a.b]\nc = 1").unwrap());
    /// assert_eq!(doc.pointer(&["a", "b", "c"]).and_then(|v| v.as_integer()), Some(1));
    /// ```
    #[must_use]
    pub fn pointer(&self, path: &[&str]) -> Option<&TomlElement> {
        path.iter()
            .try_fold(self, |element, key| element.as_table()?.get(key))
    }
}

impl fmt::Display for TomlElement {
    /// Writes the element in flow style, the way it would appear after `key = `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::write_flow(f, self).map_err(|_| fmt::Error)
    }
}

impl From<TomlLiteral> for TomlElement {
    fn from(value: TomlLiteral) -> Self {
        TomlElement::Literal(value)
    }
}

impl From<bool> for TomlElement {
    fn from(value: bool) -> Self {
        TomlElement::Literal(TomlLiteral::boolean(value))
    }
}

impl From<i8> for TomlElement {
    fn from(value: i8) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value as i64))
    }
}

impl From<i16> for TomlElement {
    fn from(value: i16) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value as i64))
    }
}

impl From<i32> for TomlElement {
    fn from(value: i32) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value as i64))
    }
}

impl From<i64> for TomlElement {
    fn from(value: i64) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value))
    }
}

impl From<u8> for TomlElement {
    fn from(value: u8) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value as i64))
    }
}

impl From<u16> for TomlElement {
    fn from(value: u16) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value as i64))
    }
}

impl From<u32> for TomlElement {
    fn from(value: u32) -> Self {
        TomlElement::Literal(TomlLiteral::integer(value as i64))
    }
}

impl From<f32> for TomlElement {
    fn from(value: f32) -> Self {
        TomlElement::Literal(TomlLiteral::float(value as f64))
    }
}

impl From<f64> for TomlElement {
    fn from(value: f64) -> Self {
        TomlElement::Literal(TomlLiteral::float(value))
    }
}

impl From<String> for TomlElement {
    fn from(value: String) -> Self {
        TomlElement::Literal(TomlLiteral::string(value))
    }
}

impl From<&str> for TomlElement {
    fn from(value: &str) -> Self {
        TomlElement::Literal(TomlLiteral::string(value))
    }
}

impl From<NaiveDate> for TomlElement {
    fn from(value: NaiveDate) -> Self {
        TomlElement::Literal(TomlLiteral::local_date(value))
    }
}

impl From<NaiveTime> for TomlElement {
    fn from(value: NaiveTime) -> Self {
        TomlElement::Literal(TomlLiteral::local_time(value))
    }
}

impl From<NaiveDateTime> for TomlElement {
    fn from(value: NaiveDateTime) -> Self {
        TomlElement::Literal(TomlLiteral::local_date_time(value))
    }
}

impl From<DateTime<FixedOffset>> for TomlElement {
    fn from(value: DateTime<FixedOffset>) -> Self {
        TomlElement::Literal(TomlLiteral::offset_date_time(value))
    }
}

impl From<Vec<TomlElement>> for TomlElement {
    fn from(value: Vec<TomlElement>) -> Self {
        TomlElement::Array(value.into_iter().collect())
    }
}

impl From<TomlArray> for TomlElement {
    fn from(value: TomlArray) -> Self {
        TomlElement::Array(value)
    }
}

impl From<TomlTable> for TomlElement {
    fn from(value: TomlTable) -> Self {
        TomlElement::Table(value)
    }
}

impl<T: Into<TomlElement>> From<Option<T>> for TomlElement {
    fn from(value: Option<T>) -> Self {
        value.map_or(TomlElement::Null, Into::into)
    }
}
