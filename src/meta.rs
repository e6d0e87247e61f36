//! Per-entry rendering hints.
//!
//! [`Metadata`] travels with every table entry and array element. The parser
//! leaves it empty; the writer reads it to pick between the legal TOML layouts
//! for the same value. It is usually filled in by whatever maps application
//! types onto the document tree.
//!
//! ## Examples
//!
//! ```rust
//! use toml_tree::{render_document, IntegerBase, IntegerFormat, Metadata, TomlTable};
//!
//! let mut table = TomlTable::new();
//! table.insert_with_meta(
//!     "mask",
//!     0xff00,
//!     Metadata::new()
//!         .with_comment("permission bits")
//!         .with_integer_format(IntegerFormat::new(IntegerBase::Hex).with_group(2)),
//! );
//!
//! assert_eq!(render_document(&table).unwrap(), "# permission bits\nmask = 0xff_00\n");
//! ```

/// Rendering hints for a single entry.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Metadata {
    /// Comment lines written as `# text` above the entry.
    pub comments: Vec<String>,
    /// Render tables and arrays in flow style (`{ }` / `[ ]`) on one line.
    pub inline: bool,
    /// Render strings with triple-quote delimiters.
    pub multiline: bool,
    /// Render strings with single-quote (raw) delimiters when possible.
    pub literal: bool,
    /// Base and digit grouping for integer literals.
    pub integer: Option<IntegerFormat>,
    /// Render the array one item group per line; the value is the group size.
    pub items_per_line: Option<usize>,
    /// The table is a map: only its first array of tables may be empty.
    pub map: bool,
    /// The array holds tables, even when it is empty.
    pub table_array: bool,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a comment. Text containing line breaks becomes several comment lines.
    #[must_use]
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    #[must_use]
    pub fn with_inline(mut self) -> Self {
        self.inline = true;
        self
    }

    #[must_use]
    pub fn with_multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub fn with_literal(mut self) -> Self {
        self.literal = true;
        self
    }

    #[must_use]
    pub fn with_integer_format(mut self, format: IntegerFormat) -> Self {
        self.integer = Some(format);
        self
    }

    /// Renders the array as a block with `items_per_line` items on each line.
    ///
    /// Zero falls back to [`crate::TomlOptions::items_per_line`].
    #[must_use]
    pub fn with_block_array(mut self, items_per_line: usize) -> Self {
        self.items_per_line = Some(items_per_line);
        self
    }

    #[must_use]
    pub fn with_map(mut self) -> Self {
        self.map = true;
        self
    }

    #[must_use]
    pub fn with_table_array(mut self) -> Self {
        self.table_array = true;
        self
    }

    /// Returns `true` when no hint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Metadata::default()
    }

    /// Comment lines after splitting on line breaks.
    pub(crate) fn comment_lines(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().flat_map(|comment| comment.lines())
    }
}

/// Radix used when writing an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IntegerBase {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hex,
}

impl IntegerBase {
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            IntegerBase::Binary => 2,
            IntegerBase::Octal => 8,
            IntegerBase::Decimal => 10,
            IntegerBase::Hex => 16,
        }
    }

    /// Returns the literal prefix (`0b`, `0o`, `0x`), empty for decimal.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            IntegerBase::Binary => "0b",
            IntegerBase::Octal => "0o",
            IntegerBase::Decimal => "",
            IntegerBase::Hex => "0x",
        }
    }
}

/// Integer formatting: radix, `_` grouping and hex digit case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntegerFormat {
    pub base: IntegerBase,
    /// Digits per `_`-separated group, counted from the right. Zero disables grouping.
    pub group: usize,
    pub uppercase: bool,
}

impl IntegerFormat {
    #[must_use]
    pub fn new(base: IntegerBase) -> Self {
        IntegerFormat {
            base,
            group: 0,
            uppercase: false,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    #[must_use]
    pub fn with_uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines_split() {
        let meta = Metadata::new()
            .with_comment("first\nsecond")
            .with_comment("third");
        let lines: Vec<_> = meta.comment_lines().collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(Metadata::new().is_empty());
        assert!(!Metadata::new().with_literal().is_empty());
    }

    #[test]
    fn test_base_prefix() {
        assert_eq!(IntegerBase::Hex.prefix(), "0x");
        assert_eq!(IntegerBase::Binary.radix(), 2);
    }
}
