//! TOML rendering.
//!
//! This module provides [`TomlWriter`], the layout engine that turns a
//! [`TomlTable`] into TOML text.
//!
//! ## Overview
//!
//! TOML allows many spellings of the same tree. The writer picks one:
//!
//! - **Structuring boundary**: within each table, the trailing run of
//!   table-like entries (tables and arrays of tables) becomes `[header]` and
//!   `[[header]]` sections; everything before it is written as `key = value`
//!   lines, with nested tables flattened to dotted keys
//! - **Implied headers**: a section holding only sub-sections and no comment
//!   omits its own header
//! - **Flow values**: arrays as `[ a, b ]` and inline tables as `{ k = v }`,
//!   unless the entry asks for a block array
//! - **Hints**: comments, string styles and integer formats come from each
//!   entry's [`Metadata`]
//!
//! ## Usage
//!
//! Most users should use [`crate::render_document`]:
//!
//! ```rust
//! use toml_tree::{TomlOptions, TomlTable, TomlWriter};
//!
//! let mut server = TomlTable::new();
//! server.insert("port", 8080);
//!
//! let mut table = TomlTable::new();
//! table.insert("name", "demo");
//! table.insert("server", server);
//!
//! let toml = TomlWriter::new(String::new(), TomlOptions::new())
//!     .write_document(&table)
//!     .unwrap();
//! assert_eq!(toml, "name = \"demo\"\n\n[server]\nport = 8080\n");
//! ```

use crate::parser::is_bare_key_char;
use crate::{
    Error, IntegerBase, IntegerFormat, LiteralKind, Metadata, Result, TomlArray, TomlElement,
    TomlEntry, TomlLiteral, TomlOptions, TomlTable,
};
use log::debug;
use std::fmt::Write;

/// The TOML writer.
///
/// Renders into any [`std::fmt::Write`] sink. A writer is single-use:
/// [`TomlWriter::write_document`] consumes it and hands the sink back.
pub struct TomlWriter<W> {
    sink: W,
    options: TomlOptions,
    /// Whether anything has been written yet; headers after the first output
    /// are preceded by a blank line.
    started: bool,
}

type Entries<'t> = Vec<(&'t String, &'t TomlEntry)>;

impl<W: Write> TomlWriter<W> {
    pub fn new(sink: W, options: TomlOptions) -> Self {
        TomlWriter {
            sink,
            options,
            started: false,
        }
    }

    /// Renders `table` as a whole document and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns the first layout error, or [`Error::Io`] if the sink fails.
    pub fn write_document(mut self, table: &TomlTable) -> Result<W> {
        let mut path = Vec::new();
        self.write_table_body(table, &Metadata::default(), &mut path)?;
        Ok(self.sink)
    }

    /// Entries that produce output under the current options.
    fn visible<'t>(&self, table: &'t TomlTable) -> Entries<'t> {
        table
            .entries()
            .filter(|(_, entry)| self.options.explicit_nulls || !entry.element.is_null())
            .collect()
    }

    fn write_table_body(
        &mut self,
        table: &TomlTable,
        meta: &Metadata,
        path: &mut Vec<String>,
    ) -> Result<()> {
        check_map(table, meta)?;
        let entries = self.visible(table);
        let boundary = structuring_boundary(&entries);
        debug!(
            "Table '{}': {} key/value entries, {} sections",
            path.join("."),
            boundary,
            entries.len() - boundary
        );

        let mut keys = Vec::new();
        for (key, entry) in &entries[..boundary] {
            keys.push((*key).clone());
            self.write_key_value(entry, &mut keys, path)?;
            keys.pop();
        }

        for (key, entry) in &entries[boundary..] {
            path.push((*key).clone());
            match &entry.element {
                TomlElement::Table(child) => self.write_section(child, &entry.meta, path)?,
                TomlElement::Array(array) => self.write_array_of_tables(array, &entry.meta, path)?,
                _ => {}
            }
            path.pop();
        }
        Ok(())
    }

    /// Writes an entry before the boundary, flattening non-empty tables into dotted keys.
    fn write_key_value(
        &mut self,
        entry: &TomlEntry,
        keys: &mut Vec<String>,
        path: &[String],
    ) -> Result<()> {
        match &entry.element {
            TomlElement::Table(table) if !entry.meta.inline => {
                check_map(table, &entry.meta)?;
                let children = self.visible(table);
                if !children.is_empty() {
                    self.write_comments(&entry.meta, "")?;
                    for (key, child) in children {
                        keys.push(key.clone());
                        self.write_key_value(child, keys, path)?;
                        keys.pop();
                    }
                    return Ok(());
                }
            }
            TomlElement::Array(array) => {
                if holds_null_table(array, &entry.meta) {
                    let full: Vec<String> = path.iter().chain(keys.iter()).cloned().collect();
                    return Err(Error::null_in_array_of_table(&full));
                }
            }
            _ => {}
        }

        self.write_comments(&entry.meta, "")?;
        self.write_key(keys)?;
        self.sink.write_str(" = ")?;
        self.write_value(&entry.element, &entry.meta)?;
        self.sink.write_char('\n')?;
        self.started = true;
        Ok(())
    }

    fn write_section(&mut self, table: &TomlTable, meta: &Metadata, path: &mut Vec<String>) -> Result<()> {
        let implied = meta.comments.is_empty() && {
            let entries = self.visible(table);
            !entries.is_empty() && structuring_boundary(&entries) == 0
        };
        if !implied {
            self.write_header(path, false, &[meta])?;
        }
        self.write_table_body(table, meta, path)
    }

    fn write_array_of_tables(
        &mut self,
        array: &TomlArray,
        meta: &Metadata,
        path: &mut Vec<String>,
    ) -> Result<()> {
        for (index, element) in array.entries().iter().enumerate() {
            if let TomlElement::Table(table) = &element.element {
                if index == 0 {
                    self.write_header(path, true, &[meta, &element.meta])?;
                } else {
                    self.write_header(path, true, &[&element.meta])?;
                }
                self.write_table_body(table, &element.meta, path)?;
            }
        }
        Ok(())
    }

    fn write_header(&mut self, path: &[String], array: bool, metas: &[&Metadata]) -> Result<()> {
        if self.started {
            self.sink.write_char('\n')?;
        }
        for meta in metas {
            self.write_comments(meta, "")?;
        }
        let (open, close) = if array { ("[[", "]]\n") } else { ("[", "]\n") };
        self.sink.write_str(open)?;
        self.write_key(path)?;
        self.sink.write_str(close)?;
        self.started = true;
        Ok(())
    }

    fn write_comments(&mut self, meta: &Metadata, indent: &str) -> Result<()> {
        for line in meta.comment_lines() {
            if line.chars().any(|ch| ch != '\t' && is_forbidden_control(ch)) {
                return Err(Error::unsupported_kind(
                    "comments cannot contain control characters",
                ));
            }
            self.sink.write_str(indent)?;
            if line.is_empty() {
                self.sink.write_str("#\n")?;
            } else {
                writeln!(self.sink, "# {}", line)?;
            }
            self.started = true;
        }
        Ok(())
    }

    fn write_key(&mut self, segments: &[String]) -> Result<()> {
        for (index, segment) in segments.iter().enumerate() {
            if index > 0 {
                self.sink.write_char('.')?;
            }
            if !segment.is_empty() && segment.chars().all(is_bare_key_char) {
                self.sink.write_str(segment)?;
            } else {
                self.write_basic_string(segment)?;
            }
        }
        Ok(())
    }

    /// Writes the right-hand side of `key = value`.
    fn write_value(&mut self, element: &TomlElement, meta: &Metadata) -> Result<()> {
        if let TomlElement::Array(array) = element {
            let block = meta
                .items_per_line
                .or_else(|| self.options.block_arrays.then_some(0));
            if let Some(items_per_line) = block.filter(|_| !meta.inline && !array.is_empty()) {
                return self.write_block_array(array, items_per_line);
            }
        }
        self.write_flow_value(element, meta)
    }

    fn write_block_array(&mut self, array: &TomlArray, items_per_line: usize) -> Result<()> {
        let per_line = match items_per_line {
            0 => self.options.items_per_line,
            n => n,
        }
        .max(1);
        let indent = self.options.indentation.as_str();

        self.sink.write_str("[\n")?;
        for group in array.entries().chunks(per_line) {
            for entry in group {
                self.write_comments(&entry.meta, indent)?;
            }
            self.sink.write_str(indent)?;
            for (index, entry) in group.iter().enumerate() {
                if index > 0 {
                    self.sink.write_char(' ')?;
                }
                self.write_flow_value(&entry.element, &entry.meta)?;
                self.sink.write_char(',')?;
            }
            self.sink.write_char('\n')?;
        }
        self.sink.write_char(']')?;
        Ok(())
    }

    fn write_flow_value(&mut self, element: &TomlElement, meta: &Metadata) -> Result<()> {
        match element {
            TomlElement::Null => self.sink.write_str("null")?,
            TomlElement::Literal(literal) => self.write_literal(literal, meta)?,
            TomlElement::Array(array) if array.is_empty() => self.sink.write_str("[ ]")?,
            TomlElement::Array(array) => {
                self.sink.write_str("[ ")?;
                for (index, entry) in array.entries().iter().enumerate() {
                    if index > 0 {
                        self.sink.write_str(", ")?;
                    }
                    self.write_flow_value(&entry.element, &entry.meta)?;
                }
                self.sink.write_str(" ]")?;
            }
            TomlElement::Table(table) => {
                check_map(table, meta)?;
                let entries = self.visible(table);
                if entries.is_empty() {
                    self.sink.write_str("{ }")?;
                    return Ok(());
                }
                self.sink.write_str("{ ")?;
                for (index, (key, entry)) in entries.into_iter().enumerate() {
                    if index > 0 {
                        self.sink.write_str(", ")?;
                    }
                    self.write_key(std::slice::from_ref(key))?;
                    self.sink.write_str(" = ")?;
                    self.write_flow_value(&entry.element, &entry.meta)?;
                }
                self.sink.write_str(" }")?;
            }
        }
        Ok(())
    }

    fn write_literal(&mut self, literal: &TomlLiteral, meta: &Metadata) -> Result<()> {
        match (literal.kind(), meta.integer) {
            (LiteralKind::String, _) => self.write_string(literal.content(), meta),
            (LiteralKind::Integer, Some(format)) => {
                let text = format_integer(literal, format)?;
                self.sink.write_str(&text)?;
                Ok(())
            }
            _ => {
                self.sink.write_str(literal.content())?;
                Ok(())
            }
        }
    }

    /// Picks a string form from the hints, falling back to basic strings when
    /// the requested form cannot hold the text.
    fn write_string(&mut self, text: &str, meta: &Metadata) -> Result<()> {
        if meta.literal {
            if meta.multiline && fits_multiline_literal(text) {
                write!(self.sink, "'''\n{}'''", text)?;
                return Ok(());
            }
            if fits_literal(text) {
                write!(self.sink, "'{}'", text)?;
                return Ok(());
            }
        }
        if meta.multiline {
            self.sink.write_str("\"\"\"\n")?;
            for ch in text.chars() {
                self.write_escaped(ch, true)?;
            }
            self.sink.write_str("\"\"\"")?;
            return Ok(());
        }
        self.write_basic_string(text)
    }

    fn write_basic_string(&mut self, text: &str) -> Result<()> {
        self.sink.write_char('"')?;
        for ch in text.chars() {
            self.write_escaped(ch, false)?;
        }
        self.sink.write_char('"')?;
        Ok(())
    }

    #[inline]
    fn write_escaped(&mut self, ch: char, multiline: bool) -> Result<()> {
        match ch {
            '"' => self.sink.write_str("\\\"")?,
            '\\' => self.sink.write_str("\\\\")?,
            '\n' if multiline => self.sink.write_char('\n')?,
            '\n' => self.sink.write_str("\\n")?,
            '\t' => self.sink.write_str("\\t")?,
            '\r' => self.sink.write_str("\\r")?,
            '\u{8}' => self.sink.write_str("\\b")?,
            '\u{c}' => self.sink.write_str("\\f")?,
            c if is_forbidden_control(c) => write!(self.sink, "\\u{:04X}", c as u32)?,
            c => self.sink.write_char(c)?,
        }
        Ok(())
    }
}

/// Writes a single element in flow style, as it would appear after `key = `.
pub(crate) fn write_flow<W: Write>(sink: &mut W, element: &TomlElement) -> Result<()> {
    TomlWriter::new(sink, TomlOptions::default()).write_flow_value(element, &Metadata::default())
}

#[inline]
fn is_forbidden_control(ch: char) -> bool {
    ch <= '\u{1f}' || ch == '\u{7f}'
}

fn fits_literal(text: &str) -> bool {
    !text
        .chars()
        .any(|ch| ch == '\'' || (is_forbidden_control(ch) && ch != '\t'))
}

fn fits_multiline_literal(text: &str) -> bool {
    !text.contains("'''")
        && !text
            .chars()
            .any(|ch| is_forbidden_control(ch) && ch != '\t' && ch != '\n')
}

/// An entry that renders as a section rather than `key = value`.
fn is_table_like(entry: &TomlEntry) -> bool {
    if entry.meta.inline || entry.meta.items_per_line.is_some() {
        return false;
    }
    match &entry.element {
        TomlElement::Table(_) => true,
        TomlElement::Array(array) => {
            !array.is_empty()
                && array
                    .entries()
                    .iter()
                    .all(|element| element.element.is_table() && !element.meta.inline)
        }
        _ => false,
    }
}

/// Index just past the last entry that must be written as `key = value`.
fn structuring_boundary(entries: &[(&String, &TomlEntry)]) -> usize {
    entries
        .iter()
        .rposition(|(_, entry)| !is_table_like(entry))
        .map_or(0, |index| index + 1)
}

/// Tables mixed with nulls cannot be written as `[[header]]` sections or
/// read back as an array of tables.
fn holds_null_table(array: &TomlArray, meta: &Metadata) -> bool {
    if meta.inline || meta.items_per_line.is_some() {
        return false;
    }
    let mut tables = false;
    let mut nulls = false;
    for element in array.iter() {
        match element {
            TomlElement::Table(_) => tables = true,
            TomlElement::Null => nulls = true,
            _ => return false,
        }
    }
    tables && nulls
}

/// In a map only the first array-of-tables value may be empty.
fn check_map(table: &TomlTable, meta: &Metadata) -> Result<()> {
    if !meta.map {
        return Ok(());
    }
    let mut seen = false;
    for (_, entry) in table.entries() {
        let TomlElement::Array(array) = &entry.element else {
            continue;
        };
        let shaped = entry.meta.table_array
            || (!array.is_empty() && array.iter().all(TomlElement::is_table));
        if !shaped {
            continue;
        }
        if seen && array.is_empty() {
            return Err(Error::EmptyArrayOfTableInMap);
        }
        seen = true;
    }
    Ok(())
}

fn format_integer(literal: &TomlLiteral, format: IntegerFormat) -> Result<String> {
    let value = literal
        .as_integer()
        .ok_or_else(|| Error::unsupported_kind("integer literal out of range"))?;
    if value < 0 && format.base != IntegerBase::Decimal {
        return Err(Error::unsupported_kind(
            "negative integer in a non-decimal base",
        ));
    }

    let magnitude = value.unsigned_abs();
    let digits = match (format.base, format.uppercase) {
        (IntegerBase::Hex, true) => format!("{:X}", magnitude),
        (IntegerBase::Hex, false) => format!("{:x}", magnitude),
        (IntegerBase::Octal, _) => format!("{:o}", magnitude),
        (IntegerBase::Binary, _) => format!("{:b}", magnitude),
        (IntegerBase::Decimal, _) => magnitude.to_string(),
    };

    let mut text = String::with_capacity(digits.len() * 2 + 3);
    if value < 0 {
        text.push('-');
    }
    text.push_str(format.base.prefix());
    let len = digits.len();
    for (index, digit) in digits.chars().enumerate() {
        if format.group > 0 && index > 0 && (len - index) % format.group == 0 {
            text.push('_');
        }
        text.push(digit);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_document, Indentation};

    fn render(table: &TomlTable) -> Result<String> {
        TomlWriter::new(String::new(), TomlOptions::new()).write_document(table)
    }

    fn table(pairs: Vec<(&str, TomlElement)>) -> TomlTable {
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn test_boundary_flattens_leading_tables() {
        let doc = table(vec![
            ("a", 1.into()),
            ("b", table(vec![("c", 1.into())]).into()),
            ("d", 2.into()),
        ]);
        assert_eq!(render(&doc).unwrap(), "a = 1\nb.c = 1\nd = 2\n");
    }

    #[test]
    fn test_trailing_tables_become_sections() {
        let doc = table(vec![
            ("title", "x".into()),
            ("owner", table(vec![("name", "Tom".into())]).into()),
        ]);
        assert_eq!(
            render(&doc).unwrap(),
            "title = \"x\"\n\n[owner]\nname = \"Tom\"\n"
        );
    }

    #[test]
    fn test_implied_header_is_omitted() {
        let inner = table(vec![("c", 1.into())]);
        let doc = table(vec![("a", table(vec![("b", inner.into())]).into())]);
        assert_eq!(render(&doc).unwrap(), "[a.b]\nc = 1\n");
    }

    #[test]
    fn test_empty_tables() {
        let doc = table(vec![("a", TomlTable::new().into())]);
        assert_eq!(render(&doc).unwrap(), "[a]\n");

        let doc = table(vec![("a", TomlTable::new().into()), ("b", 1.into())]);
        assert_eq!(render(&doc).unwrap(), "a = { }\nb = 1\n");
    }

    #[test]
    fn test_array_of_tables() {
        let apple = table(vec![
            ("name", "apple".into()),
            ("physical", table(vec![("color", "red".into())]).into()),
        ]);
        let banana = table(vec![("name", "banana".into())]);
        let doc = table(vec![("fruit", vec![apple.into(), banana.into()].into())]);
        assert_eq!(
            render(&doc).unwrap(),
            "[[fruit]]\nname = \"apple\"\n\n[fruit.physical]\ncolor = \"red\"\n\n[[fruit]]\nname = \"banana\"\n"
        );
    }

    #[test]
    fn test_unstructured_array_of_tables_is_inline() {
        let point = table(vec![("x", 1.into())]);
        let doc = table(vec![("points", vec![point.into()].into()), ("n", 1.into())]);
        assert_eq!(render(&doc).unwrap(), "points = [ { x = 1 } ]\nn = 1\n");
    }

    #[test]
    fn test_null_in_array_of_tables() {
        let point = table(vec![("x", 1.into())]);
        let doc = table(vec![(
            "points",
            vec![point.clone().into(), TomlElement::Null].into(),
        )]);
        assert_eq!(
            render(&doc),
            Err(Error::NullInArrayOfTable {
                path: "points".to_string()
            })
        );

        let mut doc = TomlTable::new();
        doc.insert_with_meta(
            "points",
            vec![point.into(), TomlElement::Null],
            Metadata::new().with_inline(),
        );
        assert_eq!(render(&doc).unwrap(), "points = [ { x = 1 }, null ]\n");
    }

    #[test]
    fn test_empty_array_of_tables_in_map() {
        let item = table(vec![("id", 1.into())]);
        let mut map = TomlTable::new();
        map.insert("first", vec![item.into()]);
        map.insert_with_meta("second", TomlArray::new(), Metadata::new().with_table_array());
        let mut doc = TomlTable::new();
        doc.insert_with_meta("m", map, Metadata::new().with_map());
        assert_eq!(render(&doc), Err(Error::EmptyArrayOfTableInMap));

        let item = table(vec![("id", 1.into())]);
        let mut map = TomlTable::new();
        map.insert_with_meta("first", TomlArray::new(), Metadata::new().with_table_array());
        map.insert("second", vec![item.into()]);
        let mut doc = TomlTable::new();
        doc.insert_with_meta("m", map, Metadata::new().with_map());
        assert!(render(&doc).is_ok());
    }

    #[test]
    fn test_explicit_nulls() {
        let doc = table(vec![("a", TomlElement::Null), ("b", 1.into())]);
        assert_eq!(render(&doc).unwrap(), "a = null\nb = 1\n");

        let compact = TomlWriter::new(String::new(), TomlOptions::compact())
            .write_document(&doc)
            .unwrap();
        assert_eq!(compact, "b = 1\n");
    }

    #[test]
    fn test_string_styles() {
        let mut doc = TomlTable::new();
        doc.insert_with_meta("path", "C:\\dir", Metadata::new().with_literal());
        doc.insert_with_meta("quote", "it's", Metadata::new().with_literal());
        doc.insert_with_meta("poem", "one\ntwo", Metadata::new().with_multiline());
        doc.insert("plain", "a\tb\"c");
        assert_eq!(
            render(&doc).unwrap(),
            "path = 'C:\\dir'\nquote = \"it's\"\npoem = \"\"\"\none\ntwo\"\"\"\nplain = \"a\\tb\\\"c\"\n"
        );
    }

    #[test]
    fn test_multiline_literal_round_trip() {
        let mut doc = TomlTable::new();
        doc.insert_with_meta(
            "s",
            "line \\n one\nline two",
            Metadata::new().with_literal().with_multiline(),
        );
        let text = render(&doc).unwrap();
        assert_eq!(text, "s = '''\nline \\n one\nline two'''\n");
        let back = parse_document(&text).unwrap();
        assert_eq!(back.get("s").and_then(TomlElement::as_str), Some("line \\n one\nline two"));
    }

    #[test]
    fn test_quoted_keys() {
        let doc = table(vec![("a b", 1.into()), ("", 2.into()), ("ok-key_1", 3.into())]);
        assert_eq!(
            render(&doc).unwrap(),
            "\"a b\" = 1\n\"\" = 2\nok-key_1 = 3\n"
        );
    }

    #[test]
    fn test_integer_formats() {
        let mut doc = TomlTable::new();
        doc.insert_with_meta(
            "bits",
            170,
            Metadata::new().with_integer_format(IntegerFormat::new(IntegerBase::Binary).with_group(4)),
        );
        doc.insert_with_meta(
            "mask",
            255,
            Metadata::new().with_integer_format(IntegerFormat::new(IntegerBase::Hex).with_uppercase()),
        );
        doc.insert_with_meta(
            "mode",
            493,
            Metadata::new().with_integer_format(IntegerFormat::new(IntegerBase::Octal)),
        );
        doc.insert_with_meta(
            "big",
            -1234567,
            Metadata::new().with_integer_format(IntegerFormat::new(IntegerBase::Decimal).with_group(3)),
        );
        assert_eq!(
            render(&doc).unwrap(),
            "bits = 0b1010_1010\nmask = 0xFF\nmode = 0o755\nbig = -1_234_567\n"
        );

        let mut doc = TomlTable::new();
        doc.insert_with_meta(
            "neg",
            -1,
            Metadata::new().with_integer_format(IntegerFormat::new(IntegerBase::Hex)),
        );
        assert!(matches!(render(&doc), Err(Error::UnsupportedKind(_))));
    }

    #[test]
    fn test_block_arrays() {
        let mut doc = TomlTable::new();
        doc.insert_with_meta(
            "a",
            vec![1.into(), 2.into(), 3.into()],
            Metadata::new().with_block_array(2),
        );
        assert_eq!(render(&doc).unwrap(), "a = [\n    1, 2,\n    3,\n]\n");

        let mut items = TomlArray::new();
        items.push_with_meta(1, Metadata::new().with_comment("first"));
        items.push(2);
        let mut doc = TomlTable::new();
        doc.insert("a", items);
        let options = TomlOptions::pretty().with_indentation(Indentation::Tab);
        let text = TomlWriter::new(String::new(), options)
            .write_document(&doc)
            .unwrap();
        assert_eq!(text, "a = [\n\t# first\n\t1,\n\t2,\n]\n");
    }

    #[test]
    fn test_comments() {
        let mut doc = TomlTable::new();
        doc.insert_with_meta("a", 1, Metadata::new().with_comment("first"));
        doc.insert_with_meta(
            "t",
            table(vec![("x", 1.into())]),
            Metadata::new().with_comment("section\nof things"),
        );
        assert_eq!(
            render(&doc).unwrap(),
            "# first\na = 1\n\n# section\n# of things\n[t]\nx = 1\n"
        );
    }

    #[test]
    fn test_comment_control_characters() {
        let mut doc = TomlTable::new();
        doc.insert_with_meta("a", 1, Metadata::new().with_comment("bad\u{1}x"));
        assert!(matches!(render(&doc), Err(Error::UnsupportedKind(_))));

        let mut doc = TomlTable::new();
        doc.insert_with_meta("a", 1, Metadata::new().with_comment("a\rb"));
        assert!(matches!(render(&doc), Err(Error::UnsupportedKind(_))));

        let mut doc = TomlTable::new();
        doc.insert_with_meta("a", 1, Metadata::new().with_comment("first\r\nsecond\twith tab"));
        let rendered = render(&doc).unwrap();
        assert_eq!(rendered, "# first\n# second\twith tab\na = 1\n");
        assert_eq!(parse_document(&rendered).unwrap(), table(vec![("a", 1.into())]));
    }

    #[test]
    fn test_flow_display() {
        let element: TomlElement = vec![
            1.into(),
            "a".into(),
            table(vec![("x", 1.into())]).into(),
            TomlArray::new().into(),
        ]
        .into();
        assert_eq!(element.to_string(), "[ 1, \"a\", { x = 1 }, [ ] ]");
    }

    #[test]
    fn test_control_characters_escaped() {
        let doc = table(vec![("s", "\u{1}\u{7f}".into())]);
        assert_eq!(render(&doc).unwrap(), "s = \"\\u0001\\u007F\"\n");
    }
}
