//! TOML parsing.
//!
//! This module provides [`TomlParser`], which reads TOML text one character at a
//! time and builds a [`TomlTable`].
//!
//! ## Overview
//!
//! - **Streaming input**: any `Iterator<Item = char>` works as a source; the
//!   parser never looks further ahead than the character under the cursor
//! - **Single pass**: key/value lines and headers are applied to a path tree as
//!   soon as they are read, which is also where redefinitions are caught
//! - **Fail fast**: the first error is returned with the line it occurred on
//!
//! ## Usage
//!
//! Most users should use [`crate::parse_document`]:
//!
//! ```rust
//! use toml_tree::TomlParser;
//!
//! let table = TomlParser::from_str("[server]\nport = 8080").parse().unwrap();
//! let server = table.get("server").and_then(|v| v.as_table()).unwrap();
//! assert_eq!(server.get("port").and_then(|v| v.as_integer()), Some(8080));
//! ```
//!
//! The grammar pieces live in submodules, each adding methods to the parser:
//! keys in `key`, strings in `string`, numbers and date-times in `number`, and
//! the remaining values in `value`.

mod key;
mod number;
mod string;
mod value;

pub(crate) use key::is_bare_key_char;

use crate::cursor::Cursor;
use crate::tree::PathTree;
use crate::{Result, TomlTable};
use log::trace;
use std::str::Chars;

/// The TOML parser.
///
/// A parser is single-use: [`TomlParser::parse`] consumes it.
pub struct TomlParser<S> {
    cursor: Cursor<S>,
}

impl<'a> TomlParser<Chars<'a>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        TomlParser::new(input.chars())
    }
}

impl<S: Iterator<Item = char>> TomlParser<S> {
    /// Creates a parser over a character source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::TomlParser;
    ///
    /// let source = "a = 1\nb = 2".chars();
    /// let table = TomlParser::new(source).parse().unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn new(source: S) -> Self {
        TomlParser {
            cursor: Cursor::new(source),
        }
    }

    /// Reads the whole document.
    ///
    /// # Errors
    ///
    /// Returns the first syntax or structure error encountered.
    pub fn parse(mut self) -> Result<TomlTable> {
        let mut tree = PathTree::new();
        loop {
            self.cursor.skip_trivia()?;
            match self.cursor.current() {
                None => break,
                Some('[') => self.parse_header(&mut tree)?,
                Some(ch) if key::is_key_start(ch) => {
                    let (path, element) = self.parse_key_value()?;
                    tree.insert_value(&path, element)?;
                }
                Some(_) => return Err(self.cursor.unexpected()),
            }
            self.end_of_line()?;
        }
        trace!("Parsed document ending at line {}", self.cursor.line());
        Ok(tree.materialize())
    }

    /// Only whitespace and a comment may follow an entry before the line ends.
    fn end_of_line(&mut self) -> Result<()> {
        self.cursor.skip_whitespace();
        if self.cursor.is('#') {
            self.cursor.skip_comment()?;
        }
        if self.cursor.at_end() || self.cursor.eat_newline()? {
            Ok(())
        } else {
            Err(self.cursor.unexpected())
        }
    }

    fn parse_header(&mut self, tree: &mut PathTree) -> Result<()> {
        self.cursor.expect('[')?;
        let array = self.cursor.is('[');
        if array {
            self.cursor.advance();
        }

        let path = self.parse_path()?;
        self.cursor.expect(']')?;
        if array {
            self.cursor.expect(']')?;
            tree.open_array_element(&path)
        } else {
            tree.open_table(&path)
        }
    }
}
