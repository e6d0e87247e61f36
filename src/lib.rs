//! # toml_tree
//!
//! A TOML engine built around an order-preserving document tree.
//!
//! TOML text is parsed into a [`TomlTable`], and any [`TomlTable`] can be
//! rendered back into TOML text. The writer chooses between the legal layouts
//! for the same structure (dotted keys, `[section]` headers, `[[array]]`
//! headers, inline forms) and keeps TOML's ordering rule: every plain
//! key/value pair of a table is written before the table's nested headers.
//!
//! ## Key Features
//!
//! - **Typed literals**: every scalar keeps its TOML kind, so a string that
//!   looks like a number stays quoted and date-times keep their precision
//! - **Order preserving**: tables remember declaration order in both directions
//! - **Layout hints**: per-entry [`Metadata`] carries comments, integer bases,
//!   string styles and array layouts for the writer
//! - **Serde Compatible**: any `T: Serialize` / `T: Deserialize` maps onto the
//!   tree through [`to_element`] and [`from_element`]
//!
//! ## Quick Start
//!
//! ```rust
//! use toml_tree::{parse_document, render_document};
//!
//! let table = parse_document("[server]\nhost = \"localhost\"\nport = 8080\n").unwrap();
//! let text = render_document(&table).unwrap();
//! assert_eq!(text, "[server]\nhost = \"localhost\"\nport = 8080\n");
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toml_tree::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Package {
//!     name: String,
//!     version: String,
//!     authors: Vec<String>,
//! }
//!
//! let package = Package {
//!     name: "demo".to_string(),
//!     version: "0.1.0".to_string(),
//!     authors: vec!["Alice".to_string()],
//! };
//!
//! let text = to_string(&package).unwrap();
//! assert_eq!(text, "name = \"demo\"\nversion = \"0.1.0\"\nauthors = [ \"Alice\" ]\n");
//!
//! let back: Package = from_str(&text).unwrap();
//! assert_eq!(package, back);
//! ```
//!
//! ### Building Documents with the toml! Macro
//!
//! ```rust
//! use toml_tree::{render_document, toml};
//!
//! let table = toml!({
//!     "title": "example",
//!     "owner": { "name": "Tom" },
//! });
//!
//! assert_eq!(
//!     render_document(&table).unwrap(),
//!     "title = \"example\"\n\n[owner]\nname = \"Tom\"\n"
//! );
//! ```

mod cursor;
pub mod de;
pub mod error;
pub mod macros;
pub mod meta;
pub mod options;
pub mod parser;
pub mod ser;
pub mod table;
mod tree;
pub mod value;
pub mod writer;

pub use de::from_element;
pub use error::{Error, Result};
pub use meta::{IntegerBase, IntegerFormat, Metadata};
pub use options::{Indentation, TomlOptions};
pub use parser::TomlParser;
pub use ser::{to_element, ElementSerializer};
pub use table::TomlTable;
pub use value::{LiteralKind, TomlArray, TomlElement, TomlEntry, TomlLiteral};
pub use writer::TomlWriter;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses a TOML document into a table.
///
/// # Examples
///
/// ```rust
/// use toml_tree::parse_document;
///
/// let table = parse_document("[[fruit]]\nname = \"apple\"\n[[fruit]]\nname = \"banana\"").unwrap();
/// let fruit = table.get("fruit").and_then(|v| v.as_array()).unwrap();
/// assert_eq!(fruit.len(), 2);
/// ```
///
/// # Errors
///
/// Returns the first syntax error, with its line, or the first redefinition
/// as [`Error::ConflictEntry`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_document(input: &str) -> Result<TomlTable> {
    TomlParser::from_str(input).parse()
}

/// Renders a table as a TOML document with default options.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{render_document, TomlTable};
///
/// let mut table = TomlTable::new();
/// table.insert("answer", 42);
/// assert_eq!(render_document(&table).unwrap(), "answer = 42\n");
/// ```
///
/// # Errors
///
/// Returns an error when the table has no valid TOML rendering, such as a null
/// inside an array of tables.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_document(table: &TomlTable) -> Result<String> {
    render_with_options(table, TomlOptions::default())
}

/// Renders a table as a TOML document with custom options.
///
/// # Errors
///
/// Returns an error when the table has no valid TOML rendering.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_with_options(table: &TomlTable, options: TomlOptions) -> Result<String> {
    TomlWriter::new(String::new(), options).write_document(table)
}

/// Serialize any `T: Serialize` to a TOML string.
///
/// The value must serialize to a table (a struct or a map).
///
/// # Examples
///
/// ```rust
/// use toml_tree::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedKind`] when the value is not a table or holds
/// something TOML cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, TomlOptions::default())
}

/// Serialize any `T: Serialize` to a TOML string with custom options.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{to_string_with_options, TomlOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Config { ports: Vec<u16> }
///
/// let options = TomlOptions::new().with_block_arrays(true).with_items_per_line(2);
/// let text = to_string_with_options(&Config { ports: vec![80, 443, 8080] }, options).unwrap();
/// assert_eq!(text, "ports = [\n    80, 443,\n    8080,\n]\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: TomlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_element(value)? {
        TomlElement::Table(table) => render_with_options(&table, options),
        _ => Err(Error::unsupported_kind(
            "only tables can be written as a TOML document",
        )),
    }
}

/// Serialize any `T: Serialize` to a writer in TOML format.
///
/// # Examples
///
/// ```rust
/// use toml_tree::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, TomlOptions::default())
}

/// Serialize any `T: Serialize` to a writer in TOML format with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: TomlOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from TOML text.
///
/// # Examples
///
/// ```rust
/// use toml_tree::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOML or cannot be deserialized to
/// type `T`. Syntax errors carry the line they occurred on.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_element(TomlElement::Table(parse_document(s)?))
}

/// Deserialize an instance of type `T` from an I/O stream of TOML.
///
/// # Examples
///
/// ```rust
/// use toml_tree::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x = 1\ny = 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// TOML, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of TOML text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOML, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
