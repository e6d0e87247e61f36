//! Serde serialization into the document model.
//!
//! This module provides [`ElementSerializer`], which turns any `T: Serialize`
//! into a [`TomlElement`], and the [`Serialize`] implementation for
//! [`TomlElement`] itself.
//!
//! ## Mapping
//!
//! - integers become integer literals; `u64` values above `i64::MAX` are rejected
//! - `None`, `()` and unit structs become [`TomlElement::Null`]
//! - sequences and tuples become arrays, maps and structs become tables
//! - unit variants become strings; other variants become a single-key table
//!   named after the variant
//!
//! ## Usage
//!
//! ```rust
//! use toml_tree::{to_element, TomlElement};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let element = to_element(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(element.pointer(&["y"]).and_then(TomlElement::as_integer), Some(2));
//! ```

use crate::{Error, LiteralKind, Result, TomlArray, TomlElement, TomlTable};
use serde::{ser, Serialize};

/// Serializer whose output is a [`TomlElement`].
pub struct ElementSerializer;

pub struct SerializeVec {
    array: TomlArray,
}

pub struct SerializeTable {
    table: TomlTable,
    current_key: Option<String>,
}

/// Collects the fields of a tuple or struct variant, then wraps them in a
/// single-key table named after the variant.
pub struct SerializeVariant<T> {
    variant: &'static str,
    inner: T,
}

impl ser::Serializer for ElementSerializer {
    type Ok = TomlElement;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVariant<SerializeVec>;
    type SerializeMap = SerializeTable;
    type SerializeStruct = SerializeTable;
    type SerializeStructVariant = SerializeVariant<SerializeTable>;

    fn serialize_bool(self, v: bool) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<TomlElement> {
        i64::try_from(v)
            .map(TomlElement::from)
            .map_err(|_| Error::unsupported_kind("u64 value above i64::MAX"))
    }

    fn serialize_f32(self, v: f32) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_char(self, v: char) -> Result<TomlElement> {
        Ok(TomlElement::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<TomlElement> {
        Ok(TomlElement::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<TomlElement> {
        Ok(TomlElement::Array(
            v.iter().map(|&b| TomlElement::from(b)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<TomlElement> {
        Ok(TomlElement::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<TomlElement>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<TomlElement> {
        Ok(TomlElement::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<TomlElement> {
        Ok(TomlElement::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<TomlElement> {
        Ok(TomlElement::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<TomlElement>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<TomlElement>
    where
        T: ?Sized + Serialize,
    {
        Ok(single_key_table(variant, to_element(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeVec>> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeVec::new(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeTable> {
        Ok(SerializeTable::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeTable> {
        Ok(SerializeTable::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeTable>> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeTable::new(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            array: TomlArray::with_capacity(capacity),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.array.push(to_element(value)?);
        Ok(())
    }
}

impl SerializeTable {
    fn new(capacity: usize) -> Self {
        SerializeTable {
            table: TomlTable::with_capacity(capacity),
            current_key: None,
        }
    }

    fn field<T: ?Sized + Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        if self.table.contains_key(key) {
            return Err(Error::conflict(&[key.to_string()]));
        }
        self.table.insert(key, to_element(value)?);
        Ok(())
    }
}

fn single_key_table(key: &str, element: TomlElement) -> TomlElement {
    let mut table = TomlTable::with_capacity(1);
    table.insert(key, element);
    TomlElement::Table(table)
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(TomlElement::Array(self.array))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(TomlElement::Array(self.array))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(TomlElement::Array(self.array))
    }
}

impl ser::SerializeTupleVariant for SerializeVariant<SerializeVec> {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.push(value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(single_key_table(
            self.variant,
            TomlElement::Array(self.inner.array),
        ))
    }
}

impl ser::SerializeMap for SerializeTable {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_element(key)? {
            TomlElement::Literal(literal) if literal.kind() == LiteralKind::String => {
                self.current_key = Some(literal.content().to_string());
                Ok(())
            }
            _ => Err(Error::unsupported_kind("table keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.field(&key, value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(TomlElement::Table(self.table))
    }
}

impl ser::SerializeStruct for SerializeTable {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(TomlElement::Table(self.table))
    }
}

impl ser::SerializeStructVariant for SerializeVariant<SerializeTable> {
    type Ok = TomlElement;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.field(key, value)
    }

    fn end(self) -> Result<TomlElement> {
        Ok(single_key_table(
            self.variant,
            TomlElement::Table(self.inner.table),
        ))
    }
}

/// Converts any `T: Serialize` into a [`TomlElement`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedKind`] for values with no TOML form, such as
/// non-string map keys.
pub fn to_element<T>(value: &T) -> Result<TomlElement>
where
    T: ?Sized + Serialize,
{
    value.serialize(ElementSerializer)
}

impl Serialize for TomlElement {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            TomlElement::Null => serializer.serialize_unit(),
            TomlElement::Literal(literal) => match literal.kind() {
                LiteralKind::Boolean => serializer.serialize_bool(literal.as_bool() == Some(true)),
                LiteralKind::Integer => match literal.as_integer() {
                    Some(value) => serializer.serialize_i64(value),
                    None => Err(ser::Error::custom("integer literal out of range")),
                },
                LiteralKind::Float => serializer.serialize_f64(literal.as_float().unwrap_or(f64::NAN)),
                _ => serializer.serialize_str(literal.content()),
            },
            TomlElement::Array(array) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for element in array.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            TomlElement::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (key, element) in table.iter() {
                    map.serialize_entry(key, element)?;
                }
                map.end()
            }
        }
    }
}
