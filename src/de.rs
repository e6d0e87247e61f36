//! Serde deserialization out of the document model.
//!
//! [`TomlElement`] implements [`serde::Deserializer`] directly, so any
//! `T: DeserializeOwned` can be read from a parsed document with
//! [`from_element`] (or [`crate::from_str`], which parses first).
//!
//! Date-time literals are handed to visitors as strings, which is the form
//! chrono's own `Deserialize` implementations accept.
//!
//! ```rust
//! use serde::Deserialize;
//! use toml_tree::from_str;
//!
//! #[derive(Deserialize)]
//! struct Server { host: String, port: u16 }
//!
//! let server: Server = from_str("host = \"localhost\"\nport = 8080").unwrap();
//! assert_eq!(server.port, 8080);
//! ```

use crate::{Error, LiteralKind, Result, TomlArray, TomlElement, TomlLiteral, TomlTable};
use serde::de::{self, Deserialize, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use std::fmt;

/// Converts a [`TomlElement`] into any `T: DeserializeOwned`.
///
/// # Errors
///
/// Returns an error when the element's shape does not match `T`.
pub fn from_element<T>(element: TomlElement) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(element)
}

fn visit_literal<'de, V>(literal: TomlLiteral, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    match literal.kind() {
        LiteralKind::Boolean => visitor.visit_bool(literal.as_bool() == Some(true)),
        LiteralKind::Integer => match literal.as_integer() {
            Some(value) => visitor.visit_i64(value),
            None => Err(Error::custom(format!(
                "integer `{}` out of range",
                literal.content()
            ))),
        },
        LiteralKind::Float => match literal.as_float() {
            Some(value) => visitor.visit_f64(value),
            None => Err(Error::custom(format!("invalid float `{}`", literal.content()))),
        },
        _ => visitor.visit_string(literal.content().to_string()),
    }
}

impl<'de> de::Deserializer<'de> for TomlElement {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            TomlElement::Null => visitor.visit_unit(),
            TomlElement::Literal(literal) => visit_literal(literal, visitor),
            TomlElement::Array(array) => visitor.visit_seq(SeqDeserializer::new(array)),
            TomlElement::Table(table) => visitor.visit_map(MapDeserializer::new(table)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            TomlElement::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    /// Unit variants are strings; all other variants are single-key tables.
    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            TomlElement::Literal(literal) if literal.kind() == LiteralKind::String => {
                visitor.visit_enum(EnumDeserializer {
                    variant: literal.content().to_string(),
                    value: None,
                })
            }
            TomlElement::Table(table) if table.len() == 1 => {
                let mut entries = table.into_iter();
                match entries.next() {
                    Some((variant, value)) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    None => Err(Error::custom("expected an enum variant")),
                }
            }
            _ => Err(Error::custom(
                "expected a string or a table with a single key for an enum",
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for TomlElement {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

struct SeqDeserializer {
    iter: <TomlArray as IntoIterator>::IntoIter,
}

impl SeqDeserializer {
    fn new(array: TomlArray) -> Self {
        SeqDeserializer {
            iter: array.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(element) => seed.deserialize(element).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: <TomlTable as IntoIterator>::IntoIter,
    value: Option<TomlElement>,
}

impl MapDeserializer {
    fn new(table: TomlTable) -> Self {
        MapDeserializer {
            iter: table.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                let key: de::value::StringDeserializer<Error> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<TomlElement>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant: de::value::StringDeserializer<Error> = self.variant.into_deserializer();
        let variant = seed.deserialize(variant)?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<TomlElement>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(TomlElement::Null) | None => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(TomlElement::Array(array)) => visitor.visit_seq(SeqDeserializer::new(array)),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(TomlElement::Table(table)) => visitor.visit_map(MapDeserializer::new(table)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}

impl<'de> Deserialize<'de> for TomlElement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<TomlElement, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct ElementVisitor;

        impl<'de> Visitor<'de> for ElementVisitor {
            type Value = TomlElement;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid TOML value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<TomlElement, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(TomlElement::from)
                    .map_err(|_| E::custom("u64 value above i64::MAX"))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::from(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::from(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<TomlElement, E> {
                Ok(TomlElement::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<TomlElement, D::Error>
            where
                D: de::Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<TomlElement, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = TomlArray::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(element) = seq.next_element::<TomlElement>()? {
                    array.push(element);
                }
                Ok(TomlElement::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<TomlElement, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut table = TomlTable::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, element)) = map.next_entry::<String, TomlElement>()? {
                    table.insert(key, element);
                }
                Ok(TomlElement::Table(table))
            }
        }

        deserializer.deserialize_any(ElementVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;
    use chrono::NaiveDate;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Owner {
        name: String,
        dob: NaiveDate,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    enum Mode {
        Off,
        Level(u8),
        Range { low: i32, high: i32 },
    }

    fn document(input: &str) -> TomlElement {
        TomlElement::Table(parse_document(input).unwrap())
    }

    #[test]
    fn test_struct_with_date() {
        let owner: Owner = from_element(document("name = \"Tom\"\ndob = 1979-05-27")).unwrap();
        assert_eq!(owner.name, "Tom");
        assert_eq!(owner.dob, NaiveDate::from_ymd_opt(1979, 5, 27).unwrap());
    }

    #[test]
    fn test_options() {
        #[derive(Deserialize)]
        struct Opt {
            a: Option<i64>,
            b: Option<i64>,
            c: Option<i64>,
        }
        let opt: Opt = from_element(document("a = 1\nb = null")).unwrap();
        assert_eq!((opt.a, opt.b, opt.c), (Some(1), None, None));
    }

    #[test]
    fn test_enums() {
        let modes: HashMap<String, Mode> = from_element(document(
            "a = \"Off\"\nb = { Level = 3 }\nc.Range = { low = 1, high = 5 }",
        ))
        .unwrap();
        assert_eq!(modes["a"], Mode::Off);
        assert_eq!(modes["b"], Mode::Level(3));
        assert_eq!(modes["c"], Mode::Range { low: 1, high: 5 });
    }

    #[test]
    fn test_integer_range_checked_by_visitor() {
        #[derive(Debug, Deserialize)]
        struct Small {
            #[allow(dead_code)]
            v: u8,
        }
        assert!(from_element::<Small>(document("v = 300")).is_err());
        assert!(from_element::<Small>(document("v = -1")).is_err());
    }

    #[test]
    fn test_element_round_trips_through_itself() {
        let element = document("a = [1, 2.5, \"x\"]\n[b]\nc = true");
        let copy: TomlElement = from_element(element.clone()).unwrap();
        assert_eq!(copy, element);
    }
}
