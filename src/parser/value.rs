use super::TomlParser;
use crate::tree::PathTree;
use crate::{Result, TomlArray, TomlElement, TomlLiteral, TomlTable};

impl<S: Iterator<Item = char>> TomlParser<S> {
    /// Reads one value, dispatching on its first character.
    pub(super) fn parse_value(&mut self) -> Result<TomlElement> {
        match self.cursor.current() {
            Some('"') => Ok(TomlLiteral::string(self.parse_basic_string(true)?).into()),
            Some('\'') => Ok(TomlLiteral::string(self.parse_literal_string(true)?).into()),
            Some('t') => {
                self.cursor.expect_str("true")?;
                Ok(TomlElement::from(true))
            }
            Some('f') => {
                self.cursor.expect_str("false")?;
                Ok(TomlElement::from(false))
            }
            Some('n') => {
                self.cursor.advance();
                if self.cursor.is('u') {
                    self.cursor.expect_str("ull")?;
                    Ok(TomlElement::Null)
                } else {
                    self.cursor.expect_str("an")?;
                    Ok(TomlLiteral::float(f64::NAN).into())
                }
            }
            Some('i') => {
                self.cursor.expect_str("inf")?;
                Ok(TomlLiteral::float(f64::INFINITY).into())
            }
            Some(sign @ ('+' | '-')) => {
                self.cursor.advance();
                self.parse_signed(sign)
            }
            Some(ch) if ch.is_ascii_digit() => self.parse_number_or_date_time(None),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_inline_table(),
            _ => Err(self.cursor.unexpected()),
        }
    }

    fn parse_array(&mut self) -> Result<TomlElement> {
        self.cursor.expect('[')?;
        let mut array = TomlArray::new();
        loop {
            self.cursor.skip_trivia()?;
            if self.cursor.is(']') {
                break;
            }
            array.push(self.parse_value()?);
            self.cursor.skip_trivia()?;
            match self.cursor.current() {
                Some(',') => self.cursor.advance(),
                Some(']') => break,
                _ => return Err(self.cursor.unexpected()),
            }
        }
        self.cursor.advance();
        Ok(TomlElement::Array(array))
    }

    /// Inline tables get their own path tree, so dotted keys and conflicts
    /// behave as in a document but stay local to the braces.
    fn parse_inline_table(&mut self) -> Result<TomlElement> {
        self.cursor.expect('{')?;
        self.cursor.skip_whitespace();
        if self.cursor.is('}') {
            self.cursor.advance();
            return Ok(TomlElement::Table(TomlTable::new()));
        }

        let mut tree = PathTree::new();
        loop {
            let (path, element) = self.parse_key_value()?;
            tree.insert_value(&path, element)?;
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(',') => self.cursor.advance(),
                Some('}') => break,
                _ => return Err(self.cursor.unexpected()),
            }
        }
        self.cursor.advance();
        Ok(TomlElement::Table(tree.materialize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, LiteralKind};

    fn value(input: &str) -> Result<TomlElement> {
        TomlParser::from_str(input).parse_value()
    }

    fn content(input: &str) -> (LiteralKind, String) {
        let element = value(input).unwrap();
        let literal = element.as_literal().unwrap();
        (literal.kind(), literal.content().to_string())
    }

    #[test]
    fn test_keywords() {
        assert_eq!(value("true").unwrap(), TomlElement::from(true));
        assert_eq!(value("false").unwrap(), TomlElement::from(false));
        assert_eq!(value("null").unwrap(), TomlElement::Null);
        assert_eq!(content("nan"), (LiteralKind::Float, "nan".to_string()));
        assert_eq!(content("-nan"), (LiteralKind::Float, "nan".to_string()));
        assert_eq!(content("+inf"), (LiteralKind::Float, "inf".to_string()));
        assert_eq!(content("-inf"), (LiteralKind::Float, "-inf".to_string()));
        assert_eq!(
            value("nul"),
            Err(Error::Incomplete { line: 1 })
        );
    }

    #[test]
    fn test_array_with_comments_and_trailing_comma() {
        let array = value("[\n  1, # one\n  2,\n\n  3,\n]").unwrap();
        let items: Vec<_> = array
            .as_array()
            .unwrap()
            .iter()
            .filter_map(TomlElement::as_integer)
            .collect();
        assert_eq!(items, vec![1, 2, 3]);
        assert!(value("[ ]").unwrap().as_array().unwrap().is_empty());
        assert!(value("[,]").is_err());
        assert!(value("[1 2]").is_err());
    }

    #[test]
    fn test_mixed_nested_array() {
        let array = value("[ [1, 2], [\"a\"], {x = 1} ]").unwrap();
        let array = array.as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert!(array.get(2).unwrap().is_table());
    }

    #[test]
    fn test_inline_table() {
        let table = value("{ name = \"Tom\", point.x = 1, point.y = 2 }").unwrap();
        assert_eq!(table.pointer(&["point", "y"]).and_then(TomlElement::as_integer), Some(2));
        assert!(value("{}").unwrap().as_table().unwrap().is_empty());
    }

    #[test]
    fn test_inline_table_rules() {
        assert!(matches!(
            value("{ a = 1, a = 2 }"),
            Err(Error::ConflictEntry { .. })
        ));
        assert_eq!(
            value("{ a = 1, }"),
            Err(Error::UnexpectedToken { token: '}', line: 1 })
        );
        assert_eq!(
            value("{ a = 1\n}"),
            Err(Error::UnexpectedToken { token: '\n', line: 1 })
        );
        assert_eq!(value("{ a = 1"), Err(Error::Incomplete { line: 1 }));
    }

    #[test]
    fn test_unknown_start() {
        assert_eq!(value("=1"), Err(Error::UnexpectedToken { token: '=', line: 1 }));
        assert_eq!(value(""), Err(Error::Incomplete { line: 1 }));
    }
}
