use super::TomlParser;
use crate::Result;

#[inline]
pub(crate) fn is_bare_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

#[inline]
pub(super) fn is_key_start(ch: char) -> bool {
    is_bare_key_char(ch) || ch == '"' || ch == '\''
}

impl<S: Iterator<Item = char>> TomlParser<S> {
    /// Reads a dotted key path such as `a."b c".'d'`.
    ///
    /// Whitespace around segments and dots is skipped; the cursor is left on the
    /// first character after the path.
    pub(super) fn parse_path(&mut self) -> Result<Vec<String>> {
        let mut path = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            path.push(self.parse_key()?);
            self.cursor.skip_whitespace();
            if !self.cursor.is('.') {
                return Ok(path);
            }
            self.cursor.advance();
        }
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.cursor.current() {
            Some('"') => self.parse_basic_key(),
            Some('\'') => self.parse_literal_key(),
            Some(ch) if is_bare_key_char(ch) => {
                let mut key = String::new();
                while let Some(ch) = self.cursor.current().filter(|&c| is_bare_key_char(c)) {
                    key.push(ch);
                    self.cursor.advance();
                }
                Ok(key)
            }
            _ => Err(self.cursor.unexpected()),
        }
    }

    /// Reads `key = value` up to the end of the value.
    pub(super) fn parse_key_value(&mut self) -> Result<(Vec<String>, crate::TomlElement)> {
        let path = self.parse_path()?;
        self.cursor.expect('=')?;
        self.cursor.skip_whitespace();
        let element = self.parse_value()?;
        Ok((path, element))
    }
}
