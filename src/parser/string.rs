use super::TomlParser;
use crate::{Error, Result};

/// Control characters other than tab may not appear raw inside strings.
#[inline]
fn is_forbidden_control(ch: char) -> bool {
    (ch <= '\u{1f}' && ch != '\t') || ch == '\u{7f}'
}

impl<S: Iterator<Item = char>> TomlParser<S> {
    pub(super) fn parse_basic_key(&mut self) -> Result<String> {
        self.parse_basic_string(false)
    }

    pub(super) fn parse_literal_key(&mut self) -> Result<String> {
        self.parse_literal_string(false)
    }

    /// Reads a `"..."` or, when allowed, `"""..."""` string starting at the opening quote.
    pub(super) fn parse_basic_string(&mut self, allow_multiline: bool) -> Result<String> {
        self.cursor.expect('"')?;
        if self.cursor.is('"') {
            self.cursor.advance();
            if !self.cursor.is('"') {
                return Ok(String::new());
            }
            if !allow_multiline {
                return Err(self.cursor.unexpected());
            }
            self.cursor.advance();
            return self.parse_multiline_basic();
        }

        let mut text = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(self.cursor.unexpected()),
                Some('"') => {
                    self.cursor.advance();
                    return Ok(text);
                }
                Some('\\') => {
                    self.cursor.advance();
                    self.parse_escape(&mut text)?;
                }
                Some(ch) if ch == '\n' || is_forbidden_control(ch) => {
                    return Err(self.cursor.unexpected())
                }
                Some(ch) => {
                    text.push(ch);
                    self.cursor.advance();
                }
            }
        }
    }

    fn parse_multiline_basic(&mut self) -> Result<String> {
        // A newline right after the opening delimiter is trimmed.
        self.cursor.eat_newline()?;

        let mut text = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(self.cursor.unexpected()),
                Some('"') => {
                    if self.closing_quotes('"', &mut text)? {
                        return Ok(text);
                    }
                }
                Some('\\') => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), Some(' ' | '\t' | '\n' | '\r')) {
                        self.skip_line_continuation()?;
                    } else {
                        self.parse_escape(&mut text)?;
                    }
                }
                Some('\n' | '\r') => {
                    self.cursor.eat_newline()?;
                    text.push('\n');
                }
                Some(ch) if is_forbidden_control(ch) => return Err(self.cursor.unexpected()),
                Some(ch) => {
                    text.push(ch);
                    self.cursor.advance();
                }
            }
        }
    }

    /// A backslash at the end of a line swallows all whitespace up to the next
    /// non-whitespace character. Only spaces and tabs may sit between the
    /// backslash and the line break.
    fn skip_line_continuation(&mut self) -> Result<()> {
        self.cursor.skip_whitespace();
        if !self.cursor.eat_newline()? {
            return Err(self.cursor.unexpected());
        }
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat_newline()? {
                return Ok(());
            }
        }
    }

    /// Decodes the escape sequence after a backslash.
    fn parse_escape(&mut self, text: &mut String) -> Result<()> {
        let decoded = match self.cursor.current() {
            Some('b') => '\u{8}',
            Some('t') => '\t',
            Some('n') => '\n',
            Some('f') => '\u{c}',
            Some('r') => '\r',
            Some('"') => '"',
            Some('\\') => '\\',
            Some('u') => return self.parse_unicode_escape(4, text),
            Some('U') => return self.parse_unicode_escape(8, text),
            _ => return Err(self.cursor.unexpected()),
        };
        text.push(decoded);
        self.cursor.advance();
        Ok(())
    }

    fn parse_unicode_escape(&mut self, digits: usize, text: &mut String) -> Result<()> {
        let line = self.cursor.line();
        self.cursor.advance();
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .cursor
                .current()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| self.cursor.unexpected())?;
            code = code * 16 + digit;
            self.cursor.advance();
        }
        let ch = char::from_u32(code).ok_or_else(|| Error::unexpected(self.cursor.previous(), line))?;
        text.push(ch);
        Ok(())
    }

    /// Reads a `'...'` or, when allowed, `'''...'''` string starting at the opening quote.
    pub(super) fn parse_literal_string(&mut self, allow_multiline: bool) -> Result<String> {
        self.cursor.expect('\'')?;
        if self.cursor.is('\'') {
            self.cursor.advance();
            if !self.cursor.is('\'') {
                return Ok(String::new());
            }
            if !allow_multiline {
                return Err(self.cursor.unexpected());
            }
            self.cursor.advance();
            return self.parse_multiline_literal();
        }

        let mut text = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(self.cursor.unexpected()),
                Some('\'') => {
                    self.cursor.advance();
                    return Ok(text);
                }
                Some(ch) if ch == '\n' || is_forbidden_control(ch) => {
                    return Err(self.cursor.unexpected())
                }
                Some(ch) => {
                    text.push(ch);
                    self.cursor.advance();
                }
            }
        }
    }

    fn parse_multiline_literal(&mut self) -> Result<String> {
        self.cursor.eat_newline()?;

        let mut text = String::new();
        loop {
            match self.cursor.current() {
                None => return Err(self.cursor.unexpected()),
                Some('\'') => {
                    if self.closing_quotes('\'', &mut text)? {
                        return Ok(text);
                    }
                }
                Some('\n' | '\r') => {
                    self.cursor.eat_newline()?;
                    text.push('\n');
                }
                Some(ch) if is_forbidden_control(ch) => return Err(self.cursor.unexpected()),
                Some(ch) => {
                    text.push(ch);
                    self.cursor.advance();
                }
            }
        }
    }

    /// Consumes a run of `quote` inside a multiline string.
    ///
    /// Returns `true` when the run closes the string. Up to two quotes directly
    /// before the closing delimiter belong to the content.
    fn closing_quotes(&mut self, quote: char, text: &mut String) -> Result<bool> {
        let mut run = 0;
        while self.cursor.is(quote) {
            run += 1;
            self.cursor.advance();
        }
        match run {
            0..=2 => {
                text.extend(std::iter::repeat(quote).take(run));
                Ok(false)
            }
            3..=5 => {
                text.extend(std::iter::repeat(quote).take(run - 3));
                Ok(true)
            }
            _ => Err(Error::unexpected(Some(quote), self.cursor.line())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(input: &str) -> Result<String> {
        TomlParser::from_str(input).parse_basic_string(true)
    }

    fn literal(input: &str) -> Result<String> {
        TomlParser::from_str(input).parse_literal_string(true)
    }

    #[test]
    fn test_basic_escapes() {
        assert_eq!(basic(r#""a\tb\n\"c\"\\""#).unwrap(), "a\tb\n\"c\"\\");
        assert_eq!(basic(r#""\u00e9\U0001F600""#).unwrap(), "é😀");
        assert_eq!(basic(r#""""#).unwrap(), "");
    }

    #[test]
    fn test_invalid_escapes() {
        assert_eq!(
            basic(r#""\q""#),
            Err(Error::UnexpectedToken { token: 'q', line: 1 })
        );
        assert!(basic(r#""\uD800""#).is_err());
        assert!(basic(r#""\u12""#).is_err());
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(basic("\"abc"), Err(Error::Incomplete { line: 1 }));
        assert_eq!(
            basic("\"abc\ndef\""),
            Err(Error::UnexpectedToken { token: '\n', line: 1 })
        );
        assert_eq!(literal("'''abc\n''"), Err(Error::Incomplete { line: 2 }));
    }

    #[test]
    fn test_multiline_trims_first_newline() {
        assert_eq!(basic("\"\"\"\nRoses\nViolets\"\"\"").unwrap(), "Roses\nViolets");
        assert_eq!(literal("'''\r\nfirst\r\nsecond'''").unwrap(), "first\nsecond");
    }

    #[test]
    fn test_line_continuation() {
        let input = "\"\"\"\nThe quick \\\n\n    brown \\\n   fox.\"\"\"";
        assert_eq!(basic(input).unwrap(), "The quick brown fox.");
        assert!(basic("\"\"\"a \\ b\"\"\"").is_err());
    }

    #[test]
    fn test_quotes_before_closing_delimiter() {
        assert_eq!(basic("\"\"\"a\"\"\"\"").unwrap(), "a\"");
        assert_eq!(basic("\"\"\"a\"\"\"\"\"").unwrap(), "a\"\"");
        assert_eq!(basic("\"\"\"a\"\"b\"\"\"").unwrap(), "a\"\"b");
        assert_eq!(literal("'''it''''").unwrap(), "it'");
        assert!(basic("\"\"\"a\"\"\"\"\"\"").is_err());
    }

    #[test]
    fn test_literal_keeps_backslashes() {
        assert_eq!(literal(r"'C:\Users\nodejs'").unwrap(), r"C:\Users\nodejs");
        assert_eq!(literal(r"'''a\nb'''").unwrap(), r"a\nb");
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(basic("\"a\u{0}b\"").is_err());
        assert!(literal("'a\u{7f}b'").is_err());
        assert_eq!(basic("\"a\tb\"").unwrap(), "a\tb");
    }
}
