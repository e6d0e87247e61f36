//! Pull-based character reader.
//!
//! [`Cursor`] wraps any `Iterator<Item = char>` and exposes the character under
//! the cursor, the one before it, and the current line. End of input is the
//! `None` state of [`Cursor::current`], never an error.

use crate::{Error, Result};

pub struct Cursor<S> {
    source: S,
    current: Option<char>,
    previous: Option<char>,
    line: usize,
}

impl<S: Iterator<Item = char>> Cursor<S> {
    /// Creates a cursor positioned on the first character of `source`.
    pub fn new(source: S) -> Self {
        let mut cursor = Cursor {
            source,
            current: None,
            previous: None,
            line: 1,
        };
        cursor.current = cursor.source.next();
        cursor
    }

    /// Moves to the next character.
    ///
    /// Leaving a `\n` starts a new line; advancing at end of input is a no-op.
    pub fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }
        if self.current == Some('\n') {
            self.line += 1;
        }
        self.previous = self.current;
        self.current = self.source.next();
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.previous
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    #[inline]
    pub fn is(&self, ch: char) -> bool {
        self.current == Some(ch)
    }

    /// Error for the character under the cursor: `Incomplete` at end of input.
    pub fn unexpected(&self) -> Error {
        Error::unexpected(self.current, self.line)
    }

    /// Consumes `ch` or fails on whatever is there instead.
    pub fn expect(&mut self, ch: char) -> Result<()> {
        if self.is(ch) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes every character of `word` in order.
    pub fn expect_str(&mut self, word: &str) -> Result<()> {
        word.chars().try_for_each(|ch| self.expect(ch))
    }

    /// Skips spaces and tabs.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t')) {
            self.advance();
        }
    }

    /// Skips to the end of a `#` comment, leaving the newline in place.
    ///
    /// A `\r` also ends the comment; [`Cursor::eat_newline`] then insists on
    /// the `\n` that must follow it.
    pub fn skip_comment(&mut self) -> Result<()> {
        debug_assert!(self.is('#'));
        self.advance();
        while let Some(ch) = self.current {
            match ch {
                '\n' | '\r' => break,
                '\t' => {}
                c if c.is_control() => return Err(self.unexpected()),
                _ => {}
            }
            self.advance();
        }
        Ok(())
    }

    /// Consumes a line break (`\n` or `\r\n`). Returns `false` if none is present.
    pub fn eat_newline(&mut self) -> Result<bool> {
        match self.current {
            Some('\n') => {
                self.advance();
                Ok(true)
            }
            Some('\r') => {
                self.advance();
                self.expect('\n')?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Skips whitespace, line breaks and comments.
    pub fn skip_trivia(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.is('#') {
                self.skip_comment()?;
            }
            if !self.eat_newline()? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nb".chars());
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.current(), Some('\n'));
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.previous(), Some('\n'));
        assert_eq!(cursor.line(), 2);
        cursor.advance();
        assert!(cursor.at_end());
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_expect_str() {
        let mut cursor = Cursor::new("true".chars());
        assert!(cursor.expect_str("true").is_ok());
        assert!(cursor.at_end());

        let mut cursor = Cursor::new("tru".chars());
        assert_eq!(cursor.expect_str("true"), Err(Error::Incomplete { line: 1 }));
    }

    #[test]
    fn test_skip_trivia() {
        let mut cursor = Cursor::new("  # note\r\n\n\t x".chars());
        cursor.skip_trivia().unwrap();
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_carriage_return_in_comment() {
        let mut cursor = Cursor::new("# note\r\nx".chars());
        cursor.skip_trivia().unwrap();
        assert_eq!(cursor.current(), Some('x'));

        let mut cursor = Cursor::new("# a\rb\nx".chars());
        assert_eq!(
            cursor.skip_trivia(),
            Err(Error::UnexpectedToken { token: 'b', line: 1 })
        );
    }

    #[test]
    fn test_bare_carriage_return() {
        let mut cursor = Cursor::new("\rx".chars());
        assert_eq!(
            cursor.eat_newline(),
            Err(Error::UnexpectedToken { token: 'x', line: 1 })
        );
    }
}
