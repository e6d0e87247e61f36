//! Numbers and date-times.
//!
//! Both start with a digit, so the parser first collects the whole run of
//! characters up to a value terminator and only then decides what it holds.

use super::TomlParser;
use crate::value::{LOCAL_DATE_TIME_FORMAT, LOCAL_TIME_FORMAT};
use crate::{Error, LiteralKind, Result, TomlElement, TomlLiteral};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

impl<S: Iterator<Item = char>> TomlParser<S> {
    /// Continues a value after a leading `+` or `-`.
    pub(super) fn parse_signed(&mut self, sign: char) -> Result<TomlElement> {
        match self.cursor.current() {
            Some('i') => {
                self.cursor.expect_str("inf")?;
                let value = if sign == '-' {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
                Ok(TomlLiteral::float(value).into())
            }
            Some('n') => {
                self.cursor.expect_str("nan")?;
                Ok(TomlLiteral::float(f64::NAN).into())
            }
            Some(ch) if ch.is_ascii_digit() => self.parse_number_or_date_time(Some(sign)),
            _ => Err(self.cursor.unexpected()),
        }
    }

    pub(super) fn parse_number_or_date_time(&mut self, sign: Option<char>) -> Result<TomlElement> {
        let line = self.cursor.line();
        let run = self.read_run();

        if is_date_time(&run) {
            if sign.is_some() {
                return Err(Error::unexpected(sign, line));
            }
            return parse_date_time(&run, line).map(TomlElement::Literal);
        }

        let radix = match run.get(..2) {
            Some("0x") => Some(16),
            Some("0o") => Some(8),
            Some("0b") => Some(2),
            _ => None,
        };
        let literal = match radix {
            Some(_) if sign.is_some() => return Err(Error::unexpected(sign, line)),
            Some(radix) => parse_radix_integer(&run, radix, line)?,
            None => parse_decimal(&run, sign == Some('-'), line)?,
        };
        Ok(TomlElement::Literal(literal))
    }

    /// Collects characters up to a value terminator.
    ///
    /// A full date followed by one space and a digit continues as a date-time,
    /// with the space recorded as `T`.
    fn read_run(&mut self) -> String {
        let mut run = String::new();
        loop {
            match self.cursor.current() {
                None | Some(',' | ']' | '}' | '#' | '\t' | '\n' | '\r') => break,
                Some(' ') => {
                    if !is_full_date(&run) {
                        break;
                    }
                    self.cursor.advance();
                    if !self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
                        break;
                    }
                    run.push('T');
                }
                Some(ch) => {
                    run.push(ch);
                    self.cursor.advance();
                }
            }
        }
        run
    }
}

fn is_full_date(run: &str) -> bool {
    let bytes = run.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn is_date_time(run: &str) -> bool {
    let mut previous_digit = false;
    for ch in run.chars() {
        match ch {
            'T' | 't' | ':' | 'Z' | 'z' => return true,
            '-' if previous_digit => return true,
            _ => {}
        }
        previous_digit = ch.is_ascii_digit();
    }
    false
}

/// Reads digits of `radix` from `chars[*index..]`, dropping `_` separators.
///
/// Each `_` must sit between two digits. At least one digit is required.
fn read_digits(chars: &[char], index: &mut usize, radix: u32, line: usize) -> Result<String> {
    let mut digits = String::new();
    while let Some(&ch) = chars.get(*index) {
        if ch.is_digit(radix) {
            digits.push(ch);
        } else if ch == '_' {
            let flanked = !digits.is_empty()
                && chars.get(*index - 1).is_some_and(|c| c.is_digit(radix))
                && chars.get(*index + 1).is_some_and(|c| c.is_digit(radix));
            if !flanked {
                return Err(Error::unexpected(Some('_'), line));
            }
        } else {
            break;
        }
        *index += 1;
    }
    if digits.is_empty() {
        let token = chars
            .get(*index)
            .or_else(|| (*index).checked_sub(1).and_then(|i| chars.get(i)));
        return Err(Error::unexpected(token.copied(), line));
    }
    Ok(digits)
}

/// `run` still carries its two-character prefix.
fn parse_radix_integer(run: &str, radix: u32, line: usize) -> Result<TomlLiteral> {
    let chars: Vec<char> = run.chars().collect();
    let mut index = 2;
    let digits = read_digits(&chars, &mut index, radix, line)?;
    if let Some(&ch) = chars.get(index) {
        return Err(Error::unexpected(Some(ch), line));
    }
    let value = i64::from_str_radix(&digits, radix).map_err(|_| Error::NumberOutOfRange { line })?;
    Ok(TomlLiteral::integer(value))
}

fn parse_decimal(run: &str, negative: bool, line: usize) -> Result<TomlLiteral> {
    let chars: Vec<char> = run.chars().collect();
    let mut index = 0;

    let integral = read_digits(&chars, &mut index, 10, line)?;
    if integral.len() > 1 && integral.starts_with('0') {
        return Err(Error::unexpected(chars.get(1).copied(), line));
    }

    let mut fraction = None;
    if chars.get(index) == Some(&'.') {
        index += 1;
        fraction = Some(read_digits(&chars, &mut index, 10, line)?);
    }

    let mut exponent = None;
    if let Some(&marker @ ('e' | 'E')) = chars.get(index) {
        index += 1;
        let mut text = String::from(marker);
        if let Some(&sign @ ('+' | '-')) = chars.get(index) {
            text.push(sign);
            index += 1;
        }
        text.push_str(&read_digits(&chars, &mut index, 10, line)?);
        exponent = Some(text);
    }

    if let Some(&ch) = chars.get(index) {
        return Err(Error::unexpected(Some(ch), line));
    }

    let mut content = String::with_capacity(run.len() + 1);
    if negative {
        content.push('-');
    }
    content.push_str(&integral);

    if fraction.is_none() && exponent.is_none() {
        let value: i64 = content
            .parse()
            .map_err(|_| Error::NumberOutOfRange { line })?;
        return Ok(TomlLiteral::integer(value));
    }

    if let Some(fraction) = fraction {
        content.push('.');
        content.push_str(&fraction);
    }
    if let Some(exponent) = exponent {
        content.push_str(&exponent);
    }
    Ok(TomlLiteral::new_unchecked(LiteralKind::Float, content))
}

/// Classifies and validates a date-time run.
///
/// Lowercase `t` and `z` are upper-cased; the result is the literal content.
fn parse_date_time(run: &str, line: usize) -> Result<TomlLiteral> {
    let text: String = run
        .chars()
        .map(|ch| match ch {
            't' => 'T',
            'z' => 'Z',
            other => other,
        })
        .collect();
    let invalid = || Error::invalid_date_time(&text, line);

    let has_date = text.get(..10).is_some_and(is_full_date);
    let kind = if has_date && text.len() == 10 {
        NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| invalid())?;
        LiteralKind::LocalDate
    } else if has_date {
        let time = text.get(11..).filter(|_| text.as_bytes()[10] == b'T').ok_or_else(invalid)?;
        check_time_shape(time_without_offset(time)).ok_or_else(invalid)?;
        if time.len() == time_without_offset(time).len() {
            NaiveDateTime::parse_from_str(&text, LOCAL_DATE_TIME_FORMAT).map_err(|_| invalid())?;
            LiteralKind::LocalDateTime
        } else {
            DateTime::parse_from_rfc3339(&text).map_err(|_| invalid())?;
            LiteralKind::OffsetDateTime
        }
    } else {
        check_time_shape(&text).ok_or_else(invalid)?;
        NaiveTime::parse_from_str(&text, LOCAL_TIME_FORMAT).map_err(|_| invalid())?;
        LiteralKind::LocalTime
    };
    Ok(TomlLiteral::new_unchecked(kind, text))
}

/// Strips a trailing `Z` or `±HH:MM` offset.
fn time_without_offset(time: &str) -> &str {
    if let Some(stripped) = time.strip_suffix('Z') {
        return stripped;
    }
    match time.rfind(['+', '-']) {
        Some(at) => &time[..at],
        None => time,
    }
}

/// `HH:MM:SS` with an optional `.` and at least one fractional digit.
fn check_time_shape(time: &str) -> Option<()> {
    let bytes = time.as_bytes();
    let base_ok = bytes.len() >= 8
        && bytes[..8].iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b':',
            _ => b.is_ascii_digit(),
        });
    let fraction_ok = match bytes.get(8) {
        None => true,
        Some(b'.') => bytes.len() > 9 && bytes[9..].iter().all(u8::is_ascii_digit),
        Some(_) => false,
    };
    (base_ok && fraction_ok).then_some(())
}
