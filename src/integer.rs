//! Integer part of an order key
//!
//! The integer part is self-delimiting: its head character announces how
//! many characters it spans.
//!
//! - `a..=z` are the positive classes, `a` spans 2 characters and `z` 27
//! - `A..=Z` are the negative classes, mirrored: `Z` spans 2 and `A` 27
//!
//! The digits after the head are a base-N magnitude within the class.
//! Longer positive classes hold larger numbers, longer negative classes
//! hold smaller ones, so raw string order matches numeric order across
//! the whole range: `A00..0 < .. < Zz < a0 < .. < zzz..z`.

use crate::alphabet::Alphabet;
use crate::error::{KeyError, Result};
use std::iter;

/// Digits after the head in the longest class
pub const MAX_MAGNITUDE_DIGITS: usize = 26;

/// Number of characters in an integer part with the given head
pub fn head_to_length(head: char) -> Result<usize> {
    match head {
        'a'..='z' => Ok((head as u8 - b'a') as usize + 2),
        'A'..='Z' => Ok((b'Z' - head as u8) as usize + 2),
        _ => Err(KeyError::InvalidHead(head)),
    }
}

/// Split a key into its integer and fractional parts
pub fn split_integer_part(key: &str) -> Result<(&str, &str)> {
    let head = key
        .chars()
        .next()
        .ok_or_else(|| KeyError::InvalidKey(String::new()))?;
    let len = head_to_length(head)?;
    if len > key.len() {
        return Err(KeyError::KeyTooShort(key.to_string()));
    }
    if !key.is_char_boundary(len) {
        return Err(KeyError::InvalidKey(key.to_string()));
    }
    Ok(key.split_at(len))
}

/// Check that an integer part is exactly as long as its head says
pub fn validate_integer_part(int: &str) -> Result<()> {
    let head = int
        .chars()
        .next()
        .ok_or_else(|| KeyError::LengthMismatch(String::new()))?;
    if head_to_length(head)? != int.len() {
        return Err(KeyError::LengthMismatch(int.to_string()));
    }
    Ok(())
}

/// The smallest integer part: `A` followed by 26 zero digits
///
/// Valid as a bound's integer part, never as a complete key.
pub fn sentinel(alphabet: &Alphabet) -> String {
    compose(b'A', alphabet.first(), MAX_MAGNITUDE_DIGITS)
}

/// Whether `int` is the sentinel for `alphabet`
pub fn is_sentinel(alphabet: &Alphabet, int: &str) -> bool {
    let bytes = int.as_bytes();
    bytes.len() == MAX_MAGNITUDE_DIGITS + 1
        && bytes[0] == b'A'
        && bytes[1..].iter().all(|&d| d == alphabet.first())
}

/// Next integer part, or `None` past the top of the `z` class
pub fn increment(alphabet: &Alphabet, int: &str) -> Result<Option<String>> {
    let (head, magnitude) = parts(alphabet, int)?;
    let digits = magnitude.as_bytes();
    let zero = alphabet.first();

    if let Some(pos) = digits.iter().rposition(|&d| d != alphabet.last()) {
        let bumped = alphabet.digit(alphabet.rank(digits[pos]) + 1);
        let tail = digits.len() - pos - 1;
        return Ok(Some(carried(head, &magnitude[..pos], bumped, zero, tail)));
    }

    // carry left the magnitude, move to the next class
    match head {
        b'Z' => Ok(Some(compose(b'a', zero, 1))),
        b'z' => Ok(None),
        _ => {
            let next = head + 1;
            let width = if next.is_ascii_lowercase() {
                digits.len() + 1
            } else {
                digits.len() - 1
            };
            Ok(Some(compose(next, zero, width)))
        }
    }
}

/// Previous integer part, or `None` below the bottom of the `A` class
pub fn decrement(alphabet: &Alphabet, int: &str) -> Result<Option<String>> {
    let (head, magnitude) = parts(alphabet, int)?;
    let digits = magnitude.as_bytes();
    let max = alphabet.last();

    if let Some(pos) = digits.iter().rposition(|&d| d != alphabet.first()) {
        let lowered = alphabet.digit(alphabet.rank(digits[pos]) - 1);
        let tail = digits.len() - pos - 1;
        return Ok(Some(carried(head, &magnitude[..pos], lowered, max, tail)));
    }

    // borrow left the magnitude, move to the previous class
    match head {
        b'a' => Ok(Some(compose(b'Z', max, 1))),
        b'A' => Ok(None),
        _ => {
            let prev = head - 1;
            let width = if prev.is_ascii_uppercase() {
                digits.len() + 1
            } else {
                digits.len() - 1
            };
            Ok(Some(compose(prev, max, width)))
        }
    }
}

/// Validate `int` and split off its head byte
fn parts<'a>(alphabet: &Alphabet, int: &'a str) -> Result<(u8, &'a str)> {
    validate_integer_part(int)?;
    let magnitude = &int[1..];
    if !magnitude.bytes().all(|d| alphabet.contains(d)) {
        return Err(KeyError::InvalidKey(int.to_string()));
    }
    Ok((int.as_bytes()[0], magnitude))
}

fn compose(head: u8, fill: u8, width: usize) -> String {
    iter::once(head)
        .chain(iter::repeat(fill).take(width))
        .map(char::from)
        .collect()
}

fn carried(head: u8, prefix: &str, digit: u8, fill: u8, width: usize) -> String {
    let mut out = String::with_capacity(prefix.len() + width + 2);
    out.push(char::from(head));
    out.push_str(prefix);
    out.push(char::from(digit));
    out.extend(iter::repeat(char::from(fill)).take(width));
    out
}
