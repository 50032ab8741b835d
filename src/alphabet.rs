//! Digit alphabets
//!
//! Every character after a key's head is a digit drawn from an ordered
//! alphabet. Digit order must agree with byte order, so that comparing two
//! keys as raw strings compares them as numbers.
//!
//! The default is base62 (`0-9`, `A-Z`, `a-z`). Callers that need a
//! different digit set can build their own:
//!
//! ```
//! use synckit_order_keys::Alphabet;
//!
//! let decimal = Alphabet::new("0123456789").unwrap();
//! assert_eq!(decimal.len(), 10);
//! assert_eq!(decimal.first(), b'0');
//! assert_eq!(decimal.last(), b'9');
//!
//! assert!(Alphabet::new("ba").is_err());
//! ```

use crate::error::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Base62 digits in ascending byte order
pub const BASE62_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Ordered set of ASCII digits
///
/// Serializes as its digit string; deserializing validates it the same way
/// as [`Alphabet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    digits: Cow<'static, str>,
}

impl Alphabet {
    /// The base62 alphabet
    pub const BASE62: Alphabet = Alphabet {
        digits: Cow::Borrowed(BASE62_DIGITS),
    };

    /// Build an alphabet from at least two strictly ascending ASCII digits
    pub fn new(digits: &str) -> Result<Self> {
        Self::validate(digits)?;
        Ok(Self {
            digits: Cow::Owned(digits.to_string()),
        })
    }

    fn validate(digits: &str) -> Result<()> {
        let bytes = digits.as_bytes();
        if bytes.len() < 2 {
            return Err(KeyError::InvalidAlphabet(format!(
                "need at least 2 digits, got {}",
                bytes.len()
            )));
        }
        if !digits.is_ascii() {
            return Err(KeyError::InvalidAlphabet(format!(
                "digits must be ASCII: {}",
                digits
            )));
        }
        if !bytes.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(KeyError::InvalidAlphabet(format!(
                "digits must be strictly ascending: {}",
                digits
            )));
        }
        Ok(())
    }

    /// Digits as a string
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of digits (the base)
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false, an alphabet holds at least two digits
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Smallest digit (the "zero")
    pub fn first(&self) -> u8 {
        self.digits.as_bytes()[0]
    }

    /// Largest digit
    pub fn last(&self) -> u8 {
        self.digits.as_bytes()[self.len() - 1]
    }

    /// Digit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn digit(&self, index: usize) -> u8 {
        self.digits.as_bytes()[index]
    }

    /// Position of `digit`, if it belongs to the alphabet
    pub fn index_of(&self, digit: u8) -> Option<usize> {
        self.digits.as_bytes().binary_search(&digit).ok()
    }

    /// Whether `digit` belongs to the alphabet
    pub fn contains(&self, digit: u8) -> bool {
        self.index_of(digit).is_some()
    }

    /// Position of `digit`, or the slot it would sort into if absent
    pub(crate) fn rank(&self, digit: u8) -> usize {
        match self.digits.as_bytes().binary_search(&digit) {
            Ok(index) | Err(index) => index,
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BASE62
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = KeyError;

    fn try_from(digits: String) -> Result<Self> {
        Self::validate(&digits)?;
        Ok(Self {
            digits: Cow::Owned(digits),
        })
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.digits.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base62_layout() {
        let alphabet = Alphabet::BASE62;
        assert_eq!(alphabet.len(), 62);
        assert_eq!(alphabet.first(), b'0');
        assert_eq!(alphabet.last(), b'z');
        assert_eq!(alphabet.digit(10), b'A');
        assert_eq!(alphabet.digit(36), b'a');
        assert_eq!(alphabet.digit(31), b'V');
    }

    #[test]
    fn test_index_of() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.index_of(b'0'), Some(0));
        assert_eq!(alphabet.index_of(b'Z'), Some(35));
        assert_eq!(alphabet.index_of(b'z'), Some(61));
        assert_eq!(alphabet.index_of(b'-'), None);
        assert!(!alphabet.contains(b'~'));
    }

    #[test]
    fn test_rank_of_foreign_byte() {
        let alphabet = Alphabet::new("02468").unwrap();
        assert_eq!(alphabet.rank(b'4'), 2);
        assert_eq!(alphabet.rank(b'5'), 3);
        assert_eq!(alphabet.rank(b'9'), 5);
    }

    #[test]
    fn test_rejects_bad_alphabets() {
        assert!(matches!(
            Alphabet::new("0"),
            Err(KeyError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new("0011"),
            Err(KeyError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new("10"),
            Err(KeyError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new("0é"),
            Err(KeyError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let json = serde_json::to_string(&Alphabet::BASE62).unwrap();
        assert_eq!(json, format!("\"{}\"", BASE62_DIGITS));

        let decimal: Alphabet = serde_json::from_str("\"0123456789\"").unwrap();
        assert_eq!(decimal.len(), 10);

        assert!(serde_json::from_str::<Alphabet>("\"zyx\"").is_err());
    }
}
