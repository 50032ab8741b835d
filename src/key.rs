//! Order keys
//!
//! An order key is an integer part followed by a (possibly empty)
//! fractional part. Keys sort by plain byte comparison, which is the whole
//! contract: storing them in a text column and ordering by that column
//! yields sequence order.
//!
//! # Example
//!
//! ```
//! use synckit_order_keys::OrderKey;
//!
//! let first = OrderKey::first();
//! let second = OrderKey::between(Some(&first), None).unwrap();
//! let squeezed = OrderKey::between(Some(&first), Some(&second)).unwrap();
//!
//! assert_eq!(second.as_str(), "a1");
//! assert_eq!(squeezed.as_str(), "a0V");
//! assert!(first < squeezed && squeezed < second);
//! ```

use crate::alphabet::Alphabet;
use crate::error::{KeyError, Result};
use crate::generator::KeyGenerator;
use crate::integer::{is_sentinel, split_integer_part};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The canonical zero key
pub const ZERO_KEY: &str = "a0";

/// Check that `key` is a complete, normalized key over `alphabet`
///
/// Rejects the sentinel, a bad head, a key shorter than its integer part,
/// characters outside the alphabet and a fractional part ending in zero.
pub fn validate_key(alphabet: &Alphabet, key: &str) -> Result<()> {
    if is_sentinel(alphabet, key) {
        return Err(KeyError::InvalidKey(key.to_string()));
    }
    let (_, fraction) = split_integer_part(key)?;
    if !key.bytes().skip(1).all(|d| alphabet.contains(d)) {
        return Err(KeyError::InvalidKey(key.to_string()));
    }
    if fraction.as_bytes().last() == Some(&alphabet.first()) {
        return Err(KeyError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// A validated base62 order key
///
/// Ordering, equality and hashing are those of the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderKey(String);

impl OrderKey {
    /// Parse and validate a key
    pub fn parse(key: &str) -> Result<Self> {
        validate_key(&Alphabet::BASE62, key)?;
        Ok(Self(key.to_string()))
    }

    /// The canonical zero key, `"a0"`
    pub fn first() -> Self {
        Self(ZERO_KEY.to_string())
    }

    /// A key strictly between the bounds, `None` meaning unbounded
    pub fn between(a: Option<&OrderKey>, b: Option<&OrderKey>) -> Result<Self> {
        KeyGenerator::default()
            .key_between(bound(a), bound(b))
            .map(Self)
    }

    /// `n` ascending keys strictly between the bounds
    pub fn n_between(a: Option<&OrderKey>, b: Option<&OrderKey>, n: usize) -> Result<Vec<Self>> {
        let keys = KeyGenerator::default().n_keys_between(bound(a), bound(b), n)?;
        Ok(keys.into_iter().map(Self).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Leading self-delimited integer part
    pub fn integer_part(&self) -> &str {
        self.split().0
    }

    /// Everything after the integer part
    pub fn fractional_part(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // validated on construction
        split_integer_part(&self.0).unwrap_or((self.0.as_str(), ""))
    }
}

fn bound(key: Option<&OrderKey>) -> &str {
    key.map_or("", OrderKey::as_str)
}

impl std::fmt::Display for OrderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderKey {
    type Error = KeyError;

    fn try_from(key: String) -> Result<Self> {
        validate_key(&Alphabet::BASE62, &key)?;
        Ok(Self(key))
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(key: &str) -> Result<()> {
        validate_key(&Alphabet::BASE62, key)
    }

    #[test]
    fn test_valid_keys() {
        let keys = [
            "a0",
            "a0V",
            "Zz",
            "b125",
            "A000000000000000000000000001",
            "zzzzzzzzzzzzzzzzzzzzzzzzzzzV",
        ];
        for key in keys {
            assert!(validate(key).is_ok(), "{} should be valid", key);
        }
    }

    #[test]
    fn test_sentinel_rejected() {
        assert_eq!(
            validate("A00000000000000000000000000"),
            Err(KeyError::InvalidKey("A00000000000000000000000000".to_string()))
        );
    }

    #[test]
    fn test_trailing_zero_rejected() {
        assert_eq!(validate("a00"), Err(KeyError::InvalidKey("a00".to_string())));
        assert_eq!(validate("a0V0"), Err(KeyError::InvalidKey("a0V0".to_string())));
        // zeros inside the integer part are fine
        assert!(validate("b00").is_ok());
    }

    #[test]
    fn test_head_and_length_errors() {
        assert_eq!(validate("0"), Err(KeyError::InvalidHead('0')));
        assert_eq!(validate("b1"), Err(KeyError::KeyTooShort("b1".to_string())));
        assert!(validate("").is_err());
    }

    #[test]
    fn test_foreign_characters_rejected() {
        assert_eq!(validate("a0-"), Err(KeyError::InvalidKey("a0-".to_string())));
        assert_eq!(validate("a!"), Err(KeyError::InvalidKey("a!".to_string())));
        assert!(validate("a0é").is_err());
    }

    #[test]
    fn test_custom_alphabet_zero() {
        let alphabet = Alphabet::new("123456789").unwrap();
        assert!(validate_key(&alphabet, "a10").is_err());
        assert!(validate_key(&alphabet, "a1").is_ok());
        assert!(validate_key(&alphabet, "a11").is_err());
        assert!(validate_key(&alphabet, "a12").is_ok());
    }

    #[test]
    fn test_order_key_parts() {
        let key = OrderKey::parse("b125").unwrap();
        assert_eq!(key.integer_part(), "b12");
        assert_eq!(key.fractional_part(), "5");
        assert_eq!(key.to_string(), "b125");
    }

    #[test]
    fn test_order_key_ordering_matches_strings() {
        let mut keys: Vec<OrderKey> = ["a1", "Zz", "a0V", "a0", "b00"]
            .iter()
            .map(|k| k.parse().unwrap())
            .collect();
        keys.sort();
        let sorted: Vec<&str> = keys.iter().map(OrderKey::as_str).collect();
        assert_eq!(sorted, vec!["Zz", "a0", "a0V", "a1", "b00"]);
    }

    #[test]
    fn test_order_key_between() {
        let zz = OrderKey::between(None, Some(&OrderKey::first())).unwrap();
        assert_eq!(zz.as_str(), "Zz");

        let keys = OrderKey::n_between(None, None, 3).unwrap();
        let raw: Vec<String> = keys.into_iter().map(String::from).collect();
        assert_eq!(raw, vec!["a0", "a1", "a2"]);
    }

    #[test]
    fn test_order_key_serde() {
        let key = OrderKey::parse("a0V").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"a0V\"");

        let back: OrderKey = serde_json::from_str("\"a0V\"").unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<OrderKey>("\"a00\"").is_err());
    }
}
