//! Key generation between two bounds
//!
//! Bounds are plain strings; an empty string means "unbounded" on that side.
//!
//! Generation prefers growing the integer part over the fractional part:
//! appending after the last key (or prepending before the first) only bumps
//! the integer part, so keys built by repeated appends stay short. The
//! fractional midpoint is used when two neighbours share an integer part,
//! or when the integer part has nowhere left to go.

use crate::alphabet::Alphabet;
use crate::error::{KeyError, Result};
use crate::integer::{decrement, increment, is_sentinel, split_integer_part};
use crate::key::validate_key;
use crate::midpoint::midpoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Generates keys over a fixed digit alphabet
///
/// # Example
///
/// ```
/// use synckit_order_keys::{Alphabet, KeyGenerator};
///
/// let generator = KeyGenerator::new(Alphabet::new("0123456789").unwrap());
/// assert_eq!(generator.key_between("", "").unwrap(), "a0");
/// assert_eq!(generator.key_between("a0", "a1").unwrap(), "a05");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenerator {
    #[serde(default)]
    alphabet: Alphabet,
}

impl KeyGenerator {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Key the sequence starts from when there are no neighbours
    pub fn zero_key(&self) -> String {
        let mut key = String::with_capacity(2);
        key.push('a');
        key.push(char::from(self.alphabet.first()));
        key
    }

    /// A key strictly between `a` and `b`
    ///
    /// Fails with [`KeyError::RangeInvalid`] when both bounds are given and
    /// `a >= b`, with a validation error when a bound is malformed, and
    /// with [`KeyError::RangeUnderflow`] / [`KeyError::RangeOverflow`]
    /// when no key exists on the requested side.
    pub fn key_between(&self, a: &str, b: &str) -> Result<String> {
        if !a.is_empty() {
            validate_key(&self.alphabet, a)?;
        }
        if !b.is_empty() {
            validate_key(&self.alphabet, b)?;
        }
        if !a.is_empty() && !b.is_empty() && a >= b {
            return Err(KeyError::RangeInvalid {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let key = match (a.is_empty(), b.is_empty()) {
            (true, true) => self.zero_key(),
            (true, false) => self.before(b)?,
            (false, true) => self.after(a)?,
            (false, false) => self.inside(a, b)?,
        };
        trace!(a, b, key = %key, "generated order key");
        Ok(key)
    }

    /// `n` ascending keys strictly between `a` and `b`
    ///
    /// Open-ended ranges are filled by repeated appends (or prepends), which
    /// keeps keys as short as [`key_between`](Self::key_between) makes them.
    /// Closed ranges are bisected: the midpoint first, then each half.
    pub fn n_keys_between(&self, a: &str, b: &str, n: usize) -> Result<Vec<String>> {
        match n {
            0 => return Ok(Vec::new()),
            1 => return Ok(vec![self.key_between(a, b)?]),
            _ => {}
        }

        if b.is_empty() {
            let mut keys = Vec::with_capacity(n);
            let mut last = self.key_between(a, b)?;
            for _ in 1..n {
                let next = self.key_between(&last, b)?;
                keys.push(last);
                last = next;
            }
            keys.push(last);
            return Ok(keys);
        }

        if a.is_empty() {
            let mut keys = Vec::with_capacity(n);
            let mut first = self.key_between(a, b)?;
            for _ in 1..n {
                let prev = self.key_between(a, &first)?;
                keys.push(first);
                first = prev;
            }
            keys.push(first);
            keys.reverse();
            return Ok(keys);
        }

        let left = n / 2;
        let mid = self.key_between(a, b)?;
        let mut keys = self.n_keys_between(a, &mid, left)?;
        let right = self.n_keys_between(&mid, b, n - left - 1)?;
        keys.reserve(right.len() + 1);
        keys.push(mid);
        keys.extend(right);
        Ok(keys)
    }

    /// Unbounded below, `b` above
    fn before(&self, b: &str) -> Result<String> {
        let (ib, fb) = split_integer_part(b)?;
        if is_sentinel(&self.alphabet, ib) {
            return Ok(format!("{}{}", ib, midpoint(&self.alphabet, "", fb)));
        }
        if !fb.is_empty() {
            return Ok(ib.to_string());
        }
        match decrement(&self.alphabet, ib)? {
            // the sentinel is not a key, step into its fraction instead
            Some(prev) if is_sentinel(&self.alphabet, &prev) => {
                Ok(format!("{}{}", prev, midpoint(&self.alphabet, "", "")))
            }
            Some(prev) => Ok(prev),
            None => {
                debug!(b, "no order key below bound");
                Err(KeyError::RangeUnderflow)
            }
        }
    }

    /// `a` below, unbounded above
    fn after(&self, a: &str) -> Result<String> {
        let (ia, fa) = split_integer_part(a)?;
        match increment(&self.alphabet, ia)? {
            Some(next) => Ok(next),
            None => {
                debug!(a, "integer part exhausted, appending to fraction");
                Ok(format!("{}{}", ia, midpoint(&self.alphabet, fa, "")))
            }
        }
    }

    /// Both bounds present, `a < b`
    fn inside(&self, a: &str, b: &str) -> Result<String> {
        let (ia, fa) = split_integer_part(a)?;
        let (ib, fb) = split_integer_part(b)?;
        if ia == ib {
            return Ok(format!("{}{}", ia, midpoint(&self.alphabet, fa, fb)));
        }
        let next = match increment(&self.alphabet, ia)? {
            Some(next) => next,
            None => {
                debug!(a, b, "no order key above bound");
                return Err(KeyError::RangeOverflow);
            }
        };
        if next.as_str() < b {
            return Ok(next);
        }
        Ok(format!("{}{}", ia, midpoint(&self.alphabet, fa, "")))
    }
}

/// A base62 key strictly between `a` and `b` (empty = unbounded)
///
/// ```
/// use synckit_order_keys::key_between;
///
/// assert_eq!(key_between("", "").unwrap(), "a0");
/// assert_eq!(key_between("a0", "").unwrap(), "a1");
/// assert_eq!(key_between("", "a0").unwrap(), "Zz");
/// assert_eq!(key_between("a1", "a2").unwrap(), "a1V");
/// ```
pub fn key_between(a: &str, b: &str) -> Result<String> {
    KeyGenerator::default().key_between(a, b)
}

/// `n` ascending base62 keys strictly between `a` and `b` (empty = unbounded)
///
/// ```
/// use synckit_order_keys::n_keys_between;
///
/// assert_eq!(
///     n_keys_between("", "", 5).unwrap(),
///     vec!["a0", "a1", "a2", "a3", "a4"]
/// );
/// ```
pub fn n_keys_between(a: &str, b: &str, n: usize) -> Result<Vec<String>> {
    KeyGenerator::default().n_keys_between(a, b, n)
}
