//! SyncKit Order Keys - fractional indexing for ordered sequences
//!
//! Generates short string keys that sort between any two existing keys,
//! so items in a collaboratively edited list can be positioned without
//! renumbering their neighbours. Keys compare with ordinary byte-wise
//! string comparison; store them in a text column and sort by it.
//!
//! It implements:
//! - Self-delimiting integer parts with variable-length magnitude classes
//! - Increment/decrement across class boundaries
//! - Fractional midpoints between digit strings
//! - Single-key and batch generation between optional bounds
//!
//! # Examples
//!
//! ```rust
//! use synckit_order_keys::{key_between, n_keys_between};
//!
//! let first = key_between("", "").unwrap();
//! assert_eq!(first, "a0");
//!
//! let second = key_between(&first, "").unwrap();
//! let middle = key_between(&first, &second).unwrap();
//! assert!(first < middle && middle < second);
//!
//! let batch = n_keys_between("", "a0", 5).unwrap();
//! assert_eq!(batch, vec!["Zv", "Zw", "Zx", "Zy", "Zz"]);
//! ```
//!
//! The library keeps no state. Resolving two replicas that insert at the
//! same position concurrently (and so may produce equal keys) is left to
//! the calling sync layer.

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod integer;
pub mod key;
pub mod midpoint;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use alphabet::{Alphabet, BASE62_DIGITS};
pub use error::{KeyError, Result};
pub use generator::{key_between, n_keys_between, KeyGenerator};
pub use key::{validate_key, OrderKey, ZERO_KEY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        assert_eq!(key_between("", "").unwrap(), ZERO_KEY);
        assert_eq!(OrderKey::first().as_str(), ZERO_KEY);
    }
}
