//! WASM bindings for order key generation
//!
//! This module provides JavaScript-friendly bindings for the key generator.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main functions
#[cfg(feature = "wasm")]
pub use bindings::{generate_key_between, generate_n_keys_between};
