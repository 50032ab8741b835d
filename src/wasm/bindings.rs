//! JavaScript bindings for key generation
//!
//! `null` / `undefined` bounds mean unbounded. Errors are thrown as strings
//! carrying the Rust error message.

use crate::error::KeyError;
use crate::generator::{key_between, n_keys_between};
use wasm_bindgen::prelude::*;

fn to_js(err: KeyError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Key strictly between `a` and `b`
#[wasm_bindgen(js_name = generateKeyBetween)]
pub fn generate_key_between(a: Option<String>, b: Option<String>) -> Result<String, JsValue> {
    key_between(a.as_deref().unwrap_or(""), b.as_deref().unwrap_or("")).map_err(to_js)
}

/// `n` ascending keys strictly between `a` and `b`
#[wasm_bindgen(js_name = generateNKeysBetween)]
pub fn generate_n_keys_between(
    a: Option<String>,
    b: Option<String>,
    n: u32,
) -> Result<Vec<String>, JsValue> {
    n_keys_between(
        a.as_deref().unwrap_or(""),
        b.as_deref().unwrap_or(""),
        n as usize,
    )
    .map_err(to_js)
}
