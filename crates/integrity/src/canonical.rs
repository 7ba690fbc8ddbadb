//! Canonical JSON encoding used as HMAC input
//!
//! The issuer and the verifier must produce byte-identical text for
//! structurally equal payloads, so the encoding is pinned exactly:
//!
//! - object keys sorted by Unicode code point at every nesting depth,
//!   including objects inside arrays, applied recursively before
//!   serialization
//! - array element order preserved
//! - compact separators (`,` and `:`), no whitespace between tokens
//! - scalars in serde_json's compact literal form: strings escaped per JSON
//!   with non-ASCII kept as raw UTF-8, integers in decimal, floats in
//!   shortest round-trip form, `true`/`false`/`null`
//! - timestamps are signed as the RFC 3339 strings the issuer serialized
//!   them to, so the canonicalizer sees them as ordinary strings
//!
//! Any drift from these rules on either side shows up as a spurious
//! integrity failure, never as silently accepted data.

use serde_json::{Map, Value};

/// Serialize a JSON value to its canonical textual form.
///
/// Pure and deterministic: repeated calls on the same input, or on any
/// key-order permutation of a structurally equal input, return byte-identical
/// strings.
pub fn canonicalize(value: &Value) -> String {
	sort_keys_deep(value).to_string()
}

/// Recursively rebuild a value with object keys in code-point order.
///
/// `String` ordering in Rust is byte-wise over UTF-8, which coincides with
/// Unicode code-point order, so a plain sort matches the issuer's key sort.
fn sort_keys_deep(value: &Value) -> Value {
	match value {
		Value::Object(map) => {
			let mut entries: Vec<(&String, &Value)> = map.iter().collect();
			entries.sort_by(|a, b| a.0.cmp(b.0));

			let mut sorted = Map::new();
			for (key, child) in entries {
				sorted.insert(key.clone(), sort_keys_deep(child));
			}
			Value::Object(sorted)
		},
		Value::Array(items) => Value::Array(items.iter().map(sort_keys_deep).collect()),
		scalar => scalar.clone(),
	}
}
