//! Dataset value codec
//!
//! `data-*` attributes only hold strings. Values are written as JSON unless
//! they already are a string, and read back with a best-effort JSON parse:
//! whatever does not parse comes back as the raw string.

use serde_json::Value;

/// Decodes a raw dataset string.
///
/// # Example
///
/// ```
/// use elkit_core::dataset::decode;
/// use serde_json::json;
///
/// assert_eq!(decode("{\"a\":1}"), json!({ "a": 1 }));
/// assert_eq!(decode("42"), json!(42));
/// assert_eq!(decode("hello"), json!("hello"));
/// ```
pub fn decode(raw: &str) -> Value {
	serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Encodes a value for storage in the dataset.
///
/// Strings are stored verbatim, everything else as JSON text.
pub fn encode(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// Converts an attribute-style name into a `dataset` key.
///
/// Accepts `data-user-id`, `user-id` or `userId` and returns `userId`.
/// A dash is only folded when a lowercase ASCII letter follows it, which is the
/// rule the HTML `data-*` mapping uses.
pub fn dataset_key(name: &str) -> String {
	let name = name.strip_prefix("data-").unwrap_or(name);
	let mut key = String::with_capacity(name.len());
	let mut chars = name.chars().peekable();

	while let Some(c) = chars.next() {
		match (c, chars.peek()) {
			('-', Some(next)) if next.is_ascii_lowercase() => {
				key.push(next.to_ascii_uppercase());
				chars.next();
			}
			_ => key.push(c),
		}
	}

	key
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("{\"open\":true}", json!({ "open": true }))]
	#[case("[1,\"two\"]", json!([1, "two"]))]
	#[case("3.5", json!(3.5))]
	#[case("true", json!(true))]
	#[case("null", Value::Null)]
	#[case("\"quoted\"", json!("quoted"))]
	#[case("plain text", json!("plain text"))]
	#[case("{broken", json!("{broken"))]
	#[case("", json!(""))]
	fn test_decode(#[case] raw: &str, #[case] expected: Value) {
		assert_eq!(decode(raw), expected);
	}

	#[rstest]
	#[case(json!("as-is"), "as-is")]
	#[case(json!({ "a": [1, 2] }), "{\"a\":[1,2]}")]
	#[case(json!(12), "12")]
	#[case(json!(false), "false")]
	#[case(Value::Null, "null")]
	fn test_encode(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(encode(&value), expected);
	}

	#[rstest]
	#[case("userId", "userId")]
	#[case("user-id", "userId")]
	#[case("data-user-id", "userId")]
	#[case("a-b-c", "aBC")]
	#[case("x-1", "x-1")]
	#[case("trailing-", "trailing-")]
	#[case("Upper-Case", "Upper-Case")]
	fn test_dataset_key(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(dataset_key(name), expected);
	}

	proptest! {
		#[test]
		fn prop_decode_never_loses_non_json_text(raw in "[a-zA-Z ]{1,20}") {
			let decoded = decode(&raw);
			// Bare words only parse as JSON when they are keywords
			if !matches!(raw.trim(), "true" | "false" | "null") {
				prop_assert_eq!(decoded, Value::String(raw));
			}
		}
	}
}
