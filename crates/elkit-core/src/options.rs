//! Options for synthesised events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Init options applied to an event built by `trigger`.
///
/// Defaults to a bubbling, non-cancelable, non-composed event without detail.
/// Builder methods override individual fields on top of those defaults.
///
/// Fields specific to an event interface (`key`, `clientX`, `animationName`,
/// ...) go in the `init` map and are copied onto the native init
/// dictionary as given.
///
/// # Example
///
/// ```
/// use elkit_core::TriggerOptions;
/// use serde_json::json;
///
/// let options = TriggerOptions::new()
///     .cancelable(true)
///     .detail(json!({ "id": 7 }));
///
/// assert!(options.bubbles);
/// assert!(options.cancelable);
/// assert_eq!(options.detail, Some(json!({ "id": 7 })));
///
/// let enter = TriggerOptions::new().init("key", "Enter");
/// assert_eq!(enter.init["key"], "Enter");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerOptions {
	/// Whether the event bubbles. Defaults to `true`.
	pub bubbles: bool,
	/// Whether the event can be cancelled.
	pub cancelable: bool,
	/// Whether the event crosses shadow DOM boundaries.
	pub composed: bool,
	/// Payload for `CustomEvent.detail`. Ignored by built-in families.
	pub detail: Option<Value>,
	/// Interface-specific init members, keyed by their DOM names.
	#[serde(flatten)]
	pub init: Map<String, Value>,
}

impl Default for TriggerOptions {
	fn default() -> Self {
		Self {
			bubbles: true,
			cancelable: false,
			composed: false,
			detail: None,
			init: Map::new(),
		}
	}
}

impl TriggerOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the bubbles option.
	pub fn bubbles(mut self, bubbles: bool) -> Self {
		self.bubbles = bubbles;
		self
	}

	/// Sets the cancelable option.
	pub fn cancelable(mut self, cancelable: bool) -> Self {
		self.cancelable = cancelable;
		self
	}

	/// Sets the composed option.
	pub fn composed(mut self, composed: bool) -> Self {
		self.composed = composed;
		self
	}

	/// Sets the custom event detail.
	pub fn detail(mut self, detail: impl Into<Value>) -> Self {
		self.detail = Some(detail.into());
		self
	}

	/// Sets an interface-specific init member such as `key` or `clientX`.
	///
	/// `bubbles`, `cancelable` and `composed` set here are overridden by the
	/// dedicated fields.
	pub fn init(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.init.insert(name.into(), value.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_defaults_bubble() {
		let options = TriggerOptions::default();
		assert!(options.bubbles);
		assert!(!options.cancelable);
		assert!(!options.composed);
		assert!(options.detail.is_none());
		assert!(options.init.is_empty());
	}

	#[rstest]
	fn test_builder_overrides_defaults() {
		let options = TriggerOptions::new().bubbles(false).composed(true);
		assert!(!options.bubbles);
		assert!(options.composed);
		assert!(!options.cancelable);
	}

	#[rstest]
	fn test_partial_json_merges_over_defaults() {
		let options: TriggerOptions =
			serde_json::from_value(json!({ "cancelable": true, "detail": [1, 2] })).unwrap();
		assert!(options.bubbles);
		assert!(options.cancelable);
		assert_eq!(options.detail, Some(json!([1, 2])));
	}

	#[rstest]
	fn test_unknown_json_members_are_kept_as_init() {
		let options: TriggerOptions =
			serde_json::from_value(json!({ "key": "Enter", "clientX": 10, "cancelable": true }))
				.unwrap();
		assert!(options.cancelable);
		assert_eq!(options.init.get("key"), Some(&json!("Enter")));
		assert_eq!(options.init.get("clientX"), Some(&json!(10)));
		assert!(!options.init.contains_key("cancelable"));

		let round_trip = serde_json::to_value(&options).unwrap();
		assert_eq!(round_trip["key"], json!("Enter"));
		assert_eq!(round_trip["clientX"], json!(10));
	}

	#[rstest]
	fn test_init_builder_accumulates() {
		let options = TriggerOptions::new()
			.init("key", "a")
			.init("repeat", true)
			.init("key", "b");
		assert_eq!(options.init.len(), 2);
		assert_eq!(options.init["key"], json!("b"));
		assert_eq!(options.init["repeat"], json!(true));
	}
}
