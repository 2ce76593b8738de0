//! Element properties with computed style fallback.

use elkit_core::leading_number;
use wasm_bindgen::JsValue;

use crate::collection::{ElementCollection, computed_property};
use crate::error::Result;

/// A property value read by [`ElementCollection::prop`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
	/// `null`, `undefined`, a method, or an empty collection.
	Null,
	/// A boolean property such as `checked` or `hidden`.
	Bool(bool),
	/// A numeric property, or a computed style value with a numeric prefix.
	Number(f64),
	/// A string property or a non-numeric computed style value.
	Text(String),
	/// Any other object (e.g. `classList`, `parentNode`).
	Object(JsValue),
}

impl PropValue {
	fn from_js(value: JsValue) -> Self {
		if value.is_null() || value.is_undefined() || value.is_function() {
			return Self::Null;
		}
		if let Some(flag) = value.as_bool() {
			return Self::Bool(flag);
		}
		if let Some(number) = value.as_f64() {
			return Self::Number(number);
		}
		if let Some(text) = value.as_string() {
			return Self::Text(text);
		}
		Self::Object(value)
	}

	/// Parses a computed style value, keeping the numeric prefix when present.
	fn from_computed(raw: String) -> Self {
		match leading_number(&raw) {
			Some(number) => Self::Number(number),
			None => Self::Text(raw),
		}
	}

	/// Returns true for [`PropValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// The numeric value, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// The boolean value, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(flag) => Some(*flag),
			_ => None,
		}
	}

	/// The text value, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}
}

impl ElementCollection {
	/// Reads a property of the first element.
	///
	/// When `name` is a property of the element (`value`, `checked`,
	/// `offsetWidth`, ...) its value is returned, with methods mapped to
	/// [`PropValue::Null`]. Otherwise `name` is looked up as a computed CSS
	/// property; values starting with a number (`"12px"`) come back as
	/// [`PropValue::Number`].
	///
	/// ```ignore
	/// assert_eq!(q("#agree")?.prop("checked")?, PropValue::Bool(true));
	/// assert_eq!(q("#box")?.prop("padding-left")?, PropValue::Number(8.0));
	/// ```
	pub fn prop(&self, name: &str) -> Result<PropValue> {
		let Some(element) = self.head() else {
			return Ok(PropValue::Null);
		};
		let key = JsValue::from_str(name);
		if js_sys::Reflect::has(element, &key)? {
			return Ok(PropValue::from_js(js_sys::Reflect::get(element, &key)?));
		}
		Ok(PropValue::from_computed(computed_property(element, name)?))
	}
}
