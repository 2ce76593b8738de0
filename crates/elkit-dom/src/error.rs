//! Error type for DOM operations.

use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while talking to the DOM.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomError {
	/// There is no global `window` (e.g. running in a worker or natively).
	#[error("No global window is available")]
	NoWindow,
	/// The window has no document.
	#[error("The window has no document")]
	NoDocument,
	/// A DOM call threw. Holds the exception message.
	#[error("JavaScript error: {0}")]
	Js(String),
	/// The element lacks a property the operation needs.
	#[error("Element <{tag}> does not support {what}")]
	Unsupported {
		/// The missing capability, e.g. `"inline style"`.
		what: &'static str,
		/// Tag name of the element.
		tag: String,
	},
}

impl From<JsValue> for DomError {
	fn from(value: JsValue) -> Self {
		Self::Js(describe(&value))
	}
}

/// Best-effort text for a thrown JavaScript value.
fn describe(value: &JsValue) -> String {
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		let name = String::from(error.name());
		let message = String::from(error.message());
		return format!("{}: {}", name, message);
	}
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Result alias used throughout elkit-dom.
pub type Result<T> = std::result::Result<T, DomError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_display_messages() {
		assert_eq!(
			DomError::NoWindow.to_string(),
			"No global window is available"
		);
		assert_eq!(
			DomError::Js("SyntaxError: bad selector".into()).to_string(),
			"JavaScript error: SyntaxError: bad selector"
		);
		assert_eq!(
			DomError::Unsupported {
				what: "dataset",
				tag: "math".into(),
			}
			.to_string(),
			"Element <math> does not support dataset"
		);
	}
}
