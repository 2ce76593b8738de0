//! The element collection
//!
//! [`ElementCollection`] is an ordered list of zero or more elements. Setters
//! apply to every element and hand the collection back for chaining; getters
//! read the first element and fall back to a neutral value when the collection
//! is empty.
//!
//! Tree navigation lives in [`crate::traversal`], insertion in
//! [`crate::content`], listeners and dispatch in [`crate::events`].

use elkit_core::{IntoAssoc, dataset};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, DomStringMap, Element, HtmlElement, ShadowRootInit, ShadowRootMode};

use crate::document::window;
use crate::error::{DomError, Result};
use crate::{debug_log, warn_log};

/// A chainable, ordered list of DOM elements.
///
/// Cloning the collection clones the element handles, not the elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementCollection {
	elements: Vec<Element>,
}

impl ElementCollection {
	/// Wraps the given elements as-is.
	pub fn new(elements: Vec<Element>) -> Self {
		Self { elements }
	}

	/// An empty collection.
	pub fn empty_set() -> Self {
		Self::default()
	}

	/// Builds a collection keeping only the first occurrence of each element.
	pub(crate) fn unique(elements: impl IntoIterator<Item = Element>) -> Self {
		let mut unique: Vec<Element> = Vec::new();
		for element in elements {
			if !unique.contains(&element) {
				unique.push(element);
			}
		}
		Self { elements: unique }
	}

	/// The wrapped elements.
	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	/// Consumes the collection, returning the elements.
	pub fn into_vec(self) -> Vec<Element> {
		self.elements
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Alias of [`len`](Self::len).
	pub fn length(&self) -> usize {
		self.len()
	}

	/// Returns true when the collection holds no element.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// The element at `index`.
	pub fn get(&self, index: usize) -> Option<Element> {
		self.elements.get(index).cloned()
	}

	/// A collection holding only the element at `index`; empty when out of range.
	#[allow(clippy::should_implement_trait)]
	pub fn eq(&self, index: usize) -> Self {
		Self::new(self.get(index).into_iter().collect())
	}

	/// A collection holding the first element.
	pub fn first(&self) -> Self {
		self.eq(0)
	}

	/// A collection holding the last element.
	pub fn last(&self) -> Self {
		Self::new(self.elements.last().cloned().into_iter().collect())
	}

	pub(crate) fn head(&self) -> Option<&Element> {
		self.elements.first()
	}

	/// Runs a fallible step on every element, stopping at the first error.
	pub(crate) fn try_each(&self, mut step: impl FnMut(&Element) -> Result<()>) -> Result<&Self> {
		for element in &self.elements {
			step(element)?;
		}
		Ok(self)
	}

	// ------------------------------------------------------------------
	// Attributes
	// ------------------------------------------------------------------

	/// Sets one or more attributes on every element.
	///
	/// ```ignore
	/// links.add_attr(("rel", "noopener"))?;
	/// links.add_attr([("target", "_blank"), ("rel", "noopener")])?;
	/// ```
	pub fn add_attr(&self, attributes: impl IntoAssoc) -> Result<&Self> {
		let attributes = attributes.into_assoc();
		self.try_each(|element| {
			for (name, value) in &attributes {
				element.set_attribute(name, value)?;
			}
			Ok(())
		})
	}

	/// The first element's attribute value, or `""`.
	pub fn get_attr(&self, name: &str) -> String {
		self.head()
			.and_then(|element| element.get_attribute(name))
			.unwrap_or_default()
	}

	/// Removes an attribute from every element.
	pub fn remove_attr(&self, name: &str) -> Result<&Self> {
		self.try_each(|element| Ok(element.remove_attribute(name)?))
	}

	// ------------------------------------------------------------------
	// Classes
	// ------------------------------------------------------------------

	/// Adds classes to every element.
	pub fn add_class(&self, names: &[&str]) -> Result<&Self> {
		self.try_each(|element| {
			let list = element.class_list();
			for name in names {
				list.add_1(name)?;
			}
			Ok(())
		})
	}

	/// Removes classes from every element.
	pub fn remove_class(&self, names: &[&str]) -> Result<&Self> {
		self.try_each(|element| {
			let list = element.class_list();
			for name in names {
				list.remove_1(name)?;
			}
			Ok(())
		})
	}

	/// Whether the first element has the class.
	pub fn has_class(&self, name: &str) -> bool {
		self.head()
			.map(|element| element.class_list().contains(name))
			.unwrap_or(false)
	}

	// ------------------------------------------------------------------
	// Styles
	// ------------------------------------------------------------------

	/// The first element's computed value for a CSS property, or `""`.
	pub fn css(&self, name: &str) -> Result<String> {
		match self.head() {
			Some(element) => computed_property(element, name),
			None => Ok(String::new()),
		}
	}

	/// Sets inline style properties on every element.
	///
	/// ```ignore
	/// panel.set_css(("--accent", "#f60"))?;
	/// panel.set_css([("width", "10rem"), ("margin-top", "4px")])?;
	/// ```
	pub fn set_css(&self, properties: impl IntoAssoc) -> Result<&Self> {
		let properties = properties.into_assoc();
		self.try_each(|element| {
			let style = inline_style(element)?;
			for (name, value) in &properties {
				style.set_property(name, value)?;
			}
			Ok(())
		})
	}

	// ------------------------------------------------------------------
	// Content
	// ------------------------------------------------------------------

	/// The first element's inner HTML, or `""`.
	pub fn html(&self) -> String {
		self.head()
			.map(|element| element.inner_html())
			.unwrap_or_default()
	}

	/// Replaces the inner HTML of every element.
	pub fn set_html(&self, content: &str) -> &Self {
		for element in &self.elements {
			element.set_inner_html(content);
		}
		self
	}

	/// Appends a text node to every element. Empty text is ignored.
	pub fn text(&self, content: &str) -> Result<&Self> {
		if content.is_empty() {
			return Ok(self);
		}
		self.try_each(|element| Ok(element.append_with_str_1(content)?))
	}

	/// Detaches every element from the document.
	pub fn remove(&self) -> &Self {
		for element in &self.elements {
			element.remove();
		}
		self
	}

	/// Removes all children of every element.
	pub fn empty(&self) -> &Self {
		for element in &self.elements {
			element.set_text_content(None);
		}
		self
	}

	// ------------------------------------------------------------------
	// Dataset
	// ------------------------------------------------------------------

	/// Reads a dataset entry from the first element.
	///
	/// The raw string is decoded as JSON when possible. Returns `""` when the
	/// collection is empty or the entry is missing. `name` may be given as
	/// `userId`, `user-id` or `data-user-id`.
	pub fn data(&self, name: &str) -> Result<Value> {
		let Some(element) = self.head() else {
			return Ok(Value::String(String::new()));
		};
		let raw = dataset_of(element)?
			.get(&dataset::dataset_key(name))
			.unwrap_or_default();
		Ok(dataset::decode(&raw))
	}

	/// Writes a dataset entry on every element.
	///
	/// Strings are stored verbatim, any other value as JSON.
	///
	/// ```ignore
	/// card.set_data("user", serde_json::json!({ "id": 3, "name": "Ana" }))?;
	/// card.set_data("state", "open")?;
	/// ```
	pub fn set_data(&self, name: &str, value: impl Into<Value>) -> Result<&Self> {
		let key = dataset::dataset_key(name);
		let encoded = dataset::encode(&value.into());
		self.try_each(|element| Ok(dataset_of(element)?.set(&key, &encoded)?))
	}

	// ------------------------------------------------------------------
	// Visibility
	// ------------------------------------------------------------------

	/// Sets `display: none` on every element.
	pub fn hide(&self) -> Result<&Self> {
		self.try_each(|element| Ok(inline_style(element)?.set_property("display", "none")?))
	}

	/// Clears the inline `display` of every element.
	pub fn show(&self) -> Result<&Self> {
		self.try_each(|element| {
			inline_style(element)?.remove_property("display")?;
			Ok(())
		})
	}

	/// Whether the first element is rendered and visible.
	///
	/// Uses `Element.checkVisibility` with opacity and visibility checks when
	/// the browser provides it, otherwise inspects the computed style.
	pub fn is_visible(&self) -> Result<bool> {
		let Some(element) = self.head() else {
			return Ok(false);
		};

		let check = js_sys::Reflect::get(element, &JsValue::from_str("checkVisibility"))?;
		if let Some(check) = check.dyn_ref::<js_sys::Function>() {
			let options = js_sys::Object::new();
			js_sys::Reflect::set(
				&options,
				&JsValue::from_str("opacityProperty"),
				&JsValue::from_bool(true),
			)?;
			js_sys::Reflect::set(
				&options,
				&JsValue::from_str("visibilityProperty"),
				&JsValue::from_bool(true),
			)?;
			return Ok(check.call1(element, &options)?.as_bool().unwrap_or(false));
		}

		debug_log!("checkVisibility unavailable, using computed style");
		if !element.is_connected() {
			return Ok(false);
		}
		let hidden = computed_property(element, "display")? == "none"
			|| computed_property(element, "visibility")? == "hidden"
			|| computed_property(element, "opacity")? == "0";
		Ok(!hidden)
	}

	// ------------------------------------------------------------------
	// Shadow DOM
	// ------------------------------------------------------------------

	/// Gives the first element an open shadow root holding `html`.
	///
	/// An existing shadow root is reused rather than attached twice.
	pub fn shadow_view(&self, html: &str) -> Result<&Self> {
		let Some(element) = self.head() else {
			return Ok(self);
		};
		let root = match element.shadow_root() {
			Some(root) => {
				debug_log!("reusing shadow root of <{}>", element.tag_name());
				root
			}
			None => element.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
		};
		root.set_inner_html(html);
		Ok(self)
	}
}

impl From<Element> for ElementCollection {
	fn from(element: Element) -> Self {
		Self::new(vec![element])
	}
}

impl From<Vec<Element>> for ElementCollection {
	fn from(elements: Vec<Element>) -> Self {
		Self::new(elements)
	}
}

impl FromIterator<Element> for ElementCollection {
	fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a ElementCollection {
	type Item = &'a Element;
	type IntoIter = std::slice::Iter<'a, Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}

impl IntoIterator for ElementCollection {
	type Item = Element;
	type IntoIter = std::vec::IntoIter<Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.into_iter()
	}
}

/// The computed value of a CSS property, or `""` when the browser has no
/// computed style for the element.
pub(crate) fn computed_property(element: &Element, name: &str) -> Result<String> {
	match window()?.get_computed_style(element)? {
		Some(style) => Ok(style.get_property_value(name)?),
		None => Ok(String::new()),
	}
}

/// The inline style declaration of an HTML or SVG element.
fn inline_style(element: &Element) -> Result<CssStyleDeclaration> {
	if let Some(html) = element.dyn_ref::<HtmlElement>() {
		return Ok(html.style());
	}
	js_sys::Reflect::get(element, &JsValue::from_str("style"))?
		.dyn_into::<CssStyleDeclaration>()
		.map_err(|_| {
			warn_log!("<{}> has no inline style", element.tag_name());
			DomError::Unsupported {
				what: "inline style",
				tag: element.tag_name(),
			}
		})
}

/// The dataset map of an HTML or SVG element.
fn dataset_of(element: &Element) -> Result<DomStringMap> {
	if let Some(html) = element.dyn_ref::<HtmlElement>() {
		return Ok(html.dataset());
	}
	js_sys::Reflect::get(element, &JsValue::from_str("dataset"))?
		.dyn_into::<DomStringMap>()
		.map_err(|_| DomError::Unsupported {
			what: "dataset",
			tag: element.tag_name(),
		})
}
