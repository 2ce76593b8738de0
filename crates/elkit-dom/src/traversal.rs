//! Tree navigation
//!
//! Every method here returns a new [`ElementCollection`]. Results gathered
//! from several source elements are de-duplicated, keeping the first
//! occurrence, and missing nodes (no parent, no match) are dropped.

use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, HtmlCollection, Node};

use crate::collection::ElementCollection;
use crate::document::{html_collection_elements, node_list_elements};
use crate::error::Result;

impl ElementCollection {
	/// Direct children of every element, optionally filtered by selector.
	pub fn children(&self, selector: Option<&str>) -> Result<Self> {
		let mut found = Vec::new();
		for element in self {
			for child in html_collection_elements(&element.children()) {
				if matches_optional(&child, selector)? {
					found.push(child);
				}
			}
		}
		Ok(Self::unique(found))
	}

	/// The closest ancestor-or-self of every element matching `selector`.
	pub fn closest(&self, selector: &str) -> Result<Self> {
		let mut found = Vec::new();
		for element in self {
			if let Some(ancestor) = element.closest(selector)? {
				found.push(ancestor);
			}
		}
		Ok(Self::unique(found))
	}

	/// The parent element of every element.
	pub fn parent(&self) -> Self {
		Self::unique(self.elements().iter().filter_map(|element| element.parent_element()))
	}

	/// Siblings of every element, excluding the element itself, optionally
	/// filtered by selector.
	pub fn siblings(&self, selector: Option<&str>) -> Result<Self> {
		let mut found = Vec::new();
		for element in self {
			let Some(siblings) = element.parent_node().as_ref().and_then(element_children) else {
				continue;
			};
			for sibling in html_collection_elements(&siblings) {
				if &sibling != element && matches_optional(&sibling, selector)? {
					found.push(sibling);
				}
			}
		}
		Ok(Self::unique(found))
	}

	/// Previous siblings of every element, nearest first, up to but excluding
	/// the first one matching `selector`. With no selector, all previous
	/// siblings are returned.
	pub fn prev_until(&self, selector: Option<&str>) -> Result<Self> {
		let mut found = Vec::new();
		for element in self {
			let mut current = element.previous_element_sibling();
			while let Some(sibling) = current {
				if let Some(selector) = selector
					&& sibling.matches(selector)?
				{
					break;
				}
				current = sibling.previous_element_sibling();
				found.push(sibling);
			}
		}
		Ok(Self::unique(found))
	}

	/// Descendants of every element matching `selector`.
	pub fn find(&self, selector: &str) -> Result<Self> {
		let mut found = Vec::new();
		for element in self {
			found.extend(node_list_elements(&element.query_selector_all(selector)?));
		}
		Ok(Self::unique(found))
	}

	/// Whether any element matches `selector`.
	pub fn matches(&self, selector: &str) -> Result<bool> {
		for element in self {
			if element.matches(selector)? {
				return Ok(true);
			}
		}
		Ok(false)
	}

	/// Keeps the elements for which `predicate(element, index)` holds.
	pub fn filter(&self, mut predicate: impl FnMut(&Element, usize) -> bool) -> Self {
		self.elements()
			.iter()
			.enumerate()
			.filter(|(index, element)| predicate(element, *index))
			.map(|(_, element)| element.clone())
			.collect()
	}

	/// Calls `callback(element, index)` for every element.
	pub fn each(&self, mut callback: impl FnMut(&Element, usize)) -> &Self {
		for (index, element) in self.elements().iter().enumerate() {
			callback(element, index);
		}
		self
	}

	/// Position of the first element among its parent's element children.
	///
	/// `None` when the collection is empty or the element is detached.
	pub fn child_index(&self) -> Option<usize> {
		let element = self.head()?;
		let siblings = element_children(&element.parent_node()?)?;
		html_collection_elements(&siblings)
			.iter()
			.position(|sibling| sibling == element)
	}
}

fn matches_optional(element: &Element, selector: Option<&str>) -> Result<bool> {
	match selector {
		Some(selector) => Ok(element.matches(selector)?),
		None => Ok(true),
	}
}

/// Element children of any parent node kind: element, document, or fragment
/// (which covers shadow roots).
fn element_children(parent: &Node) -> Option<HtmlCollection> {
	if let Some(element) = parent.dyn_ref::<Element>() {
		return Some(element.children());
	}
	if let Some(document) = parent.dyn_ref::<Document>() {
		return Some(document.children());
	}
	parent
		.dyn_ref::<DocumentFragment>()
		.map(DocumentFragment::children)
}
