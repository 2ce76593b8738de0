//! Entry points and global accessors.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, NodeList, Window};

use crate::collection::ElementCollection;
use crate::error::{DomError, Result};
use crate::warn_log;

/// Returns the global window.
pub fn window() -> Result<Window> {
	web_sys::window().ok_or(DomError::NoWindow)
}

/// Returns the window's document.
pub fn document() -> Result<Document> {
	window()?.document().ok_or(DomError::NoDocument)
}

/// Creates a new, detached element and wraps it.
///
/// ```ignore
/// let button = elkit_dom::create("button")?;
/// assert_eq!(button.len(), 1);
/// ```
pub fn create(tag: &str) -> Result<ElementCollection> {
	let element = document()?.create_element(tag)?;
	Ok(ElementCollection::from(element))
}

/// Wraps the given elements, or the document elements matching a selector.
///
/// ```ignore
/// let items = elkit_dom::q("ul.menu > li")?;
/// let body = elkit_dom::q(elkit_dom::document()?.body().unwrap().into())?;
/// ```
pub fn q(target: impl IntoElements) -> Result<ElementCollection> {
	Ok(ElementCollection::new(target.into_elements()?))
}

/// Anything [`q`] can wrap.
pub trait IntoElements {
	/// Resolves self into an ordered list of elements.
	fn into_elements(self) -> Result<Vec<Element>>;
}

impl IntoElements for &str {
	fn into_elements(self) -> Result<Vec<Element>> {
		query_all(&document()?, self)
	}
}

impl IntoElements for &String {
	fn into_elements(self) -> Result<Vec<Element>> {
		self.as_str().into_elements()
	}
}

impl IntoElements for Element {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(vec![self])
	}
}

impl IntoElements for &Element {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(vec![self.clone()])
	}
}

impl IntoElements for Vec<Element> {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(self)
	}
}

impl IntoElements for HtmlCollection {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(html_collection_elements(&self))
	}
}

impl IntoElements for NodeList {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(node_list_elements(&self))
	}
}

impl IntoElements for ElementCollection {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(self.into_vec())
	}
}

impl IntoElements for &ElementCollection {
	fn into_elements(self) -> Result<Vec<Element>> {
		Ok(self.elements().to_vec())
	}
}

/// Runs `querySelectorAll` on the document.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
	let node_list = document.query_selector_all(selector).map_err(|err| {
		warn_log!("querySelectorAll({:?}) failed", selector);
		DomError::from(err)
	})?;
	Ok(node_list_elements(&node_list))
}

/// Collects the element nodes of a `NodeList`, skipping text and comments.
pub(crate) fn node_list_elements(node_list: &NodeList) -> Vec<Element> {
	let mut elements = Vec::with_capacity(node_list.length() as usize);
	for i in 0..node_list.length() {
		if let Some(node) = node_list.item(i)
			&& let Some(element) = node.dyn_ref::<Element>()
		{
			elements.push(element.clone());
		}
	}
	elements
}

/// Collects an `HTMLCollection` into a vector.
pub(crate) fn html_collection_elements(collection: &HtmlCollection) -> Vec<Element> {
	(0..collection.length())
		.filter_map(|i| collection.item(i))
		.collect()
}
