//! Insertion of elements and text
//!
//! `append`, `prepend`, `after` and `before` insert [`Content`] relative to
//! every element of the collection. `append_to` and `prepend_to` go the other
//! way and insert the collection's elements into a target.
//!
//! These follow DOM semantics: a node has a single parent, so inserting the
//! same element next to several targets leaves it at the last one. Text is
//! re-created per target.

use web_sys::{Element, Node};

use crate::collection::ElementCollection;
use crate::document::IntoElements;
use crate::error::Result;

/// Something that can be inserted next to, or inside, an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
	/// Existing nodes, inserted in order.
	Nodes(Vec<Node>),
	/// Text, inserted as a new text node.
	Text(String),
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Node> for Content {
	fn from(node: Node) -> Self {
		Self::Nodes(vec![node])
	}
}

impl From<Element> for Content {
	fn from(element: Element) -> Self {
		Self::Nodes(vec![element.into()])
	}
}

impl From<&Element> for Content {
	fn from(element: &Element) -> Self {
		Self::Nodes(vec![element.clone().into()])
	}
}

impl From<&ElementCollection> for Content {
	fn from(collection: &ElementCollection) -> Self {
		Self::Nodes(
			collection
				.elements()
				.iter()
				.map(|element| element.clone().into())
				.collect(),
		)
	}
}

impl From<ElementCollection> for Content {
	fn from(collection: ElementCollection) -> Self {
		Self::from(&collection)
	}
}

#[derive(Debug, Clone, Copy)]
enum Placement {
	Append,
	Prepend,
	After,
	Before,
}

impl Placement {
	fn insert_node(self, anchor: &Element, node: &Node) -> Result<()> {
		match self {
			Self::Append => anchor.append_with_node_1(node)?,
			Self::Prepend => anchor.prepend_with_node_1(node)?,
			Self::After => anchor.after_with_node_1(node)?,
			Self::Before => anchor.before_with_node_1(node)?,
		}
		Ok(())
	}

	fn insert_text(self, anchor: &Element, text: &str) -> Result<()> {
		match self {
			Self::Append => anchor.append_with_str_1(text)?,
			Self::Prepend => anchor.prepend_with_str_1(text)?,
			Self::After => anchor.after_with_str_1(text)?,
			Self::Before => anchor.before_with_str_1(text)?,
		}
		Ok(())
	}

	fn insert(self, anchor: &Element, content: &Content) -> Result<()> {
		match content {
			Content::Nodes(nodes) => {
				for node in nodes {
					self.insert_node(anchor, node)?;
				}
				Ok(())
			}
			Content::Text(text) => self.insert_text(anchor, text),
		}
	}
}

impl ElementCollection {
	fn place(&self, placement: Placement, content: Content) -> Result<&Self> {
		self.try_each(|element| placement.insert(element, &content))
	}

	fn place_into(&self, placement: Placement, target: impl IntoElements) -> Result<&Self> {
		let targets = target.into_elements()?;
		self.try_each(|element| {
			for target in &targets {
				placement.insert_node(target, element)?;
			}
			Ok(())
		})
	}

	/// Appends content as the last children of every element.
	pub fn append(&self, content: impl Into<Content>) -> Result<&Self> {
		self.place(Placement::Append, content.into())
	}

	/// Inserts content as the first children of every element.
	pub fn prepend(&self, content: impl Into<Content>) -> Result<&Self> {
		self.place(Placement::Prepend, content.into())
	}

	/// Inserts content right after every element.
	pub fn after(&self, content: impl Into<Content>) -> Result<&Self> {
		self.place(Placement::After, content.into())
	}

	/// Inserts content right before every element.
	pub fn before(&self, content: impl Into<Content>) -> Result<&Self> {
		self.place(Placement::Before, content.into())
	}

	/// Appends every element of this collection into each target.
	///
	/// ```ignore
	/// create("li")?.text("new")?.append_to("#list")?;
	/// ```
	pub fn append_to(&self, target: impl IntoElements) -> Result<&Self> {
		self.place_into(Placement::Append, target)
	}

	/// Prepends every element of this collection into each target.
	pub fn prepend_to(&self, target: impl IntoElements) -> Result<&Self> {
		self.place_into(Placement::Prepend, target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Content::from("hello"), "hello")]
	#[case(Content::from(String::from("")), "")]
	fn test_text_content_from_strings(#[case] content: Content, #[case] expected: &str) {
		assert_eq!(content, Content::Text(expected.to_string()));
	}
}
