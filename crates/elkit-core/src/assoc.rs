//! Key/value normalisation
//!
//! Setters such as `add_attr` and `set_css` accept either a single pair or a
//! whole map of pairs. [`IntoAssoc`] flattens both shapes into one ordered list
//! so the setter only has a single loop.

use std::collections::{BTreeMap, HashMap};

/// Conversion into an ordered list of `(key, value)` strings.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use elkit_core::IntoAssoc;
///
/// assert_eq!(("width", 10).into_assoc(), vec![("width".into(), "10".into())]);
///
/// let map = BTreeMap::from([("b", "2"), ("a", "1")]);
/// assert_eq!(
///     map.into_assoc(),
///     vec![("a".into(), "1".into()), ("b".into(), "2".into())]
/// );
/// ```
pub trait IntoAssoc {
	/// Converts self into `(key, value)` pairs.
	fn into_assoc(self) -> Vec<(String, String)>;
}

fn pair<K: ToString, V: ToString>((key, value): (K, V)) -> (String, String) {
	(key.to_string(), value.to_string())
}

impl<K: ToString, V: ToString> IntoAssoc for (K, V) {
	fn into_assoc(self) -> Vec<(String, String)> {
		vec![pair(self)]
	}
}

impl<K: ToString, V: ToString> IntoAssoc for Vec<(K, V)> {
	fn into_assoc(self) -> Vec<(String, String)> {
		self.into_iter().map(pair).collect()
	}
}

impl<K: ToString, V: ToString, const N: usize> IntoAssoc for [(K, V); N] {
	fn into_assoc(self) -> Vec<(String, String)> {
		self.into_iter().map(pair).collect()
	}
}

impl<K: ToString, V: ToString> IntoAssoc for &[(K, V)] {
	fn into_assoc(self) -> Vec<(String, String)> {
		self.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect()
	}
}

/// Iteration order of a `HashMap` is unspecified; use a `BTreeMap` or a list
/// when the order of application matters.
impl<K: ToString, V: ToString, S> IntoAssoc for HashMap<K, V, S> {
	fn into_assoc(self) -> Vec<(String, String)> {
		self.into_iter().map(pair).collect()
	}
}

impl<K: ToString, V: ToString> IntoAssoc for BTreeMap<K, V> {
	fn into_assoc(self) -> Vec<(String, String)> {
		self.into_iter().map(pair).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_single_pair() {
		assert_eq!(("id", "main").into_assoc(), owned(&[("id", "main")]));
	}

	#[rstest]
	fn test_single_pair_with_numeric_value() {
		assert_eq!(("tabindex", -1).into_assoc(), owned(&[("tabindex", "-1")]));
	}

	#[rstest]
	fn test_array_preserves_order() {
		let pairs = [("z-index", "2"), ("color", "red"), ("a", "b")];
		assert_eq!(pairs.into_assoc(), owned(&pairs));
	}

	#[rstest]
	fn test_slice_and_vec() {
		let pairs = vec![("role", "dialog"), ("aria-modal", "true")];
		assert_eq!(pairs.as_slice().into_assoc(), owned(&pairs));
		assert_eq!(pairs.clone().into_assoc(), owned(&pairs));
	}

	#[rstest]
	fn test_btree_map_sorted_by_key() {
		let map = BTreeMap::from([("title", "x"), ("alt", "y")]);
		assert_eq!(map.into_assoc(), owned(&[("alt", "y"), ("title", "x")]));
	}

	#[rstest]
	fn test_hash_map_contains_every_pair() {
		let map = HashMap::from([("a", "1"), ("b", "2")]);
		let mut pairs = map.into_assoc();
		pairs.sort();
		assert_eq!(pairs, owned(&[("a", "1"), ("b", "2")]));
	}

	#[rstest]
	fn test_empty_vec() {
		let pairs: Vec<(&str, &str)> = Vec::new();
		assert!(pairs.into_assoc().is_empty());
	}
}
