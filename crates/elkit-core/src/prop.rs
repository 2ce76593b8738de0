//! Numeric prefix parsing for computed style values.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^([0-9.]+)").expect("valid leading number pattern"));

/// Parses the numeric prefix of a computed style value.
///
/// Returns `None` when the value does not start with a digit or dot, or when
/// the prefix is not a valid float.
///
/// # Example
///
/// ```
/// use elkit_core::leading_number;
///
/// assert_eq!(leading_number("12.5px"), Some(12.5));
/// assert_eq!(leading_number("0"), Some(0.0));
/// assert_eq!(leading_number("auto"), None);
/// ```
pub fn leading_number(raw: &str) -> Option<f64> {
	LEADING_NUMBER
		.captures(raw)
		.and_then(|caps| caps.get(1))
		.and_then(|prefix| prefix.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("16px", Some(16.0))]
	#[case("0.5", Some(0.5))]
	#[case(".75em", Some(0.75))]
	#[case("100%", Some(100.0))]
	#[case("1.2.3", None)]
	#[case("-4px", None)]
	#[case("rgb(0, 0, 0)", None)]
	#[case("block", None)]
	#[case("", None)]
	fn test_leading_number(#[case] raw: &str, #[case] expected: Option<f64>) {
		assert_eq!(leading_number(raw), expected);
	}

	proptest! {
		#[test]
		fn prop_integer_prefix_is_parsed(n in 0u32..1_000_000, unit in "[a-z%]{0,3}") {
			let raw = format!("{}{}", n, unit);
			prop_assert_eq!(leading_number(&raw), Some(f64::from(n)));
		}
	}
}
