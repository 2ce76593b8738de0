//! # Elkit
//!
//! A small, chainable DOM helper for Rust frontends compiled to WebAssembly.
//!
//! Elkit wraps page elements, selected by query or created fresh, in an
//! [`ElementCollection`] and exposes the everyday operations on them:
//! attributes, classes, inline and computed styles, tree navigation, content
//! insertion, `data-*` values, listeners, event synthesis and visibility.
//! Each operation delegates straight to the browser's DOM API.
//!
//! ## Crates
//!
//! - [`core`]: target-independent helpers (event constructor table, dataset
//!   codec, key/value normalisation)
//! - [`dom`]: the `web-sys` backed collection
//!
//! ## Feature Flags
//!
//! - `debug-hooks`: print `debug_log!` output in debug builds
//! - `console_error_panic_hook`: make [`init_panic_hook`] install readable
//!   panic messages in the browser console
//!
//! ## Example
//!
//! ```rust,ignore
//! use elkit::prelude::*;
//!
//! fn mount_banner() -> Result<(), DomError> {
//!     init_panic_hook();
//!
//!     let banner = create("aside")?;
//!     banner
//!         .add_attr([("role", "status"), ("aria-live", "polite")])?
//!         .add_class(&["banner"])?
//!         .set_css(("padding", "1rem"))?
//!         .text("Saved")?
//!         .prepend_to("main")?;
//!
//!     banner.event("click", |_| {
//!         if let Ok(banner) = q(".banner") {
//!             banner.remove();
//!         }
//!     })?;
//!
//!     q("main form")?.on("input", "input[required]", |field, _| {
//!         if let Ok(field) = q(field) {
//!             field.set_data("dirty", true).ok();
//!         }
//!     })?;
//!
//!     banner.trigger("banner:shown", TriggerOptions::new().detail(1))?;
//!     Ok(())
//! }
//! ```

pub use elkit_core as core;
pub use elkit_dom as dom;

pub use elkit_core::{EventFamily, IntoAssoc, TriggerOptions};
pub use elkit_dom::{
	Content, DomError, ElementCollection, EventListener, IntoElements, PropValue, build_event,
	create, document, init_panic_hook, q, window,
};

pub mod prelude;

#[cfg(test)]
mod tests {
	use crate::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("dblclick", EventFamily::Mouse)]
	#[case("reset", EventFamily::Basic)]
	#[case("keydown", EventFamily::Keyboard)]
	#[case("todo:added", EventFamily::Custom)]
	fn test_event_family_through_prelude(#[case] name: &str, #[case] expected: EventFamily) {
		assert_eq!(EventFamily::for_type(name), expected);
	}

	#[rstest]
	fn test_trigger_options_through_facade() {
		let options = crate::TriggerOptions::default().init("key", "Enter");
		assert!(options.bubbles);
		assert!(options.detail.is_none());
		assert_eq!(options.init["key"], "Enter");
	}

	#[rstest]
	fn test_core_modules_reachable() {
		assert_eq!(crate::core::dataset::dataset_key("data-row-id"), "rowId");
		assert_eq!(crate::core::leading_number("3rem"), Some(3.0));
		assert_eq!(
			[("a", 1), ("b", 2)].into_assoc(),
			vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
		);
	}

	#[rstest]
	fn test_content_from_text() {
		assert_eq!(Content::from("hi"), Content::Text("hi".to_string()));
	}

	#[rstest]
	fn test_dom_error_is_std_error() {
		fn assert_error<E: std::error::Error>(_: &E) {}
		let err = DomError::NoDocument;
		assert_error(&err);
		assert_eq!(err.to_string(), "The window has no document");
	}
}
