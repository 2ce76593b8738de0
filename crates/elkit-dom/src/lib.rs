//! Elkit DOM - chainable element collections over web-sys
//!
//! Wraps one or more page elements, selected by query or created fresh, in an
//! [`ElementCollection`] that exposes attribute, class, style, traversal,
//! content, dataset, event and visibility operations. Every operation is a
//! direct call into the browser's native DOM API; there is no virtual DOM and
//! no reactive layer.
//!
//! ## Modules
//!
//! - [`document`]: entry points [`q`] and [`create`], global accessors
//! - [`collection`]: the [`ElementCollection`] type and its getters/setters
//! - [`traversal`]: tree navigation returning new collections
//! - [`content`]: insertion of elements and text
//! - [`events`]: listeners, delegated listeners and event synthesis
//! - [`prop`]: reading element properties with computed style fallback
//! - [`logging`]: console logging macros
//!
//! ## Example
//!
//! ```ignore
//! use elkit_dom::{create, q};
//! use elkit_core::TriggerOptions;
//!
//! let list = q("#todo")?;
//! create("li")?
//!     .add_attr([("role", "listitem"), ("tabindex", "0")])?
//!     .add_class(&["todo-item", "pending"])?
//!     .text("Water the plants")?
//!     .append_to(&list)?;
//!
//! list.on("click", "li.pending", |item, _event| {
//!     if let Ok(item) = q(item) {
//!         item.remove_class(&["pending"]).ok();
//!     }
//! })?;
//!
//! q("#todo li")?.first().trigger("click", TriggerOptions::new())?;
//! ```

pub mod collection;
pub mod content;
pub mod document;
pub mod error;
pub mod events;
pub mod logging;
pub mod prop;
pub mod traversal;

pub use collection::ElementCollection;
pub use content::Content;
pub use document::{IntoElements, create, document, q, window};
pub use error::{DomError, Result};
pub use events::{EventListener, build_event};
pub use prop::PropValue;

// Re-exported for the logging macros
#[doc(hidden)]
pub use web_sys as __web_sys;

/// Installs `console_error_panic_hook` so panics show up readably in the
/// browser console. A no-op unless the `console_error_panic_hook` feature is
/// enabled.
pub fn init_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}
