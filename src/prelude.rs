//! Commonly used items.
//!
//! ```rust,ignore
//! use elkit::prelude::*;
//! ```

pub use elkit_core::{EventFamily, IntoAssoc, TriggerOptions};
pub use elkit_dom::{
	Content, DomError, ElementCollection, EventListener, IntoElements, PropValue, create, init_panic_hook, q,
};
