//! Elkit Core - target-independent building blocks
//!
//! The pieces of elkit that do not touch the browser. Everything here compiles
//! and is tested on native targets; `elkit-dom` layers the `web-sys` calls on
//! top.
//!
//! ## Modules
//!
//! - [`event_kind`]: maps an event name to the native constructor family used
//!   when synthesising events
//! - [`options`]: options merged into a synthesised event
//! - [`assoc`]: normalises "one pair or many pairs" arguments
//! - [`dataset`]: best-effort JSON codec for `data-*` values
//! - [`prop`]: numeric prefix parsing for computed style values
//!
//! ## Example
//!
//! ```
//! use elkit_core::{EventFamily, IntoAssoc, dataset};
//!
//! assert_eq!(EventFamily::for_type("click"), EventFamily::Mouse);
//! assert_eq!(EventFamily::for_type("my-event"), EventFamily::Custom);
//!
//! let pairs = ("role", "button").into_assoc();
//! assert_eq!(pairs, vec![("role".to_string(), "button".to_string())]);
//!
//! assert_eq!(dataset::decode("[1,2]"), serde_json::json!([1, 2]));
//! ```

pub mod assoc;
pub mod dataset;
pub mod event_kind;
pub mod options;
pub mod prop;

pub use assoc::IntoAssoc;
pub use event_kind::EventFamily;
pub use options::TriggerOptions;
pub use prop::leading_number;
