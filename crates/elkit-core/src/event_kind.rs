//! Event constructor families
//!
//! Browsers only populate event-specific fields (coordinates, key codes,
//! animation names) when the event is built with the matching constructor.
//! When elkit synthesises an event it first picks the constructor family from
//! a fixed table; names that are not in any table become `CustomEvent`s.

const MOUSE_EVENTS: &[&str] = &[
	"click",
	"dblclick",
	"contextmenu",
	"mousedown",
	"mouseenter",
	"mouseleave",
	"mousemove",
	"mouseover",
	"mouseout",
	"mouseup",
];

const BASIC_EVENTS: &[&str] = &[
	"abort",
	"afterprint",
	"beforeprint",
	"beforeunload",
	"canplay",
	"canplaythrough",
	"change",
	"ended",
	"error",
	"fullscreenchange",
	"fullscreenerror",
	"input",
	"invalid",
	"load",
	"loadeddata",
	"loadedmetadata",
	"message",
	"offline",
	"online",
	"open",
	"pause",
	"play",
	"playing",
	"progress",
	"ratechange",
	"resize",
	"reset",
	"scroll",
	"search",
	"seeked",
	"seeking",
	"select",
	"show",
	"stalled",
	"submit",
	"suspend",
	"timeupdate",
	"toggle",
	"unload",
	"waiting",
	"volumechange",
];

const FOCUS_EVENTS: &[&str] = &["blur", "focus", "focusin", "focusout"];

const DRAG_EVENTS: &[&str] = &[
	"drag",
	"dragend",
	"dragenter",
	"dragleave",
	"dragover",
	"dragstart",
	"drop",
];

// `input` is listed under BASIC_EVENTS first and therefore never reaches here.
const INPUT_EVENTS: &[&str] = &["beforeinput", "input"];

const KEYBOARD_EVENTS: &[&str] = &["keydown", "keypress", "keyup"];

const ANIMATION_EVENTS: &[&str] = &["animationend", "animationiteration", "animationstart"];

/// The native constructor used to synthesise an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFamily {
	/// `MouseEvent`
	Mouse,
	/// Plain `Event`
	Basic,
	/// `FocusEvent`
	Focus,
	/// `DragEvent`
	Drag,
	/// `InputEvent`
	Input,
	/// `KeyboardEvent`
	Keyboard,
	/// `AnimationEvent`
	Animation,
	/// `CustomEvent`, for every name outside the built-in tables
	Custom,
}

impl EventFamily {
	/// Lookup order. The first table containing the name wins.
	const TABLES: [(EventFamily, &'static [&'static str]); 7] = [
		(EventFamily::Mouse, MOUSE_EVENTS),
		(EventFamily::Basic, BASIC_EVENTS),
		(EventFamily::Focus, FOCUS_EVENTS),
		(EventFamily::Drag, DRAG_EVENTS),
		(EventFamily::Input, INPUT_EVENTS),
		(EventFamily::Keyboard, KEYBOARD_EVENTS),
		(EventFamily::Animation, ANIMATION_EVENTS),
	];

	/// Returns the constructor family for an event name.
	///
	/// Matching is exact and case-sensitive, like `addEventListener`.
	///
	/// # Example
	///
	/// ```
	/// use elkit_core::EventFamily;
	///
	/// assert_eq!(EventFamily::for_type("keydown"), EventFamily::Keyboard);
	/// assert_eq!(EventFamily::for_type("input"), EventFamily::Basic);
	/// assert_eq!(EventFamily::for_type("Click"), EventFamily::Custom);
	/// ```
	pub fn for_type(event_type: &str) -> Self {
		Self::TABLES
			.iter()
			.find(|(_, names)| names.contains(&event_type))
			.map(|(family, _)| *family)
			.unwrap_or(EventFamily::Custom)
	}

	/// The DOM interface name of the constructor.
	pub fn constructor_name(&self) -> &'static str {
		match self {
			Self::Mouse => "MouseEvent",
			Self::Basic => "Event",
			Self::Focus => "FocusEvent",
			Self::Drag => "DragEvent",
			Self::Input => "InputEvent",
			Self::Keyboard => "KeyboardEvent",
			Self::Animation => "AnimationEvent",
			Self::Custom => "CustomEvent",
		}
	}

	/// Returns true for every family except [`EventFamily::Custom`].
	pub fn is_builtin(&self) -> bool {
		!matches!(self, Self::Custom)
	}
}

impl std::fmt::Display for EventFamily {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.constructor_name())
	}
}
