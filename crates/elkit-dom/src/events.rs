//! Event listeners and event synthesis
//!
//! Listeners registered through [`ElementCollection::event`] and
//! [`ElementCollection::on`] stay attached for the lifetime of the element;
//! the browser releases them together with the element. When the caller needs
//! to detach a listener, [`ElementCollection::listen`] hands back
//! [`EventListener`] guards that remove the listener on drop.
//!
//! [`ElementCollection::trigger`] builds the native event whose constructor
//! matches the event name (see [`EventFamily`]) and dispatches it. Members in
//! the `init` map of [`TriggerOptions`] are copied onto the init dictionary
//! first, so `key` reaches a `KeyboardEvent` and `clientX` a `MouseEvent`.

use std::rc::Rc;

use elkit_core::{EventFamily, TriggerOptions};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
	AnimationEvent, AnimationEventInit, CustomEvent, CustomEventInit, DragEvent, DragEventInit,
	Element, Event, EventInit, EventTarget, FocusEvent, FocusEventInit, InputEvent,
	InputEventInit, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit, Node,
};

use crate::collection::ElementCollection;
use crate::error::Result;
use crate::{debug_log, warn_log};

/// A registered event listener.
///
/// Dropping the guard removes the listener. Call [`forget`](Self::forget) to
/// keep it attached for the rest of the page's life.
pub struct EventListener {
	target: EventTarget,
	event_type: String,
	closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
	/// Registers `handler` for `event_type` on `target`.
	pub fn new<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Self>
	where
		F: FnMut(Event) + 'static,
	{
		let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
		target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event_type: event_type.to_string(),
			closure: Some(closure),
		})
	}

	/// The event type this listener is registered for.
	pub fn event_type(&self) -> &str {
		&self.event_type
	}

	/// Keeps the listener attached without holding the guard.
	pub fn forget(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		if let Some(closure) = self.closure.take()
			&& let Err(err) = self
				.target
				.remove_event_listener_with_callback(&self.event_type, closure.as_ref().unchecked_ref())
		{
			warn_log!("removing '{}' listener failed: {:?}", self.event_type, err);
		}
	}
}

impl std::fmt::Debug for EventListener {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventListener")
			.field("event_type", &self.event_type)
			.field("attached", &self.closure.is_some())
			.finish()
	}
}

impl ElementCollection {
	/// Adds a listener to every element.
	///
	/// ```ignore
	/// q("button.save")?.event("click", |event| save(event))?;
	/// ```
	pub fn event<F>(&self, event_type: &str, handler: F) -> Result<&Self>
	where
		F: Fn(Event) + 'static,
	{
		for listener in self.listen(event_type, handler)? {
			listener.forget();
		}
		Ok(self)
	}

	/// Adds a listener to every element and returns the guards.
	pub fn listen<F>(&self, event_type: &str, handler: F) -> Result<Vec<EventListener>>
	where
		F: Fn(Event) + 'static,
	{
		let handler = Rc::new(handler);
		self.elements()
			.iter()
			.map(|element| {
				let handler = Rc::clone(&handler);
				EventListener::new(element, event_type, move |event| handler(event))
			})
			.collect()
	}

	/// Adds a delegated listener to every element.
	///
	/// `handler(target, event)` runs only when the event's target is a
	/// descendant of the listening element and matches `selector`.
	///
	/// ```ignore
	/// q("#menu")?.on("click", "a.item", |item, _event| activate(&item))?;
	/// ```
	pub fn on<F>(&self, event_type: &str, selector: &str, handler: F) -> Result<&Self>
	where
		F: Fn(Element, Event) + 'static,
	{
		let handler = Rc::new(handler);
		for element in self.elements() {
			let root = element.clone();
			let selector = selector.to_string();
			let handler = Rc::clone(&handler);
			EventListener::new(element, event_type, move |event: Event| {
				let Some(target) = event
					.target()
					.and_then(|target| target.dyn_into::<Element>().ok())
				else {
					return;
				};
				let target_node: &Node = &target;
				if target == root || !root.contains(Some(target_node)) {
					return;
				}
				match target.matches(&selector) {
					Ok(true) => handler(target, event),
					Ok(false) => {}
					Err(err) => warn_log!("delegated selector {:?} failed: {:?}", selector, err),
				}
			})?
			.forget();
		}
		Ok(self)
	}

	/// Builds the event for `event_type` and dispatches it on every element.
	///
	/// ```ignore
	/// form.trigger("submit", TriggerOptions::new().cancelable(true))?;
	/// widget.trigger("widget:ready", TriggerOptions::new().detail(json!({ "id": 1 })))?;
	/// field.trigger("keydown", TriggerOptions::new().init("key", "Enter"))?;
	/// ```
	pub fn trigger(&self, event_type: &str, options: TriggerOptions) -> Result<&Self> {
		debug_log!(
			"dispatching '{}' as {} on {} element(s)",
			event_type,
			EventFamily::for_type(event_type),
			self.len()
		);
		self.try_each(|element| {
			let event = build_event(event_type, &options)?;
			element.dispatch_event(&event)?;
			Ok(())
		})
	}
}

macro_rules! init_dict {
	($init:ty, $options:expr) => {{
		let init = <$init>::new();
		assign_members(&init, $options)?;
		init.set_bubbles($options.bubbles);
		init.set_cancelable($options.cancelable);
		init.set_composed($options.composed);
		init
	}};
}

/// Copies the interface-specific members of `options` onto `init`.
fn assign_members(init: &js_sys::Object, options: &TriggerOptions) -> Result<()> {
	if options.init.is_empty() {
		return Ok(());
	}
	let members = js_sys::JSON::parse(&Value::Object(options.init.clone()).to_string())?;
	js_sys::Object::assign(init, members.unchecked_ref());
	Ok(())
}

/// Builds an untrusted event of the family matching `event_type`.
pub fn build_event(event_type: &str, options: &TriggerOptions) -> Result<Event> {
	let event: Event = match EventFamily::for_type(event_type) {
		EventFamily::Mouse => MouseEvent::new_with_mouse_event_init_dict(
			event_type,
			&init_dict!(MouseEventInit, options),
		)?
		.into(),
		EventFamily::Basic => {
			Event::new_with_event_init_dict(event_type, &init_dict!(EventInit, options))?
		}
		EventFamily::Focus => FocusEvent::new_with_focus_event_init_dict(
			event_type,
			&init_dict!(FocusEventInit, options),
		)?
		.into(),
		EventFamily::Drag => {
			DragEvent::new_with_event_init_dict(event_type, &init_dict!(DragEventInit, options))?
				.into()
		}
		EventFamily::Input => {
			InputEvent::new_with_event_init_dict(event_type, &init_dict!(InputEventInit, options))?
				.into()
		}
		EventFamily::Keyboard => KeyboardEvent::new_with_keyboard_event_init_dict(
			event_type,
			&init_dict!(KeyboardEventInit, options),
		)?
		.into(),
		EventFamily::Animation => AnimationEvent::new_with_event_init_dict(
			event_type,
			&init_dict!(AnimationEventInit, options),
		)?
		.into(),
		EventFamily::Custom => {
			let init = init_dict!(CustomEventInit, options);
			if let Some(detail) = &options.detail {
				init.set_detail(&js_sys::JSON::parse(&detail.to_string())?);
			}
			CustomEvent::new_with_event_init_dict(event_type, &init)?.into()
		}
	};
	Ok(event)
}
