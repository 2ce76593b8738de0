//! Browser tests for listeners, delegation and event synthesis

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use elkit_core::TriggerOptions;
use elkit_dom::{ElementCollection, build_event, create, document};
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{AnimationEvent, CustomEvent, Element, Event, KeyboardEvent, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> ElementCollection {
	let container = create("div").unwrap();
	container.set_html(html);
	let body = Element::from(document().unwrap().body().unwrap());
	container.append_to(body).unwrap();
	container
}

#[wasm_bindgen_test]
fn test_build_event_picks_constructor() {
	let options = TriggerOptions::new();
	let cases = [
		("click", "MouseEvent"),
		("submit", "Event"),
		("focus", "FocusEvent"),
		("drop", "DragEvent"),
		("beforeinput", "InputEvent"),
		("keyup", "KeyboardEvent"),
		("animationend", "AnimationEvent"),
		("app:ready", "CustomEvent"),
	];
	for (name, constructor) in cases {
		let event = build_event(name, &options).unwrap();
		let actual = js_sys::Object::get_prototype_of(&event)
			.constructor()
			.name();
		assert_eq!(String::from(actual), constructor, "event '{}'", name);
		assert_eq!(event.type_(), name);
		assert!(event.bubbles());
	}
}

#[wasm_bindgen_test]
fn test_build_event_applies_options() {
	let options = TriggerOptions::new().bubbles(false).cancelable(true);
	let event = build_event("change", &options).unwrap();
	assert!(!event.bubbles());
	assert!(event.cancelable());
}

#[wasm_bindgen_test]
fn test_build_event_applies_interface_members() {
	let key = build_event("keydown", &TriggerOptions::new().init("key", "Enter").init("shiftKey", true))
		.unwrap()
		.dyn_into::<KeyboardEvent>()
		.unwrap();
	assert_eq!(key.key(), "Enter");
	assert!(key.shift_key());

	let click = build_event("click", &TriggerOptions::new().init("clientX", 10).init("clientY", 4))
		.unwrap()
		.dyn_into::<MouseEvent>()
		.unwrap();
	assert_eq!(click.client_x(), 10);
	assert_eq!(click.client_y(), 4);

	let animation = build_event("animationend", &TriggerOptions::new().init("animationName", "fade"))
		.unwrap()
		.dyn_into::<AnimationEvent>()
		.unwrap();
	assert_eq!(animation.animation_name(), "fade");
}

#[wasm_bindgen_test]
fn test_dedicated_fields_win_over_init_members() {
	let options = TriggerOptions::new().init("bubbles", true).bubbles(false);
	let event = build_event("keyup", &options).unwrap();
	assert!(!event.bubbles());
}

#[wasm_bindgen_test]
fn test_trigger_delivers_key_to_listener() {
	let field = create("input").unwrap();
	let keys = Rc::new(RefCell::new(Vec::new()));

	let log = Rc::clone(&keys);
	field
		.event("keydown", move |event: Event| {
			if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
				log.borrow_mut().push(key.key());
			}
		})
		.unwrap()
		.trigger("keydown", TriggerOptions::new().init("key", "Enter"))
		.unwrap();

	assert_eq!(*keys.borrow(), vec!["Enter"]);
}

#[wasm_bindgen_test]
fn test_custom_event_carries_detail() {
	let options = TriggerOptions::new().detail(json!({ "id": 7 }));
	let event = build_event("item:select", &options).unwrap();
	let detail = event.dyn_into::<CustomEvent>().unwrap().detail();
	let id = js_sys::Reflect::get(&detail, &"id".into()).unwrap();
	assert_eq!(id.as_f64(), Some(7.0));
}

#[wasm_bindgen_test]
fn test_event_and_trigger() {
	let button = create("button").unwrap();
	let hits = Rc::new(RefCell::new(Vec::new()));

	let log = Rc::clone(&hits);
	button
		.event("click", move |event: Event| log.borrow_mut().push(event.type_()))
		.unwrap()
		.trigger("click", TriggerOptions::new())
		.unwrap()
		.trigger("click", TriggerOptions::new())
		.unwrap();

	assert_eq!(*hits.borrow(), vec!["click", "click"]);
}

#[wasm_bindgen_test]
fn test_trigger_bubbles_to_ancestor() {
	let root = mount(r#"<div class="t-outer"><span class="t-inner"></span></div>"#);
	let count = Rc::new(RefCell::new(0));

	let seen = Rc::clone(&count);
	root.find(".t-outer")
		.unwrap()
		.event("app:ping", move |_| *seen.borrow_mut() += 1)
		.unwrap();

	let inner = root.find(".t-inner").unwrap();
	inner.trigger("app:ping", TriggerOptions::new()).unwrap();
	inner
		.trigger("app:ping", TriggerOptions::new().bubbles(false))
		.unwrap();

	assert_eq!(*count.borrow(), 1);
	root.remove();
}

#[wasm_bindgen_test]
fn test_listen_guard_detaches_on_drop() {
	let div = create("div").unwrap();
	let count = Rc::new(RefCell::new(0));

	let seen = Rc::clone(&count);
	let guards = div
		.listen("app:tick", move |_| *seen.borrow_mut() += 1)
		.unwrap();
	assert_eq!(guards.len(), 1);
	assert_eq!(guards[0].event_type(), "app:tick");

	div.trigger("app:tick", TriggerOptions::new()).unwrap();
	drop(guards);
	div.trigger("app:tick", TriggerOptions::new()).unwrap();

	assert_eq!(*count.borrow(), 1);
}

#[wasm_bindgen_test]
fn test_on_delegates_to_matching_descendants() {
	let root = mount(
		r#"<ul class="t-menu">
			<li class="item"><b class="label">one</b></li>
			<li class="item">two</li>
			<li class="other">three</li>
		</ul>"#,
	);
	let menu = root.find(".t-menu").unwrap();
	let hits = Rc::new(RefCell::new(Vec::new()));

	let log = Rc::clone(&hits);
	menu.on("click", "li.item", move |target, _event| {
		log.borrow_mut().push(target.text_content().unwrap_or_default())
	})
	.unwrap();

	root.find("li").unwrap().trigger("click", TriggerOptions::new()).unwrap();
	// Clicking a child of a match does not count: the target itself must match
	root.find(".label").unwrap().trigger("click", TriggerOptions::new()).unwrap();
	// The listening element itself is never a delegate target
	menu.trigger("click", TriggerOptions::new()).unwrap();

	assert_eq!(*hits.borrow(), vec!["one", "two"]);
	root.remove();
}
