// Copyright 2026 Cyvance Security
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for cyvance-site component tests.
//
// Provides mount/cleanup helpers and synthetic event construction so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use web_sys::{MouseEvent, MouseEventInit};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let the Yew scheduler flush renders and effects.
pub async fn flush() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

pub async fn sleep_ms(ms: u64) {
    yew::platform::time::sleep(Duration::from_millis(ms)).await;
}

/// Dispatch a bubbling, cancelable click on `target`.
///
/// Returns `false` when some listener called `preventDefault` — the signal
/// the hash-link tests assert on.
pub fn click(target: &web_sys::Element) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Current inline `overflow` value on `document.body`.
pub fn body_overflow() -> String {
    gloo_utils::document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap_or_default()
}
