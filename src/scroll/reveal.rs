/*
 * Copyright 2026 Cyvance Security
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Visibility-triggered reveal of marked elements.
//!
//! Each revealable element runs a tiny state machine: `Pending` until its
//! first intersection with the viewport, `Triggered` forever after. The
//! transition fires exactly once; the element is unobserved as soon as it
//! triggers, and late or duplicate observer callbacks are no-ops.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

/// Lifecycle of one revealable element. There is no way back from
/// `Triggered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Pending,
    Triggered,
}

impl RevealPhase {
    /// Feed one intersection observation through the state machine.
    /// Returns `true` when this observation is the one that reveals the
    /// element.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if *self == RevealPhase::Pending && is_intersecting {
            *self = RevealPhase::Triggered;
            true
        } else {
            false
        }
    }
}

/// Observer geometry. The default bottom margin pulls the trigger line 40px
/// up from the viewport edge so elements reveal slightly before they are
/// fully on-screen, at 10% intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px -40px 0px",
            threshold: 0.1,
        }
    }
}

/// One `IntersectionObserver` watching one element.
///
/// Emits `on_trigger` the first time the element intersects, unobserves it,
/// and ignores everything after that. Dropping the handle disconnects the
/// observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Returns `None` when the observer cannot be constructed (API absent);
    /// callers treat that as "reveal immediately skipped", keeping content
    /// readable.
    pub fn observe(
        target: &Element,
        options: &RevealOptions,
        on_trigger: Callback<()>,
    ) -> Option<Self> {
        let phase = Rc::new(RefCell::new(RevealPhase::Pending));

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let fired = phase.borrow_mut().on_intersection(entry.is_intersecting());
                    if fired {
                        observer.unobserve(&entry.target());
                        on_trigger.emit(());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::RevealPhase;

    #[test]
    fn triggers_on_first_intersection_only() {
        let mut phase = RevealPhase::Pending;
        assert!(!phase.on_intersection(false));
        assert_eq!(phase, RevealPhase::Pending);

        assert!(phase.on_intersection(true));
        assert_eq!(phase, RevealPhase::Triggered);

        // Duplicate callbacks after the trigger change nothing.
        assert!(!phase.on_intersection(true));
        assert!(!phase.on_intersection(false));
        assert_eq!(phase, RevealPhase::Triggered);
    }

    #[test]
    fn leaving_the_viewport_never_resets() {
        let mut phase = RevealPhase::Pending;
        assert!(phase.on_intersection(true));
        assert!(!phase.on_intersection(false));
        assert!(!phase.on_intersection(true));
    }
}
