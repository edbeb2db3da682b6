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

//! Scroll spy: tracks which page section is current while the user scrolls.
//!
//! [`resolve_active`] is the pure decision: a section is current once the
//! scroll offset plus a fixed lookahead has passed its top edge, and the
//! last section in document order satisfying that wins. [`ScrollSpy`] wires
//! the decision to `scroll`/`resize` events, batching all work through a
//! single animation frame per burst of events.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use super::anchor::section_top;
use super::smooth::current_scroll_y;

/// Which of the ordered `(id, top)` pairs is current at `scroll`.
///
/// The comparison is `scroll + lookahead >= top`: a section activates the
/// moment its top edge crosses the lookahead line. Ties between sections
/// whose thresholds have all been passed go to the furthest-down section.
pub fn resolve_active<'a>(
    tops: &[(&'a str, f64)],
    scroll: f64,
    lookahead: f64,
) -> Option<&'a str> {
    let mut active = None;
    for (id, top) in tops {
        if scroll + lookahead >= *top {
            active = Some(*id);
        }
    }
    active
}

struct SpyState {
    ids: &'static [&'static str],
    lookahead: f64,
    ticking: bool,
    raf_id: Option<i32>,
    active: Option<String>,
    on_change: Callback<Option<String>>,
    tick: Option<Closure<dyn FnMut(f64)>>,
}

/// Watches window scroll/resize and reports the current section id through
/// a [`Callback`], emitting only when the id actually changes.
///
/// Section tops are re-read from live DOM layout on every evaluation, so
/// content growing or shrinking above a section never desynchronises the
/// highlight. Dropping the spy removes both listeners and cancels any
/// queued frame.
pub struct ScrollSpy {
    state: Rc<RefCell<SpyState>>,
    listener: Closure<dyn FnMut()>,
}

impl ScrollSpy {
    pub fn new(
        ids: &'static [&'static str],
        lookahead: f64,
        on_change: Callback<Option<String>>,
    ) -> Self {
        let state = Rc::new(RefCell::new(SpyState {
            ids,
            lookahead,
            ticking: false,
            raf_id: None,
            active: None,
            on_change,
            tick: None,
        }));

        let tick = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_now: f64| {
                Self::evaluate(&state);
            }) as Box<dyn FnMut(f64)>)
        };
        state.borrow_mut().tick = Some(tick);

        // One frame of work per burst of events; extra events while a frame
        // is queued are coalesced by the ticking flag.
        let listener = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move || {
                let mut st = state.borrow_mut();
                if st.ticking {
                    return;
                }
                st.ticking = true;
                if let Some(tick) = st.tick.as_ref() {
                    st.raf_id = gloo_utils::window()
                        .request_animation_frame(tick.as_ref().unchecked_ref())
                        .ok();
                }
            }) as Box<dyn FnMut()>)
        };

        let window = gloo_utils::window();
        let _ = window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());

        let spy = Self { state, listener };
        // Initial state, before any scroll event arrives.
        Self::evaluate(&spy.state);
        spy
    }

    /// The most recently resolved section id.
    pub fn active(&self) -> Option<String> {
        self.state.borrow().active.clone()
    }

    fn evaluate(state: &Rc<RefCell<SpyState>>) {
        let (ids, lookahead) = {
            let mut st = state.borrow_mut();
            st.ticking = false;
            st.raf_id = None;
            (st.ids, st.lookahead)
        };

        let scroll = current_scroll_y();
        let tops: Vec<(&str, f64)> = ids
            .iter()
            .filter_map(|id| section_top(id).map(|top| (*id, top)))
            .collect();
        let next = resolve_active(&tops, scroll, lookahead).map(str::to_owned);

        // Emit outside the borrow; the callback may re-render consumers.
        let changed = {
            let mut st = state.borrow_mut();
            if st.active != next {
                st.active.clone_from(&next);
                Some(st.on_change.clone())
            } else {
                None
            }
        };
        if let Some(on_change) = changed {
            on_change.emit(next);
        }
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        let window = gloo_utils::window();
        let _ = window.remove_event_listener_with_callback(
            "scroll",
            self.listener.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "resize",
            self.listener.as_ref().unchecked_ref(),
        );
        let mut st = self.state.borrow_mut();
        if let Some(id) = st.raf_id.take() {
            let _ = gloo_utils::window().cancel_animation_frame(id);
        }
        st.tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_active;

    const TOPS: [(&str, f64); 3] = [("a", 0.0), ("b", 500.0), ("c", 1200.0)];

    #[test]
    fn top_of_page_reports_first_section() {
        assert_eq!(resolve_active(&TOPS, 0.0, 80.0), Some("a"));
    }

    #[test]
    fn mid_section_reports_that_section() {
        assert_eq!(resolve_active(&TOPS, 550.0, 80.0), Some("b"));
    }

    #[test]
    fn lookahead_boundary_is_inclusive() {
        // 1110 + 80 < 1200: still in "b".
        assert_eq!(resolve_active(&TOPS, 1110.0, 80.0), Some("b"));
        // 1120 + 80 == 1200: "c" activates exactly on the boundary.
        assert_eq!(resolve_active(&TOPS, 1120.0, 80.0), Some("c"));
    }

    #[test]
    fn last_passed_section_wins() {
        assert_eq!(resolve_active(&TOPS, 5000.0, 80.0), Some("c"));
    }

    #[test]
    fn empty_list_has_no_active_section() {
        assert_eq!(resolve_active(&[], 300.0, 80.0), None);
    }

    #[test]
    fn scrolled_above_first_section_is_none() {
        let tops = [("services", 900.0), ("contact", 2200.0)];
        assert_eq!(resolve_active(&tops, 0.0, 80.0), None);
    }
}
