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

//! Animated window scrolling.
//!
//! [`ScrollJob`] is the pure half: it samples an eased position from
//! animation-frame timestamps. [`SmoothScroll`] is the DOM driver that owns
//! the `requestAnimationFrame` loop. A driver runs at most one job; starting
//! a new one supersedes whatever is in flight.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::easing::{ease_in_out_quart, Easing, Tween};

/// One in-flight scroll animation. The start timestamp is captured from the
/// first frame the job is sampled on, so a job created outside a frame
/// callback does not count queueing latency against its duration.
#[derive(Debug, Clone, Copy)]
pub struct ScrollJob {
    tween: Tween,
    started_at_ms: Option<f64>,
}

impl ScrollJob {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            tween: Tween::new(from, to, duration_ms, easing),
            started_at_ms: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.tween.to
    }

    /// Position for the frame at `now_ms`, plus whether the job finished.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let started = *self.started_at_ms.get_or_insert(now_ms);
        self.tween.sample(now_ms - started)
    }
}

struct DriverState {
    job: Option<ScrollJob>,
    raf_id: Option<i32>,
    tick: Option<Closure<dyn FnMut(f64)>>,
}

/// Drives the window's vertical scroll position toward a target.
///
/// Dropping the driver cancels any pending frame, releasing the scroll
/// position wherever the last frame left it.
pub struct SmoothScroll {
    state: Rc<RefCell<DriverState>>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(DriverState {
                job: None,
                raf_id: None,
                tick: None,
            })),
        }
    }

    /// Animate from the current scroll offset to `target` over
    /// `duration_ms`. Supersedes any running job. A non-positive duration
    /// jumps immediately.
    pub fn animate_to(&self, target: f64, duration_ms: f64) {
        self.cancel();
        let from = current_scroll_y();
        if duration_ms <= 0.0 {
            set_scroll_y(target);
            return;
        }

        {
            let mut st = self.state.borrow_mut();
            st.job = Some(ScrollJob::new(from, target, duration_ms, ease_in_out_quart));
            if st.tick.is_none() {
                st.tick = Some(Self::make_tick(Rc::clone(&self.state)));
            }
        }
        self.schedule_frame();
    }

    /// Abandon the in-flight job, leaving the scroll position as-is.
    pub fn cancel(&self) {
        let mut st = self.state.borrow_mut();
        if let Some(id) = st.raf_id.take() {
            let _ = gloo_utils::window().cancel_animation_frame(id);
        }
        st.job = None;
    }

    fn schedule_frame(&self) {
        let mut st = self.state.borrow_mut();
        if let Some(tick) = st.tick.as_ref() {
            st.raf_id = gloo_utils::window()
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn make_tick(state: Rc<RefCell<DriverState>>) -> Closure<dyn FnMut(f64)> {
        Closure::wrap(Box::new(move |now_ms: f64| {
            let sampled = {
                let mut st = state.borrow_mut();
                st.raf_id = None;
                st.job.as_mut().map(|job| job.sample(now_ms))
            };
            let Some((position, done)) = sampled else {
                return;
            };
            set_scroll_y(position);
            let mut st = state.borrow_mut();
            if done {
                st.job = None;
            } else if st.raf_id.is_none() {
                if let Some(tick) = st.tick.as_ref() {
                    st.raf_id = gloo_utils::window()
                        .request_animation_frame(tick.as_ref().unchecked_ref())
                        .ok();
                }
            }
        }) as Box<dyn FnMut(f64)>)
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.cancel();
        // The tick closure holds an Rc back to the state; taking it out
        // breaks the cycle.
        self.state.borrow_mut().tick = None;
    }
}

/// Delegate to the browser's own smooth scrolling. Used when no custom
/// duration is requested.
pub fn scroll_to_native_smooth(target: f64) {
    let options = ScrollToOptions::new();
    options.set_top(target);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

pub fn current_scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}

fn set_scroll_y(y: f64) {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::easing::linear;

    #[test]
    fn job_reaches_target_within_duration() {
        let mut job = ScrollJob::new(0.0, 1000.0, 480.0, linear);
        // First sample pins the start timestamp.
        let (start, done) = job.sample(10_000.0);
        assert_eq!(start, 0.0);
        assert!(!done);
        // One frame past the duration the position is exactly the target.
        let (end, done) = job.sample(10_000.0 + 480.0 + 16.0);
        assert_eq!(end, 1000.0);
        assert!(done);
    }

    #[test]
    fn job_never_overshoots() {
        let mut job = ScrollJob::new(200.0, 1400.0, 300.0, ease_in_out_quart);
        let mut now = 5_000.0;
        loop {
            let (pos, done) = job.sample(now);
            assert!(pos <= 1400.0 + 1e-9, "overshot: {pos}");
            assert!(pos >= 200.0 - 1e-9);
            if done {
                assert!((pos - 1400.0).abs() < 1e-9);
                break;
            }
            now += 16.0;
        }
    }

    #[test]
    fn start_timestamp_comes_from_first_frame() {
        let mut job = ScrollJob::new(0.0, 100.0, 200.0, linear);
        let (_, _) = job.sample(777.0);
        let (mid, _) = job.sample(777.0 + 100.0);
        assert!((mid - 50.0).abs() < 1e-9);
    }
}
