// SPDX-License-Identifier: MIT OR Apache-2.0

//! Easing curves and clamped interpolation.
//!
//! Everything here is pure math so the animation behavior can be tested
//! without a browser. Curves map clamped progress `t in [0, 1]` to eased
//! progress with `f(0) = 0` and `f(1) = 1`.

pub type Easing = fn(f64) -> f64;

pub fn linear(t: f64) -> f64 {
    t
}

/// Fast start, gentle landing. Used for counters and short scrolls.
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Symmetric acceleration/deceleration. Used for long in-page scrolls.
pub fn ease_in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u * u / 2.0
    }
}

/// Interpolation between two values over a fixed duration.
///
/// `sample` clamps elapsed time to `[0, duration]`, so the output never
/// leaves the `[from, to]` interval and lands exactly on `to` once the
/// duration has fully elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    /// Value at `elapsed_ms` since the tween started. Returns the value and
    /// whether the tween has completed.
    pub fn sample(&self, elapsed_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = (self.easing)(t).clamp(0.0, 1.0);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for f in [linear as Easing, ease_out_cubic, ease_in_out_quart] {
            assert!((f(0.0)).abs() < 1e-9);
            assert!((f(1.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn curves_are_monotone() {
        for f in [linear as Easing, ease_out_cubic, ease_in_out_quart] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = f(i as f64 / 100.0);
                assert!(v >= prev - 1e-9, "curve decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn tween_lands_on_target_and_never_overshoots() {
        let tween = Tween::new(100.0, 900.0, 500.0, ease_in_out_quart);
        let mut prev = 100.0;
        for step in 0..=60 {
            // 16 ms frames, deliberately running past the duration.
            let (v, _) = tween.sample(step as f64 * 16.0);
            assert!(v >= prev - 1e-9);
            assert!(v <= 900.0 + 1e-9, "overshot at {step}: {v}");
            prev = v;
        }
        let (end, done) = tween.sample(500.0);
        assert!(done);
        assert!((end - 900.0).abs() < 1e-9);
    }

    #[test]
    fn tween_handles_downward_scrolls() {
        let tween = Tween::new(800.0, 0.0, 300.0, ease_out_cubic);
        let (mid, done) = tween.sample(150.0);
        assert!(!done);
        assert!(mid < 800.0 && mid >= 0.0);
        let (end, done) = tween.sample(10_000.0);
        assert!(done);
        assert_eq!(end, 0.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let tween = Tween::new(0.0, 400.0, 0.0, linear);
        assert_eq!(tween.sample(0.0), (400.0, true));
    }
}
