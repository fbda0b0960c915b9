//! # Number Tween
//!
//! Eases a displayed numeric value from its current shown value toward a
//! target over a fixed duration.
//!
//! ## Key Behaviors:
//! - `set_target()` re-arms the run: the value shown at that instant becomes
//!   the new start value and the clock restarts
//! - `value_at()` samples without mutating, so any frame time (real or
//!   simulated) can be replayed
//! - Once elapsed reaches the duration the sample is the target exactly,
//!   with no residual drift
//!
//! The tween owns no timer. The host repaints while `is_settled()` is false
//! and simply stops sampling when the owning view goes away.

use std::time::{Duration, Instant};

use crate::ui::animation::easing::Easing;

/// Default time budget for one animation run
pub const DEFAULT_TWEEN_DURATION: Duration = Duration::from_millis(1000);

/// Eased interpolation of one displayed number
#[derive(Debug, Clone)]
pub struct NumberTween {
    start_value: f64,
    target_value: f64,
    start_time: Instant,
    duration: Duration,
    easing: Easing,
}

impl NumberTween {
    /// Create a settled tween showing `initial`
    pub fn new(initial: f64) -> Self {
        Self {
            start_value: initial,
            target_value: initial,
            start_time: Instant::now(),
            duration: DEFAULT_TWEEN_DURATION,
            easing: Easing::default(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Begin animating toward `target`, ignoring repeats of the current target
    pub fn set_target(&mut self, target: f64, now: Instant) {
        if target == self.target_value {
            return;
        }
        self.retarget(target, now);
    }

    /// Begin animating toward `target` unconditionally. The value displayed
    /// at `now` becomes the new start value, superseding any run in flight.
    pub fn retarget(&mut self, target: f64, now: Instant) {
        debug_assert!(target.is_finite(), "tween target must be finite");
        self.start_value = self.value_at(now);
        self.start_time = now;
        self.target_value = target;
    }

    /// Sample the displayed value at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.target_value;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return self.target_value;
        }
        let eased = self.easing.apply(progress);
        self.start_value + (self.target_value - self.start_value) * eased
    }

    /// Whether the run has reached its target at `now`
    pub fn is_settled(&self, now: Instant) -> bool {
        self.start_value == self.target_value
            || now.saturating_duration_since(self.start_time) >= self.duration
    }

    pub fn target(&self) -> f64 {
        self.target_value
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_settles_exactly_at_target() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0);
        tween.set_target(1234.56, t0);

        // Exactly at the duration boundary
        assert_eq!(tween.value_at(t0 + millis(1000)), 1234.56);
        // And any time after
        assert_eq!(tween.value_at(t0 + millis(5000)), 1234.56);
        assert!(tween.is_settled(t0 + millis(1000)));

        // Different duration, negative target
        let mut short = NumberTween::new(100.0).with_duration(millis(250));
        short.set_target(-40.0, t0);
        assert_eq!(short.value_at(t0 + millis(250)), -40.0);
        assert!(short.is_settled(t0 + millis(250)));
    }

    #[test]
    fn test_rising_run_is_monotonic() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0);
        tween.set_target(100.0, t0);

        let mut previous = tween.value_at(t0);
        for step in 1..=50 {
            let value = tween.value_at(t0 + millis(step * 20));
            assert!(value >= previous, "value decreased at step {}", step);
            previous = value;
        }
        assert_eq!(previous, 100.0);
    }

    #[test]
    fn test_falling_run_is_monotonic() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(80.0);
        tween.set_target(5.0, t0);

        let mut previous = tween.value_at(t0);
        for step in 1..=50 {
            let value = tween.value_at(t0 + millis(step * 20));
            assert!(value <= previous, "value increased at step {}", step);
            previous = value;
        }
        assert_eq!(previous, 5.0);
    }

    #[test]
    fn test_quart_ease_out_midpoint_value() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0);
        tween.set_target(100.0, t0);

        // progress 0.5 under quartic ease-out: 1 - 0.5^4 = 0.9375
        assert_eq!(tween.value_at(t0 + millis(500)), 93.75);
    }

    #[test]
    fn test_retarget_resets_baseline_to_current_value() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0);
        tween.set_target(100.0, t0);

        // Halfway through, the shown value is 93.75; retargeting to 50 must
        // interpolate from there with a fresh clock
        let t_half = t0 + millis(500);
        assert_eq!(tween.value_at(t_half), 93.75);
        tween.set_target(50.0, t_half);

        assert_eq!(tween.value_at(t_half), 93.75);
        // 500ms into the new run: 93.75 + (50 - 93.75) * 0.9375
        assert_eq!(tween.value_at(t_half + millis(500)), 52.734375);
        // New run settles exactly at its own boundary
        assert_eq!(tween.value_at(t_half + millis(1000)), 50.0);
        assert!(tween.is_settled(t_half + millis(1000)));
    }

    #[test]
    fn test_repeated_target_does_not_restart_the_run() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0);
        tween.set_target(100.0, t0);

        let expected_mid = tween.value_at(t0 + millis(500));
        // Same target supplied mid-run must not reset the clock
        tween.set_target(100.0, t0 + millis(400));
        assert_eq!(tween.value_at(t0 + millis(500)), expected_mid);
        assert_eq!(tween.value_at(t0 + millis(1000)), 100.0);
    }

    #[test]
    fn test_sample_before_start_time_shows_start_value() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(10.0);
        tween.set_target(20.0, t0 + millis(100));

        assert_eq!(tween.value_at(t0), 10.0);
    }

    #[test]
    fn test_zero_duration_snaps_to_target() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0).with_duration(Duration::ZERO);
        tween.set_target(75.0, t0);

        assert_eq!(tween.value_at(t0), 75.0);
        assert!(tween.is_settled(t0));
    }

    #[test]
    fn test_linear_easing_midpoint() {
        let t0 = Instant::now();
        let mut tween = NumberTween::new(0.0).with_easing(Easing::Linear);
        tween.set_target(100.0, t0);

        assert_eq!(tween.value_at(t0 + millis(500)), 50.0);
    }
}
