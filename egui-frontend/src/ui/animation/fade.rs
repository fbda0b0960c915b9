//! Entrance fades for dashboard cards.
//!
//! Cards fade in and slide up a short distance when a view mounts, with a
//! per-card delay so a column of cards arrives as a cascade.

use std::time::{Duration, Instant};

use crate::ui::animation::easing::Easing;

/// Default fade-in length
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(600);

/// Delay step between consecutive cards
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Vertical travel distance while fading in, in points
const SLIDE_DISTANCE: f32 = 20.0;

/// One card's entrance animation, armed at mount time
#[derive(Debug, Clone)]
pub struct EntranceFade {
    mounted_at: Instant,
    delay: Duration,
    duration: Duration,
}

impl EntranceFade {
    pub fn new(now: Instant) -> Self {
        Self {
            mounted_at: now,
            delay: Duration::ZERO,
            duration: DEFAULT_FADE_DURATION,
        }
    }

    /// Fade for the `index`-th card of a cascade
    pub fn staggered(index: usize, now: Instant) -> Self {
        Self::new(now).with_delay(STAGGER_STEP * index as u32)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    fn progress_at(&self, now: Instant) -> f64 {
        let since_mount = now.saturating_duration_since(self.mounted_at);
        if since_mount < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let active = since_mount - self.delay;
        let progress = (active.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        Easing::EaseOut.apply(progress)
    }

    /// Layer opacity at `now`: 0 until the delay elapses, then eased to 1
    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.progress_at(now) as f32
    }

    /// Downward offset at `now`, shrinking to 0 as the card slides into place
    pub fn offset_at(&self, now: Instant) -> f32 {
        (1.0 - self.progress_at(now)) as f32 * SLIDE_DISTANCE
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.mounted_at) >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_card_is_hidden_until_its_delay() {
        let t0 = Instant::now();
        let fade = EntranceFade::staggered(2, t0);

        assert_eq!(fade.opacity_at(t0), 0.0);
        assert_eq!(fade.opacity_at(t0 + millis(199)), 0.0);
        assert!(fade.opacity_at(t0 + millis(300)) > 0.0);
    }

    #[test]
    fn test_fade_completes_after_delay_plus_duration() {
        let t0 = Instant::now();
        let fade = EntranceFade::staggered(1, t0);

        assert!(!fade.is_complete(t0 + millis(699)));
        assert!(fade.is_complete(t0 + millis(700)));
        assert_eq!(fade.opacity_at(t0 + millis(700)), 1.0);
        assert_eq!(fade.offset_at(t0 + millis(700)), 0.0);
    }

    #[test]
    fn test_opacity_rises_monotonically() {
        let t0 = Instant::now();
        let fade = EntranceFade::new(t0);

        let mut previous = fade.opacity_at(t0);
        for step in 1..=30 {
            let opacity = fade.opacity_at(t0 + millis(step * 20));
            assert!(opacity >= previous);
            previous = opacity;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_offset_shrinks_to_zero() {
        let t0 = Instant::now();
        let fade = EntranceFade::new(t0);

        assert_eq!(fade.offset_at(t0), 20.0);
        let mid = fade.offset_at(t0 + millis(300));
        assert!(mid > 0.0 && mid < 20.0);
        assert_eq!(fade.offset_at(t0 + millis(600)), 0.0);
    }

    #[test]
    fn test_zero_index_card_starts_immediately() {
        let t0 = Instant::now();
        let fade = EntranceFade::staggered(0, t0);

        assert!(fade.opacity_at(t0 + millis(50)) > 0.0);
    }
}
