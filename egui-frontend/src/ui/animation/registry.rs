//! Id-keyed tween storage.
//!
//! List rows (goals, budget bars, expense rows) animate without carrying
//! their own tween fields: each widget derives a stable `egui::Id` and
//! samples the registry every frame. Removing an entry is cancellation;
//! nothing fires for an id that is gone.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::ui::animation::easing::Easing;
use crate::ui::animation::tween::NumberTween;

/// Central store of per-widget number tweens
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    tweens: HashMap<egui::Id, NumberTween>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self {
            tweens: HashMap::new(),
        }
    }

    /// Sample the animated value for `id`, easing toward `target` with the
    /// default duration and curve. New entries start from zero, so freshly
    /// mounted displays count up the way the dashboard cards do.
    pub fn animate(&mut self, id: egui::Id, target: f64, now: Instant) -> f64 {
        let tween = self
            .tweens
            .entry(id)
            .or_insert_with(|| NumberTween::new(0.0));
        tween.set_target(target, now);
        tween.value_at(now)
    }

    /// Sample the animated value for `id` with an explicit duration and
    /// easing, applied when the entry is first created.
    pub fn animate_with(
        &mut self,
        id: egui::Id,
        target: f64,
        now: Instant,
        duration: Duration,
        easing: Easing,
    ) -> f64 {
        let tween = self.tweens.entry(id).or_insert_with(|| {
            NumberTween::new(0.0)
                .with_duration(duration)
                .with_easing(easing)
        });
        tween.set_target(target, now);
        tween.value_at(now)
    }

    /// Like [`Self::animate_with`], but each change of target starts its run
    /// `delay` after the frame that observed it. Rings use this to hold at
    /// zero for a beat before the reveal sweeps in.
    pub fn animate_delayed(
        &mut self,
        id: egui::Id,
        target: f64,
        now: Instant,
        delay: Duration,
        duration: Duration,
        easing: Easing,
    ) -> f64 {
        let tween = self.tweens.entry(id).or_insert_with(|| {
            NumberTween::new(0.0)
                .with_duration(duration)
                .with_easing(easing)
        });
        tween.set_target(target, now + delay);
        tween.value_at(now)
    }

    /// Whether the tween for `id` is still mid-run
    pub fn is_animating(&self, id: egui::Id, now: Instant) -> bool {
        self.tweens
            .get(&id)
            .map(|tween| !tween.is_settled(now))
            .unwrap_or(false)
    }

    /// Whether any stored tween is still mid-run (drives repaint requests)
    pub fn any_animating(&self, now: Instant) -> bool {
        self.tweens.values().any(|tween| !tween.is_settled(now))
    }

    /// Drop the tween for `id`, cancelling any run in flight
    pub fn forget(&mut self, id: egui::Id) {
        self.tweens.remove(&id);
    }

    /// Drop every stored tween
    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_new_entries_count_up_from_zero() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        let id = egui::Id::new("balance");

        assert_eq!(registry.animate(id, 100.0, t0), 0.0);
        assert_eq!(registry.animate(id, 100.0, t0 + millis(500)), 93.75);
        assert_eq!(registry.animate(id, 100.0, t0 + millis(1000)), 100.0);
        assert!(!registry.is_animating(id, t0 + millis(1000)));
    }

    #[test]
    fn test_entries_are_independent() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        let a = egui::Id::new("a");
        let b = egui::Id::new("b");

        registry.animate(a, 100.0, t0);
        registry.animate(b, 40.0, t0 + millis(500));

        assert_eq!(registry.animate(a, 100.0, t0 + millis(1000)), 100.0);
        // b started 500ms later and is still mid-run
        assert!(registry.is_animating(b, t0 + millis(1000)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_any_animating_drives_repaints() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        let id = egui::Id::new("net_worth");

        registry.animate(id, 256_320.0, t0);
        assert!(registry.any_animating(t0 + millis(10)));
        assert!(!registry.any_animating(t0 + millis(1000)));
    }

    #[test]
    fn test_forget_cancels_pending_animation() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        let id = egui::Id::new("goal_progress");

        registry.animate(id, 100.0, t0);
        assert!(registry.is_animating(id, t0 + millis(200)));

        // Teardown mid-run: advancing time afterwards finds no state to
        // mutate and no value to report
        registry.forget(id);
        assert!(registry.is_empty());
        assert!(!registry.is_animating(id, t0 + millis(400)));

        // Remounting starts over from zero rather than the cancelled run
        assert_eq!(registry.animate(id, 100.0, t0 + millis(400)), 0.0);
    }

    #[test]
    fn test_animate_with_custom_curve() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        let id = egui::Id::new("ring");

        registry.animate_with(id, 80.0, t0, millis(1000), Easing::Linear);
        assert_eq!(
            registry.animate_with(id, 80.0, t0 + millis(500), millis(1000), Easing::Linear),
            40.0
        );
    }

    #[test]
    fn test_animate_delayed_holds_before_the_run() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        let id = egui::Id::new("savings_ring");
        let sample = |registry: &mut AnimationRegistry, now| {
            registry.animate_delayed(id, 80.0, now, millis(100), millis(1000), Easing::EaseInOut)
        };

        // Held at zero until the delay passes
        assert_eq!(sample(&mut registry, t0), 0.0);
        assert_eq!(sample(&mut registry, t0 + millis(99)), 0.0);

        // Halfway through the run the symmetric curve sits at the midpoint
        assert_eq!(sample(&mut registry, t0 + millis(600)), 40.0);

        // Settles exactly at the target once delay + duration elapse
        assert_eq!(sample(&mut registry, t0 + millis(1100)), 80.0);
        assert!(!registry.is_animating(id, t0 + millis(1100)));
    }

    #[test]
    fn test_clear_removes_everything() {
        let t0 = Instant::now();
        let mut registry = AnimationRegistry::new();
        registry.animate(egui::Id::new("a"), 1.0, t0);
        registry.animate(egui::Id::new("b"), 2.0, t0);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.any_animating(t0));
    }
}
