//! Easing curves for value animation.
//!
//! Every curve maps normalized progress in [0, 1] to shaped progress in
//! [0, 1] and is monotonic, so tweened values never reverse mid-run.

/// Easing curve selection for tweens and fades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Quartic ease-out, the default for animated numbers
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Apply this curve to normalized progress in [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
            Easing::EaseOutQuart => ease_out_quart(t),
        }
    }
}

/// Linear interpolation between two values
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Cubic ease-in (slow start, accelerates)
fn ease_in(t: f64) -> f64 {
    t * t * t
}

/// Cubic ease-out (fast start, decelerates)
fn ease_out(t: f64) -> f64 {
    let t1 = t - 1.0;
    t1 * t1 * t1 + 1.0
}

/// Cubic ease-in-out (slow at both ends)
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = 2.0 * t - 2.0;
        0.5 * t1 * t1 * t1 + 1.0
    }
}

/// Quartic ease-out: f(x) = 1 - (1 - x)^4
fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < f64::EPSILON);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < f64::EPSILON);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < f64::EPSILON);
        assert!((lerp(50.0, 150.0, 0.25) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_curves_hit_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutQuart,
        ];
        for curve in curves {
            assert!((curve.apply(0.0) - 0.0).abs() < f64::EPSILON, "{:?}", curve);
            assert!((curve.apply(1.0) - 1.0).abs() < f64::EPSILON, "{:?}", curve);
        }
    }

    #[test]
    fn test_ease_out_quart_shape() {
        // Front-loaded: well past linear at the midpoint
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < f64::EPSILON);
        assert!(Easing::EaseOutQuart.apply(0.25) > 0.25);
        assert!(Easing::EaseOutQuart.apply(0.75) > 0.75);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < f64::EPSILON);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
        assert!(Easing::EaseInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn test_curves_are_monotonic() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutQuart,
        ];
        for curve in curves {
            let mut previous = curve.apply(0.0);
            for step in 1..=100 {
                let t = f64::from(step) / 100.0;
                let value = curve.apply(t);
                assert!(
                    value >= previous,
                    "{:?} decreased between {} and {}",
                    curve,
                    t - 0.01,
                    t
                );
                previous = value;
            }
        }
    }

    #[test]
    fn test_default_is_ease_out_quart() {
        assert_eq!(Easing::default(), Easing::EaseOutQuart);
    }
}
