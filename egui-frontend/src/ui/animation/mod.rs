//! # Animation Module
//!
//! Value animation for the dashboard: eased number tweens, entrance fades,
//! and the id-keyed registry that widgets sample each frame.
//!
//! All animation state is sampled against an explicit `Instant`, so the same
//! code drives the live frame loop and simulated-time tests.

pub mod easing;
pub mod fade;
pub mod registry;
pub mod tween;

pub use easing::Easing;
pub use fade::EntranceFade;
pub use registry::AnimationRegistry;
pub use tween::{NumberTween, DEFAULT_TWEEN_DURATION};
