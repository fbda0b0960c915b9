//! # Progress Ring Module
//!
//! This module provides the circular progress ring used across the dashboard
//! for savings goals and the spending analysis score.
//!
//! ## Key Components:
//! - `geometry.rs` - Radius, circumference and dash offset math for the ring
//! - `renderer.rs` - Ring rendering with the animated reveal sweep
//!
//! ## Purpose:
//! Goal cards and the insights panel both show completion as a ring. The
//! geometry is shared so every ring on screen derives its arc from the same
//! dash-offset model.

pub mod geometry;
pub mod renderer;

// Re-export main components
pub use geometry::RingGeometry;
pub use renderer::{ProgressRing, ProgressRingConfig};
