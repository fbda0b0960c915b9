//! # Animated Number Module
//!
//! This module renders a number that counts from its previous displayed value
//! toward a target. The headline dashboard figures use it so balances sweep
//! up on mount instead of snapping.
//!
//! ## Purpose:
//! Each display keeps one tween in the animation registry under a stable id.
//! Changing the target mid-run re-baselines from the value currently shown,
//! so updates never jump backwards.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::ui::animation::{AnimationRegistry, Easing, DEFAULT_TWEEN_DURATION};
use crate::ui::format::NumberFormat;

/// A formatted, tweened number label
#[derive(Debug)]
pub struct AnimatedNumber {
    /// Stable id for the tween
    id: egui::Id,
    /// Value the display eases toward
    target: f64,
    /// Formatting applied to every sampled value
    format: NumberFormat,
    font_size: f32,
    color: Option<egui::Color32>,
    duration: Duration,
    easing: Easing,
}

impl AnimatedNumber {
    pub fn new(id_source: impl std::hash::Hash, target: f64) -> Self {
        Self {
            id: egui::Id::new(id_source),
            target,
            format: NumberFormat::default(),
            font_size: 28.0,
            color: None,
            duration: DEFAULT_TWEEN_DURATION,
            easing: Easing::default(),
        }
    }

    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn color(mut self, color: egui::Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sample the tween and render the formatted value
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        animations: &mut AnimationRegistry,
        now: Instant,
    ) -> egui::Response {
        let value = animations.animate_with(self.id, self.target, now, self.duration, self.easing);
        let color = self
            .color
            .unwrap_or_else(|| ui.style().visuals.strong_text_color());

        ui.add(
            egui::Label::new(
                egui::RichText::new(self.format.format(value))
                    .font(egui::FontId::new(
                        self.font_size,
                        egui::FontFamily::Proportional,
                    ))
                    .strong()
                    .color(color),
            )
            .selectable(false),
        )
    }
}
