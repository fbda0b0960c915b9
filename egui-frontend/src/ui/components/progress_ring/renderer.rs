//! # Progress Ring Renderer
//!
//! This module paints the ring with egui's painting primitives. The filled
//! arc sweeps clockwise from the top, revealed by a tween that holds briefly
//! after mount so cards fade in before their rings start moving.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

use eframe::egui;

use super::geometry::RingGeometry;
use crate::ui::animation::{AnimationRegistry, Easing};

/// Configuration for ring appearance and reveal behavior
#[derive(Debug, Clone)]
pub struct ProgressRingConfig {
    /// Outer size of the ring in points (width and height)
    pub size: f32,
    /// Stroke width for both track and arc
    pub stroke_width: f32,
    /// Track color behind the arc
    pub background_color: egui::Color32,
    /// Arc color
    pub progress_color: egui::Color32,
    /// Whether the arc sweeps in or renders at its final value immediately
    pub animate: bool,
    /// Whether to draw the rounded percentage in the center
    pub show_label: bool,
    /// Font size for the center label
    pub label_font_size: f32,
    /// Hold time before the reveal starts
    pub start_delay: Duration,
    /// Length of the reveal sweep
    pub reveal_duration: Duration,
}

impl Default for ProgressRingConfig {
    fn default() -> Self {
        Self {
            size: 120.0,
            stroke_width: 8.0,
            background_color: egui::Color32::from_rgb(232, 232, 237),
            progress_color: egui::Color32::from_rgb(0, 113, 227),
            animate: true,
            show_label: true,
            label_font_size: 24.0,
            start_delay: Duration::from_millis(100),
            reveal_duration: Duration::from_secs(1),
        }
    }
}

/// Circular progress ring component
#[derive(Debug)]
pub struct ProgressRing {
    /// Stable id for the reveal tween
    id: egui::Id,
    /// Completion percentage; values above 100 paint a full ring
    percentage: f32,
    /// Configuration for appearance
    config: ProgressRingConfig,
}

impl ProgressRing {
    /// Create a new ring with default configuration
    ///
    /// The id keys the reveal tween in the registry. Callers that need to
    /// cancel a ring later must hold on to the same id.
    pub fn new(id: egui::Id, percentage: f32) -> Self {
        Self {
            id,
            percentage,
            config: ProgressRingConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(mut self, config: ProgressRingConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the ring, sampling the reveal tween from the registry
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        animations: &mut AnimationRegistry,
        now: Instant,
    ) -> egui::Response {
        let desired_size = egui::vec2(self.config.size, self.config.size);
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::hover());
        let center = rect.center();

        let displayed = if self.config.animate {
            animations.animate_delayed(
                self.id,
                f64::from(self.percentage),
                now,
                self.config.start_delay,
                self.config.reveal_duration,
                Easing::EaseInOut,
            ) as f32
        } else {
            self.percentage
        };

        let geometry = RingGeometry::new(displayed, self.config.size, self.config.stroke_width);
        let painter = ui.painter();

        // Track circle behind the arc
        painter.circle_stroke(
            center,
            geometry.radius,
            egui::Stroke::new(self.config.stroke_width, self.config.background_color),
        );

        // Filled arc, clockwise from 12 o'clock
        let sweep = geometry.arc_sweep();
        if sweep > 0.0 {
            let start_angle = -PI / 2.0;
            draw_ring_arc(
                painter,
                center,
                geometry.radius,
                self.config.stroke_width,
                start_angle,
                start_angle + sweep,
                self.config.progress_color,
            );
        }

        if self.config.show_label {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                format!("{}%", displayed.round() as i64),
                egui::FontId::new(self.config.label_font_size, egui::FontFamily::Proportional),
                ui.style().visuals.strong_text_color(),
            );
        }

        response
    }
}

/// Draw an arc as short line segments (egui has no native arc primitive)
fn draw_ring_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    stroke_width: f32,
    start_angle: f32,
    end_angle: f32,
    color: egui::Color32,
) {
    // Segment count follows the arc length for a smooth curve
    let arc_length = (end_angle - start_angle).abs();
    let num_segments = (arc_length * radius / 3.0).ceil() as i32;
    let num_segments = num_segments.max(8).min(100);

    let angle_step = (end_angle - start_angle) / num_segments as f32;

    for i in 0..num_segments {
        let angle1 = start_angle + angle_step * i as f32;
        let angle2 = start_angle + angle_step * (i + 1) as f32;

        let point1 = egui::pos2(
            center.x + radius * angle1.cos(),
            center.y + radius * angle1.sin(),
        );
        let point2 = egui::pos2(
            center.x + radius * angle2.cos(),
            center.y + radius * angle2.sin(),
        );

        painter.line_segment([point1, point2], egui::Stroke::new(stroke_width, color));
    }
}
