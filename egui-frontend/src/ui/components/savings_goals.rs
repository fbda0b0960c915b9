//! # Savings Goals Strip Module
//!
//! This module renders the dashboard strip of savings goals: one progress
//! ring per goal with the goal name and animated current/target amounts
//! underneath.
//!
//! ## Key Functions:
//! - `goal_ring_id()` - Stable registry key for a goal's ring tween
//! - `render_savings_goals()` - Full strip card
//!
//! ## Purpose:
//! Rings reveal with a short hold after mount. Deleting a goal forgets its
//! ring id so no tween keeps running for a tile that no longer exists.

use std::time::Instant;

use eframe::egui;

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::animated_number::AnimatedNumber;
use crate::ui::components::progress_ring::{ProgressRing, ProgressRingConfig};
use crate::ui::components::styling;
use crate::ui::format::NumberFormat;

const RING_SIZE: f32 = 90.0;
const RING_STROKE: f32 = 8.0;
const TILE_WIDTH: f32 = 150.0;

/// Registry key for a goal's ring reveal tween
pub fn goal_ring_id(goal_id: &str) -> egui::Id {
    egui::Id::new(("goal_ring", goal_id))
}

impl GoalGroveApp {
    /// Render the savings goals strip with one ring per goal
    pub fn render_savings_goals(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();
        let goals = self.goals.clone();

        styling::card_ui(ui, theme, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Savings Goals")
                        .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );
            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui| {
                for goal in &goals {
                    ui.allocate_ui(egui::vec2(TILE_WIDTH, RING_SIZE + 70.0), |ui| {
                        ui.vertical_centered(|ui| {
                            let ring_config = ProgressRingConfig {
                                size: RING_SIZE,
                                stroke_width: RING_STROKE,
                                background_color: theme.status.track,
                                progress_color: theme.interactive.accent,
                                label_font_size: 18.0,
                                ..Default::default()
                            };
                            ProgressRing::new(
                                goal_ring_id(&goal.id),
                                goal.progress_percentage() as f32,
                            )
                            .with_config(ring_config)
                            .show(ui, &mut self.animations, now);

                            ui.add_space(8.0);
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&goal.name)
                                        .font(egui::FontId::new(
                                            14.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong()
                                        .color(theme.typography.primary),
                                )
                                .selectable(false),
                            );
                            let target_suffix = format!(
                                " of {}",
                                NumberFormat::currency().format(goal.target_amount)
                            );
                            AnimatedNumber::new(
                                format!("goal_current_{}", goal.id),
                                goal.current_amount,
                            )
                            .format(NumberFormat::currency().with_suffix(target_suffix))
                            .font_size(13.0)
                            .color(theme.typography.secondary)
                            .show(ui, &mut self.animations, now);
                        });
                    });
                    ui.add_space(8.0);
                }
            });
        });
    }
}
