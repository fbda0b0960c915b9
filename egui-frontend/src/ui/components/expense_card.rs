//! # Expense Breakdown Module
//!
//! This module renders the spending-by-category card on the dashboard: one
//! row per category with a color dot, an animated dollar amount, and a bar
//! whose width tracks that category's share of the month.
//!
//! ## Key Functions:
//! - `render_expense_breakdown()` - Full breakdown card
//!
//! ## Purpose:
//! Bars and amounts both run through the animation registry so the whole
//! card sweeps from zero to its real proportions on mount.

use std::time::Instant;

use eframe::egui;

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::animated_number::AnimatedNumber;
use crate::ui::components::styling;
use crate::ui::components::theme::Theme;
use crate::ui::format::NumberFormat;

const BAR_HEIGHT: f32 = 6.0;
const DOT_RADIUS: f32 = 5.0;

impl GoalGroveApp {
    /// Render the expense breakdown card with one row per spending category
    pub fn render_expense_breakdown(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();
        let items = self.breakdown.clone();

        styling::card_ui(ui, theme, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Expense Breakdown")
                        .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );
            ui.add_space(10.0);

            for item in &items {
                let (r, g, b) = item.category.color_rgb();
                let category_color = egui::Color32::from_rgb(r, g, b);

                ui.horizontal(|ui| {
                    let (dot_rect, _) = ui.allocate_exact_size(
                        egui::vec2(DOT_RADIUS * 2.0, DOT_RADIUS * 2.0),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .circle_filled(dot_rect.center(), DOT_RADIUS, category_color);
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(item.category.label())
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(theme.typography.primary),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        AnimatedNumber::new(
                            format!("breakdown_amount_{}", item.category.wire_name()),
                            item.amount,
                        )
                        .format(NumberFormat::currency())
                        .font_size(14.0)
                        .color(theme.typography.primary)
                        .show(ui, &mut self.animations, now);
                    });
                });

                ui.add_space(4.0);
                draw_share_bar(
                    ui,
                    &mut self.animations,
                    now,
                    item.category.wire_name(),
                    item.percentage,
                    category_color,
                    theme,
                );
                ui.add_space(10.0);
            }
        });
    }
}

/// Draw the horizontal share bar for one category row
fn draw_share_bar(
    ui: &mut egui::Ui,
    animations: &mut crate::ui::animation::AnimationRegistry,
    now: Instant,
    category_name: &str,
    share_pct: f64,
    color: egui::Color32,
    theme: &Theme,
) {
    let displayed_pct = animations.animate(
        egui::Id::new(format!("breakdown_bar_{}", category_name)),
        share_pct,
        now,
    );

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), egui::Sense::hover());
    let rounding = egui::Rounding::same(BAR_HEIGHT / 2.0);

    ui.painter().rect_filled(rect, rounding, theme.status.track);

    let filled_width = rect.width() * (displayed_pct / 100.0).clamp(0.0, 1.0) as f32;
    if filled_width > 0.0 {
        let filled_rect =
            egui::Rect::from_min_size(rect.min, egui::vec2(filled_width, rect.height()));
        ui.painter().rect_filled(filled_rect, rounding, color);
    }
}
