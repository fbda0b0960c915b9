//! # Goals View Module
//!
//! This module renders the goals tab: a wrapping grid of goal cards with
//! animated progress bars and amounts, plus per-goal add-funds and delete
//! actions.
//!
//! ## Key Functions:
//! - `render_goals()` - Full goals tab
//!
//! ## Purpose:
//! Adding funds retargets a goal's tweens in place, so the bar and the
//! amounts glide to their new values instead of jumping.

use std::time::Instant;

use eframe::egui;
use shared::{GoalPriority, SavingsGoal};

use crate::ui::animation::AnimationRegistry;
use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::animated_number::AnimatedNumber;
use crate::ui::components::styling;
use crate::ui::components::theme::Theme;
use crate::ui::components::transactions_view::accent_button;
use crate::ui::format::NumberFormat;

const CARD_WIDTH: f32 = 320.0;
const CARD_HEIGHT: f32 = 170.0;
const CARD_GAP: f32 = 12.0;

/// What a card's buttons asked for this frame
enum GoalAction {
    AddFunds(String),
    Delete(String),
}

impl GoalGroveApp {
    /// Render the goals tab
    pub fn render_goals(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();

        ui.add_space(4.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new("Savings Goals")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme.typography.primary),
            )
            .selectable(false),
        );
        ui.add_space(12.0);

        let goals = self.goals.clone();
        let mut action: Option<GoalAction> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for goal in &goals {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(CARD_WIDTH, CARD_HEIGHT),
                            egui::Sense::hover(),
                        );
                        styling::draw_card_container(ui, rect, 14.0, theme);
                        ui.allocate_ui_at_rect(rect.shrink(16.0), |ui| {
                            render_goal_card(
                                ui,
                                theme,
                                &mut self.animations,
                                now,
                                goal,
                                &mut action,
                            );
                        });
                        ui.add_space(CARD_GAP);
                    }
                });

                if goals.is_empty() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No goals yet")
                                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                .color(theme.typography.secondary),
                        );
                    });
                }
            });

        match action {
            Some(GoalAction::AddFunds(goal_id)) => self.modal.open_add_funds(goal_id),
            Some(GoalAction::Delete(goal_id)) => self.delete_goal(&goal_id),
            None => {}
        }
    }
}

/// One goal card
fn render_goal_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    animations: &mut AnimationRegistry,
    now: Instant,
    goal: &SavingsGoal,
    action: &mut Option<GoalAction>,
) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(&goal.name)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme.typography.primary),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            priority_chip(ui, theme, goal.priority);
        });
    });

    ui.add(
        egui::Label::new(
            egui::RichText::new(format_due_month(&goal.due_date))
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(theme.typography.secondary),
        )
        .selectable(false),
    );
    ui.add_space(8.0);

    let percentage = goal.progress_percentage();
    let displayed_pct = animations.animate(
        egui::Id::new(("goal_bar", goal.id.as_str())),
        percentage,
        now,
    );
    let bar_color = theme.goal_bar_color(percentage);

    let (bar_rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 8.0),
        egui::Sense::hover(),
    );
    let rounding = egui::Rounding::same(4.0);
    ui.painter().rect_filled(bar_rect, rounding, theme.status.track);
    let fill_width = bar_rect.width() * (displayed_pct / 100.0).clamp(0.0, 1.0) as f32;
    if fill_width > 0.0 {
        let fill_rect =
            egui::Rect::from_min_size(bar_rect.min, egui::vec2(fill_width, bar_rect.height()));
        ui.painter().rect_filled(fill_rect, rounding, bar_color);
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        AnimatedNumber::new(format!("goal_current_{}", goal.id), goal.current_amount)
            .format(NumberFormat::currency())
            .font_size(14.0)
            .color(theme.typography.primary)
            .show(ui, animations, now);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "of {}",
                    NumberFormat::currency().format(goal.target_amount)
                ))
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(theme.typography.secondary),
            )
            .selectable(false),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{} to go",
                        NumberFormat::currency().format(goal.remaining_amount().max(0.0))
                    ))
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(theme.typography.secondary),
                )
                .selectable(false),
            );
        });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if accent_button(ui, theme, "Add Funds").clicked() {
            *action = Some(GoalAction::AddFunds(goal.id.clone()));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(egui::RichText::new("🗑").font(egui::FontId::new(
                    14.0,
                    egui::FontFamily::Proportional,
                )))
                .on_hover_text("Delete goal")
                .clicked()
            {
                *action = Some(GoalAction::Delete(goal.id.clone()));
            }
        });
    });
}

/// Chip showing a goal's priority
fn priority_chip(ui: &mut egui::Ui, theme: &Theme, priority: GoalPriority) {
    let color = match priority {
        GoalPriority::High => theme.status.expense,
        GoalPriority::Medium => theme.status.warning,
        GoalPriority::Low => theme.typography.secondary,
    };

    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(priority.label())
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(color),
                )
                .selectable(false),
            );
        });
}

/// "Due Mar 2024" from an ISO date, falling back to the raw string
fn format_due_month(due_date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(due_date, "%Y-%m-%d") {
        Ok(parsed) => format!("Due {}", parsed.format("%b %Y")),
        Err(_) => format!("Due {}", due_date),
    }
}
