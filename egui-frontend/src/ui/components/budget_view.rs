//! # Budget View Module
//!
//! This module renders the budget tab: one card per category budget with a
//! status-colored progress bar, plus the button that opens the create-budget
//! modal.
//!
//! ## Key Functions:
//! - `render_budgets()` - Full budget tab
//!
//! ## Purpose:
//! Bar colors follow how much of the budget is spent, and budgets past
//! their limit get an explicit over-budget badge next to the amounts.

use eframe::egui;
use shared::Budget;

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::styling;
use crate::ui::components::theme::Theme;
use crate::ui::components::transactions_view::accent_button;
use crate::ui::format::NumberFormat;

const CARD_HEIGHT: f32 = 96.0;
const CARD_GAP: f32 = 12.0;

impl GoalGroveApp {
    /// Render the budget tab
    pub fn render_budgets(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Budget")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if accent_button(ui, theme, "+ Create Budget").clicked() {
                    self.modal.open_budget();
                }
            });
        });
        ui.add_space(12.0);

        let budgets = self.budgets.clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for budget in &budgets {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), CARD_HEIGHT),
                        egui::Sense::hover(),
                    );
                    styling::draw_card_container(ui, rect, 14.0, theme);
                    ui.allocate_ui_at_rect(rect.shrink(16.0), |ui| {
                        render_budget_card(ui, theme, budget);
                    });
                    ui.add_space(CARD_GAP);
                }

                if budgets.is_empty() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No budgets yet. Create one to start tracking.")
                                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                .color(theme.typography.secondary),
                        );
                    });
                }
            });
    }
}

/// One budget card with spent/limit amounts and a status bar
fn render_budget_card(ui: &mut egui::Ui, theme: &Theme, budget: &Budget) {
    let percentage_used = budget.percentage_used();
    let bar_color = theme.budget_bar_color(percentage_used);

    ui.horizontal(|ui| {
        let (r, g, b) = budget.category.color_rgb();
        let dot_color = egui::Color32::from_rgb(r, g, b);
        let (dot_rect, _) =
            ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().circle_filled(dot_rect.center(), 5.0, dot_color);
        ui.add_space(4.0);

        ui.add(
            egui::Label::new(
                egui::RichText::new(budget.category.label())
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme.typography.primary),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(budget.period.label())
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(theme.typography.secondary),
            )
            .selectable(false),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if budget.is_over_budget() {
                over_budget_badge(ui, theme);
                ui.add_space(8.0);
            }
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{} of {}",
                        NumberFormat::currency().format(budget.spent),
                        NumberFormat::currency().format(budget.amount)
                    ))
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(theme.typography.primary),
                )
                .selectable(false),
            );
        });
    });

    ui.add_space(8.0);

    // percentage_used is already capped at 100
    let fraction = percentage_used as f32 / 100.0;
    let bar = egui::ProgressBar::new(fraction)
        .desired_height(8.0)
        .fill(bar_color)
        .rounding(egui::Rounding::same(4.0));
    ui.add(bar);

    ui.add_space(4.0);
    ui.add(
        egui::Label::new(
            egui::RichText::new(format!(
                "{}% used, {} remaining",
                percentage_used,
                NumberFormat::currency().format(budget.remaining())
            ))
            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
            .color(theme.typography.secondary),
        )
        .selectable(false),
    );
}

/// Red badge for budgets past their limit
fn over_budget_badge(ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::none()
        .fill(theme.status.expense.gamma_multiply(0.15))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Over budget")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.status.expense),
                )
                .selectable(false),
            );
        });
}
