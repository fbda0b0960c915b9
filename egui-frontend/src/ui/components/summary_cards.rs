//! # Summary Cards Module
//!
//! This module renders the headline dashboard cards: total balance, monthly
//! income, monthly expenses, and the net-worth strip below them.
//!
//! ## Key Functions:
//! - `render_balance_card()` - Total balance with animated value
//! - `render_income_card()` - Monthly income with delta caption
//! - `render_expenses_card()` - Monthly expenses with delta caption
//! - `render_net_worth_strip()` - Full-width net worth line with badge
//!
//! ## Purpose:
//! Every figure on these cards counts up through the animation registry, so
//! the numbers sweep in on mount instead of snapping to their final value.

use std::time::Instant;

use eframe::egui;

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::animated_number::AnimatedNumber;
use crate::ui::components::styling;
use crate::ui::format::NumberFormat;

impl GoalGroveApp {
    /// Render the total balance card
    pub fn render_balance_card(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();
        let balance = self.snapshot.total_balance;

        styling::card_ui(ui, theme, |ui| {
            card_title(ui, "Total Balance", theme.typography.secondary);
            ui.add_space(6.0);
            AnimatedNumber::new("balance_value", balance)
                .format(NumberFormat::currency())
                .font_size(30.0)
                .color(theme.typography.primary)
                .show(ui, &mut self.animations, now);
            ui.add_space(4.0);
            caption(ui, "Across all accounts", theme.typography.secondary);
        });
    }

    /// Render the monthly income card
    pub fn render_income_card(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();
        let income = self.snapshot.monthly_income;
        let delta = self.snapshot.income_delta_pct;
        // More income is good
        let delta_color = if delta >= 0.0 {
            theme.status.income
        } else {
            theme.status.expense
        };

        styling::card_ui(ui, theme, |ui| {
            card_title(ui, "Monthly Income", theme.typography.secondary);
            ui.add_space(6.0);
            AnimatedNumber::new("income_value", income)
                .format(NumberFormat::currency())
                .font_size(30.0)
                .color(theme.typography.primary)
                .show(ui, &mut self.animations, now);
            ui.add_space(4.0);
            caption(ui, &format!("{:+.1}% vs last month", delta), delta_color);
        });
    }

    /// Render the monthly expenses card
    pub fn render_expenses_card(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();
        let expenses = self.snapshot.monthly_expenses;
        let delta = self.snapshot.expenses_delta_pct;
        // Less spending is good
        let delta_color = if delta <= 0.0 {
            theme.status.income
        } else {
            theme.status.expense
        };

        styling::card_ui(ui, theme, |ui| {
            card_title(ui, "Monthly Expenses", theme.typography.secondary);
            ui.add_space(6.0);
            AnimatedNumber::new("expenses_value", expenses)
                .format(NumberFormat::currency())
                .font_size(30.0)
                .color(theme.typography.primary)
                .show(ui, &mut self.animations, now);
            ui.add_space(4.0);
            caption(ui, &format!("{:+.1}% vs last month", delta), delta_color);
        });
    }

    /// Render the full-width net worth strip
    pub fn render_net_worth_strip(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();
        let net_worth = self.snapshot.net_worth;
        let delta = self.snapshot.net_worth_delta_pct;

        styling::card_ui(ui, theme, |ui| {
            ui.horizontal(|ui| {
                card_title(ui, "Net Worth", theme.typography.secondary);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    delta_badge(ui, delta, theme.status.income);
                    ui.add_space(10.0);
                    AnimatedNumber::new("net_worth_value", net_worth)
                        .format(NumberFormat::currency())
                        .font_size(24.0)
                        .color(theme.typography.primary)
                        .show(ui, &mut self.animations, now);
                });
            });
        });
    }
}

/// Small secondary-colored card heading
fn card_title(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .color(color),
        )
        .selectable(false),
    );
}

/// One-line caption under a card value
fn caption(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(color),
        )
        .selectable(false),
    );
}

/// Rounded percentage-change chip
fn delta_badge(ui: &mut egui::Ui, delta_pct: f64, color: egui::Color32) {
    let text = format!("{:+.1}%", delta_pct);
    let galley = egui::WidgetText::from(
        egui::RichText::new(&text)
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .strong()
            .color(color),
    )
    .into_galley(ui, None, f32::INFINITY, egui::TextStyle::Body);

    let padding = egui::vec2(8.0, 4.0);
    let (rect, _) = ui.allocate_exact_size(galley.size() + padding * 2.0, egui::Sense::hover());
    ui.painter().rect_filled(
        rect,
        egui::Rounding::same(rect.height() / 2.0),
        color.gamma_multiply(0.15),
    );
    ui.painter()
        .galley(rect.min + padding, galley, color);
}
