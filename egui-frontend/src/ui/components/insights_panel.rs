//! # AI Insights Panel Module
//!
//! This module renders the insights section of the dashboard: the static
//! insight cards, the free-text question form, and the analysis card with
//! the budget efficiency ring.
//!
//! ## Key Functions:
//! - `render_insights_panel()` - Insight cards plus the question form
//! - `render_analysis_card()` - Budget efficiency ring and recommendations
//!
//! ## Purpose:
//! There is no model behind this panel. The cards are canned insights and
//! the question form only acknowledges the question with a toast.

use std::time::Instant;

use eframe::egui;
use shared::InsightKind;

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::progress_ring::{ProgressRing, ProgressRingConfig};
use crate::ui::components::styling;
use crate::ui::components::theme::Theme;
use crate::ui::components::transactions_view::accent_button;

const BUDGET_EFFICIENCY_PCT: f32 = 78.0;
const SAVINGS_POTENTIAL_PER_MONTH: f64 = 245.0;

impl GoalGroveApp {
    /// Render the insight cards and the ask-a-question form
    pub fn render_insights_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();
        let insights = self.insights.clone();

        styling::card_ui(ui, theme, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("✨ AI Insights")
                        .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );
            ui.add_space(10.0);

            for insight in &insights {
                let accent = insight_accent(insight.kind, theme);
                egui::Frame::none()
                    .fill(accent.gamma_multiply(0.08))
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::same(10.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(insight_icon(insight.kind))
                                        .font(egui::FontId::new(
                                            18.0,
                                            egui::FontFamily::Proportional,
                                        )),
                                )
                                .selectable(false),
                            );
                            ui.add_space(4.0);
                            ui.vertical(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(&insight.title)
                                            .font(egui::FontId::new(
                                                14.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(accent),
                                    )
                                    .selectable(false),
                                );
                                ui.label(
                                    egui::RichText::new(&insight.description)
                                        .font(egui::FontId::new(
                                            13.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(theme.typography.primary),
                                );
                            });
                        });
                    });
                ui.add_space(8.0);
            }

            ui.add_space(4.0);
            self.render_question_form(ui);
        });
    }

    /// Free-text question input with a submit button
    fn render_question_form(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();
        let mut submitted = false;

        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut self.dashboard.question_input)
                .hint_text("Ask about your finances...")
                .desired_width(ui.available_width() - 70.0)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional));
            let response = ui.add(input);

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if accent_button(ui, theme, "Ask").clicked() {
                submitted = true;
            }
        });

        if submitted {
            self.submit_question();
        }
    }

    /// Render the analysis card when a question has been asked
    pub fn render_analysis_card(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.theme_mode.theme();

        styling::card_ui(ui, theme, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("AI Analysis")
                        .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let ring_config = ProgressRingConfig {
                        size: 100.0,
                        stroke_width: 8.0,
                        background_color: theme.status.track,
                        progress_color: theme.status.income,
                        label_font_size: 20.0,
                        ..Default::default()
                    };
                    ProgressRing::new(
                        egui::Id::new("budget_efficiency_ring"),
                        BUDGET_EFFICIENCY_PCT,
                    )
                    .with_config(ring_config)
                    .show(ui, &mut self.animations, now);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Budget Efficiency")
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                .color(theme.typography.secondary),
                        )
                        .selectable(false),
                    );
                });

                ui.add_space(20.0);

                ui.vertical(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "Savings Potential: ${:.0}/mo",
                                SAVINGS_POTENTIAL_PER_MONTH
                            ))
                            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(theme.status.income),
                        )
                        .selectable(false),
                    );
                    ui.add_space(10.0);
                    recommendation_row(
                        ui,
                        theme,
                        "Automate Monthly Savings",
                        "Move $350 to goals on payday",
                    );
                    ui.add_space(6.0);
                    recommendation_row(
                        ui,
                        theme,
                        "Reduce Utilities",
                        "Cut usage by 15% with a smart thermostat",
                    );
                });
            });
        });
    }
}

/// Pick the emoji for an insight kind
fn insight_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Optimization => "💡",
        InsightKind::Feasibility => "🎯",
        InsightKind::Alert => "⚠️",
    }
}

/// Pick the accent color for an insight kind
fn insight_accent(kind: InsightKind, theme: &Theme) -> egui::Color32 {
    match kind {
        InsightKind::Optimization => theme.interactive.accent,
        InsightKind::Feasibility => theme.status.income,
        InsightKind::Alert => theme.status.warning,
    }
}

/// One bullet row inside the analysis card
fn recommendation_row(ui: &mut egui::Ui, theme: &Theme, title: &str, detail: &str) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new("•")
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                    .color(theme.interactive.accent),
            )
            .selectable(false),
        );
        ui.vertical(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(title)
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(detail)
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(theme.typography.secondary),
                )
                .selectable(false),
            );
        });
    });
}
