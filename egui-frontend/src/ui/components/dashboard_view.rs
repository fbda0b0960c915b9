//! # Dashboard View Module
//!
//! This module lays out the dashboard tab: the summary card row, the
//! net-worth strip, the expense breakdown, the savings goals strip, and the
//! insights panel, each arriving with its own entrance fade.
//!
//! ## Key Functions:
//! - `render_dashboard()` - Full dashboard layout inside a scroll area
//!
//! ## Purpose:
//! Sections reserve their final rects up front and slide into them while
//! fading, so the page never reflows during the entrance.

use std::time::Instant;

use eframe::egui;

use crate::ui::animation::EntranceFade;
use crate::ui::app_state::GoalGroveApp;
use crate::ui::state::dashboard_state::{
    SECTION_BALANCE_CARD, SECTION_EXPENSES_CARD, SECTION_EXPENSE_BREAKDOWN, SECTION_INCOME_CARD,
    SECTION_INSIGHTS, SECTION_NET_WORTH, SECTION_SAVINGS_GOALS,
};

const SECTION_GAP: f32 = 16.0;
const SUMMARY_CARD_HEIGHT: f32 = 120.0;
const NET_WORTH_HEIGHT: f32 = 64.0;
const BREAKDOWN_HEIGHT: f32 = 300.0;
const SAVINGS_HEIGHT: f32 = 230.0;
const INSIGHTS_HEIGHT: f32 = 320.0;
const ANALYSIS_HEIGHT: f32 = 200.0;

impl GoalGroveApp {
    /// Render the dashboard tab
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui, now: Instant) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(4.0);
                self.render_summary_row(ui, now);
                ui.add_space(SECTION_GAP);

                self.render_faded_section(ui, now, SECTION_NET_WORTH, NET_WORTH_HEIGHT, |app, ui| {
                    app.render_net_worth_strip(ui, now);
                });
                ui.add_space(SECTION_GAP);

                self.render_faded_section(
                    ui,
                    now,
                    SECTION_EXPENSE_BREAKDOWN,
                    BREAKDOWN_HEIGHT,
                    |app, ui| {
                        app.render_expense_breakdown(ui, now);
                    },
                );
                ui.add_space(SECTION_GAP);

                self.render_faded_section(
                    ui,
                    now,
                    SECTION_SAVINGS_GOALS,
                    SAVINGS_HEIGHT,
                    |app, ui| {
                        app.render_savings_goals(ui, now);
                    },
                );
                ui.add_space(SECTION_GAP);

                self.render_faded_section(ui, now, SECTION_INSIGHTS, INSIGHTS_HEIGHT, |app, ui| {
                    app.render_insights_panel(ui);
                });

                if self.dashboard.show_analysis {
                    ui.add_space(SECTION_GAP);
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), ANALYSIS_HEIGHT),
                        egui::Sense::hover(),
                    );
                    ui.allocate_ui_at_rect(rect, |ui| {
                        self.render_analysis_card(ui, now);
                    });
                }
                ui.add_space(SECTION_GAP);
            });
    }

    /// Three summary cards side by side, each with its own fade
    fn render_summary_row(&mut self, ui: &mut egui::Ui, now: Instant) {
        let row_width = ui.available_width();
        let card_width = (row_width - 2.0 * SECTION_GAP) / 3.0;
        let (row_rect, _) = ui.allocate_exact_size(
            egui::vec2(row_width, SUMMARY_CARD_HEIGHT),
            egui::Sense::hover(),
        );

        let sections = [
            SECTION_BALANCE_CARD,
            SECTION_INCOME_CARD,
            SECTION_EXPENSES_CARD,
        ];
        for (column, section) in sections.into_iter().enumerate() {
            let card_rect = egui::Rect::from_min_size(
                row_rect.min + egui::vec2((card_width + SECTION_GAP) * column as f32, 0.0),
                egui::vec2(card_width, SUMMARY_CARD_HEIGHT),
            );
            let fade = self.dashboard.section_fade(section).cloned();
            let render: fn(&mut Self, &mut egui::Ui, Instant) = match section {
                SECTION_INCOME_CARD => Self::render_income_card,
                SECTION_EXPENSES_CARD => Self::render_expenses_card,
                _ => Self::render_balance_card,
            };
            draw_faded(ui, card_rect, fade.as_ref(), now, |ui| {
                render(self, ui, now);
            });
        }
    }

    /// Reserve a full-width rect for one section and render it through its fade
    fn render_faded_section(
        &mut self,
        ui: &mut egui::Ui,
        now: Instant,
        section: usize,
        height: f32,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
        let fade = self.dashboard.section_fade(section).cloned();
        draw_faded(ui, rect, fade.as_ref(), now, |ui| {
            add_contents(self, ui);
        });
    }
}

/// Draw content into `rect`, translated and dimmed by the fade
fn draw_faded(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    fade: Option<&EntranceFade>,
    now: Instant,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let (opacity, offset) = match fade {
        Some(fade) => (fade.opacity_at(now), fade.offset_at(now)),
        None => (1.0, 0.0),
    };
    if opacity <= 0.0 {
        return;
    }

    let draw_rect = rect.translate(egui::vec2(0.0, offset));
    ui.allocate_ui_at_rect(draw_rect, |ui| {
        ui.set_opacity(opacity);
        add_contents(ui);
    });
}
