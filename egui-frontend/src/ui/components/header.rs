//! # Header Module
//!
//! This module handles rendering the application header: the brand mark,
//! the tab navigation pills, and the theme toggle.
//!
//! ## Key Functions:
//! - `render_header()` - Brand, navigation, and theme toggle row
//! - `render_messages()` - Floating success/error toast
//!
//! ## Purpose:
//! The header is the only navigation surface in the app. Tab switches go
//! through `select_tab` so the dashboard entrance replays on return.

use eframe::egui;

use crate::ui::app_state::{GoalGroveApp, MainTab};

const HEADER_HEIGHT: f32 = 60.0;
const BADGE_SIZE: f32 = 34.0;

impl GoalGroveApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();

        let frame = egui::Frame::none()
            .fill(theme.layout.card_background.gamma_multiply(0.6))
            .inner_margin(egui::Margin::symmetric(16.0, 10.0));

        frame.show(ui, |ui| {
            ui.allocate_ui_with_layout(
                egui::vec2(ui.available_width(), HEADER_HEIGHT - 20.0),
                egui::Layout::top_down(egui::Align::LEFT),
                |ui| {
                    ui.horizontal(|ui| {
                        self.render_brand(ui);
                        ui.add_space(20.0);
                        self.render_nav_pills(ui);

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                self.render_theme_toggle(ui);
                            },
                        );
                    });
                },
            );
        });
    }

    /// Round badge and app name
    fn render_brand(&self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();

        let (badge_rect, _) = ui.allocate_exact_size(
            egui::vec2(BADGE_SIZE, BADGE_SIZE),
            egui::Sense::hover(),
        );
        ui.painter().circle_filled(
            badge_rect.center(),
            BADGE_SIZE / 2.0,
            theme.interactive.accent,
        );
        ui.painter().text(
            badge_rect.center(),
            egui::Align2::CENTER_CENTER,
            "GG",
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
            theme.typography.on_accent,
        );

        ui.add_space(8.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new("GoalGrove")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme.typography.primary),
            )
            .selectable(false),
        );
    }

    /// One pill per main tab, the active one filled with the accent
    fn render_nav_pills(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();

        for tab in MainTab::ALL {
            let active = self.current_tab == tab;
            let fill = if active {
                theme.interactive.accent
            } else {
                egui::Color32::TRANSPARENT
            };
            let text_color = if active {
                theme.typography.on_accent
            } else {
                theme.typography.primary
            };

            let button = egui::Button::new(
                egui::RichText::new(tab.label())
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                    .color(text_color),
            )
            .fill(fill)
            .rounding(egui::Rounding::same(16.0))
            .stroke(egui::Stroke::NONE);

            if ui.add(button).clicked() && !active {
                self.select_tab(tab);
            }
        }
    }

    /// Sun/moon button switching the palette
    fn render_theme_toggle(&mut self, ui: &mut egui::Ui) {
        let icon = if self.theme_mode.is_dark() {
            "☀"
        } else {
            "🌙"
        };
        let button = egui::Button::new(
            egui::RichText::new(icon).font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
        )
        .rounding(egui::Rounding::same(16.0));

        if ui.add(button).on_hover_text("Toggle theme").clicked() {
            self.toggle_theme();
        }
    }

    /// Render error and success messages as a floating toast
    pub fn render_messages(&self, ctx: &egui::Context) {
        let theme = self.theme_mode.theme();

        let (text, color) = if let Some(error) = &self.error_message {
            (format!("❌ {}", error), theme.status.expense)
        } else if let Some(success) = &self.success_message {
            (format!("✅ {}", success), theme.status.income)
        } else {
            return;
        };

        egui::Area::new(egui::Id::new("message_toast"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, HEADER_HEIGHT + 12.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.layout.card_background)
                    .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::symmetric(14.0, 8.0))
                    .shadow(egui::epaint::Shadow {
                        offset: egui::vec2(0.0, 2.0),
                        blur: 8.0,
                        spread: 0.0,
                        color: theme.layout.card_shadow,
                    })
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(text)
                                    .font(egui::FontId::new(
                                        14.0,
                                        egui::FontFamily::Proportional,
                                    ))
                                    .color(color),
                            )
                            .selectable(false),
                        );
                    });
            });
    }
}
