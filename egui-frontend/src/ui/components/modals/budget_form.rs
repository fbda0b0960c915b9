//! # Create Budget Modal
//!
//! This module contains the create-budget modal: category, amount, and
//! period. Submitting upserts by category, so re-creating a budget for an
//! existing category replaces its limit instead of duplicating the card.

use eframe::egui;
use shared::{BudgetPeriod, Category};

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::theme::Theme;
use crate::ui::state::BudgetFormState;

const MODAL_WIDTH: f32 = 420.0;
const MODAL_HEIGHT: f32 = 330.0;

impl GoalGroveApp {
    /// Render the create budget modal
    pub fn render_budget_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_budget_modal {
            return;
        }

        let theme = self.theme_mode.theme();
        let mut form = self.modal.budget_form.clone();
        let mut submitted = false;
        let mut cancelled = false;

        egui::Area::new(egui::Id::new("budget_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter()
                    .rect_filled(screen_rect, egui::Rounding::ZERO, theme.layout.modal_overlay);

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(theme.layout.card_background)
                            .stroke(egui::Stroke::new(2.0, theme.interactive.accent))
                            .rounding(egui::Rounding::same(15.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(MODAL_WIDTH, MODAL_HEIGHT));
                                ui.set_max_size(egui::vec2(MODAL_WIDTH, MODAL_HEIGHT));

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new("📊 Create Budget")
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(theme.interactive.accent),
                                    );
                                    ui.add_space(16.0);
                                });

                                render_budget_fields(ui, theme, &mut form);

                                ui.add_space(24.0);
                                ui.vertical_centered(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.add_space(60.0);
                                        let button_enabled =
                                            form.is_valid && !form.amount.trim().is_empty();
                                        let button_color = if button_enabled {
                                            theme.interactive.accent
                                        } else {
                                            theme.interactive.inactive_background
                                        };

                                        let submit_button = egui::Button::new(
                                            egui::RichText::new("Save Budget")
                                                .font(egui::FontId::new(
                                                    15.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(theme.typography.on_accent),
                                        )
                                        .fill(button_color)
                                        .rounding(egui::Rounding::same(10.0))
                                        .min_size(egui::vec2(130.0, 40.0));

                                        let submit_response = ui.add(submit_button);
                                        if submit_response.clicked() && button_enabled {
                                            submitted = true;
                                        }
                                        if !button_enabled && submit_response.hovered() {
                                            submit_response
                                                .on_hover_text("Enter a valid amount to continue");
                                        }

                                        ui.add_space(20.0);

                                        let cancel_button = egui::Button::new(
                                            egui::RichText::new("Cancel")
                                                .font(egui::FontId::new(
                                                    15.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(theme.typography.secondary),
                                        )
                                        .fill(theme.interactive.inactive_background)
                                        .stroke(egui::Stroke::new(
                                            1.0,
                                            theme.interactive.button_border,
                                        ))
                                        .rounding(egui::Rounding::same(10.0))
                                        .min_size(egui::vec2(100.0, 40.0));

                                        if ui.add(cancel_button).clicked() {
                                            cancelled = true;
                                        }
                                    });
                                    ui.add_space(10.0);
                                });
                            });
                    });
                });

                if !self.modal.modal_just_opened && ui.ctx().input(|i| i.pointer.any_click()) {
                    if let Some(pos) = ui.ctx().input(|i| i.pointer.interact_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            screen_rect.center(),
                            egui::vec2(MODAL_WIDTH, MODAL_HEIGHT),
                        );
                        if !modal_rect.contains(pos) {
                            cancelled = true;
                        }
                    }
                }
                self.modal.modal_just_opened = false;
            });

        self.modal.budget_form = form;
        if submitted {
            self.submit_budget_form();
        } else if cancelled {
            self.modal.hide_all_modals();
        }
    }

    /// Upsert the budget from the validated form and close the modal
    fn submit_budget_form(&mut self) {
        let form = self.modal.budget_form.clone();
        let Ok(amount) = form.amount.trim().parse::<f64>() else {
            self.set_error("Amount is not a valid number".to_string());
            return;
        };

        log::info!(
            "📊 Budget form submitted: {} {:.2} {}",
            form.category.label(),
            amount,
            form.period.label()
        );
        self.upsert_budget(form.category, amount, form.period);
        self.modal.hide_all_modals();
    }
}

/// Render the category, amount, and period fields
fn render_budget_fields(ui: &mut egui::Ui, theme: &Theme, form: &mut BudgetFormState) {
    ui.label(
        egui::RichText::new("Category")
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .color(theme.typography.secondary),
    );
    ui.add_space(4.0);
    egui::ComboBox::from_id_source("budget_category_picker")
        .selected_text(form.category.label())
        .width(200.0)
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                if category.is_income() {
                    continue;
                }
                ui.selectable_value(&mut form.category, category, category.label());
            }
        });
    ui.add_space(10.0);

    ui.label(
        egui::RichText::new("Amount")
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .color(theme.typography.secondary),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("$")
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .color(theme.typography.primary),
        );
        ui.add_space(2.0);
        let amount_response = ui.add(
            egui::TextEdit::singleline(&mut form.amount)
                .hint_text("0.00")
                .desired_width(120.0)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
        );
        if amount_response.changed() {
            validate_budget_form(form);
        }
    });
    if let Some(error) = &form.amount_error {
        ui.add_space(3.0);
        ui.label(
            egui::RichText::new(error)
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(theme.status.expense),
        );
    }
    ui.add_space(10.0);

    ui.label(
        egui::RichText::new("Period")
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .color(theme.typography.secondary),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        for period in [
            BudgetPeriod::Weekly,
            BudgetPeriod::Monthly,
            BudgetPeriod::Yearly,
        ] {
            let active = form.period == period;
            let fill = if active {
                theme.interactive.accent
            } else {
                theme.interactive.inactive_background
            };
            let text_color = if active {
                theme.typography.on_accent
            } else {
                theme.typography.primary
            };
            let button = egui::Button::new(
                egui::RichText::new(period.label())
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                    .color(text_color),
            )
            .fill(fill)
            .rounding(egui::Rounding::same(14.0));

            if ui.add(button).clicked() {
                form.period = period;
            }
        }
    });
}

/// Validate the amount field
fn validate_budget_form(form: &mut BudgetFormState) {
    form.amount_error = None;

    let amount = form.amount.trim();
    if amount.is_empty() {
        form.amount_error = Some("Amount is required".to_string());
    } else {
        match amount.parse::<f64>() {
            Ok(value) if value > 0.0 => {}
            Ok(_) => {
                form.amount_error = Some("Amount must be greater than zero".to_string());
            }
            Err(_) => {
                form.amount_error = Some("Enter a valid number".to_string());
            }
        }
    }

    form.is_valid = form.amount_error.is_none();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_amount_passes() {
        let mut form = BudgetFormState::new();
        form.amount = "350".to_string();
        validate_budget_form(&mut form);

        assert!(form.is_valid);
        assert!(form.amount_error.is_none());
    }

    #[test]
    fn test_negative_amount_fails() {
        let mut form = BudgetFormState::new();
        form.amount = "-25".to_string();
        validate_budget_form(&mut form);

        assert!(!form.is_valid);
        assert_eq!(
            form.amount_error.as_deref(),
            Some("Amount must be greater than zero")
        );
    }

    #[test]
    fn test_empty_amount_fails() {
        let mut form = BudgetFormState::new();
        form.amount = String::new();
        validate_budget_form(&mut form);

        assert!(!form.is_valid);
        assert_eq!(form.amount_error.as_deref(), Some("Amount is required"));
    }
}
