//! # Add Funds Modal
//!
//! This module contains the per-goal add-funds modal. Submitting bumps the
//! goal's current amount, and the goal's ring and amount tweens retarget
//! from wherever they are mid-flight.

use eframe::egui;

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::theme::Theme;
use crate::ui::state::AddFundsFormState;

const MODAL_WIDTH: f32 = 380.0;
const MODAL_HEIGHT: f32 = 240.0;

impl GoalGroveApp {
    /// Render the add funds modal
    pub fn render_add_funds_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_add_funds_modal {
            return;
        }

        let goal_name = self
            .modal
            .add_funds_goal_id
            .as_ref()
            .and_then(|goal_id| self.goals.iter().find(|g| &g.id == goal_id))
            .map(|goal| goal.name.clone());
        let Some(goal_name) = goal_name else {
            // The goal disappeared while the modal was open
            self.modal.hide_all_modals();
            return;
        };

        let theme = self.theme_mode.theme();
        let mut form = self.modal.add_funds_form.clone();
        let mut submitted = false;
        let mut cancelled = false;

        egui::Area::new(egui::Id::new("add_funds_modal_overlay"))
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
                                        egui::RichText::new("💰 Add Funds")
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(theme.interactive.accent),
                                    );
                                    ui.add_space(6.0);
                                    ui.label(
                                        egui::RichText::new(format!("Toward {}", goal_name))
                                            .font(egui::FontId::new(
                                                14.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(theme.typography.secondary),
                                    );
                                    ui.add_space(16.0);
                                });

                                render_amount_field(ui, theme, &mut form);

                                ui.add_space(24.0);
                                ui.vertical_centered(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.add_space(50.0);
                                        let button_enabled =
                                            form.is_valid && !form.amount.trim().is_empty();
                                        let button_color = if button_enabled {
                                            theme.interactive.accent
                                        } else {
                                            theme.interactive.inactive_background
                                        };

                                        let submit_button = egui::Button::new(
                                            egui::RichText::new("Add Funds")
                                                .font(egui::FontId::new(
                                                    15.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(theme.typography.on_accent),
                                        )
                                        .fill(button_color)
                                        .rounding(egui::Rounding::same(10.0))
                                        .min_size(egui::vec2(120.0, 40.0));

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

        self.modal.add_funds_form = form;
        if submitted {
            self.submit_add_funds_form();
        } else if cancelled {
            self.modal.hide_all_modals();
        }
    }

    /// Apply the deposit from the validated form and close the modal
    fn submit_add_funds_form(&mut self) {
        let Some(goal_id) = self.modal.add_funds_goal_id.clone() else {
            self.modal.hide_all_modals();
            return;
        };
        let Ok(amount) = self.modal.add_funds_form.amount.trim().parse::<f64>() else {
            self.set_error("Amount is not a valid number".to_string());
            return;
        };

        log::info!("💰 Add funds form submitted: {:.2} to {}", amount, goal_id);
        self.add_funds_to_goal(&goal_id, amount);
        self.modal.hide_all_modals();
    }
}

/// Render the amount field with its error line
fn render_amount_field(ui: &mut egui::Ui, theme: &Theme, form: &mut AddFundsFormState) {
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
            validate_add_funds_form(form);
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
}

/// Validate the amount field
fn validate_add_funds_form(form: &mut AddFundsFormState) {
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
        let mut form = AddFundsFormState::new();
        form.amount = "100".to_string();
        validate_add_funds_form(&mut form);

        assert!(form.is_valid);
    }

    #[test]
    fn test_garbage_amount_fails() {
        let mut form = AddFundsFormState::new();
        form.amount = "ten dollars".to_string();
        validate_add_funds_form(&mut form);

        assert!(!form.is_valid);
        assert_eq!(form.amount_error.as_deref(), Some("Enter a valid number"));
    }
}
