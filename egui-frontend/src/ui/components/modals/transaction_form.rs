//! # Add Transaction Modal
//!
//! This module contains the add-transaction modal: description, amount,
//! type, category, date, and optional notes, validated as the user types.
//!
//! ## Responsibilities:
//! - Render the form fields with inline error messages
//! - Keep the category picker consistent with the chosen type
//! - Submit through the app so the balance and toasts update
//!
//! ## Purpose:
//! This is the only way transactions enter the app, so the validation here
//! is the form layer the rest of the code relies on.

use eframe::egui;
use shared::{Category, TransactionType};

use crate::ui::app_state::GoalGroveApp;
use crate::ui::components::theme::Theme;
use crate::ui::state::TransactionFormState;

const MODAL_WIDTH: f32 = 460.0;
const MODAL_HEIGHT: f32 = 480.0;
const MAX_DESCRIPTION_LENGTH: usize = 80;

impl GoalGroveApp {
    /// Render the add transaction modal
    pub fn render_add_transaction_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_add_transaction_modal {
            return;
        }

        let theme = self.theme_mode.theme();
        let mut form = self.modal.transaction_form.clone();
        let mut submitted = false;
        let mut cancelled = false;

        egui::Area::new(egui::Id::new("add_transaction_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent background
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
                                        egui::RichText::new("💸 Add Transaction")
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(theme.interactive.accent),
                                    );
                                    ui.add_space(16.0);
                                });

                                render_form_fields(ui, theme, &mut form);

                                ui.add_space(20.0);
                                ui.vertical_centered(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.add_space(60.0);
                                        let button_enabled = form.is_valid
                                            && !form.description.trim().is_empty()
                                            && !form.amount.trim().is_empty();
                                        let button_color = if button_enabled {
                                            theme.interactive.accent
                                        } else {
                                            theme.interactive.inactive_background
                                        };

                                        let submit_button = egui::Button::new(
                                            egui::RichText::new("Add Transaction")
                                                .font(egui::FontId::new(
                                                    15.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(theme.typography.on_accent),
                                        )
                                        .fill(button_color)
                                        .rounding(egui::Rounding::same(10.0))
                                        .min_size(egui::vec2(150.0, 40.0));

                                        let submit_response = ui.add(submit_button);
                                        if submit_response.clicked() && button_enabled {
                                            submitted = true;
                                        }
                                        if !button_enabled && submit_response.hovered() {
                                            submit_response
                                                .on_hover_text("Please fix the errors above to continue");
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

                // Backdrop click closes, but not on the frame that opened the modal
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

        self.modal.transaction_form = form;
        if submitted {
            self.submit_transaction_form();
        } else if cancelled {
            self.modal.hide_all_modals();
        }
    }

    /// Build the transaction from the validated form and close the modal
    fn submit_transaction_form(&mut self) {
        let form = self.modal.transaction_form.clone();
        let Ok(amount) = form.amount.trim().parse::<f64>() else {
            self.set_error("Amount is not a valid number".to_string());
            return;
        };

        let signed_amount = match form.transaction_type {
            TransactionType::Expense => -amount.abs(),
            TransactionType::Income => amount.abs(),
        };
        let date = format!("{}T12:00:00+00:00", form.date.trim());
        let notes = {
            let trimmed = form.notes.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        log::info!(
            "💸 Transaction form submitted: '{}', {:.2}",
            form.description.trim(),
            signed_amount
        );
        self.add_transaction(
            form.description.trim().to_string(),
            signed_amount,
            form.category,
            date,
            notes,
        );
        self.modal.hide_all_modals();
    }
}

/// Render the form fields with inline validation
fn render_form_fields(ui: &mut egui::Ui, theme: &Theme, form: &mut TransactionFormState) {
    // Description with character count
    ui.horizontal(|ui| {
        field_label(ui, theme, "Description");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let char_count = form.description.len();
            let count_color = if char_count > MAX_DESCRIPTION_LENGTH {
                theme.status.expense
            } else if char_count > MAX_DESCRIPTION_LENGTH * 4 / 5 {
                theme.status.warning
            } else {
                theme.typography.secondary
            };
            ui.label(
                egui::RichText::new(format!("{}/{}", char_count, MAX_DESCRIPTION_LENGTH))
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(count_color),
            );
        });
    });
    ui.add_space(4.0);
    let description_response = ui.add(
        egui::TextEdit::singleline(&mut form.description)
            .hint_text("What was this for?")
            .desired_width(f32::INFINITY)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
    );
    field_error(ui, theme, form.description_error.as_deref());
    ui.add_space(10.0);

    // Amount with a static dollar sign
    field_label(ui, theme, "Amount");
    ui.add_space(4.0);
    let mut amount_changed = false;
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
        amount_changed = amount_response.changed();
    });
    field_error(ui, theme, form.amount_error.as_deref());
    ui.add_space(10.0);

    // Type pills; switching resets the category to match
    field_label(ui, theme, "Type");
    ui.add_space(4.0);
    let mut type_changed = false;
    ui.horizontal(|ui| {
        for (transaction_type, label) in [
            (TransactionType::Expense, "Expense"),
            (TransactionType::Income, "Income"),
        ] {
            let active = form.transaction_type == transaction_type;
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
                egui::RichText::new(label)
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                    .color(text_color),
            )
            .fill(fill)
            .rounding(egui::Rounding::same(14.0));

            if ui.add(button).clicked() && !active {
                form.transaction_type = transaction_type;
                type_changed = true;
            }
        }
    });
    if type_changed {
        form.category = match form.transaction_type {
            TransactionType::Income => Category::Salary,
            TransactionType::Expense => Category::Food,
        };
    }
    ui.add_space(10.0);

    // Category picker limited to the chosen type
    field_label(ui, theme, "Category");
    ui.add_space(4.0);
    let wants_income = form.transaction_type == TransactionType::Income;
    egui::ComboBox::from_id_source("transaction_category_picker")
        .selected_text(form.category.label())
        .width(200.0)
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                if category.is_income() != wants_income {
                    continue;
                }
                ui.selectable_value(&mut form.category, category, category.label());
            }
        });
    ui.add_space(10.0);

    // Date
    field_label(ui, theme, "Date");
    ui.add_space(4.0);
    let date_response = ui.add(
        egui::TextEdit::singleline(&mut form.date)
            .hint_text("YYYY-MM-DD")
            .desired_width(140.0)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
    );
    field_error(ui, theme, form.date_error.as_deref());
    ui.add_space(10.0);

    // Optional notes
    field_label(ui, theme, "Notes (optional)");
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut form.notes)
            .hint_text("Anything worth remembering")
            .desired_width(f32::INFINITY)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional)),
    );

    if description_response.changed() || amount_changed || date_response.changed() {
        validate_transaction_form(form);
    }
}

fn field_label(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
            .color(theme.typography.secondary),
    );
}

fn field_error(ui: &mut egui::Ui, theme: &Theme, error: Option<&str>) {
    if let Some(error) = error {
        ui.add_space(3.0);
        ui.label(
            egui::RichText::new(error)
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(theme.status.expense),
        );
    }
}

/// Validate the form fields, setting per-field errors
fn validate_transaction_form(form: &mut TransactionFormState) {
    form.description_error = None;
    form.amount_error = None;
    form.date_error = None;

    let description = form.description.trim();
    if description.is_empty() {
        form.description_error = Some("Description is required".to_string());
    } else if description.len() > MAX_DESCRIPTION_LENGTH {
        form.description_error = Some(format!(
            "Description must be {} characters or less",
            MAX_DESCRIPTION_LENGTH
        ));
    }

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

    if chrono::NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").is_err() {
        form.date_error = Some("Use YYYY-MM-DD format".to_string());
    }

    form.is_valid = form.description_error.is_none()
        && form.amount_error.is_none()
        && form.date_error.is_none();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> TransactionFormState {
        let mut form = TransactionFormState::new();
        form.description = "Coffee".to_string();
        form.amount = "4.50".to_string();
        form.date = "2023-10-18".to_string();
        form
    }

    #[test]
    fn test_valid_form_passes() {
        let mut form = filled_form();
        validate_transaction_form(&mut form);

        assert!(form.is_valid);
        assert!(form.description_error.is_none());
        assert!(form.amount_error.is_none());
        assert!(form.date_error.is_none());
    }

    #[test]
    fn test_empty_description_fails() {
        let mut form = filled_form();
        form.description = "  ".to_string();
        validate_transaction_form(&mut form);

        assert!(!form.is_valid);
        assert!(form.description_error.is_some());
    }

    #[test]
    fn test_overlong_description_fails() {
        let mut form = filled_form();
        form.description = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        validate_transaction_form(&mut form);

        assert!(!form.is_valid);
        assert!(form.description_error.is_some());
    }

    #[test]
    fn test_non_numeric_amount_fails() {
        let mut form = filled_form();
        form.amount = "abc".to_string();
        validate_transaction_form(&mut form);

        assert!(!form.is_valid);
        assert_eq!(form.amount_error.as_deref(), Some("Enter a valid number"));
    }

    #[test]
    fn test_zero_amount_fails() {
        let mut form = filled_form();
        form.amount = "0".to_string();
        validate_transaction_form(&mut form);

        assert!(!form.is_valid);
        assert_eq!(
            form.amount_error.as_deref(),
            Some("Amount must be greater than zero")
        );
    }

    #[test]
    fn test_bad_date_fails() {
        let mut form = filled_form();
        form.date = "10/18/2023".to_string();
        validate_transaction_form(&mut form);

        assert!(!form.is_valid);
        assert_eq!(form.date_error.as_deref(), Some("Use YYYY-MM-DD format"));
    }
}
