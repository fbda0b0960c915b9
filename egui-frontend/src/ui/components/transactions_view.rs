//! # Transactions View Module
//!
//! This module renders the transactions tab: the filter tabs, the
//! transaction table, and the button that opens the add-transaction modal.
//!
//! ## Key Functions:
//! - `render_transactions()` - Full transactions tab
//! - `render_filter_tabs()` - All / Income / Expenses pill row
//!
//! ## Purpose:
//! The table always reflects the active filter. Deleting a row goes through
//! the app so the balance rolls back and a toast confirms the removal.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::Transaction;

use crate::ui::app_state::{GoalGroveApp, TransactionFilter};
use crate::ui::components::styling;
use crate::ui::components::theme::Theme;
use crate::ui::format::NumberFormat;

const ROW_HEIGHT: f32 = 44.0;
const HEADER_HEIGHT: f32 = 32.0;

impl GoalGroveApp {
    /// Render the transactions tab
    pub fn render_transactions(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Transactions")
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme.typography.primary),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if accent_button(ui, theme, "+ Add Transaction").clicked() {
                    self.modal.open_add_transaction();
                }
            });
        });
        ui.add_space(10.0);

        self.render_filter_tabs(ui);
        ui.add_space(10.0);

        let transactions: Vec<Transaction> = self
            .filtered_transactions()
            .into_iter()
            .cloned()
            .collect();
        let mut pending_delete: Option<String> = None;

        let card_rect = ui.available_rect_before_wrap().shrink2(egui::vec2(0.0, 4.0));
        styling::draw_card_container(ui, card_rect, 14.0, theme);
        ui.allocate_ui_at_rect(card_rect.shrink(16.0), |ui| {
            if transactions.is_empty() {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("No transactions match this filter")
                            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                            .color(theme.typography.secondary),
                    );
                });
                return;
            }

            render_transaction_table(ui, theme, &transactions, &mut pending_delete);
        });

        if let Some(transaction_id) = pending_delete {
            self.delete_transaction(&transaction_id);
        }
    }

    /// Pill row switching between All, Income, and Expenses
    fn render_filter_tabs(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme_mode.theme();

        ui.horizontal(|ui| {
            for filter in TransactionFilter::ALL {
                let active = self.transaction_filter == filter;
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
                    egui::RichText::new(filter.label())
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .color(text_color),
                )
                .fill(fill)
                .rounding(egui::Rounding::same(16.0))
                .stroke(egui::Stroke::new(1.0, theme.interactive.button_border));

                if ui.add(button).clicked() {
                    self.transaction_filter = filter;
                }
            }
        });
    }
}

/// Render the transaction table body
fn render_transaction_table(
    ui: &mut egui::Ui,
    theme: &Theme,
    transactions: &[Transaction],
    pending_delete: &mut Option<String>,
) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(120.0))
        .column(Column::remainder())
        .column(Column::exact(110.0))
        .column(Column::exact(40.0))
        .header(HEADER_HEIGHT, |mut header| {
            for title in ["Date", "Description", "Amount", ""] {
                header.col(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(title)
                                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(theme.typography.secondary),
                        )
                        .selectable(false),
                    );
                });
            }
        })
        .body(|mut body| {
            for transaction in transactions {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format_transaction_date(&transaction.date))
                                    .font(egui::FontId::new(
                                        13.0,
                                        egui::FontFamily::Proportional,
                                    ))
                                    .color(theme.typography.secondary),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&transaction.description)
                                    .font(egui::FontId::new(
                                        14.0,
                                        egui::FontFamily::Proportional,
                                    ))
                                    .strong()
                                    .color(theme.typography.primary),
                            )
                            .selectable(false),
                        );
                        ui.add_space(8.0);
                        category_chip(ui, transaction);
                    });
                    row.col(|ui| {
                        let amount = transaction.amount;
                        let text = if amount >= 0.0 {
                            format!("+{}", NumberFormat::currency_cents().format(amount))
                        } else {
                            format!("-{}", NumberFormat::currency_cents().format(amount.abs()))
                        };
                        ui.colored_label(
                            theme.amount_color(amount),
                            egui::RichText::new(text)
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .strong(),
                        );
                    });
                    row.col(|ui| {
                        if ui
                            .button(egui::RichText::new("🗑").font(egui::FontId::new(
                                14.0,
                                egui::FontFamily::Proportional,
                            )))
                            .on_hover_text("Delete transaction")
                            .clicked()
                        {
                            *pending_delete = Some(transaction.id.clone());
                        }
                    });
                });
            }
        });
}

/// Rounded chip showing the transaction's category in its color
fn category_chip(ui: &mut egui::Ui, transaction: &Transaction) {
    let (r, g, b) = transaction.category.color_rgb();
    let color = egui::Color32::from_rgb(r, g, b);

    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(transaction.category.label())
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(color),
                )
                .selectable(false),
            );
        });
}

/// Format an RFC 3339 date for the table's date column
fn format_transaction_date(date: &str) -> String {
    let date_part = date.split('T').next().unwrap_or(date);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %d, %Y").to_string(),
        Err(_) => date_part.to_string(),
    }
}

/// Accent-filled action button
pub fn accent_button(ui: &mut egui::Ui, theme: &Theme, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(label)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .strong()
                .color(theme.typography.on_accent),
        )
        .fill(theme.interactive.accent)
        .rounding(egui::Rounding::same(10.0)),
    )
}
