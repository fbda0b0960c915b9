//! # Modals Module
//!
//! This module organizes the modal dialogs for the app.
//!
//! ## Module Organization:
//! - `transaction_form` - Add transaction modal
//! - `budget_form` - Create budget modal
//! - `add_funds` - Add funds to a goal modal
//!
//! ## Architecture:
//! Each modal is self-contained with its own rendering logic, validation,
//! and submit path. Visibility flags live in `ModalState` so only one modal
//! can be open at a time.

pub mod add_funds;
pub mod budget_form;
pub mod transaction_form;

use eframe::egui;

use crate::ui::app_state::GoalGroveApp;

impl GoalGroveApp {
    /// Render whichever modal is currently open
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_add_transaction_modal(ctx);
        self.render_budget_modal(ctx);
        self.render_add_funds_modal(ctx);
    }
}
