//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the
//! primary update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//! - `eframe::App::save()` - Persists the theme choice between runs
//! - `render_main_content()` - Routes to the active tab's view
//!
//! ## Purpose:
//! This module serves as the central coordinator for the entire application,
//! orchestrating:
//! - UI styling setup per theme
//! - Input handling (ESC key, etc.)
//! - Header and main content rendering
//! - Modal management
//! - Repaint scheduling while animations run
//!
//! ## Application Flow:
//! 1. Apply the themed styling
//! 2. Handle global input (ESC closes modals)
//! 3. Expire stale toasts
//! 4. Render header, content for the active tab, toast, and modals
//! 5. Keep repainting while any tween or entrance fade is mid-flight

use std::time::Instant;

use eframe::egui;

use crate::ui::app_state::{GoalGroveApp, MainTab, THEME_STORAGE_KEY};
use crate::ui::components::styling::{draw_gradient_background, setup_app_style};

const HEADER_HEIGHT: f32 = 60.0;
const CONTENT_SIDE_MARGIN: f32 = 24.0;
const CONTENT_TOP_MARGIN: f32 = 12.0;

impl eframe::App for GoalGroveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx, self.theme_mode);
        let now = Instant::now();

        // ESC closes any open modal
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.modal.any_open() {
            self.modal.hide_all_modals();
        }

        // Clear messages after a delay
        self.expire_messages(now);
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.available_rect_before_wrap();
            draw_gradient_background(ui, full_rect, self.theme_mode.theme());

            let header_rect = egui::Rect::from_min_size(
                full_rect.min,
                egui::vec2(full_rect.width(), HEADER_HEIGHT),
            );
            let content_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, full_rect.min.y + HEADER_HEIGHT),
                egui::vec2(full_rect.width(), full_rect.height() - HEADER_HEIGHT),
            );

            ui.allocate_ui_at_rect(header_rect, |ui| {
                self.render_header(ui);
            });

            let padded_content = content_rect
                .shrink2(egui::vec2(CONTENT_SIDE_MARGIN, CONTENT_TOP_MARGIN));
            ui.allocate_ui_at_rect(padded_content, |ui| {
                self.render_main_content(ui, now);
            });
        });

        self.render_messages(ctx);
        self.render_modals(ctx);

        // Animations sample wall-clock time, so keep frames coming while any run
        if self.animations.any_animating(now) || self.dashboard.entrance_running(now) {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, THEME_STORAGE_KEY, &self.theme_mode);
    }
}

impl GoalGroveApp {
    /// Render the content area for the active tab
    pub fn render_main_content(&mut self, ui: &mut egui::Ui, now: Instant) {
        match self.current_tab {
            MainTab::Dashboard => self.render_dashboard(ui, now),
            MainTab::Transactions => self.render_transactions(ui),
            MainTab::Budget => self.render_budgets(ui),
            MainTab::Goals => self.render_goals(ui, now),
        }
    }
}
