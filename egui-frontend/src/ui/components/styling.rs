//! # Styling Module
//!
//! This module contains the global style setup and shared drawing helpers for
//! the GoalGrove dashboard.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling for the active theme
//! - `draw_gradient_background()` - Draw the vertical background gradient
//! - `draw_card_container()` - Draw card-style containers with shadows
//!
//! ## Purpose:
//! This module ensures visual consistency and provides a centralized place
//! for styling concerns. Cards, tables and modals all draw on the same
//! palette so the light/dark toggle restyles the whole app at once.

use eframe::egui;

use crate::ui::components::theme::{Theme, ThemeMode};

/// Setup global UI styling for the active theme
pub fn setup_app_style(ctx: &egui::Context, mode: ThemeMode) {
    let theme = mode.theme();

    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = if mode.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        // Panels stay transparent so the gradient shows through
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        // Text edits read from extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = if mode.is_dark() {
            egui::Color32::from_rgb(44, 44, 46)
        } else {
            egui::Color32::from_rgb(248, 248, 248)
        };

        style.visuals.selection.bg_fill = theme.interactive.accent.gamma_multiply(0.35);
        style.visuals.hyperlink_color = theme.interactive.accent;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
        style.visuals.window_rounding = egui::Rounding::same(14.0);

        style
    });
}

/// Draw the vertical background gradient behind all content
pub fn draw_gradient_background(ui: &mut egui::Ui, rect: egui::Rect, theme: &Theme) {
    let mut mesh = egui::Mesh::default();
    let top = theme.layout.gradient_top;
    let bottom = theme.layout.gradient_bottom;

    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Paint card chrome over the current Ui rect and lay out content inside it
pub fn card_ui(ui: &mut egui::Ui, theme: &Theme, add_contents: impl FnOnce(&mut egui::Ui)) {
    let rect = ui.max_rect();
    draw_card_container(ui, rect, 14.0, theme);

    let inner = rect.shrink(16.0);
    ui.allocate_ui_at_rect(inner, add_contents);
}

/// Draw a card container with shadow, fill and border
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32, theme: &Theme) {
    let painter = ui.painter();

    // Shadow first, offset slightly
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(0.0, 2.0), rect.size());
    painter.rect_filled(
        shadow_rect,
        egui::Rounding::same(rounding),
        theme.layout.card_shadow,
    );

    painter.rect_filled(
        rect,
        egui::Rounding::same(rounding),
        theme.layout.card_background,
    );
    painter.rect_stroke(
        rect,
        egui::Rounding::same(rounding),
        egui::Stroke::new(1.0, theme.layout.card_border),
    );
}
