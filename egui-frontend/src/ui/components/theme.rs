//! # Theme Configuration
//!
//! This module provides centralized color configuration for the GoalGrove
//! dashboard. All visual styling should use these constants to ensure
//! consistency across tabs and modals.
//!
//! ## Light and Dark
//! The header carries a theme toggle, so every color lives in a `Theme`
//! value and widgets read the active one through `ThemeMode::theme()`.
//! Both palettes are `const`, nothing is computed at runtime.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::ThemeMode;
//!
//! let theme = ThemeMode::Light.theme();
//! let color = theme.interactive.accent;
//! ```

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Which palette is active; persisted across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The palette for this mode
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }

    /// Flip between light and dark
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, nav pills, hover states)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Amount and progress colors
    pub status: StatusColors,
    /// Table-specific colors
    pub table: TableColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary accent used for buttons, rings and the active nav pill
    pub accent: Color32,
    /// Accent while hovered
    pub accent_hover: Color32,
    /// Hover background for flat controls
    pub hover_background: Color32,
    /// Background for inactive nav pills and secondary buttons
    pub inactive_background: Color32,
    /// Border for inputs and secondary buttons
    pub button_border: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Gradient background colors
    pub gradient_top: Color32,
    pub gradient_bottom: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
    /// Dim layer behind open modals
    pub modal_overlay: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (captions, deltas, hints)
    pub secondary: Color32,
    /// Text on accent-colored fills
    pub on_accent: Color32,
}

/// Amount and progress colors
#[derive(Debug, Clone)]
pub struct StatusColors {
    /// Positive amounts and healthy progress
    pub income: Color32,
    /// Negative amounts and exhausted budgets
    pub expense: Color32,
    /// Budgets and goals in the caution band
    pub warning: Color32,
    /// Unfilled ring and bar track
    pub track: Color32,
}

/// Table-specific colors
#[derive(Debug, Clone)]
pub struct TableColors {
    /// Header row background
    pub header_background: Color32,
    /// Row colors
    pub row_even: Color32,
    pub row_odd: Color32,
    /// Border colors
    pub border: Color32,
}

/// Light palette
pub const LIGHT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(0, 113, 227),
        accent_hover: Color32::from_rgb(0, 119, 237),
        hover_background: Color32::from_rgba_premultiplied(0, 0, 0, 10),
        inactive_background: Color32::from_rgb(245, 245, 247),
        button_border: Color32::from_rgb(229, 229, 234),
    },
    layout: LayoutColors {
        gradient_top: Color32::from_rgb(245, 245, 247),
        gradient_bottom: Color32::from_rgb(232, 232, 237),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(229, 229, 234),
        modal_overlay: Color32::from_rgba_premultiplied(0, 0, 0, 100),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(29, 29, 31),
        secondary: Color32::from_rgb(134, 134, 139),
        on_accent: Color32::WHITE,
    },
    status: StatusColors {
        income: Color32::from_rgb(52, 199, 89),
        expense: Color32::from_rgb(255, 59, 48),
        warning: Color32::from_rgb(255, 149, 0),
        track: Color32::from_rgb(232, 232, 237),
    },
    table: TableColors {
        header_background: Color32::from_rgb(245, 245, 247),
        row_even: Color32::WHITE,
        row_odd: Color32::from_rgb(250, 250, 252),
        border: Color32::from_rgb(229, 229, 234),
    },
};

/// Dark palette
pub const DARK_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(10, 132, 255),
        accent_hover: Color32::from_rgb(40, 145, 255),
        hover_background: Color32::from_rgba_premultiplied(255, 255, 255, 15),
        inactive_background: Color32::from_rgb(44, 44, 46),
        button_border: Color32::from_rgb(58, 58, 60),
    },
    layout: LayoutColors {
        gradient_top: Color32::from_rgb(22, 22, 24),
        gradient_bottom: Color32::from_rgb(10, 10, 12),
        card_background: Color32::from_rgb(28, 28, 30),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 60),
        card_border: Color32::from_rgb(44, 44, 46),
        modal_overlay: Color32::from_rgba_premultiplied(0, 0, 0, 150),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(245, 245, 247),
        secondary: Color32::from_rgb(152, 152, 157),
        on_accent: Color32::WHITE,
    },
    status: StatusColors {
        income: Color32::from_rgb(48, 209, 88),
        expense: Color32::from_rgb(255, 69, 58),
        warning: Color32::from_rgb(255, 159, 10),
        track: Color32::from_rgb(58, 58, 60),
    },
    table: TableColors {
        header_background: Color32::from_rgb(36, 36, 38),
        row_even: Color32::from_rgb(28, 28, 30),
        row_odd: Color32::from_rgb(32, 32, 34),
        border: Color32::from_rgb(44, 44, 46),
    },
};

/// Helper functions for common styling patterns
impl Theme {
    /// Color for a signed amount: income green, expense red
    pub fn amount_color(&self, amount: f64) -> Color32 {
        if amount >= 0.0 {
            self.status.income
        } else {
            self.status.expense
        }
    }

    /// Budget bar color by spent percentage: green below 50, orange below
    /// 75, red at or above
    pub fn budget_bar_color(&self, percentage_used: u32) -> Color32 {
        if percentage_used < 50 {
            self.status.income
        } else if percentage_used < 75 {
            self.status.warning
        } else {
            self.status.expense
        }
    }

    /// Goal bar color by completion percentage: red below 30, yellow below
    /// 70, green at or above
    pub fn goal_bar_color(&self, percentage: f64) -> Color32 {
        if percentage < 30.0 {
            self.status.expense
        } else if percentage < 70.0 {
            self.status.warning
        } else {
            self.status.income
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn test_amount_color_follows_sign() {
        let theme = ThemeMode::Light.theme();
        assert_eq!(theme.amount_color(3200.0), theme.status.income);
        assert_eq!(theme.amount_color(-120.0), theme.status.expense);
    }

    #[test]
    fn test_budget_bar_bands() {
        let theme = ThemeMode::Light.theme();
        assert_eq!(theme.budget_bar_color(40), theme.status.income);
        assert_eq!(theme.budget_bar_color(53), theme.status.warning);
        assert_eq!(theme.budget_bar_color(95), theme.status.expense);
    }

    #[test]
    fn test_goal_bar_bands() {
        let theme = ThemeMode::Light.theme();
        assert_eq!(theme.goal_bar_color(25.0), theme.status.expense);
        assert_eq!(theme.goal_bar_color(50.0), theme.status.warning);
        assert_eq!(theme.goal_bar_color(75.0), theme.status.income);
    }
}
