//! # UI Components Module
//!
//! This module organizes all UI components for the GoalGrove application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Visual styling, backgrounds, and card chrome
//! - `theme` - Light/dark palettes and semantic color lookups
//! - `animated_number` - Number labels that tween between values
//! - `progress_ring` - Circular progress indicator with reveal animation
//! - `header` - Application header with navigation and theme toggle
//! - `summary_cards` - Balance, income, and expense summary cards
//! - `expense_card` - Expense breakdown by category
//! - `savings_goals` - Dashboard savings goal ring strip
//! - `insights_panel` - Insights list, question form, and analysis card
//! - `dashboard_view` - Dashboard layout and section entrances
//! - `transactions_view` - Transaction list with filters and table
//! - `budget_view` - Budget cards with usage bars
//! - `goals_view` - Savings goal management grid
//! - `modals` - Modal dialogs and popup interfaces
//!
//! ## Architecture:
//! The components are organized to promote reusability and maintainability.
//! Each module has a clear responsibility and minimal dependencies on others.

pub mod animated_number;
pub mod budget_view;
pub mod dashboard_view;
pub mod expense_card;
pub mod goals_view;
pub mod header;
pub mod insights_panel;
pub mod modals;
pub mod progress_ring;
pub mod savings_goals;
pub mod styling;
pub mod summary_cards;
pub mod theme;
pub mod transactions_view;

pub use animated_number::AnimatedNumber;
pub use progress_ring::{ProgressRing, ProgressRingConfig, RingGeometry};
pub use styling::{setup_app_style, draw_gradient_background, draw_card_container, card_ui};
pub use theme::*;
