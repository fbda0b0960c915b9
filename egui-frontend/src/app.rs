//! # App Module
//!
//! This module serves as the main entry point for the GoalGrove application,
//! re-exporting the app type for easy access throughout the codebase.
//!
//! ## Purpose:
//! This module provides a clean, centralized import point for the application
//! state, allowing `main` to simply `use app::GoalGroveApp` without reaching
//! into the UI module tree.

// Re-export the application struct for easy access
pub use crate::ui::app_state::GoalGroveApp;
