//! # UI State Module
//!
//! This module organizes per-concern state for the GoalGrove app. Each
//! submodule owns one slice of the application state.
//!
//! ## Module Organization:
//! - `modal_state` - Modal visibility flags and form input state
//! - `dashboard_state` - Dashboard entrance fades and advisor form
//!
//! ## Architecture:
//! The main app struct composes these slices so each tab and modal reads and
//! writes only the state it owns.

pub mod dashboard_state;
pub mod modal_state;

pub use dashboard_state::DashboardState;
pub use modal_state::{
    AddFundsFormState, BudgetFormState, ModalState, TransactionFormState,
};
