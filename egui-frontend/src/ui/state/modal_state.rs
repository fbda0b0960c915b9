//! # Modal State Module
//!
//! This module contains all state related to modal dialogs and their visibility.
//!
//! ## Responsibilities:
//! - Modal visibility flags
//! - Form input state for each modal
//!
//! ## Purpose:
//! This centralizes all modal-related state management, making it easier to
//! coordinate modal behavior and prevent conflicts between different modals.

use shared::{BudgetPeriod, Category, TransactionType};

/// Add-transaction form state
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub description: String,
    pub amount: String,
    pub transaction_type: TransactionType,
    pub category: Category,
    /// Transaction date in YYYY-MM-DD format
    pub date: String,
    pub notes: String,
    pub description_error: Option<String>,
    pub amount_error: Option<String>,
    pub date_error: Option<String>,
    pub is_valid: bool,
}

impl TransactionFormState {
    pub fn new() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            transaction_type: TransactionType::Expense,
            category: Category::Food,
            date: today(),
            notes: String::new(),
            description_error: None,
            amount_error: None,
            date_error: None,
            is_valid: true,
        }
    }

    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.transaction_type = TransactionType::Expense;
        self.category = Category::Food;
        self.date = today();
        self.notes.clear();
        self.description_error = None;
        self.amount_error = None;
        self.date_error = None;
        self.is_valid = true;
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Budget create/edit form state
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub category: Category,
    pub amount: String,
    pub period: BudgetPeriod,
    pub amount_error: Option<String>,
    pub is_valid: bool,
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            category: Category::Food,
            amount: String::new(),
            period: BudgetPeriod::Monthly,
            amount_error: None,
            is_valid: true,
        }
    }

    pub fn clear(&mut self) {
        self.category = Category::Food;
        self.amount.clear();
        self.period = BudgetPeriod::Monthly;
        self.amount_error = None;
        self.is_valid = true;
    }
}

/// Add-funds-to-goal form state
#[derive(Debug, Clone)]
pub struct AddFundsFormState {
    pub amount: String,
    pub amount_error: Option<String>,
    pub is_valid: bool,
}

impl AddFundsFormState {
    pub fn new() -> Self {
        Self {
            amount: String::new(),
            amount_error: None,
            is_valid: true,
        }
    }

    pub fn clear(&mut self) {
        self.amount.clear();
        self.amount_error = None;
        self.is_valid = true;
    }
}

/// Modal visibility and modal-specific state
#[derive(Debug)]
pub struct ModalState {
    /// Whether the add transaction modal is visible
    pub show_add_transaction_modal: bool,

    /// Whether the budget create/edit modal is visible
    pub show_budget_modal: bool,

    /// Whether the add funds modal is visible
    pub show_add_funds_modal: bool,

    /// Goal the add funds modal applies to
    pub add_funds_goal_id: Option<String>,

    /// Guards against the opening click counting as a backdrop click
    pub modal_just_opened: bool,

    /// Add-transaction form state
    pub transaction_form: TransactionFormState,

    /// Budget form state
    pub budget_form: BudgetFormState,

    /// Add-funds form state
    pub add_funds_form: AddFundsFormState,
}

impl ModalState {
    /// Create new modal state with all modals hidden
    pub fn new() -> Self {
        Self {
            show_add_transaction_modal: false,
            show_budget_modal: false,
            show_add_funds_modal: false,
            add_funds_goal_id: None,
            modal_just_opened: false,
            transaction_form: TransactionFormState::new(),
            budget_form: BudgetFormState::new(),
            add_funds_form: AddFundsFormState::new(),
        }
    }

    /// Whether any modal is currently visible
    pub fn any_open(&self) -> bool {
        self.show_add_transaction_modal || self.show_budget_modal || self.show_add_funds_modal
    }

    /// Open the add transaction modal with a fresh form
    pub fn open_add_transaction(&mut self) {
        self.hide_all_modals();
        self.transaction_form.clear();
        self.show_add_transaction_modal = true;
        self.modal_just_opened = true;
    }

    /// Open the budget modal with a fresh form
    pub fn open_budget(&mut self) {
        self.hide_all_modals();
        self.budget_form.clear();
        self.show_budget_modal = true;
        self.modal_just_opened = true;
    }

    /// Open the add funds modal targeting one goal
    pub fn open_add_funds(&mut self, goal_id: String) {
        self.hide_all_modals();
        self.add_funds_form.clear();
        self.add_funds_goal_id = Some(goal_id);
        self.show_add_funds_modal = true;
        self.modal_just_opened = true;
    }

    /// Hide all modals and reset their forms
    pub fn hide_all_modals(&mut self) {
        self.show_add_transaction_modal = false;
        self.show_budget_modal = false;
        self.show_add_funds_modal = false;
        self.add_funds_goal_id = None;
        self.transaction_form.clear();
        self.budget_form.clear();
        self.add_funds_form.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_all_modals_resets_forms() {
        let mut state = ModalState::new();
        state.show_add_transaction_modal = true;
        state.transaction_form.description = "Coffee".to_string();
        state.add_funds_goal_id = Some("goal-1".to_string());

        state.hide_all_modals();

        assert!(!state.any_open());
        assert!(state.transaction_form.description.is_empty());
        assert!(state.add_funds_goal_id.is_none());
    }

    #[test]
    fn test_opening_one_modal_closes_the_others() {
        let mut state = ModalState::new();
        state.open_budget();
        state.open_add_funds("goal-2".to_string());

        assert!(!state.show_budget_modal);
        assert!(state.show_add_funds_modal);
        assert_eq!(state.add_funds_goal_id.as_deref(), Some("goal-2"));
        assert!(state.modal_just_opened);
    }
}
