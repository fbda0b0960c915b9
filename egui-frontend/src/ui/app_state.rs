//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the GoalGrove dashboard.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining available tabs (Dashboard, Transactions, Budget, Goals)
//! - `TransactionFilter` - Income/expense filter for the transactions tab
//! - `GoalGroveApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize app instance, restoring the persisted theme
//! - `select_tab()` - Tab navigation with dashboard entrance replay
//! - `add_transaction()` / `delete_transaction()` - Transaction mutations
//! - `upsert_budget()` - Create or update the budget for a category
//! - `add_funds_to_goal()` / `delete_goal()` - Savings goal mutations
//!
//! ## State Management:
//! The GoalGroveApp struct holds all application state in a single location,
//! making it easy to manage and pass between different UI components. This
//! follows the single source of truth principle for state management. There
//! is no backing store; mutations apply directly to the in-memory vectors.

use std::time::{Duration, Instant};

use log::info;
use shared::*;

use crate::ui::animation::AnimationRegistry;
use crate::ui::components::savings_goals::goal_ring_id;
use crate::ui::components::theme::ThemeMode;
use crate::ui::state::{DashboardState, ModalState};

/// Storage key for the persisted theme choice
pub const THEME_STORAGE_KEY: &str = "goalgrove_theme";

/// How long success and error toasts stay on screen
pub const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Transactions,
    Budget,
    Goals,
}

impl MainTab {
    /// All tabs in navigation order
    pub const ALL: [MainTab; 4] = [
        MainTab::Dashboard,
        MainTab::Transactions,
        MainTab::Budget,
        MainTab::Goals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Transactions => "Transactions",
            MainTab::Budget => "Budget",
            MainTab::Goals => "Goals",
        }
    }
}

/// Row filter for the transactions tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionFilter {
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    /// All filters in toggle order
    pub const ALL: [TransactionFilter; 3] = [
        TransactionFilter::All,
        TransactionFilter::Income,
        TransactionFilter::Expense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionFilter::All => "All",
            TransactionFilter::Income => "Income",
            TransactionFilter::Expense => "Expenses",
        }
    }

    /// Whether a transaction passes this filter
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => transaction.transaction_type == TransactionType::Income,
            TransactionFilter::Expense => transaction.transaction_type == TransactionType::Expense,
        }
    }
}

/// Main application struct for the egui GoalGrove dashboard
pub struct GoalGroveApp {
    // Financial data
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
    pub breakdown: Vec<ExpenseBreakdownItem>,
    pub snapshot: FinancialSnapshot,
    pub insights: Vec<Insight>,

    // UI state
    pub current_tab: MainTab,
    pub transaction_filter: TransactionFilter,
    pub theme_mode: ThemeMode,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub message_set_at: Option<Instant>,

    // Animation state
    pub animations: AnimationRegistry,
    pub dashboard: DashboardState,

    // Modal state
    pub modal: ModalState,
}

impl GoalGroveApp {
    /// Create a new GoalGroveApp, restoring the persisted theme choice
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing GoalGrove dashboard");

        let theme_mode = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, THEME_STORAGE_KEY))
            .unwrap_or(ThemeMode::Light);

        let mut app = Self::with_seed_data();
        app.theme_mode = theme_mode;

        crate::ui::components::styling::setup_app_style(&cc.egui_ctx, theme_mode);

        Ok(app)
    }

    /// Build the app state around the sample dataset
    pub fn with_seed_data() -> Self {
        let mut dashboard = DashboardState::new();
        dashboard.begin_entrance(Instant::now());

        Self {
            // Financial data
            transactions: crate::data::seed_transactions(),
            budgets: crate::data::seed_budgets(),
            goals: crate::data::seed_goals(),
            breakdown: crate::data::expense_breakdown(),
            snapshot: crate::data::financial_snapshot(),
            insights: crate::data::starter_insights(),

            // UI state
            current_tab: MainTab::Dashboard,
            transaction_filter: TransactionFilter::All,
            theme_mode: ThemeMode::Light,
            error_message: None,
            success_message: None,
            message_set_at: None,

            // Animation state
            animations: AnimationRegistry::new(),
            dashboard,

            // Modal state
            modal: ModalState::new(),
        }
    }

    /// Switch to a tab, replaying the dashboard entrance when returning to it
    pub fn select_tab(&mut self, tab: MainTab) {
        if self.current_tab == tab {
            return;
        }

        self.current_tab = tab;
        if tab == MainTab::Dashboard {
            self.dashboard.begin_entrance(Instant::now());
        }
        info!("📑 Switched to {} tab", tab.label());
    }

    /// Flip between light and dark mode
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        info!("🎨 Switched to {:?} theme", self.theme_mode);
    }

    /// Record a new transaction and update the running balance
    pub fn add_transaction(
        &mut self,
        description: String,
        amount: f64,
        category: Category,
        date: String,
        notes: Option<String>,
    ) {
        let mut transaction = Transaction::new(
            description,
            amount,
            category,
            date,
            chrono::Utc::now().timestamp_millis() as u64,
        );
        transaction.notes = notes;

        info!(
            "💸 Added transaction '{}' for {:.2}",
            transaction.description, transaction.amount
        );
        self.snapshot.total_balance += amount;
        self.set_success(format!("Added \"{}\"", transaction.description));
        self.transactions.insert(0, transaction);
    }

    /// Remove a transaction by id and roll its amount out of the balance
    pub fn delete_transaction(&mut self, id: &str) {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                let removed = self.transactions.remove(index);
                self.snapshot.total_balance -= removed.amount;
                info!("🗑️ Deleted transaction '{}'", removed.description);
                self.set_success(format!("Deleted \"{}\"", removed.description));
            }
            None => {
                self.set_error("Transaction no longer exists".to_string());
            }
        }
    }

    /// Create a budget for a category, or update the allocation if one exists
    pub fn upsert_budget(&mut self, category: Category, amount: f64, period: BudgetPeriod) {
        match self.budgets.iter_mut().find(|b| b.category == category) {
            Some(budget) => {
                budget.amount = amount;
                budget.period = period;
                info!("📊 Updated {} budget to {:.2}", category.label(), amount);
                self.set_success(format!("Updated {} budget", category.label()));
            }
            None => {
                self.budgets.push(Budget::new(category, amount, period));
                info!("📊 Created {} budget at {:.2}", category.label(), amount);
                self.set_success(format!("Created {} budget", category.label()));
            }
        }
    }

    /// Add savings toward a goal
    pub fn add_funds_to_goal(&mut self, goal_id: &str, amount: f64) {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            self.set_error("Goal no longer exists".to_string());
            return;
        };

        goal.current_amount += amount;
        info!("💰 Added {:.2} to goal '{}'", amount, goal.name);

        let message = if goal.progress_percentage() >= 100.0 {
            format!("🎉 {} goal reached!", goal.name)
        } else {
            format!("Added ${:.0} to {}", amount, goal.name)
        };
        self.set_success(message);
    }

    /// Delete a goal and cancel its ring animation
    pub fn delete_goal(&mut self, goal_id: &str) {
        let Some(index) = self.goals.iter().position(|g| g.id == goal_id) else {
            self.set_error("Goal no longer exists".to_string());
            return;
        };

        let removed = self.goals.remove(index);
        self.animations.forget(goal_ring_id(&removed.id));
        info!("🗑️ Deleted goal '{}'", removed.name);
        self.set_success(format!("Deleted {} goal", removed.name));
    }

    /// Transactions passing the active filter, newest first
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| self.transaction_filter.matches(t))
            .collect()
    }

    /// Acknowledge an insights question and reveal the analysis card
    pub fn submit_question(&mut self) {
        let question = self.dashboard.question_input.trim().to_string();
        if question.is_empty() {
            return;
        }

        info!("✨ Insights question: {}", question);
        self.dashboard.question_input.clear();
        self.dashboard.show_analysis = true;
        self.set_success(format!("Analyzing: \"{}\"", question));
    }

    /// Show a success toast
    pub fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
        self.message_set_at = Some(Instant::now());
    }

    /// Show an error toast
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
        self.message_set_at = Some(Instant::now());
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_set_at = None;
    }

    /// Drop messages that have been on screen past their lifetime
    pub fn expire_messages(&mut self, now: Instant) {
        if let Some(set_at) = self.message_set_at {
            if now.saturating_duration_since(set_at) >= MESSAGE_LIFETIME {
                self.clear_messages();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_transaction_updates_balance_and_order() {
        let mut app = GoalGroveApp::with_seed_data();
        let balance_before = app.snapshot.total_balance;
        let count_before = app.transactions.len();

        app.add_transaction(
            "Dinner Out".to_string(),
            -45.0,
            Category::Food,
            "2023-10-19T19:30:00+00:00".to_string(),
            Some("Birthday dinner".to_string()),
        );

        assert_eq!(app.transactions.len(), count_before + 1);
        assert_eq!(app.transactions[0].description, "Dinner Out");
        assert_eq!(app.transactions[0].transaction_type, TransactionType::Expense);
        assert_eq!(
            app.transactions[0].notes.as_deref(),
            Some("Birthday dinner")
        );
        assert_eq!(app.snapshot.total_balance, balance_before - 45.0);
        assert!(app.success_message.is_some());
    }

    #[test]
    fn test_delete_transaction_rolls_back_balance() {
        let mut app = GoalGroveApp::with_seed_data();
        app.add_transaction(
            "Bonus".to_string(),
            500.0,
            Category::Salary,
            "2023-10-20T09:00:00+00:00".to_string(),
            None,
        );
        let balance_after_add = app.snapshot.total_balance;
        let id = app.transactions[0].id.clone();

        app.delete_transaction(&id);

        assert!(app.transactions.iter().all(|t| t.id != id));
        assert_eq!(app.snapshot.total_balance, balance_after_add - 500.0);
    }

    #[test]
    fn test_delete_missing_transaction_sets_error() {
        let mut app = GoalGroveApp::with_seed_data();
        app.delete_transaction("transaction::income::0");
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_upsert_budget_updates_existing_category() {
        let mut app = GoalGroveApp::with_seed_data();
        let count_before = app.budgets.len();

        app.upsert_budget(Category::Food, 750.0, BudgetPeriod::Monthly);

        assert_eq!(app.budgets.len(), count_before);
        let food = app
            .budgets
            .iter()
            .find(|b| b.category == Category::Food)
            .unwrap();
        assert_eq!(food.amount, 750.0);
        // Spending carries over when only the allocation changes
        assert_eq!(food.spent, 320.0);
    }

    #[test]
    fn test_upsert_budget_creates_new_category() {
        let mut app = GoalGroveApp::with_seed_data();
        let count_before = app.budgets.len();

        app.upsert_budget(Category::Travel, 300.0, BudgetPeriod::Yearly);

        assert_eq!(app.budgets.len(), count_before + 1);
        let travel = app
            .budgets
            .iter()
            .find(|b| b.category == Category::Travel)
            .unwrap();
        assert_eq!(travel.spent, 0.0);
        assert_eq!(travel.period, BudgetPeriod::Yearly);
    }

    #[test]
    fn test_add_funds_reports_completion() {
        let mut app = GoalGroveApp::with_seed_data();

        app.add_funds_to_goal("goal-vacation", 100.0);
        let vacation = app.goals.iter().find(|g| g.id == "goal-vacation").unwrap();
        assert_eq!(vacation.current_amount, 2300.0);

        app.add_funds_to_goal("goal-vacation", 2700.0);
        assert!(app.success_message.as_deref().unwrap().contains("reached"));
    }

    #[test]
    fn test_delete_goal_cancels_its_ring() {
        let mut app = GoalGroveApp::with_seed_data();
        let t0 = Instant::now();

        // Ring mid-reveal
        app.animations.animate(goal_ring_id("goal-vacation"), 44.0, t0);
        assert!(app.animations.is_animating(goal_ring_id("goal-vacation"), t0));

        app.delete_goal("goal-vacation");

        assert!(app.goals.iter().all(|g| g.id != "goal-vacation"));
        assert!(!app
            .animations
            .is_animating(goal_ring_id("goal-vacation"), t0));
    }

    #[test]
    fn test_transaction_filter() {
        let mut app = GoalGroveApp::with_seed_data();

        app.transaction_filter = TransactionFilter::Income;
        assert!(app
            .filtered_transactions()
            .iter()
            .all(|t| t.transaction_type == TransactionType::Income));

        app.transaction_filter = TransactionFilter::Expense;
        assert_eq!(app.filtered_transactions().len(), 3);
    }

    #[test]
    fn test_messages_expire_after_lifetime() {
        let mut app = GoalGroveApp::with_seed_data();
        app.set_success("Saved".to_string());

        let set_at = app.message_set_at.unwrap();
        app.expire_messages(set_at + Duration::from_secs(2));
        assert!(app.success_message.is_some());

        app.expire_messages(set_at + Duration::from_secs(6));
        assert!(app.success_message.is_none());
        assert!(app.message_set_at.is_none());
    }

    #[test]
    fn test_select_tab_replays_dashboard_entrance() {
        let mut app = GoalGroveApp::with_seed_data();
        app.select_tab(MainTab::Transactions);
        assert_eq!(app.current_tab, MainTab::Transactions);

        app.select_tab(MainTab::Dashboard);
        let now = Instant::now();
        assert!(app.dashboard.entrance_running(now + Duration::from_millis(200)));
    }

    #[test]
    fn test_submit_question_clears_field_and_reveals_analysis() {
        let mut app = GoalGroveApp::with_seed_data();
        app.dashboard.question_input = "Can I afford a vacation?".to_string();

        app.submit_question();

        assert!(app.dashboard.question_input.is_empty());
        assert!(app.dashboard.show_analysis);
        assert!(app.success_message.as_deref().is_some_and(|m| m.contains("vacation")));
    }

    #[test]
    fn test_submit_blank_question_does_nothing() {
        let mut app = GoalGroveApp::with_seed_data();
        app.dashboard.question_input = "   ".to_string();

        app.submit_question();

        assert!(!app.dashboard.show_analysis);
        assert!(app.success_message.is_none());
    }
}
