//! # Seed Data Module
//!
//! This module provides the sample financial state the app starts with.
//! There is no backing store; everything lives in memory and mutations apply
//! to the vectors held by the app state.
//!
//! ## Key Functions:
//! - `seed_transactions()` - Recent transaction history, newest first
//! - `seed_budgets()` - Monthly category budgets
//! - `seed_goals()` - Savings goals with progress
//! - `expense_breakdown()` - Category shares for the dashboard card
//! - `financial_snapshot()` - Headline dashboard figures
//! - `starter_insights()` - Advisor cards shown before any question is asked

use shared::{
    Budget, BudgetPeriod, Category, ExpenseBreakdownItem, FinancialSnapshot, GoalPriority,
    Insight, InsightKind, SavingsGoal, Transaction,
};

/// Recent transactions, newest first
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            "Coffee Shop".to_string(),
            -15.0,
            Category::Coffee,
            "2023-10-18T08:45:00Z".to_string(),
            1697618700000,
        ),
        Transaction::new(
            "Grocery Shopping".to_string(),
            -120.0,
            Category::Food,
            "2023-10-17T16:20:00Z".to_string(),
            1697559600000,
        ),
        Transaction::new(
            "Freelance Work".to_string(),
            450.0,
            Category::OtherIncome,
            "2023-10-16T12:00:00Z".to_string(),
            1697457600000,
        ),
        Transaction::new(
            "Internet Bill".to_string(),
            -60.0,
            Category::Utilities,
            "2023-10-16T09:00:00Z".to_string(),
            1697446800000,
        ),
        Transaction::new(
            "Monthly Salary".to_string(),
            3200.0,
            Category::Salary,
            "2023-10-15T09:00:00Z".to_string(),
            1697360400000,
        ),
    ]
}

/// Monthly category budgets with current spending
pub fn seed_budgets() -> Vec<Budget> {
    let budget = |id: &str, category, amount, spent| Budget {
        id: id.to_string(),
        category,
        amount,
        spent,
        period: BudgetPeriod::Monthly,
    };

    vec![
        budget("budget-food", Category::Food, 600.0, 320.0),
        budget("budget-housing", Category::Housing, 1200.0, 1200.0),
        budget("budget-entertainment", Category::Entertainment, 200.0, 80.0),
        budget("budget-utilities", Category::Utilities, 300.0, 285.0),
        budget(
            "budget-transportation",
            Category::Transportation,
            400.0,
            350.0,
        ),
        budget("budget-healthcare", Category::Healthcare, 250.0, 125.0),
    ]
}

/// Savings goals with progress toward each target
pub fn seed_goals() -> Vec<SavingsGoal> {
    let goal = |id: &str, name: &str, target, current, due_date: &str, priority| SavingsGoal {
        id: id.to_string(),
        name: name.to_string(),
        target_amount: target,
        current_amount: current,
        due_date: due_date.to_string(),
        category: None,
        priority,
    };

    vec![
        goal(
            "goal-down-payment",
            "Down Payment",
            50000.0,
            35000.0,
            "2023-12-01",
            GoalPriority::High,
        ),
        goal(
            "goal-new-car",
            "New Car",
            25000.0,
            12500.0,
            "2024-06-01",
            GoalPriority::Medium,
        ),
        goal(
            "goal-vacation",
            "Vacation",
            5000.0,
            2200.0,
            "2024-08-01",
            GoalPriority::Low,
        ),
        goal(
            "goal-emergency-fund",
            "Emergency Fund",
            15000.0,
            7500.0,
            "2024-03-01",
            GoalPriority::High,
        ),
    ]
}

/// Category shares of this month's spending for the breakdown card
pub fn expense_breakdown() -> Vec<ExpenseBreakdownItem> {
    let item = |category, amount, percentage| ExpenseBreakdownItem {
        category,
        amount,
        percentage,
    };

    vec![
        item(Category::Housing, 1200.0, 35.0),
        item(Category::Food, 520.0, 15.0),
        item(Category::Shopping, 450.0, 13.0),
        item(Category::Utilities, 280.0, 8.0),
        item(Category::Coffee, 120.0, 3.0),
        item(Category::Other, 880.0, 26.0),
    ]
}

/// Headline figures for the dashboard summary cards
pub fn financial_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        total_balance: 42500.0,
        monthly_income: 8200.0,
        monthly_expenses: 3450.0,
        income_delta_pct: 5.2,
        expenses_delta_pct: -2.4,
        net_worth: 256320.0,
        net_worth_delta_pct: 5.2,
    }
}

/// Advisor cards shown before the user asks anything
pub fn starter_insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "Spending Optimization".to_string(),
            description: "You could save about $120/month by reviewing overlapping subscriptions."
                .to_string(),
            kind: InsightKind::Optimization,
        },
        Insight {
            title: "Goal Feasibility".to_string(),
            description: "Your New Car goal is ahead of schedule. Current pace puts you 5% ahead of plan."
                .to_string(),
            kind: InsightKind::Feasibility,
        },
        Insight {
            title: "Monthly Alert".to_string(),
            description: "Housing spending is up 8% versus your 3-month average.".to_string(),
            kind: InsightKind::Alert,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_transactions_are_newest_first() {
        let transactions = seed_transactions();
        assert_eq!(transactions.len(), 5);

        let timestamps: Vec<u64> = transactions
            .iter()
            .map(|t| t.extract_timestamp().unwrap())
            .collect();
        for pair in timestamps.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_seed_budget_spending() {
        let budgets = seed_budgets();
        assert_eq!(budgets.len(), 6);

        let food = budgets
            .iter()
            .find(|b| b.category == Category::Food)
            .unwrap();
        assert_eq!(food.percentage_used(), 53);

        let housing = budgets
            .iter()
            .find(|b| b.category == Category::Housing)
            .unwrap();
        assert_eq!(housing.percentage_used(), 100);
        assert!(!housing.is_over_budget());
    }

    #[test]
    fn test_seed_goal_progress() {
        let goals = seed_goals();
        assert_eq!(goals.len(), 4);

        let down_payment = goals.iter().find(|g| g.name == "Down Payment").unwrap();
        assert_eq!(down_payment.progress_percentage(), 70.0);

        let vacation = goals.iter().find(|g| g.name == "Vacation").unwrap();
        assert_eq!(vacation.progress_percentage(), 44.0);
    }

    #[test]
    fn test_expense_breakdown_matches_snapshot() {
        let breakdown = expense_breakdown();
        let snapshot = financial_snapshot();

        let total: f64 = breakdown.iter().map(|item| item.amount).sum();
        assert_eq!(total, snapshot.monthly_expenses);

        let share: f64 = breakdown.iter().map(|item| item.percentage).sum();
        assert_eq!(share, 100.0);
    }

    #[test]
    fn test_starter_insights_cover_each_kind() {
        let insights = starter_insights();
        assert_eq!(insights.len(), 3);
        assert!(insights.iter().any(|i| i.kind == InsightKind::Optimization));
        assert!(insights.iter().any(|i| i.kind == InsightKind::Feasibility));
        assert!(insights.iter().any(|i| i.kind == InsightKind::Alert));
    }
}
