use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Transaction ID in format: "transaction::<income|expense>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub date: String,
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Transaction amount (positive for income, negative for expense)
    pub amount: f64,
    /// Type of transaction for rendering purposes
    pub transaction_type: TransactionType,
    /// Spending or income category for icons/colors
    pub category: Category,
    /// Optional free-form note attached by the user
    pub notes: Option<String>,
}

/// Type of transaction for rendering and business logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Regular income transaction (money added)
    Income,
    /// Regular expense transaction (money spent)
    Expense,
}

/// Spending and income categories with a stable display color per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Salary,
    Investment,
    OtherIncome,
    Food,
    Housing,
    Transportation,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    Coffee,
    Travel,
    Personal,
    Gifts,
    Subscription,
    Other,
}

impl Category {
    /// All categories in picker order (income categories first)
    pub const ALL: [Category; 17] = [
        Category::Salary,
        Category::Investment,
        Category::OtherIncome,
        Category::Food,
        Category::Housing,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Coffee,
        Category::Travel,
        Category::Personal,
        Category::Gifts,
        Category::Subscription,
        Category::Other,
    ];

    /// Human-readable label for pickers and chips
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::OtherIncome => "Other Income",
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Coffee => "Coffee",
            Category::Travel => "Travel",
            Category::Personal => "Personal",
            Category::Gifts => "Gifts",
            Category::Subscription => "Subscription",
            Category::Other => "Other",
        }
    }

    /// Display color as (r, g, b); every category has a fixed color
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            Category::Salary => (52, 199, 89),
            Category::Investment => (90, 200, 250),
            Category::OtherIncome => (48, 176, 199),
            Category::Food => (255, 149, 0),
            Category::Housing => (0, 113, 227),
            Category::Transportation => (255, 59, 48),
            Category::Utilities => (255, 159, 10),
            Category::Entertainment => (175, 82, 222),
            Category::Shopping => (255, 45, 85),
            Category::Healthcare => (100, 210, 255),
            Category::Education => (94, 92, 230),
            Category::Coffee => (191, 90, 242),
            Category::Travel => (255, 55, 95),
            Category::Personal => (255, 100, 59),
            Category::Gifts => (255, 214, 10),
            Category::Subscription => (199, 164, 255),
            Category::Other => (142, 142, 147),
        }
    }

    /// Whether this category represents money coming in
    pub fn is_income(&self) -> bool {
        matches!(
            self,
            Category::Salary | Category::Investment | Category::OtherIncome
        )
    }

    /// Wire name used in serialized data (snake_case)
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Investment => "investment",
            Category::OtherIncome => "other_income",
            Category::Food => "food",
            Category::Housing => "housing",
            Category::Transportation => "transportation",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Coffee => "coffee",
            Category::Travel => "travel",
            Category::Personal => "personal",
            Category::Gifts => "gifts",
            Category::Subscription => "subscription",
            Category::Other => "other",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CategoryParseError {
    #[error("Unknown category: {0}")]
    Unknown(String),
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.wire_name() == s)
            .copied()
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Budget ID format: UUID v4 string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: Category,
    /// Amount allocated for the period
    pub amount: f64,
    /// Amount already spent in the current period
    pub spent: f64,
    pub period: BudgetPeriod,
}

/// Budgeting period for a category allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Yearly => "Yearly",
        }
    }
}

impl Budget {
    /// Create a fresh budget with nothing spent yet
    pub fn new(category: Category, amount: f64, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            amount,
            spent: 0.0,
            period,
        }
    }

    /// Share of the budget already used, rounded and capped at 100 for bar display
    pub fn percentage_used(&self) -> u32 {
        if self.amount <= 0.0 {
            return 100;
        }
        ((self.spent / self.amount) * 100.0).round().clamp(0.0, 100.0) as u32
    }

    /// Whether spending exceeded the allocation (uncapped comparison)
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.amount
    }

    /// Allocation minus spending; negative when over budget
    pub fn remaining(&self) -> f64 {
        self.amount - self.spent
    }
}

/// Savings goal ID format: UUID v4 string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    /// Target date (ISO 8601 date format, YYYY-MM-DD)
    pub due_date: String,
    pub category: Option<Category>,
    pub priority: GoalPriority,
}

/// Priority level for savings goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    pub fn label(&self) -> &'static str {
        match self {
            GoalPriority::High => "High",
            GoalPriority::Medium => "Medium",
            GoalPriority::Low => "Low",
        }
    }
}

impl SavingsGoal {
    pub fn new(
        name: String,
        target_amount: f64,
        current_amount: f64,
        due_date: String,
        priority: GoalPriority,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            target_amount,
            current_amount,
            due_date,
            category: None,
            priority,
        }
    }

    /// Percent of target reached. Deliberately uncapped: values above 100
    /// signal overshoot and the ring renderer passes them straight through.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount) * 100.0
    }

    /// Target minus saved so far; negative once the goal is overshot
    pub fn remaining_amount(&self) -> f64 {
        self.target_amount - self.current_amount
    }
}

/// One row of the dashboard expense-breakdown card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdownItem {
    pub category: Category,
    pub amount: f64,
    /// Share of total monthly spending, 0-100
    pub percentage: f64,
}

/// Kind of AI insight card for icon and accent selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Optimization,
    Feasibility,
    Alert,
}

/// A static AI-style insight card (no live analysis behind it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub kind: InsightKind,
}

/// Headline figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Month-over-month income change in percent (positive = up)
    pub income_delta_pct: f64,
    /// Month-over-month expense change in percent (negative = down)
    pub expenses_delta_pct: f64,
    pub net_worth: f64,
    pub net_worth_delta_pct: f64,
}

impl Transaction {
    /// Create a transaction, deriving type from the amount's sign
    pub fn new(
        description: String,
        amount: f64,
        category: Category,
        date: String,
        epoch_millis: u64,
    ) -> Self {
        let transaction_type = if amount < 0.0 {
            TransactionType::Expense
        } else {
            TransactionType::Income
        };
        Self {
            id: Self::generate_id(amount, epoch_millis),
            date,
            description,
            amount,
            transaction_type,
            category,
            notes: None,
        }
    }

    /// Generate transaction ID from amount and timestamp
    pub fn generate_id(amount: f64, epoch_millis: u64) -> String {
        let transaction_type = if amount < 0.0 { "expense" } else { "income" };
        format!("transaction::{}::{}", transaction_type, epoch_millis)
    }

    /// Parse transaction ID to extract components
    pub fn parse_id(id: &str) -> Result<(String, u64), TransactionIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "transaction" {
            return Err(TransactionIdError::InvalidFormat);
        }

        let transaction_type = parts[1];
        if transaction_type != "income" && transaction_type != "expense" {
            return Err(TransactionIdError::InvalidType);
        }

        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| TransactionIdError::InvalidTimestamp)?;

        Ok((transaction_type.to_string(), epoch_millis))
    }

    /// Extract epoch timestamp from transaction ID for sorting
    pub fn extract_timestamp(&self) -> Result<u64, TransactionIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionIdError {
    InvalidFormat,
    InvalidType,
    InvalidTimestamp,
}

impl fmt::Display for TransactionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionIdError::InvalidFormat => write!(f, "Invalid transaction ID format"),
            TransactionIdError::InvalidType => write!(f, "Invalid transaction type"),
            TransactionIdError::InvalidTimestamp => write!(f, "Invalid timestamp in transaction ID"),
        }
    }
}

impl std::error::Error for TransactionIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_transaction_id() {
        // Test income transaction
        let income_id = Transaction::generate_id(10.0, 1702516122000);
        assert_eq!(income_id, "transaction::income::1702516122000");

        // Test expense transaction
        let expense_id = Transaction::generate_id(-5.0, 1702516125000);
        assert_eq!(expense_id, "transaction::expense::1702516125000");

        // Test zero amount (should be income)
        let zero_id = Transaction::generate_id(0.0, 1702516130000);
        assert_eq!(zero_id, "transaction::income::1702516130000");
    }

    #[test]
    fn test_parse_transaction_id() {
        // Test valid income ID
        let (tx_type, timestamp) = Transaction::parse_id("transaction::income::1702516122000").unwrap();
        assert_eq!(tx_type, "income");
        assert_eq!(timestamp, 1702516122000);

        // Test invalid format
        assert!(Transaction::parse_id("invalid::format").is_err());
        assert!(Transaction::parse_id("transaction::income").is_err());
        assert!(Transaction::parse_id("not_transaction::income::123").is_err());

        // Test invalid type
        assert!(Transaction::parse_id("transaction::invalid::123").is_err());

        // Test invalid timestamp
        assert!(Transaction::parse_id("transaction::income::not_a_number").is_err());
    }

    #[test]
    fn test_transaction_new_derives_type_from_sign() {
        let income = Transaction::new(
            "Freelance Work".to_string(),
            450.0,
            Category::OtherIncome,
            "2023-10-12T09:00:00Z".to_string(),
            1697101200000,
        );
        assert_eq!(income.transaction_type, TransactionType::Income);
        assert_eq!(income.id, "transaction::income::1697101200000");

        let expense = Transaction::new(
            "Coffee Shop".to_string(),
            -15.0,
            Category::Coffee,
            "2023-10-11T08:15:00Z".to_string(),
            1697012100000,
        );
        assert_eq!(expense.transaction_type, TransactionType::Expense);
        assert_eq!(expense.id, "transaction::expense::1697012100000");
    }

    #[test]
    fn test_category_wire_names() {
        // serde uses the same snake_case names as wire_name()
        let json = serde_json::to_string(&Category::OtherIncome).unwrap();
        assert_eq!(json, "\"other_income\"");

        let parsed: Category = serde_json::from_str("\"subscription\"").unwrap();
        assert_eq!(parsed, Category::Subscription);

        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.wire_name()));
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(
            "other_income".parse::<Category>().unwrap(),
            Category::OtherIncome
        );

        let err = "groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError::Unknown("groceries".to_string()));
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(Category::Salary.color_rgb(), (52, 199, 89));
        assert_eq!(Category::Housing.color_rgb(), (0, 113, 227));
        assert_eq!(Category::Coffee.color_rgb(), (191, 90, 242));
        assert_eq!(Category::Other.color_rgb(), (142, 142, 147));
    }

    #[test]
    fn test_category_is_income() {
        assert!(Category::Salary.is_income());
        assert!(Category::Investment.is_income());
        assert!(Category::OtherIncome.is_income());
        assert!(!Category::Food.is_income());
        assert!(!Category::Other.is_income());
    }

    #[test]
    fn test_budget_percentage_used() {
        let budget = Budget {
            id: "test".to_string(),
            category: Category::Food,
            amount: 600.0,
            spent: 320.0,
            period: BudgetPeriod::Monthly,
        };
        assert_eq!(budget.percentage_used(), 53);

        // Fully used budget
        let full = Budget {
            spent: 1200.0,
            amount: 1200.0,
            ..budget.clone()
        };
        assert_eq!(full.percentage_used(), 100);

        // Overspent budgets cap at 100 for bar display
        let over = Budget {
            spent: 900.0,
            amount: 600.0,
            ..budget.clone()
        };
        assert_eq!(over.percentage_used(), 100);
        assert!(over.is_over_budget());

        // Degenerate allocation counts as fully used
        let empty = Budget {
            amount: 0.0,
            ..budget
        };
        assert_eq!(empty.percentage_used(), 100);
    }

    #[test]
    fn test_budget_remaining() {
        let budget = Budget {
            id: "test".to_string(),
            category: Category::Utilities,
            amount: 300.0,
            spent: 285.0,
            period: BudgetPeriod::Monthly,
        };
        assert_eq!(budget.remaining(), 15.0);
        assert!(!budget.is_over_budget());
    }

    #[test]
    fn test_goal_progress_percentage() {
        let goal = SavingsGoal {
            id: "test".to_string(),
            name: "Emergency Fund".to_string(),
            target_amount: 15000.0,
            current_amount: 7500.0,
            due_date: "2024-03-01".to_string(),
            category: None,
            priority: GoalPriority::High,
        };
        assert_eq!(goal.progress_percentage(), 50.0);
        assert_eq!(goal.remaining_amount(), 7500.0);

        // Overshoot passes through uncapped
        let overshot = SavingsGoal {
            current_amount: 18000.0,
            ..goal.clone()
        };
        assert_eq!(overshot.progress_percentage(), 120.0);
        assert_eq!(overshot.remaining_amount(), -3000.0);

        // Degenerate target reports no progress
        let degenerate = SavingsGoal {
            target_amount: 0.0,
            ..goal
        };
        assert_eq!(degenerate.progress_percentage(), 0.0);
    }

    #[test]
    fn test_new_budget_and_goal_get_uuid_ids() {
        let budget = Budget::new(Category::Food, 600.0, BudgetPeriod::Monthly);
        assert_eq!(budget.spent, 0.0);
        assert_eq!(budget.id.len(), 36);

        let goal = SavingsGoal::new(
            "Vacation".to_string(),
            5000.0,
            2200.0,
            "2024-08-01".to_string(),
            GoalPriority::Low,
        );
        assert_eq!(goal.id.len(), 36);
        assert_ne!(budget.id, goal.id);
    }
}
