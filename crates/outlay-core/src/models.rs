//! Domain models for Outlay

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spending category for an expense
///
/// Fixed vocabulary shared with the AI classifier: the classifier prompt
/// enumerates exactly these names and any response outside the set is
/// rejected in favor of `Miscellaneous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Utilities,
    Health,
    Entertainment,
    Education,
    #[default]
    Miscellaneous,
}

impl Category {
    /// All categories, in prompt order
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Travel,
        Self::Shopping,
        Self::Utilities,
        Self::Health,
        Self::Entertainment,
        Self::Education,
        Self::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Case-sensitive: the classifier contract requires an exact match
    /// against the prompt vocabulary.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Food" => Ok(Self::Food),
            "Travel" => Ok(Self::Travel),
            "Shopping" => Ok(Self::Shopping),
            "Utilities" => Ok(Self::Utilities),
            "Health" => Ok(Self::Health),
            "Entertainment" => Ok(Self::Entertainment),
            "Education" => Ok(Self::Education),
            "Miscellaneous" => Ok(Self::Miscellaneous),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded expense
///
/// Expenses are immutable once created; there is no edit or delete surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date_added: DateTime<Utc>,
}

/// A new expense, validated before it reaches the database
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: Category,
}

impl NewExpense {
    /// Validate and construct a new expense
    ///
    /// Rejected input never reaches the persistence layer: the title must be
    /// non-empty after trimming and the amount must be a finite positive
    /// number.
    pub fn new(title: &str, amount: f64, category: Category) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidData("Title is required".into()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidData("Amount must be positive".into()));
        }
        Ok(Self {
            title: title.to_string(),
            amount,
            category,
        })
    }
}

/// A month-keyed spending ceiling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// Month key, "YYYY-MM"
    pub month_year: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Validate a "YYYY-MM" budget period key
pub fn validate_month_year(period: &str) -> Result<()> {
    let valid = matches!(period.split_once('-'), Some((y, m))
        if y.len() == 4
            && m.len() == 2
            && y.bytes().all(|b| b.is_ascii_digit())
            && m.bytes().all(|b| b.is_ascii_digit())
            && matches!(m.parse::<u32>(), Ok(1..=12)));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "Invalid period '{}' (use YYYY-MM)",
            period
        )))
    }
}

/// Current month key, "YYYY-MM"
pub fn current_month_year() -> String {
    Utc::now().format("%Y-%m").to_string()
}

/// Dashboard summary: current-month budget position plus recent activity
///
/// Budget and spend are both scoped to the current month so the dashboard
/// agrees with the budget semantics and the monthly report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub budget: f64,
    pub total_spent: f64,
    pub over_budget: bool,
    pub recent_expenses: Vec<Expense>,
    /// True when a persistence failure forced zeroed defaults; callers
    /// surface a user-visible warning.
    pub degraded: bool,
}

/// One row of a monthly report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLineItem {
    pub title: String,
    pub category: Category,
    /// Date formatted "YYYY-MM-DD"
    pub date: String,
    pub amount: f64,
}

/// Month-scoped spending report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Month key, "YYYY-MM"
    pub period: String,
    pub line_items: Vec<ReportLineItem>,
    pub total: f64,
}
