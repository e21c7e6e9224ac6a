//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Database access and migrations
//! - Pluggable AI backends (Ollama, mock) behind a text-completion trait
//! - Expense category classification with validated fallback
//! - Spending insight generation from recent expenses
//! - Dashboard budget/spend aggregation
//! - Monthly report building and PDF rendering

pub mod ai;
pub mod classify;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;
pub mod pdf;
pub mod report;
pub mod summary;

/// Test utilities including mock Ollama server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ai::{AiBackend, AiClient, MockBackend, OllamaBackend};
pub use classify::{Classification, Classifier, DefaultReason};
pub use db::Database;
pub use error::{Error, Result};
pub use insights::{InsightGenerator, InsightReport, INSIGHT_EXPENSE_LIMIT};
pub use models::{
    current_month_year, validate_month_year, BudgetPeriod, Category, DashboardSummary, Expense,
    MonthlyReport, NewExpense, ReportLineItem,
};
pub use pdf::render_monthly_report;
pub use report::build_monthly_report;
pub use summary::{dashboard_summary, DASHBOARD_EXPENSE_LIMIT};
