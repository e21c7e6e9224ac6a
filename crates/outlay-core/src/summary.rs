//! Dashboard aggregation
//!
//! Pure arithmetic over persisted rows; no AI involved. Budget and spend
//! are both scoped to the current month so the dashboard agrees with the
//! budget semantics and the monthly report.

use tracing::warn;

use crate::db::Database;
use crate::models::{current_month_year, DashboardSummary};

/// Number of recent expenses shown on the dashboard
pub const DASHBOARD_EXPENSE_LIMIT: i64 = 10;

/// Compute the dashboard summary for the current month
///
/// A persistence failure never propagates: the caller gets a zeroed summary
/// with `degraded` set and surfaces its own warning.
pub fn dashboard_summary(db: &Database) -> DashboardSummary {
    match try_dashboard_summary(db) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(error = %e, "Failed to fetch dashboard data, returning defaults");
            DashboardSummary {
                degraded: true,
                ..Default::default()
            }
        }
    }
}

fn try_dashboard_summary(db: &Database) -> crate::error::Result<DashboardSummary> {
    let month = current_month_year();

    let total_spent = db.sum_expenses(Some(&month))?;
    let budget = db.budget_for_month(&month)?.unwrap_or(0.0);
    let recent_expenses = db.recent_expenses(DASHBOARD_EXPENSE_LIMIT)?;

    // A zero/unset budget means "no constraint", not "budget exhausted"
    let over_budget = budget > 0.0 && total_spent > budget;

    Ok(DashboardSummary {
        budget,
        total_spent,
        over_budget,
        recent_expenses,
        degraded: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewExpense};

    fn add(db: &Database, title: &str, amount: f64) {
        db.insert_expense(&NewExpense::new(title, amount, Category::Food).unwrap())
            .unwrap();
    }

    #[test]
    fn test_empty_db_summary() {
        let db = Database::in_memory().unwrap();
        let summary = dashboard_summary(&db);

        assert_eq!(summary.budget, 0.0);
        assert_eq!(summary.total_spent, 0.0);
        assert!(!summary.over_budget);
        assert!(summary.recent_expenses.is_empty());
        assert!(!summary.degraded);
    }

    #[test]
    fn test_zero_budget_is_never_over_budget() {
        let db = Database::in_memory().unwrap();
        add(&db, "Big spend", 500.0);

        let summary = dashboard_summary(&db);
        assert_eq!(summary.total_spent, 500.0);
        assert_eq!(summary.budget, 0.0);
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_over_budget_when_spend_exceeds() {
        let db = Database::in_memory().unwrap();
        db.upsert_budget(&current_month_year(), 1000.0).unwrap();
        add(&db, "Rent", 1200.0);

        let summary = dashboard_summary(&db);
        assert_eq!(summary.budget, 1000.0);
        assert_eq!(summary.total_spent, 1200.0);
        assert!(summary.over_budget);
    }

    #[test]
    fn test_under_budget() {
        let db = Database::in_memory().unwrap();
        db.upsert_budget(&current_month_year(), 1000.0).unwrap();
        add(&db, "Groceries", 800.0);

        let summary = dashboard_summary(&db);
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_spend_is_scoped_to_current_month() {
        let db = Database::in_memory().unwrap();
        add(&db, "This month", 100.0);

        let conn = db.conn().unwrap();
        conn.execute(
            "INSERT INTO expenses (title, amount, category, date_added)
             VALUES ('Ancient', 9999.0, 'Travel', '1999-01-15 12:00:00')",
            [],
        )
        .unwrap();

        let summary = dashboard_summary(&db);
        assert_eq!(summary.total_spent, 100.0);
        // Recent list is not month-scoped; the old row still shows there
        assert_eq!(summary.recent_expenses.len(), 2);
    }

    #[test]
    fn test_budget_from_other_month_is_ignored() {
        let db = Database::in_memory().unwrap();
        db.upsert_budget("1999-01", 5000.0).unwrap();
        add(&db, "Coffee", 4.0);

        let summary = dashboard_summary(&db);
        assert_eq!(summary.budget, 0.0);
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_recent_capped_at_limit() {
        let db = Database::in_memory().unwrap();
        for i in 0..15 {
            add(&db, &format!("Item {}", i), 1.0);
        }

        let summary = dashboard_summary(&db);
        assert_eq!(summary.recent_expenses.len(), DASHBOARD_EXPENSE_LIMIT as usize);
    }
}
