//! Monthly report building
//!
//! Collects the line items for a month and sanitizes text for the PDF
//! renderer. The builder returns errors (unlike the dashboard aggregator);
//! callers substitute their own default when generation fails.

use crate::db::Database;
use crate::error::Result;
use crate::models::{validate_month_year, MonthlyReport, ReportLineItem};

/// Build the spending report for a month ("YYYY-MM")
///
/// A month with no expenses yields an empty report with total 0.0, not an
/// error.
pub fn build_monthly_report(db: &Database, period: &str) -> Result<MonthlyReport> {
    validate_month_year(period)?;

    let expenses = db.expenses_for_month(period)?;
    let total = expenses.iter().map(|e| e.amount).sum();

    let line_items = expenses
        .into_iter()
        .map(|e| ReportLineItem {
            title: e.title,
            category: e.category,
            date: e.date_added.format("%Y-%m-%d").to_string(),
            amount: e.amount,
        })
        .collect();

    Ok(MonthlyReport {
        period: period.to_string(),
        line_items,
        total,
    })
}

/// Replace characters the PDF builtin fonts cannot encode
///
/// The report is rendered with a builtin Helvetica font, which only covers
/// Latin-1; anything outside that range becomes '?'. This is a constraint
/// of the output format's font support, not a business rule.
pub fn sanitize_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn seed(db: &Database, title: &str, amount: f64, category: &str, date: &str) {
        let conn = db.conn().unwrap();
        conn.execute(
            "INSERT INTO expenses (title, amount, category, date_added) VALUES (?, ?, ?, ?)",
            rusqlite::params![title, amount, category, date],
        )
        .unwrap();
    }

    #[test]
    fn test_empty_month_is_empty_report() {
        let db = Database::in_memory().unwrap();
        let report = build_monthly_report(&db, "2024-06").unwrap();

        assert_eq!(report.period, "2024-06");
        assert!(report.line_items.is_empty());
        assert_eq!(report.total, 0.0);
    }

    #[test]
    fn test_report_is_strictly_month_scoped() {
        let db = Database::in_memory().unwrap();
        seed(&db, "In range", 10.0, "Food", "2024-06-10 09:00:00");
        seed(&db, "Day before", 20.0, "Food", "2024-05-31 23:59:59");
        seed(&db, "Day after", 30.0, "Food", "2024-07-01 00:00:00");

        let report = build_monthly_report(&db, "2024-06").unwrap();
        assert_eq!(report.line_items.len(), 1);
        assert_eq!(report.line_items[0].title, "In range");
        assert_eq!(report.line_items[0].date, "2024-06-10");
        assert_eq!(report.total, 10.0);
    }

    #[test]
    fn test_report_totals_and_ordering() {
        let db = Database::in_memory().unwrap();
        seed(&db, "Second", 2.5, "Travel", "2024-06-20 12:00:00");
        seed(&db, "First", 1.5, "Food", "2024-06-05 12:00:00");

        let report = build_monthly_report(&db, "2024-06").unwrap();
        assert_eq!(report.line_items[0].title, "First");
        assert_eq!(report.line_items[0].category, Category::Food);
        assert_eq!(report.line_items[1].title, "Second");
        assert_eq!(report.total, 4.0);
    }

    #[test]
    fn test_bad_period_is_rejected() {
        let db = Database::in_memory().unwrap();
        assert!(build_monthly_report(&db, "June 2024").is_err());
        assert!(build_monthly_report(&db, "2024-6").is_err());
    }

    #[test]
    fn test_sanitize_latin1() {
        assert_eq!(sanitize_latin1("Plain text"), "Plain text");
        // Latin-1 accents survive, anything beyond becomes '?'
        assert_eq!(sanitize_latin1("Café"), "Café");
        assert_eq!(sanitize_latin1("₹500 chai"), "?500 chai");
        assert_eq!(sanitize_latin1("日本食"), "???");
    }
}
