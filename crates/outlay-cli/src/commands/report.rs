//! Monthly report command (table and PDF output)

use std::path::Path;

use anyhow::{Context, Result};
use outlay_core::models::current_month_year;
use outlay_core::pdf::render_monthly_report;
use outlay_core::report::build_monthly_report;

use super::{open_db, truncate};

pub fn cmd_report(db_path: &Path, period: Option<&str>, output: Option<&Path>) -> Result<()> {
    let db = open_db(db_path)?;
    let period = period.map(str::to_string).unwrap_or_else(current_month_year);

    let report = build_monthly_report(&db, &period).context("Failed to build monthly report")?;

    if let Some(path) = output {
        let bytes = render_monthly_report(&report).context("Failed to render PDF report")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "✅ Report for {} written to {} ({} line items)",
            report.period,
            path.display(),
            report.line_items.len()
        );
        return Ok(());
    }

    println!("📄 Spending Report — {}", report.period);
    println!("   ──────────────────────────────────────────────────────────────");
    if report.line_items.is_empty() {
        println!("   No expenses recorded for this month.");
    } else {
        println!(
            "   {:<30} {:<13} {:<10} {:>10}",
            "Title", "Category", "Date", "Amount"
        );
        for item in &report.line_items {
            println!(
                "   {:<30} {:<13} {:<10} {:>10.2}",
                truncate(&item.title, 30),
                item.category.to_string(),
                item.date,
                item.amount
            );
        }
    }
    println!("   ──────────────────────────────────────────────────────────────");
    println!("   {:<55} {:>10.2}", "Total", report.total);

    Ok(())
}
