//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_add` - Record an expense
//! - `cmd_budget` - Set the monthly budget
//! - `cmd_dashboard` - Print the dashboard summary and insights

use std::path::Path;

use anyhow::{bail, Context, Result};
use outlay_core::ai::AiClient;
use outlay_core::classify::Classifier;
use outlay_core::db::Database;
use outlay_core::insights::{InsightGenerator, InsightReport, INSIGHT_EXPENSE_LIMIT};
use outlay_core::models::{current_month_year, validate_month_year, NewExpense};
use outlay_core::summary::dashboard_summary;

use super::truncate;

/// Open the database, running migrations if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path.to_str().context("Database path must be UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: outlay add --title \"Groceries\" --amount 42.50");
    println!("  2. Start web UI: outlay serve");

    Ok(())
}

pub async fn cmd_add(db_path: &Path, title: &str, amount: f64) -> Result<()> {
    let db = open_db(db_path)?;

    // Validate before touching the AI backend or the database
    if title.trim().is_empty() {
        bail!("Title is required");
    }
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Amount must be positive");
    }

    let ai = AiClient::from_env();
    if ai.is_none() {
        println!("   💡 Tip: Set OLLAMA_HOST for automatic categorization");
    }

    let classification = Classifier::new(ai.as_ref()).classify(title.trim()).await;
    let category = classification.category();

    let expense = NewExpense::new(title, amount, category)?;
    db.insert_expense(&expense)?;

    if classification.is_defaulted() {
        println!(
            "✅ Expense '{}' added (category defaulted to {})",
            expense.title, category
        );
    } else {
        println!(
            "✅ Expense '{}' added! Category assigned: {}",
            expense.title, category
        );
    }

    Ok(())
}

pub fn cmd_budget(db_path: &Path, amount: f64, month: Option<&str>) -> Result<()> {
    let db = open_db(db_path)?;

    if !amount.is_finite() || amount < 0.0 {
        bail!("Budget cannot be negative");
    }
    let month_year = month.map(str::to_string).unwrap_or_else(current_month_year);
    validate_month_year(&month_year)?;

    db.upsert_budget(&month_year, amount)?;

    println!("✅ Budget for {} set to {:.2}", month_year, amount);

    Ok(())
}

pub async fn cmd_dashboard(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    let summary = dashboard_summary(&db);
    if summary.degraded {
        println!("⚠️  Could not read dashboard data; showing defaults");
    }

    println!("📊 Dashboard ({})", current_month_year());
    println!("   ─────────────────────────────");
    println!("   Budget:      {:.2}", summary.budget);
    println!("   Total spent: {:.2}", summary.total_spent);
    if summary.over_budget {
        println!("   ⚠️  Over budget!");
    }
    if summary.budget == 0.0 {
        if let Ok(Some(last)) = db.latest_budget() {
            println!(
                "   💡 No budget set for this month (last set: {} at {:.2})",
                last.month_year, last.amount
            );
        }
    }

    if summary.recent_expenses.is_empty() {
        println!();
        println!("   No expenses recorded yet.");
    } else {
        println!();
        println!("   Recent expenses:");
        for e in &summary.recent_expenses {
            println!(
                "   {:<30} {:>10.2}  {:<13} {}",
                truncate(&e.title, 30),
                e.amount,
                e.category.to_string(),
                e.date_added.format("%Y-%m-%d %H:%M")
            );
        }
    }

    let ai = AiClient::from_env();
    let recent = db.recent_expenses(INSIGHT_EXPENSE_LIMIT).unwrap_or_default();
    let report = InsightGenerator::new(ai.as_ref()).generate(&recent).await;

    println!();
    match report {
        InsightReport::Unconfigured => {
            println!("   💡 Tip: Set OLLAMA_HOST for AI spending insights");
        }
        other => {
            println!("💡 Insights");
            for line in other.messages() {
                println!("   - {}", line);
            }
        }
    }

    Ok(())
}
