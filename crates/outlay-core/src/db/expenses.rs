//! Expense operations

use std::str::FromStr;

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{Category, Expense, NewExpense};

impl Database {
    /// Insert an expense, returning the new row id
    ///
    /// The write runs inside an explicit transaction so a failed commit
    /// leaves no partial row behind.
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<i64> {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO expenses (title, amount, category) VALUES (?, ?, ?)",
            params![expense.title, expense.amount, expense.category.as_str()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    /// Most recent expenses, newest first
    pub fn recent_expenses(&self, limit: i64) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, amount, category, date_added
             FROM expenses ORDER BY date_added DESC, id DESC LIMIT ?",
        )?;

        let expenses = stmt
            .query_map(params![limit], row_to_expense)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(expenses)
    }

    /// Expenses whose date_added falls within the given month, oldest first
    pub fn expenses_for_month(&self, month_year: &str) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, amount, category, date_added
             FROM expenses
             WHERE strftime('%Y-%m', date_added) = ?
             ORDER BY date_added ASC, id ASC",
        )?;

        let expenses = stmt
            .query_map(params![month_year], row_to_expense)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(expenses)
    }

    /// Sum of expense amounts, optionally filtered to a month
    pub fn sum_expenses(&self, month_year: Option<&str>) -> Result<f64> {
        let conn = self.conn()?;

        let total: f64 = match month_year {
            Some(period) => conn.query_row(
                "SELECT COALESCE(SUM(amount), 0) FROM expenses
                 WHERE strftime('%Y-%m', date_added) = ?",
                params![period],
                |row| row.get(0),
            )?,
            None => conn.query_row(
                "SELECT COALESCE(SUM(amount), 0) FROM expenses",
                [],
                |row| row.get(0),
            )?,
        };

        Ok(total)
    }

    /// Total number of recorded expenses
    pub fn count_expenses(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    let category_str: String = row.get(3)?;
    let date_str: String = row.get(4)?;
    Ok(Expense {
        id: row.get(0)?,
        title: row.get(1)?,
        amount: row.get(2)?,
        // Rows are written through the Category enum, so this only falls back
        // if the database was edited by hand.
        category: Category::from_str(&category_str).unwrap_or_default(),
        date_added: parse_datetime(&date_str),
    })
}
