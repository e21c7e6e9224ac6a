//! Budget operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::BudgetPeriod;

impl Database {
    /// Set the budget for a month, replacing any prior value
    ///
    /// Full replace, not merge: re-submitting a month overwrites its amount
    /// and refreshes created_at.
    pub fn upsert_budget(&self, month_year: &str, amount: f64) -> Result<()> {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO budget (month_year, amount) VALUES (?, ?)
             ON CONFLICT(month_year) DO UPDATE
             SET amount = excluded.amount, created_at = CURRENT_TIMESTAMP",
            params![month_year, amount],
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Budget amount for a month, if one was set
    pub fn budget_for_month(&self, month_year: &str) -> Result<Option<f64>> {
        let conn = self.conn()?;
        let amount = conn
            .query_row(
                "SELECT amount FROM budget WHERE month_year = ?",
                params![month_year],
                |row| row.get(0),
            )
            .optional()?;
        Ok(amount)
    }

    /// Most recently created budget row
    pub fn latest_budget(&self) -> Result<Option<BudgetPeriod>> {
        let conn = self.conn()?;
        let budget = conn
            .query_row(
                "SELECT month_year, amount, created_at FROM budget
                 ORDER BY created_at DESC, month_year DESC LIMIT 1",
                [],
                |row| {
                    let created: String = row.get(2)?;
                    Ok(BudgetPeriod {
                        month_year: row.get(0)?,
                        amount: row.get(1)?,
                        created_at: parse_datetime(&created),
                    })
                },
            )
            .optional()?;
        Ok(budget)
    }
}
