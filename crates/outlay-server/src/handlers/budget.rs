//! Budget handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, MAX_BODY_SIZE};
use outlay_core::models::{current_month_year, validate_month_year};

#[derive(Serialize)]
pub struct BudgetResponse {
    pub month_year: String,
    pub amount: f64,
    /// False when no budget has been set for the month
    pub set: bool,
}

/// GET /api/budget - Current month's budget (0.0 when unset)
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BudgetResponse>, AppError> {
    let month_year = current_month_year();
    let amount = state.db.budget_for_month(&month_year)?;

    Ok(Json(BudgetResponse {
        month_year,
        amount: amount.unwrap_or(0.0),
        set: amount.is_some(),
    }))
}

/// Request body for setting the budget
#[derive(Debug, Deserialize)]
pub struct SetBudgetRequest {
    pub amount: f64,
    /// Defaults to the current month
    pub month_year: Option<String>,
}

/// PUT /api/budget - Set (replace) the budget for a month
pub async fn set_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<BudgetResponse>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: SetBudgetRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    // Validate before any side effect
    if !req.amount.is_finite() || req.amount < 0.0 {
        return Err(AppError::bad_request("Budget cannot be negative"));
    }
    let month_year = req.month_year.unwrap_or_else(current_month_year);
    validate_month_year(&month_year).map_err(|e| AppError::bad_request(&e.to_string()))?;

    state.db.upsert_budget(&month_year, req.amount)?;

    Ok(Json(BudgetResponse {
        month_year,
        amount: req.amount,
        set: true,
    }))
}
