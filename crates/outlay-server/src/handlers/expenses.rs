//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, MAX_BODY_SIZE, MAX_PAGE_LIMIT};
use outlay_core::classify::Classifier;
use outlay_core::models::{Category, Expense, NewExpense};

/// Query parameters for listing expenses
#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[derive(Serialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

/// GET /api/expenses - List recent expenses, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpenseQuery>,
) -> Result<Json<ExpenseListResponse>, AppError> {
    // Input validation: clamp pagination parameters
    let limit = params.limit.max(1).min(MAX_PAGE_LIMIT);

    let expenses = state.db.recent_expenses(limit)?;

    Ok(Json(ExpenseListResponse { expenses }))
}

/// Request body for creating an expense
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub title: String,
    pub amount: f64,
}

/// Response for a created expense
#[derive(Serialize)]
pub struct CreateExpenseResponse {
    pub id: i64,
    pub category: Category,
    /// "ai" when the backend suggested the category, "default" when the
    /// classifier fell back to Miscellaneous
    pub category_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// POST /api/expenses - Validate, classify, and record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<CreateExpenseResponse>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: CreateExpenseRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    // Validate before any side effect; nothing is persisted on rejection
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("Title is required"));
    }
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(AppError::bad_request("Amount must be positive"));
    }

    // Best-effort classification; never blocks the add
    let classification = Classifier::new(state.ai.as_ref()).classify(title).await;
    let category = classification.category();

    let expense = NewExpense::new(title, req.amount, category)
        .map_err(|e| AppError::bad_request(&e.to_string()))?;
    let id = state.db.insert_expense(&expense)?;

    let warning = classification
        .is_defaulted()
        .then(|| "Could not determine category automatically.".to_string());

    Ok(Json(CreateExpenseResponse {
        id,
        category,
        category_source: if classification.is_defaulted() {
            "default"
        } else {
            "ai"
        },
        warning,
    }))
}
