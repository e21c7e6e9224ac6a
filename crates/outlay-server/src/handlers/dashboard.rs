//! Dashboard handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::{AppError, AppState};
use outlay_core::insights::{InsightGenerator, InsightReport, INSIGHT_EXPENSE_LIMIT};
use outlay_core::models::DashboardSummary;
use outlay_core::summary::dashboard_summary;

/// Insight block of the dashboard response
///
/// `status` distinguishes the degrade modes so the client can render a
/// distinct placeholder for each: "ok", "unconfigured", "no_data", "failed".
#[derive(Serialize)]
pub struct InsightsResponse {
    pub status: &'static str,
    pub points: Vec<String>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub insights: InsightsResponse,
}

/// GET /api/dashboard - Budget position, recent expenses, and insights
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, AppError> {
    // Aggregation degrades internally; a db failure yields a zeroed summary
    let summary = dashboard_summary(&state.db);

    // Insights read their own recent slice (up to 15, newest first). A db
    // failure here degrades to the generic failure message, not "no data".
    let report = match state.db.recent_expenses(INSIGHT_EXPENSE_LIMIT) {
        Ok(recent) => {
            InsightGenerator::new(state.ai.as_ref())
                .generate(&recent)
                .await
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch expenses for insights");
            if state.ai.is_some() {
                InsightReport::Failed
            } else {
                InsightReport::Unconfigured
            }
        }
    };

    Ok(Json(DashboardResponse {
        summary,
        insights: InsightsResponse {
            status: report.status(),
            points: report.messages(),
        },
    }))
}
