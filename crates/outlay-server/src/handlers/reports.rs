//! Report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;

use crate::{AppError, AppState};
use outlay_core::models::{current_month_year, MonthlyReport};
use outlay_core::pdf::render_monthly_report;
use outlay_core::report::build_monthly_report;

/// Query parameters for monthly reports
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Month key "YYYY-MM"; defaults to the current month
    pub period: Option<String>,
}

/// GET /api/reports/monthly - Month-scoped spending report
pub async fn get_monthly_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<MonthlyReport>, AppError> {
    let period = params.period.unwrap_or_else(current_month_year);

    let report = build_monthly_report(&state.db, &period).map_err(|e| match e {
        outlay_core::Error::InvalidData(msg) => AppError::bad_request(&msg),
        other => AppError::from(other),
    })?;

    Ok(Json(report))
}

/// GET /api/reports/monthly/pdf - Monthly report as a PDF attachment
pub async fn download_monthly_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let period = params.period.unwrap_or_else(current_month_year);

    let report = build_monthly_report(&state.db, &period).map_err(|e| match e {
        outlay_core::Error::InvalidData(msg) => AppError::bad_request(&msg),
        other => AppError::from(other),
    })?;

    let bytes = render_monthly_report(&report).map_err(|e| {
        error!(error = %e, period = %period, "PDF generation failed");
        AppError::internal("Could not generate the PDF report")
    })?;

    let filename = format!("Spending_Report_{}.pdf", period);
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, bytes).into_response())
}
