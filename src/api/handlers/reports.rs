use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::error::ApiError,
    reports::{
        ReportSummary,
        processor_enums::{GetReportInputArgs, ReportsProcessorInput, ReportsProcessorOutput},
    },
    utils::{app_config::AppConfig, commons::parse_date},
};

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// YYYY-MM-DD; defaults to today
    pub as_of: Option<String>,
}

/// GET /api/reports - Totals, averages and upcoming boosters
pub async fn get_report(
    State(app_config): State<AppConfig>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportSummary>, ApiError> {
    let as_of = params
        .as_of
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_date)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let action = ActionRouterInput::Reports(ReportsProcessorInput::GetReport(GetReportInputArgs {
        as_of,
    }));

    let result = action
        .process(app_config)
        .await
        .map_err(|e| ApiError::database_error(format!("Failed to build report: {}", e)))?;

    match result {
        ActionRouterOutput::Reports(ReportsProcessorOutput::GetReport(report)) => Ok(Json(report)),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
