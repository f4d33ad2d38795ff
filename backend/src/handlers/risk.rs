//! Risk prediction and report handlers

use axum::{
    extract::State,
    Json,
};
use shared::{
    GenerateRiskPredictionInput, RiskPrediction, RiskPredictionFilter, RiskPredictionReport,
};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::RiskService;
use crate::AppState;

/// Generate predictions for the coming days
pub async fn generate_risk_predictions(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<GenerateRiskPredictionInput>,
) -> AppResult<Json<Vec<RiskPrediction>>> {
    let service = RiskService::new(state.db);
    let predictions = service.generate_risk_predictions(input).await?;
    Ok(Json(predictions))
}

/// List stored predictions
pub async fn list_risk_predictions(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<RiskPredictionFilter>,
) -> AppResult<Json<Vec<RiskPrediction>>> {
    let service = RiskService::new(state.db);
    let predictions = service.get_risk_predictions(&filter).await?;
    Ok(Json(predictions))
}

/// Build the early warning report
pub async fn generate_risk_report(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<RiskPredictionFilter>,
) -> AppResult<Json<RiskPredictionReport>> {
    let service = RiskService::new(state.db);
    let report = service.generate_risk_report(&filter).await?;
    Ok(Json(report))
}
