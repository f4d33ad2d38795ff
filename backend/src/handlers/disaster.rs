//! HTTP handlers for historical disaster records

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{CreateHistoricalDisasterInput, DisasterType, HistoricalDisasterFilter};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::{export::export_to_csv, DisasterService};
use crate::AppState;

/// Record a historical disaster
pub async fn create_historical_disaster(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateHistoricalDisasterInput>,
) -> AppResult<impl IntoResponse> {
    let service = DisasterService::new(state.db);
    let disaster = service.create_historical_disaster(input).await?;
    Ok((StatusCode::CREATED, Json(disaster)))
}

#[derive(Debug, Deserialize)]
pub struct DisasterQuery {
    pub district_id: Option<i32>,
    pub disaster_type: Option<DisasterType>,
    pub format: Option<String>,
}

/// List historical disasters
pub async fn list_historical_disasters(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DisasterQuery>,
) -> AppResult<impl IntoResponse> {
    let service = DisasterService::new(state.db);

    let filter = HistoricalDisasterFilter {
        district_id: query.district_id,
        disaster_type: query.disaster_type,
    };

    let data = service.get_historical_disasters(&filter).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = export_to_csv(&data)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"historical_disasters.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}
