//! District HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::{CreateDistrictInput, District};

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::services::DistrictService;
use crate::AppState;

/// List all districts
pub async fn list_districts(State(state): State<AppState>) -> AppResult<Json<Vec<District>>> {
    let service = DistrictService::new(state.db);
    let districts = service.get_districts().await?;
    Ok(Json(districts))
}

/// Register a district
pub async fn create_district(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDistrictInput>,
) -> AppResult<impl IntoResponse> {
    let service = DistrictService::new(state.db);
    let district = service.create_district(input).await?;
    Ok((StatusCode::CREATED, Json(district)))
}
