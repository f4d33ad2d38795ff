//! HTTP handlers for weather data endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{CreateWeatherDataInput, WeatherDataFilter};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::{export::export_to_csv, WeatherService};
use crate::AppState;

/// Record weather data
pub async fn create_weather_data(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateWeatherDataInput>,
) -> AppResult<impl IntoResponse> {
    let service = WeatherService::new(state.db);
    let record = service.create_weather_data(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Query parameters for listing weather data
#[derive(Debug, Deserialize)]
pub struct WeatherDataQuery {
    pub district_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub format: Option<String>, // "json" or "csv"
}

/// List weather data for an optional district and date range
pub async fn list_weather_data(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<WeatherDataQuery>,
) -> AppResult<impl IntoResponse> {
    let service = WeatherService::new(state.db);

    let filter = WeatherDataFilter {
        district_id: query.district_id,
        start_date: query.start_date,
        end_date: query.end_date,
    };

    let data = service.get_weather_data(&filter).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = export_to_csv(&data)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"weather_data.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}
