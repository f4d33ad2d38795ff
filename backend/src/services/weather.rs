//! Weather service for storing and retrieving daily observations

use shared::{CreateWeatherDataInput, WeatherData, WeatherDataFilter};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;
use crate::services::DistrictService;

/// Weather service for managing weather data
#[derive(Clone)]
pub struct WeatherService {
    db: PgPool,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record one day of weather for a district
    pub async fn create_weather_data(
        &self,
        input: CreateWeatherDataInput,
    ) -> AppResult<WeatherData> {
        input.validate()?;
        DistrictService::new(self.db.clone())
            .ensure_exists(input.district_id)
            .await?;

        let record = sqlx::query_as::<_, WeatherData>(
            r#"
            INSERT INTO weather_data (district_id, date, rainfall, humidity, temperature, wind_speed)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, district_id, date, rainfall, humidity, temperature, wind_speed, created_at
            "#,
        )
        .bind(input.district_id)
        .bind(input.date)
        .bind(input.rainfall)
        .bind(input.humidity)
        .bind(input.temperature)
        .bind(input.wind_speed)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            district_id = record.district_id,
            date = %record.date,
            "Weather data recorded"
        );
        Ok(record)
    }

    /// Weather data matching the filter, latest date first
    pub async fn get_weather_data(
        &self,
        filter: &WeatherDataFilter,
    ) -> AppResult<Vec<WeatherData>> {
        filter.validate()?;

        let records = sqlx::query_as::<_, WeatherData>(
            r#"
            SELECT id, district_id, date, rainfall, humidity, temperature, wind_speed, created_at
            FROM weather_data
            WHERE ($1::int IS NULL OR district_id = $1)
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date DESC, district_id ASC, id DESC
            "#,
        )
        .bind(filter.district_id)
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }
}
