//! Daily weather observations per district

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::DateWindow;
use crate::validation::validate_date_window;

/// One day of weather measurements for a district
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct WeatherData {
    pub id: i32,
    pub district_id: i32,
    pub date: NaiveDate,
    /// mm per day
    pub rainfall: f64,
    /// Percent
    pub humidity: f64,
    /// Celsius
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    pub created_at: DateTime<Utc>,
}

/// Input for recording weather data
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWeatherDataInput {
    #[validate(range(min = 1))]
    pub district_id: i32,
    pub date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub rainfall: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    #[validate(range(min = -50.0, max = 60.0))]
    pub temperature: f64,
    #[validate(range(min = 0.0))]
    pub wind_speed: f64,
}

/// Filter for listing weather data
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_weather_filter"))]
pub struct WeatherDataFilter {
    #[validate(range(min = 1))]
    pub district_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl WeatherDataFilter {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }
}

fn validate_weather_filter(filter: &WeatherDataFilter) -> Result<(), ValidationError> {
    validate_date_window(filter.window())
}
