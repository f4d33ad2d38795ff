//! District reference data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_not_blank;

/// A district with its geographic and topographic attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct District {
    pub id: i32,
    pub name: String,
    pub province: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level
    pub elevation: f64,
    /// Degrees
    pub slope_angle: f64,
    pub soil_type: String,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a district
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDistrictInput {
    #[validate(length(min = 1), custom = "validate_not_blank")]
    pub name: String,
    #[validate(length(min = 1), custom = "validate_not_blank")]
    pub province: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub elevation: f64,
    #[validate(range(min = 0.0, max = 90.0))]
    pub slope_angle: f64,
    #[validate(length(min = 1), custom = "validate_not_blank")]
    pub soil_type: String,
}
