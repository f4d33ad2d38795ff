//! Historical disaster records

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::DisasterType;
use crate::validation::validate_money_scale;

/// A recorded flood or landslide event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct HistoricalDisaster {
    pub id: i32,
    pub district_id: i32,
    pub disaster_type: DisasterType,
    pub date: NaiveDate,
    /// 1-10 scale
    pub severity_score: i32,
    pub casualties: i32,
    /// Rupiah
    pub economic_loss: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a historical disaster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHistoricalDisasterInput {
    #[validate(range(min = 1))]
    pub district_id: i32,
    pub disaster_type: DisasterType,
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 10))]
    pub severity_score: i32,
    #[validate(range(min = 0))]
    pub casualties: i32,
    #[validate(custom = "validate_money_scale")]
    pub economic_loss: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// Filter for listing historical disasters
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct HistoricalDisasterFilter {
    #[validate(range(min = 1))]
    pub district_id: Option<i32>,
    pub disaster_type: Option<DisasterType>,
}
