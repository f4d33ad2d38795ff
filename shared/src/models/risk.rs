//! Disaster risk predictions and reports

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{DateWindow, MAX_FORECAST_DAYS};
use crate::validation::validate_date_window;

/// Types of disasters covered by the early warning system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "disaster_type", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    Flood,
    Landslide,
}

impl DisasterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::Flood => "flood",
            DisasterType::Landslide => "landslide",
        }
    }
}

/// Qualitative risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "risk_level", rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Band a 0-100 hazard score into a level.
    ///
    /// Scores outside the scale are clamped first.
    pub fn from_hazard_score(score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
        if score < 34.0 {
            RiskLevel::Low
        } else if score < 67.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// A forecast of disaster risk for one district, type and day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskPrediction {
    pub id: i32,
    pub district_id: i32,
    pub disaster_type: DisasterType,
    pub prediction_date: NaiveDate,
    /// Day the prediction is for
    pub target_date: NaiveDate,
    pub risk_level: RiskLevel,
    /// 0-100 scale
    pub hazard_score: f64,
    /// Stored as a JSONB array
    pub main_factors: Vec<String>,
    pub public_recommendation: String,
    pub government_recommendation: String,
    /// Percentage of inputs that were available
    pub data_completeness: f64,
    /// Assumptions made because of missing inputs
    pub assumptions: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for RiskPrediction {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let sqlx::types::Json(main_factors): sqlx::types::Json<Vec<String>> =
            row.try_get("main_factors")?;
        Ok(Self {
            id: row.try_get("id")?,
            district_id: row.try_get("district_id")?,
            disaster_type: row.try_get("disaster_type")?,
            prediction_date: row.try_get("prediction_date")?,
            target_date: row.try_get("target_date")?,
            risk_level: row.try_get("risk_level")?,
            hazard_score: row.try_get("hazard_score")?,
            main_factors,
            public_recommendation: row.try_get("public_recommendation")?,
            government_recommendation: row.try_get("government_recommendation")?,
            data_completeness: row.try_get("data_completeness")?,
            assumptions: row.try_get("assumptions")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

fn default_days_ahead() -> i32 {
    MAX_FORECAST_DAYS
}

/// Input for generating risk predictions.
///
/// Omitting `district_id` or `disaster_type` means "all of them".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRiskPredictionInput {
    #[validate(range(min = 1))]
    #[serde(default)]
    pub district_id: Option<i32>,
    #[serde(default)]
    pub disaster_type: Option<DisasterType>,
    #[validate(range(min = 1, max = 7))]
    #[serde(default = "default_days_ahead")]
    pub days_ahead: i32,
}

impl Default for GenerateRiskPredictionInput {
    fn default() -> Self {
        Self {
            district_id: None,
            disaster_type: None,
            days_ahead: default_days_ahead(),
        }
    }
}

/// Query filter shared by prediction listing and report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_prediction_filter"))]
pub struct RiskPredictionFilter {
    #[validate(range(min = 1))]
    pub district_id: Option<i32>,
    pub disaster_type: Option<DisasterType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub risk_level: Option<RiskLevel>,
}

impl RiskPredictionFilter {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }

}

fn validate_prediction_filter(filter: &RiskPredictionFilter) -> Result<(), ValidationError> {
    validate_date_window(filter.window())
}

/// Aggregate counts shown at the top of a report
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskSummary {
    pub total_districts: u32,
    pub high_risk_count: u32,
    pub medium_risk_count: u32,
    pub low_risk_count: u32,
    /// Mean of `data_completeness`, 0 when there are no predictions
    pub average_data_completeness: f64,
}

impl RiskSummary {
    pub fn from_predictions(predictions: &[RiskPrediction]) -> Self {
        let mut summary = RiskSummary::default();
        if predictions.is_empty() {
            return summary;
        }

        let mut districts = HashSet::new();
        let mut completeness = 0.0;
        for prediction in predictions {
            districts.insert(prediction.district_id);
            completeness += prediction.data_completeness;
            match prediction.risk_level {
                RiskLevel::High => summary.high_risk_count += 1,
                RiskLevel::Medium => summary.medium_risk_count += 1,
                RiskLevel::Low => summary.low_risk_count += 1,
            }
        }

        summary.total_districts = districts.len() as u32;
        summary.average_data_completeness = completeness / predictions.len() as f64;
        summary
    }
}

/// A risk report covering the upcoming period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskPredictionReport {
    pub generated_at: DateTime<Utc>,
    pub report_period_start: DateTime<Utc>,
    pub report_period_end: DateTime<Utc>,
    pub predictions: Vec<RiskPrediction>,
    pub summary: RiskSummary,
    pub markdown_report: String,
}

/// Markdown body served until a prediction model is wired in
pub const PLACEHOLDER_REPORT_MARKDOWN: &str =
    "# Disaster Risk Early Warning Report\n\nThis report is still under development.";
