//! Risk prediction and reporting service
//!
//! Predictions are read from `risk_predictions`. No prediction model is
//! wired in yet: generation yields nothing and reports are placeholders.

use chrono::{Duration, Utc};
use shared::{
    GenerateRiskPredictionInput, RiskPrediction, RiskPredictionFilter, RiskPredictionReport,
    RiskSummary, PLACEHOLDER_REPORT_MARKDOWN, REPORT_PERIOD_DAYS,
};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;

#[derive(Clone)]
pub struct RiskService {
    db: PgPool,
}

impl RiskService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Generate flood and landslide predictions for the coming days.
    ///
    /// Always returns an empty list and writes nothing.
    pub async fn generate_risk_predictions(
        &self,
        input: GenerateRiskPredictionInput,
    ) -> AppResult<Vec<RiskPrediction>> {
        input.validate()?;

        tracing::info!(
            district_id = ?input.district_id,
            disaster_type = ?input.disaster_type,
            days_ahead = input.days_ahead,
            "Risk prediction requested; no prediction model configured"
        );

        Ok(Vec::new())
    }

    /// Stored predictions matching the filter.
    ///
    /// The date window applies to `target_date`.
    pub async fn get_risk_predictions(
        &self,
        filter: &RiskPredictionFilter,
    ) -> AppResult<Vec<RiskPrediction>> {
        filter.validate()?;

        let predictions = sqlx::query_as::<_, RiskPrediction>(
            r#"
            SELECT id, district_id, disaster_type, prediction_date, target_date, risk_level,
                   hazard_score, main_factors, public_recommendation, government_recommendation,
                   data_completeness, assumptions, created_at
            FROM risk_predictions
            WHERE ($1::int IS NULL OR district_id = $1)
              AND ($2::disaster_type IS NULL OR disaster_type = $2)
              AND ($3::date IS NULL OR target_date >= $3)
              AND ($4::date IS NULL OR target_date <= $4)
              AND ($5::risk_level IS NULL OR risk_level = $5)
            ORDER BY target_date ASC, district_id ASC, disaster_type ASC
            "#,
        )
        .bind(filter.district_id)
        .bind(filter.disaster_type)
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.risk_level)
        .fetch_all(&self.db)
        .await?;

        Ok(predictions)
    }

    /// Build the early warning report for the next seven days.
    ///
    /// The filter is validated but the report body is a placeholder with no
    /// predictions and a zeroed summary.
    pub async fn generate_risk_report(
        &self,
        filter: &RiskPredictionFilter,
    ) -> AppResult<RiskPredictionReport> {
        filter.validate()?;

        let now = Utc::now();
        let predictions: Vec<RiskPrediction> = Vec::new();
        let summary = RiskSummary::from_predictions(&predictions);

        tracing::debug!(?filter, "Risk report generated");

        Ok(RiskPredictionReport {
            generated_at: now,
            report_period_start: now,
            report_period_end: now + Duration::days(REPORT_PERIOD_DAYS),
            predictions,
            summary,
            markdown_report: PLACEHOLDER_REPORT_MARKDOWN.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DisasterType;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> RiskService {
        // Never connects: these paths do not touch the database
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        RiskService::new(pool)
    }

    #[tokio::test]
    async fn test_generate_returns_nothing() {
        let input = GenerateRiskPredictionInput {
            district_id: Some(3),
            disaster_type: Some(DisasterType::Flood),
            days_ahead: 3,
        };
        let predictions = service().generate_risk_predictions(input).await.unwrap();
        assert!(predictions.is_empty());
    }

    #[tokio::test]
    async fn test_generate_rejects_long_horizon() {
        let input = GenerateRiskPredictionInput {
            days_ahead: 8,
            ..Default::default()
        };
        assert!(service().generate_risk_predictions(input).await.is_err());
    }

    #[tokio::test]
    async fn test_report_is_placeholder() {
        let report = service()
            .generate_risk_report(&RiskPredictionFilter::default())
            .await
            .unwrap();

        assert!(report.predictions.is_empty());
        assert_eq!(report.summary, RiskSummary::default());
        assert_eq!(report.generated_at, report.report_period_start);
        assert_eq!(
            report.report_period_end - report.report_period_start,
            Duration::days(7)
        );
        assert!(report.markdown_report.starts_with("# Disaster Risk Early Warning Report"));
    }
}
