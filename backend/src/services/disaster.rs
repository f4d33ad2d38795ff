//! Historical disaster records

use shared::{CreateHistoricalDisasterInput, HistoricalDisaster, HistoricalDisasterFilter};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;
use crate::services::DistrictService;

#[derive(Clone)]
pub struct DisasterService {
    db: PgPool,
}

impl DisasterService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a past flood or landslide
    pub async fn create_historical_disaster(
        &self,
        input: CreateHistoricalDisasterInput,
    ) -> AppResult<HistoricalDisaster> {
        input.validate()?;
        DistrictService::new(self.db.clone())
            .ensure_exists(input.district_id)
            .await?;

        let disaster = sqlx::query_as::<_, HistoricalDisaster>(
            r#"
            INSERT INTO historical_disasters (
                district_id, disaster_type, date, severity_score, casualties, economic_loss, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, district_id, disaster_type, date, severity_score, casualties,
                      economic_loss, description, created_at
            "#,
        )
        .bind(input.district_id)
        .bind(input.disaster_type)
        .bind(input.date)
        .bind(input.severity_score)
        .bind(input.casualties)
        .bind(input.economic_loss)
        .bind(&input.description)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            district_id = disaster.district_id,
            disaster_type = disaster.disaster_type.as_str(),
            severity = disaster.severity_score,
            "Historical disaster recorded"
        );
        Ok(disaster)
    }

    /// Disasters matching the filter, most recent first
    pub async fn get_historical_disasters(
        &self,
        filter: &HistoricalDisasterFilter,
    ) -> AppResult<Vec<HistoricalDisaster>> {
        filter.validate()?;

        let disasters = sqlx::query_as::<_, HistoricalDisaster>(
            r#"
            SELECT id, district_id, disaster_type, date, severity_score, casualties,
                   economic_loss, description, created_at
            FROM historical_disasters
            WHERE ($1::int IS NULL OR district_id = $1)
              AND ($2::disaster_type IS NULL OR disaster_type = $2)
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(filter.district_id)
        .bind(filter.disaster_type)
        .fetch_all(&self.db)
        .await?;

        Ok(disasters)
    }
}
