//! District registry service

use shared::{CreateDistrictInput, District};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct DistrictService {
    db: PgPool,
}

impl DistrictService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a district with its geographic and topographic data
    pub async fn create_district(&self, input: CreateDistrictInput) -> AppResult<District> {
        input.validate()?;

        let district = sqlx::query_as::<_, District>(
            r#"
            INSERT INTO districts (name, province, latitude, longitude, elevation, slope_angle, soil_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, province, latitude, longitude, elevation, slope_angle, soil_type, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.province.trim())
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.elevation)
        .bind(input.slope_angle)
        .bind(input.soil_type.trim())
        .fetch_one(&self.db)
        .await?;

        tracing::info!(district_id = district.id, name = %district.name, "District created");
        Ok(district)
    }

    /// All districts, grouped by province
    pub async fn get_districts(&self) -> AppResult<Vec<District>> {
        let districts = sqlx::query_as::<_, District>(
            r#"
            SELECT id, name, province, latitude, longitude, elevation, slope_angle, soil_type, created_at
            FROM districts
            ORDER BY province ASC, name ASC, id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(districts)
    }

    /// Fail with `NotFound` unless the district exists
    pub async fn ensure_exists(&self, district_id: i32) -> AppResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM districts WHERE id = $1)",
        )
        .bind(district_id)
        .fetch_one(&self.db)
        .await?;

        if !exists {
            return Err(AppError::NotFound(format!("District {}", district_id)));
        }
        Ok(())
    }
}
