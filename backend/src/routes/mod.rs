//! Route definitions for the early warning platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Personal task manager
        .nest("/tasks", task_routes())
        // Disaster risk reference data
        .route(
            "/districts",
            get(handlers::list_districts).post(handlers::create_district),
        )
        .route(
            "/weather-data",
            get(handlers::list_weather_data).post(handlers::create_weather_data),
        )
        .route(
            "/historical-disasters",
            get(handlers::list_historical_disasters).post(handlers::create_historical_disaster),
        )
        // Predictions and reporting
        .nest("/risk-predictions", risk_routes())
        .route("/risk-report", get(handlers::generate_risk_report))
}

/// Task routes
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/:task_id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
}

/// Risk prediction routes
fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_risk_predictions))
        .route("/generate", post(handlers::generate_risk_predictions))
}
