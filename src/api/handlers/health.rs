use axum::{Json, extract::State};
use diesel::RunQueryDsl;
use serde_json::{Value, json};

use crate::{api::error::ApiError, utils::app_config::AppConfig};

/// GET /health - Confirms the database answers
pub async fn health(State(app_config): State<AppConfig>) -> Result<Json<Value>, ApiError> {
    let mut conn = app_config
        .pool
        .get()
        .map_err(|_| ApiError::internal_error("Failed to acquire database connection"))?;

    diesel::sql_query("SELECT 1")
        .execute(&mut conn)
        .map_err(|e| ApiError::database_error(format!("Database error: {}", e)))?;

    Ok(Json(json!({ "status": "ok" })))
}
