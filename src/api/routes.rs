use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    expenses::{create_expense, delete_expense, get_expense_by_id, get_expenses},
    health::health,
    index::index,
    reports::get_report,
    vaccines::{create_vaccine, delete_vaccine, get_vaccine_by_id, get_vaccines},
};
use crate::utils::app_config::AppConfig;

pub fn create_router(app_config: AppConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        // Expenses
        .route("/api/expenses", get(get_expenses).post(create_expense))
        .route(
            "/api/expenses/:id",
            get(get_expense_by_id).delete(delete_expense),
        )
        // Vaccines
        .route("/api/vaccines", get(get_vaccines).post(create_vaccine))
        .route(
            "/api/vaccines/:id",
            get(get_vaccine_by_id).delete(delete_vaccine),
        )
        // Reports
        .route("/api/reports", get(get_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
