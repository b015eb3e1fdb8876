use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, extractors::{ApiJson, ApiPath}, response::MessageResponse},
    expenses::{
        db_types::{CreateExpense, ExpenseRecord},
        processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput},
    },
    utils::app_config::AppConfig,
};

async fn run(
    app_config: AppConfig,
    input: ExpensesProcessorInput,
) -> Result<ExpensesProcessorOutput, ApiError> {
    let action = ActionRouterInput::Expenses(input);

    match action
        .process(app_config)
        .await
        .map_err(|e| ApiError::database_error(format!("Expense action failed: {}", e)))?
    {
        ActionRouterOutput::Expenses(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses - All expenses, newest first
pub async fn get_expenses(
    State(app_config): State<AppConfig>,
) -> Result<Json<Vec<ExpenseRecord>>, ApiError> {
    match run(app_config, ExpensesProcessorInput::GetExpenses).await? {
        ExpensesProcessorOutput::GetExpenses(records) => Ok(Json(records)),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses/{id}
pub async fn get_expense_by_id(
    State(app_config): State<AppConfig>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ExpenseRecord>, ApiError> {
    match run(app_config, ExpensesProcessorInput::GetExpense(id)).await? {
        ExpensesProcessorOutput::GetExpense(Some(record)) => Ok(Json(record)),
        ExpensesProcessorOutput::GetExpense(None) => Err(ApiError::not_found("Expense")),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/expenses
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    ApiJson(payload): ApiJson<CreateExpense>,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    match run(app_config, ExpensesProcessorInput::CreateExpense(payload)).await? {
        ExpensesProcessorOutput::CreateExpense(record) => Ok((StatusCode::CREATED, Json(record))),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    match run(app_config, ExpensesProcessorInput::DeleteExpense(id)).await? {
        ExpensesProcessorOutput::DeleteExpense(true) => {
            Ok(Json(MessageResponse::new("Expense deleted successfully")))
        }
        ExpensesProcessorOutput::DeleteExpense(false) => Err(ApiError::not_found("Expense")),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
