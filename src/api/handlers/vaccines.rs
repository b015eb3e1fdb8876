use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, extractors::{ApiJson, ApiPath}, response::MessageResponse},
    vaccines::{
        db_types::{CreateVaccine, VaccineRecord},
        processor_enums::{VaccinesProcessorInput, VaccinesProcessorOutput},
    },
    utils::app_config::AppConfig,
};

async fn run(
    app_config: AppConfig,
    input: VaccinesProcessorInput,
) -> Result<VaccinesProcessorOutput, ApiError> {
    let action = ActionRouterInput::Vaccines(input);

    match action
        .process(app_config)
        .await
        .map_err(|e| ApiError::database_error(format!("Vaccine action failed: {}", e)))?
    {
        ActionRouterOutput::Vaccines(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/vaccines - All vaccines, most recently administered first
pub async fn get_vaccines(
    State(app_config): State<AppConfig>,
) -> Result<Json<Vec<VaccineRecord>>, ApiError> {
    match run(app_config, VaccinesProcessorInput::GetVaccines).await? {
        VaccinesProcessorOutput::GetVaccines(records) => Ok(Json(records)),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/vaccines/{id}
pub async fn get_vaccine_by_id(
    State(app_config): State<AppConfig>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<VaccineRecord>, ApiError> {
    match run(app_config, VaccinesProcessorInput::GetVaccine(id)).await? {
        VaccinesProcessorOutput::GetVaccine(Some(record)) => Ok(Json(record)),
        VaccinesProcessorOutput::GetVaccine(None) => Err(ApiError::not_found("Vaccine")),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/vaccines - A priced vaccine also records a veterinary expense
pub async fn create_vaccine(
    State(app_config): State<AppConfig>,
    ApiJson(payload): ApiJson<CreateVaccine>,
) -> Result<(StatusCode, Json<VaccineRecord>), ApiError> {
    match run(app_config, VaccinesProcessorInput::CreateVaccine(payload)).await? {
        VaccinesProcessorOutput::CreateVaccine(output) => {
            Ok((StatusCode::CREATED, Json(output.vaccine)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/vaccines/{id}
pub async fn delete_vaccine(
    State(app_config): State<AppConfig>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    match run(app_config, VaccinesProcessorInput::DeleteVaccine(id)).await? {
        VaccinesProcessorOutput::DeleteVaccine(true) => {
            Ok(Json(MessageResponse::new("Vaccine deleted successfully")))
        }
        VaccinesProcessorOutput::DeleteVaccine(false) => Err(ApiError::not_found("Vaccine")),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
