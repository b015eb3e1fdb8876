use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::run_migrations;

/// Connect to the database from the environment and bring the schema up to date
pub fn initialize_app_config() -> Result<AppConfig> {
    let app_config = AppConfig::from_env()?;
    run_migrations(&app_config.pool)?;
    Ok(app_config)
}

/// Execute an action through the ActionRouter
pub async fn call_action_router(input: ActionRouterInput, app_config: AppConfig) -> Result<ActionRouterOutput> {
    input.process(app_config).await
}

pub fn prompt_retry() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Operation failed. Retry?")
        .default(false)
        .interact()?)
}

/// Execute an operation with retry prompt on failure
pub async fn execute_with_retry<F, Fut, T>(operation: F, op_name: &str) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                tracing::warn!(operation = op_name, "operation failed: {}", e);
                eprintln!("\n{}: {}\n", "Error".red(), e);

                if !prompt_retry()? {
                    return Err(e);
                }
            }
        }
    }
}
