use anyhow::Result;

use crate::expenses::config::ExpensesConfig;
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::reports::config::ReportsConfig;
use crate::reports::processor_enums::{ReportsProcessorInput, ReportsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::get_conn;
use crate::utils::traits::ActionProcessor;
use crate::vaccines::config::VaccinesConfig;
use crate::vaccines::processor_enums::{VaccinesProcessorInput, VaccinesProcessorOutput};

#[derive(Debug)]
pub enum ActionRouterInput {
    Expenses(ExpensesProcessorInput),
    Vaccines(VaccinesProcessorInput),
    Reports(ReportsProcessorInput),
}

#[derive(Debug)]
pub enum ActionRouterOutput {
    Expenses(ExpensesProcessorOutput),
    Vaccines(VaccinesProcessorOutput),
    Reports(ReportsProcessorOutput),
}

impl ActionRouterInput {
    /// Runs the action on one pooled connection.
    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        let mut conn = get_conn(&app_config.pool)?;

        match self {
            ActionRouterInput::Expenses(processor) => {
                let mut config = ExpensesConfig::default();

                let res = processor
                    .process(&mut app_config.clone(), &mut config, Some(&mut *conn))
                    .await?;

                Ok(ActionRouterOutput::Expenses(res))
            }
            ActionRouterInput::Vaccines(processor) => {
                let mut config = VaccinesConfig::default();

                let res = processor
                    .process(&mut app_config.clone(), &mut config, Some(&mut *conn))
                    .await?;

                Ok(ActionRouterOutput::Vaccines(res))
            }
            ActionRouterInput::Reports(processor) => {
                let mut config = ReportsConfig::default();

                let res = processor
                    .process(&mut app_config.clone(), &mut config, Some(&mut *conn))
                    .await?;

                Ok(ActionRouterOutput::Reports(res))
            }
        }
    }
}
