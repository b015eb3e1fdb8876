use anyhow::anyhow;
use diesel::PgConnection;

use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;
use crate::vaccines::config::VaccinesConfig;
use crate::vaccines::operations::{create_vaccine, delete_vaccine, get_vaccine, list_vaccines};
use crate::vaccines::processor_enums::{VaccinesProcessorInput, VaccinesProcessorOutput};

impl ActionProcessor<VaccinesConfig, VaccinesProcessorOutput> for VaccinesProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        _local_config: &mut VaccinesConfig,
        conn: Option<&mut PgConnection>,
    ) -> anyhow::Result<VaccinesProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Db Connection not found"))?;

        match self {
            VaccinesProcessorInput::CreateVaccine(args) => {
                let output = create_vaccine(app_conn, args)?;
                tracing::info!(
                    id = output.vaccine.id,
                    expense_id = ?output.vaccine.expense_id,
                    "vaccine created"
                );
                Ok(VaccinesProcessorOutput::CreateVaccine(output))
            }
            VaccinesProcessorInput::GetVaccine(vaccine_id) => {
                let record = get_vaccine(app_conn, *vaccine_id)?;
                Ok(VaccinesProcessorOutput::GetVaccine(record))
            }
            VaccinesProcessorInput::GetVaccines => {
                let records = list_vaccines(app_conn)?;
                tracing::debug!(count = records.len(), "vaccines loaded");
                Ok(VaccinesProcessorOutput::GetVaccines(records))
            }
            VaccinesProcessorInput::DeleteVaccine(vaccine_id) => {
                let deleted = delete_vaccine(app_conn, *vaccine_id)?;
                if deleted {
                    tracing::info!(id = vaccine_id, "vaccine deleted");
                }
                Ok(VaccinesProcessorOutput::DeleteVaccine(deleted))
            }
        }
    }
}
