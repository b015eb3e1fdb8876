use anyhow::anyhow;
use diesel::PgConnection;

use crate::expenses::operations::list_expenses;
use crate::reports::aggregation::build_report;
use crate::reports::config::ReportsConfig;
use crate::reports::processor_enums::{ReportsProcessorInput, ReportsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::commons::today;
use crate::utils::traits::ActionProcessor;
use crate::vaccines::operations::list_vaccines;

impl ActionProcessor<ReportsConfig, ReportsProcessorOutput> for ReportsProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        local_config: &mut ReportsConfig,
        conn: Option<&mut PgConnection>,
    ) -> anyhow::Result<ReportsProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Db Connection not found"))?;

        match self {
            ReportsProcessorInput::GetReport(args) => {
                let expenses = list_expenses(app_conn)?;
                let vaccines = list_vaccines(app_conn)?;
                let as_of = args.as_of.unwrap_or_else(today);

                let report = build_report(&expenses, &vaccines, as_of, local_config.upcoming_limit);
                tracing::debug!(
                    %as_of,
                    expenses = expenses.len(),
                    vaccines = vaccines.len(),
                    "report built"
                );

                Ok(ReportsProcessorOutput::GetReport(report))
            }
        }
    }
}
