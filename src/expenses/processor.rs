use anyhow::anyhow;
use diesel::PgConnection;

use crate::expenses::config::ExpensesConfig;
use crate::expenses::operations::{create_expense, delete_expense, get_expense, list_expenses};
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<ExpensesConfig, ExpensesProcessorOutput> for ExpensesProcessorInput {
    async fn process(
        &self,
        _app_config: &mut AppConfig,
        _local_config: &mut ExpensesConfig,
        conn: Option<&mut PgConnection>,
    ) -> anyhow::Result<ExpensesProcessorOutput> {
        let app_conn = conn.ok_or_else(|| anyhow!("Db Connection not found"))?;

        match self {
            ExpensesProcessorInput::CreateExpense(args) => {
                let record = create_expense(app_conn, args)?;
                tracing::info!(id = record.id, category = %record.category, "expense created");
                Ok(ExpensesProcessorOutput::CreateExpense(record))
            }
            ExpensesProcessorInput::GetExpense(expense_id) => {
                let record = get_expense(app_conn, *expense_id)?;
                Ok(ExpensesProcessorOutput::GetExpense(record))
            }
            ExpensesProcessorInput::GetExpenses => {
                let records = list_expenses(app_conn)?;
                tracing::debug!(count = records.len(), "expenses loaded");
                Ok(ExpensesProcessorOutput::GetExpenses(records))
            }
            ExpensesProcessorInput::DeleteExpense(expense_id) => {
                let deleted = delete_expense(app_conn, *expense_id)?;
                if deleted {
                    tracing::info!(id = expense_id, "expense deleted");
                }
                Ok(ExpensesProcessorOutput::DeleteExpense(deleted))
            }
        }
    }
}
