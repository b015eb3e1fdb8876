use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::io::Write;

use petcare_tracker::action_router::{ActionRouterInput, ActionRouterOutput};
use petcare_tracker::cli_helper::{call_action_router, execute_with_retry, initialize_app_config};
use petcare_tracker::cli_utils::{
    confirm, format_json, format_record, format_table,
    formatting::{format_amount, print_header, print_section},
    input::Input,
    menu::{Operation, Section},
    print_info, print_success, print_warning,
};
use petcare_tracker::expenses::db_types::{CreateExpense, ExpenseRecord};
use petcare_tracker::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use petcare_tracker::reports::ReportSummary;
use petcare_tracker::reports::processor_enums::{
    GetReportInputArgs, ReportsProcessorInput, ReportsProcessorOutput,
};
use petcare_tracker::utils::app_config::AppConfig;
use petcare_tracker::utils::commons::{DATE_FORMAT, today};
use petcare_tracker::vaccines::db_types::{CreateVaccine, VaccineRecord};
use petcare_tracker::vaccines::processor_enums::{VaccinesProcessorInput, VaccinesProcessorOutput};

#[derive(Parser, Debug)]
#[command(
    name = "petcare-cli",
    about = "Manage pet-care expenses and vaccinations",
    long_about = "Interactive management of expenses and vaccines, talking to the database directly"
)]
struct CliArgs {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the report and exit
    Report {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    if let Some(Command::Report { as_of, json }) = args.command {
        let app_config = initialize_app_config()?;
        let report = fetch_report(&app_config, as_of).await?;
        if json {
            println!("{}", format_json(&report));
        } else {
            print_report(&report, as_of.unwrap_or_else(today));
        }
        return Ok(());
    }

    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║           Pet Care Tracker Management CLI             ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    eprintln!();

    eprint!("Initializing app config... ");
    std::io::stderr().flush().ok();

    let app_config = match initialize_app_config() {
        Ok(config) => {
            eprintln!("{}", "✓ Ready".green());
            config
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    eprintln!();

    loop {
        let outcome = match Section::select()? {
            Section::Expenses => expenses_menu(&app_config).await,
            Section::Vaccines => vaccines_menu(&app_config).await,
            Section::Report => fetch_report(&app_config, None)
                .await
                .map(|report| print_report(&report, today())),
            Section::Exit => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
        };

        if let Err(e) = outcome {
            eprintln!("{}", format!("Error: {}", e).red());
        }

        eprintln!();
    }

    Ok(())
}

async fn run_expenses(app_config: &AppConfig, input: ExpensesProcessorInput) -> Result<ExpensesProcessorOutput> {
    match call_action_router(ActionRouterInput::Expenses(input), app_config.clone()).await? {
        ActionRouterOutput::Expenses(output) => Ok(output),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn run_vaccines(app_config: &AppConfig, input: VaccinesProcessorInput) -> Result<VaccinesProcessorOutput> {
    match call_action_router(ActionRouterInput::Vaccines(input), app_config.clone()).await? {
        ActionRouterOutput::Vaccines(output) => Ok(output),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

// Expenses

async fn expenses_menu(app_config: &AppConfig) -> Result<()> {
    loop {
        match Operation::select()? {
            Operation::List => list_expenses(app_config).await?,
            Operation::View => view_expense(app_config).await?,
            Operation::Create => create_expense(app_config).await?,
            Operation::Delete => delete_expense(app_config).await?,
            Operation::Back => return Ok(()),
        }
        eprintln!();
    }
}

async fn list_expenses(app_config: &AppConfig) -> Result<()> {
    print_header("Expenses");

    let output = execute_with_retry(
        || run_expenses(app_config, ExpensesProcessorInput::GetExpenses),
        "list_expenses",
    )
    .await?;

    let ExpensesProcessorOutput::GetExpenses(records) = output else {
        return Err(anyhow!("Unexpected output type"));
    };

    if records.is_empty() {
        print_info("No expenses recorded yet");
        return Ok(());
    }

    let rows = records
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.format(DATE_FORMAT).to_string(),
                e.description.clone(),
                e.category.clone(),
                e.location.clone(),
                format_amount(e.amount),
            ]
        })
        .collect();
    format_table(vec!["ID", "Date", "Description", "Category", "Location", "Amount"], rows);

    Ok(())
}

fn print_expense(record: &ExpenseRecord) {
    format_record(vec![
        ("ID", record.id.to_string()),
        ("Description", record.description.clone()),
        ("Amount", format_amount(record.amount)),
        ("Category", record.category.clone()),
        ("Location", record.location.clone()),
        ("Date", record.date.format(DATE_FORMAT).to_string()),
    ]);
}

async fn view_expense(app_config: &AppConfig) -> Result<()> {
    print_header("View Expense");

    let expense_id = Input::get_id("Expense ID")?;
    let output = execute_with_retry(
        || run_expenses(app_config, ExpensesProcessorInput::GetExpense(expense_id)),
        "view_expense",
    )
    .await?;

    match output {
        ExpensesProcessorOutput::GetExpense(Some(record)) => print_expense(&record),
        ExpensesProcessorOutput::GetExpense(None) => print_warning("Expense not found"),
        _ => return Err(anyhow!("Unexpected output type")),
    }

    Ok(())
}

async fn create_expense(app_config: &AppConfig) -> Result<()> {
    print_header("Create Expense");

    let payload = CreateExpense {
        description: Input::get_string("Description")?,
        amount: Input::get_amount("Amount")?,
        category: Input::get_string("Category")?,
        location: Input::get_string("Location")?,
        date: Input::get_date("Date")?,
    };

    match run_expenses(app_config, ExpensesProcessorInput::CreateExpense(payload)).await? {
        ExpensesProcessorOutput::CreateExpense(record) => {
            print_success(&format!("Expense {} created", record.id));
            print_expense(&record);
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn delete_expense(app_config: &AppConfig) -> Result<()> {
    print_header("Delete Expense");

    let expense_id = Input::get_id("Expense ID")?;
    if !confirm(&format!("Delete expense {}?", expense_id))? {
        print_info("Nothing deleted");
        return Ok(());
    }

    match run_expenses(app_config, ExpensesProcessorInput::DeleteExpense(expense_id)).await? {
        ExpensesProcessorOutput::DeleteExpense(true) => print_success("Expense deleted"),
        ExpensesProcessorOutput::DeleteExpense(false) => print_warning("Expense not found"),
        _ => return Err(anyhow!("Unexpected output type")),
    }

    Ok(())
}

// Vaccines

async fn vaccines_menu(app_config: &AppConfig) -> Result<()> {
    loop {
        match Operation::select()? {
            Operation::List => list_vaccines(app_config).await?,
            Operation::View => view_vaccine(app_config).await?,
            Operation::Create => create_vaccine(app_config).await?,
            Operation::Delete => delete_vaccine(app_config).await?,
            Operation::Back => return Ok(()),
        }
        eprintln!();
    }
}

fn optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

async fn list_vaccines(app_config: &AppConfig) -> Result<()> {
    print_header("Vaccines");

    let output = execute_with_retry(
        || run_vaccines(app_config, VaccinesProcessorInput::GetVaccines),
        "list_vaccines",
    )
    .await?;

    let VaccinesProcessorOutput::GetVaccines(records) = output else {
        return Err(anyhow!("Unexpected output type"));
    };

    if records.is_empty() {
        print_info("No vaccines recorded yet");
        return Ok(());
    }

    let rows = records
        .iter()
        .map(|v| {
            vec![
                v.id.to_string(),
                v.date.format(DATE_FORMAT).to_string(),
                v.name.clone(),
                optional_date(v.next_date),
                v.vet.clone(),
                format_amount(v.amount),
            ]
        })
        .collect();
    format_table(vec!["ID", "Date", "Name", "Next dose", "Vet", "Amount"], rows);

    Ok(())
}

fn print_vaccine(record: &VaccineRecord) {
    format_record(vec![
        ("ID", record.id.to_string()),
        ("Name", record.name.clone()),
        ("Date", record.date.format(DATE_FORMAT).to_string()),
        ("Next dose", optional_date(record.next_date)),
        ("Vet", record.vet.clone()),
        ("Amount", format_amount(record.amount)),
        (
            "Expense",
            record
                .expense_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
    ]);
}

async fn view_vaccine(app_config: &AppConfig) -> Result<()> {
    print_header("View Vaccine");

    let vaccine_id = Input::get_id("Vaccine ID")?;
    let output = execute_with_retry(
        || run_vaccines(app_config, VaccinesProcessorInput::GetVaccine(vaccine_id)),
        "view_vaccine",
    )
    .await?;

    match output {
        VaccinesProcessorOutput::GetVaccine(Some(record)) => print_vaccine(&record),
        VaccinesProcessorOutput::GetVaccine(None) => print_warning("Vaccine not found"),
        _ => return Err(anyhow!("Unexpected output type")),
    }

    Ok(())
}

async fn create_vaccine(app_config: &AppConfig) -> Result<()> {
    print_header("Create Vaccine");

    let payload = CreateVaccine {
        name: Input::get_string("Vaccine name")?,
        date: Input::get_date("Date administered")?,
        next_date: Input::get_optional_date("Next dose")?,
        vet: Input::get_string("Vet / clinic")?,
        amount: Input::get_amount("Amount")?,
        expense_id: None,
    };

    match run_vaccines(app_config, VaccinesProcessorInput::CreateVaccine(payload)).await? {
        VaccinesProcessorOutput::CreateVaccine(output) => {
            print_success(&format!("Vaccine {} created", output.vaccine.id));
            print_vaccine(&output.vaccine);
            if let Some(expense) = output.expense {
                print_info(&format!(
                    "Recorded expense {} ({}) under '{}'",
                    expense.id,
                    format_amount(expense.amount),
                    expense.category
                ));
            }
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn delete_vaccine(app_config: &AppConfig) -> Result<()> {
    print_header("Delete Vaccine");

    let vaccine_id = Input::get_id("Vaccine ID")?;
    if !confirm(&format!("Delete vaccine {}? Its expense is kept.", vaccine_id))? {
        print_info("Nothing deleted");
        return Ok(());
    }

    match run_vaccines(app_config, VaccinesProcessorInput::DeleteVaccine(vaccine_id)).await? {
        VaccinesProcessorOutput::DeleteVaccine(true) => print_success("Vaccine deleted"),
        VaccinesProcessorOutput::DeleteVaccine(false) => print_warning("Vaccine not found"),
        _ => return Err(anyhow!("Unexpected output type")),
    }

    Ok(())
}

// Report

async fn fetch_report(app_config: &AppConfig, as_of: Option<NaiveDate>) -> Result<ReportSummary> {
    let input = ActionRouterInput::Reports(ReportsProcessorInput::GetReport(GetReportInputArgs { as_of }));

    match call_action_router(input, app_config.clone()).await? {
        ActionRouterOutput::Reports(ReportsProcessorOutput::GetReport(report)) => Ok(report),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

fn print_report(report: &ReportSummary, as_of: NaiveDate) {
    print_header(&format!("Report as of {}", as_of.format(DATE_FORMAT)));

    format_record(vec![
        ("Total spent", format_amount(report.total)),
        ("Monthly average", format_amount(report.monthly_average)),
        ("Vaccines up to date", report.vaccines_up_to_date.to_string()),
    ]);

    print_section("Spending by category");
    if report.category_totals.is_empty() {
        print_info("No expenses recorded yet");
    } else {
        let rows = report
            .category_totals
            .iter()
            .map(|(category, total)| vec![category.clone(), format_amount(*total)])
            .collect();
        format_table(vec!["Category", "Total"], rows);
    }

    print_section("Upcoming vaccines");
    if report.upcoming_vaccines.is_empty() {
        print_info("No boosters scheduled");
    } else {
        let rows = report
            .upcoming_vaccines
            .iter()
            .map(|v| {
                vec![
                    v.id.to_string(),
                    v.name.clone(),
                    v.next_date.format(DATE_FORMAT).to_string(),
                    v.days_until.to_string(),
                ]
            })
            .collect();
        format_table(vec!["ID", "Name", "Due", "Days"], rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_subcommand_args() {
        let args = CliArgs::try_parse_from(["petcare-cli", "report", "--as-of", "2024-06-01", "--json"]).unwrap();

        match args.command {
            Some(Command::Report { as_of, json }) => {
                assert_eq!(as_of, NaiveDate::from_ymd_opt(2024, 6, 1));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let args = CliArgs::try_parse_from(["petcare-cli"]).unwrap();
        assert!(args.command.is_none());

        assert!(CliArgs::try_parse_from(["petcare-cli", "report", "--as-of", "June"]).is_err());
    }
}
