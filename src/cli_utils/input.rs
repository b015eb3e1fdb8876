use chrono::NaiveDate;
use dialoguer::Input as DialoguerInput;

use crate::cli_utils::{CliError, CliResult};
use crate::utils::commons::{DATE_FORMAT, today};

/// Input utilities
pub struct Input;

impl Input {
    pub fn get_string(prompt: &str) -> CliResult<String> {
        Ok(DialoguerInput::<String>::new().with_prompt(prompt).interact_text()?)
    }

    pub fn get_id(prompt: &str) -> CliResult<i32> {
        let input = Self::get_string(prompt)?;

        input
            .trim()
            .parse::<i32>()
            .map_err(|_| CliError::ValidationError("Invalid id".to_string()))
    }

    /// Empty input means zero.
    pub fn get_amount(prompt: &str) -> CliResult<f64> {
        let input: String = DialoguerInput::new()
            .with_prompt(prompt)
            .default("0".to_string())
            .interact_text()?;

        parse_amount(&input)
    }

    /// Defaults to today.
    pub fn get_date(prompt: &str) -> CliResult<NaiveDate> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
            .default(today().format(DATE_FORMAT).to_string())
            .interact_text()?;

        parse_cli_date(&input)
    }

    pub fn get_optional_date(prompt: &str) -> CliResult<Option<NaiveDate>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (YYYY-MM-DD, optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            Ok(None)
        } else {
            parse_cli_date(&input).map(Some)
        }
    }
}

fn parse_amount(input: &str) -> CliResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::ValidationError("Invalid amount".to_string()))
}

fn parse_cli_date(input: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| CliError::ValidationError("Invalid date, expected YYYY-MM-DD".to_string()))
}
