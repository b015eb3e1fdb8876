// Shared helpers for the interactive CLI
pub mod formatting;
pub mod input;
pub mod menu;

pub use formatting::{format_json, format_record, format_table};
pub use input::Input;
pub use menu::Menu;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    ValidationError(String),
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

/// Confirm a destructive operation
pub fn confirm(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new().with_prompt(message).default(false).interact()?)
}

pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✓ {}", message).green());
}

pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

pub fn print_warning(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("⚠ {}", message).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::ValidationError("Invalid date".to_string());
        assert_eq!(err.to_string(), "Validation error: Invalid date");
    }
}
