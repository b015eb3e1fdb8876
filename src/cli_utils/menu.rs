use crate::cli_utils::CliResult;
use dialoguer::Select;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        Ok(Select::new()
            .with_prompt(&self.title)
            .items(&self.items)
            .default(0)
            .interact()?)
    }
}

/// Which record collection the user wants to work on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    Expenses,
    Vaccines,
    Report,
    Exit,
}

impl Section {
    pub fn select() -> CliResult<Self> {
        let menu = Menu::new("What do you want to manage?")
            .items(vec!["Expenses", "Vaccines", "Report", "Exit"]);

        Ok(match menu.interact()? {
            0 => Section::Expenses,
            1 => Section::Vaccines,
            2 => Section::Report,
            _ => Section::Exit,
        })
    }
}

/// Record operations, there is no update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    List,
    View,
    Create,
    Delete,
    Back,
}

impl Operation {
    pub fn select() -> CliResult<Self> {
        let menu = Menu::new("Select operation")
            .items(vec!["List", "View", "Create", "Delete", "Back"]);

        Ok(match menu.interact()? {
            0 => Operation::List,
            1 => Operation::View,
            2 => Operation::Create,
            3 => Operation::Delete,
            _ => Operation::Back,
        })
    }
}
