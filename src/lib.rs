// Public library interface for petcare-tracker
pub mod action_router;
pub mod api;
pub mod cli_helper;
pub mod cli_utils;
pub mod expenses;
pub mod reports;
pub mod schema;
pub mod utils;
pub mod vaccines;
