pub mod expenses;
pub mod health;
pub mod index;
pub mod reports;
pub mod vaccines;
