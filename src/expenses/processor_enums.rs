use serde::{Deserialize, Serialize};

use crate::expenses::db_types::{CreateExpense, ExpenseRecord};

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorInput {
    CreateExpense(CreateExpense),
    GetExpense(i32),
    GetExpenses,
    DeleteExpense(i32),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorOutput {
    CreateExpense(ExpenseRecord),
    /// `None` when no expense has that id
    GetExpense(Option<ExpenseRecord>),
    GetExpenses(Vec<ExpenseRecord>),
    /// `false` when no expense has that id
    DeleteExpense(bool),
}
