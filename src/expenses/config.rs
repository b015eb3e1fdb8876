#[derive(Clone, Debug, Default)]
pub struct ExpensesConfig {}
