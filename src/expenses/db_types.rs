use chrono::NaiveDate;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::expenses as ExpensesTable;
use crate::utils::commons::deserialize_amount;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRecord {
    pub id: i32,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreateExpense {
    pub description: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_expense_from_json() {
        let payload = json!({
            "description": "Dry food 10kg",
            "amount": "89.90",
            "category": "food",
            "location": "Pet shop",
            "date": "2024-01-10"
        });

        let expense: CreateExpense = serde_json::from_value(payload).unwrap();
        assert_eq!(expense.amount, 89.90);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn test_create_expense_requires_every_field() {
        let payload = json!({
            "description": "Dry food 10kg",
            "amount": 89.9,
            "category": "food",
            "date": "2024-01-10"
        });

        assert!(serde_json::from_value::<CreateExpense>(payload).is_err());
    }

    #[test]
    fn test_expense_record_serializes_iso_date() {
        let record = ExpenseRecord {
            id: 7,
            description: "Bath".to_string(),
            amount: 45.0,
            category: "grooming".to_string(),
            location: "Pet spa".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2024-02-03");
        assert_eq!(value["amount"], 45.0);
        assert_eq!(value["id"], 7);
    }
}
