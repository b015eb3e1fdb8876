use anyhow::Result;
use diesel::prelude::*;

use crate::expenses::db_types::{CreateExpense, ExpenseRecord};
use crate::schema::expenses as ExpensesTable;
use crate::utils::commons::DbConn;

pub fn create_expense(conn: DbConn, args: &CreateExpense) -> Result<ExpenseRecord> {
    let record = diesel::insert_into(ExpensesTable::table)
        .values(args)
        .returning(ExpenseRecord::as_returning())
        .get_result::<ExpenseRecord>(conn)?;

    Ok(record)
}

/// Every expense, newest first.
pub fn list_expenses(conn: DbConn) -> Result<Vec<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let records = expenses
        .order((date.desc(), id.desc()))
        .get_results::<ExpenseRecord>(conn)?;

    Ok(records)
}

pub fn get_expense(conn: DbConn, expense_id: i32) -> Result<Option<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let record = expenses
        .filter(id.eq(expense_id))
        .get_result::<ExpenseRecord>(conn)
        .optional()?;

    Ok(record)
}

/// Returns `false` if nothing was deleted.
pub fn delete_expense(conn: DbConn, expense_id: i32) -> Result<bool> {
    use crate::schema::expenses::dsl::*;

    let deleted = diesel::delete(expenses.filter(id.eq(expense_id))).execute(conn)?;

    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::db::test_support::test_connection;
    use chrono::NaiveDate;

    fn new_expense(description: &str, amount: f64, date: NaiveDate) -> CreateExpense {
        CreateExpense {
            description: description.to_string(),
            amount,
            category: "food".to_string(),
            location: "Pet shop".to_string(),
            date,
        }
    }

    #[test]
    fn test_create_and_get_expense() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let args = new_expense("Kibble", 100.0, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        let created = create_expense(&mut conn, &args).unwrap();
        assert!(created.id > 0);
        assert_eq!(created.description, "Kibble");
        assert_eq!(created.amount, 100.0);

        let fetched = get_expense(&mut conn, created.id).unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[test]
    fn test_list_expenses_newest_first() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let older = create_expense(
            &mut conn,
            &new_expense("Older", 10.0, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        )
        .unwrap();
        let newer = create_expense(
            &mut conn,
            &new_expense("Newer", 20.0, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        )
        .unwrap();

        let listed = list_expenses(&mut conn).unwrap();
        let older_pos = listed.iter().position(|e| e.id == older.id).unwrap();
        let newer_pos = listed.iter().position(|e| e.id == newer.id).unwrap();
        assert!(newer_pos < older_pos);
        assert!(listed.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_delete_expense() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let created = create_expense(
            &mut conn,
            &new_expense("Toy", 15.0, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()),
        )
        .unwrap();

        assert!(delete_expense(&mut conn, created.id).unwrap());
        assert_eq!(get_expense(&mut conn, created.id).unwrap(), None);
        assert!(!delete_expense(&mut conn, created.id).unwrap());
    }
}
