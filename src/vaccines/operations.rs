use anyhow::Result;
use diesel::prelude::*;

use crate::expenses::db_types::CreateExpense;
use crate::expenses::operations::create_expense;
use crate::schema::vaccines as VaccinesTable;
use crate::utils::commons::DbConn;
use crate::vaccines::db_types::{CreateVaccine, VaccineRecord};
use crate::vaccines::processor_enums::CreateVaccineOutputArgs;

/// Category given to expenses recorded for priced vaccines.
pub const VETERINARY_CATEGORY: &str = "veterinary";

/// The expense a vaccine produces when it has a price; `None` when free.
pub fn derived_expense(vaccine: &CreateVaccine) -> Option<CreateExpense> {
    if vaccine.amount <= 0.0 {
        return None;
    }

    Some(CreateExpense {
        description: format!("Vaccine: {}", vaccine.name),
        amount: vaccine.amount,
        category: VETERINARY_CATEGORY.to_string(),
        location: vaccine.vet.clone(),
        date: vaccine.date,
    })
}

/// Stores the vaccine and, when priced, its expense in one transaction.
pub fn create_vaccine(conn: DbConn, args: &CreateVaccine) -> Result<CreateVaccineOutputArgs> {
    conn.transaction::<_, anyhow::Error, _>(|tx| {
        let expense = match derived_expense(args) {
            Some(new_expense) => Some(create_expense(tx, &new_expense)?),
            None => None,
        };

        let insertion = CreateVaccine {
            expense_id: expense.as_ref().map(|e| e.id),
            ..args.clone()
        };

        let vaccine = diesel::insert_into(VaccinesTable::table)
            .values(&insertion)
            .returning(VaccineRecord::as_returning())
            .get_result::<VaccineRecord>(tx)?;

        Ok(CreateVaccineOutputArgs { vaccine, expense })
    })
}

/// Every vaccine, most recently administered first.
pub fn list_vaccines(conn: DbConn) -> Result<Vec<VaccineRecord>> {
    use crate::schema::vaccines::dsl::*;

    let records = vaccines
        .order((date.desc(), id.desc()))
        .get_results::<VaccineRecord>(conn)?;

    Ok(records)
}

pub fn get_vaccine(conn: DbConn, vaccine_id: i32) -> Result<Option<VaccineRecord>> {
    use crate::schema::vaccines::dsl::*;

    let record = vaccines
        .filter(id.eq(vaccine_id))
        .get_result::<VaccineRecord>(conn)
        .optional()?;

    Ok(record)
}

/// Leaves the derived expense in place. Returns `false` if nothing was deleted.
pub fn delete_vaccine(conn: DbConn, vaccine_id: i32) -> Result<bool> {
    use crate::schema::vaccines::dsl::*;

    let deleted = diesel::delete(vaccines.filter(id.eq(vaccine_id))).execute(conn)?;

    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::operations::{get_expense, list_expenses};
    use crate::utils::db::test_support::test_connection;
    use chrono::NaiveDate;

    fn new_vaccine(name: &str, amount: f64) -> CreateVaccine {
        CreateVaccine {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            next_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            vet: "Happy Paws Clinic".to_string(),
            amount,
            expense_id: None,
        }
    }

    #[test]
    fn test_priced_vaccine_derives_expense() {
        let expense = derived_expense(&new_vaccine("Rabies", 150.0)).unwrap();

        assert_eq!(expense.description, "Vaccine: Rabies");
        assert_eq!(expense.amount, 150.0);
        assert_eq!(expense.category, "veterinary");
        assert_eq!(expense.location, "Happy Paws Clinic");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn test_free_vaccine_derives_nothing() {
        assert_eq!(derived_expense(&new_vaccine("Rabies", 0.0)), None);
        assert_eq!(derived_expense(&new_vaccine("Rabies", -5.0)), None);
    }

    #[test]
    fn test_create_priced_vaccine_stores_one_linked_expense() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let created = create_vaccine(&mut conn, &new_vaccine("Rabies", 150.0)).unwrap();
        let expense = created.expense.expect("priced vaccine has an expense");

        assert_eq!(created.vaccine.expense_id, Some(expense.id));
        assert_eq!(created.vaccine.amount, 150.0);
        assert_eq!(expense.category, "veterinary");
        assert_eq!(expense.amount, 150.0);
        assert_eq!(expense.location, created.vaccine.vet);
        assert_eq!(expense.date, created.vaccine.date);
        assert_eq!(get_expense(&mut conn, expense.id).unwrap(), Some(expense));
    }

    #[test]
    fn test_create_free_vaccine_stores_no_expense() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let created = create_vaccine(&mut conn, &new_vaccine("V10", 0.0)).unwrap();

        assert_eq!(created.expense, None);
        assert_eq!(created.vaccine.expense_id, None);
        assert_eq!(
            get_vaccine(&mut conn, created.vaccine.id).unwrap(),
            Some(created.vaccine)
        );
    }

    #[test]
    fn test_delete_vaccine_keeps_expense() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let created = create_vaccine(&mut conn, &new_vaccine("Rabies", 80.0)).unwrap();
        let expense = created.expense.unwrap();

        assert!(delete_vaccine(&mut conn, created.vaccine.id).unwrap());
        assert_eq!(get_vaccine(&mut conn, created.vaccine.id).unwrap(), None);
        assert_eq!(get_expense(&mut conn, expense.id).unwrap(), Some(expense));
        assert!(!delete_vaccine(&mut conn, created.vaccine.id).unwrap());
    }

    #[test]
    fn test_failed_vaccine_insert_rolls_back_expense() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        diesel::sql_query("ALTER TABLE vaccines ADD CONSTRAINT reject_all CHECK (false) NOT VALID")
            .execute(&mut conn)
            .unwrap();

        let mut vaccine = new_vaccine("Rabies", 150.0);
        vaccine.vet = "Rollback Clinic".to_string();
        let count_derived = |conn: &mut PgConnection| {
            list_expenses(conn)
                .unwrap()
                .iter()
                .filter(|e| e.location == "Rollback Clinic")
                .count()
        };

        assert_eq!(count_derived(&mut conn), 0);
        assert!(create_vaccine(&mut conn, &vaccine).is_err());
        assert_eq!(count_derived(&mut conn), 0);
    }

    #[test]
    fn test_list_vaccines_newest_first() {
        let Some(mut conn) = test_connection() else {
            return;
        };

        let mut older = new_vaccine("Older", 0.0);
        older.date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let older = create_vaccine(&mut conn, &older).unwrap().vaccine;
        let newer = create_vaccine(&mut conn, &new_vaccine("Newer", 0.0)).unwrap().vaccine;

        let listed = list_vaccines(&mut conn).unwrap();
        let older_pos = listed.iter().position(|v| v.id == older.id).unwrap();
        let newer_pos = listed.iter().position(|v| v.id == newer.id).unwrap();
        assert!(newer_pos < older_pos);
    }
}
