use chrono::NaiveDate;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::vaccines as VaccinesTable;
use crate::utils::commons::{deserialize_amount_or_zero, deserialize_optional_date};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = VaccinesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VaccineRecord {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub next_date: Option<NaiveDate>,
    pub vet: String,
    pub amount: f64,
    /// Expense recorded when the vaccine was created with a price.
    pub expense_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = VaccinesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreateVaccine {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub next_date: Option<NaiveDate>,
    pub vet: String,
    #[serde(default, deserialize_with = "deserialize_amount_or_zero")]
    pub amount: f64,
    #[serde(skip)]
    pub expense_id: Option<i32>,
}
