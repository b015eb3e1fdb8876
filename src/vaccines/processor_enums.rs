use serde::{Deserialize, Serialize};

use crate::expenses::db_types::ExpenseRecord;
use crate::vaccines::db_types::{CreateVaccine, VaccineRecord};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CreateVaccineOutputArgs {
    pub vaccine: VaccineRecord,
    pub expense: Option<ExpenseRecord>,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum VaccinesProcessorInput {
    CreateVaccine(CreateVaccine),
    GetVaccine(i32),
    GetVaccines,
    DeleteVaccine(i32),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum VaccinesProcessorOutput {
    CreateVaccine(CreateVaccineOutputArgs),
    GetVaccine(Option<VaccineRecord>),
    GetVaccines(Vec<VaccineRecord>),
    DeleteVaccine(bool),
}
