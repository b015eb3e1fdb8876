use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reports::aggregation::ReportSummary;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GetReportInputArgs {
    /// Reference date; the local date when absent.
    pub as_of: Option<NaiveDate>,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ReportsProcessorInput {
    GetReport(GetReportInputArgs),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ReportsProcessorOutput {
    GetReport(ReportSummary),
}
