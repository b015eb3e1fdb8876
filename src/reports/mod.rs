pub mod aggregation;
pub mod config;
pub mod processor;
pub mod processor_enums;

pub use aggregation::{ReportSummary, UpcomingVaccine, build_report, month_span};
pub use config::ReportsConfig;
