//! Summary statistics over the full expense and vaccine collections.
//!
//! Everything here is pure: a report is rebuilt from scratch on every call
//! from the records and a reference date, nothing is cached.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::expenses::db_types::ExpenseRecord;
use crate::vaccines::db_types::VaccineRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpcomingVaccine {
    pub id: i32,
    pub name: String,
    pub next_date: NaiveDate,
    pub days_until: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: f64,
    pub monthly_average: f64,
    pub vaccines_up_to_date: usize,
    pub category_totals: BTreeMap<String, f64>,
    pub upcoming_vaccines: Vec<UpcomingVaccine>,
}

/// Number of calendar months touched by `start..=end`, never less than 1.
///
/// Jan 10 to Mar 10 spans three months (Jan, Feb, Mar); two dates in the
/// same month span one.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> i32 {
    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32) + 1;
    months.max(1)
}

fn monthly_average(expenses: &[ExpenseRecord], total: f64) -> f64 {
    let first = expenses.iter().map(|e| e.date).min();
    let last = expenses.iter().map(|e| e.date).max();

    match (first, last) {
        (Some(first), Some(last)) => total / f64::from(month_span(first, last)),
        _ => 0.0,
    }
}

/// A vaccine with no booster scheduled, or one due today or later.
fn is_up_to_date(vaccine: &VaccineRecord, today: NaiveDate) -> bool {
    vaccine.next_date.is_none_or(|next| next >= today)
}

fn category_totals(expenses: &[ExpenseRecord]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Boosters due strictly after `today`, soonest first. Ties keep input order.
fn upcoming_vaccines(vaccines: &[VaccineRecord], today: NaiveDate, limit: usize) -> Vec<UpcomingVaccine> {
    let mut upcoming: Vec<UpcomingVaccine> = vaccines
        .iter()
        .filter_map(|vaccine| {
            let next_date = vaccine.next_date.filter(|next| *next > today)?;
            Some(UpcomingVaccine {
                id: vaccine.id,
                name: vaccine.name.clone(),
                next_date,
                days_until: (next_date - today).num_days(),
            })
        })
        .collect();

    upcoming.sort_by_key(|v| v.days_until);
    upcoming.truncate(limit);
    upcoming
}

pub fn build_report(
    expenses: &[ExpenseRecord],
    vaccines: &[VaccineRecord],
    today: NaiveDate,
    upcoming_limit: usize,
) -> ReportSummary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    ReportSummary {
        total,
        monthly_average: monthly_average(expenses, total),
        vaccines_up_to_date: vaccines.iter().filter(|v| is_up_to_date(v, today)).count(),
        category_totals: category_totals(expenses),
        upcoming_vaccines: upcoming_vaccines(vaccines, today, upcoming_limit),
    }
}
