//! Monthly Report
//!
//! Totals per calendar month, ordered chronologically, and the month list
//! that drives a month selector.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money, Month};

/// Spending in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: Money,
    /// Number of expenses in the month
    pub count: usize,
}

impl MonthlyTotal {
    /// "January 2024"
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// Sum of amounts per month, oldest month first
pub fn monthly_totals(records: &[ExpenseRecord]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<Month, (Money, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_month.entry(record.month()).or_insert((Money::zero(), 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    by_month
        .into_iter()
        .map(|(month, (total, count))| MonthlyTotal { month, total, count })
        .collect()
}

/// Distinct months present, oldest first
pub fn month_options(records: &[ExpenseRecord]) -> Vec<Month> {
    let mut months: Vec<Month> = records.iter().map(ExpenseRecord::month).collect();
    months.sort();
    months.dedup();
    months
}

/// Month to preselect: the month of `today` if offered, else the oldest one
pub fn default_month(options: &[Month], today: NaiveDate) -> Option<Month> {
    let current = Month::from_date(today);
    if options.contains(&current) {
        Some(current)
    } else {
        options.iter().min().copied()
    }
}

/// Total spent in one month (zero when nothing was recorded)
pub fn month_total(records: &[ExpenseRecord], month: Month) -> Money {
    records
        .iter()
        .filter(|r| month.contains(r.date))
        .map(|r| r.amount)
        .sum()
}

/// Monthly spending report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub months: Vec<MonthlyTotal>,
    pub grand_total: Money,
}

impl MonthlyReport {
    /// Generate the report from a fetched record list
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        let months = monthly_totals(records);
        let grand_total = months.iter().map(|m| m.total).sum();
        Self { months, grand_total }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No data available for analytics.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Monthly Expenses\n");
        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>8} {:>14}\n", "Month", "Count", "Total"));
        output.push_str(&"-".repeat(44));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<20} {:>8} {:>14}\n",
                month.label(),
                month.count,
                month.total.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&"-".repeat(44));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>8} {:>14}\n",
            "Total",
            self.months.iter().map(|m| m.count).sum::<usize>(),
            self.grand_total.format_with_symbol(currency_symbol)
        ));

        output
    }
}
