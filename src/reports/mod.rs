//! Reports module for the expense tracker
//!
//! Aggregations computed fresh from a fetched record list: monthly totals
//! and per-category / per-payment-method breakdowns of a selected month.
//! Empty input always yields an empty report, never an error.

pub mod breakdown;
pub mod monthly;

pub use breakdown::{
    category_breakdown, payment_method_breakdown, Breakdown, BreakdownEntry, BreakdownReport,
};
pub use monthly::{
    default_month, month_options, month_total, monthly_totals, MonthlyReport, MonthlyTotal,
};
