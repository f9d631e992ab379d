//! Expense Tracker - personal expenses kept in a remote HTTP store
//!
//! This library is the UI-agnostic core of the expense tracker: a client for
//! the remote expense store plus pure query and aggregation functions that
//! any front end (the bundled CLI, or something else) can call.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, categories, payment methods, money, months
//! - `store`: Store client, HTTP transport and edit intents
//! - `query`: Date filtering and CSV export
//! - `reports`: Monthly totals and per-month breakdowns
//! - `display` / `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::Settings;
//! use expense_tracker::reports::monthly_totals;
//! use expense_tracker::store::ExpenseStoreClient;
//!
//! let client = ExpenseStoreClient::from_settings(&Settings::default())?;
//! for month in monthly_totals(&client.list_all()?) {
//!     println!("{}: {}", month.label(), month.total);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod reports;
pub mod store;

pub use error::{ExpenseError, ExpenseResult};
