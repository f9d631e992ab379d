//! Pure queries over fetched expenses
//!
//! Filtering by date and projecting to CSV. Nothing here touches the store.

pub mod export;
pub mod filter;

pub use export::{csv_file_name, parse_csv, to_csv, CSV_HEADER};
pub use filter::{date_bounds, filter_by_date, filter_by_date_range};
