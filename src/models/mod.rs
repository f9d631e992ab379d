//! Core data models for the expense tracker
//!
//! This module contains the data structures that describe a single expense
//! and the values it is grouped by: categories, payment methods, money and
//! calendar months.

pub mod category;
pub mod choice;
pub mod expense;
pub mod money;
pub mod month;
pub mod payment_method;

pub use category::Category;
pub use choice::ChoiceParseError;
pub use expense::{ExpenseId, ExpenseInput, ExpensePayload, ExpenseRecord, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use payment_method::PaymentMethod;
