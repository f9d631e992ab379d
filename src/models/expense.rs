//! Expense model
//!
//! [`ExpenseRecord`] is an expense as the store holds it, always carrying a
//! store-assigned id and concrete choices. [`ExpenseInput`] is the
//! write-side shape sent on create and update; its category and payment
//! method may still be unselected, which is what validation guards against.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{Category, Money, Month, PaymentMethod};

/// Opaque identifier assigned by the store
///
/// Stores may hand out numeric or string ids; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// An expense as persisted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ExpenseRecord {
    /// Calendar month this expense belongs to
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// The record's fields without its id, ready to edit
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            date: self.date,
            category: Some(self.category),
            amount: self.amount,
            payment_method: Some(self.payment_method),
            description: self.description.clone(),
        }
    }

    /// Check whether this record holds exactly the given fields, ignoring id
    pub fn matches(&self, input: &ExpenseInput) -> bool {
        self.to_input() == *input
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.payment_method
        )
    }
}

/// Fields of an expense as entered, before the store has accepted it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: NaiveDate,
    /// `None` while the form still shows the placeholder
    pub category: Option<Category>,
    pub amount: Money,
    /// `None` while the form still shows the placeholder
    pub payment_method: Option<PaymentMethod>,
    pub description: String,
}

impl ExpenseInput {
    /// Create an input with both choices selected and no description
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Money,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            date,
            category: Some(category),
            amount,
            payment_method: Some(payment_method),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True iff both choices are selected and the amount is positive
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the input, reporting the first guard that fails
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.is_none() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        if self.payment_method.is_none() {
            return Err(ExpenseValidationError::MissingPaymentMethod);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Wire body for create and update requests
    pub fn payload(&self) -> Result<ExpensePayload<'_>, ExpenseValidationError> {
        self.validate()?;
        match (self.category, self.payment_method) {
            (Some(category), Some(payment_method)) => Ok(ExpensePayload {
                date: self.date,
                category,
                amount: self.amount,
                payment_method,
                description: &self.description,
            }),
            (None, _) => Err(ExpenseValidationError::MissingCategory),
            (_, None) => Err(ExpenseValidationError::MissingPaymentMethod),
        }
    }

    /// Attach a store id to a validated input
    pub fn into_record(self, id: ExpenseId) -> Result<ExpenseRecord, ExpenseValidationError> {
        let payload = self.payload()?;
        Ok(ExpenseRecord {
            id,
            date: payload.date,
            category: payload.category,
            amount: payload.amount,
            payment_method: payload.payment_method,
            description: self.description.clone(),
        })
    }
}

/// JSON body of a create or update request
#[derive(Debug, Clone, Serialize)]
pub struct ExpensePayload<'a> {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    pub description: &'a str,
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingCategory,
    MissingPaymentMethod,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Please select a valid category"),
            Self::MissingPaymentMethod => write!(f, "Please select a valid payment method"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
