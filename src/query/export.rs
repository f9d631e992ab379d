//! CSV export of expense lists
//!
//! Columns are fixed: `date,category,amount,payment_method,description`.
//! The store id is not exported. Amounts are written as their exact
//! decimal text with no grouping separators.

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseInput, ExpenseRecord, Money, PaymentMethod};

/// Header row of every export
pub const CSV_HEADER: [&str; 5] = ["date", "category", "amount", "payment_method", "description"];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    category: Category,
    amount: String,
    payment_method: PaymentMethod,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct CsvInputRow {
    date: NaiveDate,
    category: String,
    amount: String,
    payment_method: String,
    #[serde(default)]
    description: String,
}

/// Render records as UTF-8 CSV bytes, header included
pub fn to_csv(records: &[ExpenseRecord]) -> ExpenseResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(CsvRow {
            date: record.date,
            category: record.category,
            amount: record.amount.amount().to_string(),
            payment_method: record.payment_method,
            description: &record.description,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Parse CSV produced by [`to_csv`] back into expense inputs
///
/// Placeholder or empty choices come back as `None` so the caller can
/// validate them like any other form input.
pub fn parse_csv(data: &[u8]) -> ExpenseResult<Vec<ExpenseInput>> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(data);

    let mut inputs = Vec::new();
    for (index, row) in reader.deserialize::<CsvInputRow>().enumerate() {
        let row = row?;
        let line = index + 2;

        let category = Category::parse_selection(&row.category)
            .map_err(|e| ExpenseError::Validation(format!("line {}: {}", line, e)))?;
        let payment_method = PaymentMethod::parse_selection(&row.payment_method)
            .map_err(|e| ExpenseError::Validation(format!("line {}: {}", line, e)))?;
        let amount = Money::parse(&row.amount)
            .map_err(|e| ExpenseError::Validation(format!("line {}: {}", line, e)))?;

        inputs.push(ExpenseInput {
            date: row.date,
            category,
            amount,
            payment_method,
            description: row.description,
        });
    }

    Ok(inputs)
}

/// Download file name for an exported range
pub fn csv_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("expenses_{}_to_{}.csv", start, end)
}
