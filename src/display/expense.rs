//! Expense display formatting
//!
//! Formats expense lists and single expenses for terminal output.

use chrono::NaiveDate;

use crate::models::ExpenseRecord;

/// Format a list of expenses as a numbered register
pub fn format_expense_register(records: &[ExpenseRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let id_width = records
        .iter()
        .map(|r| r.id.as_str().chars().count())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<id_width$}  {:10}  {:<13}  {:>12}  {:<11}  {}\n",
        "#",
        "ID",
        "Date",
        "Category",
        "Amount",
        "Payment",
        "Description",
        id_width = id_width,
    ));
    output.push_str(&"-".repeat(72 + id_width));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<id_width$}  {:10}  {:<13}  {:>12}  {:<11}  {}\n",
            i + 1,
            record.id.as_str(),
            record.date.format("%Y-%m-%d").to_string(),
            record.category.as_str(),
            record.amount.format_with_symbol(currency_symbol),
            record.payment_method.as_str(),
            truncate(&first_line(&record.description), 30),
            id_width = id_width,
        ));
    }

    let total: crate::models::Money = records.iter().map(|r| r.amount).sum();
    output.push_str(&"-".repeat(72 + id_width));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        records.len(),
        total.format_with_symbol(currency_symbol)
    ));

    output
}

/// Format the expenses recorded on one day
pub fn format_day(records: &[ExpenseRecord], date: NaiveDate, currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded for this date yet.\n".to_string();
    }

    format!(
        "Existing Expenses on {}\n\n{}",
        date.format("%d %B %Y"),
        format_expense_register(records, currency_symbol)
    )
}

/// Format expense details for display
pub fn format_expense_details(record: &ExpenseRecord, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!("Date:        {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Payment:     {}\n", record.payment_method));
    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or("").to_string()
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
