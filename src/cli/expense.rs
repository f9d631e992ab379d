//! Expense CLI commands
//!
//! Add, list, edit, delete and view/export expenses held by the remote store.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use super::parse_date;
use crate::config::Settings;
use crate::display::{format_day, format_expense_details, format_expense_register};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseId, ExpenseInput, Money, PaymentMethod};
use crate::query;
use crate::store::{EditIntent, ExpenseStoreClient, Transport};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g. "250.00")
        #[arg(short, long)]
        amount: String,
        /// Category (Food, Transport, Entertainment, Shopping, Utilities, Healthcare, Education, Others)
        #[arg(short, long)]
        category: String,
        /// Payment method (Cash, Credit Card, Debit Card, UPI, Net Banking)
        #[arg(short, long)]
        payment_method: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List the expenses recorded on one date
    List {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an expense (unspecified fields keep their current values)
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New payment method
        #[arg(short, long)]
        payment_method: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },

    /// View all expenses in a date range, optionally exporting them as CSV
    View {
        /// Start date (YYYY-MM-DD), defaults to the earliest expense
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), defaults to the latest expense
        #[arg(long)]
        to: Option<String>,
        /// Write the filtered expenses as CSV to this file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an expense command
pub fn handle_expense_command<T: Transport>(
    client: &ExpenseStoreClient<T>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let today = chrono::Local::now().date_naive();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            payment_method,
            date,
            description,
        } => {
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => today,
            };
            ensure_not_future(date, today)?;

            let input = ExpenseInput {
                date,
                category: parse_category(&category)?,
                amount: parse_amount(&amount)?,
                payment_method: parse_payment_method(&payment_method)?,
                description,
            };

            let record = client.create(input)?;
            println!("Expense added successfully!");
            print!("{}", format_expense_details(&record, symbol));
        }

        ExpenseCommands::List { date } => {
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => today,
            };
            let records = client.list_for_date(date)?;
            print!("{}", format_day(&records, date, symbol));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            payment_method,
            date,
            description,
        } => {
            let intent = EditIntent::new(ExpenseId::new(id));
            let mut input = intent.prefill(client)?;

            if let Some(date_str) = date {
                input.date = parse_date(&date_str)?;
                ensure_not_future(input.date, today)?;
            }
            if let Some(category) = category {
                input.category = parse_category(&category)?;
            }
            if let Some(amount) = amount {
                input.amount = parse_amount(&amount)?;
            }
            if let Some(payment_method) = payment_method {
                input.payment_method = parse_payment_method(&payment_method)?;
            }
            if let Some(description) = description {
                input.description = description;
            }

            let record = intent.submit(client, input)?;
            println!("Expense updated successfully!");
            print!("{}", format_expense_details(&record, symbol));
        }

        ExpenseCommands::Delete { id } => {
            client.delete(&ExpenseId::new(id))?;
            println!("Expense deleted successfully!");
        }

        ExpenseCommands::View { from, to, output } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            if let (Some(start), Some(end)) = (from, to) {
                if start > end {
                    return Err(ExpenseError::InvalidRange { start, end });
                }
            }

            let records = client.list_all()?;
            let Some((min_date, max_date)) = query::date_bounds(&records) else {
                println!("No expenses found.");
                return Ok(());
            };
            // Defaults never cross an explicit bound
            let start = from.unwrap_or_else(|| to.map_or(min_date, |end| min_date.min(end)));
            let end = to.unwrap_or_else(|| max_date.max(start));

            let filtered = query::filter_by_date_range(&records, start, end)?;
            if filtered.is_empty() {
                println!("No expenses found for the selected date range.");
                return Ok(());
            }

            println!("Expenses from {} to {}\n", start, end);
            print!("{}", format_expense_register(&filtered, symbol));

            if let Some(output) = output {
                let path = if output.is_dir() {
                    output.join(query::csv_file_name(start, end))
                } else {
                    output
                };
                let bytes = query::to_csv(&filtered)?;
                std::fs::write(&path, bytes).map_err(|e| {
                    ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
                })?;
                println!("\nExported {} expenses to: {}", filtered.len(), path.display());
            }
        }
    }

    Ok(())
}

fn parse_category(s: &str) -> ExpenseResult<Option<Category>> {
    Category::parse_selection(s).map_err(|e| ExpenseError::Validation(e.to_string()))
}

fn parse_payment_method(s: &str) -> ExpenseResult<Option<PaymentMethod>> {
    PaymentMethod::parse_selection(s).map_err(|e| ExpenseError::Validation(e.to_string()))
}

fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '250.00'. Error: {}",
            s, e
        ))
    })
}

fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> ExpenseResult<()> {
    if date > today {
        return Err(ExpenseError::Validation(format!(
            "Date {} is in the future",
            date
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::FakeStore;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_add_then_list() {
        let client = ExpenseStoreClient::new(FakeStore::new());
        handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::Add {
                amount: "120.50".into(),
                category: "food".into(),
                payment_method: "upi".into(),
                date: Some("2024-01-05".into()),
                description: "Lunch".into(),
            },
        )
        .unwrap();

        let records = client.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payment_method, PaymentMethod::Upi);
        assert_eq!(records[0].amount, Money::from_cents(12050));
    }

    #[test]
    fn test_add_placeholder_is_rejected() {
        let store = FakeStore::new();
        let client = ExpenseStoreClient::new(&store);
        let err = handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::Add {
                amount: "10".into(),
                category: "Select a category".into(),
                payment_method: "Cash".into(),
                date: Some("2024-01-05".into()),
                description: String::new(),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.request_count(), 0);
    }

    #[test]
    fn test_add_future_date_is_rejected() {
        let client = ExpenseStoreClient::new(FakeStore::new());
        let err = handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::Add {
                amount: "10".into(),
                category: "Food".into(),
                payment_method: "Cash".into(),
                date: Some("2999-01-01".into()),
                description: String::new(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_edit_keeps_unspecified_fields() {
        let client = ExpenseStoreClient::new(FakeStore::new());
        let created = client
            .create(
                ExpenseInput::new(
                    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                    Category::Food,
                    Money::from_cents(10000),
                    PaymentMethod::Cash,
                )
                .with_description("Groceries"),
            )
            .unwrap();

        handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::Edit {
                id: created.id.to_string(),
                amount: Some("80".into()),
                category: None,
                payment_method: Some("Debit Card".into()),
                date: None,
                description: None,
            },
        )
        .unwrap();

        let stored = client.get(&created.id).unwrap();
        assert_eq!(stored.amount, Money::from_cents(8000));
        assert_eq!(stored.payment_method, PaymentMethod::DebitCard);
        assert_eq!(stored.category, Category::Food);
        assert_eq!(stored.description, "Groceries");
    }

    #[test]
    fn test_delete_twice() {
        let client = ExpenseStoreClient::new(FakeStore::new());
        let created = client
            .create(ExpenseInput::new(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                Category::Food,
                Money::from_cents(100),
                PaymentMethod::Cash,
            ))
            .unwrap();

        let delete = || ExpenseCommands::Delete { id: created.id.to_string() };
        handle_expense_command(&client, &settings(), delete()).unwrap();
        let err = handle_expense_command(&client, &settings(), delete()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_view_reversed_range() {
        let store = FakeStore::new();
        let client = ExpenseStoreClient::new(&store);
        let err = handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::View {
                from: Some("2024-02-01".into()),
                to: Some("2024-01-01".into()),
                output: None,
            },
        )
        .unwrap_err();
        assert!(err.is_invalid_range());
        assert_eq!(store.request_count(), 0);
    }

    #[test]
    fn test_view_open_range_past_latest_expense() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let client = ExpenseStoreClient::new(FakeStore::new());
        client
            .create(ExpenseInput::new(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                Category::Food,
                Money::from_cents(10000),
                PaymentMethod::Cash,
            ))
            .unwrap();

        handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::View {
                from: Some("2025-01-01".into()),
                to: None,
                output: Some(temp_dir.path().to_path_buf()),
            },
        )
        .unwrap();

        handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::View {
                from: None,
                to: Some("2023-12-31".into()),
                output: Some(temp_dir.path().to_path_buf()),
            },
        )
        .unwrap();

        // Nothing matched, so nothing was exported
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_view_exports_csv_into_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let client = ExpenseStoreClient::new(FakeStore::new());
        for (day, cents) in [(5, 10000), (20, 5000)] {
            client
                .create(ExpenseInput::new(
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    Category::Food,
                    Money::from_cents(cents),
                    PaymentMethod::Cash,
                ))
                .unwrap();
        }

        handle_expense_command(
            &client,
            &settings(),
            ExpenseCommands::View {
                from: None,
                to: None,
                output: Some(temp_dir.path().to_path_buf()),
            },
        )
        .unwrap();

        let path = temp_dir.path().join("expenses_2024-01-05_to_2024-01-20.csv");
        let parsed = query::parse_csv(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
