//! CLI commands for reports
//!
//! Monthly totals and the per-month category / payment-method breakdown.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Month;
use crate::reports::{default_month, month_options, BreakdownReport, MonthlyReport};
use crate::store::{ExpenseStoreClient, Transport};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per month
    Monthly,

    /// Category and payment-method breakdown of one month
    Breakdown {
        /// Month to analyse ("January 2024" or "2024-01"); defaults to the
        /// current month when it has expenses, else the earliest month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the months that have expenses
    Months,
}

/// Handle a report command
pub fn handle_report_command<T: Transport>(
    client: &ExpenseStoreClient<T>,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Monthly => {
            let records = client.list_all()?;
            print!("{}", MonthlyReport::generate(&records).format_terminal(symbol));
        }

        ReportCommands::Breakdown { month } => {
            let month = month
                .as_deref()
                .map(|m| {
                    m.parse::<Month>()
                        .map_err(|e| ExpenseError::Validation(e.to_string()))
                })
                .transpose()?;

            let records = client.list_all()?;
            let options = month_options(&records);
            let today = chrono::Local::now().date_naive();

            let Some(month) = month.or_else(|| default_month(&options, today)) else {
                println!("No data available for analytics.");
                return Ok(());
            };

            print!(
                "{}",
                BreakdownReport::generate(&records, month).format_terminal(symbol)
            );
        }

        ReportCommands::Months => {
            let records = client.list_all()?;
            let options = month_options(&records);
            if options.is_empty() {
                println!("No data available for analytics.");
                return Ok(());
            }

            let today = chrono::Local::now().date_naive();
            let selected = default_month(&options, today);
            for month in options {
                let marker = if Some(month) == selected { "*" } else { " " };
                println!("{} {}", marker, month);
            }
        }
    }

    Ok(())
}
