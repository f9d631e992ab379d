use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use expense_tracker::cli::{
    handle_expense_command, handle_report_command, ExpenseCommands, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::store::ExpenseStoreClient;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses stored in a remote expense API",
    long_about = "Add, edit, delete, list, filter, export and analyse expense \
                  records kept by a remote HTTP expense store."
)]
struct Cli {
    /// Expense store base URL (overrides the configured one)
    #[arg(long, global = true, env = "EXPENSE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly and per-month analytics
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config {
        /// Persist the effective settings (including --api-url)
        #[arg(long)]
        save: bool,
    },
}

fn init_tracing() {
    let log_format = std::env::var("EXPENSE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(api_url) = cli.api_url {
        settings = settings.with_api_url(api_url);
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let client = ExpenseStoreClient::from_settings(&settings)?;
            handle_expense_command(&client, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let client = ExpenseStoreClient::from_settings(&settings)?;
            handle_report_command(&client, &settings, cmd)?;
        }
        Some(Commands::Config { save }) => {
            settings.validate()?;
            if save {
                settings.save(&paths)?;
                println!("Settings saved to: {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Store URL:       {}", settings.api_url);
            println!("  Timeout:         {}s", settings.timeout_secs);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Expense Tracker - personal expenses in a remote store");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
