//! CLI command handlers
//!
//! This module contains the clap command definitions and their handlers,
//! bridging argument parsing with the ledger.

pub mod demo;
pub mod export;
pub mod report;
pub mod session;
pub mod transaction;

use std::path::PathBuf;

use clap::Subcommand;

pub use session::Session;

use crate::error::LedgerResult;
use crate::storage::FileFormat;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record an income or expense
    Add {
        /// Kind token (income/expense, or ingreso/gasto with --locale spanish)
        kind: String,
        /// Category label, stored exactly as given
        category: String,
        /// Amount, must be greater than zero
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Show income minus expenses
    Balance,

    /// Show expense totals per category
    Summary,

    /// List all transactions
    #[command(alias = "ls")]
    List,

    /// Write the ledger to another file
    Export {
        /// Output file path
        output: PathBuf,

        /// Output format (inferred from the extension when omitted)
        #[arg(long = "to", value_enum)]
        to: Option<FileFormat>,
    },

    /// Run the example walkthrough and write sample files
    Demo {
        /// Directory for the sample files (defaults to `demo/` in the data directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Persist the effective locale and format as the new defaults
        #[arg(long)]
        save: bool,
    },
}

/// Dispatch a parsed command
pub fn handle_command(session: &Session, cmd: Commands) -> LedgerResult<()> {
    match cmd {
        Commands::Add {
            kind,
            category,
            amount,
        } => transaction::handle_add(session, &kind, &category, amount),
        Commands::Balance => report::handle_balance(session),
        Commands::Summary => report::handle_summary(session),
        Commands::List => transaction::handle_list(session),
        Commands::Export { output, to } => export::handle_export(session, output, to),
        Commands::Demo { dir } => {
            let dir = dir.unwrap_or_else(|| session.paths.demo_dir());
            demo::handle_demo(&dir, session.locale, session.symbol())
        }
        Commands::Config { save } => handle_config(session, save),
    }
}

fn handle_config(session: &Session, save: bool) -> LedgerResult<()> {
    println!("expense-ledger configuration");
    println!("============================");
    println!("Data directory: {}", session.paths.base_dir().display());
    println!("Settings file:  {}", session.paths.settings_file().display());
    println!("Ledger file:    {}", session.file.display());
    println!();
    println!("Settings:");
    println!("  Locale:          {}", session.locale);
    println!("  Default format:  {}", session.format);
    println!("  Currency symbol: {}", session.settings.currency_symbol);

    if save {
        let settings = crate::config::Settings {
            locale: session.locale,
            default_format: session.format,
            ..session.settings.clone()
        };
        settings.save(&session.paths)?;
        println!();
        println!("Settings saved to {}", session.paths.settings_file().display());
    }

    Ok(())
}
