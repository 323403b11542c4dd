use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_ledger::cli::{handle_command, Commands, Session};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::models::Locale;
use expense_ledger::storage::FileFormat;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal income and expense ledger",
    long_about = "Records income and expenses by category, reports the running \
                  balance and per-category spending, and keeps the ledger in a \
                  JSON or CSV file."
)]
struct Cli {
    /// Ledger file to use instead of the default in the data directory
    #[arg(long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// File format of the ledger file
    #[arg(long, global = true, value_enum)]
    format: Option<FileFormat>,

    /// Vocabulary for kind tokens and file fields
    #[arg(long, global = true, value_enum)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = LedgerPaths::new();
    let settings = Settings::load_or_create(&paths)?;
    let session = Session::resolve(paths, settings, cli.file, cli.format, cli.locale);

    match cli.command {
        Some(cmd) => handle_command(&session, cmd)?,
        None => {
            println!("ledger - personal income and expense tracking");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger demo' to see an example session.");
        }
    }

    Ok(())
}
