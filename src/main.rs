use anyhow::Result;
use clap::{Parser, Subcommand};

use cashboard::cli::{handle_add, handle_categories, handle_clear, handle_list, handle_summary};
use cashboard::config::{CashboardPaths, LocaleConfig};
use cashboard::storage::{FileStore, TransactionStore};

#[derive(Parser)]
#[command(
    name = "cashboard",
    version,
    about = "Personal-finance dashboard for the terminal",
    long_about = "cashboard keeps a collection of income and expense records in a \
                  local key-value store and renders them as a dashboard: a register \
                  of formatted transactions plus entries/expenses/total highlights."
)]
struct Cli {
    /// Locale preset for currency and dates (pt-BR, en-US)
    #[arg(long, global = true, default_value = "pt-BR")]
    locale: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the highlight summary (entries, expenses, total)
    Summary,

    /// List stored transactions as a register
    List,

    /// Add a new transaction record
    Add {
        /// Free-text description
        title: String,
        /// Amount magnitude (e.g., "59.00"); the kind carries the sign
        amount: String,
        /// Record kind: "income" or "expense"
        kind: String,
        /// Category key (see `cashboard categories`)
        #[arg(short, long, default_value = "purchases")]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the available category keys
    Categories,

    /// Delete all stored transactions
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let locale = LocaleConfig::for_tag(&cli.locale)?;
    let paths = CashboardPaths::new()?;
    paths.ensure_directories()?;

    let mut store = TransactionStore::new(FileStore::new(paths.store_file()));

    match cli.command {
        Commands::Summary => handle_summary(&store, &locale)?,
        Commands::List => handle_list(&store, &locale)?,
        Commands::Add {
            title,
            amount,
            kind,
            category,
            date,
        } => handle_add(
            &mut store,
            &title,
            &amount,
            &kind,
            &category,
            date.as_deref(),
        )?,
        Commands::Categories => handle_categories(),
        Commands::Clear { force } => handle_clear(&mut store, force)?,
    }

    Ok(())
}
