use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sales_ledger::cli::{
    handle_finish_command, handle_history_command, handle_report_command, handle_sale_command,
    handle_sort_command, SaleCommands,
};
use sales_ledger::config::{SalesPaths, Settings};
use sales_ledger::storage::{sales::initialize_store, Storage};

#[derive(Parser)]
#[command(
    name = "sales",
    version,
    about = "Flat-file sales ledger with sorted export and daily reports",
    long_about = "Records sales in a comma-delimited store file, keeps an audit \
                  trail of every change and produces a date-sorted snapshot and \
                  a daily sales report with subtotals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Sale(SaleCommands),

    /// Write the store sorted by date to a snapshot file
    Sort {
        /// Destination (defaults to temp.csv in the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the daily sales report
    Report {
        /// Destination (defaults to sales_report.txt in the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also print the report to stdout
        #[arg(short, long)]
        print: bool,
    },

    /// Write the sorted snapshot and the report
    Finish,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and store
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SalesPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Sale(cmd)) => {
            handle_sale_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Sort { output }) => {
            handle_sort_command(&storage, output)?;
        }
        Some(Commands::Report { output, print }) => {
            handle_report_command(&storage, output, print)?;
        }
        Some(Commands::Finish) => {
            handle_finish_command(&storage)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing sales ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.pin_id_strategy(settings.id_strategy)?;
            if initialize_store(paths.sales_file())? {
                println!("Created empty store: {}", paths.sales_file().display());
            } else {
                println!("Store already exists: {}", paths.sales_file().display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Sales Ledger Configuration");
            println!("==========================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Store file:      {}", paths.sales_file().display());
            println!("Sorted snapshot: {}", paths.sorted_file().display());
            println!("Report file:     {}", paths.report_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Years:            {}-{}", settings.year_min, settings.year_max);
            println!("  ID strategy:      {:?}", settings.id_strategy);
            println!("  Load policy:      {:?}", settings.load_policy);
            println!("  Strict item name: {}", settings.strict_item_names);
            println!("  Currency symbol:  {}", settings.currency_symbol);
        }
        None => {
            println!("Sales Ledger - flat-file sales records");
            println!();
            println!("Run 'sales --help' for usage information.");
        }
    }

    Ok(())
}
