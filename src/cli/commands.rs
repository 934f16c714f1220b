pub(crate) use clap::Parser;
use clap::Subcommand;
use expense_tracker::expenses::{
    DEFAULT_EXPORT_FILE, DEFAULT_IMPORT_FILE, DEFAULT_SNAPSHOT_FILE,
};
use expense_tracker::{Config, Decimal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    author,
    version,
    about = "A small personal expense tracker",
    long_about = None,
    after_help = "EXAMPLES:\n    expenses add 100 \"Shopping\"\n    expenses report --big\n    expenses import-csv\n    expenses export-csv"
)]
pub struct Args {
    /// Path to the expense snapshot
    #[arg(long, global = true, env = "EXPENSES_DB", default_value = DEFAULT_SNAPSHOT_FILE)]
    pub db: PathBuf,

    /// CSV file read by `import-csv`
    #[arg(
        long,
        global = true,
        env = "EXPENSES_IMPORT_CSV",
        default_value = DEFAULT_IMPORT_FILE
    )]
    pub import_file: PathBuf,

    /// CSV file written by `export-csv`
    #[arg(
        long,
        global = true,
        env = "EXPENSES_EXPORT_CSV",
        default_value = DEFAULT_EXPORT_FILE
    )]
    pub export_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            snapshot_path: self.db.clone(),
            import_path: self.import_file.clone(),
            export_path: self.export_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all expenses with their total
    Report {
        /// Display only large expenses (1000 and above)
        #[arg(long)]
        big: bool,
    },
    /// Record a new expense
    Add {
        /// Amount, must be positive
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: Decimal,
        /// What the money was spent on
        #[arg(value_name = "DESCRIPTION")]
        description: String,
    },
    /// Import expenses from the import CSV (columns: amount, description)
    ImportCsv {
        /// Append without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show all expenses and write them to the export CSV
    ExportCsv,
    /// Print the stored records in debug form
    Dump,
}
