mod commands;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Args, Command};
use expense_tracker::expenses::render;
use expense_tracker::{Error, ExpenseTracker, ImportDecision, ImportOutcome};

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let tracker = ExpenseTracker::new(&args.config());

    match args.command {
        Command::Report { big } => {
            let report = tracker
                .report(big)
                .context("Failed to load expenses for the report")?;
            print!("{report}");
        }
        Command::Add { value, description } => match tracker.add(value, &description) {
            Ok(expense) => {
                log::debug!("Stored {expense}");
                println!("Expense added!");
            }
            Err(Error::Validation(e)) => println!("Error: {e}"),
            Err(e) => return Err(e).context("Failed to add expense"),
        },
        Command::ImportCsv { yes } => import_csv(&tracker, yes)?,
        Command::ExportCsv => {
            let export = tracker
                .export_to_csv()
                .context("Failed to load expenses for export")?;
            print!("{}", export.rendered);
            match export.written {
                Ok(()) => println!("Expenses have been saved to a CSV file."),
                Err(e) => println!(
                    "Error: could not write {}: {e}",
                    tracker.csv().export_path().display()
                ),
            }
        }
        Command::Dump => {
            let dump = tracker.dump_raw().context("Failed to load expenses")?;
            println!("{dump}");
        }
    }

    Ok(())
}

fn import_csv(tracker: &ExpenseTracker, assume_yes: bool) -> Result<()> {
    let report = tracker.import_preview().with_context(|| {
        format!(
            "Failed to import expenses from {}",
            tracker.csv().import_path().display()
        )
    })?;

    if report.source_missing {
        println!("CSV file not found.");
    }
    for rejected in &report.rejected {
        println!("{rejected}");
    }
    if report.is_empty() {
        println!("No data to import.");
        return Ok(());
    }

    println!("Imported expenses:");
    print!("{}", render(&report.imported));

    let decision = if assume_yes {
        ImportDecision::Confirm
    } else {
        ask("Append imported expenses to the existing database? [y/n] ")?
    };

    let outcome = tracker
        .commit_import(report.imported, decision)
        .context("Failed to save imported expenses")?;

    match outcome {
        ImportOutcome::Merged { .. } => {
            println!("Imported data from the CSV file has been added to the database.");
        }
        ImportOutcome::Cancelled => println!("Import canceled."),
        ImportOutcome::InvalidChoice => println!("Invalid choice. Import canceled."),
    }
    Ok(())
}

fn ask(prompt: &str) -> Result<ImportDecision> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to write prompt")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(ImportDecision::from_answer(&answer))
}
