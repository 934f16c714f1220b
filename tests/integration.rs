//! Integration tests for the `ExpenseTracker`.
//!
//! These tests exercise the full flow against real files in a scratch
//! directory: add → snapshot → report, and CSV import → merge → export.
use expense_tracker::{
    Config, Error, Expense, ExpenseTracker, ImportDecision, ImportOutcome, ParseError, Store,
    ValidationError,
};
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

/// Helper to build a tracker whose files all live in a fresh temp dir
fn setup() -> (TempDir, Config, ExpenseTracker) {
    let dir = TempDir::new().unwrap();
    let config = Config::with_base_dir(dir.path());
    let tracker = ExpenseTracker::new(&config);
    (dir, config, tracker)
}

fn stored(config: &Config) -> Vec<Expense> {
    Store::new(&config.snapshot_path).load().unwrap()
}

#[test]
fn test_add_persists_record_with_minimal_id() {
    let (_dir, config, tracker) = setup();

    tracker.add(dec!(100), "Shopping for one hundred").unwrap();
    tracker.add(dec!(5000), "Large expense").unwrap();
    let added = tracker.add(dec!(25.5), "Shopping for 25.50").unwrap();

    assert_eq!(added.id(), 3);

    let expenses = stored(&config);
    assert_eq!(expenses.len(), 3);
    assert_eq!(expenses[0].value(), dec!(100));
    assert!(!expenses[0].is_pricey());
    assert_eq!(expenses[1].description(), "Large expense");
    assert!(expenses[1].is_pricey());
    assert_eq!(expenses[2].value(), dec!(25.5));
}

#[test]
fn test_add_reuses_gap_in_ids() {
    let (_dir, config, tracker) = setup();
    let store = Store::new(&config.snapshot_path);
    store
        .save(&[
            Expense::new(1, "one", dec!(1)).unwrap(),
            Expense::new(2, "two", dec!(2)).unwrap(),
            Expense::new(4, "four", dec!(4)).unwrap(),
        ])
        .unwrap();

    let added = tracker.add(dec!(3), "three").unwrap();
    assert_eq!(added.id(), 3);
    assert_eq!(stored(&config).last().unwrap().id(), 3);
}

#[test]
fn test_add_non_positive_amount_leaves_store_unchanged() {
    let (_dir, config, tracker) = setup();
    tracker.add(dec!(10), "Existing").unwrap();
    let before = fs::read(&config.snapshot_path).unwrap();

    for value in [dec!(0), dec!(-100)] {
        let err = tracker.add(value, "Invalid").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonPositiveAmount { .. })
        ));
    }

    assert_eq!(fs::read(&config.snapshot_path).unwrap(), before);
}

#[test]
fn test_add_blank_description_leaves_store_unchanged() {
    let (_dir, config, tracker) = setup();

    for description in ["", "   "] {
        let err = tracker.add(dec!(10), description).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyDescription)
        ));
    }

    assert!(!config.snapshot_path.exists());
}

#[test]
fn test_report_big_only_shows_big_records() {
    let (_dir, _config, tracker) = setup();
    tracker.add(dec!(999), "Almost big").unwrap();
    tracker.add(dec!(1000), "Big").unwrap();

    let report = tracker.report(true).unwrap();
    assert!(report.contains("Big"));
    assert!(!report.contains("Almost big"));
    assert!(report.ends_with("Total expenses: 1000.00\n"));

    let full = tracker.report(false).unwrap();
    assert!(full.contains("Almost big"));
    assert!(full.ends_with("Total expenses: 1999.00\n"));
}

#[test]
fn test_report_on_fresh_store_is_empty() {
    let (_dir, _config, tracker) = setup();
    let report = tracker.report(false).unwrap();
    assert!(report.ends_with("Total expenses: 0.00\n"));
    assert_eq!(report.lines().count(), 2);
}

#[test]
fn test_export_writes_csv_and_returns_rendering() {
    let (_dir, config, tracker) = setup();
    tracker.add(dec!(100), "A").unwrap();
    tracker.add(dec!(2000), "B").unwrap();

    let export = tracker.export_to_csv().unwrap();
    assert!(export.written.is_ok());
    assert!(export.rendered.contains("Total expenses: 2100.00"));

    let csv = fs::read_to_string(&config.export_path).unwrap();
    assert_eq!(csv, "id,amount,description,big\n1,100,A,false\n2,2000,B,true\n");
}

#[test]
fn test_export_to_missing_directory_keeps_rendering() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::with_base_dir(dir.path());
    config.export_path = dir.path().join("no-such-dir").join("out.csv");
    let tracker = ExpenseTracker::new(&config);
    tracker.add(dec!(100), "A").unwrap();

    let export = tracker.export_to_csv().unwrap();

    assert!(matches!(export.written, Err(Error::Io(_))));
    assert!(export.rendered.contains(" A\n"));
    assert!(export.rendered.ends_with("Total expenses: 100.00\n"));
    assert!(!config.export_path.exists());
    // The store is untouched by a failed export
    assert_eq!(stored(&config).len(), 1);
}

#[test]
fn test_import_skips_malformed_row_and_merges_on_confirm() {
    let (_dir, config, tracker) = setup();
    tracker.add(dec!(50), "Already there").unwrap();
    fs::write(
        &config.import_path,
        "amount,description\nnot-a-number,Broken\n1200,Flight\n",
    )
    .unwrap();

    let report = tracker.import_preview().unwrap();
    assert!(!report.source_missing);
    assert_eq!(report.imported.len(), 1);
    assert_eq!(report.imported[0].id(), 2);
    assert!(report.imported[0].is_pricey());
    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(
        report.rejected[0].error,
        ParseError::InvalidAmount { .. }
    ));

    // Preview alone writes nothing
    assert_eq!(stored(&config).len(), 1);

    let outcome = tracker
        .commit_import(report.imported, ImportDecision::Confirm)
        .unwrap();
    assert_eq!(outcome, ImportOutcome::Merged { added: 1 });

    let expenses = stored(&config);
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].description(), "Already there");
    assert_eq!(expenses[1].description(), "Flight");
}

#[test]
fn test_import_declined_or_invalid_choice_writes_nothing() {
    let (_dir, config, tracker) = setup();
    tracker.add(dec!(50), "Already there").unwrap();
    fs::write(&config.import_path, "amount,description\n10,New\n").unwrap();

    let report = tracker.import_preview().unwrap();
    let outcome = tracker
        .commit_import(report.imported.clone(), ImportDecision::from_answer("n"))
        .unwrap();
    assert_eq!(outcome, ImportOutcome::Cancelled);

    let outcome = tracker
        .commit_import(report.imported, ImportDecision::from_answer("maybe"))
        .unwrap();
    assert_eq!(outcome, ImportOutcome::InvalidChoice);

    assert_eq!(stored(&config).len(), 1);
}

#[test]
fn test_import_missing_csv_yields_nothing() {
    let (_dir, _config, tracker) = setup();

    let report = tracker.import_preview().unwrap();
    assert!(report.source_missing);
    assert!(report.is_empty());
}

#[test]
fn test_imported_negative_value_survives_round_trip() {
    let (_dir, config, tracker) = setup();
    fs::write(&config.import_path, "amount,description\n-100,Adjustment\n").unwrap();

    let report = tracker.import_preview().unwrap();
    tracker
        .commit_import(report.imported, ImportDecision::Confirm)
        .unwrap();

    let expenses = stored(&config);
    assert_eq!(expenses[0].value(), dec!(-100));
    assert!(tracker
        .report(false)
        .unwrap()
        .ends_with("Total expenses: -100.00\n"));
}

#[test]
fn test_import_of_huge_amounts_still_renders() {
    let (_dir, config, tracker) = setup();
    fs::write(
        &config.import_path,
        "amount,description\n79228162514264337593543950335,a\n79228162514264337593543950335,b\n",
    )
    .unwrap();

    let report = tracker.import_preview().unwrap();
    assert_eq!(report.imported.len(), 2);
    tracker
        .commit_import(report.imported, ImportDecision::Confirm)
        .unwrap();

    assert!(tracker
        .report(false)
        .unwrap()
        .ends_with("Total expenses: out of range\n"));
    let export = tracker.export_to_csv().unwrap();
    assert!(export.written.is_ok());
}

#[test]
fn test_dump_raw_lists_every_field() {
    let (_dir, _config, tracker) = setup();
    tracker.add(dec!(42), "Dinner").unwrap();

    let dump = tracker.dump_raw().unwrap();
    assert!(dump.contains("id: 1"));
    assert!(dump.contains("\"Dinner\""));
    assert!(dump.contains("pricey: false"));
}

#[test]
fn test_truncated_snapshot_is_treated_as_fresh() {
    let (_dir, config, tracker) = setup();
    fs::write(&config.snapshot_path, "[{\"id\":1,").unwrap();

    let added = tracker.add(dec!(5), "After truncation").unwrap();
    assert_eq!(added.id(), 1);
    assert_eq!(stored(&config).len(), 1);
}
