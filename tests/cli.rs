//! End-to-end CLI tests
//!
//! Runs the compiled binary against a throwaway config directory so the
//! user's real settings are never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pressbook(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pressbook").unwrap();
    cmd.env("PRESSBOOK_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn income_report_over_sample_data() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["report", "income"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Revenue:")
                .and(predicate::str::contains("$3700.00"))
                .and(predicate::str::contains("$1220.00"))
                .and(predicate::str::contains("$2480.00")),
        );
}

#[test]
fn breakeven_report_uses_default_settings() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["report", "breakeven"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$12500.00"));
}

#[test]
fn empty_flag_starts_with_blank_ledger() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["transaction", "list", "--empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded yet."));
}

#[test]
fn zero_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["transaction", "add", "Nothing", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must not be zero"));
}

#[test]
fn csv_export_writes_the_ledger_to_stdout() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["export", "transactions"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("id,date,description,amount")
                .and(predicate::str::contains("Flyer sale")),
        );
}

#[test]
fn inventory_set_reports_low_stock() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["inventory", "set", "ink", "--quantity", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("REORDER"));
}

#[test]
fn config_set_then_show_round_trips() {
    let dir = TempDir::new().unwrap();
    pressbook(&dir)
        .args(["config", "set", "--fixed-costs", "8000"])
        .assert()
        .success();

    pressbook(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8000.00"));
}
