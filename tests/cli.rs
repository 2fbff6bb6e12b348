use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sales(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sales").unwrap();
    cmd.env("SALES_LEDGER_DATA_DIR", data_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, date: &str, item: &str, quantity: &str, price: &str) {
    sales(data_dir)
        .args(["add", date, item, quantity, price])
        .assert()
        .success();
}

#[test]
fn init_creates_store_and_settings() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap();
    assert_eq!(store, "date,saleID,item name,item quantity,price\n");
    assert!(dir.path().join("config.json").exists());

    sales(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Store already exists"));
}

#[test]
fn add_then_list_and_show() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .args(["add", "01/02/2024", "Pen", "2", "1.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded sale 1"));
    add(dir.path(), "02/02/2024", "Stapler", "1", "12.99");

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap();
    let lines: Vec<_> = store.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,saleID,item name,item quantity,price",
            "01/02/2024,1,Pen,2,1.50",
            "02/02/2024,2,Stapler,1,12.99",
        ]
    );

    sales(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stapler"))
        .stdout(predicate::str::contains("Total (2 sales)"))
        .stdout(predicate::str::contains("$15.99"));

    sales(dir.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item:      Stapler"));
}

#[test]
fn add_rejects_invalid_date() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .args(["add", "2024-02-01", "Pen", "2", "1.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!dir.path().join("sales.csv").exists());
}

#[test]
fn update_replaces_row() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "01/02/2024", "Pen", "2", "1.50");
    add(dir.path(), "02/02/2024", "Ink", "1", "3.00");

    sales(dir.path())
        .args(["update", "1", "05/02/2024", "Marker", "3", "2.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated sale 1"));

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap();
    assert!(store.contains("05/02/2024,1,Marker,3,2.25"));
    assert!(!store.contains("Pen"));

    sales(dir.path())
        .args(["update", "99", "05/02/2024", "Marker", "3", "2.25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn delete_requires_force() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "01/02/2024", "Pen", "2", "1.50");
    add(dir.path(), "02/02/2024", "Ink", "1", "3.00");

    sales(dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));
    assert!(fs::read_to_string(dir.path().join("sales.csv"))
        .unwrap()
        .contains("Pen"));

    sales(dir.path())
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted sale: 1"));

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap();
    assert!(!store.contains("Pen"));
    assert!(store.contains("Ink"));

    sales(dir.path())
        .args(["delete", "1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn sort_writes_lexicographic_snapshot() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales to sort."));
    assert!(!dir.path().join("temp.csv").exists());

    add(dir.path(), "31/01/2024", "Pen", "1", "1.00");
    add(dir.path(), "01/02/2024", "Ink", "1", "2.00");

    sales(dir.path())
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted 2 sales"));

    let sorted = fs::read_to_string(dir.path().join("temp.csv")).unwrap();
    let lines: Vec<_> = sorted.lines().collect();
    assert_eq!(lines[1], "01/02/2024,2,Ink,1,2.00");
    assert_eq!(lines[2], "31/01/2024,1,Pen,1,1.00");
}

#[test]
fn report_groups_by_day() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "01/02/2024", "Pen", "2", "5.00");
    add(dir.path(), "02/02/2024", "Stapler", "4", "5.00");
    add(dir.path(), "01/02/2024", "Ink", "1", "5.00");

    let out = dir.path().join("report.txt");
    sales(dir.path())
        .args(["report", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report of 3 sales over 2 days"));

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("DAILY SALES REPORT"));
    let subtotal = text
        .lines()
        .find(|l| l.starts_with("Subtotal for 2024-02-01:"))
        .unwrap();
    assert!(subtotal.ends_with("15.00"));
    let grand = text.lines().find(|l| l.starts_with("Grand Total:")).unwrap();
    assert!(grand.ends_with("35.00"));
}

#[test]
fn finish_writes_snapshot_and_report() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "01/02/2024", "Pen", "2", "5.00");

    sales(dir.path()).arg("finish").assert().success();

    assert!(dir.path().join("temp.csv").exists());
    assert!(dir.path().join("sales_report.txt").exists());
}

#[test]
fn malformed_store_fails_with_line_number() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("sales.csv"),
        "date,saleID,item name,item quantity,price\n01/02/2024,1,Pen,2,1.50\nbroken row\n",
    )
    .unwrap();

    sales(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn history_shows_mutations() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded."));

    add(dir.path(), "01/02/2024", "Pen", "2", "1.50");
    sales(dir.path())
        .args(["delete", "1", "--force"])
        .assert()
        .success();

    sales(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Sale 1 (Pen)"))
        .stdout(predicate::str::contains("DELETE Sale 1 (Pen)"));
}

#[test]
fn add_accepts_negative_price() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .args(["add", "01/02/2024", "Pen", "1", "-2.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded sale 1"));

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap();
    assert!(store.contains("01/02/2024,1,Pen,1,-2.50"));
}

#[test]
fn add_rejects_overflowing_amount() {
    let dir = TempDir::new().unwrap();

    sales(dir.path())
        .args(["add", "01/02/2024", "Pen", "2", "92233720368547758.07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap_or_default();
    assert!(!store.contains("Pen"));
}

#[test]
fn skip_policy_reports_skipped_rows() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"load_policy":"skip"}"#).unwrap();
    fs::write(
        dir.path().join("sales.csv"),
        "date,saleID,item name,item quantity,price\n01/02/2024,1,Pen,2,1.50\nbroken row\n",
    )
    .unwrap();

    sales(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pen"))
        .stderr(predicate::str::contains("Skipped 1 malformed row(s)"))
        .stderr(predicate::str::contains("line 3"));

    sales(dir.path())
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted 1 sales"))
        .stderr(predicate::str::contains("Skipped 1 malformed row(s)"));

    sales(dir.path())
        .arg("report")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped 1 malformed row(s)"));
}

#[test]
fn store_refuses_id_strategy_switch() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "01/02/2024", "Pen", "1", "1.00");
    assert!(dir.path().join("store.json").exists());

    fs::write(dir.path().join("config.json"), r#"{"id_strategy":"random"}"#).unwrap();

    sales(dir.path())
        .args(["add", "02/02/2024", "Ink", "1", "2.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot switch strategies"));

    let store = fs::read_to_string(dir.path().join("sales.csv")).unwrap();
    assert!(!store.contains("Ink"));
}
