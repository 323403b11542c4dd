use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("EXPENSE_LEDGER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSE_LEDGER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_report() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "income", "salary", "2500"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No prior data found"))
        .stdout(predicate::str::contains("Recorded income 'salary' of $2,500.00"));

    let expenses = [
        ("food", "300"),
        ("transportation", "150"),
        ("entertainment", "200"),
    ];
    for (category, amount) in expenses {
        ledger(&dir)
            .args(["add", "expense", category, amount])
            .assert()
            .success();
    }

    ledger(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout("Current balance: $1,850.00\n");

    ledger(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            "Expense summary by category:\n \
             - entertainment: $200.00\n \
             - food: $300.00\n \
             - transportation: $150.00\n",
        );

    assert!(dir.path().join("transactions.json").exists());
}

#[test]
fn invalid_add_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "income", "salary", "100"])
        .assert()
        .success();
    let before = fs::read_to_string(dir.path().join("transactions.json")).unwrap();

    ledger(&dir)
        .args(["add", "expense", "food", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));

    ledger(&dir)
        .args(["add", "refund", "food", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction kind 'refund'"));

    let after = fs::read_to_string(dir.path().join("transactions.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn csv_file_and_export() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("books.csv");
    let json_path = dir.path().join("copy.json");

    ledger(&dir)
        .arg("--file")
        .arg(&csv_path)
        .args(["add", "expense", "rent, flat", "900.5"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "type,category,amount\nexpense,\"rent, flat\",900.5\n"
    );

    ledger(&dir)
        .arg("--file")
        .arg(&csv_path)
        .arg("export")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions as JSON"));

    ledger(&dir)
        .arg("--file")
        .arg(&json_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rent, flat"));
}

#[test]
fn malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("bad.csv");
    fs::write(&csv_path, "type,category,amount\nexpense,food,abc\n").unwrap();

    ledger(&dir)
        .arg("--file")
        .arg(&csv_path)
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed amount 'abc'"));
}

#[test]
fn spanish_demo() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["--locale", "spanish", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance: $1,850.00"))
        .stdout(predicate::str::contains(" - alimentación: $300.00"));

    let csv = fs::read_to_string(dir.path().join("demo").join("movimientos.csv")).unwrap();
    assert!(csv.starts_with("tipo,categoria,monto\n"));

    let sample = dir.path().join("demo").join("movimientos.json");
    ledger(&dir)
        .args(["--locale", "spanish", "--file"])
        .arg(&sample)
        .args(["add", "gasto", "ocio", "50"])
        .assert()
        .success();

    ledger(&dir)
        .args(["--locale", "spanish", "--file"])
        .arg(&sample)
        .arg("balance")
        .assert()
        .success()
        .stdout("Current balance: $1,800.00\n");
}

#[test]
fn demo_keeps_primary_ledger() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "income", "rent-income", "42"])
        .assert()
        .success();
    let before = fs::read_to_string(dir.path().join("transactions.json")).unwrap();

    ledger(&dir).arg("demo").assert().success();

    assert!(dir.path().join("demo").join("transactions.json").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("transactions.json")).unwrap(),
        before
    );

    ledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rent-income"))
        .stdout(predicate::str::contains("salary").not());
}

#[test]
fn config_save_persists_defaults() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["--format", "csv", "config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default format:  CSV"));

    ledger(&dir)
        .args(["add", "income", "gift", "20"])
        .assert()
        .success();

    assert!(dir.path().join("transactions.csv").exists());
    assert!(!dir.path().join("transactions.json").exists());
}
