use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn ledger_cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-ledger").unwrap();
    cmd.current_dir(dir.path()).env_remove("EXPENSE_LEDGER_FILE");
    cmd
}

#[test]
fn save_then_reload_in_new_session() {
    let dir = tempfile::tempdir().unwrap();

    ledger_cmd(&dir)
        .write_stdin("1\n5000\ncoffee, latte\n2024-01-01\n1\n700\nsay \"hi\"\n2024-01-02\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV 저장 완료!"));

    let saved = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
    let lines: Vec<_> = saved.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,amount,memo,date",
            "\"1\",\"5000\",\"coffee, latte\",\"2024-01-01\"",
            "\"2\",\"700\",\"say \"\"hi\"\"\",\"2024-01-02\"",
        ]
    );

    ledger_cmd(&dir)
        .write_stdin("6\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID:1 | 5000원 | coffee, latte | 2024-01-01"))
        .stdout(predicate::str::contains("ID:2 | 700원 | say \"hi\" | 2024-01-02"));
}

#[test]
fn next_id_follows_largest_loaded_id() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("expenses.csv"),
        "id,amount,memo,date\n\
         \"3\",\"10\",\"a\",\"d\"\n\
         \"7\",\"20\",\"b\",\"d\"\n\
         \"2\",\"30\",\"c\",\"d\"\n\n",
    )
    .unwrap();

    ledger_cmd(&dir)
        .write_stdin("6\n1\n40\nnew\n2024-05-05\n2\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV 불러오기 완료! (3건)"))
        .stdout(predicate::str::contains("ID:8 | 40원 | new | 2024-05-05"))
        .stdout(predicate::str::contains("가장 많이 쓴 항목: 40원 (new)"));
}

#[test]
fn file_flag_selects_csv_path() {
    let dir = tempfile::tempdir().unwrap();
    ledger_cmd(&dir)
        .args(["--file", "march.csv"])
        .write_stdin("1\n100\nrice\n2024-03-01\n5\n0\n")
        .assert()
        .success();
    assert!(dir.path().join("march.csv").exists());
    assert!(!dir.path().join("expenses.csv").exists());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    ledger_cmd(&dir)
        .write_stdin("6\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV 파일 없음"));
}

#[test]
fn end_of_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    ledger_cmd(&dir)
        .write_stdin("1\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("오류 발생"));
}

#[test]
fn malformed_row_aborts_session() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("expenses.csv"),
        "id,amount,memo,date\n\"1\",\"many\",\"m\",\"d\"\n",
    )
    .unwrap();
    ledger_cmd(&dir)
        .write_stdin("6\n0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));
}
