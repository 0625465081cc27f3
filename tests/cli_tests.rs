use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const SCRIPT_ENV: &str = "LEDGER_CLI_SCRIPT";

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("ledger_core_cli").unwrap();
    cmd.env(SCRIPT_ENV, "1");
    cmd
}

#[test]
fn missing_file_without_create_flag_is_fatal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    cli()
        .args(["-f", path.to_str().unwrap()])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn missing_file_argument_prints_usage() {
    cli()
        .assert()
        .failure()
        .stderr(contains("Usage: ledger_core_cli"));
}

#[test]
fn create_flag_initializes_an_empty_ledger() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ledger.json");

    cli()
        .args(["-f", path.to_str().unwrap(), "--create"])
        .write_stdin("q\n")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn script_session_adds_a_record_and_shows_the_balance() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ledger.json");

    // Add an expense (menu 3), then show balance (menu 1), then quit.
    let input = "3\n-250.75\n\ngroceries\nweekly shop\ny\n1\n4\n";
    cli()
        .args(["-f", path.to_str().unwrap(), "--create"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Ledger:"))
        .stdout(contains("ledger.json"))
        .stdout(contains("Added record"))
        .stdout(contains("Balance: -250.75"));

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"groceries\""));
    assert!(json.contains("\"expense\""));
    assert!(json.contains("\"250.75\""));
}

#[test]
fn corrupt_file_fails_at_startup() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ledger.json");
    std::fs::write(&path, "not a ledger").unwrap();

    cli()
        .args(["-f", path.to_str().unwrap()])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(contains("corrupt ledger file"));
}
