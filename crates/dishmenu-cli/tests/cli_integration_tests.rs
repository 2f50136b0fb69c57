//! CLI integration tests
//!
//! Drive the built binary inside a temporary working directory that holds
//! its own appsettings.json.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn setup_workdir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("appsettings.json"),
        r#"{ "ConnectionStrings": { "DefaultConnection": "Data Source=dishmenu.db" } }"#,
    )
    .unwrap();
    temp_dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_dishmenu-cli");
    Command::new(cli_bin)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_demo_runs_all_steps() {
    // Scenario: running without a subcommand performs the walkthrough
    let temp_dir = setup_workdir();

    let stdout = stdout_of(&run(temp_dir.path(), &[]));

    let expected = "\
Database is reachable.
Dish added.
Dish collection added.
Dishes with names containing 'Суп':
1: Суп томатный - 85.00 UAH
2: Суп грибной - 56.99 UAH
Dish with id = 1: Суп томатный - 85.00 UAH
Most recently added dish: Борщ - 64.55 UAH
";
    assert_eq!(stdout, expected);
    assert!(temp_dir.path().join("dishmenu.db").exists());
}

#[test]
fn test_demo_resets_unless_keep_data() {
    let temp_dir = setup_workdir();

    stdout_of(&run(temp_dir.path(), &["demo"]));
    stdout_of(&run(temp_dir.path(), &["demo"]));
    assert_eq!(stdout_of(&run(temp_dir.path(), &["count"])).trim(), "3");

    let stdout = stdout_of(&run(temp_dir.path(), &["demo", "--keep-data"]));
    assert!(stdout.contains("Most recently added dish: Борщ - 64.55 UAH"));
    assert_eq!(stdout_of(&run(temp_dir.path(), &["count"])).trim(), "6");
}

#[test]
fn test_demo_keep_data_without_database_stops_early() {
    let temp_dir = setup_workdir();

    let output = run(temp_dir.path(), &["demo", "--keep-data"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Could not connect to the database.\n"
    );
    assert!(!temp_dir.path().join("dishmenu.db").exists());
}

#[test]
fn test_get_accepts_negative_id() {
    let temp_dir = setup_workdir();
    stdout_of(&run(temp_dir.path(), &["init"]));

    let stdout = stdout_of(&run(temp_dir.path(), &["get", "-1"]));
    assert_eq!(stdout.trim(), "Dish with id -1 not found.");
}

#[test]
fn test_add_get_latest_and_search() {
    let temp_dir = setup_workdir();
    stdout_of(&run(temp_dir.path(), &["init"]));

    let stdout = stdout_of(&run(
        temp_dir.path(),
        &["add", "--name", "Test", "--description", "D", "--price", "10"],
    ));
    assert_eq!(stdout.trim(), "Dish added with id 1.");

    assert_eq!(
        stdout_of(&run(temp_dir.path(), &["get", "1"])).trim(),
        "1: Test - 10.00 UAH"
    );
    assert_eq!(
        stdout_of(&run(temp_dir.path(), &["get", "42"])).trim(),
        "Dish with id 42 not found."
    );
    assert_eq!(
        stdout_of(&run(temp_dir.path(), &["latest"])).trim(),
        "1: Test - 10.00 UAH"
    );

    let stdout = stdout_of(&run(temp_dir.path(), &["search", "es"]));
    assert!(stdout.contains("1: Test - 10.00 UAH"));
    let stdout = stdout_of(&run(temp_dir.path(), &["search", "TEST"]));
    assert!(!stdout.contains("1: Test"), "search is case-sensitive");
}

#[test]
fn test_import_then_list() {
    let temp_dir = setup_workdir();
    stdout_of(&run(temp_dir.path(), &["init"]));
    fs::write(
        temp_dir.path().join("menu.json"),
        r#"[
            {"name": "Суп грибной", "description": "Грибной суп с лисичками", "price": "56.99"},
            {"name": "Борщ", "price": "64.55"}
        ]"#,
    )
    .unwrap();

    let stdout = stdout_of(&run(temp_dir.path(), &["import", "menu.json"]));
    assert_eq!(stdout.trim(), "Imported 2 dishes.");

    let stdout = stdout_of(&run(temp_dir.path(), &["list"]));
    assert_eq!(
        stdout,
        "1: Суп грибной - 56.99 UAH\n2: Борщ - 64.55 UAH\n"
    );
}

#[test]
fn test_import_rejects_bad_price_without_partial_insert() {
    let temp_dir = setup_workdir();
    stdout_of(&run(temp_dir.path(), &["init"]));
    fs::write(
        temp_dir.path().join("menu.json"),
        r#"[{"name": "Борщ", "price": "64.55"}, {"name": "Плов", "price": "1.999"}]"#,
    )
    .unwrap();

    let output = run(temp_dir.path(), &["import", "menu.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert_eq!(stdout_of(&run(temp_dir.path(), &["count"])).trim(), "0");
}

#[test]
fn test_check_reports_missing_database() {
    let temp_dir = setup_workdir();

    let output = run(temp_dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("dishmenu.db").exists());

    stdout_of(&run(temp_dir.path(), &["init"]));
    let stdout = stdout_of(&run(temp_dir.path(), &["check"]));
    assert_eq!(stdout.trim(), "Database is reachable.");
}

#[test]
fn test_missing_settings_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["count"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_CONFIGURATION"), "stderr: {}", stderr);
}

#[test]
fn test_connection_override_and_named_entries() {
    let temp_dir = setup_workdir();
    fs::write(
        temp_dir.path().join("other.json"),
        r#"{ "ConnectionStrings": { "Reporting": "reports.db" } }"#,
    )
    .unwrap();

    stdout_of(&run(
        temp_dir.path(),
        &["--config", "other.json", "--connection-name", "Reporting", "init"],
    ));
    assert!(temp_dir.path().join("reports.db").exists());

    let stdout = stdout_of(&run(temp_dir.path(), &["--connection", ":memory:", "demo"]));
    assert!(stdout.contains("Most recently added dish: Борщ - 64.55 UAH"));
    assert!(!temp_dir.path().join("dishmenu.db").exists());

    let output = run(
        temp_dir.path(),
        &["--connection", "Server=localhost;Database=DishMenu", "count"],
    );
    assert_eq!(output.status.code(), Some(1));
}
