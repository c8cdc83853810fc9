use predicates::str::contains;

mod common;
use common::{init_and_login, pc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_clock_in_requires_login() {
    let db_path = setup_test_db("clock_in_requires_login");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "--test", "in"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_clock_in_then_out_round_trip() {
    let db_path = setup_test_db("clock_in_then_out");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "in"])
        .assert()
        .success()
        .stdout(contains("Clocked in at"));

    pc().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("clocked in"));

    pc().args(["--db", &db_path, "--test", "out"])
        .assert()
        .success()
        .stdout(contains("Clocked out. Worked"))
        .stdout(contains("hours"));

    pc().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("clocked out"));
}

#[test]
fn test_double_clock_in_is_rejected() {
    let db_path = setup_test_db("double_clock_in");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "in"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "--test", "in"])
        .assert()
        .failure()
        .stderr(contains("Already clocked in"));
}

#[test]
fn test_clock_out_without_open_entry_is_rejected() {
    let db_path = setup_test_db("out_without_open_entry");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "out"])
        .assert()
        .failure()
        .stderr(contains("Not clocked in"));
}

#[test]
fn test_list_shows_per_day_summary() {
    let db_path = setup_test_db("list_per_day_summary");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "in"])
        .assert()
        .success();
    pc().args(["--db", &db_path, "--test", "out"])
        .assert()
        .success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    pc().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Date"))
        .stdout(contains("First In"))
        .stdout(contains("Last Out"))
        .stdout(contains("Total Hours"))
        .stdout(contains(today));
}

#[test]
fn test_list_json_output() {
    let db_path = setup_test_db("list_json");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "in"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "--test", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total_hours\""))
        .stdout(contains("\"first_clock_in\""));
}

#[test]
fn test_list_rejects_malformed_date() {
    let db_path = setup_test_db("list_bad_date");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "list", "--date", "01/02/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_single_date_with_no_entries_is_empty_row() {
    let db_path = setup_test_db("list_single_empty_date");
    init_and_login(&db_path, "worker@example.com");

    pc().args(["--db", &db_path, "--test", "list", "--date", "2020-05-05"])
        .assert()
        .success()
        .stdout(contains("2020-05-05"))
        .stdout(contains("0.00"));
}
