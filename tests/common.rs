#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (the session file lives next to the DB, drop it too).
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.session", db_path)).ok();
    db_path
}

/// Initialize the DB and sign in a fresh account, the starting point for
/// most lifecycle tests.
pub fn init_and_login(db_path: &str, email: &str) {
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db", db_path, "--test", "register", "--email", email, "--password", "s3cret",
    ])
    .assert()
    .success();
}
