//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("tienda").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("tienda").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--cors-origin"))
        .stdout(predicate::str::contains("--db-ssl-mode"));
}

#[test]
fn test_serve_requires_database_url() {
    let mut cmd = Command::cargo_bin("tienda").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("HOST")
        .env_remove("PORT")
        .arg("serve");
    // Keep a stray .env in the working directory out of the picture.
    cmd.current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_check_db_rejects_bad_ssl_mode() {
    let mut cmd = Command::cargo_bin("tienda").unwrap();
    cmd.args([
        "check-db",
        "--database-url",
        "postgres://localhost/tienda",
        "--db-ssl-mode",
        "verify-everything",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
