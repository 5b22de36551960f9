use predicates::str::contains;

mod common;
use common::{init_db_with_data, setup_test_db, sly};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_prints_frozen_points_breakdown() {
    let db_path = setup_test_db("add_points");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args([
            "--db",
            &db_path,
            "add",
            "Digital Electronics",
            "90",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("Session #1 logged"))
        .stdout(contains("Base: 45 | Bonus: 10 | Total: 55 points"));
}

#[test]
fn test_add_rejects_empty_subject() {
    let db_path = setup_test_db("add_empty_subject");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "add", "   ", "60"])
        .assert()
        .failure()
        .stderr(contains("Subject must not be empty"));
}

#[test]
fn test_add_rejects_non_positive_duration() {
    let db_path = setup_test_db("add_zero_duration");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "add", "Algebra", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));
}

#[test]
fn test_add_rejects_malformed_date() {
    let db_path = setup_test_db("add_bad_date");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args([
            "--db",
            &db_path,
            "add",
            "Algebra",
            "60",
            "--date",
            "01/09/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_all_sessions() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Digital Electronics"))
        .stdout(contains("JLPT"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("Total session points: 75"));
}

#[test]
fn test_list_single_date() {
    let db_path = setup_test_db("list_single_date");
    init_db_with_data(&db_path);

    let out = sly()
        .args(["--db", &db_path, "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Digital Electronics"))
        .stdout(contains("Total session points: 55"));

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).into_owned();
    assert!(!stdout.contains("JLPT"));
}

#[test]
fn test_list_penalties() {
    let db_path = setup_test_db("list_penalties");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "list", "--penalties", "--all"])
        .assert()
        .success()
        .stdout(contains("Social media distraction"))
        .stdout(contains("Total penalty points: -5"));
}

#[test]
fn test_penalty_uses_default_points_from_config() {
    let db_path = setup_test_db("penalty_default_points");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // default_penalty_points defaults to 5
    sly()
        .args([
            "--db",
            &db_path,
            "penalty",
            "Phone during review",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("-5 points"));
}

#[test]
fn test_penalty_rejects_empty_reason() {
    let db_path = setup_test_db("penalty_empty_reason");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "penalty", ""])
        .assert()
        .failure()
        .stderr(contains("reason must not be empty"));
}

#[test]
fn test_del_session_removes_record() {
    let db_path = setup_test_db("del_session");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "del", "--session", "2"])
        .assert()
        .success()
        .stdout(contains("Deleted session #2"));

    let out = sly()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).into_owned();
    assert!(!stdout.contains("JLPT"));
}

#[test]
fn test_del_unknown_session_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "del", "--session", "99"])
        .assert()
        .failure()
        .stderr(contains("No session found with id 99"));
}

#[test]
fn test_del_requires_exactly_one_target() {
    let db_path = setup_test_db("del_no_target");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "del"])
        .assert()
        .failure()
        .stderr(contains("--session <ID> or --penalty <ID>"));
}

#[test]
fn test_reset_requires_confirmation() {
    let db_path = setup_test_db("reset_confirm");
    init_db_with_data(&db_path);

    // without --yes nothing is deleted
    sly()
        .args(["--db", &db_path, "--test", "reset"])
        .assert()
        .success()
        .stdout(contains("--yes"));

    sly()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("JLPT"));
}

#[test]
fn test_reset_wipes_all_records() {
    let db_path = setup_test_db("reset_wipe");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "--test", "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("All data has been reset"));

    sly()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No study sessions found"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(contains("session #1"))
        .stdout(contains("penalty #1"));
}

#[test]
fn test_db_info_and_integrity_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    sly()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Sessions:"))
        .stdout(contains("Database integrity OK"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let dest = common::temp_out("backup", "sqlite");
    sly()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
