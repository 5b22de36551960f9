#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sly() -> Command {
    cargo_bin_cmd!("studylogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studylogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests:
/// - 2025-09-01: 90 min distraction-free "Digital Electronics" (55 points)
/// - 2025-09-02: 45 min distracted "JLPT" (20 points)
/// - 2025-09-02: 5 point penalty "Social media distraction"
pub fn init_db_with_data(db_path: &str) {
    sly()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args([
            "--db",
            db_path,
            "add",
            "Digital Electronics",
            "90",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success();

    sly()
        .args([
            "--db",
            db_path,
            "add",
            "JLPT",
            "45",
            "--date",
            "2025-09-02",
            "--distracted",
        ])
        .assert()
        .success();

    sly()
        .args([
            "--db",
            db_path,
            "penalty",
            "Social media distraction",
            "--points",
            "5",
            "--date",
            "2025-09-02",
        ])
        .assert()
        .success();
}

/// Helper to populate many sessions directly via the library DB API
pub fn populate_many_sessions(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    // ensure initialized
    studylogger::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        // generate dates in a range
        let day = (i % 28) + 1; // 1..28
        let date = format!("2025-11-{day:02}");
        studylogger::db::queries::add_session(&conn, &date, "Algebra", 60, true)
            .expect("add session");
    }
}
