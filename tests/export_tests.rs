use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, sly, temp_out};

#[test]
fn test_export_sessions_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");
    sly()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,subject,duration_min"));
    assert!(content.contains("Digital Electronics"));
    assert!(content.contains("JLPT"));
}

#[test]
fn test_export_sessions_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");
    sly()
        .args([
            "--db", &db_path, "export", "--format", "json", "--out", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let records = parsed.as_array().expect("array of sessions");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["subject"], "Digital Electronics");
    assert_eq!(records[0]["total_points"], 55);
}

#[test]
fn test_export_respects_period_filter() {
    let db_path = setup_test_db("export_period");
    init_db_with_data(&db_path);

    let out = temp_out("export_period", "csv");
    sly()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--out",
            &out,
            "--period",
            "2025-09-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Digital Electronics"));
    assert!(!content.contains("JLPT"));
}

#[test]
fn test_export_month_period_includes_both_days() {
    let db_path = setup_test_db("export_month");
    init_db_with_data(&db_path);

    let out = temp_out("export_month", "csv");
    sly()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--out",
            &out,
            "--period",
            "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Digital Electronics"));
    assert!(content.contains("JLPT"));
}

#[test]
fn test_export_penalties() {
    let db_path = setup_test_db("export_penalties");
    init_db_with_data(&db_path);

    let out = temp_out("export_penalties", "csv");
    sly()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--out",
            &out,
            "--penalties",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,reason,points"));
    assert!(content.contains("Social media distraction"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "existing").expect("create existing file");

    sly()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--out", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // unchanged
    assert_eq!(fs::read_to_string(&out).unwrap(), "existing");

    sly()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--out", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().contains("JLPT"));
}

#[test]
fn test_export_rejects_invalid_period() {
    let db_path = setup_test_db("export_bad_period");
    init_db_with_data(&db_path);

    let out = temp_out("export_bad_period", "csv");
    sly()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--out",
            &out,
            "--period",
            "next-week",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid"));
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");
    sly()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}
