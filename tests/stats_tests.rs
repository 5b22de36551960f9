use chrono::Duration;
use predicates::str::contains;

mod common;
use common::{setup_test_db, sly};

fn today_str() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn yesterday_str() -> String {
    (chrono::Local::now().date_naive() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

/// 90 distraction-free minutes today: 55 points, 1.5h streak.
fn seed_today(db_path: &str) {
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
            &today_str(),
        ])
        .assert()
        .success();
}

#[test]
fn test_stats_dashboard_shows_streak_points_and_level() {
    let db_path = setup_test_db("stats_dashboard");
    seed_today(&db_path);

    sly()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Analytics Dashboard"))
        .stdout(contains("Distraction-free streak: 1.5h"))
        .stdout(contains("Net points: 55 | Level: 1"))
        .stdout(contains("Keep studying to reach level 2!"))
        .stdout(contains("Progress to level 2: 55/100"));
}

#[test]
fn test_stats_period_cards_include_today() {
    let db_path = setup_test_db("stats_today_card");
    seed_today(&db_path);

    // the session dated today lands in all three period cards
    sly()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Today"))
        .stdout(contains("This week"))
        .stdout(contains("This month"))
        .stdout(contains("net 55"));
}

#[test]
fn test_stats_goal_progress_uses_default_goals() {
    let db_path = setup_test_db("stats_goals");
    seed_today(&db_path);

    // defaults: daily 8h, weekly 40h
    sly()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Daily goal"))
        .stdout(contains("1.5h/8h"))
        .stdout(contains("Weekly goal"));
}

#[test]
fn test_stats_streak_only_output() {
    let db_path = setup_test_db("stats_streak_only");
    seed_today(&db_path);

    sly()
        .args(["--db", &db_path, "stats", "--streak"])
        .assert()
        .success()
        .stdout(contains("Distraction-free streak: 1.5h (sessions mode)"));
}

#[test]
fn test_streak_breaks_on_distracted_session() {
    let db_path = setup_test_db("stats_streak_break");
    seed_today(&db_path);

    // a distracted session logged after the free one ends the run
    sly()
        .args([
            "--db",
            &db_path,
            "add",
            "JLPT",
            "30",
            "--date",
            &today_str(),
            "--distracted",
        ])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "stats", "--streak"])
        .assert()
        .success()
        .stdout(contains("Distraction-free streak: 0h"));
}

#[test]
fn test_streak_accumulates_across_days() {
    let db_path = setup_test_db("stats_streak_two_days");

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
            &yesterday_str(),
        ])
        .assert()
        .success();

    sly()
        .args([
            "--db",
            &db_path,
            "add",
            "Algebra",
            "90",
            "--date",
            &today_str(),
        ])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "stats", "--streak"])
        .assert()
        .success()
        .stdout(contains("Distraction-free streak: 2.5h"));
}

#[test]
fn test_stats_daily_table() {
    let db_path = setup_test_db("stats_daily_table");
    seed_today(&db_path);

    sly()
        .args([
            "--db",
            &db_path,
            "penalty",
            "Phone during review",
            "--points",
            "5",
            "--date",
            &today_str(),
        ])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "stats", "--daily"])
        .assert()
        .success()
        .stdout(contains("Daily Progress"))
        .stdout(contains(today_str()))
        .stdout(contains("+55 (1)"))
        .stdout(contains("-5 (1)"));
}

#[test]
fn test_goal_show_and_update() {
    let db_path = setup_test_db("goal_update");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "--test", "goal"])
        .assert()
        .success()
        .stdout(contains("Daily goal:  8h"))
        .stdout(contains("Weekly goal: 40h"));

    sly()
        .args(["--db", &db_path, "--test", "goal", "--daily", "6"])
        .assert()
        .success()
        .stdout(contains("Goals updated: daily 6h"));
}

#[test]
fn test_goal_rejects_non_positive_values() {
    let db_path = setup_test_db("goal_invalid");

    sly()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sly()
        .args(["--db", &db_path, "--test", "goal", "--daily", "0"])
        .assert()
        .failure()
        .stderr(contains("Daily goal must be positive"));
}
