use assert_cmd::Command;
use predicates::prelude::*;

fn rrul() -> Command {
    Command::cargo_bin("rrul").unwrap()
}

// ============================================================
// Expansion
// ============================================================

#[test]
fn test_basic_rule() {
    rrul()
        .args(["--from", "2025-06-14", "FREQ=DAILY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-14"))
        .stdout(predicate::str::contains("2025-06-18"));
}

#[test]
fn test_weekly_rule_walks_weekdays() {
    rrul()
        .args(["--from", "2025-06-16", "FREQ=WEEKLY;BYDAY=MO,FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-16"))
        .stdout(predicate::str::contains("2025-06-20"))
        .stdout(predicate::str::contains("2025-06-23"));
}

#[test]
fn test_monthly_set_pos_rule() {
    rrul()
        .args(["--from", "2025-06-01", "-n", "3", "FREQ=MONTHLY;BYDAY=FR;BYSETPOS=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-06"))
        .stdout(predicate::str::contains("2025-07-04"))
        .stdout(predicate::str::contains("2025-08-01"));
}

#[test]
fn test_n_flag_caps_output() {
    rrul()
        .args(["-n", "2", "--from", "2025-06-14", "FREQ=DAILY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-15"))
        .stdout(predicate::str::contains("2025-06-16").not());
}

#[test]
fn test_to_flag_bounds_range() {
    rrul()
        .args([
            "--from",
            "2025-06-14",
            "--to",
            "2025-06-16",
            "-n",
            "100",
            "FREQ=DAILY",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-16"))
        .stdout(predicate::str::contains("2025-06-17").not());
}

#[test]
fn test_rule_count_caps_output() {
    rrul()
        .args(["--from", "2025-06-14", "FREQ=DAILY;COUNT=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-15"))
        .stdout(predicate::str::contains("2025-06-16").not());
}

#[test]
fn test_count_zero_reports_no_occurrences() {
    rrul()
        .args(["--from", "2025-06-14", "FREQ=DAILY;COUNT=0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no occurrences"));
}

// ============================================================
// Flags
// ============================================================

#[test]
fn test_check_valid() {
    rrul()
        .args(["--check", "FREQ=DAILY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_check_invalid() {
    rrul()
        .args(["--check", "FREQ=BLORP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown frequency"));
}

#[test]
fn test_parse_json() {
    rrul()
        .args(["--parse", "FREQ=WEEKLY;BYDAY=MO,FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"freq\""))
        .stdout(predicate::str::contains("\"WEEKLY\""))
        .stdout(predicate::str::contains("\"MO\""));
}

#[test]
fn test_parse_json_until() {
    rrul()
        .args(["--parse", "FREQ=DAILY;UNTIL=20251231T235959Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"until\""))
        .stdout(predicate::str::contains("2025-12-31"));
}

#[test]
fn test_describe_english() {
    rrul()
        .args(["--describe", "FREQ=WEEKLY;BYDAY=MO,FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every Monday and Friday"));
}

#[test]
fn test_describe_spanish() {
    rrul()
        .args(["--describe", "--lang", "es", "FREQ=WEEKLY;BYDAY=MO,FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cada lunes y viernes"));
}

#[test]
fn test_describe_unknown_lang() {
    rrul()
        .args(["--describe", "--lang", "fr", "FREQ=DAILY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

// ============================================================
// Matching
// ============================================================

#[test]
fn test_matches_hit() {
    rrul()
        .args([
            "--from",
            "2025-06-14",
            "--matches",
            "2025-06-18",
            "FREQ=WEEKLY;BYDAY=WE",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches"));
}

#[test]
fn test_matches_miss() {
    rrul()
        .args([
            "--from",
            "2025-06-14",
            "--matches",
            "2025-06-19",
            "FREQ=WEEKLY;BYDAY=WE",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not match"));
}

// ============================================================
// Output formats
// ============================================================

#[test]
fn test_json_output() {
    rrul()
        .args(["-n", "3", "--json", "--from", "2025-06-14", "FREQ=DAILY"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"2025-06-14\""));
}

// ============================================================
// Error cases
// ============================================================

#[test]
fn test_no_rule() {
    rrul().assert().failure();
}

#[test]
fn test_parse_error_shows_span() {
    rrul()
        .arg("FREQ=DAILY;INTERVAL=x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("^"));
}

#[test]
fn test_invalid_from_date() {
    rrul()
        .args(["--from", "junk", "FREQ=DAILY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --from date"));
}
