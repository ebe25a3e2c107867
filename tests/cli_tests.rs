use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{TWO_USERS_DAY, infloor, setup_test_db, temp_out, write_badge_csv};

#[test]
fn test_report_csv_to_csv() {
    let db_path = setup_test_db("report_csv_to_csv");
    let input = write_badge_csv("report_csv_to_csv", TWO_USERS_DAY);
    let out = temp_out("report_csv_to_csv", "csv");

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("2 daily summaries"))
        .stdout(contains("1 records ignored"));

    let content = fs::read_to_string(&out).expect("read report csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "User,Date,Login Time,Logout Time,Total Duration,In-Floor Time,Break Time"
    );
    assert_eq!(lines[1], "U1,2025-03-14,09:00:00,17:00:00,08:00:00,07:00:00,01:00:00");
    assert_eq!(lines[2], "U2,2025-03-14,08:30:00,16:30:00,08:00:00,08:00:00,00:00:00");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_report_json() {
    let db_path = setup_test_db("report_json");
    let input = write_badge_csv("report_json", TWO_USERS_DAY);
    let out = temp_out("report_json", "json");

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read report json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("json array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["User"], "U1");
    assert_eq!(rows[0]["Break Time"], "01:00:00");
    assert_eq!(rows[1]["In-Floor Time"], "08:00:00");
}

#[test]
fn test_report_xlsx_creates_workbook() {
    let db_path = setup_test_db("report_xlsx");
    let input = write_badge_csv("report_xlsx", TWO_USERS_DAY);
    let out = temp_out("report_xlsx", "xlsx");

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX report written"));

    let bytes = fs::read(&out).expect("read workbook");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_import_then_report_into_store() {
    let db_path = setup_test_db("import_then_report");
    let input = write_badge_csv("import_then_report", TWO_USERS_DAY);

    infloor()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    infloor()
        .args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .success()
        .stdout(contains("7 rows appended"));

    infloor()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("First 2 of 2 summaries"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let rows: Vec<(String, String, i64, i64)> = conn
        .prepare(
            "SELECT \"User\", \"Login Time\", \"In-Floor Seconds\", \"Break Seconds\"
             FROM \"InFloor_Summary\" ORDER BY \"User\"",
        )
        .unwrap()
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        rows,
        vec![
            ("U1".to_string(), "09:00:00".to_string(), 7 * 3600, 3600),
            ("U2".to_string(), "08:30:00".to_string(), 8 * 3600, 0),
        ]
    );

    // raw input is left untouched next to the summary
    let raw: i64 = conn
        .query_row("SELECT COUNT(*) FROM \"Raw\"", [], |r| r.get(0))
        .unwrap();
    assert_eq!(raw, 7);

    infloor()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import").and(contains("report")));
}

#[test]
fn test_import_replace_discards_previous_rows() {
    let db_path = setup_test_db("import_replace");
    let input = write_badge_csv("import_replace", TWO_USERS_DAY);

    infloor()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for _ in 0..2 {
        infloor()
            .args(["--db", &db_path, "import", "--file", &input])
            .assert()
            .success();
    }

    infloor()
        .args(["--db", &db_path, "import", "--file", &input, "--replace"])
        .assert()
        .success()
        .stdout(contains("7 rows replaced"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let raw: i64 = conn
        .query_row("SELECT COUNT(*) FROM \"Raw\"", [], |r| r.get(0))
        .unwrap();
    assert_eq!(raw, 7);
}

#[test]
fn test_report_without_sessions_writes_nothing() {
    let db_path = setup_test_db("report_no_data");
    let input = write_badge_csv(
        "report_no_data",
        &[
            ("U1", "Main ENTRANCE Door", "14-03-2025 09:00"),
            ("U2", "Main EXIT Door", "14-03-2025 10:00"),
        ],
    );
    let out = temp_out("report_no_data", "csv");

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No data to export."))
        .stdout(contains("1 entrances had no following exit"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_report_rejects_malformed_timestamp() {
    let db_path = setup_test_db("report_malformed");
    let input = write_badge_csv(
        "report_malformed",
        &[
            ("U1", "Main ENTRANCE Door", "14-03-2025 09:00"),
            ("U1", "Main EXIT Door", "2025-03-14T17:00"),
        ],
    );
    let out = temp_out("report_malformed", "csv");

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("Malformed timestamp").and(contains("2025-03-14T17:00")));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_report_requires_file_for_csv() {
    let db_path = setup_test_db("report_requires_file");
    let input = write_badge_csv("report_requires_file", TWO_USERS_DAY);

    infloor()
        .args(["--db", &db_path, "report", "--input", &input, "--format", "csv"])
        .assert()
        .failure()
        .stderr(contains("--file is required"));
}

#[test]
fn test_report_from_missing_store_fails() {
    let db_path = setup_test_db("report_missing_store");

    infloor()
        .args(["--db", &db_path, "report"])
        .assert()
        .failure()
        .stderr(contains("Source unavailable"));
}

#[test]
fn test_report_from_missing_csv_fails() {
    let db_path = setup_test_db("report_missing_csv");
    let out = temp_out("report_missing_csv", "csv");

    infloor()
        .args([
            "--db",
            &db_path,
            "report",
            "--input",
            "/no/such/dir/badges.csv",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .failure()
        .stderr(contains("Source unavailable"));
}

#[test]
fn test_existing_output_is_kept_without_force() {
    let db_path = setup_test_db("report_no_force");
    let input = write_badge_csv("report_no_force", TWO_USERS_DAY);
    let out = temp_out("report_no_force", "csv");
    fs::write(&out, "keep me").unwrap();

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    infloor()
        .args([
            "--db", &db_path, "report", "--input", &input, "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("User,Date"));
}
