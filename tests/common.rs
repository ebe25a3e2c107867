#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn infloor() -> Command {
    cargo_bin_cmd!("infloor")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_infloor.sqlite", name));
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

/// Write a badge export (`User,Device,Date`) into the temp dir.
pub fn write_badge_csv(name: &str, rows: &[(&str, &str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_badges.csv", name));

    let mut content = String::from("User,Device,Date\n");
    for (user, device, date) in rows {
        content.push_str(&format!("{user},{device},{date}\n"));
    }

    fs::write(&path, content).expect("write badge csv");
    path.to_string_lossy().to_string()
}

/// Two users on the same day: U1 with a lunch break, U2 straight through,
/// plus a cafeteria swipe that must be ignored.
pub const TWO_USERS_DAY: &[(&str, &str, &str)] = &[
    ("U1", "Main ENTRANCE Door", "14-03-2025 09:00"),
    ("U2", "main entrance door", "14-03-2025 08:30"),
    ("U1", "Main EXIT Door", "14-03-2025 12:00"),
    ("U1", "Cafeteria POS", "14-03-2025 12:10"),
    ("U1", "Main ENTRANCE Door", "14-03-2025 13:00"),
    ("U2", "MAIN EXIT DOOR", "14-03-2025 16:30"),
    ("U1", "Main EXIT Door", "14-03-2025 17:00"),
];
