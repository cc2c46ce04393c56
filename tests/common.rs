#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rsignin::models::{Entry, RegisterType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsi() -> Command {
    cargo_bin_cmd!("rsignin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsignin.sqlite", name));
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

/// `init --test` on a fresh DB
pub fn init_db(db_path: &str) {
    rsi()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one colleague through the CLI
pub fn add_colleague(db_path: &str, first: &str, last: &str, card: &str, date: &str) {
    rsi()
        .args([
            "--db", db_path, "add", first, last, "--card", card, "--date", date, "--hour", "09:00",
        ])
        .assert()
        .success();
}

pub fn colleague(id: i64, first: &str, last: &str, card: &str, date: &str) -> Entry {
    Entry::sign_in(id, RegisterType::Colleagues, first, last, card, date, "09:00")
}

pub fn visitor(id: i64, first: &str, last: &str, date: &str) -> Entry {
    Entry::sign_in(id, RegisterType::Visitors, first, last, "", date, "10:30")
}

pub fn ids(entries: &[Entry]) -> Vec<i64> {
    entries.iter().map(|e| e.id).collect()
}
