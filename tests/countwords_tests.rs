// Integration tests for the countwords binary and the full
// count -> plot pipeline.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wordplot::counts::load_word_counts;

const VERSE: &str = "tests/fixtures/verse.txt";

#[test]
fn test_countwords_writes_sorted_data_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("verse.dat");

    Command::cargo_bin("countwords")
        .unwrap()
        .arg(VERSE)
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "the 7 25.0");
    assert_eq!(lines[1], "sea 3 10.714285714285714");
    assert!(lines[2].starts_with("without 2 "));
    assert!(lines[3].starts_with("a 2 "));

    let counts = load_word_counts(&output).unwrap();
    assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), 28);
}

#[test]
fn test_countwords_min_length() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("verse.dat");

    Command::cargo_bin("countwords")
        .unwrap()
        .arg(VERSE)
        .arg(&output)
        .arg("2")
        .assert()
        .success();

    let counts = load_word_counts(&output).unwrap();
    assert!(counts.iter().all(|c| c.word.chars().count() >= 2));
    assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), 25);
}

#[test]
fn test_countwords_missing_input() {
    let tmp = TempDir::new().unwrap();

    Command::cargo_bin("countwords")
        .unwrap()
        .arg("/nonexistent/verse.txt")
        .arg(tmp.path().join("out.dat"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_count_then_plot_pipeline() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("verse.dat");

    Command::cargo_bin("countwords")
        .unwrap()
        .arg(VERSE)
        .arg(&data)
        .assert()
        .success();

    Command::cargo_bin("plotcounts")
        .unwrap()
        .args(["--limit", "2"])
        .arg(&data)
        .arg("ascii")
        .assert()
        .success()
        .stdout(format!("the  {}\nsea  {}\n", "#".repeat(73), "#".repeat(31)));

    Command::cargo_bin("testzipf")
        .unwrap()
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("\t7\t3\t2.33"));
}
