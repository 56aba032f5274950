use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn cli_cmd() -> Command {
    Command::cargo_bin("lexbloom").expect("lexbloom binary")
}

fn dict(contents: &[u8]) -> (TempDir, PathBuf) {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("words.txt");
    fs::write(&path, contents).expect("write dict");
    (tmp, path)
}

#[test]
fn check_reports_members() {
    let (_tmp, path) = dict(b"Apple\nbanana\ncherry\n");
    let path = path.to_str().unwrap();

    cli_cmd()
        .args(["check", "--dict", path, "APPLE", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"APPLE\" might be in the dictionary"))
        .stdout(predicate::str::contains("\"banana\" might be in the dictionary"));
}

#[test]
fn check_without_normalization_is_case_sensitive_on_input() {
    let (_tmp, path) = dict(b"Paris\n");
    let path = path.to_str().unwrap();

    cli_cmd()
        .args(["check", "--dict", path, "--normalize", "none", "Paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Paris\" might be in the dictionary"));
}

#[test]
fn interactive_reads_until_eof() {
    let (_tmp, path) = dict(b"kiwi\nmango\n");
    let path = path.to_str().unwrap();

    cli_cmd()
        .args(["interactive", "--dict", path, "--bits", "100000", "--probes", "5"])
        .write_stdin("Kiwi\n\nmango\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Kiwi\" might be in the dictionary"))
        .stdout(predicate::str::contains("\"mango\" might be in the dictionary"));
}

#[test]
fn stats_counts_skipped_lines() {
    let (_tmp, path) = dict(b"one\n\xff\xfe\ntwo\n\n");
    let path = path.to_str().unwrap();

    cli_cmd()
        .args(["stats", "--dict", path, "--bits", "1000", "--probes", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bits (m):        1000"))
        .stdout(predicate::str::contains("words loaded:    2"))
        .stdout(predicate::str::contains("lines skipped:   1"));
}

#[test]
fn config_file_sets_params() {
    let (tmp, path) = dict(b"alpha\n");
    let cfg = tmp.path().join("lexbloom.json");
    fs::write(&cfg, br#"{"num_bits": 4096, "num_probes": 4}"#).unwrap();

    cli_cmd()
        .args(["stats", "--dict", path.to_str().unwrap(), "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("bits (m):        4096"))
        .stdout(predicate::str::contains("probes (k):      4"));
}

#[test]
fn fp_test_prints_rates() {
    let (_tmp, path) = dict(b"abcde\nfghij\nklmno\n");
    let path = path.to_str().unwrap();

    cli_cmd()
        .args(["fp-test", "--dict", path, "--trials", "500", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trials: 500"))
        .stdout(predicate::str::contains("false positive rate:"))
        .stdout(predicate::str::contains("theoretical rate:"));
}

#[test]
fn zero_bits_is_rejected() {
    let (_tmp, path) = dict(b"word\n");

    cli_cmd()
        .args(["check", "--dict", path.to_str().unwrap(), "--bits", "0", "word"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter"));
}

#[test]
fn missing_dict_fails() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nope.txt");

    cli_cmd()
        .args(["stats", "--dict", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("open word list"));
}
