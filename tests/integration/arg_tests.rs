//! These tests are mostly here just to ensure that invalid arguments are
//! caught before the monitor starts looping.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_batwatch_command;

#[test]
fn test_version() {
    no_cfg_batwatch_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("batwatch"));
}

#[test]
fn test_small_rate() {
    no_cfg_batwatch_command(&["-r", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your poll rate to be at least 1000 milliseconds.",
        ));
}

#[test]
fn test_garbage_rate() {
    no_cfg_batwatch_command(&["-r", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "make sure your poll rate is a valid number or human duration.",
        ));
}

#[test]
fn test_critical_too_low() {
    no_cfg_batwatch_command(&["--critical", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your critical threshold between 1% and 99%.",
        ));
}

#[test]
fn test_critical_too_high() {
    no_cfg_batwatch_command(&["--critical", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your critical threshold between 1% and 99%.",
        ));
}

#[test]
fn test_full_too_low() {
    no_cfg_batwatch_command(&["--full", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your full threshold between 50% and 100%.",
        ));
}

#[test]
fn test_zero_history_size() {
    no_cfg_batwatch_command(&["--history_size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your history size to be at least 1 sample.",
        ));
}

#[test]
fn test_unknown_flag() {
    no_cfg_batwatch_command(&["--not_a_flag"]).assert().failure();
}
