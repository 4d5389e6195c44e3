//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::batwatch_command;

#[test]
fn test_toml_mismatch_type() {
    batwatch_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_broken_toml() {
    batwatch_command(&["-C", "./tests/invalid_configs/broken.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to properly parse or create the config file.",
        ));
}

#[test]
fn test_rate_too_small() {
    batwatch_command(&["-C", "./tests/invalid_configs/small_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your poll rate to be at least 1000 milliseconds.",
        ));
}

#[test]
fn test_hibernate_above_critical() {
    batwatch_command(&["-C", "./tests/invalid_configs/hibernate_above_critical.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your hibernate threshold to be at most the critical threshold.",
        ));
}

#[test]
fn test_invalid_full_threshold() {
    batwatch_command(&["-C", "./tests/invalid_configs/bad_full_threshold.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "set your full threshold between 50% and 100%.",
        ));
}
