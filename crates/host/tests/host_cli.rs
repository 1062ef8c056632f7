//! End-to-end runs of the probe-host binary

use assert_cmd::Command;
use predicates::prelude::*;

fn expected_stdout() -> &'static str {
    if cfg!(feature = "build-config") {
        "BUILD_CONFIG set\n"
    } else {
        "BUILD_CONFIG not set\n"
    }
}

fn host() -> Command {
    let mut cmd = Command::cargo_bin("probe-host").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("PROBE_LOG_FORMAT")
        .env_remove("PROBE_LOG_FILTER");
    cmd
}

#[test]
fn test_prints_flag_line_and_exits_zero() {
    host().assert().success().code(0).stdout(expected_stdout());
}

#[cfg(feature = "build-config")]
#[test]
fn test_flag_enabled_line() {
    host().assert().success().stdout("BUILD_CONFIG set\n");
}

#[cfg(not(feature = "build-config"))]
#[test]
fn test_flag_disabled_line() {
    host().assert().success().stdout("BUILD_CONFIG not set\n");
}

#[test]
fn test_arguments_are_ignored() {
    host()
        .args(["--verbose", "/definitely/not/a/real/path/xyz123"])
        .assert()
        .success()
        .stdout(expected_stdout());
}

#[test]
fn test_json_logging_keeps_stdout_clean() {
    host()
        .env("PROBE_LOG_FORMAT", "json")
        .env("PROBE_LOG_FILTER", "probe=debug")
        .assert()
        .success()
        .stdout(expected_stdout())
        .stderr(predicate::str::contains("Self probe completed"));
}

#[test]
fn test_invalid_settings_still_exit_zero() {
    host()
        .env("PROBE_LOG_FORMAT", "xml")
        .assert()
        .success()
        .stdout(expected_stdout())
        .stderr(predicate::str::contains("Invalid settings"));
}
