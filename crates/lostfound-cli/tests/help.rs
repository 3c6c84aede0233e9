use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the lostfound binary.
#[allow(deprecated)]
fn lostfound_cmd() -> Command {
    Command::cargo_bin("lostfound").unwrap()
}

#[test]
fn help_works() {
    lostfound_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("claim"))
        .stdout(predicate::str::contains("--as <USER>"));
}

#[test]
fn explain_prints_remediation() {
    lostfound_cmd()
        .args(["explain", "concurrent_modification"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_code_lists_known_codes() {
    lostfound_cmd()
        .args(["explain", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown code: nope"))
        .stderr(predicate::str::contains("  - not_signed_in"));
}
