use std::process::{Command, Output};

fn xtask(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .args(args)
        .env("CARGO_MANIFEST_DIR", env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask(&["help"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
    assert!(stderr.contains("conform"));
}

#[test]
fn schema_ids_cover_store_and_config() {
    let output = xtask(&["print-schema-ids"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["lostfound.store.v1", "lostfound.config.v1"]
    );
}

#[test]
fn shipped_contract_fixtures_conform() {
    let output = xtask(&["conform"]);
    assert!(
        output.status.success(),
        "conform failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("store.sample.json checked"));
    assert!(stdout.contains("lostfound.sample.toml checked"));
}

#[test]
fn unknown_command_fails() {
    let output = xtask(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown xtask command"));
}
