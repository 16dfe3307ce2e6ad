use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn settings_file_supplies_root_and_defaults() {
    let ctx = TestContext::new();
    let root = ctx.projects_dir().display().to_string();
    ctx.write_settings(&format!(
        "[projects]\nroot = {:?}\ndefault_name = \"Spot\"\n\n[work_files]\ndefault_kind = \"Shot\"\n",
        root
    ));

    ctx.cli_without_root().arg("create").assert().success();
    ctx.cli_without_root().args(["save", "--name", "sh010"]).assert().success();

    assert!(ctx.project_path("Spot").join("04_Client").is_dir());
    assert!(ctx.entry_path("Spot", "Shot", "sh010").is_dir());
}

#[test]
fn root_flag_overrides_settings_file() {
    let ctx = TestContext::new();
    ctx.write_settings("[projects]\nroot = \"/definitely/not/here\"\n");

    ctx.create_project("P");

    ctx.cli().arg("projects").assert().success().stdout("P\n");
}

#[test]
fn malformed_settings_fail() {
    let ctx = TestContext::new();
    ctx.write_settings("[projects]\nunknown = 1\n");

    ctx.cli()
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn explicit_missing_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "nope.toml", "projects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
