use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn projects_lists_directories_sorted() {
    let ctx = TestContext::new();
    ctx.create_project("Zulu");
    ctx.create_project("Alpha");
    fs::write(ctx.projects_dir().join("stray.txt"), "").unwrap();

    ctx.cli().arg("projects").assert().success().stdout("Alpha\nZulu\n");
}

#[test]
fn projects_json_output() {
    let ctx = TestContext::new();
    ctx.create_project("Alpha");

    let output = ctx.cli().args(["projects", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, vec!["Alpha"]);
}

#[test]
fn projects_of_missing_root_is_empty() {
    let ctx = TestContext::new();

    ctx.cli_without_root()
        .arg("--root")
        .arg(ctx.projects_dir().join("missing"))
        .arg("projects")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn entries_follow_kind() {
    let ctx = TestContext::new();
    ctx.touch_work_file("P", "Shot", "sh020", "sh020_v01.blend");
    ctx.touch_work_file("P", "Shot", "sh010", "sh010_v01.blend");
    ctx.touch_work_file("P", "Asset", "tree", "tree_v01.blend");

    ctx.cli()
        .args(["entries", "--project", "P", "--kind", "shot"])
        .assert()
        .success()
        .stdout("sh010\nsh020\n");
    ctx.cli()
        .args(["entries", "--project", "P", "--kind", "Asset"])
        .assert()
        .success()
        .stdout("tree\n");
}

#[test]
fn entries_of_missing_project_is_empty() {
    let ctx = TestContext::new();

    ctx.cli().args(["entries", "--project", "Nope"]).assert().success().stdout("");
}

#[test]
fn files_filters_by_extension() {
    let ctx = TestContext::new();
    ctx.touch_work_file("P", "Asset", "tree", "tree_v02.blend");
    ctx.touch_work_file("P", "Asset", "tree", "tree_v01.blend");
    ctx.touch_work_file("P", "Asset", "tree", "tree_v01.blend1");

    ctx.cli()
        .args(["files", "tree", "--project", "P", "--kind", "asset"])
        .assert()
        .success()
        .stdout("tree_v01.blend\ntree_v02.blend\n");
}

#[test]
fn invalid_kind_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["entries", "--kind", "camera"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid kind 'camera'"));
}
