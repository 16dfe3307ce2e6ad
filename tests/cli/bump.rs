use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn bump_prints_next_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["bump", "shot_v09_final.blend"])
        .assert()
        .success()
        .stdout("shot_v10_final.blend\n");
}

#[test]
fn bump_accepts_negative_increment() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["bump", "shot_v04.blend", "--by", "-1"])
        .assert()
        .success()
        .stdout("shot_v03.blend\n");
}

#[test]
fn bump_without_token_echoes_path() {
    let ctx = TestContext::new();

    ctx.cli().args(["bump", "shot_final.blend"]).assert().success().stdout("shot_final.blend\n");
}

#[test]
fn bump_copy_saves_next_version() {
    let ctx = TestContext::new();
    ctx.touch_work_file("P", "Shot", "sh010", "sh010_v01.blend");
    let entry = ctx.entry_path("P", "Shot", "sh010");
    fs::write(entry.join("sh010_v01.blend"), "scene").unwrap();
    let source = entry.join("sh010_v01.blend");

    ctx.cli()
        .arg("bump")
        .arg(&source)
        .arg("--copy")
        .assert()
        .success()
        .stdout(format!("{}\n", entry.join("sh010_v02.blend").display()));

    assert_eq!(fs::read_to_string(entry.join("sh010_v02.blend")).unwrap(), "scene");

    ctx.cli()
        .arg("bump")
        .arg(&source)
        .arg("--copy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target already exists"));
}

#[test]
fn bump_copy_requires_token() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["bump", "final.blend", "--copy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No version token"));
}

#[test]
fn bump_copy_by_zero_reports_unchanged_path() {
    let ctx = TestContext::new();
    ctx.touch_work_file("P", "Shot", "sh010", "sh010_v01.blend");
    let source = ctx.entry_path("P", "Shot", "sh010").join("sh010_v01.blend");

    ctx.cli()
        .arg("bump")
        .arg(&source)
        .args(["--by", "0", "--copy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("leaves it unchanged"))
        .stderr(predicate::str::contains("No version token").not());
}

#[test]
fn bump_copy_rejects_directory_and_leaves_no_target() {
    let ctx = TestContext::new();
    let source = ctx.entry_path("P", "Shot", "sh010_v01");
    fs::create_dir_all(&source).unwrap();
    let target = ctx.entry_path("P", "Shot", "sh010_v02");

    for _ in 0..2 {
        ctx.cli()
            .arg("bump")
            .arg(&source)
            .arg("--copy")
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("No such file: {}", source.display())));
        assert!(!target.exists());
    }
}
