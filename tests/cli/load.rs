use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn load_prints_existing_work_file() {
    let ctx = TestContext::new();
    ctx.touch_work_file("P", "Shot", "sh010", "sh010_v03.blend");
    let expected = ctx.entry_path("P", "Shot", "sh010").join("sh010_v03.blend");

    ctx.cli()
        .args(["load", "sh010", "sh010_v03.blend", "--project", "P", "--kind", "shot"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn load_missing_file_warns() {
    let ctx = TestContext::new();
    ctx.create_project("P");
    let expected = ctx.entry_path("P", "Shot", "sh010").join("sh010_v09.blend");

    ctx.cli()
        .args(["load", "sh010", "sh010_v09.blend", "--project", "P", "--kind", "shot"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("⚠️  No such file: {}", expected.display())));
}

#[test]
fn load_reports_missing_project_before_prompting() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["load", "--project", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project 'Ghost' not found"));
}

#[test]
fn load_reports_project_without_entries() {
    let ctx = TestContext::new();
    ctx.create_project("P");
    let shots = ctx.project_path("P").join("01_Data").join("01_Blender").join("Shot");

    ctx.cli()
        .args(["load", "--project", "P", "--kind", "shot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("No Shot entries in {}", shots.display())))
        .stderr(predicate::str::contains("No such file").not());
}

#[test]
fn load_reports_entry_without_work_files() {
    let ctx = TestContext::new();
    ctx.touch_work_file("P", "Shot", "sh010", "sh010_v01.blend1");
    let entry = ctx.entry_path("P", "Shot", "sh010");

    ctx.cli()
        .args(["load", "sh010", "--project", "P", "--kind", "shot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("No .blend files in {}", entry.display())));
}

#[test]
fn load_trims_project_name_before_lookup() {
    let ctx = TestContext::new();
    ctx.create_project("P");

    ctx.cli()
        .args(["load", "--project", " P ", "--kind", "shot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Shot entries in"))
        .stderr(predicate::str::contains("not found").not());
}
