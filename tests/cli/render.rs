use crate::harness::TestContext;
use predicates::prelude::*;
use std::path::MAIN_SEPARATOR;

#[test]
fn render_creates_directory_and_prints_output_path() {
    let ctx = TestContext::new();
    ctx.create_project("P");
    let render = ctx.project_path("P").join("Render");

    ctx.cli()
        .args(["render", "--project", "P"])
        .assert()
        .success()
        .stdout(format!("{}{}\n", render.display(), MAIN_SEPARATOR))
        .stderr(predicate::str::contains("Created render directory"));

    assert!(render.is_dir());

    ctx.cli()
        .args(["render", "--project", "P"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created render directory").not());
}
