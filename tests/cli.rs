use predicates::prelude::*;

#[test]
fn url_outside_observable_exits_with_status_one() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let out_dir = temp.path().join("out");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("observable-to-quarto");
    cmd.args(["https://example.com/d/abc", out_dir.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "url must be from observablehq.com",
        ));

    assert!(!out_dir.exists());
    Ok(())
}

#[test]
fn default_output_dir_is_not_created_on_rejected_url() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("observable-to-quarto");
    cmd.current_dir(temp.path())
        .args(["http://observablehq.com/d/abc"])
        .assert()
        .code(1);

    assert!(!temp.path().join("output").exists());
    Ok(())
}

#[test]
fn help_describes_positional_arguments() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("observable-to-quarto");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<URL>"))
        .stdout(predicate::str::contains("[OUTPUT_DIR]"))
        .stdout(predicate::str::contains("[default: output]"));
}

#[test]
fn missing_url_is_a_usage_error() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("observable-to-quarto");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<URL>"));
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("observable-to-quarto");
    cmd.current_dir(temp.path())
        .env("RUST_LOG", "debug")
        .args(["https://example.com/d/abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parsed cli"));
    Ok(())
}
