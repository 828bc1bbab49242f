use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn translates_input_into_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.ly");
    let output = dir.path().join("main.rb");
    fs::write(&input, "squares = xs.map (x -> x * x)\n").unwrap();

    Command::cargo_bin("lyra")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "squares=xs.map{|x|x*x}"
    );
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.ly");
    let output = dir.path().join("main.rb");
    fs::write(&input, r"\a[1 2 3]").unwrap();
    fs::write(&output, "an older, much longer translation").unwrap();

    Command::cargo_bin("lyra")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "[1, 2, 3]");
}

#[test]
fn missing_argument_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.ly");
    fs::write(&input, "x").unwrap();

    Command::cargo_bin("lyra")
        .unwrap()
        .arg(&input)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn extra_argument_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.ly");
    let output = dir.path().join("main.rb");
    fs::write(&input, "x").unwrap();

    Command::cargo_bin("lyra")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("surplus")
        .assert()
        .failure()
        .code(2);
    assert!(!output.exists());
}

#[test]
fn parse_error_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.ly");
    let output = dir.path().join("main.rb");
    fs::write(&input, "(a b))").unwrap();

    Command::cargo_bin("lyra")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unexpected ')'"));
    assert!(!output.exists());
}

#[test]
fn unreadable_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("lyra")
        .unwrap()
        .arg(dir.path().join("absent.ly"))
        .arg(dir.path().join("out.rb"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[cfg(unix)]
#[test]
fn prep_stages_and_preprocesses() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("main.rb"),
        "#pre\n#define GREETING 1\n#endpre\n# comment\nputs GREETING\n",
    )
    .unwrap();
    let config = root.path().join("prep.toml");
    fs::write(&config, "[preprocessor]\nargs = [\"-c\", \"cp \\\"$0\\\" \\\"$2\\\"\"]\n").unwrap();

    Command::cargo_bin("lyra-prep")
        .unwrap()
        .arg("main")
        .arg("app")
        .arg("sh")
        .arg("--config")
        .arg(&config)
        .arg("--root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app.rb"));

    assert_eq!(
        fs::read_to_string(root.path().join("lyra_out").join("app.rb")).unwrap(),
        "#define GREETING 1\nputs GREETING\n"
    );
}
