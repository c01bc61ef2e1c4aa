use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn vitae(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    cmd.arg("--data").arg(data).env_remove("VITAE_LOG");
    cmd
}

#[test]
fn empty_resume_shows_hint() {
    let temp_dir = tempfile::tempdir().unwrap();

    vitae(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No resume data yet"));
}

#[test]
fn build_preview_and_export() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");

    vitae(&data)
        .args(["info", "--set", "fullName=Ada Lovelace"])
        .args(["--set", "title=Analyst"])
        .args(["--set", "email=ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personal information updated successfully",
        ));
    assert!(data.join("resume.json").exists());

    vitae(&data)
        .args(["experience", "add"])
        .args(["--set", "company=Analytical Engines"])
        .args(["--set", "position=Programmer"])
        .args(["--set", "startDate=1842-01"])
        .args(["--set", "current=true"])
        .args(["--push", "highlights=First published algorithm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Experience added successfully"));

    vitae(&data)
        .args(["skill", "add", "--set", "name=Mathematics", "--set", "level=5"])
        .assert()
        .success();

    vitae(&data)
        .args(["experience", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Programmer at Analytical Engines"));

    vitae(&data)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Ada Lovelace"))
        .stdout(predicate::str::contains("## Work Experience"))
        .stdout(predicate::str::contains("First published algorithm"));

    vitae(&data)
        .args(["show", "--template", "classic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADA LOVELACE"));

    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    vitae(&data)
        .args(["export", "--format", "md", "--output"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada_Lovelace_Resume.md"));

    let exported = std::fs::read_to_string(out_dir.join("Ada_Lovelace_Resume.md")).unwrap();
    assert!(exported.contains("# Ada Lovelace"));
    assert!(exported.contains("Mathematics"));
}

#[test]
fn invalid_input_is_rejected_with_exit_code_2() {
    let temp_dir = tempfile::tempdir().unwrap();

    vitae(temp_dir.path())
        .args(["education", "add", "--set", "institution=MIT"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Degree is required"))
        .stdout(predicate::str::contains("Start date is required"));

    vitae(temp_dir.path())
        .args(["skill", "add", "--set", "name=Go", "--set", "level=9"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("must be a whole number from 1 to 5"));

    vitae(temp_dir.path())
        .args(["info", "--set", "email=not-an-email"])
        .assert()
        .code(2);

    vitae(temp_dir.path())
        .args(["template", "fancy"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Unknown template 'fancy'"));

    assert!(!temp_dir.path().join("resume.json").exists());
}

#[test]
fn edit_and_remove_by_position() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    for name in ["Rust", "Go"] {
        vitae(data)
            .args(["skill", "add", "--set"])
            .arg(format!("name={}", name))
            .assert()
            .success();
    }

    // Newest first
    vitae(data)
        .args(["skill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Go (Intermediate)"))
        .stdout(predicate::str::contains("2. Rust (Intermediate)"));

    vitae(data)
        .args(["skill", "edit", "2", "--set", "level=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill updated successfully"));

    vitae(data)
        .args(["skill", "remove", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill removed successfully"));

    vitae(data)
        .args(["skill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Rust (Expert)"))
        .stdout(predicate::str::contains("Go").not());

    vitae(data)
        .args(["skill", "remove", "7", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No skill matches #7"));
}

#[test]
fn destructive_commands_need_confirmation_without_a_terminal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    vitae(data)
        .args(["skill", "add", "--set", "name=Rust"])
        .assert()
        .success();

    vitae(data)
        .args(["skill", "remove", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Cancelled"));

    vitae(data).arg("reset").assert().code(2);

    vitae(data)
        .args(["config", "confirm_destructive", "false"])
        .assert()
        .success();

    vitae(data)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resume data has been reset"));

    vitae(data)
        .arg("load")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved resume found"));
}

#[test]
fn piped_answer_does_not_confirm() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    vitae(data)
        .args(["skill", "add", "--set", "name=Rust"])
        .assert()
        .success();

    vitae(data)
        .args(["skill", "remove", "1"])
        .write_stdin("y\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Cancelled"));

    vitae(data)
        .args(["skill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Rust"));
}

#[test]
fn template_selection_persists() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    vitae(data)
        .args(["template", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template updated successfully"));

    vitae(data)
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current template: minimal"));
}

#[test]
fn config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    vitae(data)
        .args(["config", "export_format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export_format set to md"));

    vitae(data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("export_format"))
        .stdout(predicate::str::contains("list_width"));

    vitae(data)
        .args(["config", "colour"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn data_dir_from_environment() {
    let temp_dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("vitae")
        .unwrap()
        .env("VITAE_DATA_DIR", temp_dir.path())
        .args(["info", "--set", "fullName=Grace Hopper"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(temp_dir.path().join("resume.json")).unwrap();
    assert!(saved.contains("Grace Hopper"));
}

#[test]
fn malformed_pairs_are_usage_errors() {
    let temp_dir = tempfile::tempdir().unwrap();

    vitae(temp_dir.path())
        .args(["skill", "add", "--set", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIELD=VALUE"));
}
