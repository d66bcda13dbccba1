use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn allot() -> Command {
    Command::cargo_bin("allot").unwrap()
}

#[test]
fn test_single_request_matches() {
    allot()
        .args(["--no-color", "-t", "deploy <project> to <environment>"])
        .args(["deploy", "example", "to", "stage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template: deploy <project> to <environment>"))
        .stdout(predicate::str::contains("<project:string> = example"))
        .stdout(predicate::str::contains("<environment:string> = stage"));
}

#[test]
fn test_no_match_exits_with_failure() {
    allot()
        .args(["--no-color", "-t", "revert <commits:integer> commits"])
        .args(["revert", "many", "commits"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ revert many commits"));
}

#[test]
fn test_json_output() {
    allot()
        .args(["--json", "-t", "revert <commits:integer> commits on <project> at (stage|prod)"])
        .args(["revert", "12", "commits", "on", "example", "at", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""matched":true"#))
        .stdout(predicate::str::contains(r#""captures":["12","example","prod"]"#));
}

#[test]
fn test_requests_from_stdin() {
    allot()
        .args(["--json", "-t", "ping", "-t", "echo <word>"])
        .write_stdin("ping\n\necho hello\nunknown\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""request":"ping""#))
        .stdout(predicate::str::contains(r#""value":"hello""#))
        .stdout(predicate::str::contains(r#""matched":false,"request":"unknown""#));
}

#[test]
fn test_template_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# deployments").unwrap();
    writeln!(file, "deploy <project:string>-<stage:string> to <host>").unwrap();
    file.flush().unwrap();

    allot()
        .arg("--no-color")
        .arg("-f")
        .arg(file.path())
        .args(["deploy", "klaus-prod", "to", "example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<project:string> = klaus"))
        .stdout(predicate::str::contains("<stage:string> = prod"));
}

#[test]
fn test_escape_flag() {
    allot()
        .args(["--no-color", "--escape", "-t", "[command] (<lorem:integer>)"])
        .arg("[command] (1234)")
        .assert()
        .success()
        .stdout(predicate::str::contains("<lorem:integer> = 1234"));
}

#[test]
fn test_unknown_type_is_rejected() {
    allot()
        .args(["-t", "wait <seconds:float>", "wait", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid template 'wait <seconds:float>'"));
}

#[test]
fn test_missing_templates() {
    allot()
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No templates given"));
}

#[test]
fn test_verbose_logs_compilation() {
    allot()
        .env_remove("RUST_LOG")
        .args(["--no-color", "--verbose", "-t", "ping", "ping"])
        .assert()
        .success()
        .stderr(predicate::str::contains("compiled template"))
        .stderr(predicate::str::contains("loaded templates"));
}
