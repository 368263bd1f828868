//! Runs the `skillset` binary as the skills do

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn skillset(root: &Path, args: &[&str], stdin: &str) -> Output {
    skillset_in(Path::new(env!("CARGO_MANIFEST_DIR")), root, args, stdin)
}

fn skillset_in(cwd: &Path, root: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_skillset"))
        .current_dir(cwd)
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SKILLSET_ROOT")
        .env_remove("SKILLSET__LOGGING__LEVEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn skillset");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for skillset")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_config_prompts_and_prints_json() {
    let root = TempDir::new().expect("tempdir");

    let output = skillset(root.path(), &["config"], "https://example.atlassian.net\n");

    assert!(output.status.success());
    assert!(stdout(&output)
        .ends_with("{\"tasksManagerSystemBaseUrl\":\"https://example.atlassian.net\"}\n"));
    assert!(root.path().join("skills-configs.json").exists());
}

#[test]
fn test_default_command_is_config() {
    let root = TempDir::new().expect("tempdir");
    std::fs::write(
        root.path().join("skills-configs.json"),
        r#"{"tasksManagerSystemBaseUrl": "https://a.example.net", "other": "x"}"#,
    )
    .expect("seed");

    let output = skillset(root.path(), &[], "");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\"tasksManagerSystemBaseUrl\":\"https://a.example.net\",\"other\":\"x\"}\n"
    );
}

#[test]
fn test_write_failure_exits_non_zero() {
    let root = TempDir::new().expect("tempdir");
    let missing = root.path().join("missing");

    let output = skillset(&missing, &["config"], "https://example.atlassian.net\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
}

#[test]
fn test_tickets_rendering() {
    let root = TempDir::new().expect("tempdir");
    std::fs::write(
        root.path().join("skills-configs.json"),
        r#"{"tasksManagerSystemBaseUrl": "https://t.example.net/browse/"}"#,
    )
    .expect("seed");

    let output = skillset(root.path(), &["tickets", "A-1,B-2"], "");
    assert_eq!(
        stdout(&output),
        "[A-1](https://t.example.net/browse/A-1), [B-2](https://t.example.net/browse/B-2)\n"
    );

    let output = skillset(root.path(), &["tickets"], "");
    assert_eq!(stdout(&output), "N/A\n");
}

#[test]
fn test_tickets_without_base_url() {
    let root = TempDir::new().expect("tempdir");

    let output = skillset(root.path(), &["tickets", "A-1"], "\n");

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("A-1\n"));
    assert!(!root.path().join("skills-configs.json").exists());
}

#[test]
fn test_check_reports_invalid_skill() {
    let root = TempDir::new().expect("tempdir");
    let skill_dir = root.path().join("skills").join("bad-skill");
    std::fs::create_dir_all(&skill_dir).expect("mkdir");
    std::fs::write(
        skill_dir.join("SKILL.md"),
        "---\nname: Bad_Skill\ndescription: x\n---\n",
    )
    .expect("seed");

    let output = skillset(root.path(), &["check"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("bad-skill: error:"));
}

#[test]
fn test_system_prints_os_and_arch() {
    let root = TempDir::new().expect("tempdir");

    let output = skillset(root.path(), &["system"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim().split(' ').count(), 2);
}

#[test]
fn test_malformed_settings_fall_back_to_defaults() {
    let root = TempDir::new().expect("tempdir");
    std::fs::write(root.path().join("skillset.toml"), "[logging\nlevel = ").expect("seed");
    std::fs::write(
        root.path().join("skills-configs.json"),
        r#"{"tasksManagerSystemBaseUrl": "https://a.example.net"}"#,
    )
    .expect("seed");

    let output = skillset_in(root.path(), root.path(), &["config"], "");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\"tasksManagerSystemBaseUrl\":\"https://a.example.net\"}\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Ignoring invalid skillset settings"));
}
