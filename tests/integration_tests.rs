//! Integration tests for the llmbridge CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SEPARATOR: &str = "---------------------------------";

fn llmbridge(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("llmbridge").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn headers(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("File: "))
        .map(str::to_string)
        .collect()
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    llmbridge(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle a source tree"))
        .stdout(predicate::str::contains(".llmbridgeinclude"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    llmbridge(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("llmbridge"));
}

/// Test default run in the current directory
#[test]
fn test_default_run_bundles_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.py"), "x").unwrap();
    fs::write(root.join("b.txt"), "not bundled").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/c.py"), "y").unwrap();

    llmbridge(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled 2 files"));

    let bundle = fs::read_to_string(root.join("LLMOutput.txt")).unwrap();
    let expected = format!(
        "{sep}\nFile: a.py\n{sep}\n\nx\n\n{sep}\nFile: sub/c.py\n{sep}\n\ny\n\n",
        sep = SEPARATOR
    );
    assert_eq!(bundle, expected);

    assert!(root.join(".llmbridgeinclude").exists());
    assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "LLMOutput.txt\n");
}

/// Test gitignore negation through the CLI
#[test]
fn test_gitignore_negation() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".llmbridgeinclude"), ".py\n").unwrap();
    fs::write(root.join(".gitignore"), "*.py\n!a.py\n").unwrap();
    fs::write(root.join("a.py"), "x").unwrap();
    fs::write(root.join("b.txt"), "no").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/c.py"), "y").unwrap();

    llmbridge(root).assert().success();

    let bundle = fs::read_to_string(root.join("LLMOutput.txt")).unwrap();
    assert_eq!(headers(&bundle), vec!["a.py"]);
    assert_eq!(
        fs::read_to_string(root.join(".gitignore")).unwrap(),
        "*.py\n!a.py\nLLMOutput.txt\n"
    );
}

/// Test explicit root and output arguments with a build directory pruned
#[test]
fn test_explicit_root_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    fs::create_dir_all(root.join("build")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join(".llmbridgeinclude"), ".rs\n").unwrap();
    fs::write(root.join(".gitignore"), "build/\n").unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(root.join("build/gen.rs"), "// generated").unwrap();

    llmbridge(temp_dir.path())
        .arg("project")
        .arg("project/bundle.txt")
        .assert()
        .success();

    let bundle = fs::read_to_string(root.join("bundle.txt")).unwrap();
    assert_eq!(headers(&bundle), vec!["src/main.rs"]);
    assert!(!bundle.contains("generated"));
}

/// Test re-running produces byte-identical output
#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".llmbridgeinclude"), ".md\n.txt\n").unwrap();
    fs::write(root.join("README.md"), "# readme").unwrap();
    fs::write(root.join("notes.txt"), "notes").unwrap();

    llmbridge(root).assert().success();
    let first = fs::read_to_string(root.join("LLMOutput.txt")).unwrap();
    llmbridge(root).assert().success();
    let second = fs::read_to_string(root.join("LLMOutput.txt")).unwrap();

    assert_eq!(first, second);
    assert_eq!(headers(&second), vec!["README.md", "notes.txt"]);
}

/// Test quiet mode prints nothing on success
#[test]
fn test_quiet_mode() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "x").unwrap();

    llmbridge(temp_dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// Test missing root directory fails with an error
#[test]
fn test_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    llmbridge(temp_dir.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root directory does not exist"));
}

/// Test --follow-links descends into symlinked directories
#[cfg(unix)]
#[test]
fn test_follow_links_flag() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".llmbridgeinclude"), ".py\n").unwrap();
    fs::create_dir(root.join("real")).unwrap();
    fs::write(root.join("real/a.py"), "x").unwrap();
    std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

    llmbridge(root).assert().success();
    let bundle = fs::read_to_string(root.join("LLMOutput.txt")).unwrap();
    assert_eq!(headers(&bundle), vec!["real/a.py"]);

    llmbridge(root).arg("--follow-links").assert().success();
    let bundle = fs::read_to_string(root.join("LLMOutput.txt")).unwrap();
    assert_eq!(headers(&bundle), vec!["link/a.py", "real/a.py"]);
}

/// Test environment configuration is honoured
#[test]
fn test_env_output_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "x").unwrap();

    llmbridge(temp_dir.path())
        .env("LLMBRIDGE_OUTPUT_FILE", "context.txt")
        .assert()
        .success();

    assert!(temp_dir.path().join("context.txt").exists());
    assert!(!temp_dir.path().join("LLMOutput.txt").exists());
}
