//! Tests against real (temporary) git repositories

use std::{path::Path, process::Command};

use buildmeta::{metadata::BuildMetadata, util::git};
use chrono::Local;
use tempfile::TempDir;

/// Runs `git` in `workdir`, panicking if the command fails
fn git(workdir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .expect("Failed to spawn git");

    assert!(
        output.status.success(),
        "'git {}' failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Creates a repository on branch `trunk` with a single empty commit
fn setup_repository() -> TempDir {
    let dir = TempDir::new().expect("Failed to create tempdir");
    let path = dir.path();

    git(path, &["init", "--quiet"]);
    git(path, &["checkout", "-b", "trunk"]);
    git(
        path,
        &[
            "-c",
            "user.name=buildmeta test",
            "-c",
            "user.email=test@localhost",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--allow-empty",
            "-m",
            "initial",
        ],
    );

    dir
}

#[test]
fn rev_parse_head_yields_full_hash() {
    let repo = setup_repository();

    let commit = git::rev_parse_head(repo.path()).expect("Failed to query HEAD");

    assert_eq!(commit.len(), 40);
    assert!(commit.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn current_branch_yields_checked_out_branch() {
    let repo = setup_repository();

    let branch = git::current_branch(repo.path()).expect("Failed to query branch");

    assert_eq!(branch, "trunk");
}

#[test]
fn detached_head_yields_empty_branch() {
    let repo = setup_repository();
    git(repo.path(), &["checkout", "--quiet", "--detach"]);

    let branch = git::current_branch(repo.path()).expect("Failed to query branch");

    assert_eq!(branch, "");
}

#[test]
fn capture_snapshots_repository_state() {
    let repo = setup_repository();

    let metadata = BuildMetadata::capture(repo.path()).expect("Failed to capture metadata");

    assert_eq!(metadata.commit.len(), 40);
    assert_eq!(metadata.branch, "trunk");
    assert_eq!(metadata.short_commit(), &metadata.commit[..8]);

    let age = Local::now().signed_duration_since(metadata.build_time);
    assert!(age.num_seconds() < 10, "Build time is not recent: {age}");
}

#[test]
fn capture_fails_outside_a_repository() {
    let dir = TempDir::new().expect("Failed to create tempdir");

    let result = BuildMetadata::capture(dir.path());

    assert!(result.is_err());
}

/// Runs the `buildmeta` binary in `workdir` and returns its output
fn run_buildmeta(workdir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_buildmeta"))
        .current_dir(workdir)
        // Detach from any repository an ancestor of the tempdir might be in
        .env("GIT_CEILING_DIRECTORIES", workdir)
        .output()
        .expect("Failed to spawn buildmeta")
}

#[test]
fn binary_emits_exactly_four_flag_lines() {
    let repo = setup_repository();

    let output = run_buildmeta(repo.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("'-DGIT_COMMIT=\""));
    assert!(lines[1].starts_with("'-DGIT_COMMIT_SHORT=\""));
    assert_eq!(lines[2], "'-DGIT_BRANCH=\"trunk\"'");
    assert!(lines[3].starts_with("'-DBUILD_TIME=\""));
}

#[test]
fn binary_fails_cleanly_outside_a_repository() {
    let dir = TempDir::new().expect("Failed to create tempdir");

    let output = run_buildmeta(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No flags may be emitted on failure");
    assert!(!output.stderr.is_empty(), "A diagnostic is expected on stderr");
}
