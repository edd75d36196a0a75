//! Utilities for querying the local `git` repository

use std::{path::Path, process::Command};

use crate::error::{git::GitError, Error, ErrorExt, Throwable};

/// Runs `git` with the supplied arguments and returns its trimmed standard output
/// # Arguments
/// * `workdir` - The directory to invoke `git` in
/// * `args` - The arguments to pass to `git`
/// # Errors
/// An `IO` error if `git` could not be spawned, a `Git` error if it exited unsuccessfully
fn run_git(workdir: &Path, args: &[&str]) -> Result<String, Error> {
    let context = || format!("Running 'git {}'", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .e_context(context)?;

    if !output.status.success() {
        return Err(GitError::new(args, output.status.code(), &output.stderr).throw(context()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

/// Queries the full commit hash of the currently checked out revision (`HEAD`)
/// # Arguments
/// * `workdir` - The directory the repository is expected at
pub fn rev_parse_head(workdir: &Path) -> Result<String, Error> {
    run_git(workdir, &["rev-parse", "HEAD"])
}

/// Queries the name of the currently checked out branch
///
/// An empty string indicates a detached `HEAD`
/// # Arguments
/// * `workdir` - The directory the repository is expected at
pub fn current_branch(workdir: &Path) -> Result<String, Error> {
    run_git(workdir, &["branch", "--show-current"])
}
