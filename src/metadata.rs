//! The build metadata captured for a single invocation and its flag rendering

use std::path::Path;

use chrono::{DateTime, Local};
use log::debug;

use crate::{
    error::{Error, ErrorExt},
    util::git,
};

/// The format the build timestamp is rendered in
pub const BUILD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A compiler macro-definition flag of the form `'-D<NAME>="<value>"'`
#[derive(Debug, PartialEq, Eq)]
pub struct DefineFlag {
    /// The macro name
    pub name: &'static str,
    /// The macro value
    pub value: String,
}

/// A snapshot of the repository state and wall-clock time at invocation
#[derive(Debug)]
pub struct BuildMetadata {
    /// The full commit hash of `HEAD`
    pub commit: String,
    /// The currently checked out branch, empty on a detached `HEAD`
    pub branch: String,
    /// The wall-clock time the metadata was captured at
    pub build_time: DateTime<Local>,
}

impl BuildMetadata {
    /// Captures the build metadata of the repository at `workdir`
    /// # Arguments
    /// * `workdir` - The directory the repository is expected at
    /// # Errors
    /// Fails if `git` is unavailable or `workdir` is not inside a repository
    pub fn capture(workdir: &Path) -> Result<Self, Error> {
        let context = || {
            format!(
                "Capturing build metadata in {}",
                workdir.to_string_lossy()
            )
        };

        let commit = git::rev_parse_head(workdir).e_context(context)?;
        let branch = git::current_branch(workdir).e_context(context)?;
        debug!("HEAD is at {commit} on branch '{branch}'");

        Ok(Self {
            commit,
            branch,
            build_time: Local::now(),
        })
    }

    /// Returns the first 8 characters of the commit hash, or all of it if shorter
    pub fn short_commit(&self) -> &str {
        self.commit.get(..8).unwrap_or(&self.commit)
    }

    /// Renders the metadata as macro-definition flags, in the order the
    /// consuming build script expects them:
    /// `GIT_COMMIT`, `GIT_COMMIT_SHORT`, `GIT_BRANCH`, `BUILD_TIME`
    pub fn define_flags(&self) -> Vec<DefineFlag> {
        vec![
            DefineFlag::new("GIT_COMMIT", self.commit.clone()),
            DefineFlag::new("GIT_COMMIT_SHORT", self.short_commit().to_owned()),
            DefineFlag::new("GIT_BRANCH", self.branch.clone()),
            DefineFlag::new(
                "BUILD_TIME",
                self.build_time.format(BUILD_TIME_FORMAT).to_string(),
            ),
        ]
    }
}

impl DefineFlag {
    /// Creates a new `DefineFlag`
    /// # Arguments
    /// * `name` - The macro name
    /// * `value` - The macro value
    pub fn new(name: &'static str, value: String) -> Self {
        Self { name, value }
    }
}

impl std::fmt::Display for DefineFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'-D{}=\"{}\"'", self.name, self.value)
    }
}
