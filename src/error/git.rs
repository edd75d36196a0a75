//! Errors for failed `git` invocations

use super::{Error, ErrorType, Throwable};

/// The error emitted when a `git` command exits unsuccessfully
#[derive(Debug)]
pub struct GitError {
    /// The command line that failed
    pub command: String,
    /// The exit code, if the process exited on its own
    pub code: Option<i32>,
    /// The diagnostic output the failing command produced
    pub stderr: String,
}

impl GitError {
    /// Creates a new `GitError`
    /// # Arguments
    /// * `args` - The arguments `git` was invoked with
    /// * `code` - The exit code, `None` if the process was killed by a signal
    /// * `stderr` - The raw standard error output of the command
    pub fn new(args: &[&str], code: Option<i32>, stderr: &[u8]) -> Self {
        Self {
            command: format!("git {}", args.join(" ")),
            code,
            stderr: String::from_utf8_lossy(stderr).trim().to_owned(),
        }
    }
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "Command '{}' exited with code {}", self.command, code)?,
            None => write!(f, "Command '{}' was terminated by a signal", self.command)?,
        }
        if !self.stderr.is_empty() {
            write!(f, ": {}", self.stderr)?
        }
        Ok(())
    }
}

impl Throwable for GitError {
    fn throw(self, context: String) -> Error {
        Error::new_context(ErrorType::Git(self), context)
    }
}
