//! This crate queries the local `git` repository for build metadata and
//! renders it as compiler macro-definition flags for consumption by a
//! surrounding build process

/// The commit hash of the commit this binary was built from
pub const GIT_COMMIT_HASH: &str = env!("GIT_COMMIT_HASH");

pub mod error;
pub mod metadata;
pub mod util;
