use clap::Parser;

/// Emit git and build-time metadata as compiler macro-definition flags
#[derive(Parser)]
#[command(name = "buildmeta", version, long_version = buildmeta::GIT_COMMIT_HASH)]
pub struct Cli {
    /// The loglevel to operate on (0 = error, 1 = info, 2 = debug, * = trace)
    #[arg(long = "loglevel", short = 'v', default_value_t = 0)]
    pub loglevel: u8,
}
