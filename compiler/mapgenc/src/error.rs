//! CLI errors.

use std::io;
use std::path::PathBuf;

/// Anything that can stop a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot create directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("invalid JSON in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}
