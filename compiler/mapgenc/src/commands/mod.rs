//! Command handlers for the mapgen CLI.
//!
//! Each submodule implements one command. Shared file loading lives here in
//! the module root.

use std::path::Path;

use mapgen_ir::MappingList;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::CliError;

mod generate;
mod languages;
mod paths;

pub use generate::{generate_file, parse_generate_options, GenerateConfig, GenerateOutcome};
pub use languages::{list_languages, render_languages};
pub use paths::{print_paths, render_paths};

/// Environment variable consulted when `--lang` is not given.
pub const LANG_ENV: &str = "MAPGEN_LANG";

/// Read a file to a string.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Accepted layouts of a mapping file.
#[derive(Deserialize)]
#[serde(untagged)]
enum MappingFile {
    /// `[ { "sourcePath": ..., "targetPath": ... }, ... ]`
    List(MappingList),
    /// `{ "mappings": [ ... ] }`
    Document { mappings: MappingList },
}

/// Load a mapping file. Duplicate pairs are dropped, order is kept.
pub fn load_mappings(path: &Path) -> Result<MappingList, CliError> {
    let file: MappingFile = read_json(path)?;
    let mappings = match file {
        MappingFile::List(mappings) | MappingFile::Document { mappings } => mappings,
    };
    tracing::debug!(path = %path.display(), count = mappings.len(), "loaded mappings");
    Ok(mappings)
}
