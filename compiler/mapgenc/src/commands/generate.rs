//! The `generate` command: turn a mapping file into a program.
//!
//! Writes to stdout by default, to a file with `-o`, or one file per language
//! into a directory with `--all -o <dir>`. `--all` generates in parallel;
//! generation is pure, so no coordination is needed.

use std::path::{Path, PathBuf};

use mapgen_codegen::{generate_for, Language};
use mapgen_ir::MappingList;
use rayon::prelude::*;

use super::{load_mappings, LANG_ENV};
use crate::CliError;

/// Configuration for the generate command.
#[derive(Debug, Default)]
pub struct GenerateConfig {
    /// Mapping file to read.
    pub mappings: Option<PathBuf>,
    /// Language selector from `--lang`.
    pub language: Option<String>,
    /// Output file, or output directory with `all`.
    pub output: Option<PathBuf>,
    /// Generate every language.
    pub all: bool,
}

impl GenerateConfig {
    /// The selector to use: `--lang`, then `$MAPGEN_LANG`.
    pub fn selector(&self) -> Option<String> {
        self.selector_with(std::env::var(LANG_ENV).ok())
    }

    /// Like [`GenerateConfig::selector`], with the environment value passed in.
    pub fn selector_with(&self, env: Option<String>) -> Option<String> {
        self.language.clone().or(env)
    }
}

/// What the generate command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Program text to print.
    Stdout(String),
    /// Program written to a file.
    Written(PathBuf),
    /// One program per language written into a directory.
    WrittenAll { dir: PathBuf, count: usize },
}

/// Parse the arguments following `generate`.
///
/// Accepts `--lang=<id>`, `--lang <id>`, `-o <path>`, `--output=<path>` and
/// `--all`; the first bare argument is the mapping file.
pub fn parse_generate_options(args: &[String]) -> Result<GenerateConfig, CliError> {
    let mut config = GenerateConfig::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(lang) = arg.strip_prefix("--lang=") {
            config.language = Some(lang.to_string());
        } else if arg == "--lang" || arg == "-l" {
            let lang = iter.next().ok_or(CliError::MissingArgument("value for --lang"))?;
            config.language = Some(lang.clone());
        } else if let Some(output) = arg.strip_prefix("--output=") {
            config.output = Some(PathBuf::from(output));
        } else if arg == "-o" || arg == "--output" {
            let output = iter.next().ok_or(CliError::MissingArgument("value for -o"))?;
            config.output = Some(PathBuf::from(output));
        } else if arg == "--all" {
            config.all = true;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if config.mappings.is_none() {
            config.mappings = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    Ok(config)
}

/// Run the generate command.
pub fn generate_file(config: &GenerateConfig) -> Result<GenerateOutcome, CliError> {
    let path = config
        .mappings
        .as_deref()
        .ok_or(CliError::MissingArgument("mapping file"))?;
    let mappings = load_mappings(path)?;

    if config.all {
        let dir = config
            .output
            .as_deref()
            .ok_or(CliError::MissingArgument("output directory (-o) for --all"))?;
        let count = generate_all(&mappings, dir)?;
        return Ok(GenerateOutcome::WrittenAll {
            dir: dir.to_path_buf(),
            count,
        });
    }

    let language = resolve_language(config.selector().as_deref());
    let program = generate_for(mappings.as_slice(), language);

    match &config.output {
        Some(output) => {
            write_file(output, &program)?;
            Ok(GenerateOutcome::Written(output.clone()))
        }
        None => Ok(GenerateOutcome::Stdout(program)),
    }
}

/// Map a selector to a language, noting when the default is substituted.
pub(super) fn resolve_language(selector: Option<&str>) -> Language {
    let Some(selector) = selector else {
        return Language::DEFAULT;
    };
    if let Some(language) = Language::lookup(selector) {
        return language;
    }
    eprintln!(
        "note: unknown language '{selector}', generating {}",
        Language::DEFAULT.display_name()
    );
    Language::DEFAULT
}

fn generate_all(mappings: &MappingList, dir: &Path) -> Result<usize, CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    Language::ALL
        .par_iter()
        .map(|&language| {
            let program = generate_for(mappings.as_slice(), language);
            write_file(&dir.join(language.file_name()), &program)
        })
        .collect::<Result<(), CliError>>()?;

    Ok(Language::ALL.len())
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    tracing::debug!(path = %path.display(), bytes = content.len(), "writing program");
    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
