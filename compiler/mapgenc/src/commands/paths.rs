//! The `paths` command: print the mappable paths of a JSON document.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::Value;

use super::read_json;
use crate::outline::{collect_paths, NodeKind};
use crate::CliError;

/// Render one line per node. Containers are suffixed with `{}` or `[]`, and
/// leaves (scalars and empty containers) are marked with a trailing `*`.
pub fn render_paths(document: &Value) -> String {
    let mut out = String::new();
    for node in collect_paths(document) {
        let suffix = match node.kind {
            NodeKind::Object => " {}",
            NodeKind::Array => " []",
            NodeKind::Scalar => "",
        };
        let leaf = if node.is_leaf() { " *" } else { "" };
        let _ = writeln!(out, "{}{suffix}{leaf}", node.path);
    }
    out
}

pub fn print_paths(path: &Path) -> Result<(), CliError> {
    let document: Value = read_json(path)?;
    print!("{}", render_paths(&document));
    Ok(())
}
