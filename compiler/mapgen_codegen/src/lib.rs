//! Code Generation Backend for mapgen
//!
//! Turns an ordered list of field mappings into a standalone program that
//! copies each mapped value from an input document into a result document.
//!
//! # Architecture
//!
//! ```text
//! &[Mapping]
//!     ↓
//!  ResolvedPath   (tag every segment as field or index)
//!     ↓
//!   plan()        (Declare/Assign ops, each container declared once)
//!     ↓
//!  dyn Backend    (per-language read/write/declare + preamble/postamble)
//!     ↓
//!   String        (complete program source)
//! ```
//!
//! The planner never looks at the selected language. Every target-specific
//! detail lives behind the [`Backend`] trait.
//!
//! # Tracing
//!
//! - `RUST_LOG=mapgen_codegen=debug`: one event per generated program.
//! - `RUST_LOG=mapgen_codegen=trace`: one event per planned declaration.

pub mod backend;
mod emitter;
mod language;
mod planner;
mod program;

pub use backend::Backend;
pub use language::Language;
pub use planner::{plan, Op};
pub use program::{render, statement};

use mapgen_ir::Mapping;

/// Generate a program for the language named by `selector`.
///
/// Unknown selectors fall back to [`Language::DEFAULT`]; this never fails.
pub fn generate(mappings: &[Mapping], selector: &str) -> String {
    generate_for(mappings, Language::from_selector(selector))
}

/// Generate a program for a known language.
pub fn generate_for(mappings: &[Mapping], language: Language) -> String {
    let ops = plan(mappings);
    tracing::debug!(
        %language,
        mappings = mappings.len(),
        declarations = ops.iter().filter(|op| op.is_declare()).count(),
        "generating program"
    );
    render(language.backend(), &ops)
}
