//! Per-language syntax.
//!
//! A backend knows how to read a path from the input, write a value at a path
//! in the result, create an empty container, and wrap the statements into a
//! complete program. Backends are stateless and shared as `&'static` values.
//!
//! Two families exist:
//!
//! - **Script** backends (JavaScript, TypeScript, Groovy) have literal map
//!   syntax and address values with member access: `result.a.b = input.c[0]`.
//! - **Helper** backends (Java, Python, C#) have no nested-literal assignment.
//!   They call small runtime helpers shipped in the program boilerplate and
//!   pass the path as a list of keys.

pub mod csharp;
pub mod java;
pub mod python;
pub mod script;

use mapgen_ir::{ResolvedPath, Step};

/// Syntax primitives for one target language.
pub trait Backend: Sync {
    /// Variable holding the parsed input document.
    fn input_var(&self) -> &'static str;

    /// Variable holding the result document.
    fn result_var(&self) -> &'static str;

    /// Expression reading the value at `source` from the input.
    fn read(&self, source: &ResolvedPath<'_>) -> String;

    /// Statement storing `value` at `target` in the result.
    fn write(&self, target: &ResolvedPath<'_>, value: &str) -> String;

    /// Statement creating an empty container at `container` in the result.
    fn declare(&self, container: &ResolvedPath<'_>) -> String;

    /// Imports, input loading and result initialization. Ends with a newline.
    fn preamble(&self) -> &'static str;

    /// Serialization, printing and any helper definitions. Ends with a newline.
    fn postamble(&self) -> &'static str;

    /// Spaces before each body statement.
    fn body_indent(&self) -> usize {
        0
    }
}

/// Member-access expression: `<base>.<field>` for fields, `<base>[<index>]`
/// for indices.
pub fn member_access(base: &str, path: &ResolvedPath<'_>) -> String {
    let mut access = String::with_capacity(base.len() + path.as_str().len() + 2 * path.len());
    access.push_str(base);
    for step in path.steps() {
        match step {
            Step::Field(field) => {
                access.push('.');
                access.push_str(field);
            }
            Step::Index(index) => {
                access.push('[');
                access.push_str(index);
                access.push(']');
            }
        }
    }
    access
}

/// Every segment quoted by `quote`, joined with `", "`.
///
/// Helper backends take keys as strings and convert index keys at runtime.
pub fn key_list(path: &ResolvedPath<'_>, quote: fn(&str) -> String) -> String {
    path.segments().map(quote).collect::<Vec<_>>().join(", ")
}

/// Double-quoted string literal (Java, C#).
pub fn double_quoted(text: &str) -> String {
    quoted(text, '"')
}

/// Single-quoted string literal (Python).
pub fn single_quoted(text: &str) -> String {
    quoted(text, '\'')
}

fn quoted(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        if c == quote || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests;
