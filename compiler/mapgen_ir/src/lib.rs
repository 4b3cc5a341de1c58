//! mapgen IR - Mapping and Path Types
//!
//! This crate contains the data structures shared by the mapgen code generator
//! and its callers:
//! - `Mapping` pairs a source path with a target path
//! - `MappingList` keeps mappings ordered and free of duplicates
//! - `ResolvedPath` splits a dotted path into tagged access steps
//!
//! # Paths
//!
//! A path is a dot-separated string such as `root.items.0.id`. The leading
//! `root.` marker names the document root and is stripped. Segments made of
//! decimal digits are list indices; everything else is a field name.
//!
//! Paths are never validated. Empty segments survive as empty field names and
//! flow through to the generated code unchanged.

mod mapping;
mod path;

pub use mapping::{Mapping, MappingList};
pub use path::{Ancestors, ResolvedPath, Step, ROOT_MARKER};
