//! Declaration planning.
//!
//! Walks the mappings once, left to right, and produces the ordered list of
//! operations the generated program performs:
//!
//! ```text
//! a.b.c <- x      Declare(a), Declare(a.b), Assign(x -> a.b.c)
//! a.b.d <- y      Assign(y -> a.b.d)
//! e     <- z      Assign(z -> e)
//! ```
//!
//! A container is declared the first time any target needs it and never
//! again. Within one mapping, ancestors are declared root-to-leaf, so a
//! parent always exists before its child.

use mapgen_ir::{Mapping, ResolvedPath};
use rustc_hash::FxHashSet;

/// One logical operation of a generated program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<'a> {
    /// Create an empty container at this path in the result.
    Declare(ResolvedPath<'a>),
    /// Copy the value at `source` in the input to `target` in the result.
    Assign {
        source: ResolvedPath<'a>,
        target: ResolvedPath<'a>,
    },
}

impl Op<'_> {
    #[inline]
    pub fn is_declare(&self) -> bool {
        matches!(self, Op::Declare(_))
    }
}

/// Plan the operations for `mappings`, preserving their order.
pub fn plan(mappings: &[Mapping]) -> Vec<Op<'_>> {
    // Keys are root-stripped prefixes of the target text, e.g. "a.b".
    let mut declared: FxHashSet<&str> = FxHashSet::default();
    let mut ops = Vec::with_capacity(mappings.len() * 2);

    for mapping in mappings {
        let target = mapping.target();
        for ancestor in target.ancestors() {
            if declared.insert(ancestor.as_str()) {
                tracing::trace!(container = ancestor.as_str(), "declare");
                ops.push(Op::Declare(ancestor));
            }
        }
        ops.push(Op::Assign {
            source: mapping.source(),
            target,
        });
    }

    ops
}

#[cfg(test)]
mod tests;
