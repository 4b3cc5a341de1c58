//! Path resolution.
//!
//! Turns a dotted path into a sequence of [`Step`]s. Tagging happens once here
//! so backends never re-inspect raw segment text.

use std::fmt;

/// Conventional first segment naming the document root.
pub const ROOT_MARKER: &str = "root";

/// One access step of a resolved path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step<'a> {
    /// Object/map field lookup.
    Field(&'a str),
    /// Array/list index; the text is all ASCII digits.
    Index(&'a str),
}

impl<'a> Step<'a> {
    /// Tag a raw segment.
    ///
    /// A segment is an index iff it is non-empty and every byte is a decimal
    /// digit. The digits are kept as written, so `007` stays `007`.
    pub fn classify(segment: &'a str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Step::Index(segment)
        } else {
            Step::Field(segment)
        }
    }

    /// The segment text as it appeared in the path.
    #[inline]
    pub fn text(self) -> &'a str {
        match self {
            Step::Field(s) | Step::Index(s) => s,
        }
    }

    #[inline]
    pub fn is_index(self) -> bool {
        matches!(self, Step::Index(_))
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A path split into tagged steps.
///
/// Borrows from the original path string. `as_str` returns the root-stripped
/// text, and every prefix produced by [`ResolvedPath::prefix`] is a slice of
/// that same text, so ancestor keys compare without allocating.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedPath<'a> {
    text: &'a str,
    steps: Vec<Step<'a>>,
}

impl<'a> ResolvedPath<'a> {
    /// Resolve a dotted path, dropping a leading `root.` marker.
    pub fn parse(path: &'a str) -> Self {
        let text = strip_root(path);
        let steps = text.split('.').map(Step::classify).collect();
        ResolvedPath { text, steps }
    }

    /// Root-stripped dotted text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub fn steps(&self) -> &[Step<'a>] {
        &self.steps
    }

    /// Iterate over the raw segment texts.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.steps.iter().map(|step| step.text())
    }

    /// Number of steps. Always at least one; `""` resolves to one empty field.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`, since every path has at least one step. Pairs with
    /// [`ResolvedPath::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The path made of the first `n` steps.
    ///
    /// `n` is clamped to `1..=len`.
    pub fn prefix(&self, n: usize) -> ResolvedPath<'a> {
        let n = n.clamp(1, self.steps.len());
        let steps = self.steps[..n].to_vec();
        // Segment lengths plus the separating dots.
        let end = steps.iter().map(|s| s.text().len()).sum::<usize>() + steps.len().saturating_sub(1);
        ResolvedPath {
            text: &self.text[..end],
            steps,
        }
    }

    /// Ancestor sub-paths in root-to-leaf order.
    ///
    /// `a.b.c.d` yields `a`, `a.b`, `a.b.c`. A single-segment path has none.
    pub fn ancestors(&self) -> Ancestors<'_, 'a> {
        Ancestors {
            path: self,
            next: 1,
        }
    }
}

impl fmt::Display for ResolvedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Iterator over the ancestors of a [`ResolvedPath`].
pub struct Ancestors<'p, 'a> {
    path: &'p ResolvedPath<'a>,
    next: usize,
}

impl<'a> Iterator for Ancestors<'_, 'a> {
    type Item = ResolvedPath<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.path.len() {
            return None;
        }
        let prefix = self.path.prefix(self.next);
        self.next += 1;
        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ancestors<'_, '_> {}

/// Drop the `root.` marker if the path starts with it.
///
/// Only the exact first segment `root` counts: `rooted.x` is left alone, and
/// so is a bare `root` with nothing after it.
fn strip_root(path: &str) -> &str {
    path.strip_prefix(ROOT_MARKER)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests;
