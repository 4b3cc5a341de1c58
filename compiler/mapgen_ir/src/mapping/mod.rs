//! Mappings and the ordered mapping list.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::path::ResolvedPath;

/// One source-path to target-path association.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(alias = "sourceId")]
    pub source_path: String,
    #[serde(alias = "targetId")]
    pub target_path: String,
}

impl Mapping {
    pub fn new(source_path: impl Into<String>, target_path: impl Into<String>) -> Self {
        Mapping {
            source_path: source_path.into(),
            target_path: target_path.into(),
        }
    }

    /// Identity of the mapping: `"<source>::<target>"`.
    pub fn id(&self) -> String {
        format!("{}::{}", self.source_path, self.target_path)
    }

    pub fn source(&self) -> ResolvedPath<'_> {
        ResolvedPath::parse(&self.source_path)
    }

    pub fn target(&self) -> ResolvedPath<'_> {
        ResolvedPath::parse(&self.target_path)
    }
}

/// Ordered collection of mappings without duplicates.
///
/// Insertion order is the emission order of the generated program and is
/// never changed. A pair that is already present is not added again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Mapping>", into = "Vec<Mapping>")]
pub struct MappingList {
    mappings: Vec<Mapping>,
    /// Ids of `mappings`, kept in sync.
    ids: FxHashSet<String>,
}

impl MappingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mapping unless the same pair already exists.
    ///
    /// Returns `true` if the mapping was added.
    pub fn add(&mut self, source_path: impl Into<String>, target_path: impl Into<String>) -> bool {
        self.push(Mapping::new(source_path, target_path))
    }

    /// Append an owned mapping unless it is a duplicate.
    pub fn push(&mut self, mapping: Mapping) -> bool {
        if !self.ids.insert(mapping.id()) {
            return false;
        }
        self.mappings.push(mapping);
        true
    }

    /// Remove the mapping with the given id, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Mapping> {
        if !self.ids.remove(id) {
            return None;
        }
        let index = self.mappings.iter().position(|m| m.id() == id)?;
        Some(self.mappings.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.mappings.clear();
        self.ids.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.mappings.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Mapping] {
        &self.mappings
    }
}

impl FromIterator<Mapping> for MappingList {
    fn from_iter<I: IntoIterator<Item = Mapping>>(iter: I) -> Self {
        let mut list = MappingList::new();
        for mapping in iter {
            list.push(mapping);
        }
        list
    }
}

impl From<Vec<Mapping>> for MappingList {
    fn from(mappings: Vec<Mapping>) -> Self {
        mappings.into_iter().collect()
    }
}

impl From<MappingList> for Vec<Mapping> {
    fn from(list: MappingList) -> Self {
        list.mappings
    }
}

impl<'a> IntoIterator for &'a MappingList {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
