//! The per-generation visual mappings.

use crate::scene::{Path, Shape, Text, Visual};
use indexmap::IndexMap;
use std::hash::Hash;

/// Every visual produced by one render generation, keyed by the graph entity it stands for.
#[derive(Debug, Clone)]
pub struct Visuals<V, E> {
    pub(crate) vertices: IndexMap<V, Shape>,
    pub(crate) labels: IndexMap<V, Text>,
    pub(crate) edges: IndexMap<E, Path>,
}

impl<V, E> Default for Visuals<V, E> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
            labels: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }
}

impl<V, E> Visuals<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    pub fn vertices(&self) -> &IndexMap<V, Shape> {
        &self.vertices
    }

    pub fn labels(&self) -> &IndexMap<V, Text> {
        &self.labels
    }

    pub fn edges(&self) -> &IndexMap<E, Path> {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.vertices.len() + self.labels.len() + self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn for_each_visual_mut(&mut self, mut f: impl FnMut(&mut dyn Visual)) {
        for shape in self.vertices.values_mut() {
            f(shape);
        }
        for path in self.edges.values_mut() {
            f(path);
        }
        for text in self.labels.values_mut() {
            f(text);
        }
    }
}
