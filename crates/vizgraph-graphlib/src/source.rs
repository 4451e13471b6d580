//! The read-only graph capability.

use crate::graph::{EdgeKey, Graph};
use std::fmt::Debug;
use std::hash::Hash;

/// What a display and a layout algorithm need to know about a graph.
///
/// Vertex and edge sets must be finite, and their iteration order must be stable for as long
/// as the graph is not mutated. For undirected graphs, `incoming_edges` and `outgoing_edges`
/// both return every incident edge.
pub trait GraphSource {
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge: Clone + Eq + Hash + Debug;

    fn vertices(&self) -> Vec<Self::Vertex>;

    fn edges(&self) -> Vec<Self::Edge>;

    fn edge_source(&self, edge: &Self::Edge) -> Self::Vertex;

    fn edge_target(&self, edge: &Self::Edge) -> Self::Vertex;

    fn incoming_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge>;

    fn outgoing_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge>;

    fn is_directed(&self) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

impl<T> GraphSource for &T
where
    T: GraphSource + ?Sized,
{
    type Vertex = T::Vertex;
    type Edge = T::Edge;

    fn vertices(&self) -> Vec<Self::Vertex> {
        (**self).vertices()
    }

    fn edges(&self) -> Vec<Self::Edge> {
        (**self).edges()
    }

    fn edge_source(&self, edge: &Self::Edge) -> Self::Vertex {
        (**self).edge_source(edge)
    }

    fn edge_target(&self, edge: &Self::Edge) -> Self::Vertex {
        (**self).edge_target(edge)
    }

    fn incoming_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge> {
        (**self).incoming_edges(vertex)
    }

    fn outgoing_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge> {
        (**self).outgoing_edges(vertex)
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}

impl<N, E> GraphSource for Graph<N, E>
where
    N: Default,
    E: Default,
{
    type Vertex = String;
    type Edge = EdgeKey;

    fn vertices(&self) -> Vec<String> {
        self.node_ids()
    }

    fn edges(&self) -> Vec<EdgeKey> {
        self.edge_keys()
    }

    fn edge_source(&self, edge: &EdgeKey) -> String {
        edge.v.clone()
    }

    fn edge_target(&self, edge: &EdgeKey) -> String {
        edge.w.clone()
    }

    fn incoming_edges(&self, vertex: &String) -> Vec<EdgeKey> {
        self.in_edges(vertex, None)
    }

    fn outgoing_edges(&self, vertex: &String) -> Vec<EdgeKey> {
        self.out_edges(vertex, None)
    }

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}
