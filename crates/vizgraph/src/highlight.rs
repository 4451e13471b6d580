//! Built-in click highlighting.
//!
//! Each [`ActionOnClick`] variant answers one question: given the clicked vertex and the graph
//! topology, which visuals stay fully visible? The answer is a [`KeepVisible`] set, and every
//! variant hands it to the same two-step routine: dim every visual, then restore the set.

use crate::error::{Error, Result};
use crate::scene::{FULL_OPACITY, Visual};
use crate::visuals::Visuals;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use vizgraph_graphlib::GraphSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionOnClick {
    /// Incoming and outgoing edges of the clicked vertex.
    ConnectedEdges,
    OutgoingEdges,
    IncomingEdges,
    /// Shapes of all one-hop neighbors, in either direction.
    AllConnectedVertices,
    /// Shapes of the sources of incoming edges.
    UpstreamVertices,
    /// Shapes of the targets of outgoing edges.
    DownstreamVertices,
}

impl ActionOnClick {
    pub const ALL: [ActionOnClick; 6] = [
        ActionOnClick::ConnectedEdges,
        ActionOnClick::OutgoingEdges,
        ActionOnClick::IncomingEdges,
        ActionOnClick::AllConnectedVertices,
        ActionOnClick::UpstreamVertices,
        ActionOnClick::DownstreamVertices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionOnClick::ConnectedEdges => "connected-edges",
            ActionOnClick::OutgoingEdges => "outgoing-edges",
            ActionOnClick::IncomingEdges => "incoming-edges",
            ActionOnClick::AllConnectedVertices => "all-connected-vertices",
            ActionOnClick::UpstreamVertices => "upstream-vertices",
            ActionOnClick::DownstreamVertices => "downstream-vertices",
        }
    }

    /// Computes what stays visible when `clicked` is selected.
    pub fn keep_visible<G>(&self, graph: &G, clicked: &G::Vertex) -> KeepVisible<G::Vertex, G::Edge>
    where
        G: GraphSource + ?Sized,
    {
        let mut keep = KeepVisible::around(clicked.clone());
        match self {
            ActionOnClick::ConnectedEdges => {
                keep.edges.extend(graph.incoming_edges(clicked));
                keep.edges.extend(graph.outgoing_edges(clicked));
            }
            ActionOnClick::OutgoingEdges => {
                keep.edges.extend(graph.outgoing_edges(clicked));
            }
            ActionOnClick::IncomingEdges => {
                keep.edges.extend(graph.incoming_edges(clicked));
            }
            ActionOnClick::AllConnectedVertices => {
                keep.shapes.extend(
                    graph
                        .incoming_edges(clicked)
                        .iter()
                        .map(|e| graph.edge_source(e)),
                );
                keep.shapes.extend(
                    graph
                        .outgoing_edges(clicked)
                        .iter()
                        .map(|e| graph.edge_target(e)),
                );
            }
            ActionOnClick::UpstreamVertices => {
                keep.shapes.extend(
                    graph
                        .incoming_edges(clicked)
                        .iter()
                        .map(|e| graph.edge_source(e)),
                );
            }
            ActionOnClick::DownstreamVertices => {
                keep.shapes.extend(
                    graph
                        .outgoing_edges(clicked)
                        .iter()
                        .map(|e| graph.edge_target(e)),
                );
            }
        }
        keep
    }
}

impl fmt::Display for ActionOnClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionOnClick {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        ActionOnClick::ALL
            .into_iter()
            .find(|a| a.as_str() == name)
            .ok_or_else(|| Error::UnknownAction {
                name: s.to_string(),
            })
    }
}

/// Visuals a highlight restores to full opacity: vertex shapes, labels and edge paths, each
/// named by its graph entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepVisible<V, E>
where
    V: Hash + Eq,
    E: Hash + Eq,
{
    pub shapes: IndexSet<V>,
    pub labels: IndexSet<V>,
    pub edges: IndexSet<E>,
}

impl<V, E> KeepVisible<V, E>
where
    V: Hash + Eq + Clone,
    E: Hash + Eq,
{
    /// The clicked vertex's shape and label, and nothing else.
    pub fn around(vertex: V) -> Self {
        Self {
            shapes: IndexSet::from([vertex.clone()]),
            labels: IndexSet::from([vertex]),
            edges: IndexSet::new(),
        }
    }
}

/// Dims every visual to `dimmed_opacity`, then restores full opacity on `keep`.
///
/// Entities in `keep` without a visual (a kind that was never configured) are skipped.
pub(crate) fn dim_except<V, E>(
    visuals: &mut Visuals<V, E>,
    keep: &KeepVisible<V, E>,
    dimmed_opacity: f64,
)
where
    V: Hash + Eq,
    E: Hash + Eq,
{
    visuals.for_each_visual_mut(|v| v.set_opacity(dimmed_opacity));

    for vertex in &keep.shapes {
        if let Some(shape) = visuals.vertices.get_mut(vertex) {
            shape.set_opacity(FULL_OPACITY);
        }
    }
    for vertex in &keep.labels {
        if let Some(text) = visuals.labels.get_mut(vertex) {
            text.set_opacity(FULL_OPACITY);
        }
    }
    for edge in &keep.edges {
        if let Some(path) = visuals.edges.get_mut(edge) {
            path.set_opacity(FULL_OPACITY);
        }
    }
}

/// Restores full opacity on every visual, whatever was selected before.
pub(crate) fn restore_all<V, E>(visuals: &mut Visuals<V, E>)
where
    V: Hash + Eq,
    E: Hash + Eq,
{
    visuals.for_each_visual_mut(|v| v.set_opacity(FULL_OPACITY));
}
