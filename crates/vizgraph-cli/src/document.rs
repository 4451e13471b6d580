//! The JSON input document.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use vizgraph::{Algorithm, DisplayOptions, EdgeKey, Graph};

/// A graph plus everything needed to display it.
///
/// ```json
/// {
///   "directed": true,
///   "nodes": ["a", {"id": "b", "label": "B", "fill": "tomato"}],
///   "edges": [["a", "b"], {"source": "b", "target": "c", "dashed": true}],
///   "options": {"size": 400, "actionOnClick": "connected-edges"},
///   "layout": {"algorithm": "fr", "iterations": 200, "seed": 7}
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphDocument {
    pub directed: bool,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub options: DisplayOptions,
    pub layout: Algorithm,
}

impl Default for GraphDocument {
    fn default() -> Self {
        Self {
            directed: true,
            nodes: Vec::new(),
            edges: Vec::new(),
            options: DisplayOptions::default(),
            layout: Algorithm::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Id(String),
    Styled {
        id: String,
        #[serde(flatten)]
        style: NodeStyle,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub label: Option<String>,
    pub fill: Option<String>,
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Pair(String, String),
    Styled {
        source: String,
        target: String,
        #[serde(flatten)]
        style: EdgeStyle,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub color: Option<String>,
    pub dashed: bool,
}

/// Per-entity styles, looked up by the display's factories.
#[derive(Debug, Default)]
pub struct Styles {
    pub nodes: FxHashMap<String, NodeStyle>,
    pub edges: FxHashMap<EdgeKey, EdgeStyle>,
}

impl GraphDocument {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Builds the graph and collects the styles. Edge endpoints that are not listed as nodes
    /// become nodes.
    pub fn into_parts(self) -> (Graph<(), ()>, Styles, DisplayOptions, Algorithm) {
        let mut graph = if self.directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        let mut styles = Styles::default();

        for node in self.nodes {
            let (id, style) = match node {
                NodeSpec::Id(id) => (id, NodeStyle::default()),
                NodeSpec::Styled { id, style } => (id, style),
            };
            graph.ensure_node(id.clone());
            styles.nodes.insert(id, style);
        }

        for edge in self.edges {
            let (source, target, style) = match edge {
                EdgeSpec::Pair(source, target) => (source, target, EdgeStyle::default()),
                EdgeSpec::Styled {
                    source,
                    target,
                    style,
                } => (source, target, style),
            };
            graph.set_edge(source.clone(), target.clone());
            // Undirected graphs store their endpoints in canonical order.
            if let Some(key) = graph.out_edges(&source, Some(&target)).into_iter().next() {
                styles.edges.insert(key, style);
            }
        }

        (graph, styles, self.options, self.layout)
    }
}
