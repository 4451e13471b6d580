//! The `Graph` container.
//!
//! Nodes are identified by string ids and carry a label of type `N`; edges are identified by an
//! [`EdgeKey`] and carry a label of type `E`. Undirected graphs store each edge once with its
//! endpoints in lexical order.
//!
//! The container only grows. Every node keeps the indices of its incident edges, so the
//! per-vertex queries the highlighter issues on each click never scan the whole edge list.

use rustc_hash::FxBuildHasher;

mod edge_key;
mod options;

use edge_key::EdgeKeyView;
pub use edge_key::EdgeKey;
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
struct Node<N> {
    id: String,
    label: N,
    // Undirected graphs record every incident edge in `outgoing` and leave `incoming` empty.
    outgoing: Vec<usize>,
    incoming: Vec<usize>,
}

#[derive(Debug, Clone)]
struct Edge<E> {
    key: EdgeKey,
    label: E,
}

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    options: GraphOptions,
    nodes: Vec<Node<N>>,
    node_ix: HashMap<String, usize>,
    edges: Vec<Edge<E>>,
    edge_ix: HashMap<EdgeKey, usize>,
}

impl<N, E> Graph<N, E>
where
    N: Default,
    E: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_ix: HashMap::default(),
            edges: Vec::new(),
            edge_ix: HashMap::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions::default())
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions {
            directed: false,
            ..Default::default()
        })
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    /// Orders endpoints the way edges are stored: as given for directed graphs, lexically for
    /// undirected ones. Names are dropped unless the graph is a multigraph.
    fn lookup_key<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        let (v, w) = if self.options.directed || v <= w {
            (v, w)
        } else {
            (w, v)
        };
        EdgeKeyView {
            v,
            w,
            name: name.filter(|_| self.options.multigraph),
        }
    }

    fn node_index_or_insert(&mut self, id: String) -> usize {
        if let Some(&ix) = self.node_ix.get(&id) {
            return ix;
        }
        let ix = self.nodes.len();
        self.node_ix.insert(id.clone(), ix);
        self.nodes.push(Node {
            id,
            label: N::default(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        ix
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_ix.contains_key(id)
    }

    /// Inserts `id` or replaces its label; an existing node keeps its position.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let ix = self.node_index_or_insert(id.into());
        self.nodes[ix].label = label;
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        self.node_index_or_insert(id.into());
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_ix.get(id).map(|&ix| &self.nodes[ix].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes().map(str::to_string).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges().cloned().collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    /// Inserts an edge, creating missing endpoints. Re-setting an existing edge replaces its
    /// label only when one is given.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let (mut v, mut w) = (v.into(), w.into());
        if !self.options.directed && w < v {
            std::mem::swap(&mut v, &mut w);
        }
        let name: Option<String> = name.map(Into::into).filter(|_| self.options.multigraph);

        let v_ix = self.node_index_or_insert(v.clone());
        let w_ix = self.node_index_or_insert(w.clone());
        let key = EdgeKey { v, w, name };

        if let Some(&ix) = self.edge_ix.get(&key) {
            if let Some(label) = label {
                self.edges[ix].label = label;
            }
            return self;
        }

        let ix = self.edges.len();
        self.edge_ix.insert(key.clone(), ix);
        self.edges.push(Edge {
            key,
            label: label.unwrap_or_default(),
        });
        self.nodes[v_ix].outgoing.push(ix);
        if self.options.directed {
            self.nodes[w_ix].incoming.push(ix);
        } else if w_ix != v_ix {
            self.nodes[w_ix].outgoing.push(ix);
        }
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.edge_ix.contains_key(&self.lookup_key(v, w, name))
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let ix = self.edge_ix.get(&self.lookup_key(v, w, name))?;
        Some(&self.edges[*ix].label)
    }

    fn collect_edges(&self, indices: &[usize], keep: impl Fn(&EdgeKey) -> bool) -> Vec<EdgeKey> {
        indices
            .iter()
            .map(|&ix| &self.edges[ix].key)
            .filter(|key| keep(key))
            .cloned()
            .collect()
    }

    /// Edges leaving `v`, optionally restricted to those reaching `w`.
    ///
    /// For undirected graphs every incident edge counts as outgoing.
    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        let Some(&ix) = self.node_ix.get(v) else {
            return Vec::new();
        };
        let directed = self.options.directed;
        self.collect_edges(&self.nodes[ix].outgoing, |key| {
            let Some(w) = w else {
                return true;
            };
            if directed {
                key.w == w
            } else {
                (key.v == v && key.w == w) || (key.w == v && key.v == w)
            }
        })
    }

    /// Edges entering `v`, optionally restricted to those leaving `w`.
    ///
    /// For undirected graphs this is the same set as [`Graph::out_edges`].
    pub fn in_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        if !self.options.directed {
            return self.out_edges(v, w);
        }
        let Some(&ix) = self.node_ix.get(v) else {
            return Vec::new();
        };
        self.collect_edges(&self.nodes[ix].incoming, |key| w.is_none_or(|w| key.v == w))
    }
}

impl<N, E> Default for Graph<N, E>
where
    N: Default,
    E: Default,
{
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}
