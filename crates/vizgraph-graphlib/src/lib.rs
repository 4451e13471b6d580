#![forbid(unsafe_code)]

//! Graph container APIs used by `vizgraph`.
//!
//! The container keeps nodes and edges in insertion order, so iteration is stable for as long
//! as the graph is not mutated. [`GraphSource`] is the read-only capability the display and the
//! layout algorithms consume; [`Graph`] is one implementation of it.

mod graph;
mod source;

pub use graph::{EdgeKey, Graph, GraphOptions};
pub use source::GraphSource;
