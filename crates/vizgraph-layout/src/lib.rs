#![forbid(unsafe_code)]

//! Headless 2D layout algorithms.
//!
//! A layout algorithm reads a [`GraphSource`](vizgraph_graphlib::GraphSource) and writes one
//! [`Point`] per vertex into a [`LayoutModel`] bounded by a drawable [`Box2D`]. Algorithms that
//! need randomness take an explicit seed so repeated runs are reproducible.

pub mod algo;
pub mod error;
pub mod model;
mod rng;

pub use algo::{Algorithm, CircleLayout, FrLayout, LayoutAlgorithm, RandomLayout, Rescale};
pub use error::{Error, Result};
pub use model::{Box2D, LayoutModel, Point};

use vizgraph_graphlib::GraphSource;

/// Headless layout entry point: lays `graph` out inside `area` with `algorithm`.
pub fn layout<G>(graph: &G, area: Box2D, algorithm: &Algorithm) -> Result<LayoutModel<G::Vertex>>
where
    G: GraphSource + ?Sized,
{
    let mut model = LayoutModel::new(area)?;
    algorithm.clone().layout(graph, &mut model)?;
    Ok(model)
}
