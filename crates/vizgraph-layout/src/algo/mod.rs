mod circle;
mod fr;
mod random;
mod rescale;

pub use circle::CircleLayout;
pub use fr::FrLayout;
pub use random::RandomLayout;
pub use rescale::Rescale;

use crate::error::Result;
use crate::model::LayoutModel;
use serde::{Deserialize, Serialize};
use vizgraph_graphlib::GraphSource;

/// A strategy that assigns a position to every vertex of a graph.
///
/// Implementations write into `model`, whose drawable area bounds the result. A run must leave
/// every vertex of `graph` with a position.
pub trait LayoutAlgorithm<G>
where
    G: GraphSource + ?Sized,
{
    fn layout(&mut self, graph: &G, model: &mut LayoutModel<G::Vertex>) -> Result<()>;
}

/// The built-in algorithms as one configurable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum Algorithm {
    /// Uniform random placement inside the drawable area.
    Random(RandomLayout),
    /// Evenly spaced on a circle around the area center.
    Circle(CircleLayout),
    /// Fruchterman-Reingold force-directed placement.
    #[serde(rename = "fr")]
    FruchtermanReingold(FrLayout),
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Random(RandomLayout::default())
    }
}

impl<G> LayoutAlgorithm<G> for Algorithm
where
    G: GraphSource + ?Sized,
{
    fn layout(&mut self, graph: &G, model: &mut LayoutModel<G::Vertex>) -> Result<()> {
        match self {
            Algorithm::Random(algo) => algo.layout(graph, model),
            Algorithm::Circle(algo) => algo.layout(graph, model),
            Algorithm::FruchtermanReingold(algo) => algo.layout(graph, model),
        }
    }
}
