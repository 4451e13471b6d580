use crate::algo::LayoutAlgorithm;
use crate::error::Result;
use crate::model::{LayoutModel, Point};
use crate::rng::XorShift64Star;
use serde::{Deserialize, Serialize};
use vizgraph_graphlib::GraphSource;

/// Places every vertex uniformly at random inside the drawable area.
///
/// The generator is re-seeded on every run, so laying out the same graph twice yields the same
/// positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomLayout {
    pub seed: u64,
}

impl RandomLayout {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub(crate) fn place<G>(
        graph: &G,
        model: &mut LayoutModel<G::Vertex>,
        rng: &mut XorShift64Star,
    ) where
        G: GraphSource + ?Sized,
    {
        let area = model.area();
        for v in graph.vertices() {
            let x = area.min_x + rng.next_f64_unit() * area.width;
            let y = area.min_y + rng.next_f64_unit() * area.height;
            model.set(v, Point::new(x, y));
        }
    }
}

impl<G> LayoutAlgorithm<G> for RandomLayout
where
    G: GraphSource + ?Sized,
{
    fn layout(&mut self, graph: &G, model: &mut LayoutModel<G::Vertex>) -> Result<()> {
        let mut rng = XorShift64Star::new(self.seed);
        Self::place(graph, model, &mut rng);
        Ok(())
    }
}
