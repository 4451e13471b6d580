use crate::algo::LayoutAlgorithm;
use crate::error::{Error, Result};
use crate::model::{LayoutModel, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use vizgraph_graphlib::GraphSource;

/// Scales existing positions about the center of the drawable area.
///
/// Unlike the other algorithms this never places vertices: it transforms whatever the model
/// already holds, so it is meant to run after a real layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rescale {
    pub scale: f64,
}

impl Rescale {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn apply<V>(&self, model: &mut LayoutModel<V>) -> Result<()>
    where
        V: Clone + Eq + Hash + Debug,
    {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidScale { scale: self.scale });
        }
        let center = model.area().center();
        for (_, p) in model.iter_mut() {
            *p = Point::new(
                center.x + self.scale * (p.x - center.x),
                center.y + self.scale * (p.y - center.y),
            );
        }
        Ok(())
    }
}

impl<G> LayoutAlgorithm<G> for Rescale
where
    G: GraphSource + ?Sized,
{
    fn layout(&mut self, _graph: &G, model: &mut LayoutModel<G::Vertex>) -> Result<()> {
        self.apply(model)
    }
}
