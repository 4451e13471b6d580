use crate::algo::LayoutAlgorithm;
use crate::error::{Error, Result};
use crate::model::{LayoutModel, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use vizgraph_graphlib::GraphSource;

/// Places vertices evenly on a circle centered in the drawable area, in vertex order.
///
/// Without an explicit radius the circle fills 80% of the shorter side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleLayout {
    pub radius: Option<f64>,
}

impl CircleLayout {
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius: Some(radius),
        }
    }
}

impl<G> LayoutAlgorithm<G> for CircleLayout
where
    G: GraphSource + ?Sized,
{
    fn layout(&mut self, graph: &G, model: &mut LayoutModel<G::Vertex>) -> Result<()> {
        let area = model.area();
        let center = area.center();
        let radius = match self.radius {
            Some(r) if !(r.is_finite() && r >= 0.0) => {
                return Err(Error::InvalidParameter {
                    name: "radius",
                    value: r,
                });
            }
            Some(r) => r,
            None => area.width.min(area.height) * 0.4,
        };

        let vertices = graph.vertices();
        let step = 2.0 * PI / vertices.len().max(1) as f64;
        for (i, v) in vertices.into_iter().enumerate() {
            let angle = step * i as f64;
            model.set(
                v,
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ),
            );
        }
        Ok(())
    }
}
