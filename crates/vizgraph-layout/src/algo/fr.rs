use crate::algo::{LayoutAlgorithm, RandomLayout};
use crate::error::{Error, Result};
use crate::model::{LayoutModel, Point};
use crate::rng::XorShift64Star;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vizgraph_graphlib::GraphSource;

const MIN_DISTANCE: f64 = 1e-2;

/// Fruchterman-Reingold force-directed layout.
///
/// Vertices start from a seeded random placement, then repel each other while edges pull their
/// endpoints together. The maximum displacement per iteration (the "temperature") starts at a
/// tenth of the area width and cools linearly to zero. Positions never leave the drawable area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrLayout {
    pub iterations: usize,
    /// Scales the ideal edge length `k = c * sqrt(area / n)`.
    pub normalization_factor: f64,
    pub seed: u64,
}

impl Default for FrLayout {
    fn default() -> Self {
        Self {
            iterations: 100,
            normalization_factor: 0.5,
            seed: 0,
        }
    }
}

impl FrLayout {
    pub fn new(iterations: usize, seed: u64) -> Self {
        Self {
            iterations,
            seed,
            ..Default::default()
        }
    }
}

impl<G> LayoutAlgorithm<G> for FrLayout
where
    G: GraphSource + ?Sized,
{
    fn layout(&mut self, graph: &G, model: &mut LayoutModel<G::Vertex>) -> Result<()> {
        // A zero ideal length turns the spring force infinite.
        if !(self.normalization_factor.is_finite() && self.normalization_factor > 0.0) {
            return Err(Error::InvalidParameter {
                name: "normalizationFactor",
                value: self.normalization_factor,
            });
        }
        let mut rng = XorShift64Star::new(self.seed);
        RandomLayout::place(graph, model, &mut rng);

        let vertices = graph.vertices();
        let n = vertices.len();
        if n < 2 || self.iterations == 0 {
            return Ok(());
        }

        let index: IndexMap<G::Vertex, usize> = vertices
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();
        let mut pos: Vec<Point> = vertices
            .iter()
            .map(|v| model.position(v))
            .collect::<Result<_>>()?;
        let springs: Vec<(usize, usize)> = graph
            .edges()
            .iter()
            .filter_map(|e| {
                let s = *index.get(&graph.edge_source(e))?;
                let t = *index.get(&graph.edge_target(e))?;
                (s != t).then_some((s, t))
            })
            .collect();

        let area = model.area();
        let k = self.normalization_factor * (area.width * area.height / n as f64).sqrt();
        let start_temperature = area.width / 10.0;
        let cooling = start_temperature / self.iterations as f64;
        let mut temperature = start_temperature;

        let mut disp = vec![(0.0_f64, 0.0_f64); n];
        for _ in 0..self.iterations {
            disp.fill((0.0, 0.0));

            for v in 0..n {
                for u in 0..n {
                    if u == v {
                        continue;
                    }
                    let (mut dx, mut dy) = (pos[v].x - pos[u].x, pos[v].y - pos[u].y);
                    let mut d = dx.hypot(dy);
                    if d < MIN_DISTANCE {
                        // Coincident vertices: push apart in a random direction.
                        dx = rng.next_f64_signed() * MIN_DISTANCE;
                        dy = rng.next_f64_signed() * MIN_DISTANCE;
                        d = dx.hypot(dy).max(MIN_DISTANCE);
                    }
                    let force = k * k / d;
                    disp[v].0 += dx / d * force;
                    disp[v].1 += dy / d * force;
                }
            }

            for &(s, t) in &springs {
                let (dx, dy) = (pos[s].x - pos[t].x, pos[s].y - pos[t].y);
                let d = dx.hypot(dy).max(MIN_DISTANCE);
                let force = d * d / k;
                disp[s].0 -= dx / d * force;
                disp[s].1 -= dy / d * force;
                disp[t].0 += dx / d * force;
                disp[t].1 += dy / d * force;
            }

            for (p, &(dx, dy)) in pos.iter_mut().zip(&disp) {
                let len = dx.hypot(dy);
                if len < f64::EPSILON {
                    continue;
                }
                let step = len.min(temperature);
                *p = area.clamp(p.translate(dx / len * step, dy / len * step));
            }

            temperature = (temperature - cooling).max(0.0);
        }

        for (v, p) in vertices.into_iter().zip(pos) {
            model.set(v, p);
        }
        tracing::trace!(vertices = n, edges = springs.len(), "fr layout finished");
        Ok(())
    }
}
