use super::{Factories, GraphDisplay, Labels, Updaters};
use crate::error::Result;
use crate::highlight::ActionOnClick;
use crate::interaction::{CustomAction, Selection, ShapeCallback};
use crate::options::{DisplayOptions, invalid};
use crate::scene::{Path, Shape, Text};
use vizgraph_graphlib::GraphSource;
use vizgraph_layout::{LayoutAlgorithm, Point, RandomLayout};

/// Collects the configuration of a [`GraphDisplay`].
///
/// Nothing is laid out or produced here; [`build`](Self::build) validates the configuration as a
/// whole and [`GraphDisplay::render`] does the work.
pub struct GraphDisplayBuilder<G>
where
    G: GraphSource,
{
    graph: G,
    options: DisplayOptions,
    algorithm: Option<Box<dyn LayoutAlgorithm<G>>>,
    factories: Factories<G::Vertex, G::Edge>,
    updaters: Updaters<G::Vertex, G::Edge>,
    custom_apply: Option<ShapeCallback<G::Vertex>>,
    custom_reset: Option<ShapeCallback<G::Vertex>>,
}

impl<G> GraphDisplayBuilder<G>
where
    G: GraphSource,
{
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            options: DisplayOptions::default(),
            algorithm: None,
            factories: Factories::default(),
            updaters: Updaters::default(),
            custom_apply: None,
            custom_reset: None,
        }
    }

    /// Side of the square canvas.
    pub fn size(mut self, size: f64) -> Self {
        self.options.size = size;
        self
    }

    /// Replaces every plain-data setting at once.
    pub fn options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// The layout algorithm. Defaults to uniform random placement.
    pub fn algorithm(mut self, algorithm: impl LayoutAlgorithm<G> + 'static) -> Self {
        self.algorithm = Some(Box::new(algorithm));
        self
    }

    /// Produces one shape per vertex, centered on the vertex position.
    pub fn vertices(mut self, factory: impl FnMut(&G::Vertex) -> Shape + 'static) -> Self {
        self.factories.vertex = Some(Box::new(factory));
        self
    }

    /// Produces one label per vertex, anchored at `placer(vertex position)`.
    pub fn labels(
        mut self,
        placer: impl FnMut(Point) -> Point + 'static,
        factory: impl FnMut(&G::Vertex) -> Text + 'static,
    ) -> Self {
        self.factories.label = Some(Labels {
            placer: Box::new(placer),
            factory: Box::new(factory),
        });
        self
    }

    /// Produces one path per edge. The formatter receives the straight path between the endpoint
    /// positions, with an arrowhead when the graph is directed.
    pub fn edges(mut self, formatter: impl FnMut(&G::Edge, Path) -> Path + 'static) -> Self {
        self.factories.edge = Some(Box::new(formatter));
        self
    }

    /// Like [`edges`](Self::edges), with arrowheads forced on or off.
    pub fn edges_with_arrow(
        mut self,
        arrow_heads: bool,
        formatter: impl FnMut(&G::Edge, Path) -> Path + 'static,
    ) -> Self {
        self.options.directed_edges = Some(arrow_heads);
        self.edges(formatter)
    }

    pub fn with_vertex_updater(
        mut self,
        updater: impl FnMut(&G::Vertex, &mut Shape) + 'static,
    ) -> Self {
        self.updaters.vertex = Some(Box::new(updater));
        self
    }

    pub fn with_label_updater(
        mut self,
        updater: impl FnMut(&G::Vertex, &mut Text) + 'static,
    ) -> Self {
        self.updaters.label = Some(Box::new(updater));
        self
    }

    pub fn with_edge_updater(mut self, updater: impl FnMut(&G::Edge, &mut Path) + 'static) -> Self {
        self.updaters.edge = Some(Box::new(updater));
        self
    }

    pub fn with_action_on_click(mut self, action: ActionOnClick) -> Self {
        self.options.action_on_click = Some(action);
        self
    }

    /// Runs `apply` on a vertex shape when its vertex becomes selected. Needs a matching
    /// [`with_custom_action_on_click_reset`](Self::with_custom_action_on_click_reset).
    pub fn with_custom_action_on_click(
        mut self,
        apply: impl FnMut(&G::Vertex, &mut Shape) + 'static,
    ) -> Self {
        self.custom_apply = Some(Box::new(apply));
        self
    }

    /// Runs `reset` on a vertex shape when its vertex stops being selected.
    pub fn with_custom_action_on_click_reset(
        mut self,
        reset: impl FnMut(&G::Vertex, &mut Shape) + 'static,
    ) -> Self {
        self.custom_reset = Some(Box::new(reset));
        self
    }

    /// Both halves of a custom click action at once.
    pub fn with_custom_action(mut self, action: CustomAction<G::Vertex>) -> Self {
        self.custom_apply = Some(action.apply);
        self.custom_reset = Some(action.reset);
        self
    }

    pub fn build(self) -> Result<GraphDisplay<G>> {
        self.options.validate()?;

        let custom_action = match (self.custom_apply, self.custom_reset) {
            (Some(apply), Some(reset)) => Some(CustomAction { apply, reset }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(invalid(
                    "a custom click action needs a reset callback as well",
                ));
            }
            (None, Some(_)) => {
                return Err(invalid(
                    "a custom click reset was configured without an action",
                ));
            }
        };

        let algorithm: Box<dyn LayoutAlgorithm<G>> = match self.algorithm {
            Some(algorithm) => algorithm,
            None => Box::new(RandomLayout::default()),
        };

        Ok(GraphDisplay {
            graph: self.graph,
            options: self.options,
            algorithm,
            factories: self.factories,
            updaters: self.updaters,
            custom_action,
            generation: 0,
            rendered: None,
            selection: Selection::Idle,
        })
    }
}
