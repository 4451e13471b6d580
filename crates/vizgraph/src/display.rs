//! The render pipeline.
//!
//! A [`GraphDisplay`] owns one graph for its lifetime. Each call to [`GraphDisplay::render`]
//! starts a new generation: the layout runs once, then vertex shapes, edge paths and labels are
//! produced in that order from the resulting positions, and the whole result replaces the
//! previous generation in one step.

mod builder;

pub use builder::GraphDisplayBuilder;

use crate::edge_path::edge_path;
use crate::error::{Error, Result, VisualKind};
use crate::highlight;
use crate::interaction::{CustomAction, Selection, Transition};
use crate::options::DisplayOptions;
use crate::scene::{Path, Renderable, SceneItem, Shape, ShapeId, Text};
use crate::visuals::Visuals;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};
use vizgraph_graphlib::GraphSource;
use vizgraph_layout::{Box2D, LayoutAlgorithm, LayoutModel, Point, Rescale};

pub type VertexFactory<V> = Box<dyn FnMut(&V) -> Shape>;
pub type LabelFactory<V> = Box<dyn FnMut(&V) -> Text>;
pub type LabelPlacer = Box<dyn FnMut(Point) -> Point>;
pub type EdgeFormatter<E> = Box<dyn FnMut(&E, Path) -> Path>;
pub type VertexUpdater<V> = Box<dyn FnMut(&V, &mut Shape)>;
pub type LabelUpdater<V> = Box<dyn FnMut(&V, &mut Text)>;
pub type EdgeUpdater<E> = Box<dyn FnMut(&E, &mut Path)>;

pub(crate) struct Labels<V> {
    placer: LabelPlacer,
    factory: LabelFactory<V>,
}

pub(crate) struct Factories<V, E> {
    vertex: Option<VertexFactory<V>>,
    label: Option<Labels<V>>,
    edge: Option<EdgeFormatter<E>>,
}

impl<V, E> Default for Factories<V, E> {
    fn default() -> Self {
        Self {
            vertex: None,
            label: None,
            edge: None,
        }
    }
}

pub(crate) struct Updaters<V, E> {
    vertex: Option<VertexUpdater<V>>,
    label: Option<LabelUpdater<V>>,
    edge: Option<EdgeUpdater<E>>,
}

impl<V, E> Default for Updaters<V, E> {
    fn default() -> Self {
        Self {
            vertex: None,
            label: None,
            edge: None,
        }
    }
}

struct Rendered<V, E> {
    generation: u64,
    layout: LayoutModel<V>,
    visuals: Visuals<V, E>,
    children: Vec<SceneItem<V, E>>,
    shape_owners: FxHashMap<ShapeId, V>,
}

/// Lays out a graph and keeps the visuals produced for it.
pub struct GraphDisplay<G>
where
    G: GraphSource,
{
    graph: G,
    options: DisplayOptions,
    algorithm: Box<dyn LayoutAlgorithm<G>>,
    factories: Factories<G::Vertex, G::Edge>,
    updaters: Updaters<G::Vertex, G::Edge>,
    custom_action: Option<CustomAction<G::Vertex>>,
    generation: u64,
    rendered: Option<Rendered<G::Vertex, G::Edge>>,
    selection: Selection<G::Vertex>,
}

impl<G> GraphDisplay<G>
where
    G: GraphSource,
{
    pub fn builder(graph: G) -> GraphDisplayBuilder<G> {
        GraphDisplayBuilder::new(graph)
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Number of generations rendered so far. Zero until the first render.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.options.action_on_click.is_some() || self.custom_action.is_some()
    }

    pub fn selection(&self) -> &Selection<G::Vertex> {
        &self.selection
    }

    /// Replaces the layout algorithm used by the next render.
    ///
    /// Fails with [`Error::LayoutLocked`] once any visual has been produced.
    pub fn set_algorithm(&mut self, algorithm: impl LayoutAlgorithm<G> + 'static) -> Result<()> {
        if self
            .rendered
            .as_ref()
            .is_some_and(|r| !r.visuals.is_empty())
        {
            return Err(Error::LayoutLocked);
        }
        self.algorithm = Box::new(algorithm);
        Ok(())
    }

    /// Runs the layout and produces a fresh generation of visuals.
    pub fn render(&mut self) -> Result<()> {
        let mut layout = LayoutModel::new(Box2D::square(self.options.size))?;
        self.algorithm.layout(&self.graph, &mut layout)?;
        self.produce(layout, None)
    }

    /// Sets a new canvas size and renders again from a fresh layout.
    pub fn resize(&mut self, size: f64) -> Result<()> {
        let options = DisplayOptions {
            size,
            ..self.options.clone()
        };
        options.validate()?;
        self.options = options;
        self.render()
    }

    /// Scales the current positions about the canvas center and reproduces every visual.
    ///
    /// The layout algorithm does not run again. Scales compound: two rescales by 2 equal one by 4.
    pub fn rescale(&mut self, factor: f64) -> Result<()> {
        self.rescale_inner(factor, None)
    }

    /// Like [`rescale`](Self::rescale), then hands every new vertex shape to `f`.
    pub fn rescale_with(
        &mut self,
        factor: f64,
        mut f: impl FnMut(&G::Vertex, &mut Shape),
    ) -> Result<()> {
        let post: &mut dyn FnMut(&G::Vertex, &mut Shape) = &mut f;
        self.rescale_inner(factor, Some(post))
    }

    fn rescale_inner(
        &mut self,
        factor: f64,
        post: Option<&mut dyn FnMut(&G::Vertex, &mut Shape)>,
    ) -> Result<()> {
        let mut layout = self
            .rendered
            .as_ref()
            .ok_or(Error::NotRendered)?
            .layout
            .clone();
        Rescale::new(factor).apply(&mut layout)?;
        self.produce(layout, post)
    }

    /// Runs the configured updaters over the current visuals in place.
    pub fn update(&mut self) -> Result<()> {
        let rendered = self.rendered.as_mut().ok_or(Error::NotRendered)?;
        if let Some(f) = self.updaters.vertex.as_mut() {
            for (v, shape) in rendered.visuals.vertices.iter_mut() {
                f(v, shape);
            }
        }
        if let Some(f) = self.updaters.edge.as_mut() {
            for (e, path) in rendered.visuals.edges.iter_mut() {
                f(e, path);
            }
        }
        if let Some(f) = self.updaters.label.as_mut() {
            for (v, text) in rendered.visuals.labels.iter_mut() {
                f(v, text);
            }
        }
        trace!(generation = rendered.generation, "updated visuals in place");
        Ok(())
    }

    fn produce(
        &mut self,
        layout: LayoutModel<G::Vertex>,
        mut post: Option<&mut dyn FnMut(&G::Vertex, &mut Shape)>,
    ) -> Result<()> {
        let generation = self.generation + 1;
        let interactive = self.is_interactive();
        let arrow_heads = self
            .options
            .directed_edges
            .unwrap_or_else(|| self.graph.is_directed());

        // Every position is resolved before anything is built.
        let vertices = self.graph.vertices();
        let positions = vertices
            .iter()
            .map(|v| layout.position(v))
            .collect::<vizgraph_layout::Result<Vec<_>>>()?;

        let mut visuals = Visuals::default();
        let mut children = Vec::new();
        let mut shape_owners = FxHashMap::default();

        if let Some(factory) = self.factories.vertex.as_mut() {
            for (index, (v, pos)) in vertices.iter().zip(&positions).enumerate() {
                let mut shape = factory(v);
                shape.bind(ShapeId::new(generation, index), *pos);
                if let Some(post) = post.as_mut() {
                    post(v, &mut shape);
                }
                visuals.vertices.insert(v.clone(), shape);
                children.push(SceneItem::Vertex(v.clone()));
            }
            trace!(generation, count = visuals.vertices.len(), "produced vertex shapes");

            if interactive {
                for (v, shape) in &visuals.vertices {
                    if let Some(id) = shape.id() {
                        shape_owners.insert(id, v.clone());
                    }
                }
            }
        }

        if let Some(formatter) = self.factories.edge.as_mut() {
            for e in self.graph.edges() {
                let start = layout.position(&self.graph.edge_source(&e))?;
                let end = layout.position(&self.graph.edge_target(&e))?;
                let path = formatter(
                    &e,
                    edge_path(start, end, arrow_heads, self.options.arrow_head_size),
                );
                visuals.edges.insert(e.clone(), path);
                children.push(SceneItem::Edge(e));
            }
            trace!(generation, count = visuals.edges.len(), arrow_heads, "produced edge paths");
        }

        if let Some(labels) = self.factories.label.as_mut() {
            for (v, pos) in vertices.iter().zip(&positions) {
                let anchor = (labels.placer)(*pos);
                let mut text = (labels.factory)(v);
                text.position = anchor;
                visuals.labels.insert(v.clone(), text);
                children.push(SceneItem::Label(v.clone()));
            }
            trace!(generation, count = visuals.labels.len(), "produced labels");
        }

        debug!(
            generation,
            vertices = visuals.vertices.len(),
            edges = visuals.edges.len(),
            labels = visuals.labels.len(),
            "rendered graph display"
        );

        self.generation = generation;
        self.selection = Selection::Idle;
        self.rendered = Some(Rendered {
            generation,
            layout,
            visuals,
            children,
            shape_owners,
        });
        Ok(())
    }

    fn rendered(&self) -> Result<&Rendered<G::Vertex, G::Edge>> {
        self.rendered.as_ref().ok_or(Error::NotRendered)
    }

    /// Positions of the current generation, after any rescale.
    pub fn layout(&self) -> Result<&LayoutModel<G::Vertex>> {
        Ok(&self.rendered()?.layout)
    }

    pub fn visuals(&self) -> Result<&Visuals<G::Vertex, G::Edge>> {
        Ok(&self.rendered()?.visuals)
    }

    pub fn vertices(&self) -> Result<&IndexMap<G::Vertex, Shape>> {
        let rendered = self.rendered()?;
        if self.factories.vertex.is_none() {
            return Err(Error::MissingConfiguration {
                kind: VisualKind::Vertices,
            });
        }
        Ok(&rendered.visuals.vertices)
    }

    pub fn labels(&self) -> Result<&IndexMap<G::Vertex, Text>> {
        let rendered = self.rendered()?;
        if self.factories.label.is_none() {
            return Err(Error::MissingConfiguration {
                kind: VisualKind::Labels,
            });
        }
        Ok(&rendered.visuals.labels)
    }

    pub fn edges(&self) -> Result<&IndexMap<G::Edge, Path>> {
        let rendered = self.rendered()?;
        if self.factories.edge.is_none() {
            return Err(Error::MissingConfiguration {
                kind: VisualKind::Edges,
            });
        }
        Ok(&rendered.visuals.edges)
    }

    /// The draw list: vertex shapes first, then edges, then labels.
    pub fn scene_items(&self) -> Result<&[SceneItem<G::Vertex, G::Edge>]> {
        Ok(&self.rendered()?.children)
    }

    /// The draw list resolved to the visuals themselves, bottom to top.
    pub fn scene(&self) -> Result<Vec<Renderable<'_>>> {
        let rendered = self.rendered()?;
        let visuals = &rendered.visuals;
        Ok(rendered
            .children
            .iter()
            .filter_map(|item| match item {
                SceneItem::Vertex(v) => visuals.vertices.get(v).map(Renderable::Shape),
                SceneItem::Edge(e) => visuals.edges.get(e).map(Renderable::Path),
                SceneItem::Label(v) => visuals.labels.get(v).map(Renderable::Text),
            })
            .collect())
    }

    /// Id of the shape currently standing for `vertex`.
    pub fn shape_of(&self, vertex: &G::Vertex) -> Result<ShapeId> {
        self.rendered()?
            .visuals
            .vertices
            .get(vertex)
            .and_then(Shape::id)
            .ok_or_else(|| Error::UnknownVertex {
                vertex: format!("{vertex:?}"),
            })
    }

    /// Delivers a click to the vertex shape `shape`.
    ///
    /// The selection changes exactly once; then the built-in action (if any) and the custom
    /// action (if any) run, in that order.
    pub fn click(&mut self, shape: ShapeId) -> Result<()> {
        if !self.is_interactive() {
            return Err(Error::NotInteractive);
        }
        let rendered = self.rendered.as_mut().ok_or(Error::NotRendered)?;
        let Some(vertex) = rendered.shape_owners.get(&shape).cloned() else {
            warn!(
                %shape,
                generation = rendered.generation,
                "rejected click on a shape outside the current generation"
            );
            return Err(Error::StaleVisual { shape });
        };

        let transition = self.selection.click(vertex.clone(), shape);
        debug!(?vertex, %shape, ?transition, "click");

        if let Some(action) = self.options.action_on_click {
            match &transition {
                Transition::Deselect { .. } => highlight::restore_all(&mut rendered.visuals),
                Transition::Select { .. } => {
                    let keep = action.keep_visible(&self.graph, &vertex);
                    highlight::dim_except(
                        &mut rendered.visuals,
                        &keep,
                        self.options.dimmed_opacity,
                    );
                }
            }
        }

        if let Some(custom) = self.custom_action.as_mut() {
            let shapes = &mut rendered.visuals.vertices;
            match transition {
                Transition::Deselect { vertex } => {
                    if let Some(s) = shapes.get_mut(&vertex) {
                        (custom.reset)(&vertex, s);
                    }
                }
                Transition::Select { previous } => {
                    if let Some((previous, _)) = previous {
                        if let Some(s) = shapes.get_mut(&previous) {
                            (custom.reset)(&previous, s);
                        }
                    }
                    if let Some(s) = shapes.get_mut(&vertex) {
                        (custom.apply)(&vertex, s);
                    }
                }
            }
        }
        Ok(())
    }

    /// Delivers a click to the shape of `vertex`.
    pub fn click_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        if !self.is_interactive() {
            return Err(Error::NotInteractive);
        }
        let shape = self.shape_of(vertex)?;
        self.click(shape)
    }
}
