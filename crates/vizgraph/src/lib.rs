#![forbid(unsafe_code)]

//! Headless graph display.
//!
//! [`GraphDisplay`] lays a graph out with a pluggable [`LayoutAlgorithm`], asks caller-supplied
//! factories for one shape per vertex, one path per edge and one label per vertex, and keeps the
//! result as an ordered scene a host can draw. Clicks on vertex shapes drive a single-selection
//! state machine that either dims everything outside a neighborhood ([`ActionOnClick`]) or calls
//! back into the caller, or both.
//!
//! ```no_run
//! use vizgraph::{ActionOnClick, Graph, GraphDisplay, Shape, Text};
//!
//! let mut g: Graph<(), ()> = Graph::directed();
//! g.set_path(&["a", "b", "c"]);
//!
//! let mut display = GraphDisplay::builder(g)
//!     .vertices(|_| Shape::circle(8.0, "steelblue"))
//!     .edges(|_, path| path)
//!     .labels(|p| p.translate(10.0, 0.0), |v: &String| Text::new(v.clone()))
//!     .with_action_on_click(ActionOnClick::ConnectedEdges)
//!     .build()?;
//! display.render()?;
//! display.click_vertex(&"b".to_string())?;
//! # Ok::<(), vizgraph::Error>(())
//! ```

pub mod display;
pub mod edge_path;
pub mod error;
pub mod highlight;
pub mod interaction;
pub mod options;
pub mod scene;
pub mod visuals;

pub use display::{GraphDisplay, GraphDisplayBuilder};
pub use edge_path::{DEFAULT_ARROW_HEAD_SIZE, edge_path};
pub use error::{Error, Result, VisualKind};
pub use highlight::{ActionOnClick, KeepVisible};
pub use interaction::{CustomAction, Selection};
pub use options::DisplayOptions;
pub use scene::{
    FULL_OPACITY, Path, PathElement, Renderable, SceneItem, Shape, ShapeId, ShapeKind, Text,
    Visual,
};
pub use visuals::Visuals;

pub use vizgraph_graphlib::{EdgeKey, Graph, GraphSource};
pub use vizgraph_layout::{
    Algorithm, Box2D, CircleLayout, FrLayout, LayoutAlgorithm, LayoutModel, Point, RandomLayout,
    Rescale,
};
