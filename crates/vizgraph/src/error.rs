use crate::scene::ShapeId;
use std::fmt;

/// The kinds of visuals a display can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKind {
    Vertices,
    Labels,
    Edges,
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VisualKind::Vertices => "vertices",
            VisualKind::Labels => "labels",
            VisualKind::Edges => "edges",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph display hasn't been rendered yet")]
    NotRendered,
    #[error("the layout algorithm can't be changed once visuals have been produced")]
    LayoutLocked,
    #[error("{kind} were never configured for this display")]
    MissingConfiguration { kind: VisualKind },
    #[error("shape {shape} does not belong to the current render generation")]
    StaleVisual { shape: ShapeId },
    #[error("vertex {vertex} has no shape in the current render generation")]
    UnknownVertex { vertex: String },
    #[error("no click action is configured for this display")]
    NotInteractive,
    #[error("invalid display configuration: {message}")]
    InvalidConfig { message: String },
    #[error("unknown click action: {name}")]
    UnknownAction { name: String },
    #[error(transparent)]
    Layout(#[from] vizgraph_layout::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
