//! Renderable primitives.
//!
//! These are plain values: the display positions them and changes their opacity, a host decides
//! how to draw them. Colors are CSS color strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use vizgraph_layout::Point;

pub const FULL_OPACITY: f64 = 1.0;

/// Identity of a vertex shape within one render generation.
///
/// Ids are assigned by the display when the shape is produced; a shape built by a factory has no
/// id until then. Two shapes that compare equal by value still carry different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    generation: u64,
    index: usize,
}

impl ShapeId {
    pub(crate) fn new(generation: u64, index: usize) -> Self {
        Self { generation, index }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.generation, self.index)
    }
}

/// Anything whose opacity the highlight engine can change.
pub trait Visual {
    fn opacity(&self) -> f64;

    fn set_opacity(&mut self, opacity: f64);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ShapeKind {
    Circle { radius: f64 },
    Ellipse { radius_x: f64, radius_y: f64 },
    Rectangle { width: f64, height: f64 },
}

/// The visual of one vertex. `layout` is the shape's center.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: Option<ShapeId>,
    pub kind: ShapeKind,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub layout: Point,
    pub opacity: f64,
}

impl Shape {
    pub fn new(kind: ShapeKind, fill: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            fill: fill.into(),
            stroke: None,
            stroke_width: 1.0,
            layout: Point::default(),
            opacity: FULL_OPACITY,
        }
    }

    pub fn circle(radius: f64, fill: impl Into<String>) -> Self {
        Self::new(ShapeKind::Circle { radius }, fill)
    }

    pub fn ellipse(radius_x: f64, radius_y: f64, fill: impl Into<String>) -> Self {
        Self::new(ShapeKind::Ellipse { radius_x, radius_y }, fill)
    }

    pub fn rectangle(width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self::new(ShapeKind::Rectangle { width, height }, fill)
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }

    pub fn id(&self) -> Option<ShapeId> {
        self.id
    }

    pub(crate) fn bind(&mut self, id: ShapeId, layout: Point) {
        self.id = Some(id);
        self.layout = layout;
    }
}

impl Visual for Shape {
    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
}

impl PathElement {
    pub fn point(&self) -> Point {
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => p,
        }
    }
}

/// The visual of one edge: a sequence of line segments.
///
/// `color` is used for both stroke and fill, so an arrowhead drawn as part of the path comes out
/// solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub elements: Vec<PathElement>,
    pub color: String,
    pub stroke_width: f64,
    pub dash_array: Vec<f64>,
    pub opacity: f64,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            color: "black".to_string(),
            stroke_width: 1.0,
            dash_array: Vec::new(),
            opacity: FULL_OPACITY,
        }
    }
}

impl Path {
    pub fn new(elements: Vec<PathElement>) -> Self {
        Self {
            elements,
            ..Default::default()
        }
    }

    /// Where the edge line starts.
    pub fn start(&self) -> Option<Point> {
        self.elements.first().map(PathElement::point)
    }

    /// Where the edge line ends, ignoring any arrowhead segments drawn after it.
    pub fn end(&self) -> Option<Point> {
        self.elements.get(1).map(PathElement::point)
    }
}

impl Visual for Path {
    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

/// The label of one vertex. `position` is the text baseline anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub position: Point,
    pub fill: String,
    pub font_size: f64,
    pub opacity: f64,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: Point::default(),
            fill: "black".to_string(),
            font_size: 14.0,
            opacity: FULL_OPACITY,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Visual for Text {
    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

/// One entry of the display's draw list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneItem<V, E> {
    Vertex(V),
    Edge(E),
    Label(V),
}

/// A borrowed renderable, as handed to a host.
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    Shape(&'a Shape),
    Path(&'a Path),
    Text(&'a Text),
}

impl Renderable<'_> {
    pub fn opacity(&self) -> f64 {
        match self {
            Renderable::Shape(s) => s.opacity,
            Renderable::Path(p) => p.opacity,
            Renderable::Text(t) => t.opacity,
        }
    }
}
