use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box2D {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Box2D {
    /// A `width` x `height` area anchored at the origin.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }

    pub const fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x() && p.y >= self.min_y && p.y <= self.max_y()
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min_x, self.max_x()),
            p.y.clamp(self.min_y, self.max_y()),
        )
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Positions produced by one layout run, keyed by vertex.
///
/// Iteration follows the order in which vertices were first placed.
#[derive(Debug, Clone)]
pub struct LayoutModel<V> {
    area: Box2D,
    positions: IndexMap<V, Point>,
}

impl<V> LayoutModel<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new(area: Box2D) -> Result<Self> {
        area.validate()?;
        Ok(Self {
            area,
            positions: IndexMap::new(),
        })
    }

    pub fn area(&self) -> Box2D {
        self.area
    }

    pub fn set(&mut self, vertex: V, point: Point) {
        self.positions.insert(vertex, point);
    }

    pub fn get(&self, vertex: &V) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    /// Like [`LayoutModel::get`], but a vertex without a position is an error.
    pub fn position(&self, vertex: &V) -> Result<Point> {
        self.get(vertex).ok_or_else(|| Error::MissingPosition {
            vertex: format!("{vertex:?}"),
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &Point)> {
        self.positions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&V, &mut Point)> {
        self.positions.iter_mut()
    }
}
