//! Basic edge geometry.

use crate::scene::{Path, PathElement};
use vizgraph_layout::Point;

pub const DEFAULT_ARROW_HEAD_SIZE: f64 = 5.0;

/// Builds the straight path from `start` to `end` that edge formatters receive.
///
/// With `arrow_head` set, three more segments trace a triangle whose tip is `end` and whose
/// sides are `arrow_head_size` long.
pub fn edge_path(start: Point, end: Point, arrow_head: bool, arrow_head_size: f64) -> Path {
    let mut elements = vec![PathElement::MoveTo(start), PathElement::LineTo(end)];

    if arrow_head {
        let angle = (end.y - start.y).atan2(end.x - start.x) - std::f64::consts::FRAC_PI_2;
        let (sin, cos) = angle.sin_cos();
        let half_sqrt3 = 3.0_f64.sqrt() / 2.0;

        let left = Point::new(
            (-0.5 * cos + half_sqrt3 * sin) * arrow_head_size + end.x,
            (-0.5 * sin - half_sqrt3 * cos) * arrow_head_size + end.y,
        );
        let right = Point::new(
            (0.5 * cos + half_sqrt3 * sin) * arrow_head_size + end.x,
            (0.5 * sin - half_sqrt3 * cos) * arrow_head_size + end.y,
        );

        elements.push(PathElement::LineTo(left));
        elements.push(PathElement::LineTo(right));
        elements.push(PathElement::LineTo(end));
    }

    Path::new(elements)
}
