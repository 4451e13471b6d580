//! SVG output for a rendered display.

use std::fmt::Write as _;
use vizgraph::{Path, PathElement, Renderable, Shape, ShapeKind, Text};

pub fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Writes `scene` bottom to top into a `size` x `size` SVG document.
pub fn write_svg<'a>(scene: impl IntoIterator<Item = Renderable<'a>>, size: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    for item in scene {
        match item {
            Renderable::Shape(shape) => write_shape(&mut out, shape),
            Renderable::Path(path) => write_path(&mut out, path),
            Renderable::Text(text) => write_text(&mut out, text),
        }
    }
    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape) {
    let p = shape.layout;
    let stroke = match &shape.stroke {
        Some(stroke) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            escape_xml_text(stroke),
            shape.stroke_width
        ),
        None => String::new(),
    };
    let fill = escape_xml_text(&shape.fill);
    let opacity = shape.opacity;
    let _ = match shape.kind {
        ShapeKind::Circle { radius } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{fill}"{stroke} opacity="{opacity}"/>"#,
            p.x, p.y
        ),
        ShapeKind::Ellipse { radius_x, radius_y } => writeln!(
            out,
            r#"  <ellipse cx="{}" cy="{}" rx="{radius_x}" ry="{radius_y}" fill="{fill}"{stroke} opacity="{opacity}"/>"#,
            p.x, p.y
        ),
        ShapeKind::Rectangle { width, height } => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{width}" height="{height}" fill="{fill}"{stroke} opacity="{opacity}"/>"#,
            p.x - width / 2.0,
            p.y - height / 2.0
        ),
    };
}

fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for element in &path.elements {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match element {
            PathElement::MoveTo(p) => write!(d, "M{} {}", p.x, p.y),
            PathElement::LineTo(p) => write!(d, "L{} {}", p.x, p.y),
        };
    }
    d
}

fn write_path(out: &mut String, path: &Path) {
    let color = escape_xml_text(&path.color);
    let dash = if path.dash_array.is_empty() {
        String::new()
    } else {
        let values: Vec<String> = path.dash_array.iter().map(f64::to_string).collect();
        format!(r#" stroke-dasharray="{}""#, values.join(" "))
    };
    let _ = writeln!(
        out,
        r#"  <path d="{}" stroke="{color}" fill="{color}" stroke-width="{}"{dash} opacity="{}"/>"#,
        path_data(path),
        path.stroke_width,
        path.opacity
    );
}

fn write_text(out: &mut String, text: &Text) {
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" font-size="{}" fill="{}" opacity="{}">{}</text>"#,
        text.position.x,
        text.position.y,
        text.font_size,
        escape_xml_text(&text.fill),
        text.opacity,
        escape_xml_text(&text.content)
    );
}
