//! Canonical SVG text for a [`Drawing`].
//!
//! Output rules:
//! - one element per line, `\n` separated, trailing newline
//! - numbers with exactly two decimals, no exponent, `-0.00` normalized to `0.00`
//! - colors as lowercase `#rrggbb`
//! - fixed attribute order per element:
//!   - `rect`: `x y width height fill fill-opacity transform`
//!   - `circle`: `cx cy r fill fill-opacity`
//!   - `polygon`: `points fill fill-opacity`
//!   - `line`: `x1 y1 x2 y2 stroke stroke-width stroke-opacity stroke-linecap`
//!
//! Optional attributes (`fill-opacity` on the hub circle, `transform` on unrotated rects)
//! are omitted rather than written with a neutral value.

use std::fmt::Write as _;

use crate::{
    foundation::core::Point,
    layout::engine::{DrawElement, Drawing},
};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Fixed-precision number formatting shared by every attribute.
pub fn fmt_num(v: f64) -> String {
    debug_assert!(v.is_finite(), "non-finite coordinate {v}");
    let s = format!("{v:.2}");
    if s == "-0.00" { "0.00".to_string() } else { s }
}

fn fmt_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Default)]
struct SvgWriter {
    out: String,
}

impl SvgWriter {
    fn open_root(&mut self, size: u32) {
        let _ = writeln!(
            self.out,
            r#"<svg xmlns="{SVG_NS}" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
    }

    fn element(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            debug_assert!(!value.contains(['"', '<', '&']));
            let _ = write!(self.out, r#" {key}="{value}""#);
        }
        self.out.push_str("/>\n");
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

/// Serialize a drawing. Identical drawings always give identical text.
pub fn write_document(drawing: &Drawing) -> String {
    let mut w = SvgWriter::default();
    w.open_root(drawing.size);

    let size = fmt_num(f64::from(drawing.size));
    w.element(
        "rect",
        &[
            ("x", fmt_num(0.0)),
            ("y", fmt_num(0.0)),
            ("width", size.clone()),
            ("height", size),
            ("fill", drawing.background.to_hex()),
        ],
    );

    for element in &drawing.elements {
        write_element(&mut w, element);
    }
    w.finish()
}

fn write_element(w: &mut SvgWriter, element: &DrawElement) {
    match element {
        DrawElement::Rect {
            rect,
            fill,
            opacity,
            rotation_deg,
        } => {
            let mut attrs = vec![
                ("x", fmt_num(rect.x0)),
                ("y", fmt_num(rect.y0)),
                ("width", fmt_num(rect.width())),
                ("height", fmt_num(rect.height())),
                ("fill", fill.to_hex()),
                ("fill-opacity", fmt_num(*opacity)),
            ];
            if *rotation_deg != 0.0 {
                let c = rect.center();
                attrs.push((
                    "transform",
                    format!(
                        "rotate({} {} {})",
                        fmt_num(*rotation_deg),
                        fmt_num(c.x),
                        fmt_num(c.y)
                    ),
                ));
            }
            w.element("rect", &attrs);
        }
        DrawElement::Circle {
            center,
            radius,
            fill,
            opacity,
        } => {
            let mut attrs = vec![
                ("cx", fmt_num(center.x)),
                ("cy", fmt_num(center.y)),
                ("r", fmt_num(*radius)),
                ("fill", fill.to_hex()),
            ];
            if let Some(opacity) = opacity {
                attrs.push(("fill-opacity", fmt_num(*opacity)));
            }
            w.element("circle", &attrs);
        }
        DrawElement::Polygon {
            points,
            fill,
            opacity,
        } => w.element(
            "polygon",
            &[
                ("points", fmt_points(points)),
                ("fill", fill.to_hex()),
                ("fill-opacity", fmt_num(*opacity)),
            ],
        ),
        DrawElement::Line {
            from,
            to,
            stroke,
            width,
            opacity,
        } => w.element(
            "line",
            &[
                ("x1", fmt_num(from.x)),
                ("y1", fmt_num(from.y)),
                ("x2", fmt_num(to.x)),
                ("y2", fmt_num(to.y)),
                ("stroke", stroke.to_hex()),
                ("stroke-width", fmt_num(*width)),
                ("stroke-opacity", fmt_num(*opacity)),
                ("stroke-linecap", "round".to_string()),
            ],
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/svg/writer.rs"]
mod tests;
