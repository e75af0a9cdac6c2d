use std::f64::consts::{FRAC_PI_2, SQRT_2, TAU};

use crate::{
    foundation::core::{Point, Rect, Rgb8},
    foundation::math::unit_vector,
    layout::grid::CanvasGeometry,
    layout::shape::ShapeKind,
    params::derive::{CellParams, MotifParams, PosterParams},
};

/// Inner ray radius as a fraction of canvas size.
pub const RAY_INNER: f64 = 0.06;
/// Outer ray radius as a fraction of canvas size, before per-ray length.
pub const RAY_OUTER: f64 = 0.32;
pub const RAY_OPACITY: f64 = 0.8;
pub const HUB_RADIUS: f64 = 0.03;

/// One abstract shape, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawElement {
    /// Axis-aligned rect rotated about its center.
    Rect {
        rect: Rect,
        fill: Rgb8,
        opacity: f64,
        rotation_deg: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb8,
        /// `None` draws fully opaque without a `fill-opacity` attribute.
        opacity: Option<f64>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgb8,
        opacity: f64,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Rgb8,
        width: f64,
        opacity: f64,
    },
}

/// Ordered drawing: grid cells row-major, then the motif.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    pub size: u32,
    pub background: Rgb8,
    pub elements: Vec<DrawElement>,
}

/// Where a cell's shape sits: a bounding circle that never leaves the cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub center: Point,
    pub radius: f64,
}

pub fn place(cell: Rect, p: &CellParams) -> Placement {
    let radius = p.scale * cell.width().min(cell.height()) / 2.0;
    let free_x = cell.width() - 2.0 * radius;
    let free_y = cell.height() - 2.0 * radius;
    let mid = cell.center();
    Placement {
        center: Point::new(
            mid.x + (p.jitter_x - 0.5) * free_x,
            mid.y + (p.jitter_y - 0.5) * free_y,
        ),
        radius,
    }
}

#[tracing::instrument(skip(params), fields(cells = params.cells))]
pub fn layout_drawing(params: &PosterParams) -> Drawing {
    let geometry = CanvasGeometry::new(params.size, params.margin, params.cells);
    let mut elements = Vec::with_capacity(params.cell_params.len() + 64);

    for ((col, row, rect), cell) in geometry.cell_rects().zip(&params.cell_params) {
        debug_assert_eq!((col, row), (cell.col, cell.row));
        if cell.skip {
            continue;
        }
        emit_cell(params, rect, cell, &mut elements);
    }

    if let Some(motif) = &params.motif {
        emit_motif(params.size, motif, &mut elements);
    }

    tracing::debug!(elements = elements.len(), "laid out drawing");
    Drawing {
        size: params.size,
        background: params.background,
        elements,
    }
}

fn emit_cell(params: &PosterParams, rect: Rect, cell: &CellParams, out: &mut Vec<DrawElement>) {
    let fill = params.color(cell.color);
    match cell.kind {
        ShapeKind::Square => {
            let at = place(rect, cell);
            let half = at.radius / SQRT_2;
            out.push(DrawElement::Rect {
                rect: Rect::new(
                    at.center.x - half,
                    at.center.y - half,
                    at.center.x + half,
                    at.center.y + half,
                ),
                fill,
                opacity: cell.opacity,
                rotation_deg: cell.rotation_deg,
            });
        }
        ShapeKind::Circle => {
            let at = place(rect, cell);
            out.push(DrawElement::Circle {
                center: at.center,
                radius: at.radius,
                fill,
                opacity: Some(cell.opacity),
            });
        }
        ShapeKind::Triangle => {
            let at = place(rect, cell);
            let start = cell.rotation_deg.to_radians() - FRAC_PI_2;
            let points = (0..3)
                .map(|k| {
                    let angle = start + f64::from(k) * TAU / 3.0;
                    at.center + unit_vector(angle) * at.radius
                })
                .collect();
            out.push(DrawElement::Polygon {
                points,
                fill,
                opacity: cell.opacity,
            });
        }
        ShapeKind::DiagonalSplit => {
            let tl = Point::new(rect.x0, rect.y0);
            let tr = Point::new(rect.x1, rect.y0);
            let br = Point::new(rect.x1, rect.y1);
            let bl = Point::new(rect.x0, rect.y1);
            let (first, second) = if cell.flip {
                (vec![tl, tr, bl], vec![tr, br, bl])
            } else {
                (vec![tl, tr, br], vec![tl, br, bl])
            };
            out.push(DrawElement::Polygon {
                points: first,
                fill,
                opacity: cell.opacity,
            });
            out.push(DrawElement::Polygon {
                points: second,
                fill: params.color(cell.color + 1),
                opacity: cell.opacity,
            });
        }
    }
}

fn emit_motif(size: u32, motif: &MotifParams, out: &mut Vec<DrawElement>) {
    let size = f64::from(size);
    let center = Point::new(size / 2.0, size / 2.0);
    let inner = size * RAY_INNER;
    let outer = size * RAY_OUTER;
    let count = motif.rays.len() as f64;

    for (i, ray) in motif.rays.iter().enumerate() {
        let dir = unit_vector(TAU * i as f64 / count + ray.angle_jitter);
        out.push(DrawElement::Line {
            from: center + dir * inner,
            to: center + dir * (outer * ray.length),
            stroke: ray.color,
            width: ray.width,
            opacity: RAY_OPACITY,
        });
    }

    out.push(DrawElement::Circle {
        center,
        radius: size * HUB_RADIUS,
        fill: motif.hub,
        opacity: None,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
