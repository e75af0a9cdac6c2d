use std::fmt;

use crate::{
    foundation::core::{Point, Rgb8},
    foundation::math::Fnv1a64,
    layout::engine::{DrawElement, Drawing},
};

/// 128-bit identity of a drawing, stable across runs and machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawingFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl fmt::Display for DrawingFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_drawing(drawing: &Drawing) -> DrawingFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, u64::from(drawing.size));
    write_rgb_pair(&mut a, &mut b, drawing.background);
    write_u64_pair(&mut a, &mut b, drawing.elements.len() as u64);

    for element in &drawing.elements {
        match element {
            DrawElement::Rect {
                rect,
                fill,
                opacity,
                rotation_deg,
            } => {
                write_u8_pair(&mut a, &mut b, 0);
                for v in [rect.x0, rect.y0, rect.x1, rect.y1, *opacity, *rotation_deg] {
                    write_f64_pair(&mut a, &mut b, v);
                }
                write_rgb_pair(&mut a, &mut b, *fill);
            }
            DrawElement::Circle {
                center,
                radius,
                fill,
                opacity,
            } => {
                write_u8_pair(&mut a, &mut b, 1);
                write_point_pair(&mut a, &mut b, *center);
                write_f64_pair(&mut a, &mut b, *radius);
                write_rgb_pair(&mut a, &mut b, *fill);
                match opacity {
                    Some(o) => {
                        write_u8_pair(&mut a, &mut b, 1);
                        write_f64_pair(&mut a, &mut b, *o);
                    }
                    None => write_u8_pair(&mut a, &mut b, 0),
                }
            }
            DrawElement::Polygon {
                points,
                fill,
                opacity,
            } => {
                write_u8_pair(&mut a, &mut b, 2);
                write_u64_pair(&mut a, &mut b, points.len() as u64);
                for p in points {
                    write_point_pair(&mut a, &mut b, *p);
                }
                write_rgb_pair(&mut a, &mut b, *fill);
                write_f64_pair(&mut a, &mut b, *opacity);
            }
            DrawElement::Line {
                from,
                to,
                stroke,
                width,
                opacity,
            } => {
                write_u8_pair(&mut a, &mut b, 3);
                write_point_pair(&mut a, &mut b, *from);
                write_point_pair(&mut a, &mut b, *to);
                write_rgb_pair(&mut a, &mut b, *stroke);
                write_f64_pair(&mut a, &mut b, *width);
                write_f64_pair(&mut a, &mut b, *opacity);
            }
        }
    }

    DrawingFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    write_u64_pair(a, b, v.to_bits());
}

fn write_point_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, p: Point) {
    write_f64_pair(a, b, p.x);
    write_f64_pair(a, b, p.y);
}

fn write_rgb_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, c: Rgb8) {
    a.write_bytes(&[c.r, c.g, c.b]);
    b.write_bytes(&[c.r, c.g, c.b]);
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
