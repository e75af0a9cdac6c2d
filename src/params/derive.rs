//! Byte stream -> poster parameters.
//!
//! Bytes are consumed in one fixed order:
//!
//! | step       | bytes          | use                                                 |
//! |------------|----------------|-----------------------------------------------------|
//! | density    | 1              | derived cells per axis, `8 + b % 17`                |
//! | background | 3              | RGB                                                 |
//! | palette    | 3 per color    | RGB, brightened                                     |
//! | cells      | 8 per cell     | skip, kind, color, jitter x/y, scale, rotation, opacity |
//! | rays       | 6 per ray      | angle jitter, length, RGB, stroke width             |
//! | hub        | 3              | RGB, brightened                                     |
//!
//! Cells are read row-major. Skipped cells still consume all eight bytes, and the density byte
//! is read even when the caller fixes the cell count, so every option change leaves the byte
//! offsets of the other steps alone. Changing this table requires bumping [`FORMAT_VERSION`].

use crate::{
    foundation::core::Rgb8,
    foundation::math::byte_to_range,
    foundation::options::ResolvedOptions,
    layout::shape::ShapeKind,
    stream::bytes::ByteStream,
};

/// Version of the byte consumption contract.
pub const FORMAT_VERSION: u32 = 1;

pub const PALETTE_LEN: usize = 5;
pub const AUTO_CELLS_MIN: u32 = 8;
pub const AUTO_CELLS_MAX: u32 = 24;
/// Skip bytes below this leave a cell empty (about 15% of cells).
pub const SKIP_THRESHOLD: u8 = 38;
pub const CELL_BYTES: u64 = 8;
pub const MOTIF_RAYS: usize = 40;
pub const RAY_BYTES: u64 = 6;

pub const SCALE_RANGE: (f64, f64) = (0.30, 0.90);
pub const OPACITY_RANGE: (f64, f64) = (0.25, 0.90);
pub const RAY_JITTER_RANGE: (f64, f64) = (-0.06, 0.06);
pub const RAY_LENGTH_RANGE: (f64, f64) = (0.8, 1.2);

/// Everything the layout engine needs, derived once per run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PosterParams {
    pub version: u32,
    pub size: u32,
    pub margin: u32,
    pub cells: u32,
    pub background: Rgb8,
    pub palette: Vec<Rgb8>,
    /// Row-major, `cells * cells` entries.
    pub cell_params: Vec<CellParams>,
    pub motif: Option<MotifParams>,
    /// Stream bytes read to build this value.
    pub bytes_consumed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CellParams {
    pub col: u32,
    pub row: u32,
    pub skip: bool,
    pub kind: ShapeKind,
    /// Index into [`PosterParams::palette`].
    pub color: usize,
    /// `[0, 1]`, 0.5 is centered.
    pub jitter_x: f64,
    pub jitter_y: f64,
    /// Fraction of the cell's shorter side covered by the shape's bounding circle.
    pub scale: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    /// Picks the diagonal for [`ShapeKind::DiagonalSplit`].
    pub flip: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MotifParams {
    pub rays: Vec<RayParams>,
    pub hub: Rgb8,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RayParams {
    /// Radians added to the evenly spaced base angle.
    pub angle_jitter: f64,
    /// Multiplier on the outer radius.
    pub length: f64,
    pub color: Rgb8,
    pub width: f64,
}

impl PosterParams {
    pub fn cell(&self, col: u32, row: u32) -> Option<&CellParams> {
        if col >= self.cells || row >= self.cells {
            return None;
        }
        self.cell_params.get((row * self.cells + col) as usize)
    }

    pub fn color(&self, index: usize) -> Rgb8 {
        self.palette[index % self.palette.len()]
    }
}

/// Derive poster parameters by reading `stream` in the documented order.
pub fn derive_params(stream: &mut ByteStream, opts: &ResolvedOptions) -> PosterParams {
    let density = stream.next_u8();
    let derived_cells =
        AUTO_CELLS_MIN + u32::from(density) % (AUTO_CELLS_MAX - AUTO_CELLS_MIN + 1);
    let cells = opts.cells().unwrap_or(derived_cells);

    let background = Rgb8::from_bytes(stream.next_rgb());
    let palette = (0..PALETTE_LEN)
        .map(|_| Rgb8::from_bytes(stream.next_rgb()).brightened())
        .collect::<Vec<_>>();

    let mut cell_params = Vec::with_capacity((cells * cells) as usize);
    for row in 0..cells {
        for col in 0..cells {
            cell_params.push(derive_cell(stream, col, row));
        }
    }

    let motif = opts.motif().then(|| derive_motif(stream));

    let params = PosterParams {
        version: FORMAT_VERSION,
        size: opts.size(),
        margin: opts.margin(),
        cells,
        background,
        palette,
        cell_params,
        motif,
        bytes_consumed: stream.consumed(),
    };
    tracing::debug!(
        cells = params.cells,
        derived_cells,
        bytes = params.bytes_consumed,
        "derived poster params"
    );
    params
}

fn derive_cell(stream: &mut ByteStream, col: u32, row: u32) -> CellParams {
    let mut b = [0u8; CELL_BYTES as usize];
    stream.fill(&mut b);
    let [skip, kind, color, jx, jy, scale, rotation, opacity] = b;

    CellParams {
        col,
        row,
        skip: skip < SKIP_THRESHOLD,
        kind: ShapeKind::from_selector(kind),
        color: usize::from(color) % PALETTE_LEN,
        jitter_x: byte_to_range(jx, 0.0, 1.0),
        jitter_y: byte_to_range(jy, 0.0, 1.0),
        scale: byte_to_range(scale, SCALE_RANGE.0, SCALE_RANGE.1),
        rotation_deg: f64::from(rotation) * 360.0 / 256.0,
        opacity: byte_to_range(opacity, OPACITY_RANGE.0, OPACITY_RANGE.1),
        flip: rotation & 1 == 1,
    }
}

fn derive_motif(stream: &mut ByteStream) -> MotifParams {
    let mut rays = Vec::with_capacity(MOTIF_RAYS);
    for _ in 0..MOTIF_RAYS {
        let mut b = [0u8; RAY_BYTES as usize];
        stream.fill(&mut b);
        let [jitter, length, r, g, bl, width] = b;
        rays.push(RayParams {
            angle_jitter: byte_to_range(jitter, RAY_JITTER_RANGE.0, RAY_JITTER_RANGE.1),
            length: byte_to_range(length, RAY_LENGTH_RANGE.0, RAY_LENGTH_RANGE.1),
            color: Rgb8::new(r, g, bl).brightened(),
            width: f64::from(1 + width % 4),
        });
    }
    let hub = Rgb8::from_bytes(stream.next_rgb()).brightened();
    MotifParams { rays, hub }
}

#[cfg(test)]
#[path = "../../tests/unit/params/derive.rs"]
mod tests;
