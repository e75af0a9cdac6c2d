//! hashposter turns any string into a deterministic SVG poster.
//!
//! # Pipeline overview
//!
//! 1. **Stream**: `seed -> ByteStream` (SHA-256 chained blocks, unbounded)
//! 2. **Derive**: `ByteStream -> PosterParams` (density, palette, per-cell choices, motif)
//! 3. **Layout**: `PosterParams -> Drawing` (row-major grid cells, then the ray motif)
//! 4. **Serialize**: `Drawing -> String` (canonical SVG text)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: stream, derivation, layout and serialization read no clock, environment
//!   or file; the same seed and options give byte-identical text everywhere.
//! - **No shared state**: every run owns its [`ByteStream`], so runs can go in parallel
//!   ([`render_batch`]).
//! - **Versioned output**: the byte consumption order is fixed by [`FORMAT_VERSION`].
//!
//! ```
//! let a = hashposter::generate("hello", 800, 16).unwrap();
//! let b = hashposter::generate("hello", 800, 16).unwrap();
//! assert_eq!(a, b);
//! ```
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod output;
mod params;
mod render;
mod stream;
mod svg;

pub use foundation::core::{Point, Rect, Rgb8, Vec2};
pub use foundation::error::{PosterError, PosterResult};
pub use foundation::options::{
    DEFAULT_SIZE, MAX_CELLS, MAX_SIZE, MIN_CELLS, MIN_SIZE, PosterOptions, ResolvedOptions,
};
pub use layout::engine::{DrawElement, Drawing, Placement, layout_drawing, place};
pub use layout::grid::CanvasGeometry;
pub use layout::shape::ShapeKind;
pub use output::file::{ensure_parent_dir, write_output};
pub use params::derive::{
    AUTO_CELLS_MAX, AUTO_CELLS_MIN, CellParams, FORMAT_VERSION, MotifParams, PALETTE_LEN,
    PosterParams, RayParams, derive_params,
};
pub use render::fingerprint::{DrawingFingerprint, fingerprint_drawing};
pub use render::pipeline::{Poster, generate, generate_with, render_batch, render_poster};
pub use stream::bytes::{BLOCK_LEN, ByteStream};
pub use svg::verify::{DocumentSize, verify_document};
pub use svg::writer::{SVG_NS, fmt_num, write_document};
