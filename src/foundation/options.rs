use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PosterError, PosterResult};

/// Default square canvas edge in pixels.
pub const DEFAULT_SIZE: u32 = 800;
/// Sizes below this are clamped up.
pub const MIN_SIZE: u32 = 64;
/// Sizes above this are clamped down.
pub const MAX_SIZE: u32 = 16_384;
/// Smallest accepted explicit cell count per axis.
pub const MIN_CELLS: u32 = 1;
/// Explicit cell counts above this are clamped down.
pub const MAX_CELLS: u32 = 128;

/// Caller-facing generation options.
///
/// Every field has a default, so a JSON config file only needs the keys it wants to change:
///
/// ```json
/// { "size": 1200, "cells": 20 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosterOptions {
    /// Square canvas edge in pixels.
    pub size: u32,
    /// Cells per axis. `None` derives the density from the seed.
    pub cells: Option<u32>,
    /// Empty border kept around the grid, in pixels.
    pub margin: u32,
    /// Draw the ray burst over the grid.
    pub motif: bool,
}

impl Default for PosterOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: None,
            margin: 0,
            motif: true,
        }
    }
}

/// Options after validation and clamping. Only [`PosterOptions::resolve`] builds these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    size: u32,
    cells: Option<u32>,
    margin: u32,
    motif: bool,
}

impl ResolvedOptions {
    /// Clamped canvas edge in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Clamped explicit cell count, or `None` to derive it from the seed.
    pub fn cells(&self) -> Option<u32> {
        self.cells
    }

    /// Border width; always leaves a non-empty interior.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn motif(&self) -> bool {
        self.motif
    }
}

impl PosterOptions {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_cells(mut self, cells: u32) -> Self {
        self.cells = Some(cells);
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_motif(mut self, motif: bool) -> Self {
        self.motif = motif;
        self
    }

    pub fn from_json_str(s: &str) -> PosterResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> PosterResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Validate and clamp. Runs before any byte is derived.
    pub fn resolve(&self) -> PosterResult<ResolvedOptions> {
        if self.size == 0 {
            return Err(PosterError::validation("size must be > 0"));
        }
        if let Some(cells) = self.cells
            && cells < MIN_CELLS
        {
            return Err(PosterError::validation(format!(
                "cells must be >= {MIN_CELLS}"
            )));
        }

        let size = self.size.clamp(MIN_SIZE, MAX_SIZE);
        if size != self.size {
            tracing::warn!(requested = self.size, clamped = size, "size out of range");
        }

        let cells = self.cells.map(|requested| {
            let clamped = requested.min(MAX_CELLS);
            if clamped != requested {
                tracing::warn!(requested, clamped, "cells out of range");
            }
            clamped
        });

        if u64::from(self.margin) * 2 >= u64::from(size) {
            return Err(PosterError::validation(format!(
                "margin {} leaves no drawable area on a {size}px canvas",
                self.margin
            )));
        }

        Ok(ResolvedOptions {
            size,
            cells,
            margin: self.margin,
            motif: self.motif,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/options.rs"]
mod tests;
