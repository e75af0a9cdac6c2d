use crate::foundation::core::Rect;

/// Square grid of `cells x cells` laid over the canvas interior.
///
/// Every cell edge comes from [`CanvasGeometry::edge`], so neighbours share edges exactly and
/// the last edge lands on `size - margin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub size: u32,
    pub margin: u32,
    pub cells: u32,
}

impl CanvasGeometry {
    pub fn new(size: u32, margin: u32, cells: u32) -> Self {
        debug_assert!(cells >= 1);
        // At least one pixel of interior survives, even for params not built by `resolve`.
        let margin = margin.min(size.saturating_sub(1) / 2);
        Self {
            size,
            margin,
            cells,
        }
    }

    /// Edge length of the drawable interior.
    pub fn inner(&self) -> f64 {
        f64::from(self.size.saturating_sub(self.margin.saturating_mul(2)))
    }

    pub fn interior(&self) -> Rect {
        let lo = f64::from(self.margin);
        let hi = f64::from(self.size.saturating_sub(self.margin));
        Rect::new(lo, lo, hi, hi)
    }

    /// Position of grid line `i` (0..=cells) along either axis.
    pub fn edge(&self, i: u32) -> f64 {
        // inner * i is an exact integer in f64, leaving one rounding step.
        f64::from(self.margin) + (self.inner() * f64::from(i)) / f64::from(self.cells)
    }

    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            self.edge(col),
            self.edge(row),
            self.edge(col + 1),
            self.edge(row + 1),
        )
    }

    /// `(col, row, rect)` for every cell, row-major.
    pub fn cell_rects(&self) -> impl Iterator<Item = (u32, u32, Rect)> + '_ {
        (0..self.cells).flat_map(move |row| {
            (0..self.cells).map(move |col| (col, row, self.cell_rect(col, row)))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
