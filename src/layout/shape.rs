/// Closed set of per-cell motifs.
///
/// The discriminant order is part of the output format: reordering variants changes every
/// poster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Rotated square.
    Square,
    /// Circle.
    Circle,
    /// Rotated equilateral triangle.
    Triangle,
    /// Whole cell split along a diagonal into two colored halves.
    DiagonalSplit,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::DiagonalSplit,
    ];

    /// Reduce any selector into range; never fails.
    pub fn from_selector(selector: u8) -> Self {
        Self::ALL[usize::from(selector) % Self::ALL.len()]
    }
}
