pub use kurbo::{Point, Rect, Vec2};

/// Minimum channel sum a brightened color must reach.
const BRIGHTEN_FLOOR: u16 = 180;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Lift dark colors so they stay visible against a dark background.
    ///
    /// When the channel sum is below 180 every channel gets the same bump,
    /// saturating at 255.
    pub fn brightened(self) -> Self {
        let sum = u16::from(self.r) + u16::from(self.g) + u16::from(self.b);
        if sum >= BRIGHTEN_FLOOR {
            return self;
        }
        let bump = (BRIGHTEN_FLOOR - sum) / 3 + 1;
        let lift = |c: u8| (u16::from(c) + bump).min(255) as u8;
        Self::new(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
