use crate::foundation::core::Vec2;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Map a byte onto `[0, 1]` (255 maps to exactly 1.0).
pub(crate) fn unit_from_byte(b: u8) -> f64 {
    f64::from(b) / 255.0
}

/// Linear rescale of a byte's `[0, 255]` range onto `[lo, hi]`.
///
/// Only basic IEEE-754 operations are used, so the result is identical on every platform.
pub(crate) fn byte_to_range(b: u8, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * unit_from_byte(b)
}

/// Unit vector at `angle` radians.
///
/// `libm` evaluates sin/cos with the same software routines on every target, so the result does
/// not depend on the platform's C math library.
pub(crate) fn unit_vector(angle: f64) -> Vec2 {
    Vec2::new(libm::cos(angle), libm::sin(angle))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
