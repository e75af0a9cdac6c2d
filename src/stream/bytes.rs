use sha2::{Digest as _, Sha256};

/// Bytes produced per SHA-256 block.
pub const BLOCK_LEN: usize = 32;

/// Deterministic, unbounded byte sequence derived from a seed string.
///
/// Block 0 is `SHA-256(seed)`. Block `k` is `SHA-256(block[k-1] || k)` with `k` encoded as
/// 8 big-endian bytes. The stream is the concatenation of blocks in counter order, so the
/// same seed yields the same bytes on every machine.
///
/// Reading advances a cursor; the sequence itself never changes, and [`ByteStream::byte_at`]
/// gives random access to it.
#[derive(Clone, Debug)]
pub struct ByteStream {
    root: [u8; BLOCK_LEN],
    block: [u8; BLOCK_LEN],
    block_index: u64,
    offset: usize,
    consumed: u64,
}

impl ByteStream {
    pub fn new(seed: &str) -> Self {
        let root: [u8; BLOCK_LEN] = Sha256::digest(seed.as_bytes()).into();
        Self {
            root,
            block: root,
            block_index: 0,
            offset: 0,
            consumed: 0,
        }
    }

    /// Number of bytes read so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn next_u8(&mut self) -> u8 {
        if self.offset == BLOCK_LEN {
            self.block_index += 1;
            self.block = chain_block(&self.block, self.block_index);
            self.offset = 0;
        }
        let b = self.block[self.offset];
        self.offset += 1;
        self.consumed += 1;
        b
    }

    /// Next four bytes, big-endian.
    pub fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill(&mut buf);
        u32::from_be_bytes(buf)
    }

    /// Next byte mapped onto `[0, 1]`.
    pub fn next_unit(&mut self) -> f64 {
        crate::foundation::math::unit_from_byte(self.next_u8())
    }

    pub fn next_rgb(&mut self) -> [u8; 3] {
        let mut buf = [0u8; 3];
        self.fill(&mut buf);
        buf
    }

    pub fn fill(&mut self, out: &mut [u8]) {
        for slot in out.iter_mut() {
            *slot = self.next_u8();
        }
    }

    /// Byte at absolute `index`, independent of the read cursor.
    pub fn byte_at(&self, index: u64) -> u8 {
        let target = index / BLOCK_LEN as u64;
        let offset = (index % BLOCK_LEN as u64) as usize;
        if target == self.block_index {
            return self.block[offset];
        }

        let (mut block, mut k) = if target > self.block_index {
            (self.block, self.block_index)
        } else {
            (self.root, 0)
        };
        while k < target {
            k += 1;
            block = chain_block(&block, k);
        }
        block[offset]
    }
}

impl Iterator for ByteStream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_u8())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

fn chain_block(prev: &[u8; BLOCK_LEN], counter: u64) -> [u8; BLOCK_LEN] {
    let mut h = Sha256::new();
    h.update(prev);
    h.update(counter.to_be_bytes());
    h.finalize().into()
}

#[cfg(test)]
#[path = "../../tests/unit/stream/bytes.rs"]
mod tests;
