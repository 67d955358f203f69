//! # Digest Engine
//!
//! Folds a sequence of message blocks into the 128-bit MD5 running state (64
//! mixing rounds per block, chained block to block) and renders the final
//! state as a lowercase hex string.
//!
//! **Note**: MD5 is cryptographically broken. Use it for checksums,
//! fingerprints, and interoperating with legacy formats; for anything
//! security-sensitive reach for a modern hash (e.g. SHA-2 or BLAKE3).

use crate::constants::{INIT_A, INIT_B, INIT_C, INIT_D, K, MD5_OUTPUT_SIZE, S};
use crate::error::Result;
use crate::reader::{MessageBlock, PaddedBlockReader};
use crate::source::{ByteSource, SliceSource};

/// The MD5 running state: four 32-bit registers threaded through every block.
#[derive(Debug, Clone)]
pub struct Md5Digest {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Md5Digest {
    /// A fresh engine seeded with the fixed initial register values.
    pub fn new() -> Self {
        Self {
            a: INIT_A,
            b: INIT_B,
            c: INIT_C,
            d: INIT_D,
        }
    }

    /// Mixes one message block into the running state.
    ///
    /// Every addition wraps modulo 2^32; overflow is part of the algorithm,
    /// never a fault.
    pub fn process_block(&mut self, block: &MessageBlock) {
        let (mut a, mut b, mut c, mut d) = (self.a, self.b, self.c, self.d);

        for i in 0..64 {
            // Each quarter of the 64 rounds uses its own nonlinear function
            // and message-word schedule.
            let (f, g) = if i < 16 {
                ((b & c) | (!b & d), i)
            } else if i < 32 {
                ((d & b) | (!d & c), (5 * i + 1) % 16)
            } else if i < 48 {
                (b ^ c ^ d, (3 * i + 5) % 16)
            } else {
                (c ^ (b | !d), (7 * i) % 16)
            };

            let mixed = a
                .wrapping_add(f)
                .wrapping_add(K[i])
                .wrapping_add(block[g]);

            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(mixed.rotate_left(S[i]));
        }

        // Chaining step: fold the mixed registers back into the pre-round
        // values so state carries across blocks.
        self.a = self.a.wrapping_add(a);
        self.b = self.b.wrapping_add(b);
        self.c = self.c.wrapping_add(c);
        self.d = self.d.wrapping_add(d);
    }

    /// Serializes the state to the 16-byte digest, registers A through D,
    /// each little-endian.
    pub fn finalize(self) -> [u8; MD5_OUTPUT_SIZE] {
        let mut out = [0u8; MD5_OUTPUT_SIZE];
        out[0..4].copy_from_slice(&self.a.to_le_bytes());
        out[4..8].copy_from_slice(&self.b.to_le_bytes());
        out[8..12].copy_from_slice(&self.c.to_le_bytes());
        out[12..16].copy_from_slice(&self.d.to_le_bytes());
        out
    }
}

impl Default for Md5Digest {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the MD5 digest of everything the source yields.
///
/// Pulls padded blocks one at a time, so memory stays O(1) regardless of
/// input size.
pub fn md5_digest_bytes<S: ByteSource>(source: S) -> Result<[u8; MD5_OUTPUT_SIZE]> {
    let mut reader = PaddedBlockReader::new(source);
    let mut digest = Md5Digest::new();
    let mut blocks = 0u64;
    while let Some(block) = reader.next_block()? {
        digest.process_block(&block);
        blocks += 1;
    }
    log::debug!("digest complete after {} blocks", blocks);
    Ok(digest.finalize())
}

/// Computes the MD5 digest of everything the source yields and renders it as
/// a 32-character lowercase hex string.
pub fn md5_hex<S: ByteSource>(source: S) -> Result<String> {
    Ok(hex::encode(md5_digest_bytes(source)?))
}

/// Convenience: MD5 hex digest of an in-memory slice.
pub fn md5_hex_slice(data: &[u8]) -> String {
    // a slice source has no failure path
    md5_hex(SliceSource::new(data)).expect("in-memory source cannot fail")
}
