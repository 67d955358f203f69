//! # Padded Block Reader
//!
//! This module turns a finite byte stream into the lazy sequence of 512-bit
//! message blocks the MD5 compression function consumes, synthesizing the
//! padding tail (a `0x80` terminator byte, zero fill to 448 bits modulo 512,
//! then the original bit length as a 64-bit little-endian field) as a virtual
//! continuation of the real data. The fully padded message is never
//! materialized: memory stays at one block regardless of input size.
//!
//! ## Key Features
//! - **Streaming**: blocks are produced on demand, one pull at a time.
//! - **Five-phase state machine** tracking where in the real-data/padding
//!   tail the reader currently is; transitions are one-directional.
//! - **O(1) memory** regardless of input length.
//!
//! A reader is single-use: once it reports end-of-data it stays exhausted.

use crate::constants::BLOCK_WORDS;
use crate::error::Result;
use crate::source::ByteSource;

/// A 512-bit message block: 16 words, each packed from 4 consecutive input
/// bytes least-significant-byte-first.
pub type MessageBlock = [u32; BLOCK_WORDS];

/// Where in the real-data/padding tail the reader currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Still pulling real bytes from the source.
    Streaming,
    /// Source exhausted and terminator emitted; emitting zero fill.
    PaddingZeroes,
    /// Emitting the low 32 bits of the original bit length.
    LengthLow,
    /// Emitting the high 32 bits of the original bit length.
    LengthHigh,
    /// Padding complete; nothing left to produce.
    Exhausted,
}

/// Wraps a [`ByteSource`] and yields padded message blocks.
#[derive(Debug)]
pub struct PaddedBlockReader<S> {
    source: S,
    phase: Phase,
    /// Bits of the padded stream produced so far (real bytes, the terminator,
    /// and zero fill all count; the length field does not need to).
    stream_bits: u64,
    /// Bit length of the real input, frozen the instant the source runs dry.
    original_bits: u64,
    /// Bytes of the current 32-bit length half emitted so far.
    length_bytes_emitted: u32,
}

impl<S: ByteSource> PaddedBlockReader<S> {
    /// Wraps a source; the reader starts in the streaming phase.
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: Phase::Streaming,
            stream_bits: 0,
            original_bits: 0,
            length_bytes_emitted: 0,
        }
    }

    /// Produces the next byte of the padded stream, or `Ok(None)` once the
    /// length field has been fully emitted.
    fn next_byte(&mut self) -> Result<Option<u8>> {
        match self.phase {
            Phase::Streaming => match self.source.next_byte()? {
                Some(b) => {
                    self.stream_bits = self.stream_bits.wrapping_add(8);
                    Ok(Some(b))
                }
                None => {
                    // Freeze the real length, then emit the terminator byte.
                    // All reads are byte-granular, so the mandated single 1
                    // bit is the byte-aligned 0x80.
                    self.original_bits = self.stream_bits;
                    self.phase = Phase::PaddingZeroes;
                    self.stream_bits = self.stream_bits.wrapping_add(8);
                    log::trace!("source exhausted after {} bits", self.original_bits);
                    Ok(Some(0x80))
                }
            },
            Phase::PaddingZeroes => {
                if self.stream_bits % 512 == 448 {
                    // Zero fill complete; hand out the first length byte now.
                    self.phase = Phase::LengthLow;
                    self.length_bytes_emitted = 1;
                    Ok(Some(self.original_bits as u8))
                } else {
                    self.stream_bits = self.stream_bits.wrapping_add(8);
                    Ok(Some(0x00))
                }
            }
            Phase::LengthLow => {
                let b = (self.original_bits >> (8 * self.length_bytes_emitted)) as u8;
                self.length_bytes_emitted += 1;
                if self.length_bytes_emitted == 4 {
                    self.phase = Phase::LengthHigh;
                    self.length_bytes_emitted = 0;
                }
                Ok(Some(b))
            }
            Phase::LengthHigh => {
                let b = (self.original_bits >> (32 + 8 * self.length_bytes_emitted)) as u8;
                self.length_bytes_emitted += 1;
                if self.length_bytes_emitted == 4 {
                    self.phase = Phase::Exhausted;
                }
                Ok(Some(b))
            }
            Phase::Exhausted => Ok(None),
        }
    }

    /// Assembles the next 16-word message block, or `Ok(None)` once the
    /// padded stream is fully consumed.
    ///
    /// Padding always extends the stream to a whole number of 64-byte blocks,
    /// so end-of-data can only surface on the first byte of a block; partial
    /// blocks are unreachable.
    pub fn next_block(&mut self) -> Result<Option<MessageBlock>> {
        let mut block = [0u32; BLOCK_WORDS];
        for (i, word) in block.iter_mut().enumerate() {
            let mut bytes = [0u8; 4];
            for (j, slot) in bytes.iter_mut().enumerate() {
                match self.next_byte()? {
                    Some(b) => *slot = b,
                    None => {
                        debug_assert!(i == 0 && j == 0, "end-of-data inside a block");
                        return Ok(None);
                    }
                }
            }
            *word = u32::from_le_bytes(bytes);
        }
        Ok(Some(block))
    }
}
