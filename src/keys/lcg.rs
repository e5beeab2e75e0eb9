//! Linear-congruential keystream for the oldest legacy builds.
//!
//! Very old AutoIt builds share the legacy container layout but obfuscate
//! fields with a plain 16-bit LCG instead of the twister. The parser selects
//! this path when the container password does not decode to printable ASCII
//! under the newer generator.

/// Keystream generator for old-format legacy records.
pub(crate) struct Lcg {
    seed: u32,
}

impl Lcg {
    pub(crate) fn new(seed: u32) -> Self {
        Lcg { seed }
    }

    /// Extract the next keystream byte (low byte of bits 16..30 of the state).
    pub(crate) fn next_byte(&mut self) -> u8 {
        self.seed = self.seed.wrapping_mul(0x343FD).wrapping_add(0x26_9EC3);
        ((self.seed >> 16) & 0x7FFF) as u8
    }
}
