//! Bit-string genome read positionally by the player strategies.
//!
//! Bits are stored little-endian: bit 0 is the least significant bit of byte 0.
//! The genome behaves like an infinite-precision unsigned integer, so every
//! read past the stored bytes yields zero. The declared `width` is only used
//! to detect genomes that are too short for a strategy.
use std::fmt;
use std::str::FromStr;

use crate::error::{PlayerError, PlayerResult};

/// Immutable-per-turn genome value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Genome {
    bytes: Vec<u8>,
    width: usize,
}

impl Genome {
    /// Create an all-zero genome with the given bit width
    pub fn zeroed(width: usize) -> Self {
        Self {
            bytes: vec![0u8; (width + 7) / 8],
            width,
        }
    }

    /// Create a 128-bit genome from an integer
    pub fn from_u128(value: u128) -> Self {
        Self {
            bytes: value.to_le_bytes().to_vec(),
            width: 128,
        }
    }

    /// Create a genome from little-endian bytes; the width is 8 bits per byte
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            width: bytes.len() * 8,
        }
    }

    /// Create a genome from individual bits, `bits[0]` being bit 0
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut genome = Self::zeroed(bits.len());
        for (pos, &bit) in bits.iter().enumerate() {
            genome.set_bit(pos, bit);
        }
        genome
    }

    /// Redeclare the meaningful width without touching the stored bits
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Declared bit width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fail unless at least `required_bits` bits are meaningful
    pub fn ensure_width(&self, required_bits: usize) -> PlayerResult<()> {
        if self.width < required_bits {
            return Err(PlayerError::MalformedGenome {
                required_bits,
                actual_bits: self.width,
            });
        }
        Ok(())
    }

    /// Get the bit at `pos` (0 or 1); positions past the stored bytes read as 0
    #[inline]
    pub fn bit_at(&self, pos: usize) -> u8 {
        let byte_index = pos / 8;
        let bit_offset = pos % 8;
        self.bytes
            .get(byte_index)
            .map_or(0, |byte| (byte >> bit_offset) & 1)
    }

    /// Set the bit at `pos`, growing the genome if needed
    pub fn set_bit(&mut self, pos: usize, value: bool) {
        let byte_index = pos / 8;
        let bit_offset = pos % 8;
        if byte_index >= self.bytes.len() {
            self.bytes.resize(byte_index + 1, 0);
        }
        if value {
            self.bytes[byte_index] |= 1 << bit_offset;
        } else {
            self.bytes[byte_index] &= !(1 << bit_offset);
        }
        self.width = self.width.max(pos + 1);
    }

    /// Integer formed by bits `[start, stop)`.
    ///
    /// `stop <= start` yields 0. Ranges wider than 64 bits keep their low 64 bits.
    #[inline]
    pub fn bit_range(&self, start: usize, stop: usize) -> u64 {
        self.bit_chunk(start, stop.saturating_sub(start))
    }

    /// Integer formed by `length` bits starting at `start`
    #[inline]
    pub fn bit_chunk(&self, start: usize, length: usize) -> u64 {
        let mut value = 0u64;
        for i in 0..length.min(u64::BITS as usize) {
            if self.bit_at(start + i) == 1 {
                value |= 1 << i;
            }
        }
        value
    }
}

impl FromStr for Genome {
    type Err = PlayerError;

    /// Parse a hexadecimal literal (optional `0x` prefix); 4 bits per digit
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .trim_start_matches("0x")
            .trim_start_matches("0X")
            .replace('_', "");
        if digits.is_empty() {
            return Err(PlayerError::InvalidGenomeLiteral(s.to_string()));
        }

        let mut genome = Self::zeroed(digits.len() * 4);
        for (i, c) in digits.chars().rev().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| PlayerError::InvalidGenomeLiteral(s.to_string()))?;
            for bit in 0..4 {
                if (nibble >> bit) & 1 == 1 {
                    genome.set_bit(4 * i + bit, true);
                }
            }
        }
        Ok(genome)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        let digits = ((self.width + 3) / 4).max(1);
        for i in (0..digits).rev() {
            write!(f, "{:x}", self.bit_chunk(4 * i, 4))?;
        }
        Ok(())
    }
}
