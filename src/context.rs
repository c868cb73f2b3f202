//! Per-turn inputs handed to the decision functions.

use crate::error::PlayerResult;
use crate::genome::Genome;
use crate::vision::VisionWindow;

/// Borrowed genome and vision for a single turn.
///
/// Built fresh for every call and dropped when the turn returns, so a player
/// never holds state from one agent's turn while deciding another's.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    pub genome: &'a Genome,
    pub vision: &'a VisionWindow,
}

impl<'a> TurnContext<'a> {
    pub fn new(genome: &'a Genome, vision: &'a VisionWindow) -> Self {
        Self { genome, vision }
    }

    #[inline]
    pub fn bit_at(&self, pos: usize) -> u8 {
        self.genome.bit_at(pos)
    }

    #[inline]
    pub fn bit_range(&self, start: usize, stop: usize) -> u64 {
        self.genome.bit_range(start, stop)
    }

    #[inline]
    pub fn bit_chunk(&self, start: usize, length: usize) -> u64 {
        self.genome.bit_chunk(start, length)
    }

    #[inline]
    pub fn vision_at(&self, x: i32, y: i32) -> PlayerResult<i32> {
        self.vision.vision_at(x, y)
    }
}
