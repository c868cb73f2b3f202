//! Error type shared by every player strategy.

use thiserror::Error;

use crate::players::PlayerKind;

/// Failures a turn (or the construction of its inputs) can produce.
///
/// Bit decoding itself never fails; these all come from reading the vision
/// window or from a strategy running out of legal moves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    /// `vision_at` was asked for a cell outside the 5x5 window.
    #[error("vision offset ({x}, {y}) is outside [-2, 2]")]
    InvalidVisionOffset { x: i32, y: i32 },

    /// Every candidate move was filtered out by the vision window.
    #[error("{player} player has no valid candidate move")]
    EmptyCandidateSet { player: PlayerKind },

    /// The genome is narrower than the strategy reads.
    #[error("genome has {actual_bits} bits but {required_bits} are required")]
    MalformedGenome {
        required_bits: usize,
        actual_bits: usize,
    },

    /// A vision window was built from an array that is not 5x5.
    #[error("vision window must be 5x5, got {rows}x{cols}")]
    InvalidVisionShape { rows: usize, cols: usize },

    /// A colour code has no row in the projection matrix.
    #[error("colour code {code} has no projection row (matrix has {num_colors})")]
    ColorCodeOutOfRange { code: i32, num_colors: usize },

    /// A genome string could not be parsed as hexadecimal.
    #[error("invalid genome literal: {0:?}")]
    InvalidGenomeLiteral(String),
}

pub type PlayerResult<T> = Result<T, PlayerError>;
