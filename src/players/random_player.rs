//! Players that ignore genome and vision: forward, random drift, lemming, illegal.

use rand::Rng;

use crate::coordinates::Coordinate;
use crate::error::PlayerResult;
use crate::players::candidates::{choose_uniform, FORWARD, ILLEGAL_MOVES, LEMMING_MOVES};
use crate::players::PlayerKind;

/// Always step forward.
pub fn forward_turn() -> Coordinate {
    FORWARD
}

/// Step forward, drifting up, down or not at all with equal probability.
pub fn random_turn<R: Rng>(rng: &mut R) -> Coordinate {
    Coordinate::new(1, rng.gen_range(-1..=1))
}

/// Uniform choice over the lemming moves, mostly backwards.
pub fn lemming_turn<R: Rng>(rng: &mut R) -> PlayerResult<Coordinate> {
    choose_uniform(PlayerKind::Lemming, &LEMMING_MOVES, rng)
}

/// Uniform choice over moves two columns ahead, which the simulation must reject.
pub fn illegal_turn<R: Rng>(rng: &mut R) -> PlayerResult<Coordinate> {
    choose_uniform(PlayerKind::Illegal, &ILLEGAL_MOVES, rng)
}
