//! Fixed candidate move lists and the vision filter applied to them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::context::TurnContext;
use crate::coordinates::Coordinate;
use crate::error::{PlayerError, PlayerResult};
use crate::players::PlayerKind;

pub const FORWARD: Coordinate = Coordinate::new(1, 0);

/// Forward and the two forward diagonals. Order matters for
/// [`crate::players::linear`], which indexes into the filtered list.
pub const FORWARD_FAN: [Coordinate; 3] = [
    Coordinate::new(1, 0),
    Coordinate::new(1, -1),
    Coordinate::new(1, 1),
];

pub const LEMMING_MOVES: [Coordinate; 4] = [
    Coordinate::new(-1, -1),
    Coordinate::new(1, 0),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, 1),
];

/// Two columns ahead, outside the 8-neighbourhood.
pub const ILLEGAL_MOVES: [Coordinate; 3] = [
    Coordinate::new(2, -1),
    Coordinate::new(2, 0),
    Coordinate::new(2, 1),
];

pub const DISTRIBUTED_MOVES: [Coordinate; 5] = [
    Coordinate::new(1, 0),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, 1),
    Coordinate::new(0, 1),
    Coordinate::new(1, 1),
];

/// A candidate that survived filtering, with the vision code under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeenMove {
    pub coord: Coordinate,
    pub code: i32,
}

/// Keep the candidates whose vision value passes `accept`, preserving order.
///
/// Fails with `EmptyCandidateSet` when nothing survives.
pub fn restrict(
    player: PlayerKind,
    ctx: &TurnContext<'_>,
    candidates: &[Coordinate],
    accept: impl Fn(i32) -> bool,
) -> PlayerResult<Vec<SeenMove>> {
    let mut seen = Vec::with_capacity(candidates.len());
    for &coord in candidates {
        let code = ctx.vision_at(coord.x, coord.y)?;
        if accept(code) {
            seen.push(SeenMove { coord, code });
        }
    }

    if seen.is_empty() {
        return Err(PlayerError::EmptyCandidateSet { player });
    }
    Ok(seen)
}

/// Pick one coordinate uniformly at random
pub fn choose_uniform<R: Rng>(
    player: PlayerKind,
    moves: &[Coordinate],
    rng: &mut R,
) -> PlayerResult<Coordinate> {
    moves
        .choose(rng)
        .copied()
        .ok_or(PlayerError::EmptyCandidateSet { player })
}

/// Uniform choice among the moves whose score equals the maximum.
///
/// Ties are detected with exact equality.
pub fn choose_best<R: Rng, S: PartialOrd + Copy>(
    player: PlayerKind,
    scored: &[(Coordinate, S)],
    rng: &mut R,
) -> PlayerResult<Coordinate> {
    let Some(&(_, first)) = scored.first() else {
        return Err(PlayerError::EmptyCandidateSet { player });
    };
    let max_score = scored
        .iter()
        .map(|&(_, score)| score)
        .fold(first, |best, score| if score > best { score } else { best });

    let tied: Vec<Coordinate> = scored
        .iter()
        .filter(|&&(_, score)| score == max_score)
        .map(|&(coord, _)| coord)
        .collect();

    tracing::trace!(%player, tied = tied.len(), of = scored.len(), "scored candidates");
    choose_uniform(player, &tied, rng)
}
