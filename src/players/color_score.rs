use rand::Rng;

use crate::context::TurnContext;
use crate::coordinates::Coordinate;
use crate::error::PlayerResult;
use crate::players::candidates::{choose_best, restrict, FORWARD_FAN};
use crate::players::PlayerKind;

/// Bits of genome allotted to each colour code.
pub const COLOR_CHUNK_BITS: usize = 6;

/// Score each visible forward move by the 6-bit genome chunk its colour
/// selects, then pick uniformly among the best.
///
/// Colour `c` reads bits `6c..6c+6`, so every code seen must have its chunk
/// inside the genome's declared width.
pub fn color_score_turn<R: Rng>(ctx: &TurnContext<'_>, rng: &mut R) -> PlayerResult<Coordinate> {
    let restricted = restrict(PlayerKind::ColorScore, ctx, &FORWARD_FAN, |v| v >= 0)?;

    let mut scored = Vec::with_capacity(restricted.len());
    for seen in restricted {
        let start = COLOR_CHUNK_BITS * seen.code as usize;
        ctx.genome.ensure_width(start + COLOR_CHUNK_BITS)?;
        scored.push((seen.coord, ctx.bit_chunk(start, COLOR_CHUNK_BITS)));
    }

    choose_best(PlayerKind::ColorScore, &scored, rng)
}
