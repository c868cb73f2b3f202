use crate::context::TurnContext;
use crate::coordinates::Coordinate;
use crate::error::PlayerResult;
use crate::players::candidates::{restrict, FORWARD_FAN};
use crate::players::PlayerKind;
use crate::vision::{CELL_EMPTY, VISION_CELLS, VISION_RADIUS, VISION_SIZE};

/// Deterministic move from a genome-weighted sum over the vision window.
///
/// Each of the 25 cells gets a 2-bit weight (bits `2i..2i+2`). Cell `i` is
/// read at `x = i / 5 - 2`, `y = i % 5 - 2`, so the weights walk the window
/// column by column. The sum, reduced modulo the number of visible forward
/// moves, picks one of them. Empty cells contribute -1 times their weight,
/// and a negative sum still maps to a non-negative index.
pub fn linear_combination_turn(ctx: &TurnContext<'_>) -> PlayerResult<Coordinate> {
    let restricted = restrict(PlayerKind::LinearCombination, ctx, &FORWARD_FAN, |v| {
        v > CELL_EMPTY
    })?;

    let mut s: i64 = 0;
    for i in 0..VISION_CELLS {
        let x = (i / VISION_SIZE) as i32 - VISION_RADIUS;
        let y = (i % VISION_SIZE) as i32 - VISION_RADIUS;
        let weight = ctx.bit_range(2 * i, 2 * i + 2) as i64;
        s += weight * i64::from(ctx.vision_at(x, y)?);
    }

    let index = s.rem_euclid(restricted.len() as i64) as usize;
    Ok(restricted[index].coord)
}
