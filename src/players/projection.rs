//! Random-projection colour scoring.
//!
//! A fixed matrix maps the first 100 genome bits to one score per colour
//! code. The matrix is drawn once per player and never changes.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::context::TurnContext;
use crate::coordinates::Coordinate;
use crate::error::{PlayerError, PlayerResult};
use crate::genome::Genome;
use crate::players::candidates::{choose_best, restrict, DISTRIBUTED_MOVES};
use crate::players::PlayerKind;

/// Number of distinct colour codes a vision cell can hold
pub const NUM_COLORS: usize = 16;
/// Genome bits fed through the projection
pub const PROJECTED_BITS: usize = 100;

/// `NUM_COLORS x PROJECTED_BITS` map with every row centred on zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionMatrix {
    reducer: Array2<f64>,
}

impl ProjectionMatrix {
    /// Draw a standard-normal matrix of the default shape
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::random_with_shape(rng, NUM_COLORS, PROJECTED_BITS)
    }

    pub fn random_with_shape<R: Rng>(rng: &mut R, num_colors: usize, dims: usize) -> Self {
        let reducer = Array2::from_shape_simple_fn((num_colors, dims), || {
            rng.sample::<f64, _>(StandardNormal)
        });
        Self::from_array(reducer)
    }

    /// Use the given entries, subtracting each row's mean
    pub fn from_array(mut reducer: Array2<f64>) -> Self {
        if let Some(means) = reducer.mean_axis(Axis(1)) {
            reducer -= &means.insert_axis(Axis(1));
        }
        Self { reducer }
    }

    pub fn num_colors(&self) -> usize {
        self.reducer.nrows()
    }

    /// Number of genome bits read
    pub fn dims(&self) -> usize {
        self.reducer.ncols()
    }

    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.reducer.view()
    }

    /// Score of every colour code for this genome
    pub fn scores(&self, genome: &Genome) -> Array1<f64> {
        let bits = Array1::from_shape_fn(self.dims(), |i| f64::from(genome.bit_at(i)));
        self.reducer.dot(&bits)
    }
}

/// Move to the visible cell whose colour the projection scores highest.
///
/// Ties use exact floating-point equality, so in practice they only occur
/// between cells of the same colour.
pub fn distributed_color_score_turn<R: Rng>(
    matrix: &ProjectionMatrix,
    ctx: &TurnContext<'_>,
    rng: &mut R,
) -> PlayerResult<Coordinate> {
    let color_scores = matrix.scores(ctx.genome);
    let restricted = restrict(
        PlayerKind::DistributedColorScore,
        ctx,
        &DISTRIBUTED_MOVES,
        |v| v >= 0,
    )?;

    let mut scored = Vec::with_capacity(restricted.len());
    for seen in restricted {
        let score = color_scores.get(seen.code as usize).copied().ok_or(
            PlayerError::ColorCodeOutOfRange {
                code: seen.code,
                num_colors: matrix.num_colors(),
            },
        )?;
        scored.push((seen.coord, score));
    }

    choose_best(PlayerKind::DistributedColorScore, &scored, rng)
}
