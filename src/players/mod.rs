//! Player strategies for grid agents.
//!
//! Every strategy is a variant of [`Player`] and is driven through
//! [`Player::turn`], which takes the genome, vision window and RNG for one
//! turn and returns the chosen move.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::context::TurnContext;
use crate::coordinates::Coordinate;
use crate::error::PlayerResult;
use crate::genome::Genome;
use crate::player_config::PlayerConfig;
use crate::vision::VisionWindow;

pub mod candidates;
pub mod color_score;
pub mod linear;
pub mod projection;
pub mod random_player;

use candidates::{DISTRIBUTED_MOVES, FORWARD, FORWARD_FAN, ILLEGAL_MOVES, LEMMING_MOVES};
use projection::ProjectionMatrix;

/// Which strategy a player runs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PlayerKind {
    Forward,
    Random,
    LinearCombination,
    ColorScore,
    Lemming,
    Illegal,
    #[default]
    DistributedColorScore,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 7] = [
        PlayerKind::Forward,
        PlayerKind::Random,
        PlayerKind::LinearCombination,
        PlayerKind::ColorScore,
        PlayerKind::Lemming,
        PlayerKind::Illegal,
        PlayerKind::DistributedColorScore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Forward => "forward",
            PlayerKind::Random => "random",
            PlayerKind::LinearCombination => "linear_combination",
            PlayerKind::ColorScore => "color_score",
            PlayerKind::Lemming => "lemming",
            PlayerKind::Illegal => "illegal",
            PlayerKind::DistributedColorScore => "distributed_color_score",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown player kind: {}", s))
    }
}

/// A constructed strategy.
///
/// Holds only what is fixed at construction (the projection matrix); all
/// per-turn inputs arrive as arguments, so one `Player` can be shared across
/// threads.
#[derive(Clone, Debug, PartialEq)]
pub enum Player {
    Forward,
    Random,
    LinearCombination,
    ColorScore,
    Lemming,
    Illegal,
    DistributedColorScore(ProjectionMatrix),
}

impl Player {
    /// Build a player, drawing any random construction state from `rng`
    pub fn new<R: Rng>(kind: PlayerKind, rng: &mut R) -> Self {
        let player = match kind {
            PlayerKind::Forward => Player::Forward,
            PlayerKind::Random => Player::Random,
            PlayerKind::LinearCombination => Player::LinearCombination,
            PlayerKind::ColorScore => Player::ColorScore,
            PlayerKind::Lemming => Player::Lemming,
            PlayerKind::Illegal => Player::Illegal,
            PlayerKind::DistributedColorScore => {
                Player::DistributedColorScore(ProjectionMatrix::random(rng))
            }
        };
        match &player {
            Player::DistributedColorScore(matrix) => tracing::debug!(
                player = %kind,
                colors = matrix.num_colors(),
                dims = matrix.dims(),
                "built projection player"
            ),
            _ => tracing::debug!(player = %kind, "built player"),
        }
        player
    }

    /// Build the configured player; a seed makes the projection reproducible
    pub fn from_config(config: &PlayerConfig) -> Self {
        match config.projection_seed {
            Some(seed) => Self::new(config.player, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => Self::new(config.player, &mut StdRng::from_entropy()),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Forward => PlayerKind::Forward,
            Player::Random => PlayerKind::Random,
            Player::LinearCombination => PlayerKind::LinearCombination,
            Player::ColorScore => PlayerKind::ColorScore,
            Player::Lemming => PlayerKind::Lemming,
            Player::Illegal => PlayerKind::Illegal,
            Player::DistributedColorScore(_) => PlayerKind::DistributedColorScore,
        }
    }

    /// The fixed list of moves this player chooses among.
    ///
    /// `Random` picks `(1, dy)` for `dy` in -1..=1, listed here for completeness.
    pub fn candidates(&self) -> &'static [Coordinate] {
        const FORWARD_ONLY: [Coordinate; 1] = [FORWARD];
        const DRIFT: [Coordinate; 3] = [
            Coordinate::new(1, -1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ];
        match self {
            Player::Forward => &FORWARD_ONLY,
            Player::Random => &DRIFT,
            Player::LinearCombination | Player::ColorScore => &FORWARD_FAN,
            Player::Lemming => &LEMMING_MOVES,
            Player::Illegal => &ILLEGAL_MOVES,
            Player::DistributedColorScore(_) => &DISTRIBUTED_MOVES,
        }
    }

    /// Genome bits that must be meaningful before a turn is attempted
    pub fn required_genome_bits(&self) -> usize {
        match self {
            Player::DistributedColorScore(matrix) => matrix.dims(),
            _ => 0,
        }
    }

    /// Decide one move.
    pub fn turn<R: Rng>(
        &self,
        genome: &Genome,
        vision: &VisionWindow,
        rng: &mut R,
    ) -> PlayerResult<Coordinate> {
        genome.ensure_width(self.required_genome_bits())?;
        let ctx = TurnContext::new(genome, vision);

        let chosen = match self {
            Player::Forward => random_player::forward_turn(),
            Player::Random => random_player::random_turn(rng),
            Player::LinearCombination => linear::linear_combination_turn(&ctx)?,
            Player::ColorScore => color_score::color_score_turn(&ctx, rng)?,
            Player::Lemming => random_player::lemming_turn(rng)?,
            Player::Illegal => random_player::illegal_turn(rng)?,
            Player::DistributedColorScore(matrix) => {
                projection::distributed_color_score_turn(matrix, &ctx, rng)?
            }
        };

        tracing::trace!(player = %self.kind(), %chosen, "turn decided");
        Ok(chosen)
    }
}
