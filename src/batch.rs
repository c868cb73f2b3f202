//! Evaluate many agents' turns in parallel with a shared player.
//!
//! Every agent gets its own RNG derived from the batch seed and its index, so
//! results do not depend on how rayon schedules the work.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::coordinates::Coordinate;
use crate::error::PlayerResult;
use crate::genome::Genome;
use crate::players::Player;
use crate::vision::VisionWindow;

/// Large odd constant spreading agent indices across the seed space.
pub const RNG_DERIVATION_PRIME: u64 = 0x9E37_79B9_7F4A_7C15;

/// Inputs for one agent's turn.
#[derive(Clone, Debug)]
pub struct AgentTurn {
    pub genome: Genome,
    pub vision: VisionWindow,
}

/// Derive the RNG for the agent at `index`
pub fn derive_agent_rng(seed: u64, index: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add((index as u64).wrapping_mul(RNG_DERIVATION_PRIME)))
}

/// Decide every turn; results come back in input order.
pub fn decide_batch(player: &Player, turns: &[AgentTurn], seed: u64) -> Vec<PlayerResult<Coordinate>> {
    turns
        .par_iter()
        .enumerate()
        .map(|(index, turn)| {
            let mut rng = derive_agent_rng(seed, index);
            player.turn(&turn.genome, &turn.vision, &mut rng)
        })
        .collect()
}
