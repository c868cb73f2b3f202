//! Run a player over randomly generated vision windows and report its moves.
//!
//! Useful for eyeballing a strategy's move distribution for a given genome
//! before wiring it into a full simulation.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use grid_players::players::projection::NUM_COLORS;
use grid_players::vision::VISION_SIZE;
use grid_players::{
    decide_batch, load_config, AgentTurn, Genome, Player, PlayerConfig, PlayerError, PlayerKind,
    VisionWindow, CELL_EMPTY,
};

#[derive(Parser, Debug)]
#[command(
    name = "play_turns",
    about = "Run a grid player over random vision windows",
    version
)]
struct Args {
    /// Player strategy to run
    #[arg(long, value_enum, default_value_t = PlayerKind::DistributedColorScore)]
    player: PlayerKind,

    /// YAML config selecting the player (overrides --player)
    #[arg(long)]
    config: Option<String>,

    /// Genome as a hex literal; random 128 bits if omitted
    #[arg(long)]
    genome: Option<String>,

    /// Number of turns to evaluate
    #[arg(long, default_value_t = 1000)]
    turns: usize,

    /// Seed for vision windows, the default genome and tie-breaks
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Probability that a vision cell is empty
    #[arg(long, default_value_t = 0.2)]
    empty_rate: f64,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn random_vision<R: Rng>(rng: &mut R, empty_rate: f64) -> VisionWindow {
    let mut rows = [[CELL_EMPTY; VISION_SIZE]; VISION_SIZE];
    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            if !rng.gen_bool(empty_rate) {
                *cell = rng.gen_range(0..NUM_COLORS as i32);
            }
        }
    }
    VisionWindow::new(rows)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.empty_rate),
        "--empty-rate must be within [0, 1], got {}",
        args.empty_rate
    );

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlayerConfig {
            player: args.player,
            projection_seed: Some(args.seed),
        },
    };
    let player = Player::from_config(&config);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let genome = match &args.genome {
        Some(literal) => literal
            .parse::<Genome>()
            .with_context(|| format!("Failed to parse genome: {}", literal))?,
        None => Genome::from_u128(rng.gen()),
    };

    println!("Player: {}", player.kind());
    println!("  Genome: {} ({} bits)", genome, genome.width());
    println!("  Turns: {}", args.turns);
    println!("  Empty rate: {}", args.empty_rate);

    let turns: Vec<AgentTurn> = (0..args.turns)
        .map(|_| AgentTurn {
            genome: genome.clone(),
            vision: random_vision(&mut rng, args.empty_rate),
        })
        .collect();

    let mut histogram = BTreeMap::new();
    let mut no_move = 0usize;
    for result in decide_batch(&player, &turns, args.seed) {
        match result {
            Ok(mv) => *histogram.entry(mv).or_insert(0usize) += 1,
            Err(PlayerError::EmptyCandidateSet { .. }) => no_move += 1,
            Err(err) => return Err(anyhow::Error::new(err).context("Turn failed")),
        }
    }

    println!("\nChosen moves:");
    for (mv, count) in &histogram {
        let share = *count as f64 / args.turns.max(1) as f64;
        println!("  {:>8}  {:>6}  {:5.1}%", mv.to_string(), count, 100.0 * share);
    }
    println!("  no valid move: {}", no_move);

    Ok(())
}
