//! End-to-end properties of the player strategies through the public API.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use grid_players::players::color_score::COLOR_CHUNK_BITS;
use grid_players::players::projection::NUM_COLORS;
use grid_players::vision::VISION_SIZE;
use grid_players::{
    Coordinate, Genome, Player, PlayerError, PlayerKind, VisionWindow, CELL_EMPTY,
};

fn random_vision(rng: &mut ChaCha8Rng) -> VisionWindow {
    let mut rows = [[CELL_EMPTY; VISION_SIZE]; VISION_SIZE];
    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            if rng.gen_bool(0.7) {
                *cell = rng.gen_range(0..NUM_COLORS as i32);
            }
        }
    }
    VisionWindow::new(rows)
}

#[test]
fn bit_decoding_properties() {
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    for _ in 0..200 {
        let genome = Genome::from_u128(rng.gen());
        let start = rng.gen_range(0..140);
        let length = rng.gen_range(0..30);
        assert!(genome.bit_at(start) <= 1);
        assert_eq!(genome.bit_chunk(start, length), genome.bit_range(start, start + length));
        assert_eq!(genome.bit_range(start, start), 0);
    }
}

#[test]
fn vision_at_matches_grid_indexing() {
    let mut rng = ChaCha8Rng::seed_from_u64(101);
    let vision = random_vision(&mut rng);
    let grid = vision.view();
    for y in -2..=2 {
        for x in -2..=2 {
            assert_eq!(
                vision.vision_at(x, y).unwrap(),
                grid[[(2 + y) as usize, (2 + x) as usize]]
            );
        }
    }
    assert_eq!(
        vision.vision_at(-3, 1),
        Err(PlayerError::InvalidVisionOffset { x: -3, y: 1 })
    );
}

#[test]
fn color_score_picks_a_maximum_chunk() {
    let mut rng = ChaCha8Rng::seed_from_u64(102);
    let player = Player::new(PlayerKind::ColorScore, &mut rng);
    for _ in 0..300 {
        let genome = Genome::from_u128(rng.gen());
        let vision = random_vision(&mut rng);
        let chunk = |c: Coordinate| {
            let code = vision.vision_at(c.x, c.y).unwrap();
            (code >= 0).then(|| genome.bit_chunk(COLOR_CHUNK_BITS * code as usize, COLOR_CHUNK_BITS))
        };

        match player.turn(&genome, &vision, &mut rng) {
            Ok(mv) => {
                let best = player.candidates().iter().filter_map(|&c| chunk(c)).max();
                assert_eq!(chunk(mv), best);
            }
            Err(err) => assert_eq!(
                err,
                PlayerError::EmptyCandidateSet {
                    player: PlayerKind::ColorScore
                }
            ),
        }
    }
}

#[test]
fn distributed_picks_a_maximum_projection_score() {
    let mut rng = ChaCha8Rng::seed_from_u64(103);
    let player = Player::new(PlayerKind::DistributedColorScore, &mut rng);
    let Player::DistributedColorScore(matrix) = &player else {
        panic!("expected projection player");
    };

    for _ in 0..300 {
        let genome = Genome::from_u128(rng.gen());
        let vision = random_vision(&mut rng);
        let scores = matrix.scores(&genome);
        let score = |c: Coordinate| {
            let code = vision.vision_at(c.x, c.y).unwrap();
            (code >= 0).then(|| scores[code as usize])
        };

        if let Ok(mv) = player.turn(&genome, &vision, &mut rng) {
            let best = player
                .candidates()
                .iter()
                .filter_map(|&c| score(c))
                .fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(score(mv), Some(best));
        }
    }
}

#[test]
fn linear_combination_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(104);
    let player = Player::new(PlayerKind::LinearCombination, &mut rng);
    for _ in 0..50 {
        let genome = Genome::from_u128(rng.gen());
        let vision = random_vision(&mut rng);
        let first = player.turn(&genome, &vision, &mut rng);
        for seed in 0..10 {
            let again = player.turn(&genome, &vision, &mut ChaCha8Rng::seed_from_u64(seed));
            assert_eq!(again, first);
        }
    }
}

#[test]
fn distributed_ties_split_evenly() {
    let mut rng = ChaCha8Rng::seed_from_u64(105);
    let player = Player::new(PlayerKind::DistributedColorScore, &mut rng);
    let genome = Genome::from_u128(rng.gen());

    // Two candidates share colour 3, so their scores are identical.
    let mut vision = VisionWindow::filled(CELL_EMPTY);
    vision.set(1, 0, 3).unwrap();
    vision.set(-1, 0, 3).unwrap();

    let trials = 2000;
    let mut counts: HashMap<Coordinate, usize> = HashMap::new();
    for _ in 0..trials {
        let mv = player.turn(&genome, &vision, &mut rng).unwrap();
        *counts.entry(mv).or_default() += 1;
    }

    assert_eq!(counts.len(), 2);
    let freq = counts[&Coordinate::new(1, 0)] as f64 / trials as f64;
    assert!((0.4..=0.6).contains(&freq), "forward frequency {}", freq);
}

#[test]
fn scoring_players_fail_when_all_candidates_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(106);
    let genome = Genome::from_u128(u128::MAX);
    let mut vision = VisionWindow::filled(2);

    for kind in [
        PlayerKind::LinearCombination,
        PlayerKind::ColorScore,
        PlayerKind::DistributedColorScore,
    ] {
        let player = Player::new(kind, &mut rng);
        for c in player.candidates() {
            vision.set(c.x, c.y, CELL_EMPTY).unwrap();
        }
        assert_eq!(
            player.turn(&genome, &vision, &mut rng),
            Err(PlayerError::EmptyCandidateSet { player: kind })
        );
    }
}

#[test]
fn color_score_single_visible_cell_scenario() {
    // Chunk for colour 3 (bits 18..24) is 63, every other chunk 0.
    let genome = Genome::from_u128(0b11_1111 << 18);
    let mut vision = VisionWindow::filled(0);
    vision.set(1, 0, CELL_EMPTY).unwrap();
    vision.set(1, -1, CELL_EMPTY).unwrap();
    vision.set(1, 1, 3).unwrap();

    let player = Player::ColorScore;
    let mut rng = ChaCha8Rng::seed_from_u64(107);
    for _ in 0..100 {
        assert_eq!(
            player.turn(&genome, &vision, &mut rng).unwrap(),
            Coordinate::new(1, 1)
        );
    }
}

#[test]
fn random_player_is_uniform_over_forward_moves() {
    let player = Player::Random;
    let genome = Genome::zeroed(0);
    let vision = VisionWindow::filled(CELL_EMPTY);
    let mut rng = ChaCha8Rng::seed_from_u64(108);

    let trials = 10_000;
    let mut counts: HashMap<Coordinate, usize> = HashMap::new();
    for _ in 0..trials {
        *counts
            .entry(player.turn(&genome, &vision, &mut rng).unwrap())
            .or_default() += 1;
    }

    for mv in [
        Coordinate::new(1, -1),
        Coordinate::new(1, 0),
        Coordinate::new(1, 1),
    ] {
        let freq = counts[&mv] as f64 / trials as f64;
        assert!((0.28..=0.38).contains(&freq), "{} frequency {}", mv, freq);
    }
}

#[test]
fn wandering_players_ignore_vision() {
    let genome = Genome::zeroed(0);
    let vision = VisionWindow::filled(CELL_EMPTY);
    let mut rng = ChaCha8Rng::seed_from_u64(109);

    for kind in [PlayerKind::Forward, PlayerKind::Lemming, PlayerKind::Illegal] {
        let player = Player::new(kind, &mut rng);
        for _ in 0..50 {
            let mv = player.turn(&genome, &vision, &mut rng).unwrap();
            assert!(player.candidates().contains(&mv));
        }
    }
}
