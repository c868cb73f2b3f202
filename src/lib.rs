//! Movement strategies for genome-carrying agents on a grid.
//!
//! A [`Player`] turns an agent's [`Genome`] and 5x5 [`VisionWindow`] into one
//! relative [`Coordinate`] per turn. The surrounding simulation owns the
//! world, the agents and their evolution; this crate only decides moves.

pub mod batch;
pub mod context;
pub mod coordinates;
pub mod error;
pub mod genome;
pub mod player_config;
pub mod players;
pub mod vision;

pub use batch::{decide_batch, AgentTurn};
pub use coordinates::Coordinate;
pub use error::{PlayerError, PlayerResult};
pub use genome::Genome;
pub use player_config::{load_config, PlayerConfig};
pub use players::projection::ProjectionMatrix;
pub use players::{Player, PlayerKind};
pub use vision::{VisionWindow, CELL_EMPTY};
