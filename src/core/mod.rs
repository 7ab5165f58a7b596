//! Core types: seats, RNG, moves, positions, errors, configuration.
//!
//! Everything here is independent of how a participant picks its moves.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap, SEATS};
pub use rng::GameRng;
pub use config::{LearnerConfig, NimConfig, TrainingConfig};
pub use action::{Action, ActionRecord, Transition};
pub use state::{GameState, Position};
pub use error::{MoveError, NimError, Result};
