//! # nim-td
//!
//! Tabular temporal-difference learning for Nim by self-play.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: each learner owns its value table and its RNG.
//!    Nothing is global, so a seed reproduces a run exactly.
//!
//! 2. **One update rule, two targets**: SARSA and Q-learning share action
//!    selection and `Q += α(r + target − Q)`; only the bootstrap target
//!    differs.
//!
//! 3. **Errors are values**: illegal moves come back as `NimError`, so the
//!    interactive loop can re-prompt instead of unwinding.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, moves, positions, errors, configuration
//! - `learning`: value table, ε-greedy selection, TD learners
//! - `training`: episode runner, self-play training, evaluation,
//!   interactive play

pub mod core;
pub mod learning;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    Action, GameRng, GameState, LearnerConfig, MoveError, NimConfig, NimError, PlayerId,
    PlayerMap, Position, TrainingConfig, Transition,
};

pub use crate::learning::{
    Bootstrap, Learner, MaxBootstrap, QLearning, SampledBootstrap, Sarsa, TdLearner, ValueTable,
};

pub use crate::training::{
    play_against_human, play_matches, train, ConsoleHuman, EpisodeRunner, HumanInput, Lineup,
    MatchReport, Mode, Trainer,
};
