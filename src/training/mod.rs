//! Driving games: training, evaluation and interactive play.
//!
//! ## Overview
//!
//! - **EpisodeRunner**: plays one game and feeds each seat's transitions
//!   to its learner with delayed credit assignment
//! - **Trainer** / [`train`]: self-play episodes against one learner
//! - [`play_matches`]: greedy head-to-head games and a [`MatchReport`]
//! - [`play_against_human`]: one game against a [`HumanInput`]
//!
//! ## Usage
//!
//! ```
//! use nim_td::core::LearnerConfig;
//! use nim_td::learning::{QLearning, Sarsa};
//! use nim_td::training::{play_matches, train};
//!
//! let mut sarsa = train(Sarsa::new(LearnerConfig::default()), 500)?;
//! let mut q = train(QLearning::new(LearnerConfig::default()), 500)?;
//!
//! let report = play_matches(&mut sarsa, &mut q, 20)?;
//! assert_eq!(report.games(), 20);
//! # Ok::<(), nim_td::core::NimError>(())
//! ```

pub mod episode;
pub mod interactive;
pub mod self_play;

pub use episode::{EpisodeRunner, EpisodeStats, Lineup, Mode};
pub use interactive::{play_against_human, play_against_human_from, ConsoleHuman, HumanInput};
pub use self_play::{play_matches, play_matches_from, train, MatchReport, Trainer, TrainingSummary};
