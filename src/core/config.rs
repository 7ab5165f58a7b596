//! Configuration types.
//!
//! - `NimConfig`: the starting position
//! - `LearnerConfig`: learning rate, exploration rate, RNG seed
//! - `TrainingConfig`: episode count and progress logging cadence

use serde::{Deserialize, Serialize};

/// Starting position for every episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimConfig {
    /// Initial pile sizes, in pile order.
    pub piles: Vec<u32>,
}

impl Default for NimConfig {
    fn default() -> Self {
        Self {
            piles: vec![1, 3, 5, 7],
        }
    }
}

impl NimConfig {
    /// Create the conventional `[1, 3, 5, 7]` configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom piles.
    ///
    /// Panics if there are no piles or every pile is empty.
    #[must_use]
    pub fn with_piles(mut self, piles: impl Into<Vec<u32>>) -> Self {
        let piles = piles.into();
        assert!(!piles.is_empty(), "Must have at least 1 pile");
        assert!(piles.iter().any(|&p| p > 0), "Must start with at least 1 object");
        self.piles = piles;
        self
    }
}

/// Hyperparameters shared by both temporal-difference variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Learning rate α, constant for the whole run.
    pub alpha: f64,

    /// Probability ε of replacing the greedy move with a random one.
    pub epsilon: f64,

    /// Seed for the learner's own RNG.
    pub seed: u64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            epsilon: 0.1,
            seed: 42,
        }
    }
}

impl LearnerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate. Must lie in `(0, 1]`.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        self.alpha = alpha;
        self
    }

    /// Set the exploration rate. Must lie in `[0, 1]`.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        assert!((0.0..=1.0).contains(&epsilon), "Epsilon must be in [0, 1]");
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Self-play training run parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes.
    pub episodes: usize,

    /// Emit a progress line every this many episodes (0 = never).
    pub log_interval: usize,

    /// Starting position.
    pub game: NimConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            log_interval: 1_000,
            game: NimConfig::default(),
        }
    }
}

impl TrainingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    #[must_use]
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    #[must_use]
    pub fn with_game(mut self, game: NimConfig) -> Self {
        self.game = game;
        self
    }
}
