//! Error taxonomy.
//!
//! Learners never fail: unvisited table entries read as 0. The only
//! game-level failure is an illegal move, which the interactive loop
//! turns into a re-prompt instead of ending the session.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game already has a winner.
    #[error("game already won")]
    GameOver,

    /// The pile index does not exist.
    #[error("invalid pile {pile} (there are {piles} piles)")]
    PileOutOfRange { pile: usize, piles: usize },

    /// Zero objects, or more than the pile holds.
    #[error("cannot take {count} from pile {pile} holding {available}")]
    InvalidCount { pile: usize, count: u32, available: u32 },

    /// A participant had no move for a live game.
    #[error("no action chosen for a game in progress")]
    NoAction,
}

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum NimError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    /// Console failure during interactive play, e.g. stdin closed.
    #[error("console i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl NimError {
    /// The move rejection, if this is one.
    #[must_use]
    pub fn as_invalid_move(&self) -> Option<&MoveError> {
        match self {
            NimError::InvalidMove(e) => Some(e),
            NimError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NimError>;
