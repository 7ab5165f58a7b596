//! Moves and learning transitions.
//!
//! An `Action` removes `count` objects from pile `pile`. A `Transition`
//! is the unit a learner consumes: the position a seat moved from, the
//! move it made, the position it next observed, and the reward earned.

use super::player::PlayerId;
use super::state::Position;

/// Remove `count` objects from pile `pile`.
///
/// ```
/// use nim_td::core::Action;
///
/// let take = Action::new(2, 3);
/// assert_eq!(take.pile, 2);
/// assert_eq!(take.count, 3);
/// assert_eq!(take.to_string(), "take 3 from pile 2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    /// Index of the pile to draw from.
    pub pile: usize,

    /// Objects to remove; legal only when `1 <= count <= piles[pile]`.
    pub count: u32,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(pile: usize, count: u32) -> Self {
        Self { pile, count }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}

impl From<(usize, u32)> for Action {
    fn from((pile, count): (usize, u32)) -> Self {
        Self::new(pile, count)
    }
}

/// A move as it was played, kept in the game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    /// The seat that moved.
    pub player: PlayerId,

    /// The move made.
    pub action: Action,

    /// Zero-based ply number.
    pub ply: u32,
}

/// One step of experience for a single seat.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Position the seat moved from.
    pub state: Position,

    /// Move the seat made there.
    pub action: Action,

    /// Position observed when the move's consequence became known.
    pub next_state: Position,

    /// +1 win, -1 loss, 0 otherwise.
    pub reward: f64,
}

impl Transition {
    /// Create a transition.
    #[must_use]
    pub fn new(state: Position, action: Action, next_state: Position, reward: f64) -> Self {
        Self {
            state,
            action,
            next_state,
            reward,
        }
    }
}
