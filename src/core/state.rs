//! Nim positions and the live game.
//!
//! ## Position
//!
//! Ordered pile sizes. Order is identity: `[1, 2]` and `[2, 1]` are
//! different positions because pile indices in actions refer to slots.
//!
//! ## GameState
//!
//! The position plus whose turn it is and the winner, if any. Normal play:
//! whoever empties the last pile wins.

use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::config::NimConfig;
use super::error::{MoveError, Result};
use super::player::PlayerId;

/// Pile sizes, in pile order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    piles: SmallVec<[u32; 8]>,
}

impl Position {
    /// Create a position from pile sizes.
    #[must_use]
    pub fn new(piles: impl IntoIterator<Item = u32>) -> Self {
        Self {
            piles: piles.into_iter().collect(),
        }
    }

    /// Pile sizes in order.
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Objects left across all piles.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.piles.iter().map(|&p| u64::from(p)).sum()
    }

    /// True when every pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.iter().all(|&p| p == 0)
    }

    /// Every legal `(pile, count)` pair, each exactly once.
    ///
    /// Recomputed on every call. Callers must treat the result as an
    /// unordered set.
    ///
    /// ```
    /// use nim_td::core::{Action, Position};
    ///
    /// let actions = Position::new([1, 0, 2]).available_actions();
    /// assert_eq!(actions.len(), 3);
    /// assert!(actions.contains(&Action::new(2, 2)));
    /// assert!(Position::new([0, 0]).available_actions().is_empty());
    /// ```
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        self.piles
            .iter()
            .enumerate()
            .flat_map(|(pile, &size)| (1..=size).map(move |count| Action::new(pile, count)))
            .collect()
    }

    /// Check an action against this position without applying it.
    pub fn validate(&self, action: Action) -> std::result::Result<(), MoveError> {
        let available = *self.piles.get(action.pile).ok_or(MoveError::PileOutOfRange {
            pile: action.pile,
            piles: self.piles.len(),
        })?;
        if action.count < 1 || action.count > available {
            return Err(MoveError::InvalidCount {
                pile: action.pile,
                count: action.count,
                available,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.piles.as_slice())
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    position: Position,
    player: PlayerId,
    winner: Option<PlayerId>,
    history: Vec<ActionRecord>,
}

impl GameState {
    /// Start a game from the configured piles, seat 0 to move.
    #[must_use]
    pub fn new(config: &NimConfig) -> Self {
        Self::from_position(Position::new(config.piles.iter().copied()))
    }

    /// Start a game from an arbitrary position, seat 0 to move.
    ///
    /// An all-empty position starts with no winner; every move on it is
    /// rejected as out of range or over-large.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            player: PlayerId::FIRST,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Seat to move.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The winner, once the last pile has been emptied.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once a winner is set.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Moves played so far.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Play `action` for the seat to move.
    ///
    /// On error nothing changes. On success the pile shrinks by
    /// `action.count`; if that empties the board the mover wins, otherwise
    /// the turn passes.
    pub fn apply_move(&mut self, action: Action) -> Result<()> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver.into());
        }
        self.position.validate(action)?;

        self.position.piles[action.pile] -= action.count;
        self.history.push(ActionRecord {
            player: self.player,
            action,
            ply: self.history.len() as u32,
        });

        if self.position.is_empty() {
            self.winner = Some(self.player);
        } else {
            self.player = self.player.other();
        }
        Ok(())
    }
}
