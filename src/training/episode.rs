//! One game from the opening position to a winner.
//!
//! ## Credit assignment
//!
//! A seat's move at ply k is only judged once its opponent has replied,
//! so the runner keeps one pending `(position, action)` per seat:
//!
//! - when play returns to a seat, its pending move is finalised with
//!   reward 0 and the position it now faces;
//! - when the game ends, both seats' pending moves are finalised against
//!   the terminal position, +1 for the winner and −1 for the loser. This
//!   is the only update the losing seat's last move ever receives.

use crate::core::{
    Action, GameState, MoveError, NimConfig, NimError, PlayerId, PlayerMap, Position, Result,
    Transition,
};
use crate::learning::Learner;

use super::interactive::HumanInput;

/// Whether an episode learns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Agents explore and every finalised transition is fed back.
    Training,
    /// Agents play greedily and nothing is learned.
    Evaluation,
}

impl Mode {
    #[must_use]
    pub fn explores(self) -> bool {
        matches!(self, Mode::Training)
    }

    #[must_use]
    pub fn learns(self) -> bool {
        matches!(self, Mode::Training)
    }
}

/// Who sits where.
pub enum Lineup<'a> {
    /// One learner plays both seats and receives both seats' transitions.
    SelfPlay(&'a mut dyn Learner),

    /// Separate learners in seat 0 and seat 1.
    Versus {
        first: &'a mut dyn Learner,
        second: &'a mut dyn Learner,
    },

    /// A learner against a human in `seat`.
    Human {
        agent: &'a mut dyn Learner,
        human: &'a mut dyn HumanInput,
        seat: PlayerId,
    },
}

enum Participant<'b> {
    Agent(&'b mut dyn Learner),
    Human(&'b mut dyn HumanInput),
}

impl<'a> Lineup<'a> {
    fn at(&mut self, seat: PlayerId) -> Participant<'_> {
        match self {
            Lineup::SelfPlay(learner) => Participant::Agent(&mut **learner),
            Lineup::Versus { first, second } => {
                if seat == PlayerId::FIRST {
                    Participant::Agent(&mut **first)
                } else {
                    Participant::Agent(&mut **second)
                }
            }
            Lineup::Human { agent, human, seat: human_seat } => {
                if seat == *human_seat {
                    Participant::Human(&mut **human)
                } else {
                    Participant::Agent(&mut **agent)
                }
            }
        }
    }

    fn learner(&mut self, seat: PlayerId) -> Option<&mut dyn Learner> {
        match self.at(seat) {
            Participant::Agent(learner) => Some(learner),
            Participant::Human(_) => None,
        }
    }

    fn human(&mut self) -> Option<(&mut dyn HumanInput, PlayerId)> {
        match self {
            Lineup::Human { human, seat, .. } => Some((&mut **human, *seat)),
            _ => None,
        }
    }
}

/// Counters for one finished episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeStats {
    /// Seat that emptied the last pile.
    pub winner: PlayerId,

    /// Moves played.
    pub plies: usize,

    /// Transitions fed to learners.
    pub updates: usize,
}

/// Plays single episodes from a fixed opening position.
#[derive(Clone, Debug, Default)]
pub struct EpisodeRunner {
    config: NimConfig,
}

impl EpisodeRunner {
    #[must_use]
    pub fn new(config: NimConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &NimConfig {
        &self.config
    }

    /// Play one game to completion.
    ///
    /// Human moves that the game rejects are reported back to the human and
    /// asked for again. An agent move that the game rejects is an error.
    pub fn run(&self, lineup: &mut Lineup<'_>, mode: Mode) -> Result<EpisodeStats> {
        let mut game = GameState::new(&self.config);
        let mut pending: PlayerMap<Option<(Position, Action)>> = PlayerMap::default();
        let mut updates = 0;

        let winner = loop {
            let seat = game.player();
            let before = game.position().clone();

            if let Some((human, human_seat)) = lineup.human() {
                human.show_position(&before, seat == human_seat)?;
            }

            let action = match lineup.at(seat) {
                Participant::Agent(agent) => {
                    let action = agent
                        .choose_action(&before, mode.explores())
                        .ok_or(MoveError::NoAction)?;
                    game.apply_move(action)?;
                    action
                }
                Participant::Human(human) => loop {
                    let action = human.choose_action(&before)?;
                    match game.apply_move(action) {
                        Ok(()) => break action,
                        Err(NimError::InvalidMove(e)) => human.rejected(&e)?,
                        Err(e) => return Err(e),
                    }
                },
            };

            if let Some((human, human_seat)) = lineup.human() {
                if seat != human_seat {
                    human.opponent_moved(action)?;
                }
            }

            pending[seat] = Some((before, action));
            if mode.learns() {
                updates += Self::finalise(lineup, &game, &mut pending);
            }

            if let Some(winner) = game.winner() {
                break winner;
            }
        };

        if let Some((human, human_seat)) = lineup.human() {
            human.game_over(winner == human_seat)?;
        }

        log::debug!(
            "episode over: {} wins after {} plies ({} updates)",
            winner,
            game.history().len(),
            updates
        );
        Ok(EpisodeStats {
            winner,
            plies: game.history().len(),
            updates,
        })
    }

    /// Feed back whichever pending moves the last ply resolved.
    fn finalise(
        lineup: &mut Lineup<'_>,
        game: &GameState,
        pending: &mut PlayerMap<Option<(Position, Action)>>,
    ) -> usize {
        let after = game.position();
        let mut updates = 0;
        let mut emit = |seat: PlayerId, reward: f64| {
            if let Some((state, action)) = pending[seat].take() {
                if let Some(learner) = lineup.learner(seat) {
                    learner.update(&Transition::new(state, action, after.clone(), reward));
                    updates += 1;
                }
            }
        };

        match game.winner() {
            Some(winner) => {
                for seat in PlayerId::both() {
                    emit(seat, if seat == winner { 1.0 } else { -1.0 });
                }
            }
            // The seat about to move learns what its previous move led to.
            None => emit(game.player(), 0.0),
        }
        updates
    }
}
