//! Playing a trained learner from the console.
//!
//! The episode runner only talks to a [`HumanInput`]; [`ConsoleHuman`] is
//! the line-oriented implementation over any reader/writer pair, so the
//! prompt loop can be driven from a string in tests.

use std::io::{self, BufRead, Write};

use crate::core::{Action, GameRng, MoveError, NimConfig, PlayerId, Position, Result};
use crate::learning::Learner;

use super::episode::{EpisodeRunner, Lineup, Mode};

/// The human side of an interactive game.
pub trait HumanInput {
    /// Produce a move for `position`. Implementations may re-prompt as
    /// often as they like; only I/O failures are errors.
    fn choose_action(&mut self, position: &Position) -> io::Result<Action>;

    /// The game refused the last move.
    fn rejected(&mut self, _error: &MoveError) -> io::Result<()> {
        Ok(())
    }

    /// Called before every ply with the current piles.
    fn show_position(&mut self, _position: &Position, _your_turn: bool) -> io::Result<()> {
        Ok(())
    }

    /// The agent just played `action`.
    fn opponent_moved(&mut self, _action: Action) -> io::Result<()> {
        Ok(())
    }

    /// The game is over.
    fn game_over(&mut self, _human_won: bool) -> io::Result<()> {
        Ok(())
    }
}

/// A console line that did not hold an integer.
struct MalformedInput;

/// Prompts for a pile and a count on `output`, reads answers from `input`.
pub struct ConsoleHuman<R, W> {
    input: R,
    output: W,
}

impl ConsoleHuman<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleHuman<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> io::Result<std::result::Result<i64, MalformedInput>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().parse::<i64>().map_err(|_| MalformedInput))
    }

    fn ask_move(&mut self) -> io::Result<std::result::Result<(i64, i64), MalformedInput>> {
        let pile = match self.ask("Choose a pile: ")? {
            Ok(pile) => pile,
            Err(e) => return Ok(Err(e)),
        };
        let count = match self.ask("Number of objects to remove: ")? {
            Ok(count) => count,
            Err(e) => return Ok(Err(e)),
        };
        Ok(Ok((pile, count)))
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleHuman<R, W> {
    fn choose_action(&mut self, position: &Position) -> io::Result<Action> {
        let legal = position.available_actions();
        loop {
            let (pile, count) = match self.ask_move()? {
                Ok(answer) => answer,
                Err(MalformedInput) => {
                    writeln!(self.output, "Please enter valid integers.")?;
                    continue;
                }
            };

            // Negative or oversized numbers are simply illegal moves.
            let action = usize::try_from(pile)
                .ok()
                .zip(u32::try_from(count).ok())
                .map(Action::from);
            match action {
                Some(action) if legal.contains(&action) => return Ok(action),
                _ => writeln!(self.output, "Invalid move. Try again.")?,
            }
        }
    }

    fn rejected(&mut self, _error: &MoveError) -> io::Result<()> {
        writeln!(self.output, "Invalid move. Try again.")
    }

    fn show_position(&mut self, position: &Position, your_turn: bool) -> io::Result<()> {
        writeln!(self.output, "\nCurrent Piles:")?;
        for (i, pile) in position.piles().iter().enumerate() {
            writeln!(self.output, "Pile {i}: {pile}")?;
        }
        if your_turn {
            writeln!(self.output, "Your turn!")?;
        }
        Ok(())
    }

    fn opponent_moved(&mut self, action: Action) -> io::Result<()> {
        writeln!(
            self.output,
            "Agent chose to remove {} from pile {}.",
            action.count, action.pile
        )
    }

    fn game_over(&mut self, human_won: bool) -> io::Result<()> {
        writeln!(self.output, "\nGAME OVER")?;
        writeln!(self.output, "Winner: {}", if human_won { "You" } else { "Agent" })
    }
}

/// Play one greedy, non-learning game of `learner` against `human`.
///
/// With no `human_seat`, the seat is drawn uniformly from `rng`. Returns
/// the winning seat.
pub fn play_against_human(
    learner: &mut dyn Learner,
    human_seat: Option<PlayerId>,
    human: &mut dyn HumanInput,
    rng: &mut GameRng,
) -> Result<PlayerId> {
    play_against_human_from(&NimConfig::default(), learner, human_seat, human, rng)
}

/// [`play_against_human`] from a custom opening position.
pub fn play_against_human_from(
    config: &NimConfig,
    learner: &mut dyn Learner,
    human_seat: Option<PlayerId>,
    human: &mut dyn HumanInput,
    rng: &mut GameRng,
) -> Result<PlayerId> {
    let seat = human_seat.unwrap_or_else(|| PlayerId::new(rng.gen_range_usize(0..2) as u8));
    log::info!("{:<24}{} vs human ({})", "interactive", learner.name(), seat);

    let runner = EpisodeRunner::new(config.clone());
    let mut lineup = Lineup::Human {
        agent: learner,
        human,
        seat,
    };
    let stats = runner.run(&mut lineup, Mode::Evaluation)?;
    Ok(stats.winner)
}
