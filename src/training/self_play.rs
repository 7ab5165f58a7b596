//! Self-play training and head-to-head evaluation.
//!
//! Training runs a fixed number of episodes with one learner in both
//! seats. Evaluation pits two learners against each other greedily, with
//! learning switched off, and records who won each game.

use crate::core::{NimConfig, PlayerId, PlayerMap, Result, TrainingConfig};
use crate::learning::Learner;

use super::episode::{EpisodeRunner, Lineup, Mode};

/// Totals for a finished training run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Episodes played.
    pub episodes: usize,

    /// Games won by each seat.
    pub wins: PlayerMap<u32>,

    /// Moves played across all episodes.
    pub plies: usize,

    /// Transitions fed back.
    pub updates: usize,
}

/// Runs self-play episodes against a single learner.
#[derive(Clone, Debug, Default)]
pub struct Trainer {
    config: TrainingConfig,
    runner: EpisodeRunner,
}

impl Trainer {
    #[must_use]
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            runner: EpisodeRunner::new(config.game.clone()),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train `learner` in place for the configured number of episodes.
    pub fn run(&self, learner: &mut dyn Learner) -> Result<TrainingSummary> {
        let mut summary = TrainingSummary::default();
        log::info!(
            "{:<24}{} for {} episodes",
            "training",
            learner.name(),
            self.config.episodes
        );

        for episode in 1..=self.config.episodes {
            let stats = self.runner.run(&mut Lineup::SelfPlay(&mut *learner), Mode::Training)?;
            summary.episodes += 1;
            summary.wins[stats.winner] += 1;
            summary.plies += stats.plies;
            summary.updates += stats.updates;

            if self.config.log_interval > 0 && episode % self.config.log_interval == 0 {
                log::info!(
                    "{:<24}{:>8} / {:<8} entries {}",
                    learner.name(),
                    episode,
                    self.config.episodes,
                    learner.table().len()
                );
            }
        }
        Ok(summary)
    }
}

/// Train `learner` by self-play for `episodes` episodes from `[1, 3, 5, 7]`.
pub fn train<L: Learner>(mut learner: L, episodes: usize) -> Result<L> {
    Trainer::new(TrainingConfig::default().with_episodes(episodes)).run(&mut learner)?;
    Ok(learner)
}

/// Who won each evaluation game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    labels: PlayerMap<String>,
    winners: Vec<PlayerId>,
}

impl MatchReport {
    #[must_use]
    pub fn new(labels: PlayerMap<String>) -> Self {
        Self {
            labels,
            winners: Vec::new(),
        }
    }

    /// Record the winner of the next game.
    pub fn push(&mut self, winner: PlayerId) {
        self.winners.push(winner);
    }

    /// Learner name per seat.
    #[must_use]
    pub fn labels(&self) -> &PlayerMap<String> {
        &self.labels
    }

    /// Winning seat of each game, in play order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    #[must_use]
    pub fn games(&self) -> usize {
        self.winners.len()
    }

    /// Games won by `seat`.
    #[must_use]
    pub fn wins(&self, seat: PlayerId) -> u32 {
        self.winners.iter().filter(|&&w| w == seat).count() as u32
    }

    /// Running win count per seat after each game. Both sequences are
    /// non-decreasing and as long as [`MatchReport::games`].
    #[must_use]
    pub fn cumulative_wins(&self) -> PlayerMap<Vec<u32>> {
        let mut totals = PlayerMap::with_value(0u32);
        let mut curves: PlayerMap<Vec<u32>> = PlayerMap::with_value(Vec::with_capacity(self.games()));
        for &winner in &self.winners {
            totals[winner] += 1;
            for (seat, curve) in curves.iter_mut() {
                curve.push(totals[seat]);
            }
        }
        curves
    }

    /// Plain-text chart of both cumulative win curves.
    ///
    /// Seat 0 is drawn with `1`, seat 1 with `2`, overlaps with `*`.
    /// Each column is one game, or a bucket of games when there are more
    /// games than `width`.
    #[must_use]
    pub fn render_chart(&self, width: usize, height: usize) -> String {
        let mut out = format!(
            "Cumulative wins: 1 = {} ({}), 2 = {} ({})\n",
            self.labels[PlayerId::FIRST],
            self.wins(PlayerId::FIRST),
            self.labels[PlayerId::SECOND],
            self.wins(PlayerId::SECOND),
        );
        let games = self.games();
        if games == 0 || width == 0 || height == 0 {
            return out;
        }

        let curves = self.cumulative_wins();
        let columns = games.min(width);
        let peak = curves.iter().flat_map(|(_, c)| c.last().copied()).max().unwrap_or(0).max(1);
        let row_of = |wins: u32| (wins as usize * (height - 1) + peak as usize / 2) / peak as usize;

        let mut grid = vec![vec![' '; columns]; height];
        for col in 0..columns {
            let game = (col + 1) * games / columns - 1;
            for (seat, curve) in curves.iter() {
                let row = height - 1 - row_of(curve[game]);
                let mark = if seat == PlayerId::FIRST { '1' } else { '2' };
                let cell = &mut grid[row][col];
                *cell = if *cell == ' ' { mark } else { '*' };
            }
        }

        for (i, row) in grid.iter().enumerate() {
            let axis = match i {
                0 => format!("{peak:>5}"),
                i if i == height - 1 => format!("{:>5}", 0),
                _ => " ".repeat(5),
            };
            out.push_str(&axis);
            out.push('|');
            out.extend(row.iter());
            out.push('\n');
        }
        out.push_str(&format!("{}+{}\n", " ".repeat(5), "-".repeat(columns)));
        out.push_str(&format!("{}game 1..{}\n", " ".repeat(6), games));
        out
    }
}

/// Play `games` greedy games, `first` in seat 0 and `second` in seat 1,
/// from `[1, 3, 5, 7]`. Neither learner explores or learns.
pub fn play_matches(
    first: &mut dyn Learner,
    second: &mut dyn Learner,
    games: usize,
) -> Result<MatchReport> {
    play_matches_from(&NimConfig::default(), first, second, games)
}

/// [`play_matches`] from a custom opening position.
pub fn play_matches_from(
    config: &NimConfig,
    first: &mut dyn Learner,
    second: &mut dyn Learner,
    games: usize,
) -> Result<MatchReport> {
    let runner = EpisodeRunner::new(config.clone());
    let mut report = MatchReport::new(PlayerMap::new(|seat| {
        if seat == PlayerId::FIRST {
            first.name().to_string()
        } else {
            second.name().to_string()
        }
    }));

    for _ in 0..games {
        let mut lineup = Lineup::Versus {
            first: &mut *first,
            second: &mut *second,
        };
        report.push(runner.run(&mut lineup, Mode::Evaluation)?.winner);
    }

    log::info!(
        "{:<24}{} {} - {} {}",
        "evaluation",
        report.labels[PlayerId::FIRST],
        report.wins(PlayerId::FIRST),
        report.wins(PlayerId::SECOND),
        report.labels[PlayerId::SECOND]
    );
    Ok(report)
}
