//! Tabular temporal-difference learners.
//!
//! Both variants share action selection and the update rule
//!
//! ```text
//! Q(s, a) <- Q(s, a) + α · (r + target(s') − Q(s, a))
//! ```
//!
//! with no discount and a constant α. They differ only in `target(s')`,
//! which is supplied by a [`Bootstrap`] strategy:
//!
//! - [`MaxBootstrap`]: best estimate in `s'` (off-policy, Q-learning)
//! - [`SampledBootstrap`]: estimate of the move the ε-greedy policy samples
//!   in `s'` right now (on-policy, SARSA). This consumes randomness, so the
//!   update is not a pure function of the table.

use crate::core::{Action, GameRng, LearnerConfig, Position, Transition};

use super::policy::{epsilon_greedy, greedy};
use super::table::ValueTable;

/// Anything that picks moves and learns from transitions.
pub trait Learner {
    /// Display name, e.g. for match reports.
    fn name(&self) -> &str;

    /// Pick a move in `position`, `None` if it has no legal moves.
    fn choose_action(&mut self, position: &Position, explore: bool) -> Option<Action>;

    /// Fold one transition into the value table.
    fn update(&mut self, transition: &Transition);

    /// The learned estimates.
    fn table(&self) -> &ValueTable;
}

/// How the value of the next state is estimated.
pub trait Bootstrap {
    /// Name of the resulting algorithm.
    const NAME: &'static str;

    /// Estimate for `next`; 0 when `next` has no legal moves.
    fn target(&self, table: &ValueTable, next: &Position, epsilon: f64, rng: &mut GameRng) -> f64;
}

/// Off-policy target: the maximum estimate over legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxBootstrap;

impl Bootstrap for MaxBootstrap {
    const NAME: &'static str = "Q-Learning";

    fn target(&self, table: &ValueTable, next: &Position, _epsilon: f64, _rng: &mut GameRng) -> f64 {
        table.max_over(next, &next.available_actions()).unwrap_or(0.0)
    }
}

/// On-policy target: the estimate of the move the exploring policy would
/// play in the next state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampledBootstrap;

impl Bootstrap for SampledBootstrap {
    const NAME: &'static str = "SARSA";

    fn target(&self, table: &ValueTable, next: &Position, epsilon: f64, rng: &mut GameRng) -> f64 {
        match epsilon_greedy(table, next, true, epsilon, rng) {
            Some(action) => table.get(next, action),
            None => 0.0,
        }
    }
}

/// A temporal-difference learner with an owned table and RNG.
#[derive(Clone, Debug)]
pub struct TdLearner<B> {
    table: ValueTable,
    config: LearnerConfig,
    rng: GameRng,
    bootstrap: B,
}

/// Off-policy learner.
pub type QLearning = TdLearner<MaxBootstrap>;

/// On-policy learner.
pub type Sarsa = TdLearner<SampledBootstrap>;

impl<B: Bootstrap + Default> TdLearner<B> {
    /// Create a learner with an empty table, seeded from `config.seed`.
    #[must_use]
    pub fn new(config: LearnerConfig) -> Self {
        Self::with_table(config, ValueTable::new())
    }

    /// Create a learner that starts from existing estimates.
    #[must_use]
    pub fn with_table(config: LearnerConfig, table: ValueTable) -> Self {
        Self {
            table,
            rng: GameRng::new(config.seed),
            config,
            bootstrap: B::default(),
        }
    }
}

impl<B: Bootstrap> TdLearner<B> {
    #[must_use]
    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// The move with the highest estimate, ignoring exploration.
    #[must_use]
    pub fn best_action(&self, position: &Position) -> Option<Action> {
        greedy(&self.table, position, &position.available_actions())
    }

    /// Current estimate for `action` in `position`.
    #[must_use]
    pub fn value(&self, position: &Position, action: Action) -> f64 {
        self.table.get(position, action)
    }

    /// Give up the table, e.g. to seed another learner.
    #[must_use]
    pub fn into_table(self) -> ValueTable {
        self.table
    }
}

impl<B: Bootstrap> Learner for TdLearner<B> {
    fn name(&self) -> &str {
        B::NAME
    }

    fn choose_action(&mut self, position: &Position, explore: bool) -> Option<Action> {
        epsilon_greedy(&self.table, position, explore, self.config.epsilon, &mut self.rng)
    }

    fn update(&mut self, transition: &Transition) {
        let old = self.table.get(&transition.state, transition.action);
        let target = self.bootstrap.target(
            &self.table,
            &transition.next_state,
            self.config.epsilon,
            &mut self.rng,
        );
        let new = old + self.config.alpha * (transition.reward + target - old);

        log::trace!(
            "{} {} {}: {:.4} -> {:.4} (r={}, target={:.4})",
            B::NAME,
            transition.state,
            transition.action,
            old,
            new,
            transition.reward,
            target
        );
        self.table.set(&transition.state, transition.action, new);
    }

    fn table(&self) -> &ValueTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(state: &[u32], action: (usize, u32), next: &[u32], reward: f64) -> Transition {
        Transition::new(
            Position::new(state.iter().copied()),
            action.into(),
            Position::new(next.iter().copied()),
            reward,
        )
    }

    #[test]
    fn test_names() {
        assert_eq!(QLearning::new(LearnerConfig::default()).name(), "Q-Learning");
        assert_eq!(Sarsa::new(LearnerConfig::default()).name(), "SARSA");
    }

    #[test]
    fn test_terminal_win_from_empty_table() {
        let t = transition(&[1], (0, 1), &[0], 1.0);

        let mut q = QLearning::new(LearnerConfig::default());
        q.update(&t);
        assert_eq!(q.value(&t.state, t.action), 0.5);

        let mut s = Sarsa::new(LearnerConfig::default());
        s.update(&t);
        assert_eq!(s.value(&t.state, t.action), 0.5);
    }

    #[test]
    fn test_update_is_repeatable_step() {
        let t = transition(&[2], (0, 2), &[0], -1.0);
        let mut q = QLearning::new(LearnerConfig::default());

        q.update(&t);
        assert_eq!(q.value(&t.state, t.action), -0.5);
        q.update(&t);
        assert_eq!(q.value(&t.state, t.action), -0.75);
    }

    #[test]
    fn test_alpha_one_replaces_estimate() {
        let t = transition(&[3], (0, 1), &[2], 0.0);
        let mut table = ValueTable::new();
        table.set(&t.state, t.action, 0.5);
        table.set(&t.next_state, Action::new(0, 2), -0.25);
        table.set(&t.next_state, Action::new(0, 1), -0.75);

        let mut q = QLearning::with_table(LearnerConfig::new().with_alpha(1.0), table);
        q.update(&t);

        assert_eq!(q.value(&t.state, t.action), -0.25);
    }

    #[test]
    fn test_max_target_counts_unvisited_as_zero() {
        let next = Position::new([2]);
        let mut table = ValueTable::new();
        table.set(&next, Action::new(0, 1), -1.0);
        let mut rng = GameRng::new(0);

        assert_eq!(MaxBootstrap.target(&table, &next, 0.1, &mut rng), 0.0);
    }

    #[test]
    fn test_terminal_targets_are_zero() {
        let mut table = ValueTable::new();
        let empty = Position::new([0, 0]);
        table.set(&empty, Action::new(0, 1), 5.0);
        let mut rng = GameRng::new(0);

        assert_eq!(MaxBootstrap.target(&table, &empty, 0.1, &mut rng), 0.0);
        assert_eq!(SampledBootstrap.target(&table, &empty, 1.0, &mut rng), 0.0);
    }

    #[test]
    fn test_sampled_target_follows_greedy_without_exploration() {
        let next = Position::new([2]);
        let mut table = ValueTable::new();
        table.set(&next, Action::new(0, 1), -0.3);
        table.set(&next, Action::new(0, 2), -0.8);
        let mut rng = GameRng::new(0);

        assert_eq!(SampledBootstrap.target(&table, &next, 0.0, &mut rng), -0.3);
        assert_eq!(MaxBootstrap.target(&table, &next, 0.0, &mut rng), -0.3);
    }

    #[test]
    fn test_sampled_target_can_pick_non_best() {
        let next = Position::new([2]);
        let mut table = ValueTable::new();
        table.set(&next, Action::new(0, 1), 1.0);
        table.set(&next, Action::new(0, 2), -1.0);
        let mut rng = GameRng::new(1);

        let targets: Vec<f64> = (0..64)
            .map(|_| SampledBootstrap.target(&table, &next, 1.0, &mut rng))
            .collect();
        assert!(targets.contains(&-1.0));
        assert!(targets.contains(&1.0));
    }

    #[test]
    fn test_same_seed_same_updates() {
        let run = || {
            let mut s = Sarsa::new(LearnerConfig::new().with_epsilon(0.5).with_seed(8));
            let t = transition(&[2, 2], (0, 1), &[1, 2], 0.0);
            for _ in 0..20 {
                s.update(&t);
                let _ = s.choose_action(&t.next_state, true);
            }
            s.value(&t.state, t.action)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_greedy_choice_is_legal_and_stable() {
        let mut q = QLearning::new(LearnerConfig::default());
        let pos = Position::new([1, 3, 5, 7]);
        let first = q.choose_action(&pos, false).unwrap();

        assert!(pos.available_actions().contains(&first));
        for _ in 0..10 {
            assert_eq!(q.choose_action(&pos, false), Some(first));
        }
        assert_eq!(q.best_action(&pos), Some(first));
        assert_eq!(q.choose_action(&Position::new([0]), true), None);
    }
}
