//! ε-greedy action selection over a `ValueTable`.

use crate::core::{Action, GameRng, Position};

use super::table::ValueTable;

/// The action with the strictly greatest estimate, first one found on ties.
///
/// Returns `None` when `actions` is empty.
#[must_use]
pub fn greedy(table: &ValueTable, position: &Position, actions: &[Action]) -> Option<Action> {
    let mut best: Option<(Action, f64)> = None;
    for &action in actions {
        let value = table.get(position, action);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((action, value)),
        }
    }
    best.map(|(action, _)| action)
}

/// Pick a move in `position`.
///
/// The greedy move is always computed first. When `explore` is set, with
/// probability `epsilon` it is replaced by a uniformly random legal move,
/// which may coincide with the greedy one. No randomness is consumed when
/// `explore` is false or there are no legal moves.
pub fn epsilon_greedy(
    table: &ValueTable,
    position: &Position,
    explore: bool,
    epsilon: f64,
    rng: &mut GameRng,
) -> Option<Action> {
    let actions = position.available_actions();
    let best = greedy(table, position, &actions)?;

    if explore && rng.gen_bool(epsilon) {
        return rng.choose(&actions).copied();
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_prefers_highest() {
        let mut table = ValueTable::new();
        let pos = Position::new([3]);
        table.set(&pos, Action::new(0, 2), 0.4);
        table.set(&pos, Action::new(0, 3), -0.2);

        let actions = pos.available_actions();
        assert_eq!(greedy(&table, &pos, &actions), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_greedy_keeps_first_maximum() {
        let table = ValueTable::new();
        let pos = Position::new([2]);
        let actions = [Action::new(0, 2), Action::new(0, 1)];

        assert_eq!(greedy(&table, &pos, &actions), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_unvisited_beats_negative() {
        let mut table = ValueTable::new();
        let pos = Position::new([1, 1]);
        table.set(&pos, Action::new(0, 1), -0.5);

        let actions = pos.available_actions();
        assert_eq!(greedy(&table, &pos, &actions), Some(Action::new(1, 1)));
    }

    #[test]
    fn test_no_actions() {
        let table = ValueTable::new();
        let mut rng = GameRng::new(0);
        let empty = Position::new([0, 0, 0]);

        assert_eq!(epsilon_greedy(&table, &empty, true, 1.0, &mut rng), None);
    }

    #[test]
    fn test_no_exploration_consumes_no_randomness() {
        let table = ValueTable::new();
        let pos = Position::new([1, 3, 5, 7]);
        let mut rng = GameRng::new(5);
        let before = rng.word_pos();

        for _ in 0..10 {
            let _ = epsilon_greedy(&table, &pos, false, 1.0, &mut rng);
        }
        assert_eq!(rng.word_pos(), before);
    }

    #[test]
    fn test_full_exploration_stays_legal_and_varies() {
        let table = ValueTable::new();
        let pos = Position::new([1, 3, 5, 7]);
        let actions = pos.available_actions();
        let mut rng = GameRng::new(11);

        let picks: Vec<_> = (0..64)
            .map(|_| epsilon_greedy(&table, &pos, true, 1.0, &mut rng).unwrap())
            .collect();

        assert!(picks.iter().all(|a| actions.contains(a)));
        assert!(picks.iter().any(|&a| a != picks[0]));
    }
}
