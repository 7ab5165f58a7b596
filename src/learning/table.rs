//! Sparse action-value table.
//!
//! Keyed by position first, then action, so lookups borrow the position
//! instead of building an owned key. Pile order is part of the key.

use rustc_hash::FxHashMap;

use crate::core::{Action, Position};

/// Action-value estimates. Absent entries read as 0 ("unvisited").
#[derive(Clone, Debug, Default)]
pub struct ValueTable {
    values: FxHashMap<Position, FxHashMap<Action, f64>>,
    len: usize,
}

impl ValueTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate for `action` in `position`, 0 if never written.
    #[must_use]
    pub fn get(&self, position: &Position, action: Action) -> f64 {
        self.values
            .get(position)
            .and_then(|row| row.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// True if an estimate has been written for the pair.
    #[must_use]
    pub fn contains(&self, position: &Position, action: Action) -> bool {
        self.values
            .get(position)
            .is_some_and(|row| row.contains_key(&action))
    }

    /// Overwrite the estimate for `action` in `position`.
    pub fn set(&mut self, position: &Position, action: Action, value: f64) {
        let inserted = match self.values.get_mut(position) {
            Some(row) => row.insert(action, value).is_none(),
            None => {
                let mut row = FxHashMap::default();
                row.insert(action, value);
                self.values.insert(position.clone(), row);
                true
            }
        };
        if inserted {
            self.len += 1;
        }
    }

    /// Largest estimate over `actions` in `position`, `None` if `actions`
    /// is empty.
    #[must_use]
    pub fn max_over(&self, position: &Position, actions: &[Action]) -> Option<f64> {
        actions
            .iter()
            .map(|&a| self.get(position, a))
            .fold(None, |best, v| match best {
                Some(b) if b >= v => Some(b),
                _ => Some(v),
            })
    }

    /// Number of (position, action) pairs written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct positions with at least one entry.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.values.len()
    }

    /// Iterate over every written entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, Action, f64)> {
        self.values
            .iter()
            .flat_map(|(pos, row)| row.iter().map(move |(&a, &v)| (pos, a, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reads_zero() {
        let table = ValueTable::new();
        let pos = Position::new([1, 3]);

        assert_eq!(table.get(&pos, Action::new(1, 2)), 0.0);
        assert!(!table.contains(&pos, Action::new(1, 2)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut table = ValueTable::new();
        let pos = Position::new([1, 3]);

        table.set(&pos, Action::new(1, 2), 0.5);
        table.set(&pos, Action::new(1, 2), -0.25);
        table.set(&pos, Action::new(0, 1), 1.0);

        assert_eq!(table.get(&pos, Action::new(1, 2)), -0.25);
        assert_eq!(table.len(), 2);
        assert_eq!(table.position_count(), 1);
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn test_pile_order_is_part_of_key() {
        let mut table = ValueTable::new();
        table.set(&Position::new([1, 2]), Action::new(0, 1), 0.7);

        assert_eq!(table.get(&Position::new([2, 1]), Action::new(0, 1)), 0.0);
    }

    #[test]
    fn test_max_over() {
        let mut table = ValueTable::new();
        let pos = Position::new([2]);
        let actions = pos.available_actions();

        assert_eq!(table.max_over(&pos, &[]), None);
        // Unvisited entries count as 0.
        table.set(&pos, Action::new(0, 1), -1.0);
        assert_eq!(table.max_over(&pos, &actions), Some(0.0));

        table.set(&pos, Action::new(0, 2), 0.3);
        assert_eq!(table.max_over(&pos, &actions), Some(0.3));
    }
}
