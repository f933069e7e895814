//! Score and best-score bookkeeping

use super::obstacles::{ObstacleField, ObstacleId};

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: u64,
    high_score: u64,
    /// Round end already evaluated (guards against double settlement)
    settled: bool,
}

impl ScoreTracker {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
            settled: false,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Count every unscored pair whose right edge is strictly left of
    /// `player_left`. Returns (pair, score after increment) in spawn order.
    pub fn scan(&mut self, field: &mut ObstacleField, player_left: f32) -> Vec<(ObstacleId, u64)> {
        let passed: Vec<ObstacleId> = field
            .iter()
            .filter(|pair| pair.right() < player_left && !field.is_scored(pair.id))
            .map(|pair| pair.id)
            .collect();

        let mut counted = Vec::with_capacity(passed.len());
        for id in passed {
            if field.mark_scored(id) {
                self.score += 1;
                counted.push((id, self.score));
            }
        }
        counted
    }

    /// Close the round. Returns the new best if this round beat it.
    /// Only the first call per round has any effect.
    pub fn settle(&mut self) -> Option<u64> {
        if self.settled {
            return None;
        }
        self.settled = true;

        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }

    /// Start a fresh round; the best score is kept
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.settled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_pass_is_strict() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        let mut tracker = ScoreTracker::new(0);
        field.spawn_with_gap(&tuning, 300.0);

        // Right edge 550 -> 80 equals the player's left edge: not yet passed
        field.advance(470.0);
        assert!(tracker.scan(&mut field, 80.0).is_empty());
        assert_eq!(tracker.score(), 0);

        field.advance(0.5);
        assert_eq!(tracker.scan(&mut field, 80.0).len(), 1);
        assert_eq!(tracker.score(), 1);
    }

    #[test]
    fn test_scan_never_counts_twice() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        let mut tracker = ScoreTracker::new(0);
        let id = field.spawn_with_gap(&tuning, 300.0);
        field.advance(480.0);

        assert_eq!(tracker.scan(&mut field, 80.0), vec![(id, 1)]);
        for _ in 0..10 {
            field.advance(1.0);
            assert!(tracker.scan(&mut field, 80.0).is_empty());
        }
        assert_eq!(tracker.score(), 1);
    }

    #[test]
    fn test_scan_reports_in_spawn_order() {
        let tuning = Tuning::default();
        let mut field = ObstacleField::new();
        let mut tracker = ScoreTracker::new(0);
        let a = field.spawn_with_gap(&tuning, 300.0);
        field.advance(50.0);
        let b = field.spawn_with_gap(&tuning, 200.0);
        field.advance(480.0);

        assert_eq!(tracker.scan(&mut field, 80.0), vec![(a, 1), (b, 2)]);
    }

    #[test]
    fn test_settle_only_on_strict_improvement() {
        let mut tracker = ScoreTracker::new(3);
        tracker.score = 3;
        assert_eq!(tracker.settle(), None);
        assert_eq!(tracker.high_score(), 3);

        tracker.reset_round();
        tracker.score = 4;
        assert_eq!(tracker.settle(), Some(4));
        assert_eq!(tracker.high_score(), 4);
    }

    #[test]
    fn test_settle_once_per_round() {
        let mut tracker = ScoreTracker::new(0);
        tracker.score = 2;
        assert_eq!(tracker.settle(), Some(2));
        tracker.score = 5;
        assert_eq!(tracker.settle(), None);
        assert_eq!(tracker.high_score(), 2);

        tracker.reset_round();
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.high_score(), 2);
    }
}
