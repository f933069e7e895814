//! Obstacle pairs and their lifecycle
//!
//! Pairs live in a queue ordered by spawn time. All pairs scroll at the same
//! speed, so spawn order is also left-to-right order and retirement only ever
//! happens at the front.

use std::collections::{BTreeSet, VecDeque};

use rand::Rng;

use super::geometry::Aabb;
use crate::tuning::Tuning;

/// Monotonic obstacle identity. Never reused, not even across rounds.
pub type ObstacleId = u32;

/// One gap: a top segment hanging from y=0 and a bottom segment standing on the floor
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub id: ObstacleId,
    /// Shared left edge of both segments
    pub x: f32,
    pub width: f32,
    pub gap_center: f32,
    pub gap_height: f32,
    pub floor_y: f32,
}

impl ObstaclePair {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge of the top segment
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    /// Top edge of the bottom segment
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    pub fn top_segment(&self) -> Aabb {
        Aabb::from_xywh(self.x, 0.0, self.width, self.gap_top())
    }

    pub fn bottom_segment(&self) -> Aabb {
        let y = self.gap_bottom();
        Aabb::from_xywh(self.x, y, self.width, self.floor_y - y)
    }

    pub fn segments(&self) -> [Aabb; 2] {
        [self.top_segment(), self.bottom_segment()]
    }

    /// Right edge has fully left the field
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Active obstacle pairs plus the scored marker
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    pairs: VecDeque<ObstaclePair>,
    /// IDs that already contributed to the score
    scored: BTreeSet<ObstacleId>,
    next_id: ObstacleId,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a pair at the right edge with a random gap center.
    /// `tuning` must have passed `Tuning::validate`.
    pub fn spawn<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) -> ObstacleId {
        let (lo, hi) = tuning.gap_center_range();
        let gap_center = rng.random_range(lo..=hi) as f32;
        self.spawn_with_gap(tuning, gap_center)
    }

    /// Spawn a pair at the right edge with a chosen gap center
    pub fn spawn_with_gap(&mut self, tuning: &Tuning, gap_center: f32) -> ObstacleId {
        let id = self.next_id;
        self.next_id += 1;
        self.pairs.push_back(ObstaclePair {
            id,
            x: tuning.field_width,
            width: tuning.obstacle_width,
            gap_center,
            gap_height: tuning.gap_height,
            floor_y: tuning.floor_y(),
        });
        id
    }

    /// Scroll every pair left by `dx` and retire the ones that left the field.
    /// Returns retired IDs in spawn order.
    pub fn advance(&mut self, dx: f32) -> Vec<ObstacleId> {
        for pair in &mut self.pairs {
            pair.x -= dx;
        }

        let mut retired = Vec::new();
        while self.pairs.front().is_some_and(ObstaclePair::is_off_screen) {
            if let Some(pair) = self.pairs.pop_front() {
                self.scored.remove(&pair.id);
                retired.push(pair.id);
            }
        }
        retired
    }

    /// Record that `id` has been counted. False if it already was.
    pub fn mark_scored(&mut self, id: ObstacleId) -> bool {
        self.scored.insert(id)
    }

    pub fn is_scored(&self, id: ObstacleId) -> bool {
        self.scored.contains(&id)
    }

    pub fn scored_len(&self) -> usize {
        self.scored.len()
    }

    pub fn get(&self, id: ObstacleId) -> Option<&ObstaclePair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Drop every pair and scored entry. IDs keep counting up.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.scored.clear();
    }
}
