//! Player vs obstacle collision
//!
//! Plain box overlap against both segments of every active pair. The floor is
//! handled by the body integrator, not here.

use super::geometry::Aabb;
use super::obstacles::{ObstacleId, ObstaclePair};

/// First pair (in iteration order) whose segments overlap `player`
pub fn first_hit<'a>(
    player: &Aabb,
    pairs: impl IntoIterator<Item = &'a ObstaclePair>,
) -> Option<ObstacleId> {
    pairs
        .into_iter()
        .find(|pair| pair.segments().iter().any(|segment| player.intersects(segment)))
        .map(|pair| pair.id)
}
