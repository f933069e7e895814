//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Virtual-time timers only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod geometry;
pub mod ground;
pub mod machine;
pub mod obstacles;
pub mod score;
pub mod state;
pub mod tick;
pub mod timer;

pub use autopilot::should_flap;
pub use body::{BodyStep, PlayerBody};
pub use collision::first_hit;
pub use geometry::Aabb;
pub use ground::GroundStrip;
pub use machine::{Effects, Transition, Trigger, transition};
pub use obstacles::{ObstacleField, ObstacleId, ObstaclePair};
pub use score::ScoreTracker;
pub use state::{Banner, CrashCause, Game, GameEvent, GamePhase};
pub use timer::{TimerId, TimerQueue};
