//! Phase transition table
//!
//! Every input and internal trigger goes through `transition`, a pure function
//! of (phase, trigger). Combinations not listed leave the phase unchanged and
//! do nothing.

use super::state::GamePhase;

/// Things that can move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Jump/start key: starts from Idle, flaps while running
    PrimaryAction,
    /// Start without flapping
    Begin,
    TogglePause,
    Reset,
    /// Obstacle hit or floor contact, raised by the tick
    Crash,
}

/// Side effects the caller applies, in field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub cancel_spawn: bool,
    pub reset_world: bool,
    pub arm_spawn: bool,
    pub flap: bool,
    pub settle_score: bool,
}

impl Effects {
    pub const NONE: Effects = Effects {
        cancel_spawn: false,
        reset_world: false,
        arm_spawn: false,
        flap: false,
        settle_score: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: GamePhase,
    pub effects: Effects,
}

pub fn transition(phase: GamePhase, trigger: Trigger) -> Transition {
    use GamePhase::*;
    use Trigger::*;

    let (next, effects) = match (phase, trigger) {
        (Idle, PrimaryAction) => (
            Running,
            Effects {
                arm_spawn: true,
                flap: true,
                ..Effects::NONE
            },
        ),
        (Idle, Begin) => (
            Running,
            Effects {
                arm_spawn: true,
                ..Effects::NONE
            },
        ),
        (Running, PrimaryAction) => (
            Running,
            Effects {
                flap: true,
                ..Effects::NONE
            },
        ),
        (Running, TogglePause) => (
            Paused,
            Effects {
                cancel_spawn: true,
                ..Effects::NONE
            },
        ),
        (Paused, TogglePause) => (
            Running,
            Effects {
                arm_spawn: true,
                ..Effects::NONE
            },
        ),
        (Running, Crash) => (
            GameOver,
            Effects {
                cancel_spawn: true,
                settle_score: true,
                ..Effects::NONE
            },
        ),
        (_, Reset) => (
            Idle,
            Effects {
                cancel_spawn: true,
                reset_world: true,
                ..Effects::NONE
            },
        ),
        (phase, _) => (phase, Effects::NONE),
    };

    Transition { next, effects }
}
