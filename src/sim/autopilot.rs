//! Demo-mode autopilot
//!
//! Decides each tick whether to press the primary action. Aims the body's
//! bottom edge a little above the bottom of the next gap it hasn't cleared,
//! or the middle of the field when nothing is ahead.

use rand::Rng;

use super::state::{Game, GamePhase};
use crate::highscores::HighScoreStore;

/// Distance kept between the body's bottom and the gap's lower lip
const AIM_MARGIN: f32 = 12.0;

pub fn should_flap<S: HighScoreStore, R: Rng>(game: &Game<S, R>) -> bool {
    match game.phase() {
        GamePhase::Idle => return true,
        GamePhase::Running => {}
        GamePhase::Paused | GamePhase::GameOver => return false,
    }

    let player = game.player();
    // Let the last flap play out
    if player.vel < 0.0 {
        return false;
    }

    let aim = game
        .obstacles()
        .find(|pair| pair.right() >= player.left())
        .map(|pair| pair.gap_bottom() - AIM_MARGIN)
        .unwrap_or_else(|| game.tuning().floor_y() / 2.0 + game.tuning().gap_height / 2.0);

    player.bottom() + player.vel >= aim
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::tuning::Tuning;

    #[test]
    fn test_starts_from_idle() {
        let game = Game::new(Tuning::default(), MemoryStore::new(0), 3).expect("valid tuning");
        assert!(should_flap(&game));
    }

    #[test]
    fn test_idle_when_paused() {
        let mut game = Game::new(Tuning::default(), MemoryStore::new(0), 3).expect("valid tuning");
        game.begin();
        game.toggle_pause();
        assert!(!should_flap(&game));
    }

    #[test]
    fn test_keeps_body_airborne_without_obstacles() {
        let mut game = Game::new(Tuning::default(), MemoryStore::new(0), 3).expect("valid tuning");
        for _ in 0..2000 {
            if should_flap(&game) {
                game.primary_action();
            }
            game.step();
        }
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(game.player().y > 0.0);
    }
}
