//! Flappy Square entry point
//!
//! Native: runs one headless autopilot round on virtual time and logs the
//! result. Web: exposes `WasmGame` for a JS host that owns the canvas, the
//! keyboard and requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use flappy_square::highscores::LocalStorageStore;
    use flappy_square::sim::{Aabb, Game};
    use flappy_square::{Runner, Tuning};

    fn push_box(out: &mut Vec<f32>, b: &Aabb) {
        out.extend_from_slice(&[b.min.x, b.min.y, b.max.x, b.max.y]);
    }

    /// Game handle for the JS host
    #[wasm_bindgen]
    pub struct WasmGame {
        runner: Runner<LocalStorageStore>,
    }

    #[wasm_bindgen]
    impl WasmGame {
        #[wasm_bindgen(constructor)]
        pub fn new(seed: f64) -> Result<WasmGame, JsValue> {
            let game = Game::new(Tuning::default(), LocalStorageStore::default(), seed as u64)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            log::info!("Game initialized with seed: {}", seed as u64);
            Ok(WasmGame {
                runner: Runner::new(game),
            })
        }

        /// Advance by real elapsed time; returns ticks run
        pub fn frame(&mut self, elapsed_ms: f64) -> u32 {
            self.runner.frame(elapsed_ms.max(0.0) as u64)
        }

        pub fn primary_action(&mut self) {
            self.runner.game_mut().primary_action();
        }

        pub fn toggle_pause(&mut self) {
            self.runner.game_mut().toggle_pause();
        }

        pub fn reset(&mut self) {
            self.runner.game_mut().reset();
        }

        pub fn score(&self) -> u32 {
            u32::try_from(self.runner.game().score()).unwrap_or(u32::MAX)
        }

        pub fn high_score(&self) -> u32 {
            u32::try_from(self.runner.game().high_score()).unwrap_or(u32::MAX)
        }

        pub fn phase(&self) -> String {
            format!("{:?}", self.runner.game().phase())
        }

        /// [min_x, min_y, max_x, max_y]
        pub fn player_box(&self) -> Vec<f32> {
            let mut out = Vec::with_capacity(4);
            push_box(&mut out, &self.runner.game().player_box());
            out
        }

        /// Eight floats per pair: top segment box, then bottom segment box
        pub fn obstacle_boxes(&self) -> Vec<f32> {
            let boxes = self.runner.game().obstacle_boxes();
            let mut out = Vec::with_capacity(boxes.len() * 8);
            for [top, bottom] in &boxes {
                push_box(&mut out, top);
                push_box(&mut out, bottom);
            }
            out
        }

        pub fn ground_offsets(&self) -> Vec<f32> {
            self.runner.game().ground_offsets().to_vec()
        }

        /// Events since the last call as a JSON array
        pub fn drain_events(&mut self) -> Result<String, JsValue> {
            let events = self.runner.game_mut().drain_events();
            serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }

    pub fn init() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Flappy Square starting...");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_square::highscores::FileStore;
    use flappy_square::sim::{Game, GameEvent, GamePhase, should_flap};
    use flappy_square::{Runner, Tuning};

    env_logger::init();
    log::info!("Flappy Square (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    let tuning = match std::env::var("FLAPPY_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };
    let tick_ms = tuning.tick_ms;

    log::info!("Headless autopilot round with seed: {}", seed);
    let game = match Game::new(tuning, FileStore::default(), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    let mut runner = Runner::new(game);

    // Ten minutes of game time at most
    let max_frames = 10 * 60 * 1000 / tick_ms;
    for _ in 0..max_frames {
        if should_flap(runner.game()) {
            runner.game_mut().primary_action();
        }
        runner.frame(tick_ms);

        for event in runner.game_mut().drain_events() {
            match event {
                GameEvent::Scored { score, .. } => log::debug!("Score: {}", score),
                GameEvent::Crashed { cause } => log::info!("Crashed: {:?}", cause),
                GameEvent::NewHighScore { score } => log::info!("New high score: {}", score),
                _ => {}
            }
        }

        if runner.game().phase() == GamePhase::GameOver {
            break;
        }
    }

    let game = runner.game();
    println!(
        "score {} (best {}) after {} ticks",
        game.score(),
        game.high_score(),
        game.time_ticks()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
