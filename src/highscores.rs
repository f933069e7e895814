//! Best-score persistence
//!
//! The simulation only talks to the `HighScoreStore` trait. Loading never
//! fails from the caller's side (missing or unreadable data means a best of 0);
//! saving reports errors so the caller can log them and carry on.
//!
//! Native saves are a bare integer in `flappy_highscore.txt`; LocalStorage
//! holds a small JSON record. Either store reads both forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("high score storage unavailable")]
    Unavailable,
}

/// External home of the best score
pub trait HighScoreStore {
    /// Stored best, or 0 when there is no readable record
    fn load(&self) -> u64;
    fn save(&mut self, best: u64) -> Result<(), StoreError>;
}

/// Persisted form of the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub best: u64,
}

impl HighScoreRecord {
    /// Parse stored text. Accepts the JSON record or a bare integer.
    /// Empty text is a best of 0.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Some(Self::default());
        }
        if let Ok(record) = serde_json::from_str::<HighScoreRecord>(text) {
            return Some(record);
        }
        text.parse::<u64>().ok().map(|best| Self { best })
    }
}

/// In-memory store, used by tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u64,
    fail_saves: bool,
    saves: u32,
}

impl MemoryStore {
    pub fn new(best: u64) -> Self {
        Self {
            best,
            ..Default::default()
        }
    }

    /// A store whose saves always fail
    pub fn failing(best: u64) -> Self {
        Self {
            best,
            fail_saves: true,
            saves: 0,
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Number of save attempts, failed ones included
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.best
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        self.saves += 1;
        if self.fail_saves {
            return Err(StoreError::Unavailable);
        }
        self.best = best;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::{HighScoreRecord, HighScoreStore, StoreError};

    /// Text file holding the best score as a bare integer
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub const DEFAULT_PATH: &'static str = "flappy_highscore.txt";

        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    impl Default for FileStore {
        fn default() -> Self {
            Self::new(Self::DEFAULT_PATH)
        }
    }

    impl HighScoreStore for FileStore {
        fn load(&self) -> u64 {
            let text = match fs::read_to_string(&self.path) {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::info!("No high score at {}, starting fresh", self.path.display());
                    return 0;
                }
                Err(e) => {
                    log::warn!("Could not read {}: {}", self.path.display(), e);
                    return 0;
                }
            };

            match HighScoreRecord::parse(&text) {
                Some(record) => record.best,
                None => {
                    log::warn!("Ignoring unreadable high score in {}", self.path.display());
                    0
                }
            }
        }

        fn save(&mut self, best: u64) -> Result<(), StoreError> {
            fs::write(&self.path, best.to_string())?;
            log::debug!("High score {} saved to {}", best, self.path.display());
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use super::{HighScoreRecord, HighScoreStore, StoreError};

    /// Browser LocalStorage entry
    #[derive(Debug, Clone)]
    pub struct LocalStorageStore {
        key: String,
    }

    impl LocalStorageStore {
        pub const DEFAULT_KEY: &'static str = "flappy_square_highscore";

        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
        }
    }

    impl Default for LocalStorageStore {
        fn default() -> Self {
            Self::new(Self::DEFAULT_KEY)
        }
    }

    impl HighScoreStore for LocalStorageStore {
        fn load(&self) -> u64 {
            let Some(storage) = Self::storage() else {
                return 0;
            };
            match storage.get_item(&self.key) {
                Ok(Some(text)) => HighScoreRecord::parse(&text)
                    .map(|record| record.best)
                    .unwrap_or_else(|| {
                        log::warn!("Ignoring unreadable high score entry");
                        0
                    }),
                _ => 0,
            }
        }

        fn save(&mut self, best: u64) -> Result<(), StoreError> {
            let storage = Self::storage().ok_or(StoreError::Unavailable)?;
            let json = serde_json::to_string(&HighScoreRecord { best })?;
            storage
                .set_item(&self.key, &json)
                .map_err(|_| StoreError::Unavailable)
        }
    }
}
