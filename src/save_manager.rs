use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::core::game_state::GameState;
use crate::error::GameError;

const SAVE_FILE: &str = "save.json";

/// Reads and writes the persisted session record.
///
/// The record is pretty-printed JSON. Writes go to a temp file first and
/// are renamed into place, so a failed write never leaves a torn save.
/// Fields missing from an old record load with their new-game defaults.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Resolves the platform save directory, creating it if needed.
    pub fn new() -> Result<Self, GameError> {
        let dir = match ProjectDirs::from("", "", "wander") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => dirs::home_dir()
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "could not determine home directory")
                })?
                .join(".wander"),
        };
        fs::create_dir_all(&dir)?;
        Ok(Self {
            save_path: dir.join(SAVE_FILE),
        })
    }

    /// Uses an explicit save file path instead of the platform default.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the full session record.
    pub fn save(&self, state: &GameState) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tmp_path = self.save_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.save_path)?;
        Ok(())
    }

    /// Reads the session record back.
    ///
    /// A missing file is `NotFound`, so callers can fall back to new-game
    /// defaults; unreadable content surfaces as an `Io` error.
    pub fn load(&self) -> Result<GameState, GameError> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(GameError::NotFound),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(state)
    }
}
