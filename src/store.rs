use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::round::{Round, RoundId};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid round data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("round not found: {0}")]
    NotFound(RoundId),
}

// Trait for round storage (file-backed or in memory)
pub trait RoundRepository {
    fn load(&self) -> Result<Vec<Round>, StoreError>;
    fn save(&mut self, rounds: &[Round]) -> Result<(), StoreError>;

    fn delete(&mut self, id: &RoundId) -> Result<(), StoreError> {
        let mut rounds = self.load()?;
        let before = rounds.len();
        rounds.retain(|r| &r.id != id);
        if rounds.len() == before {
            log::warn!("[STORE] Round {} not found, nothing deleted", id);
            return Err(StoreError::NotFound(id.clone()));
        }
        log::info!("[STORE] Deleted round {}", id);
        self.save(&rounds)
    }

    fn add(&mut self, round: Round) -> Result<(), StoreError> {
        let mut rounds = self.load()?;
        log::info!("[STORE] Adding round {} ({})", round.id, round.course_name);
        rounds.push(round);
        self.save(&rounds)
    }

    /// Replace the stored round with the same id. Returns `false` (and
    /// changes nothing) when no such round exists.
    fn update(&mut self, round: Round) -> Result<bool, StoreError> {
        let mut rounds = self.load()?;
        match rounds.iter().position(|r| r.id == round.id) {
            Some(index) => {
                log::info!("[STORE] Updating round {}", round.id);
                rounds[index] = round;
                self.save(&rounds)?;
                Ok(true)
            }
            None => {
                log::warn!("[STORE] Round {} not found, update ignored", round.id);
                Ok(false)
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    rounds: Vec<Round>,
}

impl InMemoryStore {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}

impl RoundRepository for InMemoryStore {
    fn load(&self) -> Result<Vec<Round>, StoreError> {
        Ok(self.rounds.clone())
    }

    fn save(&mut self, rounds: &[Round]) -> Result<(), StoreError> {
        self.rounds = rounds.to_vec();
        Ok(())
    }
}

/// Rounds kept as a pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RoundRepository for JsonFileStore {
    fn load(&self) -> Result<Vec<Round>, StoreError> {
        if !self.path.exists() {
            log::info!(
                "[STORE] {} not found, starting with no rounds",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let rounds: Vec<Round> = serde_json::from_str(&data)?;
        log::debug!(
            "[STORE] Loaded {} rounds from {}",
            rounds.len(),
            self.path.display()
        );
        Ok(rounds)
    }

    fn save(&mut self, rounds: &[Round]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(rounds)?;

        // Write beside the target and rename so readers never see a partial file
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        log::debug!(
            "[STORE] Saved {} rounds to {}",
            rounds.len(),
            self.path.display()
        );
        Ok(())
    }
}
