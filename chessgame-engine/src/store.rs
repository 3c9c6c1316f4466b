//! Persistence of games between requests.
//!
//! A stored game is its current Fen plus the Fens of its prior positions,
//! so a game rebuilt from a record can still undo its moves.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{self, ErrorKind};

/// Identifier of a stored game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GameId(pub u64);

impl Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A game as held by a GameStore.
/// `version` counts successful saves and detects concurrent updates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameRecord {
    pub id: GameId,
    pub owner: String,
    pub fen: String,
    /// Fens of prior positions, oldest first.
    pub history: Vec<String>,
    pub version: u64,
}

/// Storage for game records, shared between concurrent callers.
pub trait GameStore: Send + Sync {
    /// Store a new game with no history, assigning it an id and version 0.
    fn insert(&self, owner: &str, fen: &str) -> error::Result<GameRecord>;

    /// Load a game by id, Ok(None) if it does not exist.
    fn load(&self, id: GameId) -> error::Result<Option<GameRecord>>;

    /// Replace a stored game and return it with its new version.
    /// Fails with StaleRecord if the stored version differs from `record.version`,
    /// and with GameNotFound if no game has the record's id.
    fn save(&self, record: &GameRecord) -> error::Result<GameRecord>;
}

#[derive(Debug, Default)]
struct Records {
    next_id: u64,
    games: HashMap<GameId, GameRecord>,
}

/// GameStore held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    inner: Mutex<Records>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.lock().games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Records stay consistent across a panic, since every update is a single insert.
    fn lock(&self) -> MutexGuard<'_, Records> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameStore for MemoryGameStore {
    fn insert(&self, owner: &str, fen: &str) -> error::Result<GameRecord> {
        let mut records = self.lock();
        records.next_id += 1;
        let record = GameRecord {
            id: GameId(records.next_id),
            owner: owner.to_string(),
            fen: fen.to_string(),
            history: Vec::new(),
            version: 0,
        };
        records.games.insert(record.id, record.clone());
        Ok(record)
    }

    fn load(&self, id: GameId) -> error::Result<Option<GameRecord>> {
        Ok(self.lock().games.get(&id).cloned())
    }

    fn save(&self, record: &GameRecord) -> error::Result<GameRecord> {
        let mut records = self.lock();
        let stored = records
            .games
            .get_mut(&record.id)
            .ok_or((ErrorKind::GameNotFound, format!("no game with id {}", record.id)))?;

        if stored.version != record.version {
            return Err((
                ErrorKind::StaleRecord,
                format!(
                    "game {} is at version {}, update was based on version {}",
                    record.id, stored.version, record.version
                ),
            )
                .into());
        }
        *stored = GameRecord {
            version: record.version + 1,
            ..record.clone()
        };
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::START_FEN;

    #[test]
    fn insert_assigns_ids() {
        let store = MemoryGameStore::new();
        assert!(store.is_empty());
        let first = store.insert("alice", START_FEN).unwrap();
        let second = store.insert("bob", START_FEN).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.version, 0);
        assert!(first.history.is_empty());
        assert_eq!(store.len(), 2);
        assert_eq!(store.load(second.id).unwrap(), Some(second));
        assert_eq!(store.load(GameId(999)).unwrap(), None);
    }

    #[test]
    fn save_bumps_version() {
        let store = MemoryGameStore::new();
        let mut record = store.insert("alice", START_FEN).unwrap();
        record.history.push(START_FEN.to_string());
        record.fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1".to_string();

        let saved = store.save(&record).unwrap();
        assert_eq!(saved.version, 1);
        assert_eq!(saved.fen, record.fen);
        assert_eq!(store.load(record.id).unwrap(), Some(saved));
    }

    #[test]
    fn stale_save_is_rejected() {
        let store = MemoryGameStore::new();
        let loaded = store.insert("alice", START_FEN).unwrap();
        let concurrent = loaded.clone();

        store.save(&loaded).unwrap();
        let err = store.save(&concurrent).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StaleRecord);
        assert_eq!(store.load(loaded.id).unwrap().unwrap().version, 1);
    }

    #[test]
    fn save_unknown_game() {
        let store = MemoryGameStore::new();
        let record = GameRecord {
            id: GameId(7),
            owner: "alice".to_string(),
            fen: START_FEN.to_string(),
            history: Vec::new(),
            version: 0,
        };
        assert_eq!(store.save(&record).unwrap_err().kind(), ErrorKind::GameNotFound);
    }
}
