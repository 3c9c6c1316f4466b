//! Game service: owner-checked game operations on top of a GameStore.
//!
//! Every mutation loads the stored record, rebuilds its Game, applies the
//! operation and saves the result with the version that was loaded. A save
//! racing another update of the same game fails with StaleRecord, leaving
//! the winning update in place; the caller may reload and retry.

use crate::error::{self, ErrorKind};
use crate::fen::START_FEN;
use crate::game::Game;
use crate::request::MoveRequest;
use crate::store::{GameId, GameRecord, GameStore};

pub struct GameService<S: GameStore> {
    store: S,
}

impl<S: GameStore> GameService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a game in the standard start position for `owner`.
    pub fn create_game(&self, owner: &str) -> error::Result<GameId> {
        self.create_game_from_fen(owner, START_FEN)
    }

    /// Create a game starting from any valid position.
    /// The Fen is stored in canonical form.
    pub fn create_game_from_fen(&self, owner: &str, fen: &str) -> error::Result<GameId> {
        let fen = Game::from_fen(fen)?.fen();
        let record = self.store.insert(owner, &fen)?;
        tracing::debug!(game = %record.id, owner, fen = %record.fen, "created game");
        Ok(record.id)
    }

    /// Fen of a game's current position.
    pub fn game_fen(&self, id: GameId, owner: &str) -> error::Result<String> {
        Ok(self.load_owned(id, owner)?.fen)
    }

    /// Rebuild a game with its history, for read-only inspection.
    pub fn game(&self, id: GameId, owner: &str) -> error::Result<Game> {
        let record = self.load_owned(id, owner)?;
        Game::with_history(&record.fen, &record.history)
    }

    /// Number of moves that can be undone in a game.
    pub fn history_len(&self, id: GameId, owner: &str) -> error::Result<usize> {
        Ok(self.load_owned(id, owner)?.history.len())
    }

    /// Play a move in a game and return the new Fen.
    pub fn make_move(
        &self,
        id: GameId,
        owner: &str,
        request: &MoveRequest,
    ) -> error::Result<String> {
        self.update(id, owner, |game| game.make_move(request))
    }

    /// Take back the last move of a game and return the restored Fen.
    pub fn undo_move(&self, id: GameId, owner: &str) -> error::Result<String> {
        self.update(id, owner, Game::undo)
    }

    /// Return a game to the start position, clearing its history.
    pub fn reset_game(&self, id: GameId, owner: &str) -> error::Result<String> {
        self.update(id, owner, |game| Ok(game.reset()))
    }

    /// Load a record, reporting games of other owners as not found.
    fn load_owned(&self, id: GameId, owner: &str) -> error::Result<GameRecord> {
        match self.store.load(id)? {
            Some(record) if record.owner == owner => Ok(record),
            _ => Err((ErrorKind::GameNotFound, format!("no game {id} for {owner}")).into()),
        }
    }

    fn update<F>(&self, id: GameId, owner: &str, operation: F) -> error::Result<String>
    where
        F: FnOnce(&mut Game) -> error::Result<String>,
    {
        let record = self.load_owned(id, owner)?;
        let mut game = Game::with_history(&record.fen, &record.history)?;
        let fen = operation(&mut game)?;

        let updated = GameRecord {
            fen: fen.clone(),
            history: game.history_fens(),
            ..record
        };
        match self.store.save(&updated) {
            Ok(saved) => {
                tracing::debug!(game = %id, version = saved.version, fen = %saved.fen, "saved game");
                Ok(fen)
            }
            Err(err) => {
                if err.kind() == ErrorKind::StaleRecord {
                    tracing::warn!(game = %id, "discarded update of stale game record");
                }
                Err(err)
            }
        }
    }
}
