//! Game structure.
//!
//! A Game is a single chess game in progress: its current position
//! and every prior position, so moves can be taken back.

use crate::coretypes::{Move, MoveInfo};
use crate::error::{self, ErrorKind};
use crate::fen::Fen;
use crate::position::Position;
use crate::request::MoveRequest;

/// Game contains information for an in progress game:
/// the current position, and the positions before each move that was played.
/// The last entry of history is the position before the most recent move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    position: Position,
    history: Vec<Position>,
}

impl Game {
    /// Create a new Game in the standard chess start position, with no history.
    pub fn new() -> Self {
        Self::from(Position::start_position())
    }

    /// Create a new game in the standard chess start position.
    pub fn start_position() -> Self {
        Self::new()
    }

    /// Create a new Game from a Fen string, with no history.
    pub fn from_fen(fen: &str) -> error::Result<Self> {
        Ok(Self::from(Position::parse_fen(fen)?))
    }

    /// Rebuild a Game from its current Fen and the Fens of prior positions, oldest first.
    pub fn with_history<S: AsRef<str>>(fen: &str, history: &[S]) -> error::Result<Self> {
        let position = Position::parse_fen(fen)?;
        let history = history
            .iter()
            .map(|fen| Position::parse_fen(fen.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { position, history })
    }

    /// Create a new Game from a base position and a sequence of moves.
    /// This generates the current position by applying the sequence of moves to the base.
    /// If a move in the sequence is illegal, Err is returned.
    pub fn from_moves(base_position: Position, moves: &[Move]) -> error::Result<Self> {
        let mut game = Self::from(base_position);
        for move_ in moves {
            game.play(*move_)?;
        }
        Ok(game)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Fen of the current position.
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Fens of prior positions, oldest first.
    pub fn history_fens(&self) -> Vec<String> {
        self.history.iter().map(Position::to_fen).collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Play a legal move, saving the prior position.
    /// On error the game is unchanged.
    pub fn play(&mut self, move_: Move) -> error::Result<MoveInfo> {
        let prior = self.position;
        let move_info = self.position.do_legal_move(move_)?;
        self.history.push(prior);
        tracing::debug!(move_ = %move_info, fen = %self.position.to_fen(), "played move");
        Ok(move_info)
    }

    /// Play the move described by a request and return the Fen of the new position.
    pub fn make_move(&mut self, request: &MoveRequest) -> error::Result<String> {
        let move_ = request.to_move()?;
        self.play(move_)?;
        Ok(self.fen())
    }

    /// Restore the position before the most recent move and return its Fen.
    pub fn undo(&mut self) -> error::Result<String> {
        let prior = self.history.pop().ok_or(ErrorKind::NoHistory)?;
        self.position = prior;
        tracing::debug!(fen = %self.position.to_fen(), "undid move");
        Ok(self.fen())
    }

    /// Return to the standard start position, clearing history, and return its Fen.
    pub fn reset(&mut self) -> String {
        *self = Self::new();
        tracing::debug!("reset game");
        self.fen()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a position to a Game with no past moves.
impl From<Position> for Game {
    fn from(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }
}
