//! Chessgame engine: chess positions in FEN, full move legality,
//! and game sessions with undo.
//!
//! ```
//! use chessgame_engine::{Game, MoveRequest};
//!
//! let mut game = Game::new();
//! let fen = game.make_move(&MoveRequest::new("e2", "e4", None)).unwrap();
//! assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! assert_eq!(game.undo().unwrap(), chessgame_engine::fen::START_FEN);
//! ```

pub mod boardrepr;
pub mod coretypes;
pub mod error;
pub mod fen;
pub mod game;
pub(crate) mod movegen;
pub mod movelist;
pub mod perft;
pub mod position;
pub mod request;
pub mod service;
pub mod store;

pub use error::{Error, ErrorKind};
pub use fen::Fen;
pub use game::Game;
pub use position::Position;
pub use request::MoveRequest;
pub use service::GameService;
pub use store::{GameId, GameRecord, GameStore, MemoryGameStore};
