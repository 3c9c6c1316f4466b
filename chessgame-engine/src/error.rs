//! Chessgame engine error type.
//!
//! Every failure is deterministic: retrying the same call with the same input
//! fails the same way, and no failing call modifies the value it was called on.

use std::error;
use std::fmt::{self, Display};
use std::result;

use crate::fen::ParseFenError;

/// Chessgame engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the chessgame engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Fen string does not follow the 6 field FEN grammar.
    FenMalformed,

    /// Square parse string malformed.
    SquareMalformed,
    /// File parse string malformed.
    ParseFileMalformed,
    /// Rank parse string malformed.
    ParseRankMalformed,
    /// Color parse string malformed.
    ParseColorMalformed,
    /// Piece parse string malformed.
    ParsePieceMalformed,
    /// Castling parse string malformed.
    ParseCastlingMalformed,
    /// Coordinate move string malformed.
    ParseMoveMalformed,

    /// Move breaks the rules of chess for the current position.
    IllegalMove,
    /// Move would leave the moving player's own king attacked.
    ExposesKing,
    /// Pawn reaches the last rank but no promotion piece was given.
    MissingPromotion,

    /// Undo was requested on a game without any prior positions.
    NoHistory,

    /// No game exists with the requested id for the requesting owner.
    GameNotFound,
    /// Stored game changed since it was loaded, so the update was discarded.
    StaleRecord,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FenMalformed => "fen malformed",

            ErrorKind::SquareMalformed => "square malformed",
            ErrorKind::ParseFileMalformed => "parse file malformed",
            ErrorKind::ParseRankMalformed => "parse rank malformed",
            ErrorKind::ParseColorMalformed => "parse color malformed",
            ErrorKind::ParsePieceMalformed => "parse piece malformed",
            ErrorKind::ParseCastlingMalformed => "parse castling malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",

            ErrorKind::IllegalMove => "illegal move",
            ErrorKind::ExposesKing => "illegal move exposes king",
            ErrorKind::MissingPromotion => "missing promotion piece",

            ErrorKind::NoHistory => "no moves to undo",

            ErrorKind::GameNotFound => "game not found",
            ErrorKind::StaleRecord => "game record is stale",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the chessgame engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// The kind of this error, used by callers to decide how to report it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
            Error::Custom(error_kind, _) => *error_kind,
        }
    }

    /// True for every move that breaks the rules, including moves that expose the king.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self.kind(), ErrorKind::IllegalMove | ErrorKind::ExposesKing)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Custom(_, box_error) => Some(box_error.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl From<ParseFenError> for Error {
    fn from(error: ParseFenError) -> Self {
        Self::Custom(ErrorKind::FenMalformed, error.into())
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
