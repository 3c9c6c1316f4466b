//! Move request as submitted by a player, before it is checked against a position.

use std::fmt::{self, Display};

use crate::coretypes::{Move, PieceKind, Square};
use crate::error;

/// A move given by square names, e.g. from "e7", to "e8", promotion "q".
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    pub promotion: Option<String>,
}

impl MoveRequest {
    pub fn new<S: Into<String>>(from: S, to: S, promotion: Option<S>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            promotion: promotion.map(Into::into),
        }
    }

    /// Promotion piece named by the request.
    /// Only a single letter of q, r, b, n in either case names a piece;
    /// any other text, empty or absent, names none.
    pub fn promotion_piece(&self) -> Option<PieceKind> {
        let promotion = self.promotion.as_deref()?;
        let mut chars = promotion.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => PieceKind::from_promotion_char(ch),
            _ => None,
        }
    }

    /// Parse the request into a Move.
    /// Fails with SquareMalformed if either square name is invalid.
    pub fn to_move(&self) -> error::Result<Move> {
        let from = self.from.parse::<Square>()?;
        let to = self.to.parse::<Square>()?;
        Ok(Move::new(from, to, self.promotion_piece()))
    }
}

impl From<Move> for MoveRequest {
    fn from(move_: Move) -> Self {
        Self {
            from: move_.from().to_string(),
            to: move_.to().to_string(),
            promotion: move_
                .promotion()
                .map(|piece_kind| piece_kind.to_char().to_ascii_lowercase().to_string()),
        }
    }
}

impl Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.to, self.promotion.as_deref().unwrap_or(""))
    }
}
