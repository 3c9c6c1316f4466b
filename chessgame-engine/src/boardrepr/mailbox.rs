//! A [mailbox](https://www.chessprogramming.org/Mailbox) is a square-centric
//! representation of a chess board.
//!
//! A Mailbox is an array of size Files x Ranks where each index may contain a
//! chess piece or be empty.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::coretypes::{
    Color, Piece, PieceKind, Square, SquareIndexable, NUM_FILES, NUM_RANKS, NUM_SQUARES,
};

/// Classic 8x8 square board representation of Chess board.
/// Mailbox is Square-Centric, meaning it indexes by square to get a piece.
/// It does not know the rules of chess; any arrangement of pieces is representable.
/// Index starts at A1.
/// A1 = idx 0
/// B1 = idx 1
/// A2 = idx 8
/// H8 = idx 63
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mailbox {
    board: [Option<Piece>; Self::SIZE],
}

impl Mailbox {
    pub const FILES: usize = NUM_FILES;
    pub const RANKS: usize = NUM_RANKS;
    pub const SIZE: usize = NUM_SQUARES;

    /// Creates an empty Mailbox, where all squares are None.
    pub fn new() -> Self {
        Mailbox {
            board: [None; Mailbox::SIZE],
        }
    }

    /// Create Mailbox with pieces arranged in starting chess position.
    pub fn start_position() -> Self {
        use Color::*;
        use PieceKind::*;
        const BACK_RANK: [PieceKind; NUM_FILES] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut mb = Self::new();

        for (file, piece_kind) in BACK_RANK.into_iter().enumerate() {
            mb.board[file] = Some(Piece::new(White, piece_kind));
            mb.board[NUM_FILES + file] = Some(Piece::new(White, Pawn));
            mb.board[NUM_SQUARES - 2 * NUM_FILES + file] = Some(Piece::new(Black, Pawn));
            mb.board[NUM_SQUARES - NUM_FILES + file] = Some(Piece::new(Black, piece_kind));
        }

        mb
    }

    pub fn board(&self) -> &[Option<Piece>; Self::SIZE] {
        &self.board
    }

    /// Returns the piece on a square, if any.
    pub fn piece_at<I: SquareIndexable>(&self, square: I) -> Option<Piece> {
        self.board[square.idx()]
    }

    /// Returns true if no piece is on the square.
    pub fn is_empty<I: SquareIndexable>(&self, square: I) -> bool {
        self.board[square.idx()].is_none()
    }

    /// Iterator over every occupied square with its piece, A1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| self[square].map(|piece| (square, piece)))
    }

    /// Iterator over every occupied square of a color with its piece.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Number of squares holding exactly this piece.
    pub fn count(&self, piece: Piece) -> usize {
        self.board.iter().filter(|&&sq| sq == Some(piece)).count()
    }

    /// Square of the first king of color found, if any.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
    }

    /// Removes and returns the piece on a square.
    pub fn take<I: SquareIndexable>(&mut self, square: I) -> Option<Piece> {
        self.board[square.idx()].take()
    }

    /// Returns pretty-printed chess board representation of Self.
    /// The chess board has borders and file/rank indicators.
    pub fn pretty(&self) -> String {
        const RANK_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(RANK_SEP);
        for rank in (0..Self::RANKS).rev() {
            pretty.push_str("| ");

            for file in 0..Self::FILES {
                pretty.push(match self[rank * Self::FILES + file] {
                    Some(piece) => char::from(piece),
                    None => ' ',
                });
                pretty.push_str(" | ");
            }
            pretty.push_str(&(rank + 1).to_string());
            pretty.push('\n');
            pretty.push_str(RANK_SEP);
        }
        pretty.push_str("  a   b   c   d   e   f   g   h\n");

        pretty
    }
}

/// Be careful with accessing with usize, as usize value out of bounds will panic.
impl Index<usize> for Mailbox {
    type Output = Option<Piece>;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.board[idx]
    }
}

impl IndexMut<usize> for Mailbox {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.board[idx]
    }
}

impl Index<Square> for Mailbox {
    type Output = Option<Piece>;
    fn index(&self, square: Square) -> &Self::Output {
        &self.board[square.idx()]
    }
}

impl IndexMut<Square> for Mailbox {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.board[square.idx()]
    }
}

/// Default value is that of a standard starting chess position.
impl Default for Mailbox {
    fn default() -> Self {
        Mailbox::start_position()
    }
}

impl Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;
    use PieceKind::*;
    use Square::*;

    #[test]
    fn start_position_layout() {
        let mb = Mailbox::start_position();
        assert_eq!(mb.piece_at(A1), Some(Piece::new(White, Rook)));
        assert_eq!(mb.piece_at(D1), Some(Piece::new(White, Queen)));
        assert_eq!(mb.piece_at(E1), Some(Piece::new(White, King)));
        assert_eq!(mb.piece_at(G8), Some(Piece::new(Black, Knight)));
        assert_eq!(mb.piece_at(E8), Some(Piece::new(Black, King)));
        assert_eq!(mb.piece_at(C7), Some(Piece::new(Black, Pawn)));
        assert_eq!(mb.piece_at(H2), Some(Piece::new(White, Pawn)));
        assert!(mb.is_empty(E4));
        assert_eq!(mb.pieces().count(), 32);
        assert_eq!(mb.pieces_of(Black).count(), 16);
        assert_eq!(mb.count(Piece::new(White, Pawn)), 8);
        assert_eq!(mb.king_square(White), Some(E1));
        assert_eq!(mb.king_square(Black), Some(E8));
    }

    #[test]
    fn take_and_place() {
        let mut mb = Mailbox::new();
        assert_eq!(mb.king_square(White), None);
        mb[E4] = Some(Piece::new(White, Knight));
        assert!(!mb.is_empty(E4));
        assert_eq!(mb.take(E4), Some(Piece::new(White, Knight)));
        assert!(mb.is_empty(E4));
        assert_eq!(mb.take(E4), None);
    }

    #[test]
    fn display_start_position_mailbox() {
        let pretty = Mailbox::start_position().pretty();
        let first_rank = pretty.lines().nth(1).unwrap();
        assert_eq!(first_rank, "| r | n | b | q | k | b | n | r | 8");
        assert!(pretty.ends_with("  a   b   c   d   e   f   g   h\n"));
    }
}
