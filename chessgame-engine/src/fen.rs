//! Forsyth-Edwards Notation, a standard notation for describing a chess position.
//! <https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation>
//!
//! Fen ::= Placement ' ' SideToMove ' ' Castling ' ' EnPassant ' ' HalfMoveClock ' ' FullMoveNumber
//!
//! Placement lists ranks 8 to 1 separated by '/', each rank listing files a to h.
//! A digit 1-8 stands for that many empty squares.

use std::error;
use std::fmt::{self, Display};

use crate::boardrepr::Mailbox;
use crate::coretypes::{Castling, Color, MoveCount, Piece, PieceKind, Rank, Square};
use crate::coretypes::{NUM_FILES, NUM_RANKS};
use crate::position::Position;

/// Fen of the standard chess start position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Reason a FEN string could not be parsed.
/// Each variant except FieldCount holds the offending field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseFenError {
    /// Number of whitespace separated fields found, when it is not 6.
    FieldCount(usize),
    Placement(String),
    SideToMove(String),
    Castling(String),
    EnPassant(String),
    HalfMoveClock(String),
    FullMoveNumber(String),
    /// Placement does not hold exactly one king of each color.
    Kings(String),
}

impl Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseFenError::*;
        match self {
            FieldCount(count) => write!(f, "expected 6 fields, found {count}"),
            Placement(s) => write!(f, "invalid piece placement {s:?}"),
            SideToMove(s) => write!(f, "invalid side to move {s:?}, expected w or b"),
            Castling(s) => write!(f, "invalid castling rights {s:?}"),
            EnPassant(s) => write!(f, "invalid en passant square {s:?}"),
            HalfMoveClock(s) => write!(f, "invalid halfmove clock {s:?}"),
            FullMoveNumber(s) => write!(f, "invalid fullmove number {s:?}"),
            Kings(s) => write!(f, "placement {s:?} needs exactly one king per color"),
        }
    }
}

impl error::Error for ParseFenError {}

/// Allows a type to be constructed from and serialized to a FEN string.
pub trait Fen: Sized {
    /// Attempt to parse a Fen string into implementing type.
    fn parse_fen(s: &str) -> Result<Self, ParseFenError>;

    /// Returns string representation of implementing type in Fen format.
    fn to_fen(&self) -> String;
}

impl Fen for Position {
    fn parse_fen(s: &str) -> Result<Self, ParseFenError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [placement, side_to_move, castling, en_passant, halfmoves, fullmoves] =
            <[&str; 6]>::try_from(fields.as_slice())
                .map_err(|_| ParseFenError::FieldCount(fields.len()))?;

        let board = parse_placement(placement)?;
        for color in Color::iter() {
            if board.count(Piece::new(color, PieceKind::King)) != 1 {
                return Err(ParseFenError::Kings(placement.to_string()));
            }
        }
        let side_to_move = parse_side_to_move(side_to_move)?;
        let castling = castling
            .parse::<Castling>()
            .map_err(|_| ParseFenError::Castling(castling.to_string()))?;
        let en_passant = parse_en_passant(en_passant, side_to_move, &board)?;
        let halfmoves = parse_clock(halfmoves)
            .ok_or_else(|| ParseFenError::HalfMoveClock(halfmoves.to_string()))?;
        let fullmoves = parse_clock(fullmoves)
            .filter(|&fullmoves| fullmoves > 0)
            .ok_or_else(|| ParseFenError::FullMoveNumber(fullmoves.to_string()))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmoves,
            fullmoves,
        })
    }

    fn to_fen(&self) -> String {
        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |square| square.to_string());
        format!(
            "{} {} {} {} {} {}",
            placement_to_fen(&self.board),
            self.side_to_move.to_char(),
            self.castling,
            en_passant,
            self.halfmoves,
            self.fullmoves
        )
    }
}

/// Placement ::= Rank8 '/' Rank7 '/' ... '/' Rank1
fn parse_placement(placement: &str) -> Result<Mailbox, ParseFenError> {
    let malformed = || ParseFenError::Placement(placement.to_string());
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != NUM_RANKS {
        return Err(malformed());
    }

    let mut board = Mailbox::new();
    for (rank_str, rank) in ranks.into_iter().zip((0..NUM_RANKS).rev()) {
        let mut file = 0usize;
        for ch in rank_str.chars() {
            match ch {
                '1'..='8' => file += ch as usize - '0' as usize,
                _ => {
                    let piece = Piece::try_from(ch).map_err(|_| malformed())?;
                    if file >= NUM_FILES {
                        return Err(malformed());
                    }
                    board[rank * NUM_FILES + file] = Some(piece);
                    file += 1;
                }
            }
            if file > NUM_FILES {
                return Err(malformed());
            }
        }
        if file != NUM_FILES {
            return Err(malformed());
        }
    }
    Ok(board)
}

fn placement_to_fen(board: &Mailbox) -> String {
    let mut placement = String::with_capacity(71);

    for rank in (0..NUM_RANKS).rev() {
        let mut empty = 0u8;
        for file in 0..NUM_FILES {
            match board[rank * NUM_FILES + file] {
                Some(piece) => {
                    if empty > 0 {
                        placement.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    placement.push(char::from(piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            placement.push((b'0' + empty) as char);
        }
        if rank > 0 {
            placement.push('/');
        }
    }
    placement
}

fn parse_side_to_move(side_to_move: &str) -> Result<Color, ParseFenError> {
    match side_to_move {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ParseFenError::SideToMove(side_to_move.to_string())),
    }
}

/// EnPassant ::= '-' | Square on the rank passed by the opponent's last double push.
/// The opponent pawn must stand just past the square, with the square and the
/// pawn's starting square both empty.
fn parse_en_passant(
    en_passant: &str,
    side_to_move: Color,
    board: &Mailbox,
) -> Result<Option<Square>, ParseFenError> {
    if en_passant == "-" {
        return Ok(None);
    }
    let invalid = || ParseFenError::EnPassant(en_passant.to_string());
    let square = en_passant.parse::<Square>().map_err(|_| invalid())?;
    let expected_rank = match side_to_move {
        Color::White => Rank::R6,
        Color::Black => Rank::R3,
    };
    if square.rank() != expected_rank {
        return Err(invalid());
    }

    let forward = side_to_move.forward();
    let pushed = square.offset(0, -forward).ok_or_else(invalid)?;
    let origin = square.offset(0, forward).ok_or_else(invalid)?;
    let opponent_pawn = Some(Piece::new(!side_to_move, PieceKind::Pawn));
    if board[pushed] != opponent_pawn || !board.is_empty(square) || !board.is_empty(origin) {
        return Err(invalid());
    }
    Ok(Some(square))
}

/// Clocks are plain decimal digits, no sign.
fn parse_clock(clock: &str) -> Option<MoveCount> {
    if clock.is_empty() || !clock.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    clock.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PieceKind::*;
    use Square::*;

    #[test]
    fn parse_start_position() {
        let position = Position::parse_fen(START_FEN).unwrap();
        assert_eq!(position, Position::start_position());
        assert_eq!(position.to_fen(), START_FEN);
    }

    #[test]
    fn parse_position_fields() {
        let fen = "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b Kq c6 1 2";
        let err = Position::parse_fen(fen).unwrap_err();
        // c6 is a rank 6 square, so black cannot be to move.
        assert_eq!(err, ParseFenError::EnPassant("c6".to_string()));

        let fen = "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R w Kq c6 1 2";
        let position = Position::parse_fen(fen).unwrap();
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.castling(), Castling::W_KING | Castling::B_QUEEN);
        assert_eq!(position.en_passant(), Some(C6));
        assert_eq!(position.halfmoves(), 1);
        assert_eq!(position.fullmoves(), 2);
        assert_eq!(position.piece_at(C5), Some(Piece::new(Color::Black, Pawn)));
        assert_eq!(position.piece_at(F3), Some(Piece::new(Color::White, Knight)));
        assert_eq!(position.piece_at(G1), None);
        assert_eq!(position.to_fen(), fen);
    }

    #[test]
    fn fen_serialization_is_canonical() {
        let position = Position::parse_fen("  8/8/8/8/8/8/8/K6k   b -  -  12   40 ").unwrap();
        assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/K6k b - - 12 40");

        let position = Position::parse_fen("4k3/8/8/8/8/8/8/4K3 w qkQK - 0 1").unwrap();
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 w KQkq - 0 1");
    }

    #[test]
    fn reject_field_count() {
        assert_eq!(Position::parse_fen(""), Err(ParseFenError::FieldCount(0)));
        assert_eq!(
            Position::parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0"),
            Err(ParseFenError::FieldCount(5))
        );
        assert_eq!(
            Position::parse_fen(&format!("{START_FEN} 0")),
            Err(ParseFenError::FieldCount(7))
        );
    }

    #[test]
    fn reject_bad_placement() {
        let bad_placements = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnrp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/45/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/7p1/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/0/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/ w KQkq - 0 1",
        ];
        for fen in bad_placements {
            assert!(
                matches!(Position::parse_fen(fen), Err(ParseFenError::Placement(_))),
                "{fen}"
            );
        }
        // Adjacent digits are unusual but still describe eight files.
        let fen = "rnbqkbnr/pppppppp/44/8/8/71/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let position = Position::parse_fen(fen).unwrap();
        assert_eq!(position, Position::start_position());
    }

    #[test]
    fn reject_bad_kings() {
        assert!(matches!(
            Position::parse_fen("8/8/8/8/8/8/8/K7 w - - 0 1"),
            Err(ParseFenError::Kings(_))
        ));
        assert!(matches!(
            Position::parse_fen("kk6/8/8/8/8/8/8/K7 w - - 0 1"),
            Err(ParseFenError::Kings(_))
        ));
    }

    #[test]
    fn reject_bad_fields() {
        let base = "4k3/8/8/8/8/8/8/4K3";
        assert_eq!(
            Position::parse_fen(&format!("{base} W - - 0 1")),
            Err(ParseFenError::SideToMove("W".to_string()))
        );
        assert_eq!(
            Position::parse_fen(&format!("{base} white - - 0 1")),
            Err(ParseFenError::SideToMove("white".to_string()))
        );
        for castling in ["KK", "-K", "K-", "KQx", "--"] {
            assert_eq!(
                Position::parse_fen(&format!("{base} w {castling} - 0 1")),
                Err(ParseFenError::Castling(castling.to_string()))
            );
        }
        for en_passant in ["e4", "e9", "i6", "e", "e66"] {
            assert_eq!(
                Position::parse_fen(&format!("{base} w - {en_passant} 0 1")),
                Err(ParseFenError::EnPassant(en_passant.to_string()))
            );
        }
        assert!(Position::parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").is_ok());
        // No pawn behind the target, a blocked target, or an occupied origin square.
        for fen in [
            "4k3/8/8/8/8/8/8/4K3 b - e3 0 1",
            "4k3/8/8/8/4p3/8/8/4K3 b - e3 0 1",
            "4k3/8/8/8/4P3/4N3/8/4K3 b - e3 0 1",
            "4k3/8/8/8/4P3/8/4P3/4K3 b - e3 0 1",
        ] {
            assert_eq!(Position::parse_fen(fen), Err(ParseFenError::EnPassant("e3".to_string())));
        }
        assert_eq!(
            Position::parse_fen(&format!("{base} w - - 0 0")),
            Err(ParseFenError::FullMoveNumber("0".to_string()))
        );
        for clock in ["-1", "+1", "x", "1.5"] {
            assert_eq!(
                Position::parse_fen(&format!("{base} w - - {clock} 1")),
                Err(ParseFenError::HalfMoveClock(clock.to_string()))
            );
            assert_eq!(
                Position::parse_fen(&format!("{base} w - - 0 {clock}")),
                Err(ParseFenError::FullMoveNumber(clock.to_string()))
            );
        }
    }
}
