//! The fundamental and simple types of `chessgame_engine`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::ops::{BitOr, Not};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8; // A, B, C, D, E, F, G, H
pub const NUM_RANKS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_FILES * NUM_RANKS;

// The max possible measured number of moves for any chess position.
pub const MAX_MOVES: usize = 218;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Counter for half-move clock and full-moves.
pub type MoveCount = u32;
/// Depth of a move tree, in half-moves.
pub type PlyKind = u32;

/// Color can represent the color of a piece, or a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) piece_kind: PieceKind,
}

/// Observe Castling rights for a position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Castling(u8);

/// Castling Enum constants.
impl Castling {
    pub const W_KING: Castling = Castling(0b00000001);
    pub const W_QUEEN: Castling = Castling(0b00000010);
    pub const B_KING: Castling = Castling(0b00000100);
    pub const B_QUEEN: Castling = Castling(0b00001000);
    pub const W_SIDE: Castling = Castling(Self::W_KING.0 | Self::W_QUEEN.0);
    pub const B_SIDE: Castling = Castling(Self::B_KING.0 | Self::B_QUEEN.0);
    pub const ALL: Castling = Castling(Self::W_SIDE.0 | Self::B_SIDE.0);
    pub const NONE: Castling = Castling(0u8);
}

/// Enum variant order and discriminant must be contiguous, start from 0,
/// and be in ascending order ABCDEFGH.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum File {
    A, B, C, D, E, F, G, H = 7u8,
}

/// Enum variant order and discriminant must be contiguous, start from 0,
/// and be in ascending order 12345678.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Rank {
    R1, R2, R3, R4, R5, R6, R7, R8 = 7u8,
}

/// Square
/// Every possible square on a chess board.
/// `Square::A1 as u8` is that Square's index on a little-endian rank-file board.
/// WARNING: The exact ordering of enums is important for their discriminants.
///          Changing the discriminant of any variant is breaking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8 = 63u8,
}

/// Move
/// A request to move the piece on `from` to `to`, in long algebraic form.
/// Equivalent to a chess "half move", or "ply".
/// The promotion piece is only consulted when a pawn reaches the last rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) promotion: Option<PieceKind>,
}

/// Enum describing the kind of a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveKind {
    /// No special moves or captures, simply moved to empty square.
    Quiet,
    /// Move resulted in a capture of the given piece kind.
    Capture(PieceKind),
    /// Pawn advanced two squares from its starting rank.
    DoublePawnPush,
    /// En passant capture.
    EnPassant,
    /// Pawn reached the last rank, possibly by capturing.
    Promotion {
        promotion: PieceKind,
        captured: Option<PieceKind>,
    },
    CastleKingside,
    CastleQueenside,
}

/// MoveInfo is a move resolved against an existing position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveInfo {
    /// Original square of moving piece.
    pub(crate) from: Square,
    /// Target square of moving piece.
    pub(crate) to: Square,
    /// Kind of the piece that was moved.
    pub(crate) piece_kind: PieceKind,
    /// Flag if move was a regular or special move.
    pub(crate) move_kind: MoveKind,
}

////////////
// Traits //
////////////

/// SquareIndexable
/// A chessboard has 64 squares on it. SquareIndexable can be implemented
/// for types whose values can map directly to a chess Square's index.
pub trait SquareIndexable {
    /// idx(&self) must return a number between 0-63 inclusive, representing
    /// a square on a chess board in little-endian, rank-file order.
    fn idx(&self) -> usize;
}

// Blanket impl on references of types that are SquareIndexable.
impl<I: SquareIndexable> SquareIndexable for &I {
    fn idx(&self) -> usize {
        I::idx(*self)
    }
}

//////////////////////
/// Implementations //
//////////////////////

impl Color {
    /// FEN compliant conversion.
    pub const fn to_char(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Rank that pawns of this color promote on.
    pub const fn promotion_rank(&self) -> Rank {
        match self {
            Color::White => Rank::R8,
            Color::Black => Rank::R1,
        }
    }

    /// Rank that pawns of this color may double push from.
    pub const fn pawn_rank(&self) -> Rank {
        match self {
            Color::White => Rank::R2,
            Color::Black => Rank::R7,
        }
    }

    /// Rank of this color's king and rooks in the start position.
    pub const fn home_rank(&self) -> Rank {
        match self {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        }
    }

    /// Rank direction that pawns of this color push towards.
    pub const fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn iter() -> impl Iterator<Item = Color> {
        [Color::White, Color::Black].into_iter()
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        color.to_char()
    }
}

impl TryFrom<char> for Color {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err((ErrorKind::ParseColorMalformed, "char is not w|b").into()),
        }
    }
}

/// Color ::= 'w' | 'b'
impl FromStr for Color {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Color::try_from(ch),
            _ => Err((ErrorKind::ParseColorMalformed, "expected a single char w|b").into()),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl PieceKind {
    /// FEN compliant conversion, defaults as white pieces.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Returns true if a pawn may promote into this piece kind.
    pub const fn is_promotable(&self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Parse a promotion letter, case-insensitive. `q r b n` are the only accepted letters.
    pub fn from_promotion_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    /// Pieces a pawn may promote into, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

impl Piece {
    pub const fn new(color: Color, piece_kind: PieceKind) -> Self {
        Piece { color, piece_kind }
    }
    /// Immutable Getters.
    pub const fn color(&self) -> Color {
        self.color
    }
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }

    pub const fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_kind.to_char(),
            Color::Black => self.piece_kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl TryFrom<char> for Piece {
    type Error = error::Error;
    fn try_from(value: char) -> error::Result<Self> {
        let color = match value.is_ascii_uppercase() {
            true => Color::White,
            false => Color::Black,
        };
        let piece_kind = match value.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => {
                return Err((
                    ErrorKind::ParsePieceMalformed,
                    "char is not in PNBRQKpnbrqk",
                )
                    .into())
            }
        };
        Ok(Piece { color, piece_kind })
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl Castling {
    /// Make new Castling with all rights of initial chess position.
    pub const fn start_position() -> Self {
        Self::ALL
    }

    /// Returns true if there are no castling rights.
    pub const fn is_none(&self) -> bool {
        self.0 == 0u8
    }

    /// Returns true if Castling mask has all of provided bits.
    pub const fn has(&self, rights: Castling) -> bool {
        self.0 & rights.0 == rights.0
    }

    /// Returns true if self has any of the provided bits.
    pub const fn has_any(&self, rights: Castling) -> bool {
        self.0 & rights.0 != 0
    }

    /// Set given bits to '1' on Castling mask.
    pub fn set(&mut self, rights: Castling) {
        self.0 |= rights.0;
    }

    /// Set given bits to '0' on Castling mask.
    pub fn clear(&mut self, rights: Castling) {
        self.0 &= !rights.0;
    }

    /// Removes all castling rights for a color.
    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => self.clear(Self::W_SIDE),
            Color::Black => self.clear(Self::B_SIDE),
        }
    }

    /// Kingside right of a color.
    pub const fn kingside(color: Color) -> Castling {
        match color {
            Color::White => Self::W_KING,
            Color::Black => Self::B_KING,
        }
    }

    /// Queenside right of a color.
    pub const fn queenside(color: Color) -> Castling {
        match color {
            Color::White => Self::W_QUEEN,
            Color::Black => Self::B_QUEEN,
        }
    }

    /// The right that is lost once the home corner `square` is vacated or captured on.
    /// Returns NONE for any square that is not a rook's home corner.
    pub const fn for_rook_square(square: Square) -> Castling {
        match square {
            Square::H1 => Self::W_KING,
            Square::A1 => Self::W_QUEEN,
            Square::H8 => Self::B_KING,
            Square::A8 => Self::B_QUEEN,
            _ => Self::NONE,
        }
    }
}

/// Defaults to Castling rights for starting chess position, ALL.
impl Default for Castling {
    fn default() -> Self {
        Self::start_position()
    }
}

impl BitOr for Castling {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Displays in FEN-component format.
impl Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_none() {
            return f.write_char('-');
        }
        for (right, ch) in [
            (Self::W_KING, 'K'),
            (Self::W_QUEEN, 'Q'),
            (Self::B_KING, 'k'),
            (Self::B_QUEEN, 'q'),
        ] {
            if self.has(right) {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

/// Castling ::= '-' | ['K'] ['Q'] ['k'] ['q']
/// Rights may appear in any order, but each at most once.
impl FromStr for Castling {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        if s.is_empty() {
            return Err((ErrorKind::ParseCastlingMalformed, "No characters").into());
        }
        if s == "-" {
            return Ok(Castling::NONE);
        }

        let mut castling_rights = Castling::NONE;
        for ch in s.chars() {
            let right = match ch {
                'K' => Self::W_KING,
                'Q' => Self::W_QUEEN,
                'k' => Self::B_KING,
                'q' => Self::B_QUEEN,
                _ => return Err((ErrorKind::ParseCastlingMalformed, "char not of KQkq").into()),
            };
            if castling_rights.has(right) {
                return Err((ErrorKind::ParseCastlingMalformed, "repeated right").into());
            }
            castling_rights.set(right);
        }
        Ok(castling_rights)
    }
}

impl File {
    /// File enum variants cover all u8 values from 0-7 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        use File::*;
        match value {
            0 => Some(A),
            1 => Some(B),
            2 => Some(C),
            3 => Some(D),
            4 => Some(E),
            5 => Some(F),
            6 => Some(G),
            7 => Some(H),
            _ => None,
        }
    }
    /// Get the character representation of File, in lowercase.
    pub const fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl Rank {
    /// Rank enum variants cover all u8 values from 0-7 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        use Rank::*;
        match value {
            0 => Some(R1),
            1 => Some(R2),
            2 => Some(R3),
            3 => Some(R4),
            4 => Some(R5),
            5 => Some(R6),
            6 => Some(R7),
            7 => Some(R8),
            _ => None,
        }
    }
    pub const fn to_char(&self) -> char {
        (b'1' + *self as u8) as char
    }
}

impl TryFrom<char> for File {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'a'..='h' => Ok(Self::from_u8(ch as u8 - b'a').ok_or(ErrorKind::ParseFileMalformed)?),
            _ => Err((ErrorKind::ParseFileMalformed, "file char not of abcdefgh").into()),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            '1'..='8' => Ok(Self::from_u8(ch as u8 - b'1').ok_or(ErrorKind::ParseRankMalformed)?),
            _ => Err((ErrorKind::ParseRankMalformed, "rank char not of 12345678").into()),
        }
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl SquareIndexable for (File, Rank) {
    fn idx(&self) -> usize {
        let &(file, rank) = self;
        NUM_FILES * rank as usize + file as usize
    }
}

impl Square {
    #[rustfmt::skip]
    const ALL: [Square; NUM_SQUARES] = {
        use Square::*;
        [
            A1, B1, C1, D1, E1, F1, G1, H1,
            A2, B2, C2, D2, E2, F2, G2, H2,
            A3, B3, C3, D3, E3, F3, G3, H3,
            A4, B4, C4, D4, E4, F4, G4, H4,
            A5, B5, C5, D5, E5, F5, G5, H5,
            A6, B6, C6, D6, E6, F6, G6, H6,
            A7, B7, C7, D7, E7, F7, G7, H7,
            A8, B8, C8, D8, E8, F8, G8, H8,
        ]
    };

    /// Square enum variants cover all u8 values from 0-63 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < NUM_SQUARES {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// All 64 squares in ascending index order, A1 first.
    pub fn iter() -> impl Iterator<Item = Square> {
        Self::ALL.into_iter()
    }

    pub fn file(&self) -> File {
        match File::from_u8(self.file_u8()) {
            Some(file) => file,
            None => unreachable!("file of a square is at most 7"),
        }
    }

    pub fn rank(&self) -> Rank {
        match Rank::from_u8(self.rank_u8()) {
            Some(rank) => rank,
            None => unreachable!("rank of a square is at most 7"),
        }
    }

    /// Returns 0-based file (0,1,2,3,4,5,6,7), not 1-based chess file.
    pub const fn file_u8(&self) -> u8 {
        *self as u8 % NUM_FILES as u8
    }

    /// Returns 0-based rank (0,1,2,3,4,5,6,7), not 1-based chess rank.
    pub const fn rank_u8(&self) -> u8 {
        *self as u8 / NUM_FILES as u8
    }

    /// Returns the square displaced by the given number of files and ranks,
    /// or None if that falls off the board.
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file_u8() as i8 + file_delta;
        let rank = self.rank_u8() as i8 + rank_delta;
        if file < 0 || file >= NUM_FILES as i8 || rank < 0 || rank >= NUM_RANKS as i8 {
            return None;
        }
        Self::from_u8((rank * NUM_FILES as i8 + file) as u8)
    }
}

impl From<(File, Rank)> for Square {
    fn from(coordinate: (File, Rank)) -> Self {
        Self::ALL[coordinate.idx()]
    }
}

/// Square::= <fileLetter><rankNumber>
impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => {
                return Err(
                    (ErrorKind::SquareMalformed, format!("{s:?} is not a square")).into(),
                )
            }
        };
        let file = File::try_from(file)
            .map_err(|_| (ErrorKind::SquareMalformed, format!("{s:?} has no file a-h")))?;
        let rank = Rank::try_from(rank)
            .map_err(|_| (ErrorKind::SquareMalformed, format!("{s:?} has no rank 1-8")))?;
        Ok(Square::from((file, rank)))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl SquareIndexable for Square {
    fn idx(&self) -> usize {
        *self as usize
    }
}

impl Move {
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    // Immutable Getters
    pub const fn from(&self) -> Square {
        self.from
    }
    pub const fn to(&self) -> Square {
        self.to
    }
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

impl PartialEq<MoveInfo> for Move {
    fn eq(&self, other: &MoveInfo) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion()
    }
}

impl From<MoveInfo> for Move {
    fn from(move_info: MoveInfo) -> Self {
        move_info.move_()
    }
}

impl MoveKind {
    /// Piece kind removed from the board by this move, if any.
    /// En passant always captures a pawn.
    pub const fn captured(&self) -> Option<PieceKind> {
        match self {
            MoveKind::Capture(piece_kind) => Some(*piece_kind),
            MoveKind::EnPassant => Some(PieceKind::Pawn),
            MoveKind::Promotion { captured, .. } => *captured,
            _ => None,
        }
    }

    pub const fn is_castle(&self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

impl MoveInfo {
    pub const fn new(from: Square, to: Square, piece_kind: PieceKind, move_kind: MoveKind) -> Self {
        Self {
            from,
            to,
            piece_kind,
            move_kind,
        }
    }

    /// Get this MoveInfo's inner Move.
    pub const fn move_(&self) -> Move {
        Move::new(self.from, self.to, self.promotion())
    }

    // Immutable Getters
    pub const fn from(&self) -> Square {
        self.from
    }
    pub const fn to(&self) -> Square {
        self.to
    }
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }
    pub const fn move_kind(&self) -> MoveKind {
        self.move_kind
    }

    /// Promotion piece kind, if this move promotes.
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.move_kind {
            MoveKind::Promotion { promotion, .. } => Some(promotion),
            _ => None,
        }
    }

    /// Returns true if this MoveInfo came from a capturing move.
    pub const fn is_capture(&self) -> bool {
        self.move_kind.captured().is_some()
    }

    /// Returns true if this MoveInfo came from a pawn move.
    pub fn is_pawn_move(&self) -> bool {
        self.piece_kind == PieceKind::Pawn
    }

    /// Returns the piece kind of the captured piece, if any.
    pub const fn captured(&self) -> Option<PieceKind> {
        self.move_kind.captured()
    }
}

/// Parses `Pure Algebraic Coordinate Notation`, e.g. `e2e4` or `e7e8q`.
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err((ErrorKind::ParseMoveMalformed, format!("{s:?} is not a move")).into());
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;

        let promotion = match s[4..].chars().next() {
            Some(ch) => Some(PieceKind::from_promotion_char(ch).ok_or((
                ErrorKind::ParseMoveMalformed,
                format!("{ch:?} is not a promotion piece of qrbn"),
            ))?),
            None => None,
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

/// # Example
/// Move { from: A7, to: B8, promotion: Some(Queen) } -> `a7b8q`.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece_kind) = self.promotion {
            f.write_char(piece_kind.to_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl Display for MoveInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.move_())
    }
}
