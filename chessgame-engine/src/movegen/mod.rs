//! Pseudo-legal move generation and attack detection on a Mailbox.
//!
//! A pseudo-legal move follows the movement pattern of its piece and the
//! occupancy of the board, but may still leave the mover's own king attacked.
//! Filtering those out is the job of `Position`.

use arrayvec::ArrayVec;

use crate::boardrepr::Mailbox;
use crate::coretypes::{Castling, Color, File, MoveInfo, MoveKind, Piece, PieceKind, Square};
use crate::movelist::MoveInfoList;

pub mod rays;

use rays::{Direction, DIAGONALS, ORTHOGONALS};

#[rustfmt::skip]
pub(crate) const KNIGHT_JUMPS: [Direction; 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

#[rustfmt::skip]
pub(crate) const KING_STEPS: [Direction; 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

/// Squares of pieces attacking one square. No square can be attacked by more than 16 pieces.
pub type Attackers = ArrayVec<Square, 16>;

/// Board and side information needed to generate moves for one piece.
#[derive(Debug, Copy, Clone)]
pub(crate) struct MoveContext<'a> {
    pub board: &'a Mailbox,
    pub castling: Castling,
    pub en_passant: Option<Square>,
}

/// Returns every square holding a piece of color `by` that attacks `target`.
/// Pawns attack diagonally forward only; a piece attacks a square whether or not it is occupied.
pub fn attackers_to(board: &Mailbox, target: Square, by: Color) -> Attackers {
    let mut attackers = Attackers::new();
    let is = |square: Square, kinds: &[PieceKind]| {
        matches!(board[square], Some(piece) if piece.color == by && kinds.contains(&piece.piece_kind))
    };

    // A pawn of `by` attacks target from one rank behind it, relative to its push direction.
    for file_delta in [-1, 1] {
        if let Some(square) = target.offset(file_delta, -by.forward()) {
            if is(square, &[PieceKind::Pawn]) {
                attackers.push(square);
            }
        }
    }
    for (file_delta, rank_delta) in KNIGHT_JUMPS {
        if let Some(square) = target.offset(file_delta, rank_delta) {
            if is(square, &[PieceKind::Knight]) {
                attackers.push(square);
            }
        }
    }
    for (file_delta, rank_delta) in KING_STEPS {
        if let Some(square) = target.offset(file_delta, rank_delta) {
            if is(square, &[PieceKind::King]) {
                attackers.push(square);
            }
        }
    }
    for direction in ORTHOGONALS {
        if let Some(square) = rays::first_hit(board, target, direction) {
            if is(square, &[PieceKind::Rook, PieceKind::Queen]) {
                attackers.push(square);
            }
        }
    }
    for direction in DIAGONALS {
        if let Some(square) = rays::first_hit(board, target, direction) {
            if is(square, &[PieceKind::Bishop, PieceKind::Queen]) {
                attackers.push(square);
            }
        }
    }
    attackers
}

/// Returns true if any piece of color `by` attacks `target`.
pub fn is_attacked(board: &Mailbox, target: Square, by: Color) -> bool {
    !attackers_to(board, target, by).is_empty()
}

/// Append all pseudo-legal moves of the piece on `from` to `moves`.
/// Does nothing if `from` is empty.
/// Moves onto friendly pieces and captures of a king are never generated.
/// Castling is only generated when the king is not in check and does not pass through an attacked square.
pub(crate) fn pseudo_moves_from(ctx: MoveContext, from: Square, moves: &mut MoveInfoList) {
    let piece = match ctx.board[from] {
        Some(piece) => piece,
        None => return,
    };

    match piece.piece_kind {
        PieceKind::Pawn => pawn_pseudo_moves(ctx, from, piece.color, moves),
        PieceKind::Knight => step_pseudo_moves(ctx.board, from, piece, &KNIGHT_JUMPS, moves),
        PieceKind::Bishop => slide_pseudo_moves(ctx.board, from, piece, &DIAGONALS, moves),
        PieceKind::Rook => slide_pseudo_moves(ctx.board, from, piece, &ORTHOGONALS, moves),
        PieceKind::Queen => {
            slide_pseudo_moves(ctx.board, from, piece, &ORTHOGONALS, moves);
            slide_pseudo_moves(ctx.board, from, piece, &DIAGONALS, moves);
        }
        PieceKind::King => {
            step_pseudo_moves(ctx.board, from, piece, &KING_STEPS, moves);
            castling_moves(ctx, from, piece.color, moves);
        }
    }
}

/// Kind of move for landing on `to`, or None if `to` cannot be landed on.
fn landing_kind(board: &Mailbox, to: Square, color: Color) -> Option<MoveKind> {
    match board[to] {
        None => Some(MoveKind::Quiet),
        Some(target) if target.color != color && target.piece_kind != PieceKind::King => {
            Some(MoveKind::Capture(target.piece_kind))
        }
        Some(_) => None,
    }
}

/// Knights and king steps.
fn step_pseudo_moves(
    board: &Mailbox,
    from: Square,
    piece: Piece,
    steps: &[Direction],
    moves: &mut MoveInfoList,
) {
    for &(file_delta, rank_delta) in steps {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if let Some(move_kind) = landing_kind(board, to, piece.color) {
                moves.push(MoveInfo::new(from, to, piece.piece_kind, move_kind));
            }
        }
    }
}

/// Bishops, rooks and queens.
fn slide_pseudo_moves(
    board: &Mailbox,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    moves: &mut MoveInfoList,
) {
    for &direction in directions {
        for to in rays::ray_scan(board, from, direction) {
            if let Some(move_kind) = landing_kind(board, to, piece.color) {
                moves.push(MoveInfo::new(from, to, piece.piece_kind, move_kind));
            }
        }
    }
}

/// Single and double pushes, diagonal captures, en passant, and promotions.
fn pawn_pseudo_moves(ctx: MoveContext, from: Square, color: Color, moves: &mut MoveInfoList) {
    let forward = color.forward();

    if let Some(single) = from.offset(0, forward) {
        if ctx.board.is_empty(single) {
            push_pawn_move(from, single, color, None, moves);

            if from.rank() == color.pawn_rank() {
                if let Some(double) = from.offset(0, 2 * forward) {
                    if ctx.board.is_empty(double) {
                        moves.push(MoveInfo::new(
                            from,
                            double,
                            PieceKind::Pawn,
                            MoveKind::DoublePawnPush,
                        ));
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, forward) {
            match ctx.board[to] {
                Some(target) if target.color != color && target.piece_kind != PieceKind::King => {
                    push_pawn_move(from, to, color, Some(target.piece_kind), moves);
                }
                None if ctx.en_passant == Some(to) => {
                    // The captured pawn is the one that just passed over the target square.
                    let bypassed = Square::from((to.file(), from.rank()));
                    if ctx.board[bypassed] == Some(Piece::new(!color, PieceKind::Pawn)) {
                        moves.push(MoveInfo::new(from, to, PieceKind::Pawn, MoveKind::EnPassant));
                    }
                }
                _ => (),
            }
        }
    }
}

/// Pushes a pawn move, expanding into one move per promotion piece on the last rank.
fn push_pawn_move(
    from: Square,
    to: Square,
    color: Color,
    captured: Option<PieceKind>,
    moves: &mut MoveInfoList,
) {
    if to.rank() == color.promotion_rank() {
        for promotion in PieceKind::PROMOTIONS {
            let move_kind = MoveKind::Promotion {
                promotion,
                captured,
            };
            moves.push(MoveInfo::new(from, to, PieceKind::Pawn, move_kind));
        }
    } else {
        let move_kind = captured.map_or(MoveKind::Quiet, MoveKind::Capture);
        moves.push(MoveInfo::new(from, to, PieceKind::Pawn, move_kind));
    }
}

/// Castling side, used to look up the squares involved.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Side {
    King,
    Queen,
}

/// Squares involved in castling for one color and side.
#[derive(Debug, Clone)]
pub(crate) struct CastlingSquares {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Must be empty.
    pub between: ArrayVec<Square, 3>,
    /// Must not be attacked, king_from excluded.
    pub passes: [Square; 2],
}

impl CastlingSquares {
    pub fn new(color: Color, side: Side) -> Self {
        let rank = color.home_rank();
        let sq = |file: File| Square::from((file, rank));
        match side {
            Side::King => Self {
                king_from: sq(File::E),
                king_to: sq(File::G),
                rook_from: sq(File::H),
                rook_to: sq(File::F),
                between: [sq(File::F), sq(File::G)].into_iter().collect(),
                passes: [sq(File::F), sq(File::G)],
            },
            Side::Queen => Self {
                king_from: sq(File::E),
                king_to: sq(File::C),
                rook_from: sq(File::A),
                rook_to: sq(File::D),
                between: [sq(File::B), sq(File::C), sq(File::D)].into_iter().collect(),
                passes: [sq(File::D), sq(File::C)],
            },
        }
    }

    pub const fn right(color: Color, side: Side) -> Castling {
        match side {
            Side::King => Castling::kingside(color),
            Side::Queen => Castling::queenside(color),
        }
    }
}

/// Why castling towards `side` is not possible, or None if it is.
/// Castling is possible if the player has the right, the rook is on its corner,
/// there are no pieces between rook and king, the king is not in check,
/// and the king does not pass through or land on an attacked square.
pub(crate) fn castling_obstacle(ctx: MoveContext, color: Color, side: Side) -> Option<&'static str> {
    let squares = CastlingSquares::new(color, side);
    let king = Piece::new(color, PieceKind::King);
    let rook = Piece::new(color, PieceKind::Rook);

    if !ctx.castling.has(CastlingSquares::right(color, side)) {
        return Some("castling right was already lost");
    }
    if ctx.board[squares.king_from] != Some(king) || ctx.board[squares.rook_from] != Some(rook) {
        return Some("king and rook are not on their home squares");
    }
    if squares.between.iter().any(|&square| !ctx.board.is_empty(square)) {
        return Some("pieces stand between king and rook");
    }
    if is_attacked(ctx.board, squares.king_from, !color) {
        return Some("cannot castle out of check");
    }
    if squares
        .passes
        .iter()
        .any(|&square| is_attacked(ctx.board, square, !color))
    {
        return Some("king would pass through or land on an attacked square");
    }
    None
}

fn castling_moves(ctx: MoveContext, from: Square, color: Color, moves: &mut MoveInfoList) {
    for (side, move_kind) in [
        (Side::King, MoveKind::CastleKingside),
        (Side::Queen, MoveKind::CastleQueenside),
    ] {
        let squares = CastlingSquares::new(color, side);
        if from == squares.king_from && castling_obstacle(ctx, color, side).is_none() {
            moves.push(MoveInfo::new(from, squares.king_to, PieceKind::King, move_kind));
        }
    }
}

/// If moving the king on `from` to `to` is shaped like castling, returns the side it castles towards.
/// Castling shape is a king on its home square moving exactly two files along its home rank.
pub(crate) fn castling_side(color: Color, from: Square, to: Square) -> Option<Side> {
    [Side::King, Side::Queen].into_iter().find(|&side| {
        let squares = CastlingSquares::new(color, side);
        squares.king_from == from && squares.king_to == to
    })
}
