//! Holds Position struct, the most important data structure for the engine.
//! Position represents a chess position.

use std::fmt::{self, Display};

use crate::boardrepr::Mailbox;
use crate::coretypes::{
    Castling, Color, Move, MoveCount, MoveInfo, MoveKind, Piece, PieceKind, Square,
};
use crate::error::{self, ErrorKind};
use crate::fen::Fen;
use crate::movegen::{self as mg, CastlingSquares, MoveContext, Side};
use crate::movelist::{MoveInfoList, MoveList};

/// struct Position
/// A complete data set that can represent any chess position.
/// Position is a plain value; every method that plays a move returns a new
/// Position or mutates only `self`.
/// # Members:
/// * board - a square-centric container of all chess pieces.
/// * side_to_move - Color of player whose turn it is.
/// * castling - Castling rights for both players.
/// * en_passant - Square skipped by a pawn double push on the previous move, if any.
/// * halfmoves - Tracker for 50 move draw rule. Resets after capture/pawn move.
/// * fullmoves - Starts at 1, increments after each black player's move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    pub(crate) board: Mailbox,
    pub(crate) side_to_move: Color,
    pub(crate) castling: Castling,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmoves: MoveCount,
    pub(crate) fullmoves: MoveCount,
}

impl Position {
    /// Standard chess start position.
    pub fn start_position() -> Self {
        Self {
            board: Mailbox::start_position(),
            side_to_move: Color::White,
            castling: Castling::start_position(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// Const getters.
    pub fn board(&self) -> &Mailbox {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> Castling {
        self.castling
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmoves(&self) -> MoveCount {
        self.halfmoves
    }
    pub fn fullmoves(&self) -> MoveCount {
        self.fullmoves
    }

    /// Returns the piece on a square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square]
    }

    pub(crate) fn move_context(&self) -> MoveContext<'_> {
        MoveContext {
            board: &self.board,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// Returns true if `square` is attacked by any piece of color `by`.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        mg::is_attacked(&self.board, square, by)
    }

    /// Returns true if the king of `color` is attacked.
    /// A position without a king of that color is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board
            .king_square(color)
            .map_or(false, |king| self.is_square_attacked(king, !color))
    }

    /// Returns true if the player to move is in check.
    pub fn is_active_in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Counts and returns number of checks on current player's king.
    pub fn num_active_king_checks(&self) -> usize {
        match self.board.king_square(self.side_to_move) {
            Some(king) => mg::attackers_to(&self.board, king, !self.side_to_move).len(),
            None => 0,
        }
    }

    /// Apply a move to self, in place.
    /// `do_move` does not check if the move is legal or not,
    /// it simply executes it while assuming `move_info` was resolved against self.
    pub fn do_move(&mut self, move_info: MoveInfo) {
        let player = self.side_to_move;
        let MoveInfo {
            from,
            to,
            piece_kind,
            move_kind,
        } = move_info;
        let moving = self.board.take(from);

        match move_kind {
            MoveKind::Quiet | MoveKind::Capture(_) | MoveKind::DoublePawnPush => {
                self.board[to] = moving;
            }
            MoveKind::EnPassant => {
                // Captured pawn sits beside the moving pawn, on the file of its destination.
                self.board[to] = moving;
                self.board.take(Square::from((to.file(), from.rank())));
            }
            MoveKind::Promotion { promotion, .. } => {
                self.board[to] = Some(Piece::new(player, promotion));
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let side = match move_kind {
                    MoveKind::CastleKingside => Side::King,
                    _ => Side::Queen,
                };
                let squares = CastlingSquares::new(player, side);
                self.board[to] = moving;
                let rook = self.board.take(squares.rook_from);
                self.board[squares.rook_to] = rook;
            }
        }

        // Rights are lost by moving the king, or by anything leaving or landing on a rook corner.
        if piece_kind == PieceKind::King {
            self.castling.clear_color(player);
        }
        self.castling.clear(Castling::for_rook_square(from));
        self.castling.clear(Castling::for_rook_square(to));

        self.en_passant = match move_kind {
            MoveKind::DoublePawnPush => Square::from_u8((from as u8 + to as u8) / 2),
            _ => None,
        };

        // Counters stop at their maximum; try_move rejects moves that would get there.
        if move_info.is_pawn_move() || move_info.is_capture() {
            self.halfmoves = 0;
        } else {
            self.halfmoves = self.halfmoves.saturating_add(1);
        }
        if player == Color::Black {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }
        self.side_to_move = !player;
    }

    /// Generates a new Position from applying move on current Position.
    /// Like `do_move`, does not check for legality.
    pub fn make_move(&self, move_info: MoveInfo) -> Self {
        let mut position = *self;
        position.do_move(move_info);
        position
    }

    /// Resolve a requested move into the unique legal move it describes,
    /// along with the position it leads to.
    fn try_move(&self, move_: Move) -> error::Result<(MoveInfo, Position)> {
        let player = self.side_to_move;
        let Move {
            from,
            to,
            promotion,
        } = move_;

        let piece = self.board[from].ok_or_else(|| {
            error::Error::from((ErrorKind::IllegalMove, format!("no piece on {from}")))
        })?;
        if piece.color != player {
            return Err((
                ErrorKind::IllegalMove,
                format!("piece on {from} belongs to {:?}, but {player:?} is to move", piece.color),
            )
                .into());
        }

        let mut pseudo_moves = MoveInfoList::new();
        mg::pseudo_moves_from(self.move_context(), from, &mut pseudo_moves);
        let mut candidates = pseudo_moves.into_iter().filter(|info| info.to == to).peekable();

        let first = match candidates.peek() {
            Some(first) => *first,
            None => return Err(self.unreachable_reason(piece, from, to).into()),
        };

        let move_info = if let MoveKind::Promotion { .. } = first.move_kind {
            let promotion = promotion.ok_or_else(|| {
                error::Error::from((
                    ErrorKind::MissingPromotion,
                    format!("pawn reaching {to} must promote to one of q, r, b, n"),
                ))
            })?;
            if !promotion.is_promotable() {
                return Err((
                    ErrorKind::IllegalMove,
                    format!("pawn cannot promote to a {promotion}"),
                )
                    .into());
            }
            candidates
                .find(|info| info.promotion() == Some(promotion))
                .ok_or_else(|| {
                    error::Error::from((
                        ErrorKind::IllegalMove,
                        format!("pawn cannot promote to a {promotion}"),
                    ))
                })?
        } else {
            // Only promoting moves have more than one candidate per destination.
            first
        };

        if self.counters_exhausted(move_info) {
            return Err((
                ErrorKind::IllegalMove,
                format!("{move_info} overflows the move counters"),
            )
                .into());
        }

        let position = self.make_move(move_info);
        if position.is_in_check(player) {
            return Err((
                ErrorKind::ExposesKing,
                format!("{move_info} leaves the {player:?} king in check"),
            )
                .into());
        }
        tracing::trace!(move_ = %move_info, kind = ?move_info.move_kind, "resolved move");
        Ok((move_info, position))
    }

    /// Returns true if a counter incremented by `move_info` is already at its maximum.
    fn counters_exhausted(&self, move_info: MoveInfo) -> bool {
        let resets_halfmoves = move_info.is_pawn_move() || move_info.is_capture();
        (!resets_halfmoves && self.halfmoves == MoveCount::MAX)
            || (self.side_to_move == Color::Black && self.fullmoves == MoveCount::MAX)
    }

    /// Human readable reason why the piece on `from` cannot reach `to`.
    fn unreachable_reason(&self, piece: Piece, from: Square, to: Square) -> (ErrorKind, String) {
        if piece.piece_kind == PieceKind::King {
            if let Some(side) = mg::castling_side(piece.color, from, to) {
                let reason = mg::castling_obstacle(self.move_context(), piece.color, side)
                    .unwrap_or("castling is not possible");
                return (ErrorKind::IllegalMove, format!("cannot castle {from}{to}: {reason}"));
            }
        }
        let reason = match self.board[to] {
            Some(target) if target.color == piece.color => {
                format!("{to} is occupied by a friendly {}", target.piece_kind)
            }
            Some(target) if target.piece_kind == PieceKind::King => {
                format!("the {} on {from} cannot capture a king", piece.piece_kind)
            }
            _ => format!("the {} on {from} cannot move to {to}", piece.piece_kind),
        };
        (ErrorKind::IllegalMove, reason)
    }

    /// Resolve a requested move into its MoveInfo, checking full legality.
    /// Errors are IllegalMove, ExposesKing, or MissingPromotion.
    pub fn resolve_move(&self, move_: Move) -> error::Result<MoveInfo> {
        self.try_move(move_).map(|(move_info, _)| move_info)
    }

    /// Checks if move is legal for current position.
    pub fn is_legal_move(&self, move_: Move) -> bool {
        self.try_move(move_).is_ok()
    }

    /// Apply a legal move and return the resulting position.
    /// Self is never modified; an illegal move returns Err.
    pub fn apply(&self, move_: Move) -> error::Result<Position> {
        self.try_move(move_).map(|(_, position)| position)
    }

    /// Apply a move given by its squares and optional promotion piece.
    /// The promotion piece is ignored for moves that do not promote.
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> error::Result<Position> {
        self.apply(Move::new(from, to, promotion))
    }

    /// Checks if move is legal before applying it in place.
    /// On error, self is unchanged.
    pub fn do_legal_move(&mut self, move_: Move) -> error::Result<MoveInfo> {
        let (move_info, position) = self.try_move(move_)?;
        *self = position;
        Ok(move_info)
    }

    /// Returns a list of all legal moves with metadata for active player.
    pub fn get_legal_move_infos(&self) -> MoveInfoList {
        let player = self.side_to_move;
        let mut legal_moves = MoveInfoList::new();

        for (from, _) in self.board.pieces_of(player) {
            let mut pseudo_moves = MoveInfoList::new();
            mg::pseudo_moves_from(self.move_context(), from, &mut pseudo_moves);
            legal_moves.extend(
                pseudo_moves
                    .into_iter()
                    .filter(|&info| !self.make_move(info).is_in_check(player)),
            );
        }
        legal_moves
    }

    /// Returns a list of all legal moves for active player.
    /// Each promotion piece counts as a separate move.
    pub fn get_legal_moves(&self) -> MoveList {
        self.get_legal_move_infos()
            .into_iter()
            .map(|move_info| move_info.move_())
            .collect()
    }

    /// Returns true if the player to move has no legal moves.
    pub fn has_no_legal_moves(&self) -> bool {
        self.get_legal_move_infos().is_empty()
    }

    /// Returns true if the player to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.is_active_in_check() && self.has_no_legal_moves()
    }

    /// Returns true if the player to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        !self.is_active_in_check() && self.has_no_legal_moves()
    }
}

/// Defaults to standard chess start position.
impl Default for Position {
    fn default() -> Self {
        Self::start_position()
    }
}

/// Displays pretty-printed chess board and Fen string representing Position.
impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n Fen: {}\n", self.board, self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;
    use PieceKind::*;
    use Square::*;

    fn play(position: &Position, moves: &[&str]) -> Position {
        moves.iter().fold(*position, |position, move_str| {
            position
                .apply(move_str.parse().unwrap())
                .unwrap_or_else(|err| panic!("{move_str}: {err}"))
        })
    }

    #[test]
    fn pretty_print_position() {
        let start_pos = Position::start_position();
        let printed = start_pos.to_string();
        assert!(printed.contains("Fen: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    }

    #[test]
    fn do_move_with_legal_move() {
        let mut position = Position::start_position();
        let info = position.do_legal_move(Move::new(E2, E4, None)).unwrap();
        assert_eq!(info.move_kind(), MoveKind::DoublePawnPush);
        assert_eq!(position.piece_at(E4), Some(Piece::new(White, Pawn)));
        assert_eq!(position.piece_at(E2), None);
        assert_eq!(position.en_passant(), Some(E3));
        assert_eq!(position.side_to_move(), Black);
        assert_eq!(position.halfmoves(), 0);
        assert_eq!(position.fullmoves(), 1);
    }

    #[test]
    fn move_counters() {
        let position = play(&Position::start_position(), &["g1f3", "g8f6", "f3g1"]);
        assert_eq!(position.halfmoves(), 3);
        assert_eq!(position.fullmoves(), 2);
        assert_eq!(position.en_passant(), None);

        let position = play(&position, &["e7e5"]);
        assert_eq!(position.halfmoves(), 0);
        assert_eq!(position.fullmoves(), 3);
    }

    #[test]
    fn king_checks() {
        let check1_1 = Position::parse_fen("8/8/8/8/3K3r/8/8/7k w - - 0 1").unwrap();
        let check1_2 =
            Position::parse_fen("rnb1kbnr/ppp1pppp/8/3p4/1qPPP3/8/PP3PPP/RNBQKBNR w KQkq - 1 4")
                .unwrap();
        let check2_1 = Position::parse_fen("3q4/8/4b3/3k4/4P1n1/8/3Q4/2R3K1 b - - 0 1").unwrap();
        let check4_1 =
            Position::parse_fen("6b1/2r1r3/pp4n1/4K2r/2p5/7p/1p1q2q1/4r1kr w - - 0 1").unwrap();
        let check5_1 = Position::parse_fen("4r3/8/2b2n2/5p2/4K3/5q2/8/7k w - - 0 1").unwrap();

        assert_eq!(check1_1.num_active_king_checks(), 1);
        assert_eq!(check1_2.num_active_king_checks(), 1);
        assert_eq!(check2_1.num_active_king_checks(), 2);
        assert_eq!(check4_1.num_active_king_checks(), 4);
        assert_eq!(check5_1.num_active_king_checks(), 5);
        assert!(check5_1.is_in_check(White));
        assert!(!check5_1.is_in_check(Black));
    }

    #[test]
    fn wrong_side_and_empty_square_are_illegal() {
        let position = Position::start_position();
        let err = position.apply_move(E7, E5, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        let err = position.apply_move(E4, E5, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        let err = position.apply_move(E2, E5, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        let err = position.apply_move(A1, A2, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        assert!(err.to_string().contains("friendly"));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // Knight on e2 is pinned by the rook on e8.
        let position = Position::parse_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let err = position.apply_move(E2, C3, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExposesKing);
        assert!(err.is_illegal_move());

        assert!(position.apply_move(E1, F1, None).is_ok());

        // King may not step into an attacked square.
        let position = Position::parse_fen("5rk1/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let err = position.apply_move(E1, F1, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExposesKing);
    }

    #[test]
    fn castling_kingside() {
        let position = Position::parse_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
            .unwrap();
        let info = position.resolve_move(Move::new(E1, G1, None)).unwrap();
        assert_eq!(info.move_kind(), MoveKind::CastleKingside);

        let castled = position.apply_move(E1, G1, None).unwrap();
        assert_eq!(castled.piece_at(G1), Some(Piece::new(White, King)));
        assert_eq!(castled.piece_at(F1), Some(Piece::new(White, Rook)));
        assert_eq!(castled.piece_at(H1), None);
        assert_eq!(castled.piece_at(E1), None);
        assert!(!castled.castling().has_any(Castling::W_SIDE));
        assert!(castled.castling().has(Castling::B_SIDE));
        assert_eq!(castled.halfmoves(), 1);
    }

    #[test]
    fn castling_queenside() {
        let position =
            Position::parse_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1").unwrap();
        let castled = position.apply_move(E8, C8, None).unwrap();
        assert_eq!(castled.piece_at(C8), Some(Piece::new(Black, King)));
        assert_eq!(castled.piece_at(D8), Some(Piece::new(Black, Rook)));
        assert_eq!(castled.piece_at(A8), None);
        assert!(!castled.castling().has_any(Castling::B_SIDE));
        assert!(castled.castling().has(Castling::W_SIDE));
        assert_eq!(castled.fullmoves(), 2);
    }

    #[test]
    fn castling_rejections() {
        // No right.
        let position = Position::parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1").unwrap();
        let err = position.apply_move(E1, G1, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        assert!(err.to_string().contains("right"));

        // Blocked.
        let position = Position::parse_fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1").unwrap();
        assert!(position.apply_move(E1, G1, None).unwrap_err().is_illegal_move());

        // In check.
        let position = Position::parse_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").unwrap();
        assert!(position.apply_move(E1, G1, None).unwrap_err().is_illegal_move());
        assert!(position.apply_move(E1, C1, None).unwrap_err().is_illegal_move());

        // Passing through an attacked square.
        let position = Position::parse_fen("r3k2r/8/8/8/8/8/3r4/R3K2R w KQkq - 0 1").unwrap();
        assert!(position.apply_move(E1, C1, None).unwrap_err().is_illegal_move());
        assert!(position.apply_move(E1, G1, None).is_ok());
    }

    #[test]
    fn rook_moves_and_captures_clear_rights() {
        let position = Position::parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moved = position.apply_move(H1, H5, None).unwrap();
        assert_eq!(moved.castling(), Castling::W_QUEEN | Castling::B_SIDE);

        let captured = position.apply_move(A1, A8, None).unwrap();
        assert_eq!(captured.castling(), Castling::W_KING | Castling::B_KING);

        let king_moved = position.apply_move(E1, D1, None).unwrap();
        assert_eq!(king_moved.castling(), Castling::B_SIDE);
    }

    #[test]
    fn promotion_requires_piece() {
        let position = Position::parse_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let err = position.apply_move(E7, E8, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingPromotion);

        let err = position.apply_move(E7, E8, Some(King)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);

        let promoted = position.apply_move(E7, E8, Some(Queen)).unwrap();
        assert_eq!(promoted.piece_at(E8), Some(Piece::new(White, Queen)));
        assert_eq!(promoted.piece_at(E7), None);

        let underpromoted = position.apply_move(E7, E8, Some(Knight)).unwrap();
        assert_eq!(underpromoted.piece_at(E8), Some(Piece::new(White, Knight)));
    }

    #[test]
    fn promotion_piece_ignored_on_normal_move() {
        let position = Position::start_position();
        let moved = position.apply_move(E2, E4, Some(Queen)).unwrap();
        assert_eq!(moved.piece_at(E4), Some(Piece::new(White, Pawn)));
    }

    #[test]
    fn en_passant_capture() {
        let position = play(
            &Position::start_position(),
            &["e2e4", "a7a6", "e4e5", "d7d5"],
        );
        assert_eq!(position.en_passant(), Some(D6));
        let info = position.resolve_move(Move::new(E5, D6, None)).unwrap();
        assert_eq!(info.move_kind(), MoveKind::EnPassant);
        assert_eq!(info.captured(), Some(Pawn));

        let captured = position.apply_move(E5, D6, None).unwrap();
        assert_eq!(captured.piece_at(D6), Some(Piece::new(White, Pawn)));
        assert_eq!(captured.piece_at(D5), None);
        assert_eq!(captured.piece_at(E5), None);
        assert_eq!(captured.en_passant(), None);
        assert_eq!(captured.halfmoves(), 0);
    }

    #[test]
    fn en_passant_expires() {
        let position = play(
            &Position::start_position(),
            &["e2e4", "a7a6", "e4e5", "d7d5", "g1f3", "a6a5"],
        );
        let err = position.apply_move(E5, D6, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
    }

    #[test]
    fn en_passant_discovered_check_is_illegal() {
        // Capturing en passant would remove both pawns from the fifth rank and expose the king.
        let position = Position::parse_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").unwrap();
        let err = position.apply_move(E5, D6, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExposesKing);
    }

    #[test]
    fn legal_move_counts() {
        assert_eq!(Position::start_position().get_legal_moves().len(), 20);

        let mated = play(
            &Position::start_position(),
            &["f2f3", "e7e5", "g2g4", "d8h4"],
        );
        assert!(mated.is_checkmate());
        assert!(!mated.is_stalemate());

        let stalemate = Position::parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stalemate.is_stalemate());
        assert!(!stalemate.is_checkmate());
    }

    #[test]
    fn exhausted_counters_reject_moves() {
        let max = MoveCount::MAX;
        let position = Position::parse_fen(&format!("4k3/8/8/8/8/8/4P3/4K3 w - - {max} 1")).unwrap();
        let err = position.apply_move(E1, D1, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        // A pawn move resets the halfmove clock, so it is still playable.
        let pushed = position.apply_move(E2, E3, None).unwrap();
        assert_eq!(pushed.halfmoves(), 0);

        let position = Position::parse_fen(&format!("4k3/8/8/8/8/8/8/4K3 b - - 0 {max}")).unwrap();
        let err = position.apply_move(E8, E7, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        assert_eq!(position.get_legal_moves().len(), 5);

        let mut saturated = position;
        saturated.do_move(MoveInfo::new(E8, E7, King, MoveKind::Quiet));
        assert_eq!(saturated.fullmoves(), max);
    }

    #[test]
    fn en_passant_needs_bypassed_pawn() {
        // Target square with a knight, not a pawn, behind it.
        assert!(Position::parse_fen("4k3/8/8/3NP3/8/8/8/4K3 w - d6 0 1").is_err());

        let position = Position::parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let info = position.resolve_move(Move::new(E5, D6, None)).unwrap();
        assert_eq!(info.move_kind(), MoveKind::EnPassant);
        let mut altered = position;
        altered.board[D5] = Some(Piece::new(White, Knight));
        assert!(!altered.is_legal_move(Move::new(E5, D6, None)));
        assert_eq!(altered.piece_at(D5), Some(Piece::new(White, Knight)));
    }

    #[test]
    fn apply_does_not_mutate() {
        let position = Position::start_position();
        let _ = position.apply_move(E2, E4, None).unwrap();
        let _ = position.apply_move(E2, E5, None).unwrap_err();
        assert_eq!(position, Position::start_position());

        let mut in_place = Position::start_position();
        assert!(in_place.do_legal_move(Move::new(E1, E2, None)).is_err());
        assert_eq!(in_place, Position::start_position());
    }
}
