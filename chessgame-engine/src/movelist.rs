//! MoveList types used in the chessgame engine.
//!
//! The underlying type of MoveList may change at any time,
//! so a MoveList type alias makes changes easy.

use arrayvec::ArrayVec;

use crate::coretypes::MAX_MOVES;
use crate::coretypes::{Move, MoveInfo};

/// MoveList is a container that can hold at most `MAX_MOVES`, the most number of moves per any chess position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
/// MoveInfoList is like MoveList however it also holds metadata for its moves.
pub type MoveInfoList = ArrayVec<MoveInfo, MAX_MOVES>;
