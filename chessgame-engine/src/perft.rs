//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! A simple debugging and testing function used to count
//! the number of nodes at a specific depth.

use std::ops::{Add, AddAssign};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::coretypes::PlyKind;
use crate::movelist::MoveInfoList;
use crate::position::Position;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

// Count the number of nodes at a certain depth.
// This ignores higher terminal nodes.
// In other words, it counts the number of paths to the given depth.
pub fn perft(position: Position, ply: PlyKind, threads: usize) -> PerftInfo {
    if ply == 0 {
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        return perft_recurse(&position, ply);
    }

    let legal_moves = position.get_legal_move_infos();
    if legal_moves.is_empty() {
        return PerftInfo::new(0);
    }

    let legal_moves = Arc::new(Mutex::new(legal_moves));
    let total_perft_info = Arc::new(Mutex::new(PerftInfo::new(0)));

    // All workers are joined when the scope ends.
    thread::scope(|scope| {
        for _ in 0..threads {
            let legal_moves = Arc::clone(&legal_moves);
            let total_perft_info = Arc::clone(&total_perft_info);
            scope.spawn(move || perft_executor(position, ply, legal_moves, total_perft_info));
        }
    });

    let total = *total_perft_info
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    total
}

/// perft_executor works by stealing one move at a time from given moves list and running perft on that move.
/// When there are no moves left to steal, this function stores the data it has collected so far and returns.
/// params:
/// position - position to evaluate moves on.
/// ply - ply of provided position. Must be greater than 1.
/// moves - synchronous access to list of moves to steal from. Moves must be legal for given position.
/// perft_info - place to store information post execution.
fn perft_executor(
    position: Position,
    ply: PlyKind,
    moves: Arc<Mutex<MoveInfoList>>,
    total_perft_info: Arc<Mutex<PerftInfo>>,
) {
    debug_assert!(ply > 1);
    let steal = || moves.lock().unwrap_or_else(PoisonError::into_inner).pop();
    let mut perft_info = PerftInfo::new(0);

    while let Some(move_info) = steal() {
        perft_info += perft_recurse(&position.make_move(move_info), ply - 1);
    }

    *total_perft_info
        .lock()
        .unwrap_or_else(PoisonError::into_inner) += perft_info;
}

/// Ply must be non-zero.
fn perft_recurse(position: &Position, ply: PlyKind) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let legal_moves = position.get_legal_move_infos();
    if ply == 1 {
        // If we reach the depth before the end,
        // return the count of legal moves.
        PerftInfo::new(legal_moves.len() as u64)
    } else {
        legal_moves
            .into_iter()
            .map(|move_info| perft_recurse(&position.make_move(move_info), ply - 1))
            .fold(PerftInfo::default(), Add::add)
    }
}
