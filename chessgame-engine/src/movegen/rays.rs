//! Various functions to find attack rays for sliding pieces.

use arrayvec::ArrayVec;

use crate::boardrepr::Mailbox;
use crate::coretypes::Square;

/// A (file, rank) step on the board.
pub(crate) type Direction = (i8, i8);

// Each of 8-Directional rays, North, East, South, West, 4 Diagonals.
pub(crate) const NORTH: Direction = (0, 1);
pub(crate) const EAST: Direction = (1, 0);
pub(crate) const SOUTH: Direction = (0, -1);
pub(crate) const WEST: Direction = (-1, 0);
pub(crate) const NOEA: Direction = (1, 1);
pub(crate) const SOEA: Direction = (1, -1);
pub(crate) const SOWE: Direction = (-1, -1);
pub(crate) const NOWE: Direction = (-1, 1);

pub(crate) const ORTHOGONALS: [Direction; 4] = [NORTH, EAST, SOUTH, WEST];
pub(crate) const DIAGONALS: [Direction; 4] = [NOEA, SOEA, SOWE, NOWE];

/// No ray can cross more than 7 squares.
pub(crate) type Ray = ArrayVec<Square, 7>;

/// Generate a ray from the origin exclusive to the first occupied square inclusive along the ray direction.
/// The first occupied square is included regardless of the color of its piece.
pub(crate) fn ray_scan(board: &Mailbox, origin: Square, direction: Direction) -> Ray {
    let mut ray = Ray::new();
    let mut maybe_square = origin.offset(direction.0, direction.1);

    while let Some(square) = maybe_square {
        ray.push(square);
        if !board.is_empty(square) {
            break;
        }
        maybe_square = square.offset(direction.0, direction.1);
    }
    ray
}

/// First occupied square along a ray, if the ray hits anything before the edge of the board.
pub(crate) fn first_hit(board: &Mailbox, origin: Square, direction: Direction) -> Option<Square> {
    ray_scan(board, origin, direction)
        .last()
        .copied()
        .filter(|&square| !board.is_empty(square))
}
