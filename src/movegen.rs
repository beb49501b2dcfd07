//! Candidate attack generation.
//!
//! Targets cluster around known hits first ("hunt the wounded ship"). Only
//! when no hit has an unattacked neighbour does generation fall back to every
//! unattacked cell. The returned order is the search's tie-break order.

use alloc::vec::Vec;

use crate::board::{Board, HitSet};
use crate::common::Coordinate;

/// Coordinates worth attacking next on `board`, given the known `hits`.
///
/// Never yields a cell that is already `Hit` or `Miss`. The result is empty
/// only when the board has no unattacked cell left.
pub fn moves<const N: usize>(board: &Board<N>, hits: &HitSet<N>) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(4 * hits.len());
    for hit in hits {
        for c in hit.neighbors(N) {
            if is_target(board, c) && !out.contains(&c) {
                out.push(c);
            }
        }
    }
    if out.is_empty() {
        out.extend(
            board
                .iter()
                .filter(|&(_, cell)| cell.is_unattacked())
                .map(|(c, _)| c),
        );
    }
    out
}

#[inline]
fn is_target<const N: usize>(board: &Board<N>, c: Coordinate) -> bool {
    board.get(c).is_some_and(|cell| cell.is_unattacked())
}
