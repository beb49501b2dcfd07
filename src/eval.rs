//! Static evaluation of a target board, always from the attacker's side.

use crate::board::{Board, Cell};

/// Reward for each revealed ship segment.
pub const HIT_SCORE: i32 = 10;
/// Bonus per neighbour of a hit that still shows open water.
pub const OPEN_NEIGHBOR_BONUS: i32 = 3;
/// Cost of each wasted shot.
pub const MISS_PENALTY: i32 = 2;

/// Score `board`. Higher is better for the attacker; only comparisons
/// between sibling positions are meaningful.
pub fn evaluate<const N: usize>(board: &Board<N>) -> i32 {
    board
        .iter()
        .map(|(c, cell)| match cell {
            Cell::Hit => {
                let open = c
                    .neighbors(N)
                    .filter(|&n| board.get(n) == Some(Cell::Empty))
                    .count() as i32;
                HIT_SCORE + OPEN_NEIGHBOR_BONUS * open
            }
            Cell::Miss => -MISS_PENALTY,
            Cell::Empty | Cell::ShipHidden => 0,
        })
        .sum()
}
