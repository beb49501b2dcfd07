#![cfg(feature = "std")]

use crate::{
    board::{Board, HitSet, MissSet},
    common::{BoardError, Coordinate, GuessResult},
    ship::ShipType,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player<const N: usize> {
    /// Label used in prompts and logs.
    fn name(&self) -> &str;

    /// Place all ships onto the provided board. Random by default.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board<N>,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        board.place_fleet(rng, fleet)
    }

    /// Choose the next target on `target` given this player's attack ledger.
    fn select_target(
        &mut self,
        target: &Board<N>,
        hits: &HitSet<N>,
        misses: &MissSet<N>,
    ) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coordinate, _result: GuessResult) {}
}
