#![cfg(feature = "std")]

//! Turn orchestration: two fleets, two attack ledgers, alternating turns.

use crate::{
    board::{Board, HitSet, MissSet},
    common::{BoardError, Coordinate, GuessResult},
    config::BOARD_SIZE,
    player::Player,
    ship::ShipType,
};
use rand::rngs::SmallRng;

/// Who controls each side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameMode {
    HumanVsHuman,
    /// Player 1 is human, player 2 is the bot.
    HumanVsBot,
    BotVsBot,
}

/// One player's own fleet plus the record of their attacks on the opponent.
#[derive(Clone, Debug)]
pub struct Side<const N: usize> {
    pub fleet: Board<N>,
    pub hits: HitSet<N>,
    pub misses: MissSet<N>,
}

impl<const N: usize> Side<N> {
    fn new(fleet: Board<N>) -> Self {
        Self {
            fleet,
            hits: HitSet::new(),
            misses: MissSet::new(),
        }
    }
}

/// What happened during one call to [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TurnReport {
    /// Index (0 or 1) of the attacking player.
    pub player: usize,
    pub target: Coordinate,
    pub result: GuessResult,
    /// Set when this attack sank the last enemy ship.
    pub winner: Option<usize>,
}

/// Core game logic holding both boards and both guess histories.
pub struct Game<const N: usize = { BOARD_SIZE }> {
    sides: [Side<N>; 2],
    current: usize,
    winner: Option<usize>,
    turns: usize,
    last_turn: Option<TurnReport>,
}

impl<const N: usize> Game<N> {
    /// Start a game from two already populated boards. Player 0 moves first.
    pub fn new(boards: [Board<N>; 2]) -> Self {
        let [a, b] = boards;
        Self {
            sides: [Side::new(a), Side::new(b)],
            current: 0,
            winner: None,
            turns: 0,
            last_turn: None,
        }
    }

    /// Let each player lay out `fleet` on a fresh board.
    pub fn setup(
        players: &mut [Box<dyn Player<N>>; 2],
        rng: &mut SmallRng,
        fleet: &[ShipType],
    ) -> Result<Self, BoardError> {
        let mut boards = [Board::new(), Board::new()];
        for (player, board) in players.iter_mut().zip(boards.iter_mut()) {
            player.place_ships(rng, board, fleet)?;
        }
        Ok(Self::new(boards))
    }

    /// Index of the player to move.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Attacks made so far by both players together.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn side(&self, player: usize) -> &Side<N> {
        &self.sides[player]
    }

    /// Report of the most recent attack, if any was made.
    pub fn last_turn(&self) -> Option<TurnReport> {
        self.last_turn
    }

    /// Ask the current player for a target and resolve it.
    pub fn play_turn(
        &mut self,
        players: &mut [Box<dyn Player<N>>; 2],
    ) -> anyhow::Result<TurnReport> {
        if self.winner.is_some() {
            return Err(anyhow::anyhow!("the game is already over"));
        }
        let attacker = self.current;
        let defender = 1 - attacker;

        let target = {
            let ledger = &self.sides[attacker];
            let fleet = &self.sides[defender].fleet;
            players[attacker].select_target(fleet, &ledger.hits, &ledger.misses)?
        };
        let result = self.sides[defender].fleet.attack(target)?;
        let ledger = &mut self.sides[attacker];
        match result {
            GuessResult::Hit => ledger.hits.insert(target)?,
            GuessResult::Miss => ledger.misses.insert(target)?,
        };
        players[attacker].handle_guess_result(target, result);
        self.turns += 1;
        log::info!(
            "{} attacks {} -> {:?}",
            players[attacker].name(),
            target,
            result
        );

        if self.sides[defender].fleet.is_terminal() {
            self.winner = Some(attacker);
            log::info!("{} wins after {} turns", players[attacker].name(), self.turns);
        } else {
            self.current = defender;
        }

        let report = TurnReport {
            player: attacker,
            target,
            result,
            winner: self.winner,
        };
        self.last_turn = Some(report);
        Ok(report)
    }

    /// Play until someone wins or `max_turns` attacks have been made.
    pub fn run(
        &mut self,
        players: &mut [Box<dyn Player<N>>; 2],
        max_turns: Option<usize>,
    ) -> anyhow::Result<Option<usize>> {
        while self.winner.is_none() {
            if max_turns.is_some_and(|cap| self.turns >= cap) {
                log::warn!("stopping after {} turns without a winner", self.turns);
                break;
            }
            self.play_turn(players)?;
        }
        Ok(self.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of targets.
    struct Scripted(Vec<Coordinate>);

    impl<const N: usize> Player<N> for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn select_target(
            &mut self,
            _target: &Board<N>,
            _hits: &HitSet<N>,
            _misses: &MissSet<N>,
        ) -> anyhow::Result<Coordinate> {
            self.0.pop().ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }
    }

    fn scripted(moves: &[(usize, usize)]) -> Box<dyn Player<2>> {
        Box::new(Scripted(moves.iter().rev().map(|&m| m.into()).collect()))
    }

    #[test]
    fn turns_alternate_and_records_follow_results() {
        let b0 = Board::<2>::with_ships([Coordinate::new(0, 0)]).unwrap();
        let b1 = Board::<2>::with_ships([Coordinate::new(1, 1)]).unwrap();
        let mut game = Game::new([b0, b1]);
        let mut players = [scripted(&[(0, 0), (1, 1)]), scripted(&[(0, 1)])];

        assert_eq!(game.last_turn(), None);
        let first = game.play_turn(&mut players).unwrap();
        assert_eq!((first.player, first.result, first.winner), (0, GuessResult::Miss, None));
        assert_eq!(game.current(), 1);

        let second = game.play_turn(&mut players).unwrap();
        assert_eq!((second.player, second.result), (1, GuessResult::Miss));
        assert!(game.side(1).misses.contains(Coordinate::new(0, 1)));

        let third = game.play_turn(&mut players).unwrap();
        assert_eq!((third.result, third.winner), (GuessResult::Hit, Some(0)));
        assert!(game.side(0).hits.contains(Coordinate::new(1, 1)));
        assert_eq!(game.turns(), 3);
        assert_eq!(game.last_turn(), Some(third));
        assert!(game.play_turn(&mut players).is_err());
        assert_eq!(game.last_turn(), Some(third));
    }

    #[test]
    fn repeated_target_is_rejected() {
        let b0 = Board::<2>::with_ships([Coordinate::new(0, 0)]).unwrap();
        let b1 = Board::<2>::with_ships([Coordinate::new(0, 0)]).unwrap();
        let mut game = Game::new([b0, b1]);
        let mut players = [scripted(&[(1, 1), (1, 1)]), scripted(&[(1, 1)])];
        game.play_turn(&mut players).unwrap();
        game.play_turn(&mut players).unwrap();
        let err = game.play_turn(&mut players).unwrap_err();
        assert!(err.to_string().contains("already attacked"));
    }

    #[test]
    fn run_honours_the_turn_cap() {
        let b0 = Board::<2>::with_ships([Coordinate::new(0, 0)]).unwrap();
        let b1 = Board::<2>::with_ships([Coordinate::new(0, 0)]).unwrap();
        let mut game = Game::new([b0, b1]);
        let mut players = [scripted(&[(1, 1), (1, 0)]), scripted(&[(1, 1)])];
        assert_eq!(game.run(&mut players, Some(2)).unwrap(), None);
        assert_eq!(game.turns(), 2);
    }
}
