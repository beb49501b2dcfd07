#![cfg(feature = "std")]

use crate::{
    board::{Board, HitSet, MissSet},
    common::Coordinate,
    config::SearchConfig,
    search,
};

use crate::player::Player;

/// Computer player that attacks whatever the alpha-beta search picks.
pub struct AiPlayer {
    name: String,
    config: SearchConfig,
}

impl AiPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self::named("Bot", config)
    }

    pub fn named(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<const N: usize> Player<N> for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(
        &mut self,
        target: &Board<N>,
        hits: &HitSet<N>,
        misses: &MissSet<N>,
    ) -> anyhow::Result<Coordinate> {
        log::debug!("{} is thinking (depth {})", self.name, self.config.max_depth);
        search::decide(target, hits, misses, &self.config)
            .ok_or_else(|| anyhow::anyhow!("{} has nothing left to attack", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bot_finds_the_lone_ship() {
        let mut bot = AiPlayer::default();
        let board = Board::<3>::with_ships([Coordinate::new(1, 1)]).unwrap();
        let got = Player::<3>::select_target(&mut bot, &board, &HitSet::new(), &MissSet::new());
        assert_eq!(got.unwrap(), Coordinate::new(1, 1));
        assert_eq!(Player::<3>::name(&bot), "Bot");
    }

    #[test]
    fn sunk_fleet_leaves_nothing_to_attack() {
        let mut bot = AiPlayer::named("B", SearchConfig::with_max_depth(2));
        let board = Board::<2>::new();
        let err = Player::<2>::select_target(&mut bot, &board, &HitSet::new(), &MissSet::new())
            .unwrap_err();
        assert!(err.to_string().contains("nothing left to attack"));
    }
}
