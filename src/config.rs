use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Plies explored by the bot unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// Random draws tried per ship before placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Runtime knobs for the adversarial search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth at which a ply stops recursing and falls back to the evaluator.
    /// The root move is depth 0, its reply depth 1, and so on.
    pub max_depth: u8,
}

impl SearchConfig {
    pub const fn with_max_depth(max_depth: u8) -> Self {
        Self { max_depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}
