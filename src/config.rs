use crate::moves::Move;

/// Missionaries in the classic puzzle.
pub const CLASSIC_MISSIONARIES: i32 = 3;
/// Cannibals in the classic puzzle.
pub const CLASSIC_CANNIBALS: i32 = 3;
/// Seats in the classic boat.
pub const CLASSIC_CAPACITY: u32 = 2;
/// Widest boat `MoveSet::for_capacity` will generate loads for.
pub const MAX_CAPACITY: u32 = 64;

pub const NUM_CLASSIC_MOVES: usize = 5;
/// Boat loads of the classic puzzle, in expansion order.
pub const CLASSIC_MOVES: [Move; NUM_CLASSIC_MOVES] = [
    Move::new(1, 0),
    Move::new(2, 0),
    Move::new(0, 1),
    Move::new(0, 2),
    Move::new(1, 1),
];

/// Crossings in the shortest solution of the classic 3/3 puzzle.
pub const CLASSIC_CROSSINGS: usize = 11;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "MISSIONARIES_LOG";
