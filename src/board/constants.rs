//! Board dimensions and sentinels shared by the engine and the front-end.

/// Number of files (x-coordinates) on the board.
pub const BOARD_WIDTH: i32 = 8;

/// Number of ranks (y-coordinates) on the board.
pub const BOARD_HEIGHT: i32 = 8;

/// Total number of squares.
pub const BOARD_SQUARES: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Marks a square the knight has not visited yet.
pub const EMPTY: i32 = -1;

/// Default starting square when none is given.
pub const INITIAL_X: i32 = 0;
pub const INITIAL_Y: i32 = 0;

/// Most destinations a knight can have from one square.
pub const MAX_DESTINATIONS: usize = 8;

/// Starting value for the minimum-weight search; above any real weight.
pub(crate) const WEIGHT_SENTINEL: u8 = MAX_DESTINATIONS as u8 + 1;

/// Knight offsets `(dx, dy)`. Enumeration order is also tie-break order.
pub const KNIGHT_OFFSETS: [(i32, i32); MAX_DESTINATIONS] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];
