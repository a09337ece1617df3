pub mod heuristic;
pub mod neighbors;
pub mod state;

/// Number of columns of the board.
pub const COLS: u8 = 3;

/// Number of rows of the board.
pub const ROWS: u8 = 3;

/// Number of cells in the board.
pub const CELLS: usize = COLS as usize * ROWS as usize;
