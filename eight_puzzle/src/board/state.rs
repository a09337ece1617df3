use crate::board::neighbors::{neighbors_of, NEIGHBORS};
use crate::board::{CELLS, COLS};
use arrayvec::ArrayVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Tiles of the goal configuration, row-major, blank in the bottom-right corner.
pub const GOAL_TILES: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Board state together with the number of moves made to reach it.
///
/// Two boards are equal when their tiles are equal; the move counter is
/// ignored by both equality and hashing.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    /// Indexed by board cells (row-major), gives tile numbers; 0 is the blank.
    tiles: [u8; CELLS],
    /// Number of moves made from the start configuration.
    cost: u32,
}

impl PartialEq for Board {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Board {
    /// Constructs the goal configuration.
    pub fn goal() -> Self {
        Self { tiles: GOAL_TILES, cost: 0 }
    }

    /// Constructs a start board from a flattened row-major tile sequence.
    ///
    /// The sequence must be a permutation of 0-8 (0 denotes the blank);
    /// anything else is rejected before a board is built.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, InvalidStartState> {
        if tiles.len() != CELLS {
            return Err(InvalidStartState::WrongLength(tiles.len()));
        }
        let mut seen = [false; CELLS];
        for &tile in tiles {
            if tile as usize >= CELLS {
                return Err(InvalidStartState::TileOutOfRange(tile));
            }
            if seen[tile as usize] {
                return Err(InvalidStartState::DuplicateTile(tile));
            }
            seen[tile as usize] = true;
        }
        let mut cells = [0u8; CELLS];
        cells.copy_from_slice(tiles);
        Ok(Self { tiles: cells, cost: 0 })
    }

    /// Tiles of the board, row-major.
    #[inline(always)]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Number of moves made from the start configuration.
    #[inline(always)]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Tile at the given cell.
    #[inline(always)]
    pub fn tile_at(&self, cell: u8) -> u8 {
        self.tiles[cell as usize]
    }

    /// Cell occupied by the blank.
    #[inline]
    pub fn blank_position(&self) -> u8 {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("a valid board always contains a blank") as u8
    }

    #[inline(always)]
    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// Swaps the blank with the tile at `cell` and returns the number of that
    /// tile. `cell` must be a neighbor of the blank. The move counter is not
    /// affected.
    pub fn move_blank(&mut self, cell: u8) -> u8 {
        let blank = self.blank_position();
        let tile = self.tiles[cell as usize];
        self.tiles[blank as usize] = tile;
        self.tiles[cell as usize] = 0;
        tile
    }

    /// Returns the boards reachable from this one by a single blank move,
    /// each with a move counter one larger than this board's.
    ///
    /// The generation order is fixed (up, left, down, right) so that
    /// tie-breaking during the search is reproducible.
    pub fn successors(&self) -> ArrayVec<Board, 4> {
        let blank = self.blank_position();
        let mut result = ArrayVec::<Board, 4>::new();
        for neighbor in neighbors_of(&NEIGHBORS, blank) {
            let mut successor = *self;
            successor.move_blank(neighbor);
            successor.cost = self.cost + 1;
            result.push(successor);
        }
        result
    }
}

impl fmt::Display for Board {
    /// Renders the board as 3 lines of 3 right-justified 3-character fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(COLS as usize) {
            for &tile in row {
                write!(f, "{:>3}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rejected start configuration: the given tile sequence is not a
/// permutation of 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStartState {
    /// The sequence does not contain exactly 9 values.
    WrongLength(usize),
    /// A value outside 0-8 was given.
    TileOutOfRange(u8),
    /// A value occurs more than once.
    DuplicateTile(u8),
}

impl fmt::Display for InvalidStartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(f, "expected {} tiles, got {}", CELLS, len),
            Self::TileOutOfRange(tile) => write!(f, "tile value {} is outside 0-8", tile),
            Self::DuplicateTile(tile) => write!(f, "tile value {} occurs more than once", tile),
        }
    }
}

impl std::error::Error for InvalidStartState {}
