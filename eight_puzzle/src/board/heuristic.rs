use crate::board::state::{Board, GOAL_TILES};
use crate::board::COLS;

/// Heuristic estimating the remaining distance from a board to the goal.
///
/// A closed set of heuristics: callers pick one at solver construction time
/// and the solver dispatches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of cells that differ from the goal.
    Misplaced,
    /// Total city-block distance of the tiles from their goal cells.
    Manhattan,
    /// Total straight-line distance of the tiles from their goal cells.
    Euclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Misplaced, Heuristic::Manhattan, Heuristic::Euclidean];

    /// Value of this heuristic for `board`, as a comparable score.
    #[inline]
    pub fn evaluate(self, board: &Board) -> f64 {
        match self {
            Heuristic::Misplaced => board.misplaced() as f64,
            Heuristic::Manhattan => board.manhattan() as f64,
            Heuristic::Euclidean => board.euclidean(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Misplaced => "misplaced",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }
}

/// Cell occupied by `tile` in the goal configuration.
#[inline(always)]
fn goal_cell(tile: u8) -> u8 {
    tile - 1
}

/// Absolute column and row distances between two cells.
#[inline(always)]
fn cell_offsets(a: u8, b: u8) -> (u8, u8) {
    ((a % COLS).abs_diff(b % COLS), (a / COLS).abs_diff(b / COLS))
}

impl Board {
    /// Number of cells whose tile differs from the goal's tile at the same
    /// position. The comparison is elementwise over the full grid, so the
    /// blank cell counts as a tile.
    pub fn misplaced(&self) -> u32 {
        self.tiles()
            .iter()
            .zip(GOAL_TILES.iter())
            .filter(|(tile, goal)| tile != goal)
            .count() as u32
    }

    /// Sum over tiles 1-8 of the city-block distance between the tile's cell
    /// and its goal cell. The blank is excluded.
    pub fn manhattan(&self) -> u32 {
        let mut dist = 0;
        for (cell, &tile) in self.tiles().iter().enumerate() {
            if tile != 0 {
                let (dc, dr) = cell_offsets(cell as u8, goal_cell(tile));
                dist += (dc + dr) as u32;
            }
        }
        dist
    }

    /// Sum over tiles 1-8 of the straight-line distance between the tile's
    /// cell and its goal cell. The blank is excluded.
    pub fn euclidean(&self) -> f64 {
        let mut dist = 0.0;
        for (cell, &tile) in self.tiles().iter().enumerate() {
            if tile != 0 {
                let (dc, dr) = cell_offsets(cell as u8, goal_cell(tile));
                dist += ((dc as u32 * dc as u32 + dr as u32 * dr as u32) as f64).sqrt();
            }
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_at_goal() {
        let goal = Board::goal();
        assert_eq!(goal.misplaced(), 0);
        assert_eq!(goal.manhattan(), 0);
        assert_eq!(goal.euclidean(), 0.0);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.evaluate(&goal), 0.0);
        }
    }

    #[test]
    fn test_one_move_away() {
        let board = Board::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        // Both the blank cell and the cell of tile 8 mismatch.
        assert_eq!(board.misplaced(), 2);
        assert_eq!(board.manhattan(), 1);
        assert_eq!(board.euclidean(), 1.0);
    }

    #[test]
    fn test_example_state() {
        let board = Board::from_tiles(&[3, 6, 5, 2, 1, 4, 7, 8, 0]).unwrap();
        assert_eq!(board.misplaced(), 6);
        // 2 + 2 + 2 + 2 + 2 + 2 for tiles 3, 6, 5, 2, 1, 4.
        assert_eq!(board.manhattan(), 12);
        // Tiles 3 and 4 move along a line, the other four diagonally.
        let expected = 4.0 + 4.0 * 2f64.sqrt();
        assert!((board.euclidean() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_heuristics_are_pure() {
        let board = Board::from_tiles(&[1, 3, 2, 6, 7, 5, 4, 8, 0]).unwrap();
        assert_eq!(board.misplaced(), board.misplaced());
        assert_eq!(board.manhattan(), board.manhattan());
        assert_eq!(board.euclidean(), board.euclidean());
    }

    #[test]
    fn test_nonnegative_and_admissible_ordering() {
        // Misplaced (full-grid variant) is never below zero and counts at
        // most all nine cells; manhattan dominates it on tile moves.
        let board = Board::from_tiles(&[8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert!(board.misplaced() <= 9);
        assert!(board.manhattan() >= 1);
        assert!(board.euclidean() > 0.0);
        assert!(board.euclidean() <= board.manhattan() as f64);
    }
}
