use crate::board::{CELLS, COLS, ROWS};
use arrayvec::ArrayVec;

/// The order of the direction indices fixes the order in which successor
/// states are generated, and therefore the tie-break order of the search.
pub const UP: usize = 0;
pub const LEFT: usize = 1;
pub const DOWN: usize = 2;
pub const RIGHT: usize = 3;

pub const DENIED: u8 = u8::MAX;

/// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
pub type Neighbors = [[u8; 4]; CELLS];

/// Returns index of the cell with given (c, r) coordinates.
#[inline(always)]
pub const fn cell_nr(c: u8, r: u8) -> u8 {
    r * COLS + c
}

/// Neighbors matrix of the 3x3 board.
pub const NEIGHBORS: Neighbors = construct_neighbors();

/// Constructs the neighbors matrix for the 3x3 board.
pub const fn construct_neighbors() -> Neighbors {
    let mut neighbors = [[DENIED; 4]; CELLS];
    let mut r = 0;
    while r < ROWS {
        let mut c = 0;
        while c < COLS {
            let cell = cell_nr(c, r) as usize;
            if r != 0 {
                neighbors[cell][UP] = cell_nr(c, r - 1);
            }
            if c != 0 {
                neighbors[cell][LEFT] = cell_nr(c - 1, r);
            }
            if r + 1 != ROWS {
                neighbors[cell][DOWN] = cell_nr(c, r + 1);
            }
            if c + 1 != COLS {
                neighbors[cell][RIGHT] = cell_nr(c + 1, r);
            }
            c += 1;
        }
        r += 1;
    }
    neighbors
}

/// Returns neighbors (cell numbers) of the given `cell`, in up, left, down, right order.
pub fn neighbors_of(neighbors: &Neighbors, cell: u8) -> ArrayVec<u8, 4> {
    let mut result = ArrayVec::<u8, 4>::new();
    for dir in 0..4 {
        let neighbor_pos = neighbors[cell as usize][dir];
        if neighbor_pos != DENIED {
            result.push(neighbor_pos);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_nrs() {
        assert_eq!(cell_nr(0, 0), 0);
        assert_eq!(cell_nr(1, 0), 1);
        assert_eq!(cell_nr(2, 0), 2);
        assert_eq!(cell_nr(0, 1), 3);
        assert_eq!(cell_nr(2, 2), 8);
    }

    #[test]
    fn test_neighbors_corner() {
        assert_eq!(NEIGHBORS[cell_nr(0, 0) as usize][UP], DENIED);
        assert_eq!(NEIGHBORS[cell_nr(0, 0) as usize][LEFT], DENIED);
        assert_eq!(NEIGHBORS[cell_nr(0, 0) as usize][DOWN], cell_nr(0, 1));
        assert_eq!(NEIGHBORS[cell_nr(0, 0) as usize][RIGHT], cell_nr(1, 0));
        assert_eq!(neighbors_of(&NEIGHBORS, cell_nr(0, 0)).len(), 2);

        assert_eq!(NEIGHBORS[cell_nr(2, 2) as usize][UP], cell_nr(2, 1));
        assert_eq!(NEIGHBORS[cell_nr(2, 2) as usize][LEFT], cell_nr(1, 2));
        assert_eq!(NEIGHBORS[cell_nr(2, 2) as usize][DOWN], DENIED);
        assert_eq!(NEIGHBORS[cell_nr(2, 2) as usize][RIGHT], DENIED);
        assert_eq!(neighbors_of(&NEIGHBORS, cell_nr(2, 2)).len(), 2);
    }

    #[test]
    fn test_neighbors_edge_and_center() {
        assert_eq!(neighbors_of(&NEIGHBORS, cell_nr(1, 0)).len(), 3);
        assert_eq!(neighbors_of(&NEIGHBORS, cell_nr(0, 1)).len(), 3);
        assert_eq!(neighbors_of(&NEIGHBORS, cell_nr(1, 1)).len(), 4);
        // Generation order is up, left, down, right.
        assert_eq!(
            neighbors_of(&NEIGHBORS, cell_nr(1, 1)).as_slice(),
            &[cell_nr(1, 0), cell_nr(0, 1), cell_nr(1, 2), cell_nr(2, 1)]
        );
    }
}
