//! Detection of 3×3 blocks of equal height ("wither rooms").
//!
//! Windows are addressed by their bottom-right corner `(row3, col3)`; the
//! window covers rows `row3 - 2..=row3` and columns `col3 - 2..=col3`, and a
//! hit is reported at its center `(col3 - 1, row3 - 1)`. Corners run from the
//! last row and column down to index 4, so centers lie in `3..=side - 2` on
//! each axis.

use tracing::trace;
use wither_coords::GridPos;
use wither_terrain::HeightGrid;

/// Smallest corner index examined on either axis.
const MIN_CORNER: usize = 4;

/// Find the center of every uniform 3×3 window, in scan order.
///
/// Scans rows and columns in descending order. When the two left cells of a
/// window's bottom row differ, the window one column to the left contains the
/// same mismatched pair, so the scan skips it. Produces exactly the output of
/// [`find_wither_rooms_exhaustive`].
pub fn find_wither_rooms(grid: &HeightGrid) -> Vec<GridPos> {
    let side = grid.side_length();
    let mut rooms = Vec::new();

    for row3 in (MIN_CORNER..side).rev() {
        let bottom = grid.row(row3);
        let mut col3 = side - 1;
        while col3 >= MIN_CORNER {
            let col2 = col3 - 1;
            let col1 = col2 - 1;

            if bottom[col1] != bottom[col2] {
                col3 -= 2;
                continue;
            }

            if bottom[col2] == bottom[col3] && upper_rows_match(grid, row3, col1, bottom[col3]) {
                trace!(col = col2, row = row3 - 1, height = bottom[col3], "uniform window");
                rooms.push(GridPos::new(col2 as i32, (row3 - 1) as i32));
            }
            col3 -= 1;
        }
    }

    rooms
}

/// Unoptimized scan: tests every corner in the same range without skipping.
pub fn find_wither_rooms_exhaustive(grid: &HeightGrid) -> Vec<GridPos> {
    let side = grid.side_length();
    let mut rooms = Vec::new();
    for row3 in (MIN_CORNER..side).rev() {
        for col3 in (MIN_CORNER..side).rev() {
            let value = grid[(row3, col3)];
            let uniform = (row3 - 2..=row3)
                .all(|row| grid.row(row)[col3 - 2..=col3].iter().all(|&h| h == value));
            if uniform {
                rooms.push(GridPos::new((col3 - 1) as i32, (row3 - 1) as i32));
            }
        }
    }
    rooms
}

/// Whether the two rows above `row3` hold `value` in columns `col1..=col1 + 2`.
fn upper_rows_match(grid: &HeightGrid, row3: usize, col1: usize, value: i32) -> bool {
    (row3 - 2..row3).all(|row| grid.row(row)[col1..=col1 + 2].iter().all(|&h| h == value))
}
