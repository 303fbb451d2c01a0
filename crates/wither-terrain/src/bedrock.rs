//! Nether ceiling bedrock: the lowest bedrock block of every column.
//!
//! Reproduces the fixed bedrock placement rule draw for draw. The rule draws
//! values it never uses; those draws are still required, since skipping any of
//! them desynchronizes the generator and silently corrupts the whole tile.

use wither_coords::{ChunkPos, GridPos};

use crate::grid::{HeightGrid, TILE_SIZE, TileHeights};
use crate::random::JavaRandom;
use crate::seed::chunk_rng;

/// Highest ceiling layer. Always bedrock.
pub const CEILING_TOP: i32 = 127;

/// Number of candidate layers below and including the top; each layer is
/// bedrock with probability decreasing away from [`CEILING_TOP`].
pub const BEDROCK_SPREAD: i32 = 5;

/// Lowest height the rule can report.
pub const CEILING_MIN: i32 = CEILING_TOP - (BEDROCK_SPREAD - 1);

/// Compute the lowest ceiling bedrock height for every column of a chunk.
pub fn ceiling_tile(chunk: ChunkPos) -> TileHeights {
    let mut rng = chunk_rng(chunk);
    let mut tile = TileHeights::new();
    for z in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            tile.set(z, x, lowest_ceiling_bedrock(&mut rng));
        }
    }
    tile
}

/// Generate a chunk's ceiling into `grid` with the chunk's `[0][0]` at `block_offset`.
pub fn generate_tile(grid: &mut HeightGrid, block_offset: GridPos, chunk: ChunkPos) {
    grid.write_tile(block_offset, &ceiling_tile(chunk));
}

/// Run the sweep for one column and return the lowest bedrock layer.
fn lowest_ceiling_bedrock(rng: &mut JavaRandom) -> i32 {
    // Surface noise samples; drawn for every column, never read here.
    rng.next_double();
    rng.next_double();
    rng.next_double();

    let mut lowest = 0;
    for y in (0..=CEILING_TOP).rev() {
        if y >= CEILING_TOP - rng.next_int_bounded(BEDROCK_SPREAD) {
            lowest = y;
        } else {
            // Floor bedrock check, unused for the ceiling.
            rng.next_int_bounded(BEDROCK_SPREAD);
        }
    }
    lowest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heights_within_ceiling_band() {
        for chunk in [
            ChunkPos::new(0, 0),
            ChunkPos::new(-1, 0),
            ChunkPos::new(123, -456),
            ChunkPos::new(1_000_000_000, 1_000_000_000),
        ] {
            let tile = ceiling_tile(chunk);
            for row in tile.rows() {
                for &h in row {
                    assert!(
                        (CEILING_MIN..=CEILING_TOP).contains(&h),
                        "height {h} outside ceiling band for chunk {chunk}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_tile_determinism() {
        let chunk = ChunkPos::new(-7, 19);
        assert_eq!(ceiling_tile(chunk), ceiling_tile(chunk));
    }

    #[test]
    fn test_origin_chunk_first_row() {
        // Known-good heights for chunk (0, 0), row z = 0.
        let tile = ceiling_tile(ChunkPos::new(0, 0));
        let first_row: Vec<i32> = tile.rows().next().unwrap().to_vec();
        assert_eq!(first_row, ORIGIN_CHUNK_ROW0.to_vec());
    }

    #[test]
    fn test_generate_tile_writes_only_its_region() {
        let mut grid = HeightGrid::new(32);
        generate_tile(&mut grid, GridPos::new(16, 16), ChunkPos::new(2, 3));

        let tile = ceiling_tile(ChunkPos::new(2, 3));
        for z in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                assert_eq!(grid.get(16 + z, 16 + x), tile.get(z, x));
            }
        }
        assert!(grid.row(0).iter().all(|&h| h == 0));
        assert!((0..16).all(|row| grid.get(row, 16) == 0));
    }

    const ORIGIN_CHUNK_ROW0: [i32; TILE_SIZE] = [
        124, 123, 124, 125, 125, 124, 126, 126, 125, 125, 125, 127, 124, 125, 125, 123,
    ];
}
