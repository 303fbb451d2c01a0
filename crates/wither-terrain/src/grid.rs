//! Square height grids and the 16×16 tiles they are assembled from.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use wither_coords::{CHUNK_SIZE, GridPos};

/// Cells along each axis of a tile.
pub const TILE_SIZE: usize = CHUNK_SIZE as usize;

/// Errors raised when building a grid from explicit data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} cells, expected {expected} for a square grid")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Heights for one 16×16 tile, indexed `[z][x]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct TileHeights {
    cells: [[i32; TILE_SIZE]; TILE_SIZE],
}

impl TileHeights {
    /// A tile with every cell set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, z: usize, x: usize) -> i32 {
        self.cells[z][x]
    }

    #[inline]
    pub fn set(&mut self, z: usize, x: usize, value: i32) {
        self.cells[z][x] = value;
    }

    /// Rows in increasing z order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32; TILE_SIZE]> {
        self.cells.iter()
    }

    /// Hash of every cell, for determinism comparison.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

/// A square grid of heights stored row-major.
///
/// Indexed `(row, col)`, i.e. `(z, x)` offsets from the grid's corner. The
/// grid owns its cells exclusively; generation writes disjoint tiles and the
/// scanner only reads once every tile is in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightGrid {
    side: usize,
    cells: Vec<i32>,
}

impl HeightGrid {
    /// A zero-filled grid of `side_length × side_length` cells.
    pub fn new(side_length: usize) -> Self {
        Self {
            side: side_length,
            cells: vec![0; side_length * side_length],
        }
    }

    /// A zero-filled grid covering `2 × chunk_radius` tiles per axis.
    pub fn for_chunk_radius(chunk_radius: u32) -> Self {
        Self::new(2 * chunk_radius as usize * TILE_SIZE)
    }

    /// Build a grid from explicit rows, which must form a square.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != side {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: side,
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { side, cells })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn side_length(&self) -> usize {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.cells[row * self.side + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.cells[row * self.side + col] = value;
    }

    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.side;
        &self.cells[start..start + self.side]
    }

    /// Rows in increasing z order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // `chunks_exact(0)` panics; an empty grid has no cells anyway.
        self.cells.chunks_exact(self.side.max(1))
    }

    /// All cells, row-major.
    pub fn values(&self) -> &[i32] {
        &self.cells
    }

    /// Copy a tile into the grid with its `[0][0]` cell at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `origin` is negative or the tile does not fit.
    pub fn write_tile(&mut self, origin: GridPos, tile: &TileHeights) {
        assert!(
            origin.x >= 0 && origin.z >= 0,
            "tile origin {origin} lies outside the grid"
        );
        blit(
            &mut self.cells,
            self.side,
            origin.z as usize,
            origin.x as usize,
            tile,
        );
    }

    /// Split the grid into disjoint bands of [`TILE_SIZE`] rows.
    ///
    /// Each band owns the cells of one row of tiles, so bands can be filled
    /// from different threads without synchronization. A grid whose side is
    /// not a multiple of the tile size yields a shorter final band.
    pub fn tile_bands_mut(&mut self) -> impl Iterator<Item = TileBand<'_>> {
        let side = self.side;
        self.cells
            .chunks_mut((side * TILE_SIZE).max(1))
            .enumerate()
            .map(move |(tile_row, cells)| TileBand {
                tile_row,
                side,
                cells,
            })
    }

    /// Hash of the side length and every cell, for determinism comparison.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.side.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

impl Index<(usize, usize)> for HeightGrid {
    type Output = i32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        &self.cells[row * self.side + col]
    }
}

/// Exclusive view over one row of tiles in a [`HeightGrid`].
#[derive(Debug)]
pub struct TileBand<'a> {
    tile_row: usize,
    side: usize,
    cells: &'a mut [i32],
}

impl TileBand<'_> {
    /// Index of this band, counted in tiles from the grid's first row.
    pub fn tile_row(&self) -> usize {
        self.tile_row
    }

    /// Number of whole tiles across the band.
    pub fn tiles_across(&self) -> usize {
        self.side / TILE_SIZE
    }

    /// Copy a tile into this band at tile column `tile_col`.
    pub fn write_tile(&mut self, tile_col: usize, tile: &TileHeights) {
        blit(self.cells, self.side, 0, tile_col * TILE_SIZE, tile);
    }
}

fn blit(cells: &mut [i32], stride: usize, row0: usize, col0: usize, tile: &TileHeights) {
    for (z, values) in tile.rows().enumerate() {
        let start = (row0 + z) * stride + col0;
        cells[start..start + TILE_SIZE].copy_from_slice(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_tile(base: i32) -> TileHeights {
        let mut tile = TileHeights::new();
        for z in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                tile.set(z, x, base + (z * TILE_SIZE + x) as i32);
            }
        }
        tile
    }

    #[test]
    fn test_for_chunk_radius_side_length() {
        assert_eq!(HeightGrid::for_chunk_radius(1).side_length(), 32);
        assert_eq!(HeightGrid::for_chunk_radius(3).side_length(), 96);
        assert!(HeightGrid::for_chunk_radius(0).is_empty());
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = HeightGrid::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_indexing() {
        let grid = HeightGrid::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        assert_eq!(grid.get(0, 2), 3);
        assert_eq!(grid[(2, 0)], 7);
        assert_eq!(grid.row(1), &[4, 5, 6]);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_write_tile_places_cells() {
        let mut grid = HeightGrid::new(32);
        grid.write_tile(GridPos::new(16, 0), &numbered_tile(1000));

        assert_eq!(grid.get(0, 16), 1000);
        assert_eq!(grid.get(0, 31), 1015);
        assert_eq!(grid.get(15, 16), 1000 + 15 * 16);
        assert_eq!(grid.get(0, 15), 0, "cells outside the tile stay untouched");
        assert_eq!(grid.get(16, 16), 0, "cells outside the tile stay untouched");
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_write_tile_negative_origin_panics() {
        let mut grid = HeightGrid::new(16);
        grid.write_tile(GridPos::new(-1, 0), &TileHeights::new());
    }

    #[test]
    fn test_tile_bands_are_disjoint_and_cover_grid() {
        let mut via_bands = HeightGrid::for_chunk_radius(1);
        for mut band in via_bands.tile_bands_mut() {
            for tile_col in 0..band.tiles_across() {
                let base = ((band.tile_row() * 2 + tile_col) * 1000) as i32;
                band.write_tile(tile_col, &numbered_tile(base));
            }
        }

        let mut via_grid = HeightGrid::for_chunk_radius(1);
        for tile_row in 0..2 {
            for tile_col in 0..2 {
                let base = ((tile_row * 2 + tile_col) * 1000) as i32;
                via_grid.write_tile(
                    GridPos::tile_origin(tile_col as i32, tile_row as i32),
                    &numbered_tile(base),
                );
            }
        }

        assert_eq!(via_bands, via_grid);
        assert_eq!(via_bands.tile_bands_mut().count(), 2);
    }

    #[test]
    fn test_content_hash_tracks_contents() {
        let mut a = HeightGrid::new(4);
        let b = HeightGrid::new(4);
        assert_eq!(a.content_hash(), b.content_hash());
        a.set(3, 3, 1);
        assert_ne!(a.content_hash(), b.content_hash());
    }
}
