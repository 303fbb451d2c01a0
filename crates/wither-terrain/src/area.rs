//! Generation of a square area of chunks into one shared grid.
//!
//! The area spans `2 × chunk_radius` chunks per axis, starting `chunk_radius`
//! chunks before the center chunk. Tiles can be generated on the calling
//! thread or spread over scoped worker threads; both paths produce the same
//! grid because every tile owns its generator and its cells.

use crossbeam_channel::unbounded;
use tracing::{debug, info_span};
use wither_coords::{ChunkPos, GridPos};

use crate::bedrock::{ceiling_tile, generate_tile};
use crate::grid::{HeightGrid, TileBand};

/// How tile generation is spread across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Generate every tile on the calling thread.
    #[default]
    Sequential,
    /// Use up to this many worker threads.
    Threads(usize),
    /// One worker per CPU core.
    Auto,
}

impl Parallelism {
    /// Map a configured worker count: 0 means auto, 1 means sequential.
    pub fn from_worker_threads(threads: usize) -> Self {
        match threads {
            0 => Self::Auto,
            1 => Self::Sequential,
            n => Self::Threads(n),
        }
    }

    /// Workers to use for `bands` independent tile bands (never more than bands).
    pub fn worker_count(self, bands: usize) -> usize {
        let wanted = match self {
            Self::Sequential => 1,
            Self::Threads(n) => n.max(1),
            Self::Auto => num_cpus::get().max(1),
        };
        wanted.min(bands).max(1)
    }
}

/// The chunk generated at tile offset `(tile_x, tile_z)` of an area.
pub fn area_chunk(center_chunk: ChunkPos, chunk_radius: u32, tile_x: i32, tile_z: i32) -> ChunkPos {
    center_chunk
        .plus(ChunkPos::new(tile_x, tile_z))
        .translate(-(chunk_radius as i32))
}

/// Generate the ceiling of every chunk within `chunk_radius` of `center_chunk`.
///
/// Returns a grid of side `2 × chunk_radius × 16` whose `[0][0]` cell is the
/// minimum corner of chunk `center_chunk - chunk_radius`.
pub fn generate_area(
    center_chunk: ChunkPos,
    chunk_radius: u32,
    parallelism: Parallelism,
) -> HeightGrid {
    let tiles_across = 2 * chunk_radius as usize;
    let workers = parallelism.worker_count(tiles_across);
    let _span = info_span!("generate_area", %center_chunk, chunk_radius, workers).entered();

    let mut grid = HeightGrid::for_chunk_radius(chunk_radius);
    if workers <= 1 {
        generate_sequential(&mut grid, center_chunk, chunk_radius);
    } else {
        generate_parallel(&mut grid, center_chunk, chunk_radius, workers);
    }
    grid
}

fn generate_sequential(grid: &mut HeightGrid, center_chunk: ChunkPos, chunk_radius: u32) {
    let tiles_across = 2 * chunk_radius as i32;
    for tile_x in 0..tiles_across {
        for tile_z in 0..tiles_across {
            let chunk = area_chunk(center_chunk, chunk_radius, tile_x, tile_z);
            debug!(%chunk, "calculating bedrock");
            generate_tile(grid, GridPos::tile_origin(tile_x, tile_z), chunk);
        }
    }
}

fn generate_parallel(
    grid: &mut HeightGrid,
    center_chunk: ChunkPos,
    chunk_radius: u32,
    workers: usize,
) {
    let (band_sender, band_receiver) = unbounded::<TileBand<'_>>();
    for band in grid.tile_bands_mut() {
        // The receiver is alive, so the send cannot fail.
        let _ = band_sender.send(band);
    }
    drop(band_sender);

    // Leaving the scope joins every worker before the grid is read again.
    std::thread::scope(|scope| {
        for worker in 0..workers {
            let receiver = band_receiver.clone();
            std::thread::Builder::new()
                .name(format!("bedrock-gen-{worker}"))
                .spawn_scoped(scope, move || {
                    while let Ok(mut band) = receiver.recv() {
                        let tile_z = band.tile_row() as i32;
                        for tile_x in 0..band.tiles_across() {
                            let chunk =
                                area_chunk(center_chunk, chunk_radius, tile_x as i32, tile_z);
                            debug!(%chunk, "calculating bedrock");
                            band.write_tile(tile_x, &ceiling_tile(chunk));
                        }
                    }
                })
                .expect("Failed to spawn bedrock generation worker thread");
        }
    });
}
