//! Search for the wither room closest to a target block.
//!
//! Generates the ceiling of a square area of chunks around the target, scans
//! it for uniform 3×3 windows, translates hits into world coordinates and
//! picks the one nearest the target.

use std::time::Instant;

use tracing::{debug, info, info_span};
use wither_coords::{BlockPos, ChunkPos};
use wither_terrain::{HeightGrid, Parallelism, TILE_SIZE, generate_area};

use crate::scan::find_wither_rooms;

/// Largest chunk radius accepted unless configured otherwise.
///
/// Radius 64 is a 2048×2048 grid (16 MiB of heights).
pub const DEFAULT_MAX_CHUNK_RADIUS: u32 = 64;

/// Errors raised while setting up a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The requested radius is zero or above the configured limit.
    #[error("chunk radius {radius} is outside the supported range 1..={max}")]
    RadiusOutOfRange { radius: u32, max: u32 },
}

/// Bounds applied when validating a [`SearchArea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_chunk_radius: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_chunk_radius: DEFAULT_MAX_CHUNK_RADIUS,
        }
    }
}

/// The square of chunks searched around a target block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchArea {
    target: BlockPos,
    chunk_radius: u32,
}

impl SearchArea {
    /// Validate the radius against `limits` and build the area.
    pub fn new(
        target: BlockPos,
        chunk_radius: u32,
        limits: SearchLimits,
    ) -> Result<Self, SearchError> {
        if chunk_radius == 0 || chunk_radius > limits.max_chunk_radius {
            return Err(SearchError::RadiusOutOfRange {
                radius: chunk_radius,
                max: limits.max_chunk_radius,
            });
        }
        Ok(Self {
            target,
            chunk_radius,
        })
    }

    pub fn target(&self) -> BlockPos {
        self.target
    }

    pub fn chunk_radius(&self) -> u32 {
        self.chunk_radius
    }

    /// The chunk containing the target block.
    pub fn center_chunk(&self) -> ChunkPos {
        self.target.to_chunk_pos()
    }

    /// World block at grid cell `[0][0]`.
    pub fn origin(&self) -> BlockPos {
        self.center_chunk()
            .translate(-(self.chunk_radius as i32))
            .to_block_pos()
    }

    /// Chunks per axis.
    pub fn chunks_across(&self) -> usize {
        2 * self.chunk_radius as usize
    }

    /// Blocks per axis.
    pub fn side_length(&self) -> usize {
        self.chunks_across() * TILE_SIZE
    }
}

/// Everything a search produced.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub area: SearchArea,
    /// Lowest ceiling bedrock heights, `[0][0]` at [`SearchArea::origin`].
    pub grid: HeightGrid,
    /// Room centers in world coordinates, in scan order.
    pub rooms: Vec<BlockPos>,
    /// The room nearest the target, if any was found.
    pub closest: Option<BlockPos>,
}

/// Pick the room nearest `target`; on ties the earlier room wins.
pub fn closest_room(rooms: &[BlockPos], target: BlockPos) -> Option<BlockPos> {
    rooms.iter().copied().reduce(|best, room| {
        if room.square_dist(target) < best.square_dist(target) {
            room
        } else {
            best
        }
    })
}

/// Generate, scan and rank the rooms in `area`.
pub fn run_search(area: SearchArea, parallelism: Parallelism) -> SearchReport {
    let _span = info_span!(
        "search",
        target = %area.target(),
        chunk_radius = area.chunk_radius()
    )
    .entered();

    let started = Instant::now();
    let grid = generate_area(area.center_chunk(), area.chunk_radius(), parallelism);
    info!(
        side = grid.side_length(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generation complete"
    );

    let origin = area.origin();
    let rooms: Vec<BlockPos> = find_wither_rooms(&grid)
        .into_iter()
        .map(|center| center.to_world(origin))
        .collect();
    for room in &rooms {
        debug!(%room, "found wither room");
    }

    let closest = closest_room(&rooms, area.target());
    info!(rooms = rooms.len(), closest = ?closest, "scan complete");

    SearchReport {
        area,
        grid,
        rooms,
        closest,
    }
}
