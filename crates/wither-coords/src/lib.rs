//! Block, chunk and grid-local coordinate spaces for the bedrock ceiling.
//!
//! Every position is a pair of `i32` axes `(x, z)` tagged at compile time with
//! the space it lives in. The compiler rejects mixing positions from different
//! spaces:
//!
//! ```rust
//! use wither_coords::{BlockPos, ChunkPos};
//!
//! let block = BlockPos::new(-8, 8);
//! let chunk: ChunkPos = block.to_chunk_pos();
//! assert_eq!(chunk, ChunkPos::new(-1, 0));
//!
//! // This would not compile:
//! // let mixed = block.plus(chunk);
//! ```
//!
//! # Coordinate Spaces
//!
//! 1. **Block Space** - absolute world blocks
//! 2. **Chunk Space** - absolute world chunks, 16 blocks per axis
//! 3. **Grid Space** - `(col, row)` offsets into a generated height grid,
//!    relative to the grid's world origin

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Blocks along each horizontal axis of a chunk.
pub const CHUNK_SIZE: i32 = 16;

/// `log2(CHUNK_SIZE)`; chunk conversions are arithmetic shifts by this amount.
pub const CHUNK_SHIFT: u32 = 4;

// Space marker types (zero-sized)
/// Marker type for absolute block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSpace;

/// Marker type for absolute chunk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkSpace;

/// Marker type for offsets into a height grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpace;

/// Enumeration of all coordinate spaces for runtime inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSpace {
    Block,
    Chunk,
    Grid,
}

/// Trait implemented by the space markers so generic code can name its space.
pub trait Space {
    /// The coordinate space as a runtime-inspectable value (for debug).
    const KIND: CoordinateSpace;
}

impl Space for BlockSpace {
    const KIND: CoordinateSpace = CoordinateSpace::Block;
}

impl Space for ChunkSpace {
    const KIND: CoordinateSpace = CoordinateSpace::Chunk;
}

impl Space for GridSpace {
    const KIND: CoordinateSpace = CoordinateSpace::Grid;
}

/// A horizontal position tagged with a coordinate space marker.
///
/// `S` is a zero-sized type that exists only at compile time. All arithmetic
/// wraps in two's complement rather than panicking on overflow.
pub struct Pos<S> {
    pub x: i32,
    pub z: i32,
    _space: PhantomData<S>,
}

/// Absolute position in blocks.
pub type BlockPos = Pos<BlockSpace>;

/// Absolute position in chunks.
pub type ChunkPos = Pos<ChunkSpace>;

/// `(col, row)` offset into a height grid.
pub type GridPos = Pos<GridSpace>;

impl<S> Pos<S> {
    /// Create a new position in the specified coordinate space.
    pub const fn new(x: i32, z: i32) -> Self {
        Self {
            x,
            z,
            _space: PhantomData,
        }
    }

    /// The origin `(0, 0)` of this space.
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Translate by `d` on both axes.
    #[must_use]
    pub fn translate(self, d: i32) -> Self {
        self.translate_xz(d, d)
    }

    /// Translate by `dx` on the x axis and `dz` on the z axis.
    #[must_use]
    pub fn translate_xz(self, dx: i32, dz: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.z.wrapping_add(dz))
    }

    /// Component-wise sum with another position of the same space.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        self.translate_xz(other.x, other.z)
    }

    /// Squared Euclidean distance.
    ///
    /// Computed from absolute differences in `u64`, so any pair of `i32`
    /// positions is representable except when both axes span the full `i32`
    /// range, where the result saturates.
    pub fn square_dist(self, other: Self) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dz = u64::from(self.z.abs_diff(other.z));
        (dx * dx).saturating_add(dz * dz)
    }
}

impl<S: Space> Pos<S> {
    /// The coordinate space this position lives in.
    pub fn space(&self) -> CoordinateSpace {
        S::KIND
    }
}

impl BlockPos {
    /// The chunk containing this block (floor division by 16).
    pub fn to_chunk_pos(self) -> ChunkPos {
        ChunkPos::new(self.x >> CHUNK_SHIFT, self.z >> CHUNK_SHIFT)
    }

    /// Offset of this block within its chunk, each axis in `0..16`.
    pub fn local_in_chunk(self) -> GridPos {
        GridPos::new(self.x & (CHUNK_SIZE - 1), self.z & (CHUNK_SIZE - 1))
    }
}

impl ChunkPos {
    /// The block at this chunk's minimum corner.
    pub fn to_block_pos(self) -> BlockPos {
        BlockPos::new(self.x << CHUNK_SHIFT, self.z << CHUNK_SHIFT)
    }
}

impl GridPos {
    /// Grid offset of the tile at `(tile_x, tile_z)` tiles from the grid corner.
    pub fn tile_origin(tile_x: i32, tile_z: i32) -> Self {
        Self::new(tile_x << CHUNK_SHIFT, tile_z << CHUNK_SHIFT)
    }

    /// Translate a grid offset into world space given the grid's world origin.
    pub fn to_world(self, origin: BlockPos) -> BlockPos {
        origin.translate_xz(self.x, self.z)
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<S> Clone for Pos<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Pos<S> {}

impl<S> PartialEq for Pos<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.z == other.z
    }
}

impl<S> Eq for Pos<S> {}

impl<S> Hash for Pos<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.z.hash(state);
    }
}

impl<S> Default for Pos<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S> fmt::Debug for Pos<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}, {})", self.x, self.z)
    }
}

impl<S> fmt::Display for Pos<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl<S> Add for Pos<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(other)
    }
}

impl<S> Sub for Pos<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x.wrapping_sub(other.x), self.z.wrapping_sub(other.z))
    }
}

impl<S> From<(i32, i32)> for Pos<S> {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}
