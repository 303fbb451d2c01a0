//! Seeded simulation of the nether ceiling bedrock layer.
//!
//! Reproduces the fixed per-chunk bedrock rule on top of a bit-exact
//! `java.util.Random` port, and assembles chunks into square height grids.

mod area;
mod bedrock;
mod grid;
mod random;
mod seed;

pub use area::{Parallelism, area_chunk, generate_area};
pub use bedrock::{BEDROCK_SPREAD, CEILING_MIN, CEILING_TOP, ceiling_tile, generate_tile};
pub use grid::{GridError, HeightGrid, TILE_SIZE, TileBand, TileHeights};
pub use random::JavaRandom;
pub use seed::{SEED_MULTIPLIER_X, SEED_MULTIPLIER_Z, chunk_rng, chunk_seed, generate_and_hash};
