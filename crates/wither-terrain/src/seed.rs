//! Deterministic per-chunk seeding.
//!
//! Each chunk gets its own generator, seeded from the chunk coordinates with
//! the fixed linear formula used by the bedrock rule. Generators are never
//! shared between chunks.

use wither_coords::ChunkPos;

use crate::bedrock::ceiling_tile;
use crate::random::JavaRandom;

/// Multiplier applied to the chunk x coordinate.
pub const SEED_MULTIPLIER_X: i64 = 341_873_128_712;

/// Multiplier applied to the chunk z coordinate.
pub const SEED_MULTIPLIER_Z: i64 = 132_897_987_541;

// ---------------------------------------------------------------------------
// Seed derivation
// ---------------------------------------------------------------------------

/// Derive the generator seed for a chunk.
///
/// `x * 341873128712 + z * 132897987541` in 64-bit two's complement.
/// Overflow wraps; it is part of the formula, not an error.
pub fn chunk_seed(chunk: ChunkPos) -> i64 {
    i64::from(chunk.x)
        .wrapping_mul(SEED_MULTIPLIER_X)
        .wrapping_add(i64::from(chunk.z).wrapping_mul(SEED_MULTIPLIER_Z))
}

/// Derive a fresh generator for a specific chunk.
///
/// The returned generator produces an identical sequence for the same chunk,
/// regardless of thread or platform.
pub fn chunk_rng(chunk: ChunkPos) -> JavaRandom {
    JavaRandom::new(chunk_seed(chunk))
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Generate a chunk's ceiling and return its content hash for determinism checks.
pub fn generate_and_hash(chunk: ChunkPos) -> u64 {
    ceiling_tile(chunk).content_hash()
}
