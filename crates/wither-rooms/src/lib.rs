//! Wither room detection in the nether ceiling.
//!
//! A wither room is a 3×3 patch of ceiling whose lowest bedrock blocks all sit
//! at the same height. This crate scans generated height grids for such
//! patches and runs complete searches around a target block.

mod scan;
mod search;

pub use scan::{find_wither_rooms, find_wither_rooms_exhaustive};
pub use search::{
    DEFAULT_MAX_CHUNK_RADIUS, SearchArea, SearchError, SearchLimits, SearchReport, closest_room,
    run_search,
};
