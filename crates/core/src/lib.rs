pub mod content;
pub mod mapgen;
pub mod types;

pub use mapgen::{ActMap, COLUMN_COUNT, FLOOR_COUNT, GameRng, MapNode, encounter_for_node, generate_map};
pub use types::*;
