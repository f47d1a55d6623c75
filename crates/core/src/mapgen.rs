//! Deterministic act map and encounter generation split into coherent
//! submodules.

pub mod model;

mod encounters;
mod nodes;
mod paths;
mod rng;

pub use model::{ActMap, COLUMN_COUNT, FLOOR_COUNT, MapNode};
pub use rng::GameRng;

use crate::types::{RngError, Seed};

/// Builds the full act map for `(seed, act, ascension_level)`. Pure and
/// total: the same inputs always produce a structurally identical value,
/// including node order and edge order.
pub fn generate_map(seed: &Seed, act: u8, ascension_level: u8) -> ActMap {
    let mut rng = GameRng::new(seed);

    let mut nodes = Vec::new();
    for floor in 0..FLOOR_COUNT {
        for (column, kind) in nodes::roll_floor_nodes(&mut rng, floor, ascension_level) {
            nodes.push(MapNode {
                x: column,
                y: floor,
                kind,
                parents: Vec::new(),
                children: Vec::new(),
            });
        }
    }

    let edges = paths::build_edges(&mut rng, &nodes);
    paths::attach_adjacency(&mut nodes, &edges);

    ActMap { act, nodes, edges }
}

/// Picks the encounter for a monster node on `floor`, independently of any
/// map built from the same seed. `ascension_level` is accepted but does not
/// yet shift the pools.
pub fn encounter_for_node(
    seed: &Seed,
    act: u8,
    floor: u8,
    ascension_level: u8,
) -> Result<Vec<&'static str>, RngError> {
    let _ = ascension_level;
    encounters::select_encounter(seed, act, floor)
}
