//! Public data model for generated act maps.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::NodeKind;

pub const COLUMN_COUNT: u8 = 7;
pub const FLOOR_COUNT: u8 = 15;

/// One traversable position in the act graph. Immutable once the map is
/// built; `parents`/`children` are derived from the final edge list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNode {
    pub x: u8,
    pub y: u8,
    pub kind: NodeKind,
    pub parents: Vec<usize>,
    pub children: Vec<usize>,
}

/// A whole generated act: nodes in floor-major, column-ascending order
/// (index = identity) plus the deduplicated directed edge list. A value, not
/// a service — rebuilding from the same inputs yields an equal value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActMap {
    pub act: u8,
    pub nodes: Vec<MapNode>,
    pub edges: Vec<(usize, usize)>,
}

impl ActMap {
    pub fn floor_nodes(&self, floor: u8) -> impl Iterator<Item = (usize, &MapNode)> {
        self.nodes.iter().enumerate().filter(move |(_, node)| node.y == floor)
    }

    /// Stable byte encoding of the generated structure. Adjacency lists are
    /// excluded: they are a pure function of the encoded edge list.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.push(self.act);
        bytes.extend((self.nodes.len() as u32).to_le_bytes());
        for node in &self.nodes {
            bytes.push(node.x);
            bytes.push(node.y);
            bytes.push(kind_code(node.kind));
        }
        bytes.extend((self.edges.len() as u32).to_le_bytes());
        for &(from, to) in &self.edges {
            bytes.extend((from as u32).to_le_bytes());
            bytes.extend((to as u32).to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn kind_code(kind: NodeKind) -> u8 {
    match kind {
        NodeKind::Monster => 0,
        NodeKind::Elite => 1,
        NodeKind::Event => 2,
        NodeKind::Shop => 3,
        NodeKind::Rest => 4,
        NodeKind::Treasure => 5,
        NodeKind::Boss => 6,
    }
}
