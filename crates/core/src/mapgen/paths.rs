//! Floor-to-floor edge construction for the act graph.

use std::collections::BTreeSet;

use super::model::{FLOOR_COUNT, MapNode};
use super::rng::GameRng;

/// Connects every populated floor to the one above it and returns the
/// deduplicated edge list in first-occurrence order. Edges always step the
/// floor index up by exactly one, so the result is acyclic by construction.
pub(super) fn build_edges(rng: &mut GameRng, nodes: &[MapNode]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for floor in 0..FLOOR_COUNT - 1 {
        let current = indices_on_floor(nodes, floor);
        let next = indices_on_floor(nodes, floor + 1);
        if current.is_empty() || next.is_empty() {
            continue;
        }
        for &from in &current {
            let mut targets = next.clone();
            targets.sort_by_key(|&to| nodes[from].x.abs_diff(nodes[to].x));
            let connection_draw =
                rng.next_i32_bounded(2).expect("connection bound is positive") as usize + 1;
            // The slice takes one more target than the draw, so each node
            // fans out to the 2 or 3 closest next-floor nodes.
            for &to in targets.iter().take(connection_draw + 1) {
                edges.push((from, to));
            }
        }
    }
    dedup_edges(edges)
}

/// Fills each node's parent/child lists with a single scan of the edge list.
pub(super) fn attach_adjacency(nodes: &mut [MapNode], edges: &[(usize, usize)]) {
    for &(from, to) in edges {
        nodes[from].children.push(to);
        nodes[to].parents.push(from);
    }
}

fn dedup_edges(edges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut seen = BTreeSet::new();
    edges.into_iter().filter(|edge| seen.insert(*edge)).collect()
}

fn indices_on_floor(nodes: &[MapNode], floor: u8) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.y == floor)
        .map(|(index, _)| index)
        .collect()
}
