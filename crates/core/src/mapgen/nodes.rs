//! Per-cell node kind assignment driven by the shared map stream.

use crate::types::NodeKind;

use super::model::COLUMN_COUNT;
use super::rng::GameRng;

const MONSTER_ONLY_FLOOR: u8 = 0;
const TREASURE_FLOOR: u8 = 8;
const FINAL_REST_FLOOR: u8 = 14;
const ELITE_REST_MIN_FLOOR: u8 = 5;
const HIGH_ASCENSION_THRESHOLD: u8 = 20;
const CELL_PRESENCE_CHANCE: f64 = 0.8;

#[derive(Clone, Copy)]
struct KindWeights {
    monster: f64,
    elite: f64,
    event: f64,
    shop: f64,
    rest: f64,
}

const HIGH_ASCENSION_WEIGHTS: KindWeights =
    KindWeights { monster: 0.53, elite: 0.08, event: 0.20, shop: 0.12, rest: 0.07 };
const BASE_WEIGHTS: KindWeights =
    KindWeights { monster: 0.55, elite: 0.07, event: 0.22, shop: 0.10, rest: 0.06 };

/// Rolls the populated cells of one floor: `(column, kind)` pairs in
/// ascending column order. Each cell draws presence before any kind roll; a
/// floor whose cells all come out absent places a single node at a drawn
/// column, so no generated floor is ever empty.
pub(super) fn roll_floor_nodes(
    rng: &mut GameRng,
    floor: u8,
    ascension_level: u8,
) -> Vec<(u8, NodeKind)> {
    let mut cells = Vec::new();
    for column in 0..COLUMN_COUNT {
        if rng.next_f64() >= CELL_PRESENCE_CHANCE {
            continue;
        }
        cells.push((column, roll_cell_kind(rng, floor, ascension_level)));
    }
    if cells.is_empty() {
        let column = rng
            .next_i32_bounded(i32::from(COLUMN_COUNT))
            .expect("column count is positive") as u8;
        cells.push((column, roll_cell_kind(rng, floor, ascension_level)));
    }
    cells
}

fn roll_cell_kind(rng: &mut GameRng, floor: u8, ascension_level: u8) -> NodeKind {
    match floor {
        MONSTER_ONLY_FLOOR => NodeKind::Monster,
        TREASURE_FLOOR => NodeKind::Treasure,
        FINAL_REST_FLOOR => NodeKind::Rest,
        _ => kind_for_roll(rng.next_f64(), floor, ascension_level),
    }
}

/// Walks the cumulative buckets in the fixed order Monster, Elite, Event,
/// Shop, Rest. Rest is the catch-all: below the restricted floors the
/// redistributed buckets sum past 1.0, so the walk can never reach it there.
fn kind_for_roll(roll: f64, floor: u8, ascension_level: u8) -> NodeKind {
    let weights = floor_weights(floor, ascension_level);
    let buckets = [
        (NodeKind::Monster, weights.monster),
        (NodeKind::Elite, weights.elite),
        (NodeKind::Event, weights.event),
        (NodeKind::Shop, weights.shop),
    ];
    let mut cumulative = 0.0;
    for (kind, weight) in buckets {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }
    NodeKind::Rest
}

/// Elite and Rest are forbidden on early floors; each forbidden weight is
/// split into thirds and folded into the remaining buckets independently —
/// two shares of the Elite weight go to Monster, one each to Event and Shop,
/// while the Rest weight spreads evenly. The total is deliberately not
/// re-normalized.
fn floor_weights(floor: u8, ascension_level: u8) -> KindWeights {
    let mut weights = if ascension_level >= HIGH_ASCENSION_THRESHOLD {
        HIGH_ASCENSION_WEIGHTS
    } else {
        BASE_WEIGHTS
    };
    if floor < ELITE_REST_MIN_FLOOR {
        let elite_share = weights.elite / 3.0;
        weights.monster += elite_share * 2.0;
        weights.event += elite_share;
        weights.shop += elite_share;
        weights.elite = 0.0;

        let rest_share = weights.rest / 3.0;
        weights.monster += rest_share;
        weights.event += rest_share;
        weights.shop += rest_share;
        weights.rest = 0.0;
    }
    weights
}
