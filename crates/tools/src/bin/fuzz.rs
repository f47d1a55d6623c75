use std::collections::BTreeSet;

use anyhow::Result;
use clap::Parser;
use game_core::{ActMap, FLOOR_COUNT, NodeKind, Seed, generate_map};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the sweep's own randomness (not a map seed)
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// How many maps to generate and check
    #[arg(short = 'n', long, default_value_t = 500)]
    maps: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Sweeping {} generated maps from sweep seed {}...", args.maps, args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.maps {
        let map_seed = Seed::Numeric(rng.next_u64() as i64);
        let act = (rng.next_u64() % 3 + 1) as u8;
        let ascension = (rng.next_u64() % 21) as u8;

        let map = generate_map(&map_seed, act, ascension);
        assert_structure(&map, &map_seed, ascension);

        let rerun = generate_map(&map_seed, act, ascension);
        assert!(
            map == rerun,
            "Invariant failed: regeneration diverged for seed {map_seed} act {act} ascension {ascension}"
        );
    }

    println!("Sweep completed successfully.");
    Ok(())
}

fn assert_structure(map: &ActMap, map_seed: &Seed, ascension: u8) {
    let mut floors = BTreeSet::new();
    for node in &map.nodes {
        floors.insert(node.y);
        assert!(node.x < 7 && node.y < 15, "Invariant failed: node off-grid for seed {map_seed}");
        let expected = match node.y {
            0 => Some(NodeKind::Monster),
            8 => Some(NodeKind::Treasure),
            14 => Some(NodeKind::Rest),
            _ => None,
        };
        if let Some(kind) = expected {
            assert!(
                node.kind == kind,
                "Invariant failed: floor {} holds {:?} for seed {map_seed}",
                node.y,
                node.kind
            );
        }
        if node.y < 5 {
            assert!(
                node.kind != NodeKind::Elite && node.kind != NodeKind::Rest,
                "Invariant failed: {:?} below floor 5 for seed {map_seed} ascension {ascension}",
                node.kind
            );
        }
    }
    assert!(
        floors.len() == usize::from(FLOOR_COUNT),
        "Invariant failed: expected 15 floor groups for seed {map_seed}"
    );

    let mut seen = BTreeSet::new();
    for &(from, to) in &map.edges {
        assert!(
            map.nodes[to].y == map.nodes[from].y + 1,
            "Invariant failed: edge ({from}, {to}) is not forward-only for seed {map_seed}"
        );
        assert!(
            seen.insert((from, to)),
            "Invariant failed: duplicate edge ({from}, {to}) for seed {map_seed}"
        );
    }
}
