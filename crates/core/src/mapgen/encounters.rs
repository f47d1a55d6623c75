//! Floor-scoped monster encounter selection.

use crate::content;
use crate::types::{RngError, Seed};

use super::rng::GameRng;

/// Picks one encounter for a monster node. The engine is seeded from the
/// composite `"{seed}-{act}-{floor}"` key, so the pick is independent of any
/// map-building stream for the same seed.
pub(super) fn select_encounter(
    seed: &Seed,
    act: u8,
    floor: u8,
) -> Result<Vec<&'static str>, RngError> {
    let key = Seed::Textual(format!("{seed}-{act}-{floor}"));
    let mut rng = GameRng::new(&key);
    let encounter = rng.choice(content::encounter_table(act))?;
    Ok(encounter.to_vec())
}
