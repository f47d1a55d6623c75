//! Curated static content tables consumed by encounter selection.

/// One encounter: the ordered enemy groups that spawn together.
pub type Encounter = &'static [&'static str];

pub const ACT_ONE_ENCOUNTERS: &[Encounter] = &[
    &["Cultist"],
    &["Jaw Worm"],
    &["Red Louse", "Green Louse"],
    &["Spike Slime (M)", "Acid Slime (S)"],
    &["Blue Slaver"],
    &["Red Slaver"],
    &["Looter"],
    &["Fungi Beast", "Fungi Beast"],
    &["Gremlin Gang"],
    &["Large Slime"],
];

pub const ACT_TWO_ENCOUNTERS: &[Encounter] = &[
    &["Spheric Guardian"],
    &["Chosen"],
    &["Shelled Parasite"],
    &["Byrd", "Byrd", "Byrd"],
    &["Looter", "Mugger"],
    &["Cultist", "Chosen"],
    &["Snake Plant"],
    &["Snecko"],
    &["Centurion", "Mystic"],
    &["Shelled Parasite", "Fungi Beast"],
];

pub const ACT_THREE_ENCOUNTERS: &[Encounter] = &[
    &["Darkling", "Darkling", "Darkling"],
    &["Orb Walker"],
    &["Spiker", "Repulsor", "Exploder"],
    &["Transient"],
    &["The Maw"],
    &["Jaw Worm", "Jaw Worm", "Jaw Worm"],
    &["Spheric Guardian", "Spiker"],
    &["Writhing Mass"],
    &["Spire Growth"],
    &["Snake Plant", "Snecko"],
];

/// Encounter pool for an act. Unknown acts map to an empty pool so a uniform
/// pick from them surfaces the empty-pool error at the call site.
pub fn encounter_table(act: u8) -> &'static [Encounter] {
    match act {
        1 => ACT_ONE_ENCOUNTERS,
        2 => ACT_TWO_ENCOUNTERS,
        3 => ACT_THREE_ENCOUNTERS,
        _ => &[],
    }
}
