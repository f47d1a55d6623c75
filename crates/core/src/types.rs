use std::fmt;

use serde::{Deserialize, Serialize};

/// Seed input for map and encounter generation.
///
/// Numeric seeds feed the engine directly; textual seeds are reduced to a
/// 32-bit value once, at engine construction. The `Display` spelling is what
/// composite sub-seed keys are built from, so a numeric seed prints as plain
/// decimal and a textual seed prints verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seed {
    Numeric(i64),
    Textual(String),
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Numeric(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Textual(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Textual(text)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Numeric(value) => write!(formatter, "{value}"),
            Seed::Textual(text) => formatter.write_str(text),
        }
    }
}

/// Activity tag carried by every map node.
///
/// `Boss` is never produced by grid generation; it exists for consumers that
/// model the synthetic node one floor above the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Monster,
    Elite,
    Event,
    Shop,
    Rest,
    Treasure,
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngError {
    /// A bounded draw was requested with a zero or negative bound.
    NonPositiveBound,
    /// A uniform pick was requested from an empty pool.
    EmptyPool,
}
