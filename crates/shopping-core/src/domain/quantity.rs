//! Quantity Types
//!
//! How much of an item to buy: a plain count or a size with a unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantity representation chosen in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Plain integer, e.g. "3 apples"
    #[default]
    Count,
    /// Magnitude plus unit, e.g. "5 kg"
    Measured,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 2] = [QuantityKind::Count, QuantityKind::Measured];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Count => "count",
            QuantityKind::Measured => "measured",
        }
    }

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            QuantityKind::Count => "Number",
            QuantityKind::Measured => "Size",
        }
    }
}

/// Validated quantity of a shopping item.
///
/// Only the branch matching the kind exists, so a count item can never
/// carry a unit and a measured item can never carry a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Quantity {
    Count { value: i32 },
    Measured { value: String, unit: String },
}

impl Quantity {
    pub fn kind(&self) -> QuantityKind {
        match self {
            Quantity::Count { .. } => QuantityKind::Count,
            Quantity::Measured { .. } => QuantityKind::Measured,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count { value } => write!(f, "{}", value),
            Quantity::Measured { value, unit } => write!(f, "{} {}", value, unit),
        }
    }
}
