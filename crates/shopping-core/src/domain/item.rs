//! Shopping Item Entity
//!
//! A validated list entry and the raw form fields it is built from.

use serde::Serialize;

use super::error::{ValidationFailure, ValidationResult};
use super::quantity::{Quantity, QuantityKind};
use super::units::default_unit;

/// Raw, unvalidated form fields as the view layer holds them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub kind: QuantityKind,
    /// Count field text (read only for `Count`)
    pub count: String,
    /// Size field text (read only for `Measured`)
    pub measured_value: String,
    /// Selected unit (read only for `Measured`)
    pub unit: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: QuantityKind::default(),
            count: String::new(),
            measured_value: String::new(),
            unit: default_unit().to_string(),
        }
    }
}

impl ItemDraft {
    /// Draft for a counted item
    pub fn count(name: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: QuantityKind::Count,
            count: count.into(),
            ..Default::default()
        }
    }

    /// Draft for a measured item
    pub fn measured(
        name: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: QuantityKind::Measured,
            measured_value: value.into(),
            unit: unit.into(),
            ..Default::default()
        }
    }
}

/// An entry on the shopping list.
///
/// Name and quantity are fixed at construction; only `checked` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    name: String,
    quantity: Quantity,
    checked: bool,
}

impl ShoppingItem {
    /// Validate a draft and build an unchecked item from it
    pub fn try_build(draft: &ItemDraft) -> ValidationResult<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationFailure::EmptyName);
        }

        let quantity = match draft.kind {
            QuantityKind::Count => {
                // Plain integer parse: sign and zero allowed, surrounding spaces are not
                let value = draft
                    .count
                    .parse::<i32>()
                    .map_err(|_| ValidationFailure::InvalidCount)?;
                Quantity::Count { value }
            }
            QuantityKind::Measured => {
                if draft.measured_value.trim().is_empty() {
                    return Err(ValidationFailure::InvalidMeasurement);
                }
                if draft.unit.trim().is_empty() {
                    return Err(ValidationFailure::MissingUnit);
                }
                Quantity::Measured {
                    value: draft.measured_value.clone(),
                    unit: draft.unit.clone(),
                }
            }
        };

        Ok(Self {
            name: name.to_string(),
            quantity,
            checked: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn quantity_kind(&self) -> QuantityKind {
        self.quantity.kind()
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn count_value(&self) -> Option<i32> {
        match self.quantity {
            Quantity::Count { value } => Some(value),
            Quantity::Measured { .. } => None,
        }
    }

    pub fn measured_value(&self) -> Option<&str> {
        match &self.quantity {
            Quantity::Measured { value, .. } => Some(value),
            Quantity::Count { .. } => None,
        }
    }

    pub fn measured_unit(&self) -> Option<&str> {
        match &self.quantity {
            Quantity::Measured { unit, .. } => Some(unit),
            Quantity::Count { .. } => None,
        }
    }

    /// Row subtitle, e.g. "Quantity: 5 kg"
    pub fn quantity_label(&self) -> String {
        format!("Quantity: {}", self.quantity)
    }

    /// Flip the checked flag and return the new value
    pub(crate) fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}
