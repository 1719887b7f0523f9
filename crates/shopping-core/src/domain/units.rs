//! Size Units
//!
//! The fixed list offered by the unit selector. Stored units are not
//! restricted to it.

/// Units offered for measured quantities, in selector order
pub const SIZE_UNITS: &[&str] = &["lb", "kg", "g", "oz", "l", "ml", "pcs"];

/// Unit pre-selected by the form (first of [`SIZE_UNITS`])
pub fn default_unit() -> &'static str {
    SIZE_UNITS[0]
}
