//! Milestone levels and the coercion that repairs untrusted input into them.

use num_traits::{ToPrimitive, cast::cast};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer level in `0..=5`. Zero means "not assessed".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "u8")]
pub struct Milestone(u8);

impl Milestone {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(5);
    pub const ALL: [Self; 6] = [Self(0), Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Checked constructor, `None` outside `0..=5`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Add `delta` and clamp into `0..=5`. Saturates, never wraps.
    #[must_use]
    pub fn saturating_shift(self, delta: i32) -> Self {
        let shifted = i32::from(self.0)
            .saturating_add(delta)
            .clamp(i32::from(Self::MIN.0), i32::from(Self::MAX.0));
        cast::<i32, u8>(shifted).map_or(Self::MIN, Self)
    }
}

impl From<f64> for Milestone {
    fn from(value: f64) -> Self {
        coerce_f64(value)
    }
}

impl From<Milestone> for u8 {
    fn from(value: Milestone) -> Self {
        value.0
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn coerce_f64(value: f64) -> Milestone {
    if !value.is_finite() || value.fract() != 0.0 {
        return Milestone::MIN;
    }
    cast::<f64, u8>(value)
        .and_then(Milestone::new)
        .unwrap_or(Milestone::MIN)
}

/// Repair any numeric value into a milestone.
///
/// Only an exact integer in `0..=5` maps to itself. NaN, infinities,
/// fractions, negatives and values above 5 all map to 0.
#[must_use]
pub fn coerce_milestone<T: ToPrimitive>(raw: T) -> Milestone {
    raw.to_f64().map_or(Milestone::MIN, coerce_f64)
}

/// Like [`coerce_milestone`], with an absent value mapping to 0.
#[must_use]
pub fn coerce_optional<T: ToPrimitive>(raw: Option<T>) -> Milestone {
    raw.map_or(Milestone::MIN, coerce_milestone)
}

/// Repair a text field (for example one slot of a URL fragment).
///
/// Surrounding whitespace is ignored; empty or non-numeric text is 0.
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix.
#[must_use]
pub fn coerce_field(raw: Option<&str>) -> Milestone {
    let Some(text) = raw.map(str::trim) else {
        return Milestone::MIN;
    };
    if let Some((digits, radix)) = radix_literal(text) {
        let valid = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        return if valid {
            u64::from_str_radix(digits, radix).map_or(Milestone::MIN, coerce_milestone)
        } else {
            Milestone::MIN
        };
    }
    text.parse::<f64>().map_or(Milestone::MIN, coerce_f64)
}

fn radix_literal(text: &str) -> Option<(&str, u32)> {
    let (prefix, digits) = text.split_at_checked(2)?;
    match prefix {
        "0x" | "0X" => Some((digits, 16)),
        "0o" | "0O" => Some((digits, 8)),
        "0b" | "0B" => Some((digits, 2)),
        _ => None,
    }
}
