// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length values: the compact tagged scalar and the boundary pair.

use core::fmt;

/// The kind of a layout length.
///
/// `Undefined` and `Auto` carry no numeric payload; `Point` is an absolute
/// length and `Percent` is relative to the parent's corresponding size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Unit {
    /// No value set.
    #[default]
    Undefined = 0,
    /// Let the layout algorithm pick.
    Auto = 1,
    /// Absolute length in points.
    Point = 2,
    /// Percentage of the parent's size.
    Percent = 3,
}

/// The boundary `{unit, value}` pair for a layout length.
///
/// This is the representation style builders and layout algorithms exchange
/// at API boundaries. Internally, styles store lengths as [`CompactValue`];
/// conversion between the two is lossless for all four kinds.
///
/// For `Undefined` and `Auto` the `value` field is not meaningful and is
/// ignored by equality; the constants below carry NaN there.
#[derive(Copy, Clone, Debug)]
pub struct Value {
    /// The kind of length.
    pub unit: Unit,
    /// The numeric payload, meaningful for `Point` and `Percent` only.
    pub value: f32,
}

impl Value {
    /// No value.
    pub const UNDEFINED: Self = Self {
        unit: Unit::Undefined,
        value: f32::NAN,
    };

    /// Automatic sizing.
    pub const AUTO: Self = Self {
        unit: Unit::Auto,
        value: f32::NAN,
    };

    /// Zero points.
    pub const ZERO: Self = Self {
        unit: Unit::Point,
        value: 0.0,
    };

    /// An absolute length in points.
    #[must_use]
    pub const fn points(value: f32) -> Self {
        Self {
            unit: Unit::Point,
            value,
        }
    }

    /// A percentage of the parent's size.
    #[must_use]
    pub const fn percent(value: f32) -> Self {
        Self {
            unit: Unit::Percent,
            value,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
            && match self.unit {
                Unit::Undefined | Unit::Auto => true,
                Unit::Point | Unit::Percent => self.value.to_bits() == other.value.to_bits(),
            }
    }
}

impl Eq for Value {}

impl Default for Value {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

/// A layout length in its compact storage form.
///
/// `CompactValue` is a unit tag plus payload in 8 bytes, with no `Option`
/// wrapping and no heap involvement. It is the slot type of every indexed
/// style container, so styles with many edge values stay small and
/// contiguous.
///
/// The payload of `Undefined` and `Auto` is a fixed NaN; [`value`](Self::value)
/// returns it as the deterministic "not applicable" sentinel, so callers that
/// care about the number should check [`unit`](Self::unit) first.
///
/// # Equality
///
/// Equality compares the unit first, then the payload by **bit identity**
/// (`f32::to_bits`), never by ordinary float comparison. This keeps equality
/// reflexive and total, which the style aggregate relies on for its
/// relayout-skip check. Two payload-less values of the same unit are always
/// equal regardless of how they were constructed.
///
/// # Example
///
/// ```rust
/// use understory_flex_style::{CompactValue, Unit, Value};
///
/// let margin = CompactValue::of_points(10.0);
/// assert_eq!(margin.unit(), Unit::Point);
/// assert_eq!(margin.value(), 10.0);
///
/// // Lossless round-trip through the boundary pair.
/// let boundary: Value = margin.into();
/// assert_eq!(CompactValue::from(boundary), margin);
///
/// // Payload-less kinds compare equal by construction.
/// assert_eq!(CompactValue::auto(), CompactValue::AUTO);
/// assert!(CompactValue::undefined().value().is_nan());
/// ```
#[derive(Copy, Clone)]
pub struct CompactValue {
    unit: Unit,
    payload: f32,
}

impl CompactValue {
    /// No value.
    pub const UNDEFINED: Self = Self {
        unit: Unit::Undefined,
        payload: f32::NAN,
    };

    /// Automatic sizing.
    pub const AUTO: Self = Self {
        unit: Unit::Auto,
        payload: f32::NAN,
    };

    /// Returns the undefined value.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    /// Returns the auto value.
    #[must_use]
    pub const fn auto() -> Self {
        Self::AUTO
    }

    /// An absolute length in points.
    ///
    /// A non-finite `value` collapses to [`Self::UNDEFINED`].
    #[must_use]
    pub fn of_points(value: f32) -> Self {
        Self::of(Unit::Point, value)
    }

    /// A percentage of the parent's size.
    ///
    /// A non-finite `value` collapses to [`Self::UNDEFINED`].
    #[must_use]
    pub fn of_percent(value: f32) -> Self {
        Self::of(Unit::Percent, value)
    }

    fn of(unit: Unit, value: f32) -> Self {
        if value.is_finite() {
            Self {
                unit,
                payload: value,
            }
        } else {
            Self::UNDEFINED
        }
    }

    /// Returns the kind of this value.
    #[must_use]
    #[inline]
    pub const fn unit(self) -> Unit {
        self.unit
    }

    /// Returns the numeric payload.
    ///
    /// For `Undefined` and `Auto` this is NaN, returned deterministically
    /// rather than treated as an error.
    #[must_use]
    #[inline]
    pub const fn value(self) -> f32 {
        self.payload
    }

    /// Returns `true` if this value is `Undefined`.
    #[must_use]
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.unit == Unit::Undefined
    }

    /// Returns `true` if this value is `Auto`.
    #[must_use]
    #[inline]
    pub fn is_auto(self) -> bool {
        self.unit == Unit::Auto
    }
}

impl PartialEq for CompactValue {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
            && match self.unit {
                Unit::Undefined | Unit::Auto => true,
                Unit::Point | Unit::Percent => self.payload.to_bits() == other.payload.to_bits(),
            }
    }
}

impl Eq for CompactValue {}

impl Default for CompactValue {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Debug for CompactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Undefined => write!(f, "Undefined"),
            Unit::Auto => write!(f, "Auto"),
            Unit::Point => write!(f, "Point({})", self.payload),
            Unit::Percent => write!(f, "Percent({})", self.payload),
        }
    }
}

impl From<Value> for CompactValue {
    fn from(value: Value) -> Self {
        match value.unit {
            Unit::Undefined => Self::UNDEFINED,
            Unit::Auto => Self::AUTO,
            Unit::Point => Self::of_points(value.value),
            Unit::Percent => Self::of_percent(value.value),
        }
    }
}

impl From<CompactValue> for Value {
    fn from(value: CompactValue) -> Self {
        Self {
            unit: value.unit,
            value: value.payload,
        }
    }
}
