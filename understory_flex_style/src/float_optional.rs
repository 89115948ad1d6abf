// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 4-byte optional scalar float.

use core::fmt;

/// An optional `f32` stored in 4 bytes, using NaN as the absent state.
///
/// Style aggregates carry several optional scalars (flex, flex-grow,
/// flex-shrink, aspect-ratio). `Option<f32>` would double their footprint;
/// this type keeps them at 4 bytes each by reserving NaN for "not set",
/// which is safe because a present scalar is always a real number.
///
/// # Equality
///
/// Two values are equal when both are absent, or both are present with equal
/// numbers. Present payloads are never NaN, so equality is reflexive and
/// total.
///
/// # Example
///
/// ```rust
/// use understory_flex_style::FloatOptional;
///
/// let unset = FloatOptional::UNDEFINED;
/// assert!(unset.is_undefined());
/// assert_eq!(unset.get(), None);
/// assert_eq!(unset.unwrap_or(1.0), 1.0);
///
/// let grow = FloatOptional::new(2.0);
/// assert_eq!(grow.get(), Some(2.0));
/// assert_eq!(unset, FloatOptional::UNDEFINED);
/// assert_ne!(grow, unset);
/// ```
#[derive(Copy, Clone)]
pub struct FloatOptional(f32);

impl FloatOptional {
    /// The absent value.
    pub const UNDEFINED: Self = Self(f32::NAN);

    /// Wraps a present scalar.
    ///
    /// Passing NaN yields [`Self::UNDEFINED`]; NaN is the absent encoding.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns `true` if no value is set.
    #[must_use]
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0.is_nan()
    }

    /// Returns the value, if set.
    #[must_use]
    #[inline]
    pub fn get(self) -> Option<f32> {
        if self.0.is_nan() { None } else { Some(self.0) }
    }

    /// Returns the value, or `default` if unset.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: f32) -> f32 {
        if self.0.is_nan() { default } else { self.0 }
    }
}

impl Default for FloatOptional {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl From<f32> for FloatOptional {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Option<f32>> for FloatOptional {
    fn from(value: Option<f32>) -> Self {
        match value {
            Some(v) => Self::new(v),
            None => Self::UNDEFINED,
        }
    }
}

impl PartialEq for FloatOptional {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => true,
            (false, false) => self.0 == other.0,
            _ => false,
        }
    }
}

impl Eq for FloatOptional {}

impl fmt::Debug for FloatOptional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "FloatOptional({value})"),
            None => write!(f, "FloatOptional(Undefined)"),
        }
    }
}
