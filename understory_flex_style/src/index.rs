// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed index spaces and the fixed-size value containers they select into.
//!
//! Box-model properties come in groups: one value per edge, per dimension,
//! or per gutter. Each group keeps its own index type — consumers depend on
//! the exact cardinality of each space, so they are deliberately *not*
//! unified behind one generic index.

use core::marker::PhantomData;

use crate::value::CompactValue;

/// An ordinal index into a [`Values`] container.
///
/// Implemented by [`Edge`], [`Dimension`], and [`Gutter`]. `ordinal` is total
/// and in `[0, COUNT)` by construction, so container access never bounds-fails.
pub trait ValueIndex: Copy {
    /// Number of slots in this index space.
    const COUNT: usize;

    /// The slot selected by this index.
    fn ordinal(self) -> usize;
}

/// Edge selector for box-model properties.
///
/// The first four are physical edges; `Start`/`End` are logical edges
/// resolved against the node's [`Direction`](crate::Direction);
/// `Horizontal`/`Vertical`/`All` are aggregates. Writing an aggregate slot
/// stores exactly that slot — aggregate-vs-specific precedence is resolved
/// by the layout algorithm, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Edge {
    /// Physical left edge.
    Left = 0,
    /// Physical top edge.
    Top = 1,
    /// Physical right edge.
    Right = 2,
    /// Physical bottom edge.
    Bottom = 3,
    /// Logical start edge (left in LTR, right in RTL).
    Start = 4,
    /// Logical end edge (right in LTR, left in RTL).
    End = 5,
    /// Both left and right.
    Horizontal = 6,
    /// Both top and bottom.
    Vertical = 7,
    /// All four edges.
    All = 8,
}

impl ValueIndex for Edge {
    const COUNT: usize = 9;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }
}

/// Width/height axis selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dimension {
    /// The horizontal extent.
    Width = 0,
    /// The vertical extent.
    Height = 1,
}

impl ValueIndex for Dimension {
    const COUNT: usize = 2;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }
}

/// Gap selector for space between flex lines and items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Gutter {
    /// Gap between columns.
    Column = 0,
    /// Gap between rows.
    Row = 1,
    /// Both row and column gaps.
    All = 2,
}

impl ValueIndex for Gutter {
    const COUNT: usize = 3;

    #[inline]
    fn ordinal(self) -> usize {
        self as usize
    }
}

/// A fixed-length sequence of [`CompactValue`], one slot per ordinal of `I`.
///
/// The container is constructed filled with a declared per-group default
/// ([`filled`](Self::filled)); a slot that is never written reads back as
/// that default. [`set`](Self::set) replaces a slot unconditionally and
/// never cascades into other slots. Equality is slot-by-slot in index order.
///
/// `N` must be `I::COUNT`; the [`Edges`], [`Dimensions`], and [`Gutters`]
/// aliases pin the pairing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Values<I: ValueIndex, const N: usize> {
    slots: [CompactValue; N],
    marker: PhantomData<I>,
}

impl<I: ValueIndex, const N: usize> Values<I, N> {
    /// A container with every slot set to `default`.
    #[must_use]
    pub const fn filled(default: CompactValue) -> Self {
        Self {
            slots: [default; N],
            marker: PhantomData,
        }
    }

    /// Returns the value at `index`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: I) -> CompactValue {
        self.slots[index.ordinal()]
    }

    /// Replaces the value at `index`.
    #[inline]
    pub fn set(&mut self, index: I, value: CompactValue) {
        self.slots[index.ordinal()] = value;
    }
}

impl<I: ValueIndex, const N: usize> Default for Values<I, N> {
    fn default() -> Self {
        Self::filled(CompactValue::UNDEFINED)
    }
}

/// Edge-indexed values (margin, position, padding, border).
pub type Edges = Values<Edge, { Edge::COUNT }>;

/// Dimension-indexed values (size, min-size, max-size).
pub type Dimensions = Values<Dimension, { Dimension::COUNT }>;

/// Gutter-indexed values (gap).
pub type Gutters = Values<Gutter, { Gutter::COUNT }>;
