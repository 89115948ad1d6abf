// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical style properties and their packed-word encoding.
//!
//! Each enum here is a small categorical property that [`Style`](crate::Style)
//! stores inside one shared `u32`, at a fixed bit offset just wide enough for
//! the enum's cardinality. Ordinal 0 of every enum is its semantic default,
//! documented on the variant; `Style::new` writes defaults as named variants
//! so nothing relies on incidental zero-fill.
//!
//! The packing itself is two operations on the word: [`encode`] clears a
//! field's bit range and ORs in the new ordinal, [`decode`] shifts and masks
//! it back out. Both are total: only in-range ordinals are ever stored, so
//! decoding cannot observe an out-of-range pattern.

/// Number of bits needed to store every ordinal in `[0, cardinality)`.
pub(crate) const fn bit_width(cardinality: u32) -> u32 {
    u32::BITS - (cardinality - 1).leading_zeros()
}

/// A categorical property that can live in the packed style word.
///
/// Implementations map between the enum and its wire ordinal. `from_ordinal`
/// is only ever called on ordinals previously produced by `ordinal`, masked
/// to [`Self::BITS`]; anything else is a bug in the packing layout.
pub(crate) trait PackedEnum: Copy {
    /// Width of this property's bit range in the packed word.
    const BITS: u32;

    /// The ordinal stored in the packed word.
    fn ordinal(self) -> u32;

    /// Recovers the variant from a stored ordinal.
    fn from_ordinal(ordinal: u32) -> Self;
}

/// Reads a packed field at `offset` out of `word`.
#[inline]
pub(crate) fn decode<E: PackedEnum>(word: u32, offset: u32) -> E {
    let mask = (1 << E::BITS) - 1;
    E::from_ordinal((word >> offset) & mask)
}

/// Writes a packed field at `offset` into `word`, replacing the old ordinal.
#[inline]
pub(crate) fn encode<E: PackedEnum>(word: &mut u32, offset: u32, value: E) {
    let mask = ((1 << E::BITS) - 1) << offset;
    *word = (*word & !mask) | (value.ordinal() << offset);
}

/// Text direction, used to resolve logical `Start`/`End` edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Direction {
    /// Inherit the direction from the parent node (no override).
    #[default]
    Inherit = 0,
    /// Left-to-right.
    Ltr = 1,
    /// Right-to-left.
    Rtl = 2,
}

impl PackedEnum for Direction {
    const BITS: u32 = bit_width(3);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::Inherit,
            1 => Self::Ltr,
            2 => Self::Rtl,
            _ => unreachable!("ordinal {ordinal} out of range for Direction"),
        }
    }
}

/// Main-axis direction of a flex container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FlexDirection {
    /// Lay children out top-to-bottom.
    #[default]
    Column = 0,
    /// Lay children out bottom-to-top.
    ColumnReverse = 1,
    /// Lay children out start-to-end along the inline axis.
    Row = 2,
    /// Lay children out end-to-start along the inline axis.
    RowReverse = 3,
}

impl PackedEnum for FlexDirection {
    const BITS: u32 = bit_width(4);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::Column,
            1 => Self::ColumnReverse,
            2 => Self::Row,
            3 => Self::RowReverse,
            _ => unreachable!("ordinal {ordinal} out of range for FlexDirection"),
        }
    }
}

/// Distribution of children along the main axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Justify {
    /// Pack children toward the main-axis start.
    #[default]
    FlexStart = 0,
    /// Center children along the main axis.
    Center = 1,
    /// Pack children toward the main-axis end.
    FlexEnd = 2,
    /// Distribute remaining space between children.
    SpaceBetween = 3,
    /// Distribute remaining space around children.
    SpaceAround = 4,
    /// Distribute remaining space evenly, including the outer gaps.
    SpaceEvenly = 5,
}

impl PackedEnum for Justify {
    const BITS: u32 = bit_width(6);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::FlexStart,
            1 => Self::Center,
            2 => Self::FlexEnd,
            3 => Self::SpaceBetween,
            4 => Self::SpaceAround,
            5 => Self::SpaceEvenly,
            _ => unreachable!("ordinal {ordinal} out of range for Justify"),
        }
    }
}

/// Alignment along the cross axis.
///
/// One enum serves three properties: align-content (line distribution),
/// align-items (the container's default for its children), and align-self
/// (a child's override). `Auto` is only meaningful for align-self, where it
/// defers to the parent's align-items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Align {
    /// Defer to the container's align-items (align-self only).
    #[default]
    Auto = 0,
    /// Align toward the cross-axis start.
    FlexStart = 1,
    /// Center along the cross axis.
    Center = 2,
    /// Align toward the cross-axis end.
    FlexEnd = 3,
    /// Stretch to fill the cross axis.
    Stretch = 4,
    /// Align first baselines.
    Baseline = 5,
    /// Distribute lines with space between them (align-content only).
    SpaceBetween = 6,
    /// Distribute lines with space around them (align-content only).
    SpaceAround = 7,
}

impl PackedEnum for Align {
    const BITS: u32 = bit_width(8);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::Auto,
            1 => Self::FlexStart,
            2 => Self::Center,
            3 => Self::FlexEnd,
            4 => Self::Stretch,
            5 => Self::Baseline,
            6 => Self::SpaceBetween,
            7 => Self::SpaceAround,
            _ => unreachable!("ordinal {ordinal} out of range for Align"),
        }
    }
}

/// How a node is positioned relative to the normal flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PositionType {
    /// In flow; position offsets are ignored.
    #[default]
    Static = 0,
    /// In flow; position offsets shift the node after layout.
    Relative = 1,
    /// Out of flow; positioned against the containing node.
    Absolute = 2,
}

impl PackedEnum for PositionType {
    const BITS: u32 = bit_width(3);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::Static,
            1 => Self::Relative,
            2 => Self::Absolute,
            _ => unreachable!("ordinal {ordinal} out of range for PositionType"),
        }
    }
}

/// Whether flex items wrap onto multiple lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Wrap {
    /// Single line; items may overflow.
    #[default]
    NoWrap = 0,
    /// Wrap onto additional lines in the cross-axis direction.
    Wrap = 1,
    /// Wrap onto additional lines against the cross-axis direction.
    WrapReverse = 2,
}

impl PackedEnum for Wrap {
    const BITS: u32 = bit_width(3);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::NoWrap,
            1 => Self::Wrap,
            2 => Self::WrapReverse,
            _ => unreachable!("ordinal {ordinal} out of range for Wrap"),
        }
    }
}

/// How content that exceeds the node's bounds is treated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Overflow {
    /// Content may escape the bounds.
    #[default]
    Visible = 0,
    /// Content is clipped to the bounds.
    Hidden = 1,
    /// Content is clipped and the node is scrollable.
    Scroll = 2,
}

impl PackedEnum for Overflow {
    const BITS: u32 = bit_width(3);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::Visible,
            1 => Self::Hidden,
            2 => Self::Scroll,
            _ => unreachable!("ordinal {ordinal} out of range for Overflow"),
        }
    }
}

/// Whether a node participates in layout at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Display {
    /// The node is laid out as a flex container/item.
    #[default]
    Flex = 0,
    /// The node and its subtree are excluded from layout.
    None = 1,
}

impl PackedEnum for Display {
    const BITS: u32 = bit_width(2);

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            0 => Self::Flex,
            1 => Self::None,
            _ => unreachable!("ordinal {ordinal} out of range for Display"),
        }
    }
}
