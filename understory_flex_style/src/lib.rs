// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Flex Style: compact per-node flexbox style storage.
//!
//! This crate provides [`Style`], the in-memory representation of the
//! layout-affecting properties of one node in a flexbox tree. A consumer may
//! hold one `Style` per UI element across trees with tens of thousands of
//! nodes, so the representation is optimized for two things: per-node
//! footprint, and cheap total equality (the signal a layout engine uses to
//! skip redundant relayout).
//!
//! Layout itself — flex resolution, measurement, tree traversal, dirty
//! propagation — lives elsewhere. This crate only stores properties, encodes
//! them compactly, and compares them.
//!
//! ## Core Concepts
//!
//! ### Length values
//!
//! [`CompactValue`] is a tagged scalar for a layout length: `Undefined`,
//! `Auto`, `Point` (absolute), or `Percent` (relative to the parent).
//! Equality is bit-identical on the payload, so it stays reflexive even for
//! exotic float patterns. [`Value`] is the plain `{unit, value}` pair used at
//! API boundaries; conversion between the two is lossless for all four kinds.
//!
//! ### Packed categorical properties
//!
//! Nine small enumerations (direction, flex-direction, justify-content,
//! align-content, align-items, align-self, position-type, flex-wrap,
//! overflow, display) share a single `u32` inside [`Style`], each at a fixed
//! bit offset just wide enough for its cardinality. The word is an
//! implementation detail: callers only ever see typed enums such as
//! [`FlexDirection`] or [`Align`].
//!
//! ### Indexed containers
//!
//! Per-edge, per-dimension, and per-gutter values are stored in fixed arrays
//! indexed by the typed index spaces [`Edge`] (9 slots, including the logical
//! `Start`/`End`/`Horizontal`/`Vertical`/`All` selectors), [`Dimension`]
//! (width/height), and [`Gutter`] (row/column/all). Writing an aggregate slot
//! such as `Edge::All` never cascades into specific slots; resolving that
//! precedence is the layout algorithm's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_flex_style::{Align, CompactValue, Edge, FloatOptional, Style};
//!
//! let mut style = Style::new();
//!
//! // Flexbox-specification defaults.
//! assert_eq!(style.align_items(), Align::Stretch);
//! assert!(style.flex_basis().is_auto());
//!
//! // Write through typed accessors.
//! style.set_flex_grow(FloatOptional::new(1.0));
//! style.set_margin(Edge::Left, CompactValue::of_points(10.0));
//!
//! // Equality is the relayout-skip signal.
//! let snapshot = style;
//! assert_ne!(style, Style::new());
//! assert_eq!(style, snapshot);
//! ```
//!
//! ## Memory Optimizations
//!
//! | Optimization | Description |
//! |--------------|-------------|
//! | **Packed enum word** | Nine categorical properties in one `u32` instead of nine discrete fields |
//! | **`CompactValue`** | Unit tag + payload in 8 bytes, no `Option` wrapping |
//! | **`FloatOptional`** | Optional scalar in 4 bytes, NaN-tagged absence |
//! | **Fixed arrays** | Edge/dimension/gutter groups are inline arrays, no heap |
//!
//! `Style` is a plain `Copy` value type with no internal pointers: a node
//! owns its style by value, and once writes cease a snapshot can be shared
//! freely across readers. The crate performs no synchronization; concurrent
//! mutation must be serialized by the owner.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and does not allocate. It does not depend on
//! `alloc` or `std`.

#![no_std]

mod enums;
mod float_optional;
mod index;
mod style;
mod value;

pub use enums::{
    Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap,
};
pub use float_optional::FloatOptional;
pub use index::{Dimension, Dimensions, Edge, Edges, Gutter, Gutters, ValueIndex, Values};
pub use style::Style;
pub use value::{CompactValue, Unit, Value};
