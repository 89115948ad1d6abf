// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-node style aggregate.

use crate::enums::{
    Align, Direction, Display, FlexDirection, Justify, Overflow, PackedEnum, PositionType, Wrap,
    decode, encode,
};
use crate::float_optional::FloatOptional;
use crate::index::{Dimension, Dimensions, Edge, Edges, Gutter, Gutters};
use crate::value::CompactValue;

// Bit offsets of the packed categorical fields, in fixed declaration order.
// Reordering changes the word's layout; nothing outside this module may
// observe that layout.
const DIRECTION_OFFSET: u32 = 0;
const FLEX_DIRECTION_OFFSET: u32 = DIRECTION_OFFSET + Direction::BITS;
const JUSTIFY_CONTENT_OFFSET: u32 = FLEX_DIRECTION_OFFSET + FlexDirection::BITS;
const ALIGN_CONTENT_OFFSET: u32 = JUSTIFY_CONTENT_OFFSET + Justify::BITS;
const ALIGN_ITEMS_OFFSET: u32 = ALIGN_CONTENT_OFFSET + Align::BITS;
const ALIGN_SELF_OFFSET: u32 = ALIGN_ITEMS_OFFSET + Align::BITS;
const POSITION_TYPE_OFFSET: u32 = ALIGN_SELF_OFFSET + Align::BITS;
const FLEX_WRAP_OFFSET: u32 = POSITION_TYPE_OFFSET + PositionType::BITS;
const OVERFLOW_OFFSET: u32 = FLEX_WRAP_OFFSET + Wrap::BITS;
const DISPLAY_OFFSET: u32 = OVERFLOW_OFFSET + Overflow::BITS;

const PACKED_BITS: u32 = DISPLAY_OFFSET + Display::BITS;
const _: () = assert!(
    PACKED_BITS <= u32::BITS,
    "packed categorical fields must fit in one u32"
);

/// The complete set of layout-affecting properties owned by one tree node.
///
/// `Style` is a plain value type: no heap, no internal pointers, freely
/// copyable. A layout tree node owns exactly one `Style` by value; an
/// external style builder writes it through the typed accessors, the layout
/// algorithm reads it the same way, and equality between two snapshots tells
/// the node whether relayout can be skipped. The crate does not synchronize
/// mutation — the owner must serialize writes, after which snapshots may be
/// shared across readers without coordination.
///
/// Nine categorical properties live in one packed `u32`; four optional
/// scalars are NaN-tagged [`FloatOptional`]s; the remaining properties are
/// [`CompactValue`]s, grouped into fixed edge/dimension/gutter containers.
/// Callers observe no difference between the three encodings.
///
/// # Defaults
///
/// [`Style::new`] applies the flexbox-specification initial values:
/// `align_content = FlexStart`, `align_items = Stretch`, `flex_basis =
/// Auto`, both dimensions `Auto`. Every other categorical property is its
/// documented ordinal-0 variant, and every other length is `Undefined`.
///
/// # Example
///
/// ```rust
/// use understory_flex_style::{CompactValue, Edge, FlexDirection, Style, Unit};
///
/// let mut style = Style::new();
/// style.set_flex_direction(FlexDirection::Row);
/// style.set_padding(Edge::Horizontal, CompactValue::of_percent(5.0));
///
/// assert_eq!(style.flex_direction(), FlexDirection::Row);
/// assert_eq!(style.padding(Edge::Horizontal).unit(), Unit::Percent);
/// // Aggregate writes never cascade into specific edges.
/// assert_eq!(style.padding(Edge::Left).unit(), Unit::Undefined);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Style {
    flags: u32,
    flex: FloatOptional,
    flex_grow: FloatOptional,
    flex_shrink: FloatOptional,
    flex_basis: CompactValue,
    margin: Edges,
    position: Edges,
    padding: Edges,
    border: Edges,
    gap: Gutters,
    dimensions: Dimensions,
    min_dimensions: Dimensions,
    max_dimensions: Dimensions,
    aspect_ratio: FloatOptional,
}

impl Style {
    /// Creates a style holding the flexbox-specification initial values.
    #[must_use]
    pub fn new() -> Self {
        let mut style = Self {
            flags: 0,
            flex: FloatOptional::UNDEFINED,
            flex_grow: FloatOptional::UNDEFINED,
            flex_shrink: FloatOptional::UNDEFINED,
            flex_basis: CompactValue::AUTO,
            margin: Edges::filled(CompactValue::UNDEFINED),
            position: Edges::filled(CompactValue::UNDEFINED),
            padding: Edges::filled(CompactValue::UNDEFINED),
            border: Edges::filled(CompactValue::UNDEFINED),
            gap: Gutters::filled(CompactValue::UNDEFINED),
            dimensions: Dimensions::filled(CompactValue::AUTO),
            min_dimensions: Dimensions::filled(CompactValue::UNDEFINED),
            max_dimensions: Dimensions::filled(CompactValue::UNDEFINED),
            aspect_ratio: FloatOptional::UNDEFINED,
        };
        style.set_align_content(Align::FlexStart);
        style.set_align_items(Align::Stretch);
        style
    }

    // =========================================================================
    // Packed categorical properties
    // =========================================================================

    /// Text direction used to resolve logical `Start`/`End` edges.
    #[must_use]
    pub fn direction(&self) -> Direction {
        decode(self.flags, DIRECTION_OFFSET)
    }

    /// Sets the text direction.
    pub fn set_direction(&mut self, direction: Direction) {
        encode(&mut self.flags, DIRECTION_OFFSET, direction);
    }

    /// Main-axis direction of this node as a flex container.
    #[must_use]
    pub fn flex_direction(&self) -> FlexDirection {
        decode(self.flags, FLEX_DIRECTION_OFFSET)
    }

    /// Sets the main-axis direction.
    pub fn set_flex_direction(&mut self, flex_direction: FlexDirection) {
        encode(&mut self.flags, FLEX_DIRECTION_OFFSET, flex_direction);
    }

    /// Main-axis distribution of this node's children.
    #[must_use]
    pub fn justify_content(&self) -> Justify {
        decode(self.flags, JUSTIFY_CONTENT_OFFSET)
    }

    /// Sets the main-axis distribution.
    pub fn set_justify_content(&mut self, justify_content: Justify) {
        encode(&mut self.flags, JUSTIFY_CONTENT_OFFSET, justify_content);
    }

    /// Cross-axis distribution of this node's wrapped lines.
    #[must_use]
    pub fn align_content(&self) -> Align {
        decode(self.flags, ALIGN_CONTENT_OFFSET)
    }

    /// Sets the cross-axis line distribution.
    pub fn set_align_content(&mut self, align_content: Align) {
        encode(&mut self.flags, ALIGN_CONTENT_OFFSET, align_content);
    }

    /// Default cross-axis alignment of this node's children.
    #[must_use]
    pub fn align_items(&self) -> Align {
        decode(self.flags, ALIGN_ITEMS_OFFSET)
    }

    /// Sets the default cross-axis child alignment.
    pub fn set_align_items(&mut self, align_items: Align) {
        encode(&mut self.flags, ALIGN_ITEMS_OFFSET, align_items);
    }

    /// This node's own cross-axis alignment override.
    #[must_use]
    pub fn align_self(&self) -> Align {
        decode(self.flags, ALIGN_SELF_OFFSET)
    }

    /// Sets the cross-axis alignment override.
    pub fn set_align_self(&mut self, align_self: Align) {
        encode(&mut self.flags, ALIGN_SELF_OFFSET, align_self);
    }

    /// How this node is positioned relative to the normal flow.
    #[must_use]
    pub fn position_type(&self) -> PositionType {
        decode(self.flags, POSITION_TYPE_OFFSET)
    }

    /// Sets the positioning mode.
    pub fn set_position_type(&mut self, position_type: PositionType) {
        encode(&mut self.flags, POSITION_TYPE_OFFSET, position_type);
    }

    /// Whether this node's children wrap onto multiple lines.
    #[must_use]
    pub fn flex_wrap(&self) -> Wrap {
        decode(self.flags, FLEX_WRAP_OFFSET)
    }

    /// Sets the wrapping mode.
    pub fn set_flex_wrap(&mut self, flex_wrap: Wrap) {
        encode(&mut self.flags, FLEX_WRAP_OFFSET, flex_wrap);
    }

    /// How content exceeding this node's bounds is treated.
    #[must_use]
    pub fn overflow(&self) -> Overflow {
        decode(self.flags, OVERFLOW_OFFSET)
    }

    /// Sets the overflow mode.
    pub fn set_overflow(&mut self, overflow: Overflow) {
        encode(&mut self.flags, OVERFLOW_OFFSET, overflow);
    }

    /// Whether this node participates in layout.
    #[must_use]
    pub fn display(&self) -> Display {
        decode(self.flags, DISPLAY_OFFSET)
    }

    /// Sets the display mode.
    pub fn set_display(&mut self, display: Display) {
        encode(&mut self.flags, DISPLAY_OFFSET, display);
    }

    // =========================================================================
    // Optional scalars
    // =========================================================================

    /// Shorthand flex factor.
    #[must_use]
    pub fn flex(&self) -> FloatOptional {
        self.flex
    }

    /// Sets the shorthand flex factor.
    pub fn set_flex(&mut self, flex: FloatOptional) {
        self.flex = flex;
    }

    /// Growth factor when the line has free space.
    #[must_use]
    pub fn flex_grow(&self) -> FloatOptional {
        self.flex_grow
    }

    /// Sets the growth factor.
    pub fn set_flex_grow(&mut self, flex_grow: FloatOptional) {
        self.flex_grow = flex_grow;
    }

    /// Shrink factor when the line overflows.
    #[must_use]
    pub fn flex_shrink(&self) -> FloatOptional {
        self.flex_shrink
    }

    /// Sets the shrink factor.
    pub fn set_flex_shrink(&mut self, flex_shrink: FloatOptional) {
        self.flex_shrink = flex_shrink;
    }

    /// Width/height ratio constraint.
    #[must_use]
    pub fn aspect_ratio(&self) -> FloatOptional {
        self.aspect_ratio
    }

    /// Sets the aspect-ratio constraint.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: FloatOptional) {
        self.aspect_ratio = aspect_ratio;
    }

    // =========================================================================
    // Lengths
    // =========================================================================

    /// Initial main-axis size before growing or shrinking.
    #[must_use]
    pub fn flex_basis(&self) -> CompactValue {
        self.flex_basis
    }

    /// Sets the flex basis.
    pub fn set_flex_basis(&mut self, flex_basis: CompactValue) {
        self.flex_basis = flex_basis;
    }

    /// Margin on the given edge.
    #[must_use]
    pub fn margin(&self, edge: Edge) -> CompactValue {
        self.margin.get(edge)
    }

    /// Sets the margin on the given edge.
    pub fn set_margin(&mut self, edge: Edge, value: CompactValue) {
        self.margin.set(edge, value);
    }

    /// All margin slots.
    #[must_use]
    pub fn margins(&self) -> &Edges {
        &self.margin
    }

    /// Position offset on the given edge.
    #[must_use]
    pub fn position(&self, edge: Edge) -> CompactValue {
        self.position.get(edge)
    }

    /// Sets the position offset on the given edge.
    pub fn set_position(&mut self, edge: Edge, value: CompactValue) {
        self.position.set(edge, value);
    }

    /// All position-offset slots.
    #[must_use]
    pub fn positions(&self) -> &Edges {
        &self.position
    }

    /// Padding on the given edge.
    #[must_use]
    pub fn padding(&self, edge: Edge) -> CompactValue {
        self.padding.get(edge)
    }

    /// Sets the padding on the given edge.
    pub fn set_padding(&mut self, edge: Edge, value: CompactValue) {
        self.padding.set(edge, value);
    }

    /// All padding slots.
    #[must_use]
    pub fn paddings(&self) -> &Edges {
        &self.padding
    }

    /// Border width on the given edge.
    #[must_use]
    pub fn border(&self, edge: Edge) -> CompactValue {
        self.border.get(edge)
    }

    /// Sets the border width on the given edge.
    pub fn set_border(&mut self, edge: Edge, value: CompactValue) {
        self.border.set(edge, value);
    }

    /// All border slots.
    #[must_use]
    pub fn borders(&self) -> &Edges {
        &self.border
    }

    /// Gap for the given gutter.
    #[must_use]
    pub fn gap(&self, gutter: Gutter) -> CompactValue {
        self.gap.get(gutter)
    }

    /// Sets the gap for the given gutter.
    pub fn set_gap(&mut self, gutter: Gutter, value: CompactValue) {
        self.gap.set(gutter, value);
    }

    /// All gutter slots.
    #[must_use]
    pub fn gaps(&self) -> &Gutters {
        &self.gap
    }

    /// Preferred size on the given axis.
    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> CompactValue {
        self.dimensions.get(dimension)
    }

    /// Sets the preferred size on the given axis.
    pub fn set_dimension(&mut self, dimension: Dimension, value: CompactValue) {
        self.dimensions.set(dimension, value);
    }

    /// Both preferred-size slots.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Minimum size on the given axis.
    #[must_use]
    pub fn min_dimension(&self, dimension: Dimension) -> CompactValue {
        self.min_dimensions.get(dimension)
    }

    /// Sets the minimum size on the given axis.
    pub fn set_min_dimension(&mut self, dimension: Dimension, value: CompactValue) {
        self.min_dimensions.set(dimension, value);
    }

    /// Both minimum-size slots.
    #[must_use]
    pub fn min_dimensions(&self) -> &Dimensions {
        &self.min_dimensions
    }

    /// Maximum size on the given axis.
    #[must_use]
    pub fn max_dimension(&self, dimension: Dimension) -> CompactValue {
        self.max_dimensions.get(dimension)
    }

    /// Sets the maximum size on the given axis.
    pub fn set_max_dimension(&mut self, dimension: Dimension, value: CompactValue) {
        self.max_dimensions.set(dimension, value);
    }

    /// Both maximum-size slots.
    #[must_use]
    pub fn max_dimensions(&self) -> &Dimensions {
        &self.max_dimensions
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Unit;

    const EDGES: [Edge; 9] = [
        Edge::Left,
        Edge::Top,
        Edge::Right,
        Edge::Bottom,
        Edge::Start,
        Edge::End,
        Edge::Horizontal,
        Edge::Vertical,
        Edge::All,
    ];

    #[test]
    fn equality_is_reflexive_after_default_construction() {
        let style = Style::new();
        assert_eq!(style, style);
        assert_eq!(Style::new(), Style::default());
    }

    #[test]
    fn defaults_match_the_flexbox_specification() {
        let style = Style::new();

        // The two non-zero packed defaults.
        assert_eq!(style.align_content(), Align::FlexStart);
        assert_eq!(style.align_items(), Align::Stretch);

        // Every other packed property sits at its ordinal-0 variant.
        assert_eq!(style.direction(), Direction::Inherit);
        assert_eq!(style.flex_direction(), FlexDirection::Column);
        assert_eq!(style.justify_content(), Justify::FlexStart);
        assert_eq!(style.align_self(), Align::Auto);
        assert_eq!(style.position_type(), PositionType::Static);
        assert_eq!(style.flex_wrap(), Wrap::NoWrap);
        assert_eq!(style.overflow(), Overflow::Visible);
        assert_eq!(style.display(), Display::Flex);

        // Lengths: flex basis and dimensions are auto, everything else unset.
        assert!(style.flex_basis().is_auto());
        assert_eq!(style.dimension(Dimension::Width).unit(), Unit::Auto);
        assert_eq!(style.dimension(Dimension::Height).unit(), Unit::Auto);
        for dimension in [Dimension::Width, Dimension::Height] {
            assert!(style.min_dimension(dimension).is_undefined());
            assert!(style.max_dimension(dimension).is_undefined());
        }
        for edge in EDGES {
            assert!(style.margin(edge).is_undefined());
            assert!(style.position(edge).is_undefined());
            assert!(style.padding(edge).is_undefined());
            assert!(style.border(edge).is_undefined());
        }
        for gutter in [Gutter::Column, Gutter::Row, Gutter::All] {
            assert!(style.gap(gutter).is_undefined());
        }

        // Optional scalars start absent.
        assert!(style.flex().is_undefined());
        assert!(style.flex_grow().is_undefined());
        assert!(style.flex_shrink().is_undefined());
        assert!(style.aspect_ratio().is_undefined());
    }

    // Sets a packed field to every ordinal, reads it back, then restores the
    // default; restored equality proves no neighboring field moved.
    #[test]
    fn packed_fields_round_trip_and_stay_isolated() {
        let defaults = Style::new();

        for value in [Direction::Inherit, Direction::Ltr, Direction::Rtl] {
            let mut style = Style::new();
            style.set_direction(value);
            assert_eq!(style.direction(), value);
            style.set_direction(defaults.direction());
            assert_eq!(style, defaults);
        }
        for value in [
            FlexDirection::Column,
            FlexDirection::ColumnReverse,
            FlexDirection::Row,
            FlexDirection::RowReverse,
        ] {
            let mut style = Style::new();
            style.set_flex_direction(value);
            assert_eq!(style.flex_direction(), value);
            style.set_flex_direction(defaults.flex_direction());
            assert_eq!(style, defaults);
        }
        for value in [
            Justify::FlexStart,
            Justify::Center,
            Justify::FlexEnd,
            Justify::SpaceBetween,
            Justify::SpaceAround,
            Justify::SpaceEvenly,
        ] {
            let mut style = Style::new();
            style.set_justify_content(value);
            assert_eq!(style.justify_content(), value);
            style.set_justify_content(defaults.justify_content());
            assert_eq!(style, defaults);
        }
        let aligns = [
            Align::Auto,
            Align::FlexStart,
            Align::Center,
            Align::FlexEnd,
            Align::Stretch,
            Align::Baseline,
            Align::SpaceBetween,
            Align::SpaceAround,
        ];
        for value in aligns {
            let mut style = Style::new();
            style.set_align_content(value);
            assert_eq!(style.align_content(), value);
            style.set_align_content(defaults.align_content());
            assert_eq!(style, defaults);
        }
        for value in aligns {
            let mut style = Style::new();
            style.set_align_items(value);
            assert_eq!(style.align_items(), value);
            style.set_align_items(defaults.align_items());
            assert_eq!(style, defaults);
        }
        for value in aligns {
            let mut style = Style::new();
            style.set_align_self(value);
            assert_eq!(style.align_self(), value);
            style.set_align_self(defaults.align_self());
            assert_eq!(style, defaults);
        }
        for value in [
            PositionType::Static,
            PositionType::Relative,
            PositionType::Absolute,
        ] {
            let mut style = Style::new();
            style.set_position_type(value);
            assert_eq!(style.position_type(), value);
            style.set_position_type(defaults.position_type());
            assert_eq!(style, defaults);
        }
        for value in [Wrap::NoWrap, Wrap::Wrap, Wrap::WrapReverse] {
            let mut style = Style::new();
            style.set_flex_wrap(value);
            assert_eq!(style.flex_wrap(), value);
            style.set_flex_wrap(defaults.flex_wrap());
            assert_eq!(style, defaults);
        }
        for value in [Overflow::Visible, Overflow::Hidden, Overflow::Scroll] {
            let mut style = Style::new();
            style.set_overflow(value);
            assert_eq!(style.overflow(), value);
            style.set_overflow(defaults.overflow());
            assert_eq!(style, defaults);
        }
        for value in [Display::Flex, Display::None] {
            let mut style = Style::new();
            style.set_display(value);
            assert_eq!(style.display(), value);
            style.set_display(defaults.display());
            assert_eq!(style, defaults);
        }
    }

    #[test]
    fn packed_write_leaves_named_neighbors_in_place() {
        let mut style = Style::new();
        style.set_justify_content(Justify::SpaceEvenly);
        style.set_align_self(Align::Baseline);
        style.set_overflow(Overflow::Scroll);

        // align_content and align_items sit between those fields in the word.
        assert_eq!(style.align_content(), Align::FlexStart);
        assert_eq!(style.align_items(), Align::Stretch);
        assert_eq!(style.justify_content(), Justify::SpaceEvenly);
        assert_eq!(style.align_self(), Align::Baseline);
        assert_eq!(style.overflow(), Overflow::Scroll);
    }

    #[test]
    fn indexed_writes_are_isolated_per_index() {
        let mut style = Style::new();
        style.set_margin(Edge::Left, CompactValue::of_points(1.0));
        style.set_padding(Edge::Left, CompactValue::of_points(2.0));

        for edge in EDGES {
            if edge == Edge::Left {
                assert_eq!(style.margin(edge), CompactValue::of_points(1.0));
                assert_eq!(style.padding(edge), CompactValue::of_points(2.0));
            } else {
                assert!(style.margin(edge).is_undefined());
                assert!(style.padding(edge).is_undefined());
            }
        }

        // Groups are independent of each other too.
        assert!(style.border(Edge::Left).is_undefined());
        assert!(style.position(Edge::Left).is_undefined());
    }

    #[test]
    fn same_writes_in_any_order_build_equal_styles() {
        let mut a = Style::new();
        a.set_flex_grow(FloatOptional::new(1.0));
        a.set_margin(Edge::Start, CompactValue::of_points(4.0));
        a.set_flex_direction(FlexDirection::Row);
        a.set_gap(Gutter::Row, CompactValue::of_points(2.0));

        let mut b = Style::new();
        b.set_gap(Gutter::Row, CompactValue::of_points(2.0));
        b.set_flex_direction(FlexDirection::Row);
        b.set_margin(Edge::Start, CompactValue::of_points(4.0));
        b.set_flex_grow(FloatOptional::new(1.0));

        assert_eq!(a, b);

        // One differing property breaks equality.
        b.set_gap(Gutter::Row, CompactValue::of_points(3.0));
        assert_ne!(a, b);
    }

    #[test]
    fn single_property_differences_are_detected_everywhere() {
        let base = Style::new();

        let mut changed = base;
        changed.set_display(Display::None);
        assert_ne!(base, changed);

        let mut changed = base;
        changed.set_aspect_ratio(FloatOptional::new(1.5));
        assert_ne!(base, changed);

        let mut changed = base;
        changed.set_flex_basis(CompactValue::of_percent(50.0));
        assert_ne!(base, changed);

        let mut changed = base;
        changed.set_max_dimension(Dimension::Height, CompactValue::of_points(120.0));
        assert_ne!(base, changed);
    }

    #[test]
    fn grow_and_margin_scenario() {
        let mut style = Style::new();
        style.set_flex_grow(FloatOptional::new(1.0));
        style.set_margin(Edge::Left, CompactValue::of_points(10.0));

        assert_eq!(style.flex_grow().get(), Some(1.0));
        assert_eq!(style.margin(Edge::Left).unit(), Unit::Point);
        assert_eq!(style.margin(Edge::Left).value(), 10.0);
        assert_eq!(style.margin(Edge::Top).unit(), Unit::Undefined);
        assert_ne!(style, Style::new());
    }
}
