// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_flex_style`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use understory_flex_style::{
    Align, CompactValue, Dimension, Edge, FlexDirection, FloatOptional, Gutter, Style,
};

/// A style with a representative spread of non-default properties.
fn populated_style() -> Style {
    let mut style = Style::new();
    style.set_flex_direction(FlexDirection::Row);
    style.set_align_items(Align::Center);
    style.set_flex_grow(FloatOptional::new(1.0));
    style.set_flex_basis(CompactValue::of_percent(50.0));
    style.set_margin(Edge::Horizontal, CompactValue::of_points(8.0));
    style.set_padding(Edge::All, CompactValue::of_points(4.0));
    style.set_gap(Gutter::All, CompactValue::of_points(2.0));
    style.set_dimension(Dimension::Width, CompactValue::of_percent(100.0));
    style.set_max_dimension(Dimension::Height, CompactValue::of_points(600.0));
    style
}

fn bench_flex_style(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Style={} CompactValue={} FloatOptional={}",
            core::mem::size_of::<Style>(),
            core::mem::size_of::<CompactValue>(),
            core::mem::size_of::<FloatOptional>(),
        );
    });

    c.bench_function("style_new", |b| b.iter(|| black_box(Style::new())));

    c.bench_function("style_write_burst", |b| {
        b.iter_batched(
            Style::new,
            |mut style| {
                style.set_flex_direction(black_box(FlexDirection::Row));
                style.set_flex_grow(black_box(FloatOptional::new(1.0)));
                style.set_margin(Edge::Left, black_box(CompactValue::of_points(10.0)));
                style.set_dimension(Dimension::Width, black_box(CompactValue::of_percent(50.0)));
                style
            },
            BatchSize::SmallInput,
        );
    });

    // Equality is the relayout-skip signal, so both outcomes matter: the
    // all-equal scan and the early-exit on a differing field.
    let a = populated_style();
    let b = populated_style();
    c.bench_function("style_eq_equal", |bench| {
        bench.iter(|| black_box(black_box(&a) == black_box(&b)));
    });

    let mut c2 = populated_style();
    c2.set_max_dimension(Dimension::Height, CompactValue::of_points(601.0));
    c.bench_function("style_eq_one_field_differs", |bench| {
        bench.iter(|| black_box(black_box(&a) == black_box(&c2)));
    });

    c.bench_function("style_copy", |bench| {
        bench.iter(|| black_box(a));
    });
}

criterion_group!(benches, bench_flex_style);
criterion_main!(benches);
