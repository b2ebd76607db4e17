// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown that flips above its button near the bottom of the viewport.
//!
//! The layer measures anchor and content through a `SimpleTree`, recomputes
//! after a scroll notification, and writes its sizing variables to a style
//! sink.
//!
//! Run:
//! - `cargo run -p tether_demos --example floating_flip`
//! - `RUST_LOG=debug cargo run -p tether_demos --example floating_flip` to see
//!   the placement decisions.

use kurbo::{Rect, Size};
use tether_event::SimpleTree;
use tether_floating::{
    Align, Anchor, FloatingLayer, FloatingOptions, StyleSink, StyleValue, VAR_AVAILABLE_HEIGHT,
};
use tether_geometry::Side;

const BUTTON: u32 = 1;
const MENU: u32 = 2;

#[derive(Default)]
struct PrintSink(Vec<(&'static str, String)>);

impl StyleSink for PrintSink {
    fn set_property(&mut self, name: &'static str, value: StyleValue) {
        self.0.push((name, value.to_string()));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut host = SimpleTree::new();
    host.insert(BUTTON, None, Rect::new(300.0, 200.0, 420.0, 232.0));
    host.insert(MENU, Some(BUTTON), Rect::from_origin_size((0.0, 0.0), (200.0, 160.0)));

    let mut layer = FloatingLayer::new(FloatingOptions {
        side: Side::Bottom,
        align: Align::Start,
        side_offset: 4.0,
        arrow_padding: 8.0,
        ..FloatingOptions::default()
    })
    .expect("options are valid");
    layer.set_anchor(Some(Anchor::Node(BUTTON)));
    layer
        .set_arrow(Some(Size::new(12.0, 6.0)))
        .expect("arrow size is valid");
    layer.mount_content(MENU);

    let placed = *layer.update(&host, viewport).expect("anchor and content are mounted");
    println!("== Plenty of room ==");
    println!("  placement {} at {:?}", placed.placement, placed.position);
    assert_eq!(placed.placement.side, Side::Bottom);

    // Scroll the page so the button ends up near the bottom edge.
    host.set_bounds(&BUTTON, Rect::new(300.0, 520.0, 420.0, 552.0));
    layer.notify_scroll();
    let placed = *layer.update(&host, viewport).expect("still mounted");
    println!("== Near the bottom edge ==");
    println!("  placement {} at {:?}", placed.placement, placed.position);
    assert_eq!(placed.placement.side, Side::Top);

    let state = layer.placement_state();
    println!("  state: {:?}", state);

    let mut sink = PrintSink::default();
    layer.apply_vars(&mut sink);
    println!("== Style variables ==");
    for (name, value) in &sink.0 {
        println!("  {name}: {value}");
    }
    assert!(sink.0.iter().any(|(n, _)| *n == VAR_AVAILABLE_HEIGHT));

    layer.unmount_content();
    assert!(!layer.is_subscribed());
}
