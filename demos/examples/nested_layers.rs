// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A menu with an open submenu, driven by pointer-downs and Escape.
//!
//! The submenu defers outside clicks to its parent, so one click outside
//! closes the whole menu once, while a click inside the submenu closes
//! nothing.
//!
//! Run:
//! - `cargo run -p tether_demos --example nested_layers`

use kurbo::{Point, Rect};
use tether_dismiss::{Behavior, DismissEvent, LayerOptions, LayerRegistry};
use tether_event::{Millis, PointerEvent, SimpleTree};

const PAGE: u32 = 0;
const MENU: u32 = 1;
const SUBMENU: u32 = 2;
const SUBMENU_ITEM: u32 = 3;

fn press(
    layers: &mut LayerRegistry<u32>,
    tree: &SimpleTree<u32>,
    target: u32,
    at: Point,
    now: Millis,
) -> Vec<DismissEvent<u32>> {
    let down = PointerEvent::primary(target, at);
    layers.pointer_down_capture(&down, now);
    layers.pointer_down_bubble(&down, now);
    let deadline = layers.next_deadline().unwrap_or(now);
    layers.poll(deadline, tree)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = SimpleTree::new();
    tree.insert(PAGE, None, Rect::new(0.0, 0.0, 800.0, 600.0));
    tree.insert(MENU, Some(PAGE), Rect::new(20.0, 20.0, 180.0, 220.0));
    // The submenu is portaled to the page, next to the menu.
    tree.insert(SUBMENU, Some(PAGE), Rect::new(180.0, 40.0, 340.0, 140.0));
    tree.insert(SUBMENU_ITEM, Some(SUBMENU), Rect::new(180.0, 40.0, 340.0, 70.0));

    let mut layers = LayerRegistry::new();
    let menu = layers.register(Some(MENU), LayerOptions::default());
    let submenu = layers.register(
        Some(SUBMENU),
        LayerOptions::uniform(Behavior::DeferOtherwiseClose),
    );
    println!("responsible layer: {:?}", layers.responsible_layer());

    let inside = press(&mut layers, &tree, SUBMENU_ITEM, Point::new(200.0, 50.0), 0);
    println!("== Click inside the submenu ==\n  {:?}", inside);
    assert!(inside.is_empty());

    let outside = press(&mut layers, &tree, PAGE, Point::new(600.0, 500.0), 100);
    println!("== Click on the page ==\n  {:?}", outside);
    assert_eq!(outside.len(), 1);
    assert_eq!(outside[0].layer(), menu);

    let escape = layers.escape_keydown();
    println!("== Escape ==\n  {:?}", escape);
    assert_eq!(escape, Some(DismissEvent::EscapeKeydown { layer: menu }));

    // The owner closes: both layers unmount.
    layers.deregister(submenu);
    layers.deregister(menu);
    assert!(layers.is_empty());
}
