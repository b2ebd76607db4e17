// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tooltip below its trigger that survives the trip across the gap.
//!
//! Replays two pointer paths: one straight into the tooltip and one that
//! wanders off to the side.
//!
//! Run:
//! - `cargo run -p tether_demos --example tooltip_transit`

use kurbo::{Point, Rect};
use tether_event::SimpleTree;
use tether_transit::{TransitOptions, TransitTracker};

const PAGE: u32 = 0;
const TRIGGER: u32 = 1;
const TOOLTIP: u32 = 2;

fn replay(
    transit: &mut TransitTracker<u32>,
    host: &SimpleTree<u32>,
    name: &str,
    path: &[(f64, f64)],
) -> bool {
    println!("== {name} ==");
    let _ = transit.trigger_leave(Point::new(50.0, 40.0), Some(PAGE), 0, host);
    for &(x, y) in path {
        let p = Point::new(x, y);
        if let Some(exit) = transit.pointer_move(p, host) {
            println!("  {p:?}: close ({:?})", exit.reason);
            return true;
        }
        println!("  {p:?}: in transit = {}", transit.is_pointer_in_transit());
    }
    false
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut host = SimpleTree::new();
    host.insert(PAGE, None, Rect::new(0.0, 0.0, 800.0, 600.0));
    host.insert(TRIGGER, Some(PAGE), Rect::new(0.0, 0.0, 100.0, 40.0));
    host.insert(TOOLTIP, Some(PAGE), Rect::new(0.0, 60.0, 100.0, 160.0));

    let mut transit = TransitTracker::new(TransitOptions::default()).expect("default options are valid");
    transit.set_trigger(Some(TRIGGER));
    transit.set_content(Some(TOOLTIP));

    let direct = [(50.0, 45.0), (50.0, 52.0), (50.0, 58.0), (50.0, 64.0)];
    assert!(!replay(&mut transit, &host, "Straight down", &direct));

    let veer = [(60.0, 45.0), (180.0, 48.0), (300.0, 50.0)];
    assert!(replay(&mut transit, &host, "Veering off", &veer));
}
