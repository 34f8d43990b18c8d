// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep a pointer down a list row and print the resolved instruction.
//!
//! This shows the zone boundaries of the list resolver and how the
//! single-slot cache keeps the returned allocation stable while the pointer
//! stays inside one zone.
//!
//! Run:
//! - `cargo run -p dropline_demos --example list_reorder`

use std::rc::Rc;

use dropline_hitbox::{Availability, Axis, ListInstruction, ListItemHitbox, ListOperations};
use kurbo::{Point, Rect};

fn main() {
    // A 100px tall row, like a card in a board column.
    let rect = Rect::new(0.0, 0.0, 240.0, 100.0);
    let operations = ListOperations {
        reorder_before: Availability::Available,
        reorder_after: Availability::Available,
        combine: Availability::Available,
    };

    let mut hitbox = ListItemHitbox::new();
    let mut previous: Option<Rc<ListInstruction>> = None;

    println!("pointer sweep over {rect:?} (all operations available):");
    for y in (0..=100).step_by(5) {
        let point = Point::new(120.0, f64::from(y));
        let instruction = hitbox
            .resolve(rect, point, Axis::Vertical, operations)
            .expect("all operations are available");

        let reused = previous
            .as_ref()
            .is_some_and(|prev| Rc::ptr_eq(prev, &instruction));
        println!(
            "  y = {y:3} -> {:?}{}",
            instruction.operation,
            if reused { "  (same allocation)" } else { "" }
        );
        previous = Some(instruction);
    }
}
