// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve tree-item instructions for a last-in-group row, including the
//! reparent zone left of its indentation and a blocked make-child.
//!
//! Run:
//! - `cargo run -p dropline_demos --example tree_drop`

use dropline_hitbox::{DropPayload, ItemMode, TreeItemHitbox, TreeOperationKind};
use kurbo::{Point, Rect};

/// Application data a host would flow from drag-enter to drop.
#[derive(Debug)]
struct RowData {
    label: &'static str,
}

fn main() {
    // The last row of a group nested two levels deep, indented 20px per level.
    let rect = Rect::new(0.0, 0.0, 300.0, 32.0);
    let current_level = 2;
    let indent_per_level = 20.0;

    let mut hitbox = TreeItemHitbox::new();

    println!("last-in-group row at level {current_level}, {indent_per_level}px per level:");
    let probes = [
        ("over the visible row, top quarter", Point::new(150.0, 4.0)),
        ("over the visible row, middle", Point::new(150.0, 16.0)),
        ("over the visible row, bottom quarter", Point::new(150.0, 30.0)),
        ("left of the inset, above center", Point::new(25.0, 8.0)),
        ("left of the inset, below center", Point::new(25.0, 24.0)),
        ("one more indent step left", Point::new(5.0, 24.0)),
    ];
    for (label, point) in probes {
        let instruction = hitbox.resolve(
            rect,
            point,
            ItemMode::LastInGroup,
            current_level,
            indent_per_level,
            &[],
        );
        println!("  {label}: {:?}", instruction.desired().operation);
    }

    // The same geometry with make-child disallowed: the zone stays put, the
    // instruction comes back wrapped so a host can render a warning style.
    let blocked = hitbox.resolve(
        rect,
        Point::new(150.0, 16.0),
        ItemMode::LastInGroup,
        current_level,
        indent_per_level,
        &[TreeOperationKind::MakeChild],
    );
    println!("with make-child blocked: {blocked:?}");

    // Attach the instruction to application data, as a drop callback sees it.
    let payload = DropPayload::attach(RowData { label: "chapter-3" }, blocked);
    let extracted = payload.instruction().expect("attached above");
    println!(
        "drop on {:?}: desired {:?}, blocked: {}",
        payload.data().label,
        extracted.desired().operation,
        extracted.is_blocked(),
    );
}
