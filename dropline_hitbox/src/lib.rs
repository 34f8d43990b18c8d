// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Hitbox: pure instruction resolvers for drag-and-drop targets.
//!
//! Given a pointer position and a drop target's bounding box, the resolvers in
//! this crate decide *what drag operation the user is currently signaling* —
//! reorder before/after a list item, combine into it, reorder around a tree
//! item, make the dragged item its child, or reparent to a shallower tree
//! level — and whether that operation is currently permitted. The result is an
//! opaque **instruction** value that host frameworks interpret to render a
//! drop indicator or commit a mutation on drop.
//!
//! The crate is deliberately decoupled from any event system or widget tree.
//! Hosts own pointer capture, auto-scroll, and rendering; they call a resolver
//! on each drag-over tick with:
//!
//! - a [`kurbo::Point`] for the pointer, and
//! - a [`kurbo::Rect`] for the target's bounds, queried fresh per call
//!   (elements move and scroll between drags, so bounds must never be cached
//!   across calls).
//!
//! Both must be in the same coordinate space.
//!
//! # Resolvers
//!
//! - [`closest_edge`] — which of a target's allowed [`Edge`]s is nearest to
//!   the pointer, with a deterministic first-listed tie-break.
//! - [`list_instruction`] — partitions a list row into reorder/combine zones
//!   along an [`Axis`] and applies per-operation [`Availability`].
//! - [`tree_instruction`] — the list logic extended with tree semantics: an
//!   [`ItemMode`] shapes the hit zones, and dragging left of the visible
//!   indentation signals reparenting to an ancestor level.
//!
//! # Referential stability
//!
//! Resolvers rebuild a structurally identical instruction on every
//! pointer-move tick, which defeats hosts that diff by reference. The
//! [`ListItemHitbox`] and [`TreeItemHitbox`] wrappers route results through a
//! single-slot [`dropline_memo::StableCache`], so a value-equal instruction
//! comes back as the *same* `Rc` allocation. Create one wrapper per drop
//! target; the cache reflects that target's own history.
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use dropline_hitbox::{Availability, Axis, ListItemHitbox, ListOperation, ListOperations};
//! use kurbo::{Point, Rect};
//!
//! let mut hitbox = ListItemHitbox::new();
//! let rect = Rect::new(0.0, 0.0, 200.0, 40.0);
//! let operations = ListOperations {
//!     reorder_before: Availability::Available,
//!     reorder_after: Availability::Available,
//!     ..ListOperations::default()
//! };
//!
//! let first = hitbox
//!     .resolve(rect, Point::new(100.0, 5.0), Axis::Vertical, operations)
//!     .expect("both reorder operations are available");
//! assert_eq!(first.operation, ListOperation::ReorderBefore);
//!
//! // A different pointer position in the same zone yields the same allocation.
//! let second = hitbox
//!     .resolve(rect, Point::new(30.0, 12.0), Axis::Vertical, operations)
//!     .expect("both reorder operations are available");
//! assert!(Rc::ptr_eq(&first, &second));
//! ```
//!
//! # Handing instructions to hosts
//!
//! [`DropPayload`] pairs caller data with the resolved instruction behind a
//! private field, the typed replacement for attaching values to a data bag
//! under a private key. See the module docs on [`DropPayload`] for the
//! attach/extract flow.
//!
//! # Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attach;
mod edge;
mod list_item;
mod tree_item;

pub use attach::DropPayload;
pub use edge::{Edge, closest_edge};
pub use list_item::{
    Availability, Axis, ListInstruction, ListItemHitbox, ListOperation, ListOperations,
    list_instruction,
};
pub use tree_item::{
    DesiredInstruction, ItemMode, TreeInstruction, TreeItemHitbox, TreeOperation,
    TreeOperationKind, tree_instruction,
};
