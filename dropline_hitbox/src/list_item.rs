// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List-item instruction resolution: reorder before/after and combine.

use alloc::rc::Rc;

use dropline_memo::StableCache;
use kurbo::{Point, Rect};

/// The main dimension a list lays its items out along.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Items flow left to right; hit zones split on the x coordinate.
    Horizontal,
    /// Items flow top to bottom; hit zones split on the y coordinate.
    Vertical,
}

/// Whether an operation can be offered for the current drag.
///
/// `Blocked` is distinct from `NotAvailable`: a blocked operation still owns
/// its hit zone (so hosts can render a "not allowed" affordance in the right
/// place), while a not-available operation is removed from consideration
/// entirely.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Availability {
    /// The operation can be offered and performed.
    Available,
    /// The operation is not requested; its hit zone does not exist.
    #[default]
    NotAvailable,
    /// The operation is geometrically reachable but currently disallowed.
    Blocked,
}

impl Availability {
    /// Returns `true` when the operation owns a hit zone (`Available` or
    /// `Blocked`).
    #[must_use]
    pub const fn is_possible(self) -> bool {
        !matches!(self, Self::NotAvailable)
    }
}

/// Per-operation availability for a list drop target.
///
/// Omitted operations default to [`Availability::NotAvailable`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ListOperations {
    /// Dropping would reorder the dragged item before this one.
    pub reorder_before: Availability,
    /// Dropping would reorder the dragged item after this one.
    pub reorder_after: Availability,
    /// Dropping would merge the dragged item into this one.
    pub combine: Availability,
}

impl ListOperations {
    /// Returns the availability declared for `operation`.
    #[must_use]
    pub const fn availability_of(self, operation: ListOperation) -> Availability {
        match operation {
            ListOperation::ReorderBefore => self.reorder_before,
            ListOperation::ReorderAfter => self.reorder_after,
            ListOperation::Combine => self.combine,
        }
    }
}

/// A drag operation on a list item.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ListOperation {
    /// Insert the dragged item before the target.
    ReorderBefore,
    /// Insert the dragged item after the target.
    ReorderAfter,
    /// Merge the dragged item into the target.
    Combine,
}

/// The resolved drag operation for a list item, plus its permission state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListInstruction {
    /// The operation the pointer position implies.
    pub operation: ListOperation,
    /// `true` when the operation's availability was [`Availability::Blocked`].
    ///
    /// Hosts should render the operation's affordance in a disabled style
    /// rather than suppressing it.
    pub blocked: bool,
    /// The axis the zones were split along, echoed from the input.
    pub axis: Axis,
}

/// Resolves the drag operation implied by `point` over a list item occupying
/// `rect`.
///
/// Zones are split along `axis`. With only the reorder operations possible the
/// box halves at its midpoint; with `combine` also possible the outer quarter
/// at each end keeps its reorder operation and the middle half combines. A
/// position exactly on a zone boundary resolves to the zone further along the
/// axis, so the midpoint of a plain reorder target already signals
/// [`ListOperation::ReorderAfter`].
///
/// A reorder zone whose operation was never requested downgrades to
/// [`ListOperation::Combine`] (when combine is possible) instead of vanishing.
///
/// Returns `None` when no operation is both requested and reachable; hosts
/// should treat that as "render nothing" rather than as an error. The
/// function is total over finite inputs — zero-size rectangles and points far
/// outside the box are fine.
#[must_use]
pub fn list_instruction(
    rect: Rect,
    point: Point,
    axis: Axis,
    operations: ListOperations,
) -> Option<ListInstruction> {
    let operation = resolve_zone(rect, point, axis, operations)?;
    Some(ListInstruction {
        operation,
        blocked: operations.availability_of(operation) == Availability::Blocked,
        axis,
    })
}

fn resolve_zone(
    rect: Rect,
    point: Point,
    axis: Axis,
    operations: ListOperations,
) -> Option<ListOperation> {
    let (start, size, position) = match axis {
        Axis::Horizontal => (rect.x0, rect.width(), point.x),
        Axis::Vertical => (rect.y0, rect.height(), point.y),
    };
    let before = operations.reorder_before.is_possible();
    let after = operations.reorder_after.is_possible();

    if !operations.combine.is_possible() {
        return match (before, after) {
            (true, true) => {
                // Midpoint ties go to "after".
                if position < start + size / 2.0 {
                    Some(ListOperation::ReorderBefore)
                } else {
                    Some(ListOperation::ReorderAfter)
                }
            }
            // A lone reorder operation owns the whole box.
            (true, false) => Some(ListOperation::ReorderBefore),
            (false, true) => Some(ListOperation::ReorderAfter),
            (false, false) => None,
        };
    }

    // Combine owns the middle half; each reorder zone is a quarter deep.
    let quarter = size / 4.0;
    let zone = if position < start + quarter {
        ListOperation::ReorderBefore
    } else if position >= start + size - quarter {
        ListOperation::ReorderAfter
    } else {
        ListOperation::Combine
    };

    // A reorder zone nobody asked for collapses into combine.
    Some(match zone {
        ListOperation::ReorderBefore if !before => ListOperation::Combine,
        ListOperation::ReorderAfter if !after => ListOperation::Combine,
        zone => zone,
    })
}

/// Per-drop-target list resolver with referentially stable results.
///
/// Wraps [`list_instruction`] with a single-slot [`StableCache`], so resolving
/// the same logical instruction on consecutive pointer-move ticks returns the
/// same `Rc` allocation. Create one per drop target.
#[derive(Debug, Default)]
pub struct ListItemHitbox {
    cache: StableCache<ListInstruction>,
}

impl ListItemHitbox {
    /// Creates a resolver with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves and memoizes the instruction for the current pointer position.
    ///
    /// `rect` must be queried fresh for this call; see the crate docs.
    pub fn resolve(
        &mut self,
        rect: Rect,
        point: Point,
        axis: Axis,
        operations: ListOperations,
    ) -> Option<Rc<ListInstruction>> {
        list_instruction(rect, point, axis, operations)
            .map(|instruction| self.cache.memoize(instruction))
    }

    /// Forgets the remembered instruction, e.g. when a drag session ends.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}
