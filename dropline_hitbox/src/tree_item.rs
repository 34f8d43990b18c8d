// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree-item instruction resolution: reorder, make-child, and reparent.
//!
//! Tree rows extend the list-item zones with indentation semantics. A row's
//! [`ItemMode`] describes how much of it is "really there" for hit testing:
//! an expanded row's children already follow it visually, so "reorder below"
//! would be ambiguous with "first child"; the last row of a group leaves
//! implicit empty space to its left where closed ancestor levels would be,
//! and pointing into that space signals reparenting to one of those levels.

use alloc::rc::Rc;

use dropline_memo::StableCache;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// How a tree row presents itself for hit testing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ItemMode {
    /// A collapsed or childless row; all three vertical zones apply.
    Standard,
    /// A row whose children are visible below it; the bottom zone folds into
    /// [`TreeOperation::MakeChild`].
    Expanded,
    /// The last row of its group; the space left of its indentation offers
    /// reparenting to ancestor levels.
    LastInGroup,
}

/// A drag operation on a tree item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeOperation {
    /// Insert the dragged item above the target, as a sibling.
    ReorderAbove,
    /// Insert the dragged item below the target, as a sibling.
    ReorderBelow,
    /// Make the dragged item a child of the target.
    MakeChild,
    /// Move the dragged item to an ancestor level of the target.
    Reparent {
        /// The tree level the drop would move the item to, clamped into
        /// `0..=current_level.saturating_sub(1)` (so a level-zero row, whose
        /// reparent zone is only reachable left of its box, still yields 0).
        desired_level: usize,
    },
}

impl TreeOperation {
    /// The payload-free kind of this operation, used in block lists.
    #[must_use]
    pub const fn kind(self) -> TreeOperationKind {
        match self {
            Self::ReorderAbove => TreeOperationKind::ReorderAbove,
            Self::ReorderBelow => TreeOperationKind::ReorderBelow,
            Self::MakeChild => TreeOperationKind::MakeChild,
            Self::Reparent { .. } => TreeOperationKind::Reparent,
        }
    }
}

/// A [`TreeOperation`] without its payload, for declaring blocked kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeOperationKind {
    /// Blocks [`TreeOperation::ReorderAbove`].
    ReorderAbove,
    /// Blocks [`TreeOperation::ReorderBelow`].
    ReorderBelow,
    /// Blocks [`TreeOperation::MakeChild`].
    MakeChild,
    /// Blocks [`TreeOperation::Reparent`] at every level.
    Reparent,
}

/// The operation a pointer position implies for a tree item, together with
/// the indent context hosts need to render an indicator for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesiredInstruction {
    /// The implied operation.
    pub operation: TreeOperation,
    /// The target row's tree level, echoed from the input.
    pub current_level: usize,
    /// Horizontal pixels per tree level, echoed from the input.
    pub indent_per_level: f64,
}

/// The resolved drag instruction for a tree item.
///
/// Blocking never changes which zone was hit; a blocked instruction carries
/// the same [`DesiredInstruction`] the unblocked resolution would have
/// produced, so hosts can render a "not allowed" affordance at the correct
/// location. The payload type makes a doubly-wrapped blocked instruction
/// unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TreeInstruction {
    /// The operation is currently permitted.
    Allowed(DesiredInstruction),
    /// The operation is what the user is signaling, but it is disallowed.
    Blocked(DesiredInstruction),
}

impl TreeInstruction {
    /// The desired instruction, regardless of whether it is blocked.
    #[must_use]
    pub const fn desired(&self) -> &DesiredInstruction {
        match self {
            Self::Allowed(desired) | Self::Blocked(desired) => desired,
        }
    }

    /// Returns `true` for [`TreeInstruction::Blocked`].
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Resolves the drag instruction implied by `point` over a tree row occupying
/// `rect`.
///
/// For [`ItemMode::Standard`] the row splits into vertical quarters: the top
/// quarter (boundary inclusive) reorders above, the bottom quarter (boundary
/// inclusive) reorders below, and the middle half makes the dragged item a
/// child. [`ItemMode::Expanded`] keeps the top-quarter rule and folds the rest
/// into make-child. [`ItemMode::LastInGroup`] additionally treats the area
/// left of the row's visible indentation (`indent_per_level * current_level`)
/// as a reparent zone: above the vertical center it still reorders above,
/// at or below it the horizontal offset picks the ancestor level, clamped to
/// `0..=current_level - 1` to absorb sub-pixel and out-of-bounds pointers.
///
/// Operations whose [`TreeOperation::kind`] appears in `block` come back
/// wrapped in [`TreeInstruction::Blocked`]; the zone geometry is unaffected.
///
/// Unlike the list resolver this function is total: every pointer position
/// maps to a concrete instruction, and no input panics.
///
/// ```rust
/// use dropline_hitbox::{ItemMode, TreeOperation, tree_instruction};
/// use kurbo::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 300.0, 32.0);
/// // Pointer in the implicit space left of a doubly indented last row,
/// // below its vertical center: reparent one level up.
/// let instruction = tree_instruction(
///     rect,
///     Point::new(25.0, 24.0),
///     ItemMode::LastInGroup,
///     2,
///     20.0,
///     &[],
/// );
/// assert_eq!(
///     instruction.desired().operation,
///     TreeOperation::Reparent { desired_level: 1 },
/// );
/// ```
#[must_use]
pub fn tree_instruction(
    rect: Rect,
    point: Point,
    mode: ItemMode,
    current_level: usize,
    indent_per_level: f64,
    block: &[TreeOperationKind],
) -> TreeInstruction {
    let operation = resolve_operation(rect, point, mode, current_level, indent_per_level);
    let desired = DesiredInstruction {
        operation,
        current_level,
        indent_per_level,
    };
    if block.contains(&operation.kind()) {
        TreeInstruction::Blocked(desired)
    } else {
        TreeInstruction::Allowed(desired)
    }
}

fn resolve_operation(
    rect: Rect,
    point: Point,
    mode: ItemMode,
    current_level: usize,
    indent_per_level: f64,
) -> TreeOperation {
    match mode {
        ItemMode::Standard => standard_operation(rect, point),
        ItemMode::Expanded => {
            if point.y <= rect.y0 + rect.height() / 4.0 {
                TreeOperation::ReorderAbove
            } else {
                // Children already follow the row visually, so everything
                // below the top quarter reads as "first child".
                TreeOperation::MakeChild
            }
        }
        ItemMode::LastInGroup => {
            let visible_inset = indent_per_level * current_level as f64;
            if point.x >= rect.x0 + visible_inset {
                return standard_operation(rect, point);
            }
            // Left of the rendered row, where closed ancestor levels leave
            // implicit empty space.
            if point.y < rect.y0 + rect.height() / 2.0 {
                TreeOperation::ReorderAbove
            } else {
                TreeOperation::Reparent {
                    desired_level: desired_level(rect, point, current_level, indent_per_level),
                }
            }
        }
    }
}

fn standard_operation(rect: Rect, point: Point) -> TreeOperation {
    let quarter = rect.height() / 4.0;
    if point.y <= rect.y0 + quarter {
        TreeOperation::ReorderAbove
    } else if point.y >= rect.y1 - quarter {
        TreeOperation::ReorderBelow
    } else {
        TreeOperation::MakeChild
    }
}

/// Maps the pointer's horizontal offset to an ancestor level.
///
/// The floor can dip below zero when rounding between element bounds and
/// integer pointer coordinates disagrees by a sub-pixel, so the result is
/// clamped into `0..=current_level - 1`. A zero indent divides to infinity
/// or NaN; both clamp to level zero rather than panicking.
fn desired_level(rect: Rect, point: Point, current_level: usize, indent_per_level: f64) -> usize {
    let raw = ((point.x - rect.x0) / indent_per_level).floor();
    let max_level = current_level.saturating_sub(1) as f64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped into 0..=current_level - 1 before the cast"
    )]
    let level = raw.max(0.0).min(max_level) as usize;
    level
}

/// Per-drop-target tree resolver with referentially stable results.
///
/// Wraps [`tree_instruction`] with a single-slot [`StableCache`]. Structural
/// equality recurses through [`TreeInstruction::Blocked`] into the desired
/// instruction, so re-resolving the same blocked zone also returns the same
/// `Rc` allocation. Create one per drop target.
#[derive(Debug, Default)]
pub struct TreeItemHitbox {
    cache: StableCache<TreeInstruction>,
}

impl TreeItemHitbox {
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
        mode: ItemMode,
        current_level: usize,
        indent_per_level: f64,
        block: &[TreeOperationKind],
    ) -> Rc<TreeInstruction> {
        self.cache.memoize(tree_instruction(
            rect,
            point,
            mode,
            current_level,
            indent_per_level,
            block,
        ))
    }

    /// Forgets the remembered instruction, e.g. when a drag session ends.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 32px tall row spanning x 0..300, like a typical tree widget row.
    const RECT: Rect = Rect::new(0.0, 0.0, 300.0, 32.0);
    const INDENT: f64 = 20.0;

    fn operation_at(point: Point, mode: ItemMode, current_level: usize) -> TreeOperation {
        tree_instruction(RECT, point, mode, current_level, INDENT, &[])
            .desired()
            .operation
    }

    #[test]
    fn standard_mode_splits_into_quarters() {
        // Quarter is 8px; boundaries are inclusive on both reorder zones.
        assert_eq!(
            operation_at(Point::new(150.0, 2.0), ItemMode::Standard, 0),
            TreeOperation::ReorderAbove
        );
        assert_eq!(
            operation_at(Point::new(150.0, 8.0), ItemMode::Standard, 0),
            TreeOperation::ReorderAbove
        );
        assert_eq!(
            operation_at(Point::new(150.0, 9.0), ItemMode::Standard, 0),
            TreeOperation::MakeChild
        );
        assert_eq!(
            operation_at(Point::new(150.0, 23.0), ItemMode::Standard, 0),
            TreeOperation::MakeChild
        );
        assert_eq!(
            operation_at(Point::new(150.0, 24.0), ItemMode::Standard, 0),
            TreeOperation::ReorderBelow
        );
        assert_eq!(
            operation_at(Point::new(150.0, 31.0), ItemMode::Standard, 0),
            TreeOperation::ReorderBelow
        );
    }

    #[test]
    fn expanded_mode_folds_everything_below_the_top_quarter_into_make_child() {
        assert_eq!(
            operation_at(Point::new(150.0, 8.0), ItemMode::Expanded, 0),
            TreeOperation::ReorderAbove
        );
        // Where standard mode would say reorder-below, expanded says make-child.
        assert_eq!(
            operation_at(Point::new(150.0, 30.0), ItemMode::Expanded, 0),
            TreeOperation::MakeChild
        );
        assert_eq!(
            operation_at(Point::new(150.0, 16.0), ItemMode::Expanded, 0),
            TreeOperation::MakeChild
        );
    }

    #[test]
    fn standard_and_expanded_agree_on_the_top_quarter() {
        for y in [0.0, 3.0, 8.0] {
            let point = Point::new(150.0, y);
            assert_eq!(
                operation_at(point, ItemMode::Standard, 1),
                operation_at(point, ItemMode::Expanded, 1),
                "top-quarter zone must be identical across modes"
            );
        }
    }

    #[test]
    fn last_in_group_reparents_below_center_left_of_the_inset() {
        // current_level = 2 => visible inset is 40px; x = 25 is left of it.
        assert_eq!(
            operation_at(Point::new(25.0, 24.0), ItemMode::LastInGroup, 2),
            TreeOperation::Reparent { desired_level: 1 }
        );
        // One indent step further left targets the root level.
        assert_eq!(
            operation_at(Point::new(5.0, 24.0), ItemMode::LastInGroup, 2),
            TreeOperation::Reparent { desired_level: 0 }
        );
    }

    #[test]
    fn last_in_group_reorders_above_center_left_of_the_inset() {
        assert_eq!(
            operation_at(Point::new(25.0, 10.0), ItemMode::LastInGroup, 2),
            TreeOperation::ReorderAbove
        );
        // Exactly on the center counts as below it.
        assert_eq!(
            operation_at(Point::new(25.0, 16.0), ItemMode::LastInGroup, 2),
            TreeOperation::Reparent { desired_level: 1 }
        );
    }

    #[test]
    fn last_in_group_falls_back_to_standard_over_the_visible_row() {
        // Right of the 40px inset the ordinary quarter rule applies.
        assert_eq!(
            operation_at(Point::new(60.0, 4.0), ItemMode::LastInGroup, 2),
            TreeOperation::ReorderAbove
        );
        assert_eq!(
            operation_at(Point::new(60.0, 16.0), ItemMode::LastInGroup, 2),
            TreeOperation::MakeChild
        );
        assert_eq!(
            operation_at(Point::new(60.0, 30.0), ItemMode::LastInGroup, 2),
            TreeOperation::ReorderBelow
        );
    }

    #[test]
    fn desired_level_clamps_negative_offsets_to_zero() {
        // Sub-pixel disagreement can put the pointer slightly left of the row.
        assert_eq!(
            operation_at(Point::new(-0.4, 24.0), ItemMode::LastInGroup, 2),
            TreeOperation::Reparent { desired_level: 0 }
        );
        // Far outside is clamped the same way.
        assert_eq!(
            operation_at(Point::new(-5000.0, 24.0), ItemMode::LastInGroup, 3),
            TreeOperation::Reparent { desired_level: 0 }
        );
    }

    #[test]
    fn desired_level_never_reaches_the_current_level() {
        // x just inside the inset boundary floors to current_level - 1.
        assert_eq!(
            operation_at(Point::new(39.9, 24.0), ItemMode::LastInGroup, 2),
            TreeOperation::Reparent { desired_level: 1 }
        );
        // Level-zero rows have no ancestors; the zone only exists outside the
        // box, and a pointer there must not underflow.
        assert_eq!(
            operation_at(Point::new(-10.0, 24.0), ItemMode::LastInGroup, 0),
            TreeOperation::Reparent { desired_level: 0 }
        );
    }

    #[test]
    fn zero_indent_does_not_panic() {
        let instruction =
            tree_instruction(RECT, Point::new(-10.0, 24.0), ItemMode::LastInGroup, 2, 0.0, &[]);
        assert_eq!(
            instruction.desired().operation,
            TreeOperation::Reparent { desired_level: 0 }
        );
    }

    #[test]
    fn blocking_wraps_without_moving_the_zone() {
        let point = Point::new(150.0, 16.0);
        let blocked = tree_instruction(
            RECT,
            point,
            ItemMode::Standard,
            1,
            INDENT,
            &[TreeOperationKind::MakeChild],
        );
        assert!(blocked.is_blocked(), "make-child was declared blocked");
        assert_eq!(blocked.desired().operation, TreeOperation::MakeChild);

        // Unrelated kinds in the block list leave the instruction allowed.
        let allowed = tree_instruction(
            RECT,
            point,
            ItemMode::Standard,
            1,
            INDENT,
            &[TreeOperationKind::ReorderBelow],
        );
        assert!(!allowed.is_blocked(), "make-child was not declared blocked");
        assert_eq!(allowed.desired(), blocked.desired());
    }

    #[test]
    fn blocking_reparent_blocks_every_level() {
        let instruction = tree_instruction(
            RECT,
            Point::new(25.0, 24.0),
            ItemMode::LastInGroup,
            2,
            INDENT,
            &[TreeOperationKind::Reparent],
        );
        assert!(instruction.is_blocked(), "reparent was declared blocked");
        assert_eq!(
            instruction.desired().operation,
            TreeOperation::Reparent { desired_level: 1 }
        );
    }

    #[test]
    fn block_round_trip_restores_the_unwrapped_instruction() {
        let point = Point::new(150.0, 4.0);
        let block = [TreeOperationKind::ReorderAbove];

        let blocked = tree_instruction(RECT, point, ItemMode::Standard, 1, INDENT, &block);
        let unblocked = tree_instruction(RECT, point, ItemMode::Standard, 1, INDENT, &[]);

        assert_eq!(blocked, TreeInstruction::Blocked(*unblocked.desired()));
        assert_eq!(unblocked, TreeInstruction::Allowed(*blocked.desired()));
    }

    #[test]
    fn memoized_identity_across_block_round_trip() {
        let mut hitbox = TreeItemHitbox::new();
        let point = Point::new(150.0, 4.0);
        let block = [TreeOperationKind::ReorderAbove];

        let first = hitbox.resolve(RECT, point, ItemMode::Standard, 1, INDENT, &block);
        assert!(first.is_blocked(), "reorder-above was declared blocked");

        // Removing the block produces a different instruction…
        let unblocked = hitbox.resolve(RECT, point, ItemMode::Standard, 1, INDENT, &[]);
        assert!(!Rc::ptr_eq(&first, &unblocked), "blocked and allowed differ");

        // …and re-applying it produces a value equal to the first, but the
        // single-slot cache has moved on, so the allocation is new.
        let reblocked = hitbox.resolve(RECT, point, ItemMode::Standard, 1, INDENT, &block);
        assert_eq!(*first, *reblocked);

        // Staying on the blocked result keeps its identity stable.
        let again = hitbox.resolve(RECT, point, ItemMode::Standard, 1, INDENT, &block);
        assert!(
            Rc::ptr_eq(&reblocked, &again),
            "consecutive equal resolutions must share an allocation"
        );
    }

    #[test]
    fn same_zone_resolves_to_the_same_allocation() {
        let mut hitbox = TreeItemHitbox::new();

        let first = hitbox.resolve(RECT, Point::new(150.0, 14.0), ItemMode::Standard, 1, INDENT, &[]);
        let second = hitbox.resolve(RECT, Point::new(40.0, 18.0), ItemMode::Standard, 1, INDENT, &[]);
        assert!(
            Rc::ptr_eq(&first, &second),
            "same make-child zone must share an allocation"
        );

        let third = hitbox.resolve(RECT, Point::new(150.0, 2.0), ItemMode::Standard, 1, INDENT, &[]);
        assert!(
            !Rc::ptr_eq(&first, &third),
            "a different zone must produce a new allocation"
        );
    }
}
