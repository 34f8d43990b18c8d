// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A typed side-channel for handing instructions to host callbacks.
//!
//! Drop-target callbacks usually flow an application-defined data value from
//! the drag-enter site to the drop site. The instruction resolved for the
//! current pointer position has to travel alongside that data without
//! colliding with any of the caller's own fields. [`DropPayload`] does this
//! with a private field instead of a dynamically keyed bag: the caller's data
//! stays fully theirs, and the instruction can only be reached through this
//! type's accessors.
//!
//! The instruction is carried as an [`Rc`], so the referential identity
//! established by [`ListItemHitbox`](crate::ListItemHitbox) or
//! [`TreeItemHitbox`](crate::TreeItemHitbox) survives the attach/extract
//! round trip and downstream reference-equality checks keep working.
//!
//! ```rust
//! use dropline_hitbox::{DropPayload, ItemMode, TreeItemHitbox, TreeOperation};
//! use kurbo::{Point, Rect};
//!
//! #[derive(Debug)]
//! struct CardData {
//!     card_id: u64,
//! }
//!
//! let mut hitbox = TreeItemHitbox::new();
//! let rect = Rect::new(0.0, 0.0, 300.0, 32.0);
//! let instruction = hitbox.resolve(rect, Point::new(150.0, 16.0), ItemMode::Standard, 1, 20.0, &[]);
//!
//! // Drag-enter callback: attach the instruction to the caller's data.
//! let payload = DropPayload::attach(CardData { card_id: 7 }, instruction);
//!
//! // Drop callback: extract and interpret it.
//! let instruction = payload.instruction().expect("attached above");
//! assert_eq!(instruction.desired().operation, TreeOperation::MakeChild);
//! assert_eq!(payload.data().card_id, 7);
//! ```

use alloc::rc::Rc;

/// Pairs caller-supplied drop-target data with the instruction resolved for
/// the current pointer position.
///
/// Generic over the caller's data `T` and the instruction type `I`
/// ([`ListInstruction`](crate::ListInstruction) or
/// [`TreeInstruction`](crate::TreeInstruction)).
#[derive(Clone, Debug, PartialEq)]
pub struct DropPayload<T, I> {
    data: T,
    instruction: Option<Rc<I>>,
}

impl<T, I> DropPayload<T, I> {
    /// Wraps `data` with no instruction attached.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            data,
            instruction: None,
        }
    }

    /// Wraps `data` with `instruction` attached.
    #[must_use]
    pub const fn attach(data: T, instruction: Rc<I>) -> Self {
        Self {
            data,
            instruction: Some(instruction),
        }
    }

    /// The attached instruction, if one has been resolved for this target.
    #[must_use]
    pub fn instruction(&self) -> Option<&Rc<I>> {
        self.instruction.as_ref()
    }

    /// Replaces the attached instruction.
    ///
    /// Hosts call this on each drag-over tick; `None` clears the attachment
    /// (for example when a list resolver reports no reachable operation).
    pub fn set_instruction(&mut self, instruction: Option<Rc<I>>) {
        self.instruction = instruction;
    }

    /// The caller's data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access to the caller's data.
    pub const fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Unwraps the caller's data, discarding any attached instruction.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}
