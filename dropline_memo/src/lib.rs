// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Memo: a single-slot referential memoizer.
//!
//! UI layers that diff by reference re-render whenever they receive a new
//! allocation, even if it is value-equal to the previous one. Hit-test style
//! code aggravates this: it rebuilds a structurally identical result on every
//! pointer-move tick. [`StableCache`] smooths that over by remembering exactly
//! one prior value and handing back the *old* allocation whenever a new value
//! compares equal to it.
//!
//! This is deliberately not a general-purpose cache. There is no eviction
//! policy, no TTL, and no capacity beyond the single remembered slot; every
//! non-equal call overwrites it. Create one cache per logical owner (for
//! example, per drop target) so the remembered value reflects that owner's own
//! history.
//!
//! ```rust
//! use std::rc::Rc;
//! use dropline_memo::StableCache;
//!
//! let mut cache: StableCache<(u32, u32)> = StableCache::new();
//!
//! let a = cache.memoize((1, 2));
//! // A value-equal recomputation returns the same allocation…
//! let b = cache.memoize((1, 2));
//! assert!(Rc::ptr_eq(&a, &b));
//!
//! // …while a different value replaces the slot.
//! let c = cache.memoize((3, 4));
//! assert!(!Rc::ptr_eq(&a, &c));
//! ```
//!
//! Equality defaults to [`PartialEq`], which recurses structurally through
//! nested payloads (including wrapper variants). Callers with looser notions
//! of "the same result" can supply their own predicate via
//! [`StableCache::with_equality`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;

/// A memoizer that remembers exactly one prior value and preserves its
/// identity across value-equal recomputation.
///
/// Returned values are [`Rc`] handles; two calls produced the "same" result
/// exactly when [`Rc::ptr_eq`] holds for their returns. The cache itself is
/// the only mutable state and is intended for a single logical owner; it is
/// not designed for concurrent callers.
#[derive(Debug)]
pub struct StableCache<T> {
    slot: Option<Rc<T>>,
    eq: fn(&T, &T) -> bool,
}

impl<T: PartialEq> StableCache<T> {
    /// Creates a cache that compares values with [`PartialEq`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_equality(T::eq)
    }
}

impl<T> StableCache<T> {
    /// Creates a cache that compares values with a caller-supplied predicate.
    ///
    /// The predicate receives the remembered value first and the candidate
    /// second. It should be reflexive for values the caller considers
    /// interchangeable; beyond that the cache imposes no requirements.
    #[must_use]
    pub const fn with_equality(eq: fn(&T, &T) -> bool) -> Self {
        Self { slot: None, eq }
    }

    /// Memoizes `value`, returning the remembered allocation when the new
    /// value compares equal to it.
    ///
    /// On a miss (first call, or an unequal value) the new value becomes the
    /// remembered one and its fresh allocation is returned.
    pub fn memoize(&mut self, value: T) -> Rc<T> {
        if let Some(prev) = &self.slot
            && (self.eq)(prev, &value)
        {
            return Rc::clone(prev);
        }
        let fresh = Rc::new(value);
        self.slot = Some(Rc::clone(&fresh));
        fresh
    }

    /// Returns the currently remembered value, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Rc<T>> {
        self.slot.as_ref()
    }

    /// Forgets the remembered value.
    ///
    /// The next [`StableCache::memoize`] call is guaranteed to return a fresh
    /// allocation. Useful when a drag session ends and stale identity should
    /// not leak into the next one.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl<T: PartialEq> Default for StableCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
