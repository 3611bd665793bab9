// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! The combinator contract for optional values.

use crate::nullable::Nullable;
use crate::opt::Opt;
use crate::safety::Safety;

/// The combinator algebra over a two-variant optional value.
///
/// Every presence decision is the effective one: a payload that reads as
/// null-like counts as absent regardless of the stored discriminant.
///
/// Combinators consume the receiver and hand back a new value.
/// [`Optional::replace`] alone mutates, and takes the receiver by
/// exclusive reference to say so.
pub trait Optional<T: Nullable>: Safety<Value = T> {
    /// Returns `true` if no payload is effectively present.
    fn is_none(&self) -> bool;

    /// Returns `true` if a payload is effectively present.
    fn is_some(&self) -> bool;

    /// Applies `map_fn` to the payload, producing a new optional value.
    ///
    /// A null-like result collapses to empty.
    fn map<U, F>(self, map_fn: F) -> Opt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> U;

    /// Returns empty if the value is empty, otherwise the result of
    /// `chain_fn` on the payload.
    fn and_then<U, F>(self, chain_fn: F) -> Opt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> Opt<U>;

    /// Keeps the payload only if `predicate_fn` accepts it.
    fn filter<P>(self, predicate_fn: P) -> Opt<T>
    where
        P: FnOnce(&T) -> bool;

    /// [`Optional::filter`] fused with [`Optional::map`]: applies
    /// `map_fn` to the payload and returns its result directly, saving
    /// one traversal over filtering and then mapping.
    fn filter_map<U, F>(self, map_fn: F) -> Opt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> Opt<U>;

    /// Returns the value if it holds a payload, otherwise `or_value`.
    ///
    /// Arguments passed to `or` are eagerly evaluated; if you are
    /// passing the result of a function call, it is recommended to use
    /// [`Optional::or_else`], which is lazily evaluated.
    fn or(self, or_value: Opt<T>) -> Opt<T>;

    /// Returns the value if it holds a payload, otherwise calls `or_fn`
    /// and returns its result.
    fn or_else<F>(self, or_fn: F) -> Opt<T>
    where
        F: FnOnce() -> Opt<T>;

    /// Swaps `value` into the receiver and returns the displaced state.
    ///
    /// A null-like `value` leaves the receiver untouched and returns a
    /// snapshot of its current state.
    fn replace(&mut self, value: T) -> Opt<T>;

    /// Pairs this payload with `other`'s; empty if either is absent.
    fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)>
    where
        U: Nullable;
}
