// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! The two-variant optional value.

use core::hint;
use core::mem;

use crate::error_codes::ErrorCode;
use crate::nullable::Nullable;
use crate::optional::Optional;
use crate::safety::Safety;

/// An explicit, type-checked absence marker.
///
/// `Opt` replaces ambiguous "no value" conventions with a tagged union
/// of exactly two variants. The present variant never holds a null-like
/// payload: the factories refuse one at construction, and every
/// observation re-checks the payload at use time, so a payload that
/// reads as null-like counts as absent everywhere.
///
/// Construct with [`Opt::empty`], [`Opt::present`], or
/// [`Opt::from_nullable`]; compose with the [`Optional`] combinators;
/// end a chain with the [`Safety`] extraction operations.
#[derive(Debug)]
pub enum Opt<T> {
    /// No payload.
    Empty,
    /// A payload, present and non-null-like.
    Present(T),
}

impl<T: Nullable> Opt<T> {
    /// Creates an empty value.
    pub const fn empty() -> Opt<T> {
        Opt::Empty
    }

    /// Creates a present value.
    ///
    /// The caller is expected to pass a non-null-like payload. Passing
    /// one anyway is refused: the result is empty, never an invalid
    /// present.
    pub fn present(value: T) -> Opt<T> {
        if value.is_null_like() {
            Opt::Empty
        } else {
            Opt::Present(value)
        }
    }

    /// Converts a possibly-null-like value, collapsing absence to
    /// empty.
    ///
    /// Unlike [`Opt::present`], the input is expected to be nullable;
    /// the collapse is the same.
    pub fn from_nullable(value: T) -> Opt<T> {
        Opt::present(value)
    }

    /// The effective presence view: the payload, only if the stored
    /// discriminant and the payload itself agree that one is present.
    fn get(&self) -> Option<&T> {
        match self {
            Opt::Present(value) if !value.is_null_like() => Some(value),
            _ => None,
        }
    }

    /// By-value twin of `get`.
    fn into_value(self) -> Option<T> {
        match self {
            Opt::Present(value) if !value.is_null_like() => Some(value),
            _ => None,
        }
    }
}

impl<T: Nullable> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Opt<T> {
        match value {
            Some(value) => Opt::present(value),
            None => Opt::Empty,
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Opt<T> {
        Opt::Empty
    }
}

/// Duplication runs the same presence validation as construction, so a
/// clone of a value whose payload reads as null-like comes back empty.
impl<T: Nullable + Clone> Clone for Opt<T> {
    fn clone(&self) -> Opt<T> {
        match self.get() {
            Some(value) => Opt::Present(value.clone()),
            None => Opt::Empty,
        }
    }
}

/// Equality is structural over effective states: empty equals empty,
/// and present values compare by payload.
impl<T: Nullable + PartialEq> PartialEq for Opt<T> {
    fn eq(&self, other: &Opt<T>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Nullable + Eq> Eq for Opt<T> {}

/// Optional values nest: an effectively-empty `Opt` is itself
/// null-like.
impl<T: Nullable> Nullable for Opt<T> {
    fn is_null_like(&self) -> bool {
        self.get().is_none()
    }
}

impl<T: Nullable + Clone> Safety for Opt<T> {
    type Value = T;

    fn expect(self, msg: &'static str) -> Result<T, ErrorCode> {
        self.into_value().ok_or(ErrorCode::Expect(msg))
    }

    fn unwrap(self) -> Result<T, ErrorCode> {
        self.into_value().ok_or(ErrorCode::Unwrap)
    }

    unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Opt::Present(value) => value,
            Opt::Empty if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: the caller promised the value is present.
            Opt::Empty => unsafe { hint::unreachable_unchecked() },
        }
    }

    fn unwrap_or(self, default: T) -> T {
        self.into_value().unwrap_or(default)
    }

    fn unwrap_or_else<F>(self, default_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.into_value().unwrap_or_else(default_fn)
    }
}

impl<T: Nullable + Clone> Optional<T> for Opt<T> {
    fn is_none(&self) -> bool {
        self.get().is_none()
    }

    fn is_some(&self) -> bool {
        self.get().is_some()
    }

    fn map<U, F>(self, map_fn: F) -> Opt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> U,
    {
        match self.into_value() {
            // The callback's result is unvalidated, so it goes through
            // the factory.
            Some(value) => Opt::present(map_fn(value)),
            None => Opt::Empty,
        }
    }

    fn and_then<U, F>(self, chain_fn: F) -> Opt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> Opt<U>,
    {
        match self.into_value() {
            Some(value) => chain_fn(value),
            None => Opt::Empty,
        }
    }

    fn filter<P>(self, predicate_fn: P) -> Opt<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self.into_value() {
            Some(value) if predicate_fn(&value) => Opt::Present(value),
            _ => Opt::Empty,
        }
    }

    fn filter_map<U, F>(self, map_fn: F) -> Opt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> Opt<U>,
    {
        match self.into_value() {
            Some(value) => map_fn(value),
            None => Opt::Empty,
        }
    }

    fn or(self, or_value: Opt<T>) -> Opt<T> {
        if self.is_some() {
            self
        } else {
            or_value
        }
    }

    fn or_else<F>(self, or_fn: F) -> Opt<T>
    where
        F: FnOnce() -> Opt<T>,
    {
        if self.is_some() {
            self
        } else {
            or_fn()
        }
    }

    fn replace(&mut self, value: T) -> Opt<T> {
        if value.is_null_like() {
            return self.clone();
        }
        mem::replace(self, Opt::Present(value))
    }

    fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)>
    where
        U: Nullable,
    {
        match (self.into_value(), other.into_value()) {
            (Some(a), Some(b)) => Opt::Present((a, b)),
            _ => Opt::Empty,
        }
    }
}
