// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! The minimal extraction contract for optional-like containers.

use crate::error_codes::ErrorCode;

/// Checked and unchecked extraction from an optional-like container.
///
/// Cloning is part of the contract: an implementation's `Clone` must run
/// the same presence validation as construction, so a duplicate of a
/// value whose payload reads as null-like comes back empty.
///
/// The checked operations report absence through `Result` rather than
/// panicking; the one way around the check is `unwrap_unchecked`, which
/// is an `unsafe fn`.
pub trait Safety: Clone {
    /// The payload type.
    type Value;

    /// Returns the payload, or [`ErrorCode::Expect`] carrying `msg` if
    /// the value is empty.
    fn expect(self, msg: &'static str) -> Result<Self::Value, ErrorCode>;

    /// Returns the payload, or [`ErrorCode::Unwrap`] if the value is
    /// empty.
    fn unwrap(self) -> Result<Self::Value, ErrorCode>;

    /// Returns the payload without a presence check.
    ///
    /// May hand back a null-like payload. The combinators never use
    /// this internally.
    ///
    /// # Safety
    ///
    /// Calling this on an empty value is undefined behavior.
    unsafe fn unwrap_unchecked(self) -> Self::Value;

    /// Returns the payload, or `default` if the value is empty.
    ///
    /// The argument is evaluated eagerly; for an expensive fallback use
    /// [`Safety::unwrap_or_else`].
    fn unwrap_or(self, default: Self::Value) -> Self::Value;

    /// Returns the payload, or computes a fallback if the value is
    /// empty.
    fn unwrap_or_else<F>(self, default_fn: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value;
}
