// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! TicOpt: a tiny checked optional-value container.
//!
//! `Opt<T>` replaces ambiguous "no value" representations (null
//! pointers, `None`-laden signatures, ad-hoc sentinel values) with an
//! explicit two-variant absence marker, plus a family of combinators
//! for composing computations over possibly-absent values without a
//! presence check at every call site.
//!
//! What sets `Opt` apart from a plain enum is the null-collapsing
//! contract: the present variant can never hold a payload that itself
//! stands for absence. Factories refuse such a payload at construction,
//! and every observation re-checks it at use time, so "present but
//! null" is unrepresentable in practice and harmless if smuggled in.
//!
//! ## Usage
//!
//! ```rust
//! use ticopt::{Opt, Optional, Safety};
//!
//! let port = Opt::present(8080_u16)
//!     .filter(|p| *p >= 1024)
//!     .map(|p| p + 1);
//! assert_eq!(port.unwrap_or(9000), 8081);
//! ```
//!
//! Extraction never panics: `unwrap` and `expect` hand back a `Result`
//! carrying an [`ErrorCode`], and the one unchecked escape hatch is an
//! `unsafe fn`.
//!
//! The crate is `no_std` and allocation-free.

#![no_std]

pub mod error_codes;
pub mod nullable;
pub mod opt;
pub mod optional;
pub mod safety;

// Use this to generate nicer docs
#[doc(inline)]
pub use crate::error_codes::ErrorCode;
#[doc(inline)]
pub use crate::nullable::Nullable;
#[doc(inline)]
pub use crate::opt::Opt;
#[doc(inline)]
pub use crate::optional::Optional;
#[doc(inline)]
pub use crate::safety::Safety;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
