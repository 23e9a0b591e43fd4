// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for fallible value conversions.

use thiserror::Error;

/// Errors produced when decoding contract value types from external
/// representations (textual currency codes, ledger indices).
///
/// Tree traversal itself is total and never returns these: a node kind
/// outside the closed set routes to the unknown-node hook instead of an
/// error path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A textual currency code that is not in the registry.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A ledger currency index outside the registry range.
    #[error("currency index out of range: {0}")]
    CurrencyIndexOutOfRange(u8),
}
