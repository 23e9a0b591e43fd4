// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! CurrencyCollector for extracting the currencies a contract pays in.
//!
//! Valuation and balance reporting need the set of currencies a contract
//! touches before any amounts are computed. `One` is the only kind that
//! names a currency, so the collector overrides that single hook and lets
//! the default fold carry the items to the root.
//!
//! # Usage
//!
//! ```ignore
//! let currencies = CurrencyCollector::collect(&tree);
//! ```

use super::dispatch::visit;
use super::traits::CollectingVisitor;
use crate::nodes::{Currency, Node, OneNode};

/// Collects every currency referenced by a contract, in traversal order.
///
/// Duplicates are preserved: a contract paying USD at two leaves reports
/// USD twice. Callers wanting the distinct set dedupe the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyCollector;

impl CurrencyCollector {
    /// Gather the currencies referenced anywhere under `tree`.
    pub fn collect(tree: &Node) -> Vec<Currency> {
        visit(&mut CurrencyCollector, tree)
    }
}

impl CollectingVisitor for CurrencyCollector {
    type Item = Currency;

    fn process_one_node(&mut self, node: &OneNode) -> Vec<Currency> {
        vec![node.currency]
    }
}

// ============================================================================
// Tests
// ============================================================================
