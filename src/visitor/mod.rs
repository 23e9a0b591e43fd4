// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for contract tree traversal.
//!
//! This module provides the generic dispatch operation and the trait hooks
//! client analyses implement. The design keeps all semantics out of the
//! node model: a traversal supplies one hook per node kind, and
//! [`visit`] supplies the recursion and ordering.
//!
//! # Traversal Order
//!
//! - Children are visited in positional order, child 0 before child 1.
//! - Combination is post-order: hooks receive fully computed child results.
//! - Every node is visited exactly once; unknown kinds route to the
//!   fallback hook instead of failing.
//!
//! # Visitor Pattern
//!
//! The [`Visitor`] trait is the full contract, one required hook per kind:
//!
//! ```ignore
//! struct LeafCount;
//!
//! impl Visitor for LeafCount {
//!     type Output = usize;
//!
//!     fn process_one_node(&mut self, _node: &OneNode) -> usize { 1 }
//!     // ... one hook per kind
//! }
//!
//! let leaves = visit(&mut LeafCount, &tree);
//! ```
//!
//! # Collecting Pattern
//!
//! The [`CollectingVisitor`] trait is the common case: an ordered bottom-up
//! aggregation where only the interesting hooks are overridden.
//!
//! ```ignore
//! struct Currencies;
//!
//! impl CollectingVisitor for Currencies {
//!     type Item = Currency;
//!
//!     fn process_one_node(&mut self, node: &OneNode) -> Vec<Currency> {
//!         vec![node.currency]
//!     }
//! }
//! ```

mod currency;
mod dispatch;
mod gateway;
mod traits;

pub use currency::CurrencyCollector;
pub use dispatch::visit;
pub use gateway::GatewayCollector;
pub use traits::{CollectingVisitor, Visitor};
