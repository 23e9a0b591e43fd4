// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A financial contract combinator tree and traversal library.
//!
//! Contracts are immutable trees built from a closed set of combinator
//! kinds: terminals (`One`, `Zero`), unary combinators (`Give`, `Scale`,
//! `ScaleObs`, `Timebound`) and binary combinators (`And`, `Or`, `If`).
//! The nodes are pure data; every analysis over a contract (extraction,
//! rendering, valuation) is a traversal implementing per-kind hooks that
//! the generic [`visit`] operation dispatches to.
//!
//! # Overview
//!
//! - **Node model**: build trees with the [`Node`] constructors; kinds and
//!   arities are fixed at construction.
//! - **Dispatch**: [`visit`] walks any tree exactly once, children in
//!   positional order, combining bottom-up through a [`Visitor`].
//! - **Collection**: [`CollectingVisitor`] folds an ordered item sequence
//!   over the tree; [`CurrencyCollector`] and [`GatewayCollector`] are the
//!   stock instantiations.
//!
//! # Quick Start
//!
//! ```
//! use fincontract_ast::{Currency, CurrencyCollector, Node};
//!
//! // Receive one USD and pay two EUR.
//! let tree = Node::and(
//!     Node::one(Currency::Usd),
//!     Node::give(Node::scale(2, Node::one(Currency::Eur))),
//! );
//!
//! let currencies = CurrencyCollector::collect(&tree);
//! assert_eq!(currencies, vec![Currency::Usd, Currency::Eur]);
//! ```
//!
//! # Custom Traversals
//!
//! ```
//! use fincontract_ast::{visit, CollectingVisitor, Currency, Node, OneNode};
//!
//! /// Collects the ISO codes of currencies paid to the owner.
//! struct Codes;
//!
//! impl CollectingVisitor for Codes {
//!     type Item = &'static str;
//!
//!     fn process_one_node(&mut self, node: &OneNode) -> Vec<&'static str> {
//!         vec![node.currency.as_str()]
//!     }
//! }
//!
//! let tree = Node::or(Node::zero(), Node::one(Currency::Sgd));
//! assert_eq!(visit(&mut Codes, &tree), vec!["SGD"]);
//! ```

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Error types for fallible value conversions.
pub mod error;
pub use error::ValueError;

/// Contract node model.
pub mod nodes;
pub use nodes::{
    AndNode, Currency, GiveNode, IfNode, Node, NodeKind, Observable, OneNode, OrNode, ScaleNode,
    ScaleObsNode, TimeboundNode, Timestamp, ZeroNode, CURRENCIES,
};

/// Visitor infrastructure for tree traversal.
pub mod visitor;
pub use visitor::{visit, CollectingVisitor, CurrencyCollector, GatewayCollector, Visitor};
