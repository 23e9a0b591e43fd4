// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The generic dispatch operation over contract trees.
//!
//! # Traversal Order
//!
//! - Children are visited in positional order: child 0 before child 1,
//!   always. Composition hooks receive results in that order, so the
//!   ordering is an observable part of the contract.
//! - Combination is post-order: a node's hook runs only after the results
//!   of all of its children are fully computed.
//! - Every node of a well-formed tree is visited exactly once.
//!
//! # Totality
//!
//! Dispatch never fails. The kind set is closed and matched exhaustively;
//! kinds outside the set are represented as [`Node::Unknown`] and routed to
//! [`Visitor::process_unknown_node`] without recursion. Trees are finite
//! and acyclic by construction (nodes own their children), so the
//! traversal always terminates.

use super::traits::Visitor;
use crate::nodes::Node;

/// Visit every node reachable from `node`, bottom-up, and return the
/// result of the root's hook.
///
/// The dispatcher is a pure traversal skeleton: it decides recursion and
/// ordering, while all combination semantics live in the visitor's hooks.
/// Any visitor can drive it, concrete or behind `&mut dyn Visitor`.
///
/// Recursion depth equals tree depth. Contracts built by the marketplace
/// tooling are shallow; callers traversing machine-generated trees of
/// unusual depth should budget stack for it.
///
/// # Example
///
/// ```ignore
/// let mut collector = CurrencyCollector;
/// let currencies = visit(&mut collector, &tree);
/// ```
pub fn visit<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) -> V::Output {
    match node {
        Node::And(n) => {
            let left = visit(visitor, &n.children[0]);
            let right = visit(visitor, &n.children[1]);
            visitor.process_and_node(n, left, right)
        }
        Node::Or(n) => {
            let left = visit(visitor, &n.children[0]);
            let right = visit(visitor, &n.children[1]);
            visitor.process_or_node(n, left, right)
        }
        Node::If(n) => {
            let left = visit(visitor, &n.children[0]);
            let right = visit(visitor, &n.children[1]);
            visitor.process_if_node(n, left, right)
        }
        Node::Timebound(n) => {
            let child = visit(visitor, &n.children[0]);
            visitor.process_timebound_node(n, child)
        }
        Node::Give(n) => {
            let child = visit(visitor, &n.children[0]);
            visitor.process_give_node(n, child)
        }
        Node::ScaleObs(n) => {
            let child = visit(visitor, &n.children[0]);
            visitor.process_scale_obs_node(n, child)
        }
        Node::Scale(n) => {
            let child = visit(visitor, &n.children[0]);
            visitor.process_scale_node(n, child)
        }
        Node::One(n) => visitor.process_one_node(n),
        Node::Zero(n) => visitor.process_zero_node(n),
        Node::Unknown => visitor.process_unknown_node(),
    }
}

// ============================================================================
// Tests
// ============================================================================
