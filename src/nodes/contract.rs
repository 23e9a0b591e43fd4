// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The contract combinator node model.
//!
//! A contract is an immutable tree built from a closed set of nine node
//! kinds plus an explicit [`Node::Unknown`] catch-all:
//!
//! - **Terminals** ([`OneNode`], [`ZeroNode`]): no children.
//! - **Unary combinators** ([`GiveNode`], [`ScaleNode`], [`ScaleObsNode`],
//!   [`TimeboundNode`]): exactly one child.
//! - **Binary combinators** ([`AndNode`], [`OrNode`], [`IfNode`]): exactly
//!   two children in a fixed positional order.
//!
//! Every non-terminal stores its children as an ordered fixed-size sequence
//! (`Box<[Node; 2]>` or `Box<[Node; 1]>`), so arity is enforced by the type
//! system at construction rather than checked during traversal. Child
//! position carries meaning: index 0 is always the left/first sub-contract,
//! index 1 the second. For [`OrNode`] this index encodes which choice a
//! downstream executor selects, a convention shared with every component
//! that interprets contracts.
//!
//! Nodes are data only. All semantics (extraction, rendering, valuation)
//! live in traversals over this model; see [`crate::visitor`].

use super::value::{Currency, Observable, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Node kinds
// ============================================================================

/// Discriminant identifying a node's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Both sub-contracts held simultaneously.
    And,
    /// Holder keeps exactly one of the two sub-contracts.
    Or,
    /// A boolean gateway selects the active sub-contract.
    If,
    /// Child restricted to a time window.
    Timebound,
    /// Owner and issuer roles swapped.
    Give,
    /// Child scaled by a gateway-resolved quantity.
    ScaleObs,
    /// Child scaled by a constant factor.
    Scale,
    /// One unit of a currency.
    One,
    /// No obligations.
    Zero,
    /// A kind outside the closed set.
    Unknown,
}

impl NodeKind {
    /// The canonical name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::And => "And",
            NodeKind::Or => "Or",
            NodeKind::If => "If",
            NodeKind::Timebound => "Timebound",
            NodeKind::Give => "Give",
            NodeKind::ScaleObs => "ScaleObs",
            NodeKind::Scale => "Scale",
            NodeKind::One => "One",
            NodeKind::Zero => "Zero",
            NodeKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Binary combinators
// ============================================================================

/// Both sub-contracts are held simultaneously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndNode {
    /// Ordered children; index 0 is the left sub-contract.
    pub children: Box<[Node; 2]>,
}

impl AndNode {
    /// A contract holding `left` and `right` together.
    pub fn new(left: Node, right: Node) -> Self {
        Self {
            children: Box::new([left, right]),
        }
    }
}

/// The holder keeps exactly one of the two sub-contracts.
///
/// Index 0 is the first choice, index 1 the second. Executors record the
/// holder's selection by this index, so the position-to-choice mapping is a
/// fixed convention and must not be renegotiated locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrNode {
    /// Ordered children; index 0 is the first choice.
    pub children: Box<[Node; 2]>,
}

impl OrNode {
    /// A contract offering the choice between `first` and `second`.
    pub fn new(first: Node, second: Node) -> Self {
        Self {
            children: Box::new([first, second]),
        }
    }
}

/// A boolean gateway selects which sub-contract becomes active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfNode {
    /// The boolean gateway deciding the branch.
    pub gateway: Observable,
    /// Ordered children; index 0 is active when the gateway reports true.
    pub children: Box<[Node; 2]>,
}

impl IfNode {
    /// A contract activating `on_true` or `on_false` depending on `gateway`.
    pub fn new(gateway: Observable, on_true: Node, on_false: Node) -> Self {
        Self {
            gateway,
            children: Box::new([on_true, on_false]),
        }
    }
}

// ============================================================================
// Unary combinators
// ============================================================================

/// Restricts the child's validity to a time window.
///
/// Bounds are inclusive Unix timestamps. Well-formed windows have
/// `lower_bound <= upper_bound`; the tree builder is responsible for
/// supplying ordered bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeboundNode {
    /// Earliest time the child is in force.
    pub lower_bound: Timestamp,
    /// Latest time the child is in force.
    pub upper_bound: Timestamp,
    /// The bounded sub-contract.
    pub children: Box<[Node; 1]>,
}

impl TimeboundNode {
    /// A contract restricting `child` to `[lower_bound, upper_bound]`.
    pub fn new(lower_bound: Timestamp, upper_bound: Timestamp, child: Node) -> Self {
        Self {
            lower_bound,
            upper_bound,
            children: Box::new([child]),
        }
    }
}

/// Swaps the owner and issuer roles of the child contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveNode {
    /// The sub-contract whose parties are swapped.
    pub children: Box<[Node; 1]>,
}

impl GiveNode {
    /// A contract obliging the owner to honor `child` toward the issuer.
    pub fn new(child: Node) -> Self {
        Self {
            children: Box::new([child]),
        }
    }
}

/// Scales the child's value by a gateway-resolved quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleObsNode {
    /// The integer gateway supplying the factor at execution time.
    pub gateway: Observable,
    /// The scaled sub-contract.
    pub children: Box<[Node; 1]>,
}

impl ScaleObsNode {
    /// A contract scaling `child` by the value resolved by `gateway`.
    pub fn new(gateway: Observable, child: Node) -> Self {
        Self {
            gateway,
            children: Box::new([child]),
        }
    }
}

/// Scales the child's value by a constant factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleNode {
    /// The constant factor.
    pub factor: i64,
    /// The scaled sub-contract.
    pub children: Box<[Node; 1]>,
}

impl ScaleNode {
    /// A contract worth `factor` times `child`.
    pub fn new(factor: i64, child: Node) -> Self {
        Self {
            factor,
            children: Box::new([child]),
        }
    }
}

// ============================================================================
// Terminals
// ============================================================================

/// A contract paying one unit of a currency, immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneNode {
    /// The settlement currency.
    pub currency: Currency,
}

impl OneNode {
    /// A contract paying one unit of `currency`.
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }
}

/// A contract with no rights and no obligations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZeroNode;

// ============================================================================
// The closed node union
// ============================================================================

/// A contract combinator tree.
///
/// The kind set is closed and matched exhaustively by every traversal, so
/// adding a kind is a compile-time-checked change. [`Node::Unknown`] stands
/// in for any kind outside the set (for example a tag read from a newer
/// ledger) and is routed to the dispatcher's fallback hook instead of an
/// error path.
///
/// Each node exclusively owns its children, which makes trees finite and
/// acyclic by construction. Traversals borrow the tree read-only and never
/// mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Both sub-contracts held simultaneously.
    And(AndNode),
    /// Holder keeps exactly one of the two sub-contracts.
    Or(OrNode),
    /// A boolean gateway selects the active sub-contract.
    If(IfNode),
    /// Child restricted to a time window.
    Timebound(TimeboundNode),
    /// Owner and issuer roles swapped.
    Give(GiveNode),
    /// Child scaled by a gateway-resolved quantity.
    ScaleObs(ScaleObsNode),
    /// Child scaled by a constant factor.
    Scale(ScaleNode),
    /// One unit of a currency.
    One(OneNode),
    /// No obligations.
    Zero(ZeroNode),
    /// A kind outside the closed set.
    Unknown,
}

impl Node {
    /// A contract holding `left` and `right` together.
    pub fn and(left: Node, right: Node) -> Node {
        Node::And(AndNode::new(left, right))
    }

    /// A contract offering the choice between `first` and `second`.
    pub fn or(first: Node, second: Node) -> Node {
        Node::Or(OrNode::new(first, second))
    }

    /// A contract activating `on_true` or `on_false` depending on `gateway`.
    pub fn if_(gateway: Observable, on_true: Node, on_false: Node) -> Node {
        Node::If(IfNode::new(gateway, on_true, on_false))
    }

    /// A contract restricting `child` to `[lower_bound, upper_bound]`.
    pub fn timebound(lower_bound: Timestamp, upper_bound: Timestamp, child: Node) -> Node {
        Node::Timebound(TimeboundNode::new(lower_bound, upper_bound, child))
    }

    /// A contract obliging the owner to honor `child` toward the issuer.
    pub fn give(child: Node) -> Node {
        Node::Give(GiveNode::new(child))
    }

    /// A contract scaling `child` by the value resolved by `gateway`.
    pub fn scale_obs(gateway: Observable, child: Node) -> Node {
        Node::ScaleObs(ScaleObsNode::new(gateway, child))
    }

    /// A contract worth `factor` times `child`.
    pub fn scale(factor: i64, child: Node) -> Node {
        Node::Scale(ScaleNode::new(factor, child))
    }

    /// A contract paying one unit of `currency`.
    pub fn one(currency: Currency) -> Node {
        Node::One(OneNode::new(currency))
    }

    /// A contract with no rights and no obligations.
    pub fn zero() -> Node {
        Node::Zero(ZeroNode)
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::And(_) => NodeKind::And,
            Node::Or(_) => NodeKind::Or,
            Node::If(_) => NodeKind::If,
            Node::Timebound(_) => NodeKind::Timebound,
            Node::Give(_) => NodeKind::Give,
            Node::ScaleObs(_) => NodeKind::ScaleObs,
            Node::Scale(_) => NodeKind::Scale,
            Node::One(_) => NodeKind::One,
            Node::Zero(_) => NodeKind::Zero,
            Node::Unknown => NodeKind::Unknown,
        }
    }

    /// The ordered children of this node.
    ///
    /// Two elements for binary kinds, one for unary kinds, none for
    /// terminals and [`Node::Unknown`]. Index 0 is the left/first child.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::And(n) => &n.children[..],
            Node::Or(n) => &n.children[..],
            Node::If(n) => &n.children[..],
            Node::Timebound(n) => &n.children[..],
            Node::Give(n) => &n.children[..],
            Node::ScaleObs(n) => &n.children[..],
            Node::Scale(n) => &n.children[..],
            Node::One(_) | Node::Zero(_) | Node::Unknown => &[],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
