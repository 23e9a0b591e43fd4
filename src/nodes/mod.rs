// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Contract node model: the closed combinator kind set and the value types
//! nodes carry.
//!
//! Nodes are pure data. All behavior over trees lives in [`crate::visitor`].

mod contract;
mod value;

pub use contract::{
    AndNode, GiveNode, IfNode, Node, NodeKind, OneNode, OrNode, ScaleNode, ScaleObsNode,
    TimeboundNode, ZeroNode,
};
pub use value::{Currency, Observable, Timestamp, CURRENCIES};
