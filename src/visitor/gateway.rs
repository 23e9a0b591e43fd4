// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! GatewayCollector for extracting the gateways a contract depends on.
//!
//! Before a contract executes, every gateway it references has to be
//! refreshed so the resolved values are current. Two kinds reference
//! gateways: `If` (boolean, selects the branch) and `ScaleObs` (integer,
//! supplies the factor). The collector reports each gateway's address as it
//! is encountered, parent before descendants.

use super::dispatch::visit;
use super::traits::CollectingVisitor;
use crate::nodes::{IfNode, Node, ScaleObsNode};

/// Collects the gateway addresses referenced by `If` and `ScaleObs` nodes,
/// in traversal order.
///
/// A node's own gateway is reported ahead of any gateways found below it.
/// Duplicates are preserved when several nodes share one gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatewayCollector;

impl GatewayCollector {
    /// Gather the gateway addresses referenced anywhere under `tree`.
    pub fn collect(tree: &Node) -> Vec<String> {
        visit(&mut GatewayCollector, tree)
    }
}

impl CollectingVisitor for GatewayCollector {
    type Item = String;

    fn process_if_node(
        &mut self,
        node: &IfNode,
        left: Vec<String>,
        right: Vec<String>,
    ) -> Vec<String> {
        let mut items = vec![node.gateway.address.clone()];
        items.extend(left);
        items.extend(right);
        items
    }

    fn process_scale_obs_node(&mut self, node: &ScaleObsNode, child: Vec<String>) -> Vec<String> {
        let mut items = vec![node.gateway.address.clone()];
        items.extend(child);
        items
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Currency, Observable};

    #[test]
    fn test_if_gateway_ahead_of_branches() {
        let tree = Node::if_(
            Observable::at("cond"),
            Node::scale_obs(Observable::at("fx"), Node::one(Currency::Usd)),
            Node::zero(),
        );
        assert_eq!(GatewayCollector::collect(&tree), vec!["cond", "fx"]);
    }

    #[test]
    fn test_gateway_free_contract() {
        let tree = Node::and(
            Node::one(Currency::Usd),
            Node::timebound(10, 20, Node::give(Node::zero())),
        );
        assert!(GatewayCollector::collect(&tree).is_empty());
    }

    #[test]
    fn test_shared_gateway_reported_per_reference() {
        let fx = Observable::at("fx");
        let tree = Node::and(
            Node::scale_obs(fx.clone(), Node::zero()),
            Node::scale_obs(fx, Node::zero()),
        );
        assert_eq!(GatewayCollector::collect(&tree), vec!["fx", "fx"]);
    }

    #[test]
    fn test_nested_ifs_parent_first() {
        let tree = Node::if_(
            Observable::at("outer"),
            Node::if_(Observable::at("inner"), Node::zero(), Node::zero()),
            Node::zero(),
        );
        assert_eq!(GatewayCollector::collect(&tree), vec!["outer", "inner"]);
    }
}
