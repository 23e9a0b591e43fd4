// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for contract tree traversal.

use crate::nodes::{
    AndNode, GiveNode, IfNode, OneNode, OrNode, ScaleNode, ScaleObsNode, TimeboundNode, ZeroNode,
};

/// Macro to generate hook signatures for binary combinators.
///
/// For a node type `FooNode` this generates a required
/// `process_foo_node(&mut self, node, left, right)` method. `left` and
/// `right` are the fully computed results of children 0 and 1.
macro_rules! binary_hooks {
    ($($(#[$meta:meta])* $node:ident),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Combine the children's results of an [`", stringify!($node), "`].")]
                #[doc = ""]
                #[doc = "`left` is the result of child 0, `right` the result of child 1;"]
                #[doc = "both are fully computed before this hook runs."]
                fn [<process_ $node:snake>](
                    &mut self,
                    node: &$node,
                    left: Self::Output,
                    right: Self::Output,
                ) -> Self::Output;
            )*
        }
    };
}

/// Macro to generate hook signatures for unary combinators.
macro_rules! unary_hooks {
    ($($(#[$meta:meta])* $node:ident),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Derive a result for a [`", stringify!($node), "`] from its child's result.")]
                fn [<process_ $node:snake>](
                    &mut self,
                    node: &$node,
                    child: Self::Output,
                ) -> Self::Output;
            )*
        }
    };
}

/// Macro to generate hook signatures for terminal nodes.
macro_rules! terminal_hooks {
    ($($(#[$meta:meta])* $node:ident),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Produce the result for a [`", stringify!($node), "`]. No recursion occurs.")]
                fn [<process_ $node:snake>](&mut self, node: &$node) -> Self::Output;
            )*
        }
    };
}

/// A whole-tree computation over contract trees.
///
/// [`visit`](crate::visitor::visit) drives the traversal: it inspects each
/// node's kind, recurses into children in positional order, and delegates
/// combination to the hook for that kind. Implement one hook per kind plus
/// the unknown fallback; the dispatcher supplies the recursion and ordering
/// contract but no combination semantics of its own.
///
/// Hooks take `&mut self`, so a traversal may carry its own accumulation
/// state. The tree itself is only ever borrowed read-only.
///
/// For ordered bottom-up aggregation, implement [`CollectingVisitor`]
/// instead and override only the hooks the analysis needs.
///
/// # Example
///
/// ```ignore
/// struct LeafCount;
///
/// impl Visitor for LeafCount {
///     type Output = usize;
///
///     fn process_one_node(&mut self, _node: &OneNode) -> usize {
///         1
///     }
///
///     fn process_and_node(&mut self, _node: &AndNode, left: usize, right: usize) -> usize {
///         left + right
///     }
///
///     // ... remaining hooks
/// }
/// ```
pub trait Visitor {
    /// Result type produced for every visited node.
    type Output;

    binary_hooks! {
        AndNode,
        OrNode,
        IfNode,
    }

    unary_hooks! {
        TimeboundNode,
        GiveNode,
        ScaleObsNode,
        ScaleNode,
    }

    terminal_hooks! {
        OneNode,
        ZeroNode,
    }

    /// Fallback for a node whose kind is outside the closed set.
    ///
    /// The dispatcher never recurses below an unknown node and never treats
    /// one as an error; whether to ignore, record, or reject it is this
    /// traversal's decision.
    fn process_unknown_node(&mut self) -> Self::Output;
}

// ============================================================================
// Collecting traversal
// ============================================================================

/// A bottom-up collector over contract trees.
///
/// The result of every node is an ordered `Vec<Self::Item>`. Default hooks
/// define a structural fold that invents nothing and loses nothing:
///
/// - binary kinds concatenate the left child's items followed by the
///   right's, preserving order and duplicates;
/// - unary kinds pass the child's items through unchanged;
/// - terminals and unknown nodes contribute no items.
///
/// On its own the fold returns an empty sequence for every tree. Override
/// the hooks for the kinds that matter to the analysis; the defaults
/// guarantee correct order-preserving composition for the rest of the tree.
///
/// Every `CollectingVisitor` is a [`Visitor`] with
/// `Output = Vec<Self::Item>` via a blanket impl, so it plugs directly into
/// [`visit`](crate::visitor::visit).
///
/// # Example
///
/// ```ignore
/// struct Currencies;
///
/// impl CollectingVisitor for Currencies {
///     type Item = Currency;
///
///     fn process_one_node(&mut self, node: &OneNode) -> Vec<Currency> {
///         vec![node.currency]
///     }
/// }
/// ```
pub trait CollectingVisitor {
    /// The item type accumulated across the tree.
    type Item;

    /// Items of child 0 followed by items of child 1.
    #[allow(unused_variables)]
    fn process_and_node(
        &mut self,
        node: &AndNode,
        left: Vec<Self::Item>,
        right: Vec<Self::Item>,
    ) -> Vec<Self::Item> {
        concat(left, right)
    }

    /// Items of child 0 followed by items of child 1.
    #[allow(unused_variables)]
    fn process_or_node(
        &mut self,
        node: &OrNode,
        left: Vec<Self::Item>,
        right: Vec<Self::Item>,
    ) -> Vec<Self::Item> {
        concat(left, right)
    }

    /// Items of child 0 followed by items of child 1.
    #[allow(unused_variables)]
    fn process_if_node(
        &mut self,
        node: &IfNode,
        left: Vec<Self::Item>,
        right: Vec<Self::Item>,
    ) -> Vec<Self::Item> {
        concat(left, right)
    }

    /// The child's items, unchanged.
    #[allow(unused_variables)]
    fn process_timebound_node(
        &mut self,
        node: &TimeboundNode,
        child: Vec<Self::Item>,
    ) -> Vec<Self::Item> {
        child
    }

    /// The child's items, unchanged.
    #[allow(unused_variables)]
    fn process_give_node(&mut self, node: &GiveNode, child: Vec<Self::Item>) -> Vec<Self::Item> {
        child
    }

    /// The child's items, unchanged.
    #[allow(unused_variables)]
    fn process_scale_obs_node(
        &mut self,
        node: &ScaleObsNode,
        child: Vec<Self::Item>,
    ) -> Vec<Self::Item> {
        child
    }

    /// The child's items, unchanged.
    #[allow(unused_variables)]
    fn process_scale_node(&mut self, node: &ScaleNode, child: Vec<Self::Item>) -> Vec<Self::Item> {
        child
    }

    /// No items.
    #[allow(unused_variables)]
    fn process_one_node(&mut self, node: &OneNode) -> Vec<Self::Item> {
        Vec::new()
    }

    /// No items.
    #[allow(unused_variables)]
    fn process_zero_node(&mut self, node: &ZeroNode) -> Vec<Self::Item> {
        Vec::new()
    }

    /// No items.
    fn process_unknown_node(&mut self) -> Vec<Self::Item> {
        Vec::new()
    }
}

fn concat<T>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut items = left;
    items.extend(right);
    items
}

impl<C: CollectingVisitor> Visitor for C {
    type Output = Vec<C::Item>;

    fn process_and_node(
        &mut self,
        node: &AndNode,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output {
        CollectingVisitor::process_and_node(self, node, left, right)
    }

    fn process_or_node(
        &mut self,
        node: &OrNode,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output {
        CollectingVisitor::process_or_node(self, node, left, right)
    }

    fn process_if_node(
        &mut self,
        node: &IfNode,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output {
        CollectingVisitor::process_if_node(self, node, left, right)
    }

    fn process_timebound_node(&mut self, node: &TimeboundNode, child: Self::Output) -> Self::Output {
        CollectingVisitor::process_timebound_node(self, node, child)
    }

    fn process_give_node(&mut self, node: &GiveNode, child: Self::Output) -> Self::Output {
        CollectingVisitor::process_give_node(self, node, child)
    }

    fn process_scale_obs_node(&mut self, node: &ScaleObsNode, child: Self::Output) -> Self::Output {
        CollectingVisitor::process_scale_obs_node(self, node, child)
    }

    fn process_scale_node(&mut self, node: &ScaleNode, child: Self::Output) -> Self::Output {
        CollectingVisitor::process_scale_node(self, node, child)
    }

    fn process_one_node(&mut self, node: &OneNode) -> Self::Output {
        CollectingVisitor::process_one_node(self, node)
    }

    fn process_zero_node(&mut self, node: &ZeroNode) -> Self::Output {
        CollectingVisitor::process_zero_node(self, node)
    }

    fn process_unknown_node(&mut self) -> Self::Output {
        CollectingVisitor::process_unknown_node(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Currency, Node, Observable};
    use crate::visitor::visit;

    /// A collector with no overrides at all.
    struct NoOverrides;

    impl CollectingVisitor for NoOverrides {
        type Item = Currency;
    }

    /// A collector that only overrides terminal behavior.
    struct CurrencyLeaves;

    impl CollectingVisitor for CurrencyLeaves {
        type Item = Currency;

        fn process_one_node(&mut self, node: &OneNode) -> Vec<Currency> {
            vec![node.currency]
        }
    }

    #[test]
    fn test_default_fold_is_empty() {
        // No hook invents items, so any tree collects to nothing.
        let tree = Node::timebound(
            0,
            10,
            Node::give(Node::scale(3, Node::one(Currency::Usd))),
        );
        assert!(visit(&mut NoOverrides, &tree).is_empty());
    }

    #[test]
    fn test_terminal_override_flows_through_combinators() {
        let tree = Node::and(
            Node::one(Currency::Usd),
            Node::give(Node::scale(2, Node::one(Currency::Eur))),
        );
        assert_eq!(
            visit(&mut CurrencyLeaves, &tree),
            vec![Currency::Usd, Currency::Eur]
        );
    }

    #[test]
    fn test_binary_result_is_left_then_right() {
        // Order preservation, duplicates included.
        let tree = Node::or(
            Node::and(Node::one(Currency::Eur), Node::one(Currency::Usd)),
            Node::one(Currency::Eur),
        );
        assert_eq!(
            visit(&mut CurrencyLeaves, &tree),
            vec![Currency::Eur, Currency::Usd, Currency::Eur]
        );
    }

    #[test]
    fn test_zero_contributes_nothing() {
        let tree = Node::or(Node::zero(), Node::one(Currency::Usd));
        assert_eq!(visit(&mut CurrencyLeaves, &tree), vec![Currency::Usd]);
    }

    #[test]
    fn test_if_override_emits_ahead_of_children() {
        // A collector mixing combinator and terminal contributions: the
        // observable's address is reported before either branch's items.
        struct Labels;

        impl CollectingVisitor for Labels {
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

            fn process_one_node(&mut self, node: &OneNode) -> Vec<String> {
                vec![node.currency.to_string()]
            }
        }

        let tree = Node::if_(
            Observable::at("obs"),
            Node::one(Currency::Usd),
            Node::one(Currency::Eur),
        );
        assert_eq!(visit(&mut Labels, &tree), vec!["obs", "USD", "EUR"]);
    }

    #[test]
    fn test_unknown_contributes_nothing_by_default() {
        let tree = Node::and(Node::Unknown, Node::one(Currency::Usd));
        assert_eq!(visit(&mut CurrencyLeaves, &tree), vec![Currency::Usd]);
    }
}
