// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Performance benchmarks for contract tree traversal.
//!
//! Run with:
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Categories
//!
//! 1. **Wide trees**: balanced `And` trees, measuring dispatch and
//!    bottom-up concatenation across many leaves.
//! 2. **Deep trees**: unary combinator chains, measuring recursion and
//!    pass-through hooks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fincontract_ast::{Currency, CurrencyCollector, GatewayCollector, Node, Observable, CURRENCIES};
use std::hint::black_box;

// =============================================================================
// Tree Generation
// =============================================================================

/// A balanced `And` tree with `2^depth` leaves cycling the registry.
fn balanced_tree(depth: u32, next_leaf: &mut usize) -> Node {
    if depth == 0 {
        let currency = CURRENCIES[*next_leaf % CURRENCIES.len()];
        *next_leaf += 1;
        return Node::one(currency);
    }
    Node::and(
        balanced_tree(depth - 1, next_leaf),
        balanced_tree(depth - 1, next_leaf),
    )
}

/// A chain of `len` unary combinators over a single leaf.
fn chain_tree(len: u64) -> Node {
    let mut node = Node::one(Currency::Usd);
    for i in 0..len {
        node = match i % 4 {
            0 => Node::give(node),
            1 => Node::scale(2, node),
            2 => Node::scale_obs(Observable::at(format!("0x{i:04x}")), node),
            _ => Node::timebound(0, i, node),
        };
    }
    node
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_wide_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide");
    for depth in [8_u32, 12, 16] {
        let mut next_leaf = 0;
        let tree = balanced_tree(depth, &mut next_leaf);
        let nodes = (1_u64 << (depth + 1)) - 1;
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::new("currencies", nodes), &tree, |b, tree| {
            b.iter(|| CurrencyCollector::collect(black_box(tree)));
        });
    }
    group.finish();
}

fn bench_deep_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep");
    for len in [64_u64, 512, 4096] {
        let tree = chain_tree(len);
        group.throughput(Throughput::Elements(len + 1));
        group.bench_with_input(BenchmarkId::new("gateways", len), &tree, |b, tree| {
            b.iter(|| GatewayCollector::collect(black_box(tree)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wide_trees, bench_deep_trees);
criterion_main!(benches);
