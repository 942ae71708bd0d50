// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use deciduous::compile::compile;
use deciduous::format::parse_document;
use deciduous::theme::ThemeRegistry;

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `compile.graph`, `compile.dot`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (`small`, `medium`, `large`).
fn benches_compile(c: &mut Criterion) {
    let registry = ThemeRegistry::builtin();

    {
        let mut group = c.benchmark_group("compile.graph");
        for case in [fixtures::Case::Small, fixtures::Case::Medium, fixtures::Case::Large] {
            let source = fixtures::attack_tree_yaml(case);
            let document = parse_document(&source).expect("fixture parses");
            let edges: u64 = document
                .nodes()
                .map(|node| node.predecessors().len() as u64)
                .sum();
            group.throughput(Throughput::Elements(edges));
            group.bench_function(case.id(), |b| {
                b.iter(|| compile(black_box(&document), black_box(&registry)).expect("compile"))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("compile.dot");
        for case in [fixtures::Case::Small, fixtures::Case::Medium, fixtures::Case::Large] {
            let source = fixtures::attack_tree_yaml(case);
            let document = parse_document(&source).expect("fixture parses");
            let graph = compile(&document, &registry).expect("compile");
            group.throughput(Throughput::Elements(graph.nodes.len() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| black_box(&graph).to_dot())
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benches_compile);
criterion_main!(benches);
