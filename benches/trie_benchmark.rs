use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use radix_lookup::RadixTree;
use std::collections::{BTreeSet, HashSet};

fn command_keys() -> Vec<String> {
    let stems = ["help", "version", "verbose", "input", "output", "config", "check", "cheat"];
    let mut keys: Vec<String> = stems.iter().map(|s| (*s).to_string()).collect();
    keys.extend((0..1000).map(|i| format!("{}-{:04}", stems[i % stems.len()], i)));
    keys
}

fn queries(keys: &[String]) -> Vec<String> {
    keys.iter()
        .enumerate()
        .map(|(i, k)| if i % 2 == 0 { format!("{k}=value") } else { k.clone() })
        .collect()
}

fn bench_trie_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_build");
    let keys = command_keys();
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("radix_tree_build", |b| {
        b.iter(|| black_box(RadixTree::build(&keys)));
    });

    group.bench_function("std_btreeset_build", |b| {
        b.iter(|| black_box(keys.iter().map(String::as_bytes).collect::<BTreeSet<_>>()));
    });

    group.bench_function("std_hashset_build", |b| {
        b.iter(|| black_box(keys.iter().map(String::as_bytes).collect::<HashSet<_>>()));
    });

    group.finish();
}

fn bench_trie_lookup_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_lookup_exact");
    let keys = command_keys();
    group.throughput(Throughput::Elements(keys.len() as u64));

    let tree = RadixTree::build(&keys);
    group.bench_function("radix_tree_lookup_exact", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(tree.lookup_exact(key));
            }
        });
    });

    let set: HashSet<&[u8]> = keys.iter().map(String::as_bytes).collect();
    group.bench_function("std_hashset_contains", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key.as_bytes()));
            }
        });
    });

    group.finish();
}

fn bench_trie_lookup_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_lookup_prefix");
    let keys = command_keys();
    let queries = queries(&keys);
    group.throughput(Throughput::Elements(queries.len() as u64));

    let tree = RadixTree::build(&keys);
    group.bench_function("radix_tree_lookup_prefix", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(tree.lookup_prefix(query));
            }
        });
    });

    // Linear scan over every prefix length, longest first.
    let set: BTreeSet<&[u8]> = keys.iter().map(String::as_bytes).collect();
    group.bench_function("std_btreeset_prefix_scan", |b| {
        b.iter(|| {
            for query in &queries {
                let bytes = query.as_bytes();
                let hit = (0..=bytes.len()).rev().find(|&n| set.contains(&bytes[..n]));
                black_box(hit);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_trie_build, bench_trie_lookup_exact, bench_trie_lookup_prefix);
criterion_main!(benches);
