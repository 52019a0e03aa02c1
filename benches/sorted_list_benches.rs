use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use rand::prelude::SliceRandom;
use sorted_linked_list::{Natural, Reverse, SortedLinkedList};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 5_000];

// Enum to define the operation mix
enum Workload {
    InsertHeavy, // 80% inserts, 20% lookups
    LookupHeavy, // 20% inserts, 80% lookups
    Mixed,       // 50% inserts, 50% lookups
}

impl Workload {
    fn insert_ratio(&self) -> u32 {
        match self {
            Workload::InsertHeavy => 80,
            Workload::LookupHeavy => 20,
            Workload::Mixed => 50,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Workload::InsertHeavy => "insert_heavy",
            Workload::LookupHeavy => "lookup_heavy",
            Workload::Mixed => "mixed",
        }
    }
}

fn filled(size: usize) -> SortedLinkedList<u64> {
    let mut values: Vec<u64> = (0..size as u64).collect();
    values.shuffle(&mut rand::rng());
    let mut list = SortedLinkedList::new();
    for value in values {
        list.insert(value);
    }
    list
}

// --- Insertion from shuffled input ---

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_shuffled");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_with_setup(
                || {
                    let mut values: Vec<u64> = (0..size as u64).collect();
                    values.shuffle(&mut rand::rng());
                    values
                },
                |values| {
                    let mut list = SortedLinkedList::with_comparator(Reverse(Natural));
                    for value in values {
                        list.insert(value);
                    }
                    black_box(list.len())
                },
            );
        });
    }

    group.finish();
}

// --- Mixed insert / lookup workloads ---

fn workload_benchmark(c: &mut Criterion, workload: Workload) {
    let mut group = c.benchmark_group(format!("sorted_list_{}", workload.name()));
    let insert_ratio = workload.insert_ratio();

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_with_setup(
                || filled(size),
                |mut list| {
                    let mut rng = rand::rng();
                    for _ in 0..size {
                        let value = rng.random_range(0..size as u64 * 2);
                        if rng.random_range(0..100) < insert_ratio {
                            list.insert(value);
                        } else {
                            black_box(list.contains(&value));
                        }
                    }
                    list
                },
            );
        });
    }

    group.finish();
}

// --- Traversal and positional access ---

fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in SIZES {
        let list = filled(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("iter_sum", size), &list, |b, list| {
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
        group.bench_with_input(BenchmarkId::new("get_last", size), &list, |b, list| {
            b.iter(|| black_box(list.get(size - 1).ok().copied()));
        });
    }

    group.finish();
}

fn workloads(c: &mut Criterion) {
    workload_benchmark(c, Workload::Mixed);
    workload_benchmark(c, Workload::LookupHeavy);
    workload_benchmark(c, Workload::InsertHeavy);
}

criterion_group!(benches, insert_benchmark, workloads, traversal_benchmark);
criterion_main!(benches);
