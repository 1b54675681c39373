use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use streamsort::sort::{heap_sort, treap_sort, TreapSort};

const NUM_OF_OPERATIONS: usize = 1_000;

fn random_values(len: usize) -> Vec<u32> {
    let mut rng: rand::XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    (0..len).map(|_| rng.next_u32()).collect()
}

fn bench_heap_sort(c: &mut Criterion) {
    let values = random_values(NUM_OF_OPERATIONS);
    c.bench_function("bench heap sort", move |b| {
        b.iter(|| {
            black_box(heap_sort(values.clone()).collect::<Vec<u32>>());
        })
    });
}

fn bench_heap_sort_smallest_ten(c: &mut Criterion) {
    let values = random_values(NUM_OF_OPERATIONS);
    c.bench_function("bench heap sort smallest ten", move |b| {
        b.iter(|| {
            black_box(heap_sort(values.clone()).take(10).collect::<Vec<u32>>());
        })
    });
}

fn bench_treap_sort(c: &mut Criterion) {
    let values = random_values(NUM_OF_OPERATIONS);
    c.bench_function("bench treap sort", move |b| {
        b.iter(|| {
            black_box(treap_sort(values.clone()).collect::<Vec<u32>>());
        })
    });
}

fn bench_treap_sort_insert(c: &mut Criterion) {
    let values = random_values(NUM_OF_OPERATIONS);
    c.bench_function("bench treap sort insert", move |b| {
        b.iter(|| {
            let mut sorter = TreapSort::new();
            for value in &values {
                sorter.insert(*value);
            }
            black_box(sorter.len());
        })
    });
}

criterion_group!(
    benches,
    bench_heap_sort,
    bench_heap_sort_smallest_ten,
    bench_treap_sort,
    bench_treap_sort_insert,
);
criterion_main!(benches);
