use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use linked_bst::{BinarySearchTree, Order};

/// Tree sizes benched: full trees of 3, 7 and 11 levels. Sorted inserts make every operation
/// on the unbalanced shape linear, so it stops there.
const LEVELS: [u32; 3] = [3, 7, 11];

/// One tree shape at one size, built once and cloned for every measured batch.
struct Fixture {
    shape: &'static str,
    largest_key: i32,
    tree: BinarySearchTree<i32>,
}

/// Orders `keys` so that inserting them front to back builds a perfectly balanced tree: each
/// slice's middle key first, then the middles of both halves.
fn balanced_order(keys: &[i32], out: &mut Vec<i32>) {
    if !keys.is_empty() {
        let mid = keys.len() / 2;
        out.push(keys[mid]);
        balanced_order(&keys[..mid], out);
        balanced_order(&keys[mid + 1..], out);
    }
}

fn fixtures() -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for levels in LEVELS {
        let keys: Vec<i32> = (0..2i32.pow(levels) - 1).collect();
        let largest_key = keys.len() as i32 - 1;

        let mut balanced = Vec::with_capacity(keys.len());
        balanced_order(&keys, &mut balanced);

        fixtures.push(Fixture {
            shape: "unbalanced",
            largest_key,
            tree: keys.iter().copied().collect(),
        });
        fixtures.push(Fixture {
            shape: "balanced",
            largest_key,
            tree: balanced.into_iter().collect(),
        });
    }
    fixtures
}

/// Benches `f` against a fresh copy of every fixture, passing the fixture's largest key.
fn bench_op(
    c: &mut Criterion,
    fixtures: &[Fixture],
    name: &str,
    f: impl Fn(&mut BinarySearchTree<i32>, i32),
) {
    let mut group = c.benchmark_group(name);
    for fixture in fixtures {
        let id = BenchmarkId::new(fixture.shape, fixture.largest_key);
        group.bench_with_input(id, fixture, |b, fixture| {
            b.iter_batched_ref(
                || fixture.tree.clone(),
                |tree| f(tree, black_box(fixture.largest_key)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let fixtures = fixtures();

    bench_op(c, &fixtures, "search", |tree, i| {
        black_box(tree.search(&i));
    });
    bench_op(c, &fixtures, "search-miss", |tree, i| {
        black_box(tree.search(&(i + 1)));
    });
    bench_op(c, &fixtures, "find-parent", |tree, i| {
        black_box(tree.find_parent_of(&i));
    });
    bench_op(c, &fixtures, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_op(c, &fixtures, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_op(c, &fixtures, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
    bench_op(c, &fixtures, "delete-root", |tree, _| {
        if let Some(root) = tree.root().map(|n| *n.key()) {
            tree.delete(&root);
        }
    });
    bench_op(c, &fixtures, "inorder", |tree, _| {
        black_box(tree.keys(Order::Inorder));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
