use criterion::{black_box, criterion_group, criterion_main, Criterion};
use explore_layout::{ExplorePost, PostType, TileGroupingEngine, ViewportColumns};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_posts(count: usize, rng: &mut StdRng) -> Vec<ExplorePost> {
    let types = [
        PostType::Image,
        PostType::Video,
        PostType::Discussion,
        PostType::Poll,
    ];

    (0..count)
        .map(|i| {
            ExplorePost::new(
                format!("post-{}", i),
                types[rng.gen_range(0..types.len())],
                rng.gen_range(0..1000),
            )
        })
        .collect()
}

/// Benchmark plan() across feed sizes
fn bench_tile_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_grouping");
    let engine = TileGroupingEngine::default();
    let mut rng = StdRng::seed_from_u64(42);

    for post_count in [100, 1000, 10000].iter() {
        let posts = generate_posts(*post_count, &mut rng);

        group.bench_with_input(format!("plan_{}_posts", post_count), &posts, |b, posts| {
            b.iter(|| engine.plan(black_box(posts), ViewportColumns::Three).len());
        });
    }

    group.finish();
}

/// Identical scores force the pairing path on every step
fn bench_tile_grouping_flat_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_grouping_flat");
    let engine = TileGroupingEngine::default();

    for post_count in [100, 1000, 10000].iter() {
        let posts: Vec<_> = (0..*post_count)
            .map(|i| ExplorePost::new(format!("post-{}", i), PostType::Image, 50))
            .collect();

        group.bench_with_input(format!("flat_{}_posts", post_count), &posts, |b, posts| {
            b.iter(|| engine.plan(black_box(posts), ViewportColumns::Two).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tile_grouping, bench_tile_grouping_flat_scores);
criterion_main!(benches);
