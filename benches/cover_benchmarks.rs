use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geohashes::{BoundingBox, Geohashes, Point};

fn benchmark_point_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_cover");

    let point = Point::new(37.754309, -122.420382);
    for precision in [5, 8, 12] {
        group.bench_with_input(
            BenchmarkId::new("generic_point", precision),
            &precision,
            |b, &precision| b.iter(|| Geohashes::new(black_box(&point), precision).len()),
        );
    }

    let corner = Point::new(0.0, 0.0);
    group.bench_function("cell_corner_8", |b| {
        b.iter(|| Geohashes::new(black_box(&corner), 8).len())
    });

    group.finish();
}

fn benchmark_box_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_cover");

    let bay_area = BoundingBox::new(36.476381, -123.870108, 39.44667, -120.804922);
    for precision in [3, 4, 5] {
        group.bench_with_input(
            BenchmarkId::new("bay_area", precision),
            &precision,
            |b, &precision| {
                b.iter(|| {
                    let cover = Geohashes::new(black_box(&bay_area), precision);
                    cover.all().map(|all| all.len()).unwrap_or(0)
                })
            },
        );
    }

    let bering = BoundingBox::new(41.74172, 170.737608, 46.95318, -165.53192);
    group.bench_function("antimeridian_3", |b| {
        b.iter(|| Geohashes::new(black_box(&bering), 3).len())
    });

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for hash in ["9q8", "9q8yy2b", "s01menzzzzzz"] {
        group.bench_with_input(BenchmarkId::new("hash_box", hash.len()), hash, |b, hash| {
            b.iter(|| Geohashes::hash_box(black_box(hash)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_point_cover,
    benchmark_box_cover,
    benchmark_decode
);
criterion_main!(benches);
