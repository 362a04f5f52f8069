use core::{
    ContourExtractor, FieldParams, HeightField2D, NeighborSmooth2D, NoiseOffset, Perlin2D,
    Simplex2D,
};
use criterion::{Criterion, criterion_group, criterion_main};

const WIDTH: f64 = 1920.0;
const HEIGHT: f64 = 1080.0;
const SEED: u64 = 2025;

fn bench_generate_perlin(c: &mut Criterion) {
    let noise = Perlin2D::new(SEED, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };
    c.bench_function("HeightField2D generate (Perlin2D, 1080p viewport)", |b| {
        b.iter(|| field.generate(WIDTH, HEIGHT, NoiseOffset::default()))
    });
}

fn bench_generate_simplex(c: &mut Criterion) {
    let noise = Simplex2D::new(SEED, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };
    c.bench_function("HeightField2D generate (Simplex2D, 1080p viewport)", |b| {
        b.iter(|| field.generate(WIDTH, HEIGHT, NoiseOffset::default()))
    });
}

fn bench_neighbor_smooth(c: &mut Criterion) {
    let noise = Perlin2D::new(SEED, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };
    let map = field.generate(WIDTH, HEIGHT, NoiseOffset::default());
    let smooth = NeighborSmooth2D {
        threshold: 0.0,
        delta: 5.0,
    };
    c.bench_function("NeighborSmooth2D single pass", |b| {
        b.iter(|| {
            let mut m = map.clone();
            smooth.apply(&mut m);
            m
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    let noise = Perlin2D::new(SEED, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };
    let map = field.generate(WIDTH, HEIGHT, NoiseOffset::default());
    let extractor = ContourExtractor { threshold: 5.0 };
    c.bench_function("ContourExtractor extract", |b| b.iter(|| extractor.extract(&map)));
}

fn bench_full_tick(c: &mut Criterion) {
    // The whole per-frame pipeline: generate + smooth + extract + advance
    let noise = Perlin2D::new(SEED, 1.0, 0.5, 4);
    let params = FieldParams {
        smoothing: true,
        ..FieldParams::default()
    };
    let field = HeightField2D {
        noise: &noise,
        params,
    };
    let extractor = ContourExtractor { threshold: 5.0 };
    c.bench_function("full animation tick (generate + smooth + extract)", |b| {
        let mut offset = NoiseOffset::default();
        b.iter(|| {
            let map = field.generate(WIDTH, HEIGHT, offset);
            let segments = extractor.extract(&map);
            offset = offset.advanced(params.speed);
            segments
        })
    });
}

criterion_group!(
    benches,
    bench_generate_perlin,
    bench_generate_simplex,
    bench_neighbor_smooth,
    bench_extract,
    bench_full_tick
);
criterion_main!(benches);
