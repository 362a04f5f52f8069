// End-to-end animation tick: generate -> smooth -> extract, twice,
// checking that the pipeline is deterministic and only the offset
// advance changes anything between frames.

use core::{
    ContourExtractor, FieldParams, HeightField2D, NoiseOffset, Perlin2D, flatten2,
};

#[test]
fn test_tick_pipeline_determinism() {
    let noise = Perlin2D::new(42, 1.0, 0.5, 4);
    let params = FieldParams {
        smoothing: true,
        ..FieldParams::default()
    };
    let field = HeightField2D {
        noise: &noise,
        params,
    };
    let extractor = ContourExtractor { threshold: 5.0 };

    let offset = NoiseOffset::default();

    // Same offset twice: identical grid and identical segments
    let map_a = field.generate(640.0, 480.0, offset);
    let map_b = field.generate(640.0, 480.0, offset);
    assert_eq!(map_a, map_b);
    assert_eq!(extractor.extract(&map_a), extractor.extract(&map_b));

    // Advancing the offset actually moves the field
    let moved = field.generate(640.0, 480.0, offset.advanced(1.0));
    assert_ne!(flatten2(&map_a), flatten2(&moved));
}

#[test]
fn test_resize_changes_only_dimensions() {
    let noise = Perlin2D::new(42, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };
    let offset = NoiseOffset { x: 3.0, y: 7.0 };

    let small = field.generate(320.0, 240.0, offset);
    let large = field.generate(640.0, 480.0, offset);
    assert!(large.len() > small.len());
    assert!(large[0].len() > small[0].len());

    // Shared grid points sample the same noise coordinates, so the
    // smaller grid is a prefix of the larger one
    for (y, row) in small.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            assert_eq!(v, large[y][x]);
        }
    }
}

#[test]
fn test_segments_stay_inside_the_grid() {
    let noise = Perlin2D::new(7, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };
    let map = field.generate(800.0, 600.0, NoiseOffset::default());
    let cols = map[0].len() as f32;
    let rows = map.len() as f32;

    let segments = ContourExtractor { threshold: 5.0 }.extract(&map);
    assert!(!segments.is_empty(), "a varied field should cross elevation 5");
    for seg in &segments {
        for p in [seg.start, seg.end] {
            assert!(p.x >= 0.0 && p.x <= cols - 1.0);
            assert!(p.y >= 0.0 && p.y <= rows - 1.0);
        }
    }
}
