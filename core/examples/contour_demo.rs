use core::{ContourExtractor, FieldParams, HeightField2D, NoiseOffset, Perlin2D};

fn main() {
    // Sample a 800×600 viewport with the default animation parameters
    let noise = Perlin2D::new(2025, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params: FieldParams::default(),
    };

    let mut offset = NoiseOffset::default();
    let extractor = ContourExtractor { threshold: 5.0 };

    // Run a few animation ticks and report how the isoline evolves
    for tick in 0..5 {
        let map = field.generate(800.0, 600.0, offset);
        let segments = extractor.extract(&map);
        println!(
            "tick {}: {}x{} grid, {} contour segments at elevation 5",
            tick,
            map.first().map_or(0, |row| row.len()),
            map.len(),
            segments.len()
        );
        offset = offset.advanced(field.params.speed);
    }

    // Show a handful of segments from the last tick
    let map = field.generate(800.0, 600.0, offset);
    for seg in extractor.extract(&map).iter().take(8) {
        println!(
            "  ({:>6.2}, {:>6.2}) -> ({:>6.2}, {:>6.2})",
            seg.start.x, seg.start.y, seg.end.x, seg.end.y
        );
    }
}
