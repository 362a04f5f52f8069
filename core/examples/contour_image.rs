use core::utils::elevation_to_rgb;
use core::{ContourExtractor, FieldParams, HeightField2D, NoiseOffset, Perlin2D, Pt};
use image::{Rgb, RgbImage};

// Plot a line segment into the image by stepping along its length
// (segments span at most one cell, so a fixed step count is plenty)
fn draw_segment(img: &mut RgbImage, start: Pt, end: Pt, scale: f32, color: Rgb<u8>) {
    const STEPS: u32 = 32;
    for k in 0..=STEPS {
        let t = k as f32 / STEPS as f32;
        let x = (start.x + (end.x - start.x) * t) * scale;
        let y = (start.y + (end.y - start.y) * t) * scale;
        let (px, py) = (x.round() as u32, y.round() as u32);
        if px < img.width() && py < img.height() {
            img.put_pixel(px, py, color);
        }
    }
}

fn main() {
    let params = FieldParams {
        scale: 10.0,
        smoothing: true,
        ..FieldParams::default()
    };
    let noise = Perlin2D::new(2025, 1.0, 0.5, 4);
    let field = HeightField2D {
        noise: &noise,
        params,
    };

    // One animation frame, a little way into the drift
    let offset = NoiseOffset::default().advanced(params.speed * 300.0);
    let map = field.generate(1024.0, 768.0, offset);
    let rows = map.len();
    let cols = map.first().map_or(0, |row| row.len());

    // Paint each cell with its elevation hue
    let scale = params.scale as f32;
    let mut img = RgbImage::new(cols as u32 * scale as u32, rows as u32 * scale as u32);
    for (y, row) in map.iter().enumerate() {
        for (x, &elevation) in row.iter().enumerate() {
            let [r, g, b] = elevation_to_rgb(elevation, params.elevation_min, params.elevation_max);
            for dy in 0..scale as u32 {
                for dx in 0..scale as u32 {
                    img.put_pixel(x as u32 * scale as u32 + dx, y as u32 * scale as u32 + dy, Rgb([r, g, b]));
                }
            }
        }
    }

    // Overlay the isoline in white
    let segments = ContourExtractor { threshold: 5.0 }.extract(&map);
    for seg in &segments {
        draw_segment(&mut img, seg.start, seg.end, scale, Rgb([255, 255, 255]));
    }

    let path = "contours.png";
    img.save(path).expect("failed to write image");
    println!(
        "wrote {} ({}x{} grid, {} segments)",
        path, cols, rows, segments.len()
    );
}
