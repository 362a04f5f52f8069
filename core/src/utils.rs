use palette::{FromColor, Hsv, Srgb};

// 2D height map: row-major Vec<Vec<f32>>, accessed as `map[y][x]`.
// Elevations sit in the FieldParams remap range, [-100, 100] by default.
pub type HeightMap2D = Vec<Vec<f32>>;

// Flatten a 2D height map (row-major) into a single Vec<f32>
// for image buffers and other flat consumers
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Linear remap of `v` from [in_lo, in_hi] to [out_lo, out_hi],
// the p5 `map()` equivalent. Not clamped.
#[inline]
pub fn remap(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (v - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

// Map an elevation to a color by sweeping the full hue circle across
// the elevation range (the sketch's HSB cell coloring)
pub fn elevation_to_rgb(elevation: f32, lo: f32, hi: f32) -> [u8; 3] {
    let hue = remap(elevation.clamp(lo, hi), lo, hi, 0.0, 360.0);
    let rgb = Srgb::from_color(Hsv::new(hue, 1.0, 1.0));
    let rgb = rgb.into_format::<u8>();
    [rgb.red, rgb.green, rgb.blue]
}

// Convert flat elevations into an RGB byte buffer for `image`
pub fn to_elevation_image(flat: &[f32], lo: f32, hi: f32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(flat.len() * 3);
    for &e in flat {
        buf.extend_from_slice(&elevation_to_rgb(e, lo, hi));
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::{elevation_to_rgb, flatten2, remap, to_elevation_image};

    #[test]
    fn flatten2_is_row_major() {
        let map = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn remap_endpoints_and_midpoint() {
        assert_eq!(remap(0.0, 0.0, 1.0, -100.0, 100.0), -100.0);
        assert_eq!(remap(1.0, 0.0, 1.0, -100.0, 100.0), 100.0);
        assert_eq!(remap(0.5, 0.0, 1.0, -100.0, 100.0), 0.0);
    }

    #[test]
    fn remap_keeps_unit_samples_in_elevation_range() {
        // Any noise output in [0, 1] must land inside the target range
        for i in 0..=1000 {
            let n = i as f32 / 1000.0;
            let e = remap(n, 0.0, 1.0, -100.0, 100.0);
            assert!((-100.0..=100.0).contains(&e));
        }
    }

    #[test]
    fn hue_sweep_covers_the_range() {
        // Low elevation is red (hue 0), mid is cyan-ish (hue 180)
        let lo = elevation_to_rgb(-100.0, -100.0, 100.0);
        assert_eq!(lo, [255, 0, 0]);
        let mid = elevation_to_rgb(0.0, -100.0, 100.0);
        assert_eq!(mid, [0, 255, 255]);
    }

    #[test]
    fn image_buffer_is_three_bytes_per_sample() {
        let buf = to_elevation_image(&[-100.0, 0.0, 100.0], -100.0, 100.0);
        assert_eq!(buf.len(), 9);
    }
}
