use crate::NoiseGenerator;
use crate::utils::{HeightMap2D, remap};

// Knobs for one generation pass. The three animation presets of the
// original sketch (triangle mesh, cell grid, contour lines) are just
// different values of these fields, never separate code paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub scale: f64,         // world units per grid cell, > 0
    pub buffer: f64,        // fraction trimmed from each viewport edge, [0, 0.5)
    pub frequency: f64,     // noise sampling step per grid unit
    pub speed: f64,         // per-tick offset advance
    pub elevation_min: f32, // low end of the remapped elevation range
    pub elevation_max: f32, // high end of the remapped elevation range
    pub smoothing: bool,    // run one neighbor-rule pass after sampling
    pub smooth_threshold: f32,
    pub smooth_delta: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            scale: 15.0,
            buffer: 0.05,
            frequency: 0.1,
            speed: 0.001,
            elevation_min: -100.0,
            elevation_max: 100.0,
            smoothing: false,
            smooth_threshold: 0.0,
            smooth_delta: 5.0,
        }
    }
}

impl FieldParams {
    // Invalid parameters are programming errors, caught here rather than
    // deep inside sampling
    fn validate(&self) {
        assert!(
            self.scale.is_finite() && self.scale > 0.0,
            "scale must be positive and finite"
        );
        assert!(
            (0.0..0.5).contains(&self.buffer),
            "buffer fraction must lie in [0, 0.5)"
        );
        assert!(
            self.frequency.is_finite() && self.frequency > 0.0,
            "frequency must be positive and finite"
        );
        assert!(
            self.elevation_min.is_finite()
                && self.elevation_max.is_finite()
                && self.elevation_min < self.elevation_max,
            "elevation range must be finite and ordered"
        );
    }
}

// Where in noise space the field is currently sampled. Advancing both
// components a little each tick is what makes the terrain evolve.
// Unbounded and monotonic: gradient noise stays well behaved over large
// coordinates, though after ~1e12 ticks at the default speed the f64
// increments would start rounding away. Reset on reinitialization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoiseOffset {
    pub x: f64,
    pub y: f64,
}

impl NoiseOffset {
    // Next tick's offset; generation itself never mutates the offset,
    // the caller advances it between frames
    #[must_use]
    pub fn advanced(self, speed: f64) -> Self {
        Self {
            x: self.x + speed,
            y: self.y + speed,
        }
    }
}

// Samples a borrowed noise source into a rows × cols elevation grid
pub struct HeightField2D<'a> {
    pub noise: &'a dyn NoiseGenerator,
    pub params: FieldParams,
}

impl HeightField2D<'_> {
    // Generate a fresh grid for one tick. `width`/`height` is the live
    // viewport; the buffer fraction is trimmed from every edge before
    // dividing by the cell scale, so resizing the window simply changes
    // the grid dimensions on the next call. A viewport too small for a
    // single cell yields an empty map, not an error.
    pub fn generate(&self, width: f64, height: f64, offset: NoiseOffset) -> HeightMap2D {
        self.params.validate();
        assert!(
            width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0,
            "viewport dimensions must be finite and non-negative"
        );
        assert!(
            offset.x.is_finite() && offset.y.is_finite(),
            "noise offset must be finite"
        );

        let usable_w = width * (1.0 - 2.0 * self.params.buffer);
        let usable_h = height * (1.0 - 2.0 * self.params.buffer);
        let cols = (usable_w / self.params.scale).floor() as usize;
        let rows = (usable_h / self.params.scale).floor() as usize;

        let f = self.params.frequency;
        let (lo, hi) = (self.params.elevation_min, self.params.elevation_max);

        let mut map: HeightMap2D = Vec::with_capacity(rows);
        for y in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for x in 0..cols {
                let n = self
                    .noise
                    .get2(x as f64 * f + offset.x, y as f64 * f + offset.y);
                row.push(remap(n as f32, 0.0, 1.0, lo, hi));
            }
            map.push(row);
        }

        if self.params.smoothing {
            NeighborSmooth2D {
                threshold: self.params.smooth_threshold,
                delta: self.params.smooth_delta,
            }
            .apply(&mut map);
        }

        map
    }
}

// Single-pass cellular-automaton perturbation: interior points move up
// when most of their 8 neighbors sit above the threshold and down when
// almost none do. One pass over a fresh grid, never iterated to a
// fixed point.
pub struct NeighborSmooth2D {
    pub threshold: f32,
    pub delta: f32,
}

impl NeighborSmooth2D {
    // In-place apply to the height map
    pub fn apply(&self, map: &mut HeightMap2D) {
        let rows = map.len();
        if rows < 3 {
            return;
        }
        let cols = map[0].len();
        if cols < 3 {
            return;
        }

        // Accumulate adjustments against the pre-pass values so earlier
        // writes cannot bias later neighbor counts
        let mut delta = vec![vec![0.0f32; cols]; rows];

        for y in 1..rows - 1 {
            for x in 1..cols - 1 {
                let mut above = 0;
                for &(dy, dx) in &[
                    (-1, -1),
                    (-1, 0),
                    (-1, 1),
                    (0, -1),
                    (0, 1),
                    (1, -1),
                    (1, 0),
                    (1, 1),
                ] {
                    let ny = (y as isize + dy) as usize;
                    let nx = (x as isize + dx) as usize;
                    if map[ny][nx] > self.threshold {
                        above += 1;
                    }
                }
                if above > 4 {
                    delta[y][x] = self.delta;
                } else if above < 2 {
                    delta[y][x] = -self.delta;
                }
            }
        }

        for y in 0..rows {
            for x in 0..cols {
                map[y][x] += delta[y][x];
            }
        }
    }
}
