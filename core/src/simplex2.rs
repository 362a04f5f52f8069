use crate::NoiseGenerator;

// 2D simplex noise with octave summation, normalized to [0, 1]
// Alternative field source to Perlin2D; simplex splits the plane into
// equilateral triangles instead of squares, which gives the animated
// surface a more uniform look in all directions
pub struct Simplex2D {
    frequency: f64,
    persistence: f64,
    octaves: usize,
    perm: [u8; 512],
}

// The 12 unit-ish gradient directions of the reference implementation
const GRAD2: [(i8, i8); 12] = [
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

impl Simplex2D {
    pub fn new(seed: u64, frequency: f64, persistence: f64, octaves: usize) -> Self {
        assert!(octaves >= 1, "octaves must be at least 1");
        assert!(
            frequency.is_finite() && frequency > 0.0,
            "frequency must be positive and finite"
        );

        // Same seeded permutation-table construction as Perlin2D
        let mut table: Vec<u8> = (0..256).map(|i| i as u8).collect();
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15_u64;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state & 0xFF) as u8
        };
        for i in (1..256).rev() {
            let j = (next() as usize) % (i + 1);
            table.swap(i, j);
        }
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self {
            frequency,
            persistence,
            octaves,
            perm,
        }
    }

    #[inline]
    fn dot(g: (i8, i8), x: f64, y: f64) -> f64 {
        (g.0 as f64) * x + (g.1 as f64) * y
    }

    // Single-octave simplex noise at (xin, yin), roughly in [−1, 1]
    fn raw_noise(&self, xin: f64, yin: f64) -> f64 {
        const SQRT_3: f64 = 1.732_050_807_568_877_2;
        // Skew factor mapping squares onto rhombi of equilateral triangles,
        // and its inverse
        const F2: f64 = 0.5 * (SQRT_3 - 1.0);
        const G2: f64 = (3.0 - SQRT_3) / 6.0;

        // Which skewed cell the point falls in
        let s = (xin + yin) * F2;
        let i = (xin + s).floor() as i64;
        let j = (yin + s).floor() as i64;

        // Unskew to get the offset from the cell origin
        let t = (i + j) as f64 * G2;
        let x0 = xin - (i as f64 - t);
        let y0 = yin - (j as f64 - t);

        // Lower or upper triangle of the rhombus
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        // Hash the three triangle corners into gradient picks
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let gi0 = (self.perm[ii + self.perm[jj] as usize] as usize) % 12;
        let gi1 = (self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize) % 12;
        let gi2 = (self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize) % 12;

        // Radial falloff contribution from each corner
        let mut total = 0.0;
        for &(dx, dy, gi) in &[(x0, y0, gi0), (x1, y1, gi1), (x2, y2, gi2)] {
            let falloff = 0.5 - dx * dx - dy * dy;
            if falloff > 0.0 {
                let f2 = falloff * falloff;
                total += f2 * f2 * Self::dot(GRAD2[gi], dx, dy);
            }
        }

        // Empirical scale bringing the sum into roughly [−1, 1]
        70.0 * total
    }
}

impl NoiseGenerator for Simplex2D {
    fn get2(&self, x: f64, y: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut freq = self.frequency;
        let mut total = 0.0;
        let mut max_amp = 0.0;

        for _ in 0..self.octaves {
            total += self.raw_noise(x * freq, y * freq) * amplitude;
            max_amp += amplitude;
            amplitude *= self.persistence;
            freq *= 2.0;
        }

        // Shift [−1, 1] into the [0, 1] trait contract; the 70.0 scale
        // above is approximate, so clamp the rare overshoot
        ((total / max_amp) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}
