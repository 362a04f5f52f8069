use crate::utils::HeightMap2D;

// A point in grid coordinates: x in cells along a row, y in rows.
// Callers multiply by their cell scale when projecting to the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pt {
    pub x: f32,
    pub y: f32,
}

// One piece of the isoline crossing a single cell. Segments are
// independent of each other; their emission order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourSegment {
    pub start: Pt,
    pub end: Pt,
}

// The four edges of a marching-squares cell
#[derive(Debug, Clone, Copy, PartialEq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

use Edge::{Bottom, Left, Right, Top};

// state -> edge pairs to connect, indexed by 8a + 4b + 2c + d where
// a..d are the ≥-threshold bits of the top-left, top-right,
// bottom-right and bottom-left corners.
//
// States 5 (b,d high) and 10 (a,c high) are saddles: two topologies are
// valid and the corner values alone cannot tell them apart. The fixed
// rule here draws the pair of segments that each hug one high corner
// along the cell's main diagonals, which can misrepresent the true
// surface near a saddle but is deterministic and cheap. Disambiguating
// with the cell's center average would be the cleaner alternative.
const CELL_SEGMENTS: [&[(Edge, Edge)]; 16] = [
    &[],                             // 0b0000: fully below
    &[(Left, Bottom)],               // 0b0001: d
    &[(Bottom, Right)],              // 0b0010: c
    &[(Left, Right)],                // 0b0011: c, d
    &[(Top, Right)],                 // 0b0100: b
    &[(Top, Right), (Bottom, Left)], // 0b0101: b, d (saddle)
    &[(Top, Bottom)],                // 0b0110: b, c
    &[(Left, Top)],                  // 0b0111: b, c, d
    &[(Left, Top)],                  // 0b1000: a
    &[(Top, Bottom)],                // 0b1001: a, d
    &[(Left, Top), (Right, Bottom)], // 0b1010: a, c (saddle)
    &[(Top, Right)],                 // 0b1011: a, c, d
    &[(Left, Right)],                // 0b1100: a, b
    &[(Bottom, Right)],              // 0b1101: a, b, d
    &[(Left, Bottom)],               // 0b1110: a, b, c
    &[],                             // 0b1111: fully above
];

// Extracts the elevation = threshold isoline from a height map as
// per-cell line segments (marching squares)
pub struct ContourExtractor {
    pub threshold: f32,
}

impl ContourExtractor {
    // Pure function of (map, threshold): every call over the same input
    // yields the same segments in the same row-major cell order.
    // Maps with fewer than 2 rows or 2 columns contain no cells and
    // extract to nothing.
    pub fn extract(&self, map: &HeightMap2D) -> Vec<ContourSegment> {
        assert!(self.threshold.is_finite(), "threshold must be finite");
        let rows = map.len();
        if rows < 2 {
            return Vec::new();
        }
        let cols = map[0].len();
        if cols < 2 {
            return Vec::new();
        }

        let mut segments = Vec::new();
        for j in 0..rows - 1 {
            for i in 0..cols - 1 {
                // Corner elevations, clockwise from top-left
                let a = map[j][i];
                let b = map[j][i + 1];
                let c = map[j + 1][i + 1];
                let d = map[j + 1][i];

                // == threshold counts as above: the ≥ rule keeps the
                // classification stable under floating-point values that
                // land exactly on the isoline
                let state = (usize::from(a >= self.threshold) << 3)
                    | (usize::from(b >= self.threshold) << 2)
                    | (usize::from(c >= self.threshold) << 1)
                    | usize::from(d >= self.threshold);

                for &(e0, e1) in CELL_SEGMENTS[state] {
                    segments.push(ContourSegment {
                        start: self.crossing(e0, i, j, a, b, c, d),
                        end: self.crossing(e1, i, j, a, b, c, d),
                    });
                }
            }
        }
        segments
    }

    // Where the isoline crosses the given edge of cell (i, j), by
    // linear interpolation between the edge's corner values
    fn crossing(&self, edge: Edge, i: usize, j: usize, a: f32, b: f32, c: f32, d: f32) -> Pt {
        let (x, y) = (i as f32, j as f32);
        match edge {
            Top => Pt {
                x: x + Self::fraction(a, b, self.threshold),
                y,
            },
            Right => Pt {
                x: x + 1.0,
                y: y + Self::fraction(b, c, self.threshold),
            },
            Bottom => Pt {
                x: x + Self::fraction(d, c, self.threshold),
                y: y + 1.0,
            },
            Left => Pt {
                x,
                y: y + Self::fraction(a, d, self.threshold),
            },
        }
    }

    // Crossing fraction along an edge from value v0 to v1. The ≥
    // classification means a table-selected edge always brackets the
    // threshold, but exact float equality can still make v1 − v0
    // vanish; fall back to the edge midpoint instead of dividing by
    // zero, and clamp against boundary rounding.
    #[inline]
    fn fraction(v0: f32, v1: f32, threshold: f32) -> f32 {
        let t = (threshold - v0) / (v1 - v0);
        if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 }
    }
}
