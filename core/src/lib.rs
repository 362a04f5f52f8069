// core holds the heightfield generation and isoline extraction algorithms
pub mod contour;
pub mod heightfield;
pub mod perlin2;
pub mod simplex2;
pub mod utils;

pub use contour::{ContourExtractor, ContourSegment, Pt};
pub use heightfield::{FieldParams, HeightField2D, NeighborSmooth2D, NoiseOffset};
pub use perlin2::Perlin2D;
pub use simplex2::Simplex2D;
pub use utils::flatten2;

// Coherent noise source sampled by the heightfield.
// Contract: `get2` returns a value in [0, 1] and is continuous in both
// inputs (nearby sample points give nearby values); the heightfield
// relies on this to produce a smooth surface with no seams.
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y), result in [0, 1]
    fn get2(&self, x: f64, y: f64) -> f64;
}
