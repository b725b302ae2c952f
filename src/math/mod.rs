pub mod angle;

/// 3D point type. 2D drawings keep `z = 0`.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum distance at which two sample positions count as the same spot.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-9;
