use crate::math::{Point3, COINCIDENCE_TOLERANCE};

/// Beam color, one `[0, 1]` intensity per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Full-intensity white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` (`t = 0`) to `other` (`t = 1`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t as f32;
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One scanner sample.
///
/// `is_corner` is decided by whoever builds the drawing (see
/// [`CornerClassifier`](super::CornerClassifier)); the optimizer only reads
/// it. `turning_angle` is written when a graphic is flattened into a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Point3,
    pub color: Color,
    pub is_blanked: bool,
    pub is_corner: bool,
    /// Radians in `[0, π]`; `0` = straight through, `π` = full reversal.
    pub turning_angle: f64,
}

impl Point {
    /// Creates a lit, smooth point.
    #[must_use]
    pub fn new(position: Point3, color: Color) -> Self {
        Self {
            position,
            color,
            is_blanked: false,
            is_corner: false,
            turning_angle: 0.0,
        }
    }

    /// Creates a lit, smooth 2D point in the default color.
    #[must_use]
    pub fn smooth(x: f64, y: f64) -> Self {
        Self::new(Point3::new(x, y, 0.0), Color::default())
    }

    /// Creates a lit 2D corner point in the default color.
    #[must_use]
    pub fn corner(x: f64, y: f64) -> Self {
        Self::smooth(x, y).with_corner(true)
    }

    /// Returns a copy with the corner flag set to `is_corner`.
    #[must_use]
    pub fn with_corner(mut self, is_corner: bool) -> Self {
        self.is_corner = is_corner;
        self
    }

    /// Returns a copy with the beam switched off.
    #[must_use]
    pub fn blanked(mut self) -> Self {
        self.is_blanked = true;
        self
    }

    /// Returns a copy in the given color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Euclidean distance between the two sample positions.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    /// Returns `true` if both samples address the same spot.
    ///
    /// Only positions are compared; color and flags are ignored.
    #[must_use]
    pub fn is_coincident(&self, other: &Self) -> bool {
        self.distance(other) <= COINCIDENCE_TOLERANCE
    }

    /// Returns the sample at parameter `t` on the segment `self → other`.
    ///
    /// Position and color are interpolated linearly. The result is lit, not
    /// a corner, and carries no turning angle.
    #[must_use]
    pub fn point_between(&self, other: &Self, t: f64) -> Self {
        let position = self.position + (other.position - self.position) * t;
        Self::new(position, self.color.lerp(&other.color, t))
    }
}
