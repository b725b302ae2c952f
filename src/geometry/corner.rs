use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::angle::turning_angle;

use super::Shape;

/// Marks points of a stroke as corners from its geometry.
///
/// A point is a corner when the path turns by at least `threshold` radians
/// there. Stroke endpoints are always corners, since the mirrors stop or
/// start moving at them. The optimizer never runs this itself; drawing code
/// decides whether to use it or to set [`Point::is_corner`](super::Point)
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct CornerClassifier {
    threshold: f64,
}

impl CornerClassifier {
    /// Creates a classifier with the given turning-angle threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not within `[0, π]`.
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=PI).contains(&threshold) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "threshold",
                value: threshold,
                min: 0.0,
                max: PI,
            }
            .into());
        }
        Ok(Self { threshold })
    }

    /// Returns the turning-angle threshold in radians.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns a copy of `shape` with every `is_corner` flag recomputed.
    ///
    /// Only neighbours inside the shape are considered.
    #[must_use]
    pub fn classify(&self, shape: &Shape) -> Shape {
        let source = shape.points();
        let n = source.len();
        let mut result = shape.clone();

        for (i, point) in result.points_mut().iter_mut().enumerate() {
            point.is_corner = if i == 0 || i + 1 == n {
                true
            } else {
                let angle = turning_angle(
                    &source[i - 1].position,
                    &source[i].position,
                    &source[i + 1].position,
                );
                angle >= self.threshold
            };
        }

        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn rejects_threshold_out_of_range() {
        assert!(CornerClassifier::new(-0.1).is_err());
        assert!(CornerClassifier::new(PI + 0.1).is_err());
        assert!(CornerClassifier::new(f64::NAN).is_err());
        assert!(CornerClassifier::new(0.0).is_ok());
        assert!(CornerClassifier::new(PI).is_ok());
    }

    #[test]
    fn square_corners_and_straight_midpoints() {
        // An L with a midpoint on each leg.
        let shape = Shape::new(vec![
            Point::smooth(0.0, 0.0),
            Point::smooth(1.0, 0.0),
            Point::smooth(2.0, 0.0),
            Point::smooth(2.0, 1.0),
            Point::smooth(2.0, 2.0),
        ]);
        let classified = CornerClassifier::new(FRAC_PI_4).unwrap().classify(&shape);
        let flags: Vec<bool> = classified.iter().map(|p| p.is_corner).collect();
        assert_eq!(flags, vec![true, false, true, false, true]);
    }

    #[test]
    fn source_shape_is_untouched() {
        let shape = Shape::new(vec![Point::smooth(0.0, 0.0), Point::smooth(1.0, 0.0)]);
        let classified = CornerClassifier::new(FRAC_PI_4).unwrap().classify(&shape);
        assert!(shape.iter().all(|p| !p.is_corner));
        assert!(classified.iter().all(|p| p.is_corner));
    }

    #[test]
    fn empty_shape() {
        let classified = CornerClassifier::new(FRAC_PI_4)
            .unwrap()
            .classify(&Shape::default());
        assert!(classified.is_empty());
    }
}
