use crate::error::{Result, SettingsError};
use crate::geometry::{Frame, Point};
use crate::settings::{add_samples, validate_max_travel, MAX_FRAME_SAMPLES};

/// Subdivides long straight jumps between corners.
///
/// For each consecutive pair `(current, next)` where both are corners, `next`
/// is lit and their distance exceeds `max_travel`, `floor(distance /
/// max_travel)` samples are inserted at parameters `k / (steps + 1)` along the
/// segment. Inserted samples are lit and are not corners.
pub struct InterpolateTravel<'a> {
    frame: &'a Frame,
    max_travel: f64,
}

impl<'a> InterpolateTravel<'a> {
    /// Creates a new `InterpolateTravel` operation.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_travel` is not a positive distance.
    pub fn new(frame: &'a Frame, max_travel: f64) -> Result<Self> {
        validate_max_travel(max_travel)?;
        Ok(Self { frame, max_travel })
    }

    /// Executes the operation, returning the interpolated frame.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TooManySamples`] if `max_travel` is so small
    /// relative to the jumps in the frame that the result would exceed
    /// [`MAX_FRAME_SAMPLES`].
    pub fn execute(&self) -> Result<Frame> {
        let pts = self.frame.points();
        let mut steps = Vec::with_capacity(pts.len());
        let mut total = pts.len();
        for (i, point) in pts.iter().enumerate() {
            let count = match pts.get(i + 1) {
                Some(next) => self.steps_between(point, next)?,
                None => 0,
            };
            total = add_samples(total, count)?;
            steps.push(count);
        }

        let mut points = Vec::with_capacity(total);
        for (i, (point, &count)) in pts.iter().zip(&steps).enumerate() {
            points.push(*point);
            if count == 0 {
                continue;
            }

            let next = &pts[i + 1];
            #[allow(clippy::cast_precision_loss)]
            let increment = 1.0 / (count + 1) as f64;
            for k in 1..=count {
                #[allow(clippy::cast_precision_loss)]
                let t = increment * k as f64;
                points.push(point.point_between(next, t));
            }
        }

        Ok(Frame::new(points))
    }

    /// Number of samples inserted between `current` and `next`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn steps_between(&self, current: &Point, next: &Point) -> Result<usize> {
        if next.is_blanked || !current.is_corner || !next.is_corner {
            return Ok(0);
        }
        let distance = current.distance(next);
        if distance <= self.max_travel {
            return Ok(0);
        }
        let steps = (distance / self.max_travel).floor();
        if steps > MAX_FRAME_SAMPLES as f64 {
            return Err(SettingsError::TooManySamples {
                limit: MAX_FRAME_SAMPLES,
            }
            .into());
        }
        Ok(steps as usize)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GalvoError;
    use approx::assert_relative_eq;

    fn run(frame: &Frame, max_travel: f64) -> Frame {
        InterpolateTravel::new(frame, max_travel)
            .unwrap()
            .execute()
            .unwrap()
    }

    #[test]
    fn rejects_non_positive_max_travel() {
        let frame = Frame::default();
        assert!(InterpolateTravel::new(&frame, 0.0).is_err());
        assert!(InterpolateTravel::new(&frame, -5.0).is_err());
        assert!(InterpolateTravel::new(&frame, f64::NAN).is_err());
    }

    #[test]
    fn rejects_subdivision_beyond_sample_limit() {
        let frame = Frame::new(vec![Point::corner(0.0, 0.0), Point::corner(1.0, 0.0)]);
        for max_travel in [1e-300, f64::MIN_POSITIVE, 1e-9] {
            let result = InterpolateTravel::new(&frame, max_travel).unwrap().execute();
            assert!(
                matches!(
                    result,
                    Err(GalvoError::Settings(SettingsError::TooManySamples { .. }))
                ),
                "accepted {max_travel}"
            );
        }
    }

    #[test]
    fn many_jumps_add_up_against_sample_limit() {
        // Each jump alone fits, together they do not.
        let per_jump = MAX_FRAME_SAMPLES / 2;
        #[allow(clippy::cast_precision_loss)]
        let max_travel = 1.0 / per_jump as f64;
        let frame = Frame::new(vec![
            Point::corner(0.0, 0.0),
            Point::corner(1.0, 0.0),
            Point::corner(2.0, 0.0),
            Point::corner(3.0, 0.0),
        ]);
        assert!(InterpolateTravel::new(&frame, max_travel)
            .unwrap()
            .execute()
            .is_err());
    }

    #[test]
    fn splits_long_corner_jump() {
        let frame = Frame::new(vec![Point::corner(0.0, 0.0), Point::corner(100.0, 0.0)]);
        let result = run(&frame, 30.0);
        let xs: Vec<f64> = result.points().iter().map(|p| p.position.x).collect();

        assert_eq!(xs.len(), 5);
        for (x, expected) in xs.iter().zip([0.0, 25.0, 50.0, 75.0, 100.0]) {
            assert_relative_eq!(*x, expected, epsilon = 1e-9);
        }
        assert!(result.points()[1..4].iter().all(|p| !p.is_corner && !p.is_blanked));
    }

    #[test]
    fn inserted_points_lie_on_segment() {
        let a = Point::corner(1.0, 2.0);
        let b = Point::corner(7.0, 10.0); // distance 10
        let frame = Frame::new(vec![a, b]);
        let result = run(&frame, 3.0);
        let pts = result.points();

        assert_eq!(pts.len(), 2 + 3);
        for p in &pts[1..4] {
            let along = a.distance(p) + p.distance(&b);
            assert_relative_eq!(along, 10.0, epsilon = 1e-9);
        }
        for w in pts.windows(2) {
            assert_relative_eq!(w[0].distance(&w[1]), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn short_jump_untouched() {
        let frame = Frame::new(vec![Point::corner(0.0, 0.0), Point::corner(30.0, 0.0)]);
        assert_eq!(run(&frame, 30.0).len(), 2);
    }

    #[test]
    fn no_insertion_into_blank() {
        let frame = Frame::new(vec![
            Point::corner(0.0, 0.0),
            Point::corner(100.0, 0.0).blanked(),
        ]);
        assert_eq!(run(&frame, 10.0).len(), 2);
    }

    #[test]
    fn blanked_start_still_subdivides() {
        let frame = Frame::new(vec![
            Point::corner(0.0, 0.0).blanked(),
            Point::corner(100.0, 0.0),
        ]);
        assert_eq!(run(&frame, 50.0).len(), 2 + 2);
    }

    #[test]
    fn requires_corners_at_both_ends() {
        let smooth_start = Frame::new(vec![Point::smooth(0.0, 0.0), Point::corner(100.0, 0.0)]);
        let smooth_end = Frame::new(vec![Point::corner(0.0, 0.0), Point::smooth(100.0, 0.0)]);
        assert_eq!(run(&smooth_start, 10.0).len(), 2);
        assert_eq!(run(&smooth_end, 10.0).len(), 2);
    }

    #[test]
    fn infinite_max_travel_is_identity() {
        let frame = Frame::new(vec![Point::corner(0.0, 0.0), Point::corner(1e12, 0.0)]);
        assert_eq!(run(&frame, f64::INFINITY), frame);
    }

    #[test]
    fn empty_and_single_point_frames() {
        assert!(run(&Frame::default(), 1.0).is_empty());
        let single = Frame::new(vec![Point::corner(0.0, 0.0)]);
        assert_eq!(run(&single, 1.0), single);
    }
}
