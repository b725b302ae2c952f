use super::Point;

/// A flat, device-ready sample stream.
///
/// Each point is one fixed time slice of the scanner; blanked points move the
/// mirrors with the beam off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    points: Vec<Point>,
}

impl Frame {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the frame and returns its samples.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of beam-off samples.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_blanked).count()
    }

    /// Sum of distances between consecutive samples, lit or not.
    #[must_use]
    pub fn travel_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

impl From<Vec<Point>> for Frame {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_frame() {
        let frame = Frame::default();
        assert!(frame.is_empty());
        assert_eq!(frame.blank_count(), 0);
        assert!(frame.travel_length().abs() < f64::EPSILON);
    }

    #[test]
    fn blank_count_and_travel() {
        let frame = Frame::new(vec![
            Point::corner(0.0, 0.0).blanked(),
            Point::corner(0.0, 0.0),
            Point::corner(3.0, 4.0),
            Point::corner(3.0, 4.0).blanked(),
        ]);
        assert_eq!(frame.len(), 4);
        assert_eq!(frame.blank_count(), 2);
        assert_relative_eq!(frame.travel_length(), 5.0, epsilon = 1e-12);
    }
}
