use crate::geometry::{Frame, Graphic, Shape};
use crate::math::angle::turning_angle;
use crate::math::Point3;

/// Concatenates the shapes of a graphic into a single frame.
///
/// Every non-empty shape is wrapped in two blanked samples: a copy of its
/// first point before it and a copy of its last point after it, so the
/// scanner moves between strokes with the beam off.
///
/// Each lit point gets its
/// [`turning_angle`](crate::geometry::Point::turning_angle) from its
/// neighbours:
/// - previous: the last lit point emitted so far, which at a shape boundary
///   is the last point of an earlier shape
/// - next: the following point of the same shape, or for the last point the
///   first point of the immediately following shape (if that shape is
///   non-empty)
///
/// A point missing either neighbour gets `0`. Blank copies are never used as
/// neighbours.
pub struct Flatten<'a> {
    graphic: &'a Graphic,
}

impl<'a> Flatten<'a> {
    /// Creates a new `Flatten` operation.
    #[must_use]
    pub fn new(graphic: &'a Graphic) -> Self {
        Self { graphic }
    }

    /// Number of samples [`execute`](Self::execute) will produce.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.graphic
            .shapes()
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.len() + 2)
            .sum()
    }

    /// Executes the operation, returning the flattened frame.
    #[must_use]
    pub fn execute(&self) -> Frame {
        let shapes = self.graphic.shapes();
        let mut points = Vec::with_capacity(self.output_len());
        let mut previous: Option<Point3> = None;

        for (i, shape) in shapes.iter().enumerate() {
            let (Some(first), Some(last)) = (shape.first(), shape.last()) else {
                continue;
            };

            // Entry blank.
            points.push(first.blanked());

            let following = shapes.get(i + 1).and_then(Shape::first);
            let source = shape.points();

            for (j, point) in source.iter().enumerate() {
                let next = source.get(j + 1).or(following);
                let mut annotated = *point;
                annotated.turning_angle = match (&previous, next) {
                    (Some(prev), Some(next)) => {
                        turning_angle(prev, &point.position, &next.position)
                    }
                    _ => 0.0,
                };
                points.push(annotated);
                previous = Some(point.position);
            }

            // Exit blank, a copy of the annotated last point.
            let exit = points.last().copied().unwrap_or(*last);
            points.push(exit.blanked());
        }

        Frame::new(points)
    }
}
