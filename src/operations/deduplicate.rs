use crate::geometry::{Graphic, Shape};

/// Removes consecutive coincident points inside each shape.
///
/// A point is dropped when it coincides with the last point kept from the
/// same shape, so the first point of every shape always survives and runs of
/// any length collapse to one sample. Shapes are never merged or removed;
/// the output has the same number of shapes as the input.
pub struct Deduplicate<'a> {
    graphic: &'a Graphic,
}

impl<'a> Deduplicate<'a> {
    /// Creates a new `Deduplicate` operation.
    #[must_use]
    pub fn new(graphic: &'a Graphic) -> Self {
        Self { graphic }
    }

    /// Executes the operation, returning a new graphic.
    #[must_use]
    pub fn execute(&self) -> Graphic {
        let mut result = Graphic::with_capacity(self.graphic.len());
        for shape in self.graphic.shapes() {
            result.push(dedupe_shape(shape));
        }
        result
    }
}

fn dedupe_shape(shape: &Shape) -> Shape {
    let mut kept = Shape::with_capacity(shape.len());
    for point in shape {
        if kept.last().is_some_and(|last| point.is_coincident(last)) {
            continue;
        }
        kept.push(*point);
    }
    kept
}
