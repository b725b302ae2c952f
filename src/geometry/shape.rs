use super::Point;

/// One continuous pen stroke: points in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    /// Creates a shape from points in draw order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates an empty shape with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point to the end of the stroke.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
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
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Shape {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A complete drawing: shapes in draw order.
///
/// The optimizer treats a graphic as an immutable input and never changes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graphic {
    shapes: Vec<Shape>,
}

impl Graphic {
    #[must_use]
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Creates an empty graphic with room for `capacity` shapes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a shape after all existing shapes.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Consumes the graphic and returns its shapes.
    #[must_use]
    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    /// Number of shapes, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Total number of points over all shapes.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.shapes.iter().map(Shape::len).sum()
    }
}

impl From<Vec<Shape>> for Graphic {
    fn from(shapes: Vec<Shape>) -> Self {
        Self::new(shapes)
    }
}

impl FromIterator<Shape> for Graphic {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
