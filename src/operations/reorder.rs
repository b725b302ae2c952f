use std::fmt;

use crate::geometry::Graphic;

/// Strategy for choosing the order in which shapes are drawn.
///
/// Implementations may only change the order of shapes. The points inside a
/// shape, and their order, must come out unchanged.
pub trait Reorder: fmt::Debug + Send {
    /// Returns the shapes of `graphic` in drawing order.
    fn reorder(&self, graphic: Graphic) -> Graphic;
}

/// Keeps shapes in the order they were drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityReorder;

impl Reorder for IdentityReorder {
    fn reorder(&self, graphic: Graphic) -> Graphic {
        graphic
    }
}
