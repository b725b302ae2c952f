pub mod corner;
pub mod frame;
pub mod point;
pub mod shape;

pub use corner::CornerClassifier;
pub use frame::Frame;
pub use point::{Color, Point};
pub use shape::{Graphic, Shape};
