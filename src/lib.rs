//! Laser scan-frame optimizer.
//!
//! Converts a [`Graphic`] (disconnected polyline strokes) into a single
//! [`Frame`] of fixed time-slice samples for a galvo scanner, adding the
//! blanking, dwell and travel subdivision the hardware needs to draw it
//! cleanly.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod optimizer;
pub mod settings;

pub use error::{GalvoError, Result};
pub use geometry::{Color, CornerClassifier, Frame, Graphic, Point, Shape};
pub use optimizer::{optimize, Optimizer};
pub use settings::Settings;
