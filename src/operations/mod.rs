mod deduplicate;
mod enhance_angles;
mod flatten;
mod interpolate_travel;
mod reorder;

pub use deduplicate::Deduplicate;
pub use enhance_angles::EnhanceAngles;
pub use flatten::Flatten;
pub use interpolate_travel::InterpolateTravel;
pub use reorder::{IdentityReorder, Reorder};
