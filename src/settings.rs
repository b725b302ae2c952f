#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Upper bound on the number of samples a single optimized frame may hold.
pub const MAX_FRAME_SAMPLES: usize = 1 << 26;

/// Tuning parameters for one optimization run.
///
/// All `extra_*` counts are numbers of repeated samples, i.e. time slices the
/// scanner dwells on a spot. Which count applies to a given point is decided
/// by [`EnhanceAngles`](crate::operations::EnhanceAngles).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Run the reorder stage before flattening.
    pub reorder_frame: bool,

    /// Add dwell samples at corners in proportion to how sharply the path turns.
    pub analyze_corner_angles: bool,

    /// Repeats of a blank that starts a blank run.
    pub extra_blank_points_start: usize,

    /// Repeats of a blank that ends a blank run.
    pub extra_blank_points_end: usize,

    /// Repeats of a corner in the middle of a lit stroke.
    pub extra_corner_points: usize,

    /// Repeats of the first lit point after a blank.
    pub extra_corner_points_start: usize,

    /// Repeats of the last lit point before a blank.
    pub extra_corner_points_end: usize,

    /// Scale of the turning-angle term added on top of the corner counts.
    pub extra_corner_points_angle_dependent: usize,

    /// Longest allowed step between two consecutive corner samples.
    /// `f64::INFINITY` disables subdivision.
    pub max_travel: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reorder_frame: false,
            analyze_corner_angles: true,
            extra_blank_points_start: 3,
            extra_blank_points_end: 3,
            extra_corner_points: 2,
            extra_corner_points_start: 3,
            extra_corner_points_end: 3,
            extra_corner_points_angle_dependent: 6,
            max_travel: 0.05,
        }
    }
}

impl Settings {
    /// Settings that leave the sample count untouched apart from blanking:
    /// no extra dwell samples and no travel subdivision.
    #[must_use]
    pub fn passthrough() -> Self {
        Self {
            reorder_frame: false,
            analyze_corner_angles: false,
            extra_blank_points_start: 0,
            extra_blank_points_end: 0,
            extra_corner_points: 0,
            extra_corner_points_start: 0,
            extra_corner_points_end: 0,
            extra_corner_points_angle_dependent: 0,
            max_travel: f64::INFINITY,
        }
    }

    /// Checks the settings before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidMaxTravel`] if `max_travel` is not a
    /// positive distance (zero, negative or NaN).
    pub fn validate(&self) -> Result<()> {
        validate_max_travel(self.max_travel)
    }
}

pub(crate) fn validate_max_travel(max_travel: f64) -> Result<()> {
    // Written so that NaN fails too.
    if max_travel > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidMaxTravel(max_travel).into())
    }
}

/// Adds `extra` samples to `total`, failing once the frame outgrows
/// [`MAX_FRAME_SAMPLES`].
pub(crate) fn add_samples(total: usize, extra: usize) -> Result<usize> {
    total
        .checked_add(extra)
        .filter(|&sum| sum <= MAX_FRAME_SAMPLES)
        .ok_or_else(|| {
            SettingsError::TooManySamples {
                limit: MAX_FRAME_SAMPLES,
            }
            .into()
        })
}
