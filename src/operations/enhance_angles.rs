use crate::error::Result;
use crate::geometry::{Frame, Point};
use crate::math::angle::angle_dependent_count;
use crate::settings::{add_samples, Settings};

/// Inserts repeated samples so the scanner dwells where it has to settle.
///
/// Every input point is emitted exactly once, preceded by zero or more
/// copies of itself. The number of copies is the sum of two independent
/// rules:
///
/// **Blank rule** (blanked points only): `extra_blank_points_start` when the
/// previous sample is missing or blanked, replaced by
/// `extra_blank_points_end` when the next sample is missing or blanked.
///
/// **Corner rule** (corners): `extra_corner_points`, replaced by
/// `extra_corner_points_start` when the previous sample is missing or
/// blanked, then by `extra_corner_points_end` when the next one is. With
/// `analyze_corner_angles` the turning-angle term is added on top.
///
/// **Smooth rule** (non-corners): nothing, unless a neighbour is missing or
/// blanked, in which case the start or end count (end wins) plus the
/// turning-angle term.
///
/// The turning-angle term is `floor((1 - angle / π) *
/// extra_corner_points_angle_dependent)`.
pub struct EnhanceAngles<'a> {
    frame: &'a Frame,
    settings: &'a Settings,
}

/// Where a sample sits relative to the blank runs around it.
#[derive(Debug, Clone, Copy)]
struct Neighbourhood {
    /// Previous sample is missing or blanked.
    opens: bool,
    /// Next sample is missing or blanked.
    closes: bool,
}

impl Neighbourhood {
    fn of(previous: Option<&Point>, next: Option<&Point>) -> Self {
        Self {
            opens: previous.is_none_or(|p| p.is_blanked),
            closes: next.is_none_or(|p| p.is_blanked),
        }
    }

    /// Picks `end` over `start` over `middle`, in that order of precedence.
    fn select(self, middle: usize, start: usize, end: usize) -> usize {
        if self.closes {
            end
        } else if self.opens {
            start
        } else {
            middle
        }
    }
}

impl<'a> EnhanceAngles<'a> {
    /// Creates a new `EnhanceAngles` operation.
    #[must_use]
    pub fn new(frame: &'a Frame, settings: &'a Settings) -> Self {
        Self { frame, settings }
    }

    /// Executes the operation, returning the enhanced frame.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TooManySamples`](crate::error::SettingsError)
    /// if the extra counts would grow the frame past
    /// [`MAX_FRAME_SAMPLES`](crate::settings::MAX_FRAME_SAMPLES).
    pub fn execute(&self) -> Result<Frame> {
        let counts = self.extra_counts()?;
        let total = counts
            .iter()
            .try_fold(self.frame.len(), |total, &extra| add_samples(total, extra))?;
        let mut points = Vec::with_capacity(total);

        for (point, &extra) in self.frame.points().iter().zip(&counts) {
            points.extend(std::iter::repeat_n(*point, extra));
            points.push(*point);
        }

        Ok(Frame::new(points))
    }

    /// Number of copies inserted before each input sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the count for a single sample exceeds the frame
    /// sample limit.
    pub fn extra_counts(&self) -> Result<Vec<usize>> {
        let pts = self.frame.points();
        (0..pts.len())
            .map(|i| {
                let previous = i.checked_sub(1).and_then(|j| pts.get(j));
                let hood = Neighbourhood::of(previous, pts.get(i + 1));
                add_samples(
                    self.blank_extra(&pts[i], hood),
                    self.shape_extra(&pts[i], hood)?,
                )
            })
            .collect()
    }

    fn blank_extra(&self, point: &Point, hood: Neighbourhood) -> usize {
        if !point.is_blanked {
            return 0;
        }
        let s = self.settings;
        hood.select(0, s.extra_blank_points_start, s.extra_blank_points_end)
    }

    fn shape_extra(&self, point: &Point, hood: Neighbourhood) -> Result<usize> {
        let s = self.settings;
        let angle_term = || {
            angle_dependent_count(point.turning_angle, s.extra_corner_points_angle_dependent)
        };

        if point.is_corner {
            let base = hood.select(
                s.extra_corner_points,
                s.extra_corner_points_start,
                s.extra_corner_points_end,
            );
            if s.analyze_corner_angles {
                add_samples(base, angle_term())
            } else {
                Ok(base)
            }
        } else if hood.opens || hood.closes {
            let base = hood.select(0, s.extra_corner_points_start, s.extra_corner_points_end);
            add_samples(base, angle_term())
        } else {
            Ok(0)
        }
    }
}
