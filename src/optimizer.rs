use tracing::{debug, debug_span, warn};

use crate::error::Result;
use crate::geometry::{Frame, Graphic};
use crate::operations::{
    Deduplicate, EnhanceAngles, Flatten, IdentityReorder, InterpolateTravel, Reorder,
};
use crate::settings::Settings;

/// Runs the full optimization pipeline on a graphic.
///
/// Stages run strictly in order, each on the complete output of the one
/// before:
///
/// 1. [`Deduplicate`]
/// 2. [`Reorder`] (only with `settings.reorder_frame`)
/// 3. [`Flatten`]
/// 4. [`EnhanceAngles`]
/// 5. [`InterpolateTravel`]
///
/// # Errors
///
/// Returns an error if `settings` fails [`Settings::validate`]; no stage runs
/// in that case. Also fails if the settings would grow the frame past
/// [`MAX_FRAME_SAMPLES`](crate::settings::MAX_FRAME_SAMPLES).
pub fn optimize(graphic: &Graphic, settings: &Settings) -> Result<Frame> {
    run_pipeline(graphic, settings, &IdentityReorder)
}

fn run_pipeline(
    graphic: &Graphic,
    settings: &Settings,
    reorderer: &dyn Reorder,
) -> Result<Frame> {
    let span = debug_span!("optimize", shapes = graphic.len());
    let _guard = span.enter();

    if let Err(err) = settings.validate() {
        warn!(%err, "rejecting optimizer settings");
        return Err(err);
    }

    let mut drawing = Deduplicate::new(graphic).execute();
    debug!(
        points_in = graphic.point_count(),
        points_out = drawing.point_count(),
        "deduplicated"
    );

    if settings.reorder_frame {
        drawing = reorderer.reorder(drawing);
        debug!(?reorderer, "reordered shapes");
    }

    let flat = Flatten::new(&drawing).execute();
    debug!(samples = flat.len(), blanks = flat.blank_count(), "flattened");

    let enhanced = EnhanceAngles::new(&flat, settings).execute()?;
    debug!(samples = enhanced.len(), "enhanced angles");

    let frame = InterpolateTravel::new(&enhanced, settings.max_travel)?.execute()?;
    debug!(samples = frame.len(), "interpolated travel");

    Ok(frame)
}

/// Turns graphics into scanner frames and keeps the most recent result.
///
/// An optimizer owns its [`Settings`]; they can be tuned through
/// [`settings_mut`](Self::settings_mut) or swapped with
/// [`set_settings`](Self::set_settings) between runs. A run never changes
/// the settings or the input graphic, so one graphic can be optimized
/// repeatedly under different settings.
#[derive(Debug)]
pub struct Optimizer {
    settings: Settings,
    reorderer: Box<dyn Reorder>,
    frame: Frame,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Creates an optimizer with default settings and no result yet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates an optimizer with the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            reorderer: Box::new(IdentityReorder),
            frame: Frame::default(),
        }
    }

    /// Replaces the shape-ordering strategy used when `reorder_frame` is set.
    #[must_use]
    pub fn with_reorderer(mut self, reorderer: impl Reorder + 'static) -> Self {
        self.reorderer = Box::new(reorderer);
        self
    }

    /// Optimizes `graphic`, replacing the stored frame.
    ///
    /// On failure the stored frame is cleared rather than left holding the
    /// result of an earlier run.
    ///
    /// # Errors
    ///
    /// Returns an error if the current settings are invalid or would produce
    /// an oversized frame.
    pub fn optimize(&mut self, graphic: &Graphic) -> Result<()> {
        self.frame = Frame::default();
        self.frame = run_pipeline(graphic, &self.settings, self.reorderer.as_ref())?;
        Ok(())
    }

    /// Returns the frame produced by the last successful
    /// [`optimize`](Self::optimize); empty before the first run.
    #[must_use]
    pub fn optimized_frame(&self) -> &Frame {
        &self.frame
    }

    /// Moves the stored frame out, leaving an empty one behind.
    pub fn take_frame(&mut self) -> Frame {
        std::mem::take(&mut self.frame)
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Replaces the settings used by subsequent runs.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}
