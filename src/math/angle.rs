use std::f64::consts::PI;

use super::{Point3, TOLERANCE};

/// Returns the turning angle at `current` for a path `previous → current → next`.
///
/// This is the angle between the incoming vector `current - previous` and the
/// outgoing vector `current → next`, in `[0, π]`:
/// - `0` = the path continues straight through
/// - `π` = the path reverses completely
///
/// If either vector is shorter than [`TOLERANCE`] the direction is undefined
/// and `0` is returned.
#[must_use]
pub fn turning_angle(previous: &Point3, current: &Point3, next: &Point3) -> f64 {
    let incoming = current - previous;
    let outgoing = next - current;

    let len_in = incoming.norm();
    let len_out = outgoing.norm();
    if len_in < TOLERANCE || len_out < TOLERANCE {
        return 0.0;
    }

    // Rounding can push the cosine slightly outside [-1, 1].
    let cos = (incoming.dot(&outgoing) / (len_in * len_out)).clamp(-1.0, 1.0);
    cos.acos()
}

/// Number of extra dwell samples contributed by a turning angle.
///
/// `floor((1 - angle / π) * factor)`: the full `factor` at an angle of `0`,
/// nothing at `π`. Angles outside `[0, π]` are clamped first.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn angle_dependent_count(angle: f64, factor: usize) -> usize {
    if factor == 0 {
        return 0;
    }
    let weight = 1.0 - angle.clamp(0.0, PI) / PI;
    (weight * factor as f64).floor() as usize
}
