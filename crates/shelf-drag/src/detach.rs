//! Detach decision

/// Whether a drag has been pulled far enough off the strip to become a
/// detach. The direction of travel does not matter.
pub fn should_detach(vertical_displacement: f64, threshold: f64) -> bool {
    vertical_displacement.abs() > threshold
}
