use thiserror::Error;

/// Errors surfaced by bootstrap detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DetectError {
    /// [`crate::Detector::detect`] was invoked while the detector is
    /// disabled. The caller must enable the detector before running bootstrap
    /// detection.
    #[error("the detector must be enabled before bootstrap detection runs")]
    Disabled,
}
